//! Logged touchpoints with a contact.
//!
//! Interactions are append-only from the engine's point of view: callers
//! create them, and editing or deleting them happens outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of touchpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Email,
    Meeting,
    Call,
    #[serde(alias = "content_collab")]
    ContentCollaboration,
    Campaign,
    Note,
    /// Any kind this version doesn't know about. Weighs nothing in the
    /// strength score so records from newer producers still load.
    #[serde(other)]
    Unknown,
}

impl InteractionKind {
    pub fn label(&self) -> &'static str {
        match self {
            InteractionKind::Email => "Email",
            InteractionKind::Meeting => "Meeting",
            InteractionKind::Call => "Call",
            InteractionKind::ContentCollaboration => "Content collaboration",
            InteractionKind::Campaign => "Campaign",
            InteractionKind::Note => "Note",
            InteractionKind::Unknown => "Unknown",
        }
    }

    /// Base contribution to relationship strength.
    pub fn weight(&self) -> f64 {
        match self {
            InteractionKind::Email => 5.0,
            InteractionKind::Meeting => 20.0,
            InteractionKind::Call => 15.0,
            InteractionKind::ContentCollaboration => 25.0,
            InteractionKind::Campaign => 30.0,
            InteractionKind::Note => 2.0,
            InteractionKind::Unknown => 0.0,
        }
    }

    /// Kinds that count as an established collaboration.
    pub fn is_collaboration(&self) -> bool {
        matches!(
            self,
            InteractionKind::ContentCollaboration | InteractionKind::Campaign
        )
    }
}

/// How a touchpoint went.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Positive,
    Neutral,
    Negative,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Positive => "positive",
            Outcome::Neutral => "neutral",
            Outcome::Negative => "negative",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Outcome::Positive => 1.2,
            Outcome::Neutral => 1.0,
            Outcome::Negative => 0.5,
        }
    }
}

/// One logged touchpoint with a contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    pub id: String,
    #[serde(alias = "type")]
    pub kind: InteractionKind,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub timestamp: DateTime<Utc>,
    /// Missing outcomes score as neutral.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_reference: Option<String>,
}

impl Interaction {
    /// Create an interaction stamped with a fresh id and the current time.
    pub fn new(kind: InteractionKind, title: impl Into<String>) -> Self {
        Self::at(kind, title, Utc::now())
    }

    /// Create an interaction that happened at `timestamp`.
    pub fn at(kind: InteractionKind, title: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            description: String::new(),
            timestamp,
            outcome: None,
            next_action: None,
            attachment_reference: None,
        }
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_next_action(mut self, next_action: impl Into<String>) -> Self {
        self.next_action = Some(next_action.into());
        self
    }

    pub fn with_attachment(mut self, reference: impl Into<String>) -> Self {
        self.attachment_reference = Some(reference.into());
        self
    }

    /// Outcome multiplier, treating a missing outcome as neutral.
    pub fn outcome_multiplier(&self) -> f64 {
        self.outcome.unwrap_or(Outcome::Neutral).multiplier()
    }

    pub fn is_positive(&self) -> bool {
        self.outcome == Some(Outcome::Positive)
    }

    pub fn is_negative(&self) -> bool {
        self.outcome == Some(Outcome::Negative)
    }
}

/// Interactions sorted newest first, for activity lists.
///
/// Interactions sharing a timestamp keep their logged order.
pub fn newest_first(interactions: &[Interaction]) -> Vec<&Interaction> {
    let mut sorted: Vec<&Interaction> = interactions.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted
}

/// The most recent interaction by timestamp; the later entry wins a tie.
pub fn most_recent(interactions: &[Interaction]) -> Option<&Interaction> {
    interactions.iter().max_by_key(|i| i.timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn deserializes_legacy_content_collab_spelling() {
        let kind: InteractionKind = serde_json::from_str("\"content_collab\"").unwrap();
        assert_eq!(kind, InteractionKind::ContentCollaboration);
        let kind: InteractionKind = serde_json::from_str("\"content_collaboration\"").unwrap();
        assert_eq!(kind, InteractionKind::ContentCollaboration);
    }

    #[test]
    fn unrecognized_kind_becomes_unknown() {
        let kind: InteractionKind = serde_json::from_str("\"file_upload\"").unwrap();
        assert_eq!(kind, InteractionKind::Unknown);
        assert_eq!(kind.weight(), 0.0);
    }

    #[test]
    fn missing_outcome_is_neutral() {
        let i = Interaction::at(InteractionKind::Call, "Intro call", base());
        assert_eq!(i.outcome_multiplier(), 1.0);
        assert!(!i.is_positive());
        assert!(!i.is_negative());
    }

    #[test]
    fn new_interactions_get_distinct_ids() {
        let a = Interaction::new(InteractionKind::Email, "a");
        let b = Interaction::new(InteractionKind::Email, "b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn deserializes_minimal_record() {
        let json = r#"{
            "id": "i-1",
            "kind": "meeting",
            "title": "Coffee",
            "timestamp": "2026-03-01T09:00:00Z",
            "outcome": "positive"
        }"#;
        let i: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(i.kind, InteractionKind::Meeting);
        assert_eq!(i.outcome, Some(Outcome::Positive));
        assert!(i.description.is_empty());
        assert!(i.next_action.is_none());
    }

    #[test]
    fn accepts_type_as_kind_field() {
        let json = r#"{"id": "i-2", "type": "content_collab", "title": "Reel", "timestamp": "2026-03-02T09:00:00Z"}"#;
        let i: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(i.kind, InteractionKind::ContentCollaboration);
    }

    #[test]
    fn builder_sets_optional_metadata() {
        let i = Interaction::at(InteractionKind::Meeting, "Brand sync", base())
            .with_description("Talked rates")
            .with_next_action("Send contract")
            .with_attachment("https://files.example/brief.pdf");
        assert_eq!(i.description, "Talked rates");
        assert_eq!(i.next_action.as_deref(), Some("Send contract"));
        assert_eq!(i.attachment_reference.as_deref(), Some("https://files.example/brief.pdf"));
        let json = serde_json::to_value(&i).unwrap();
        assert_eq!(json["kind"], "meeting");
        assert!(json.get("outcome").is_none());
    }

    #[test]
    fn newest_first_orders_by_timestamp() {
        let log = vec![
            Interaction::at(InteractionKind::Email, "first", base()),
            Interaction::at(InteractionKind::Call, "third", base() + Duration::days(2)),
            Interaction::at(InteractionKind::Note, "second", base() + Duration::days(1)),
        ];
        let titles: Vec<&str> = newest_first(&log).iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[test]
    fn most_recent_prefers_later_entry_on_tie() {
        let log = vec![
            Interaction::at(InteractionKind::Email, "earlier entry", base()),
            Interaction::at(InteractionKind::Note, "later entry", base()),
        ];
        assert_eq!(most_recent(&log).unwrap().title, "later entry");
        assert!(most_recent(&[]).is_none());
    }
}
