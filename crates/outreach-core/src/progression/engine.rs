//! Progression snapshot computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::interaction::{most_recent, Interaction};
use crate::status::LifecycleStatus;

use super::rules::{find_rule, suggest};
use super::scoring::relationship_strength;

/// Strength below which the relationship needs more frequent touchpoints.
pub const LOW_STRENGTH_THRESHOLD: u8 = 30;
/// Days of silence after which a follow-up is due.
pub const FOLLOW_UP_AFTER_DAYS: u32 = 7;

/// Whole days since the last contact.
///
/// `Never` means no contact date is known. It is staler than any finite
/// number of days, so silence-gated rules fire for contacts nobody followed
/// up on. Serializes as a number, or `null` for `Never`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum DaysSinceContact {
    Known(u32),
    Never,
}

impl DaysSinceContact {
    /// Days elapsed from `last_contact` to `now`, floored and clamped at zero.
    pub fn between(last_contact: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match last_contact {
            None => DaysSinceContact::Never,
            Some(at) => {
                let days = (now - at).num_days().max(0);
                DaysSinceContact::Known(u32::try_from(days).unwrap_or(u32::MAX))
            }
        }
    }

    /// Strictly more than `days` have passed.
    pub fn exceeds(&self, days: u32) -> bool {
        match self {
            DaysSinceContact::Known(n) => *n > days,
            DaysSinceContact::Never => true,
        }
    }

    pub fn days(&self) -> Option<u32> {
        match self {
            DaysSinceContact::Known(n) => Some(*n),
            DaysSinceContact::Never => None,
        }
    }
}

impl fmt::Display for DaysSinceContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysSinceContact::Known(1) => write!(f, "1 day"),
            DaysSinceContact::Known(n) => write!(f, "{n} days"),
            DaysSinceContact::Never => write!(f, "never contacted"),
        }
    }
}

/// Snapshot of where a relationship stands. Recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusProgression {
    pub current_status: LifecycleStatus,
    pub next_suggested_status: Option<LifecycleStatus>,
    pub progression_reason: Option<String>,
    pub interactions: Vec<Interaction>,
    pub last_interaction: Option<Interaction>,
    /// 0..=100
    pub relationship_strength: u8,
    pub days_since_last_contact: DaysSinceContact,
}

impl StatusProgression {
    /// The suggested move is a regression rather than a forward step.
    pub fn is_regression(&self) -> bool {
        self.next_suggested_status
            .and_then(|to| find_rule(self.current_status, to))
            .is_some_and(|rule| !rule.suggested)
    }
}

/// Compute a progression snapshot as of now.
pub fn compute_progression(
    current_status: LifecycleStatus,
    interactions: &[Interaction],
    last_contact_date: Option<DateTime<Utc>>,
) -> StatusProgression {
    compute_progression_at(current_status, interactions, last_contact_date, Utc::now())
}

/// Compute a progression snapshot as of `now`.
pub fn compute_progression_at(
    current_status: LifecycleStatus,
    interactions: &[Interaction],
    last_contact_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> StatusProgression {
    let days_since_last_contact = DaysSinceContact::between(last_contact_date, now);
    let strength = relationship_strength(interactions);
    let rule = suggest(current_status, interactions, days_since_last_contact);

    tracing::debug!(
        status = %current_status,
        interactions = interactions.len(),
        strength,
        days = ?days_since_last_contact,
        suggested = ?rule.map(|r| r.to),
        "computed status progression"
    );

    StatusProgression {
        current_status,
        next_suggested_status: rule.map(|r| r.to),
        progression_reason: rule.map(|r| r.description.to_string()),
        interactions: interactions.to_vec(),
        last_interaction: most_recent(interactions).cloned(),
        relationship_strength: strength,
        days_since_last_contact,
    }
}

/// Human-readable nudges for a progression, in display order.
///
/// Each check is independent, so several can apply at once.
pub fn explain_progression(progression: &StatusProgression) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(next) = progression.next_suggested_status {
        let description = match find_rule(progression.current_status, next) {
            Some(rule) => rule.description.to_string(),
            None => progression
                .progression_reason
                .clone()
                .unwrap_or_else(|| next.info().description.to_string()),
        };
        suggestions.push(format!("Next step: {description}"));
    }

    if progression.relationship_strength < LOW_STRENGTH_THRESHOLD {
        suggestions.push(
            "Consider more frequent interactions to strengthen the relationship".to_string(),
        );
    }

    if progression.days_since_last_contact.exceeds(FOLLOW_UP_AFTER_DAYS) {
        suggestions.push("Time for a follow-up - relationships need regular nurturing".to_string());
    }

    if progression.interactions.is_empty() {
        suggestions.push("Start building the relationship with your first interaction".to_string());
    }

    suggestions
}
