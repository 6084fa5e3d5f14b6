//! Status transition table and eligibility gates.
//!
//! The table order is significant: when several rules leave the same status
//! the first eligible one is suggested, even if a later one also holds.

use serde::Serialize;

use crate::error::TransitionError;
use crate::interaction::Interaction;
use crate::status::LifecycleStatus;

use super::engine::DaysSinceContact;

/// Days of silence after which a contacted influencer is worth moving to warm.
pub const WARM_AFTER_DAYS: u32 = 3;
/// Days of silence after which a contacted influencer goes cold.
pub const CONTACTED_COLD_AFTER_DAYS: u32 = 14;
/// Days of silence after which a warm relationship goes cold.
pub const WARM_COLD_AFTER_DAYS: u32 = 30;

/// Condition that makes a rule eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Any positive outcome, or silent for more than the given days.
    PositiveOrSilentFor(u32),
    /// Any content collaboration or campaign interaction.
    Collaboration,
    /// Silent for more than the given days, or any negative outcome.
    SilentForOrNegative(u32),
    /// Silent for more than the given days.
    SilentFor(u32),
}

impl Gate {
    pub fn is_open(&self, interactions: &[Interaction], days: DaysSinceContact) -> bool {
        match *self {
            Gate::Always => true,
            Gate::PositiveOrSilentFor(limit) => {
                interactions.iter().any(Interaction::is_positive) || days.exceeds(limit)
            }
            Gate::Collaboration => interactions.iter().any(|i| i.kind.is_collaboration()),
            Gate::SilentForOrNegative(limit) => {
                days.exceeds(limit) || interactions.iter().any(Interaction::is_negative)
            }
            Gate::SilentFor(limit) => days.exceeds(limit),
        }
    }
}

/// One legal edge of the lifecycle graph.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusTransitionRule {
    pub from: LifecycleStatus,
    pub to: LifecycleStatus,
    pub trigger: &'static str,
    pub description: &'static str,
    /// Forward move worth recommending; `false` marks a regression that is
    /// only reported.
    pub suggested: bool,
    /// Human-readable checklist. The gate decides eligibility.
    pub requirements: &'static [&'static str],
    #[serde(skip)]
    pub gate: Gate,
}

impl StatusTransitionRule {
    pub fn is_eligible(&self, interactions: &[Interaction], days: DaysSinceContact) -> bool {
        self.gate.is_open(interactions, days)
    }
}

pub static STATUS_TRANSITIONS: [StatusTransitionRule; 5] = [
    StatusTransitionRule {
        from: LifecycleStatus::Saved,
        to: LifecycleStatus::Contacted,
        trigger: "First outreach sent",
        description: "Send initial email or message",
        suggested: true,
        requirements: &["Email sent", "Message delivered"],
        gate: Gate::Always,
    },
    StatusTransitionRule {
        from: LifecycleStatus::Contacted,
        to: LifecycleStatus::Warm,
        trigger: "Positive response received",
        description: "Influencer responded positively to outreach",
        suggested: true,
        requirements: &["Response received", "Positive sentiment"],
        gate: Gate::PositiveOrSilentFor(WARM_AFTER_DAYS),
    },
    StatusTransitionRule {
        from: LifecycleStatus::Warm,
        to: LifecycleStatus::Partnered,
        trigger: "Partnership established",
        description: "Formal partnership or collaboration agreement",
        suggested: true,
        requirements: &["Partnership agreement", "Collaboration confirmed"],
        gate: Gate::Collaboration,
    },
    StatusTransitionRule {
        from: LifecycleStatus::Contacted,
        to: LifecycleStatus::Cold,
        trigger: "No response or negative response",
        description: "Influencer not responding or declined",
        suggested: false,
        requirements: &["No response after 2 weeks", "Negative response"],
        gate: Gate::SilentForOrNegative(CONTACTED_COLD_AFTER_DAYS),
    },
    StatusTransitionRule {
        from: LifecycleStatus::Warm,
        to: LifecycleStatus::Cold,
        trigger: "Relationship cooled down",
        description: "Influencer became unresponsive or lost interest",
        suggested: false,
        requirements: &["No response after 1 month", "Lost interest"],
        gate: Gate::SilentFor(WARM_COLD_AFTER_DAYS),
    },
];

/// Rules leaving `status`, in table order.
pub fn rules_from(status: LifecycleStatus) -> impl Iterator<Item = &'static StatusTransitionRule> {
    STATUS_TRANSITIONS.iter().filter(move |rule| rule.from == status)
}

/// The rule for the edge `from → to`, if the table has one.
pub fn find_rule(from: LifecycleStatus, to: LifecycleStatus) -> Option<&'static StatusTransitionRule> {
    rules_from(from).find(|rule| rule.to == to)
}

/// Check a user-confirmed status change against the table.
///
/// Only the edge is checked, not eligibility: users may move a contact
/// along any legal edge whether or not it was suggested.
pub fn check_transition(
    from: LifecycleStatus,
    to: LifecycleStatus,
) -> Result<&'static StatusTransitionRule, TransitionError> {
    find_rule(from, to).ok_or(TransitionError { from, to })
}

/// First eligible rule leaving `current`.
pub fn suggest(
    current: LifecycleStatus,
    interactions: &[Interaction],
    days: DaysSinceContact,
) -> Option<&'static StatusTransitionRule> {
    rules_from(current).find(|rule| {
        let eligible = rule.is_eligible(interactions, days);
        tracing::trace!(from = %rule.from, to = %rule.to, eligible, "evaluated transition rule");
        eligible
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{InteractionKind, Outcome};
    use chrono::{TimeZone, Utc};

    fn log_of(kind: InteractionKind, outcome: Option<Outcome>) -> Vec<Interaction> {
        let at = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();
        let i = Interaction::at(kind, "logged", at);
        vec![match outcome {
            Some(o) => i.with_outcome(o),
            None => i,
        }]
    }

    fn next(current: LifecycleStatus, log: &[Interaction], days: DaysSinceContact) -> Option<LifecycleStatus> {
        suggest(current, log, days).map(|rule| rule.to)
    }

    #[test]
    fn saved_always_suggests_contacted() {
        assert_eq!(next(LifecycleStatus::Saved, &[], DaysSinceContact::Known(0)), Some(LifecycleStatus::Contacted));
        assert_eq!(next(LifecycleStatus::Saved, &[], DaysSinceContact::Never), Some(LifecycleStatus::Contacted));
        let negative = log_of(InteractionKind::Email, Some(Outcome::Negative));
        assert_eq!(next(LifecycleStatus::Saved, &negative, DaysSinceContact::Known(90)), Some(LifecycleStatus::Contacted));
    }

    #[test]
    fn contacted_with_positive_outcome_suggests_warm() {
        let log = log_of(InteractionKind::Email, Some(Outcome::Positive));
        assert_eq!(next(LifecycleStatus::Contacted, &log, DaysSinceContact::Known(0)), Some(LifecycleStatus::Warm));
    }

    #[test]
    fn contacted_warm_threshold_is_strictly_more_than_three_days() {
        assert_eq!(next(LifecycleStatus::Contacted, &[], DaysSinceContact::Known(3)), None);
        assert_eq!(next(LifecycleStatus::Contacted, &[], DaysSinceContact::Known(4)), Some(LifecycleStatus::Warm));
    }

    #[test]
    fn stale_contacted_without_interactions_hits_warm_first() {
        // Staleness past 14 days also opens the warm gate, which precedes cold
        let rule = suggest(LifecycleStatus::Contacted, &[], DaysSinceContact::Known(20)).unwrap();
        assert_eq!(rule.to, LifecycleStatus::Warm);
    }

    #[test]
    fn contacted_with_negative_outcome_suggests_cold() {
        let log = log_of(InteractionKind::Email, Some(Outcome::Negative));
        assert_eq!(next(LifecycleStatus::Contacted, &log, DaysSinceContact::Known(1)), Some(LifecycleStatus::Cold));
    }

    #[test]
    fn warm_with_campaign_suggests_partnered() {
        let log = log_of(InteractionKind::Campaign, None);
        assert_eq!(next(LifecycleStatus::Warm, &log, DaysSinceContact::Known(0)), Some(LifecycleStatus::Partnered));
        let log = log_of(InteractionKind::ContentCollaboration, Some(Outcome::Negative));
        assert_eq!(next(LifecycleStatus::Warm, &log, DaysSinceContact::Known(0)), Some(LifecycleStatus::Partnered));
    }

    #[test]
    fn warm_goes_cold_after_thirty_days() {
        assert_eq!(next(LifecycleStatus::Warm, &[], DaysSinceContact::Known(30)), None);
        assert_eq!(next(LifecycleStatus::Warm, &[], DaysSinceContact::Known(40)), Some(LifecycleStatus::Cold));
        assert_eq!(next(LifecycleStatus::Warm, &[], DaysSinceContact::Never), Some(LifecycleStatus::Cold));
    }

    #[test]
    fn warm_collaboration_beats_staleness() {
        let log = log_of(InteractionKind::Campaign, None);
        assert_eq!(next(LifecycleStatus::Warm, &log, DaysSinceContact::Known(45)), Some(LifecycleStatus::Partnered));
    }

    #[test]
    fn terminal_statuses_have_no_suggestion() {
        let log = log_of(InteractionKind::Campaign, Some(Outcome::Positive));
        for days in [DaysSinceContact::Known(0), DaysSinceContact::Known(400), DaysSinceContact::Never] {
            assert_eq!(next(LifecycleStatus::Cold, &log, days), None);
            assert_eq!(next(LifecycleStatus::Partnered, &log, days), None);
        }
    }

    #[test]
    fn first_rule_in_table_order_wins_when_both_hold() {
        let mut log = log_of(InteractionKind::Email, Some(Outcome::Positive));
        log.extend(log_of(InteractionKind::Call, Some(Outcome::Negative)));
        let rule = suggest(LifecycleStatus::Contacted, &log, DaysSinceContact::Known(20)).unwrap();
        assert_eq!(rule.to, LifecycleStatus::Warm);
        assert!(rule.suggested);
    }

    #[test]
    fn check_transition_accepts_table_edges_only() {
        for rule in &STATUS_TRANSITIONS {
            assert_eq!(check_transition(rule.from, rule.to).unwrap(), rule);
        }
        let err = check_transition(LifecycleStatus::Saved, LifecycleStatus::Partnered).unwrap_err();
        assert_eq!(
            err,
            TransitionError { from: LifecycleStatus::Saved, to: LifecycleStatus::Partnered }
        );
        assert!(check_transition(LifecycleStatus::Cold, LifecycleStatus::Warm).is_err());
    }

    #[test]
    fn each_edge_appears_once() {
        for rule in &STATUS_TRANSITIONS {
            let count = STATUS_TRANSITIONS
                .iter()
                .filter(|r| r.from == rule.from && r.to == rule.to)
                .count();
            assert_eq!(count, 1, "{} -> {}", rule.from, rule.to);
        }
    }

    #[test]
    fn rule_serializes_without_gate() {
        let json = serde_json::to_value(&STATUS_TRANSITIONS[0]).unwrap();
        assert_eq!(json["from"], "saved");
        assert_eq!(json["to"], "contacted");
        assert_eq!(json["suggested"], true);
        assert!(json.get("gate").is_none());
    }
}
