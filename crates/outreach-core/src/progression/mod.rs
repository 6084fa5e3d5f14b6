//! Relationship status progression engine.
//!
//! Given a contact's lifecycle status and interaction log, the engine scores
//! the relationship, picks at most one transition worth suggesting, and
//! turns the result into short nudges for the user.
//!
//! Everything here is a pure function of its inputs. Nothing is stored and
//! no status is ever changed; callers apply a suggestion only after the user
//! confirms it, and should validate the edge with [`check_transition`].

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::{
    compute_progression, compute_progression_at, explain_progression, DaysSinceContact,
    StatusProgression, FOLLOW_UP_AFTER_DAYS, LOW_STRENGTH_THRESHOLD,
};
pub use rules::{check_transition, find_rule, rules_from, suggest, Gate, StatusTransitionRule, STATUS_TRANSITIONS};
pub use scoring::{relationship_strength, MAX_STRENGTH};
