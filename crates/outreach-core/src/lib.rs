//! # Outreach Core Library
//!
//! This library provides the decision logic behind the Outreach influencer
//! CRM. The UI, the CRUD backend and the CLI are thin callers over the same
//! pure engine: they hand in a contact's status and interaction log and show
//! whatever the engine suggests.
//!
//! ## Architecture
//!
//! - **Progression Engine**: scores relationship strength, suggests at most
//!   one lifecycle transition, and explains the result
//! - **Status model**: closed lifecycle statuses with display metadata and a
//!   fixed transition table
//! - **Pipeline**: funnel-wide summaries over many contacts
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`compute_progression`] / [`explain_progression`]: the engine entry points
//! - [`LifecycleStatus`]: where a contact sits in the funnel
//! - [`Interaction`]: one logged touchpoint
//! - [`Config`]: application configuration management

pub mod error;
pub mod interaction;
pub mod pipeline;
pub mod progression;
pub mod status;
pub mod storage;

pub use error::{ConfigError, CoreError, Result, TransitionError, ValidationError};
pub use interaction::{most_recent, newest_first, Interaction, InteractionKind, Outcome};
pub use pipeline::{summarize, summarize_at, ContactRecord, PipelineSummary};
pub use progression::{
    check_transition, compute_progression, compute_progression_at, explain_progression,
    find_rule, relationship_strength, rules_from, suggest, DaysSinceContact, StatusProgression,
    StatusTransitionRule, STATUS_TRANSITIONS,
};
pub use status::{LifecycleStatus, StatusInfo};
pub use storage::{Config, OutputFormat};
