//! Lifecycle statuses of a contact in the outreach funnel.
//!
//!   SAVED ──> CONTACTED ──> WARM ──> PARTNERED
//!                 |           |
//!                 +──> COLD <─+
//!
//! A contact's status only changes through explicit user action. The
//! progression engine may suggest a move but never applies it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::progression::rules::rules_from;

/// Where a contact sits in the outreach funnel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStatus {
    /// Saved to the list, not yet contacted (initial state)
    Saved,
    /// Initial outreach sent
    Contacted,
    /// Positive response received
    Warm,
    /// No response or declined
    Cold,
    /// Partnership established
    Partnered,
}

impl LifecycleStatus {
    /// All statuses in funnel order.
    pub const ALL: [LifecycleStatus; 5] = [
        LifecycleStatus::Saved,
        LifecycleStatus::Contacted,
        LifecycleStatus::Warm,
        LifecycleStatus::Cold,
        LifecycleStatus::Partnered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleStatus::Saved => "saved",
            LifecycleStatus::Contacted => "contacted",
            LifecycleStatus::Warm => "warm",
            LifecycleStatus::Cold => "cold",
            LifecycleStatus::Partnered => "partnered",
        }
    }

    /// Display metadata for this status.
    pub fn info(&self) -> StatusInfo {
        match self {
            LifecycleStatus::Saved => StatusInfo {
                label: "Saved",
                description: "Influencer saved to your list",
            },
            LifecycleStatus::Contacted => StatusInfo {
                label: "Contacted",
                description: "Initial outreach sent",
            },
            LifecycleStatus::Warm => StatusInfo {
                label: "Warm",
                description: "Positive response received",
            },
            LifecycleStatus::Cold => StatusInfo {
                label: "Cold",
                description: "No response or declined",
            },
            LifecycleStatus::Partnered => StatusInfo {
                label: "Partnered",
                description: "Partnership established",
            },
        }
    }

    /// Statuses reachable in one step, in rule-table order.
    pub fn next_statuses(&self) -> Vec<LifecycleStatus> {
        rules_from(*self).map(|rule| rule.to).collect()
    }

    /// True when no rule leaves this status.
    pub fn is_terminal(&self) -> bool {
        rules_from(*self).next().is_none()
    }
}

impl Default for LifecycleStatus {
    fn default() -> Self {
        LifecycleStatus::Saved
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "saved" => Ok(LifecycleStatus::Saved),
            "contacted" => Ok(LifecycleStatus::Contacted),
            "warm" => Ok(LifecycleStatus::Warm),
            "cold" => Ok(LifecycleStatus::Cold),
            "partnered" => Ok(LifecycleStatus::Partnered),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

/// Human-facing label and description of a status.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct StatusInfo {
    pub label: &'static str,
    pub description: &'static str,
}
