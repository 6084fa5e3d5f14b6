//! Contact records and funnel-wide summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::interaction::Interaction;
use crate::progression::{compute_progression_at, StatusProgression};
use crate::status::LifecycleStatus;

/// A contact as the CRM backend hands it over: current status plus history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: LifecycleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

impl ContactRecord {
    pub fn new(status: LifecycleStatus) -> Self {
        Self {
            name: None,
            status,
            last_contact_date: None,
            interactions: Vec::new(),
        }
    }

    pub fn progression_at(&self, now: DateTime<Utc>) -> StatusProgression {
        compute_progression_at(self.status, &self.interactions, self.last_contact_date, now)
    }
}

/// Aggregate view over a set of contacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineSummary {
    pub total: usize,
    /// Every status is present, zero when unused.
    pub by_status: BTreeMap<LifecycleStatus, usize>,
    /// Mean relationship strength, rounded. Zero for an empty pipeline.
    pub average_strength: u8,
    /// Contacts with a transition waiting for the user.
    pub pending_suggestions: usize,
    /// Pending suggestions that are regressions.
    pub pending_regressions: usize,
}

impl PipelineSummary {
    pub fn count(&self, status: LifecycleStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// Summarize `contacts` as of `now`.
pub fn summarize_at(contacts: &[ContactRecord], now: DateTime<Utc>) -> PipelineSummary {
    let mut by_status: BTreeMap<LifecycleStatus, usize> =
        LifecycleStatus::ALL.iter().map(|s| (*s, 0)).collect();
    let mut strength_total: u64 = 0;
    let mut pending_suggestions = 0;
    let mut pending_regressions = 0;

    for contact in contacts {
        *by_status.entry(contact.status).or_insert(0) += 1;

        let progression = contact.progression_at(now);
        strength_total += u64::from(progression.relationship_strength);
        if progression.next_suggested_status.is_some() {
            pending_suggestions += 1;
            if progression.is_regression() {
                pending_regressions += 1;
            }
        }
    }

    let average_strength = if contacts.is_empty() {
        0
    } else {
        (strength_total as f64 / contacts.len() as f64).round() as u8
    };

    PipelineSummary {
        total: contacts.len(),
        by_status,
        average_strength,
        pending_suggestions,
        pending_regressions,
    }
}

/// Summarize `contacts` as of now.
pub fn summarize(contacts: &[ContactRecord]) -> PipelineSummary {
    summarize_at(contacts, Utc::now())
}
