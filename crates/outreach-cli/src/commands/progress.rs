//! Status progression report for a single contact.

use chrono::{DateTime, Utc};
use clap::Args;
use outreach_core::{
    explain_progression, find_rule, newest_first, Config, ContactRecord, OutputFormat,
    StatusProgression, ValidationError,
};
use serde::Serialize;
use std::path::PathBuf;

use super::read_input;

/// How many recent interactions the text report lists.
const RECENT_LIMIT: usize = 5;

#[derive(Args)]
pub struct ProgressArgs {
    /// Contact record JSON file (reads stdin when omitted or "-")
    file: Option<PathBuf>,
    /// Print JSON regardless of the configured output format
    #[arg(long)]
    json: bool,
    /// Evaluate as of this RFC 3339 time instead of now
    #[arg(long)]
    now: Option<String>,
}

#[derive(Serialize)]
struct ProgressReport<'a> {
    #[serde(flatten)]
    progression: &'a StatusProgression,
    suggestions: Vec<String>,
}

pub fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>, ValidationError> {
    match raw {
        None => Ok(Utc::now()),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| ValidationError::InvalidValue {
                field: "now".to_string(),
                message: e.to_string(),
            }),
    }
}

pub fn run(args: ProgressArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let now = parse_now(args.now.as_deref())?;
    let input = read_input(args.file.as_deref())?;
    let contact: ContactRecord = serde_json::from_str(&input)?;

    let progression = contact.progression_at(now);
    let suggestions = explain_progression(&progression);

    if args.json || config.output.format == OutputFormat::Json {
        let report = ProgressReport {
            progression: &progression,
            suggestions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(name) = &contact.name {
        println!("Contact:        {name}");
    }
    println!("Status:         {}", progression.current_status.info().label);
    println!("Strength:       {}/100", progression.relationship_strength);
    println!("Last contact:   {}", progression.days_since_last_contact);

    match progression.next_suggested_status {
        Some(next) => {
            let regression = if progression.is_regression() { " (regression)" } else { "" };
            println!("Suggested:      {}{regression}", next.info().label);
            if let Some(reason) = &progression.progression_reason {
                println!("Reason:         {reason}");
            }
            if config.output.show_requirements {
                if let Some(rule) = find_rule(progression.current_status, next) {
                    for requirement in rule.requirements {
                        println!("  - {requirement}");
                    }
                }
            }
        }
        None => println!("Suggested:      none"),
    }

    if !progression.interactions.is_empty() {
        println!();
        println!("Recent interactions:");
        for interaction in newest_first(&progression.interactions).into_iter().take(RECENT_LIMIT) {
            let outcome = interaction
                .outcome
                .map(|o| format!(" [{}]", o.as_str()))
                .unwrap_or_default();
            println!(
                "  {}  {:<22} {}{outcome}",
                interaction.timestamp.format("%Y-%m-%d"),
                interaction.kind.label(),
                interaction.title
            );
        }
    }

    if !suggestions.is_empty() {
        println!();
        println!("Suggestions:");
        for suggestion in &suggestions {
            println!("  - {suggestion}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_now_accepts_rfc3339_offsets() {
        let now = parse_now(Some("2026-06-01T12:00:00+02:00")).unwrap();
        assert_eq!(now.to_rfc3339(), "2026-06-01T10:00:00+00:00");
    }

    #[test]
    fn parse_now_rejects_garbage() {
        let err = parse_now(Some("yesterday")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "now"));
    }
}
