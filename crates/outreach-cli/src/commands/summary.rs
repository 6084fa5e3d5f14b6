use clap::Args;
use outreach_core::{summarize_at, Config, ContactRecord, LifecycleStatus, OutputFormat};
use std::path::PathBuf;

use super::progress::parse_now;
use super::read_input;

#[derive(Args)]
pub struct SummaryArgs {
    /// JSON array of contact records (reads stdin when omitted or "-")
    file: Option<PathBuf>,
    /// Print JSON regardless of the configured output format
    #[arg(long)]
    json: bool,
    /// Evaluate as of this RFC 3339 time instead of now
    #[arg(long)]
    now: Option<String>,
}

pub fn run(args: SummaryArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let now = parse_now(args.now.as_deref())?;
    let input = read_input(args.file.as_deref())?;
    let contacts: Vec<ContactRecord> = serde_json::from_str(&input)?;
    tracing::debug!(contacts = contacts.len(), "summarizing pipeline");

    let summary = summarize_at(&contacts, now);

    if args.json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Contacts:            {}", summary.total);
    for status in LifecycleStatus::ALL {
        println!("  {:<18} {}", status.info().label, summary.count(status));
    }
    println!("Average strength:    {}/100", summary.average_strength);
    println!(
        "Pending suggestions: {} ({} regressions)",
        summary.pending_suggestions, summary.pending_regressions
    );
    Ok(())
}
