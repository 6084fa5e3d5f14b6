use clap::Subcommand;
use outreach_core::{check_transition, Config, LifecycleStatus, OutputFormat};
use serde::Serialize;

#[derive(Subcommand)]
pub enum StatusAction {
    /// List lifecycle statuses
    List {
        /// Print JSON regardless of the configured output format
        #[arg(long)]
        json: bool,
    },
    /// Check that a status change follows the transition table
    Check {
        /// Current status
        from: LifecycleStatus,
        /// Requested status
        to: LifecycleStatus,
    },
}

#[derive(Serialize)]
struct StatusEntry {
    status: LifecycleStatus,
    label: &'static str,
    description: &'static str,
    next: Vec<LifecycleStatus>,
}

pub fn run(action: StatusAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StatusAction::List { json } => {
            let entries: Vec<StatusEntry> = LifecycleStatus::ALL
                .iter()
                .map(|status| {
                    let info = status.info();
                    StatusEntry {
                        status: *status,
                        label: info.label,
                        description: info.description,
                        next: status.next_statuses(),
                    }
                })
                .collect();

            if json || config.output.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
                return Ok(());
            }

            for entry in entries {
                println!("{:<10} {}", entry.label, entry.description);
            }
        }
        StatusAction::Check { from, to } => {
            let rule = check_transition(from, to)?;
            tracing::debug!(%from, %to, suggested = rule.suggested, "transition allowed");
            println!("ok: {from} -> {to} ({})", rule.trigger);
        }
    }
    Ok(())
}
