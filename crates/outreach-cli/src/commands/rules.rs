use clap::Args;
use outreach_core::{rules_from, Config, LifecycleStatus, OutputFormat, StatusTransitionRule, STATUS_TRANSITIONS};

#[derive(Args)]
pub struct RulesArgs {
    /// Only show rules leaving this status
    #[arg(long)]
    from: Option<LifecycleStatus>,
    /// Print JSON regardless of the configured output format
    #[arg(long)]
    json: bool,
}

pub fn run(args: RulesArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let rules: Vec<&StatusTransitionRule> = match args.from {
        Some(status) => rules_from(status).collect(),
        None => STATUS_TRANSITIONS.iter().collect(),
    };

    if args.json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    for rule in rules {
        let direction = if rule.suggested { "forward" } else { "regression" };
        println!(
            "{:<10} -> {:<10} [{direction}] {}: {}",
            rule.from.as_str(),
            rule.to.as_str(),
            rule.trigger,
            rule.description
        );
        if config.output.show_requirements {
            for requirement in rule.requirements {
                println!("    - {requirement}");
            }
        }
    }
    Ok(())
}
