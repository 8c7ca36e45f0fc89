//! # Box Office Entry Point
//!
//! Parses arguments, loads configuration, starts logging, then runs the
//! requested action. Run with `--help` for usage.

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing::info;

use box_office::cli::{Action, Cli};
use box_office::config::BoxOfficeConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone();

    let source = match cli.into_action() {
        Action::Help => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Action::InitConfig => {
            let path = box_office::with_bootstrap_logging(|| {
                box_office::init_config(config_path.as_deref())
            })
            .context("writing default configuration")?;
            println!("Wrote default configuration to {}", path.display());
            return Ok(());
        }
        Action::Purchase(source) => source,
    };

    let config =
        box_office::with_bootstrap_logging(|| BoxOfficeConfig::load(config_path.as_deref()))
            .context("loading configuration")?;
    box_office::init_tracing(&config.logging.filter);
    info!(
        max_tickets = config.limits.max_tickets_per_purchase,
        "Box office ready"
    );

    let result = box_office::purchase(source, &config)?;
    println!(
        "Purchase complete: {} charged, {} seat(s) reserved",
        result.total_amount, result.total_seats
    );

    Ok(())
}
