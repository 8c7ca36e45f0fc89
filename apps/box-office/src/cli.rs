//! # Command Line
//!
//! ## Usage
//! ```bash
//! # Buy tickets from the command line
//! box-office --account 3 --ticket adult=2 --ticket child=3 --ticket infant=1
//!
//! # Buy tickets described in a JSON file
//! box-office --request purchase.json
//!
//! # Use a specific config file
//! box-office --config ./box-office.toml --account 1 --ticket adult=1
//!
//! # Write a config file with the default settings
//! box-office init-config --config ./box-office.toml
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use cinema_core::{PurchaseError, PurchaseRequest, TicketType, TicketTypeRequest};

use crate::error::{AppError, AppResult};

const ENV_HELP: &str = "\
Environment:
  RUST_LOG, CINEMA_LOG                log filter
  CINEMA_ADULT_PRICE, CINEMA_CHILD_PRICE, CINEMA_INFANT_PRICE
  CINEMA_MAX_TICKETS";

// =============================================================================
// Arguments
// =============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "box-office",
    version,
    about = "Buy cinema tickets",
    long_about = None,
    args_conflicts_with_subcommands = true,
    after_help = ENV_HELP
)]
pub struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file holding the purchase request
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["account", "tickets"])]
    pub request: Option<PathBuf>,

    /// Account to charge
    #[arg(short, long, value_name = "ID", allow_negative_numbers = true)]
    pub account: Option<i64>,

    /// Ticket to buy, e.g. adult=2 (ADULT, CHILD or INFANT). Repeatable
    #[arg(short, long = "ticket", value_name = "TYPE=QTY", value_parser = parse_ticket)]
    pub tickets: Vec<TicketTypeRequest>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write a config file with the default settings
    InitConfig,
}

// =============================================================================
// Actions
// =============================================================================

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    InitConfig,
    Purchase(RequestSource),
}

/// Where the purchase request comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSource {
    /// A JSON file holding a `PurchaseRequest`.
    File(PathBuf),

    /// `--account` and `--ticket` flags. Either may be missing; the purchase
    /// rules report what is wrong.
    Inline {
        account_id: Option<i64>,
        tickets: Vec<TicketTypeRequest>,
    },
}

impl Cli {
    /// Resolves the parsed flags into a single action. No purchase flags and
    /// no subcommand means help.
    pub fn into_action(self) -> Action {
        if let Some(Commands::InitConfig) = self.command {
            return Action::InitConfig;
        }

        match self.request {
            Some(path) => Action::Purchase(RequestSource::File(path)),
            None if self.account.is_some() || !self.tickets.is_empty() => {
                Action::Purchase(RequestSource::Inline {
                    account_id: self.account,
                    tickets: self.tickets,
                })
            }
            None => Action::Help,
        }
    }
}

impl RequestSource {
    /// Builds the purchase request, reading the file if there is one.
    pub fn into_request(self) -> AppResult<PurchaseRequest> {
        match self {
            RequestSource::File(path) => read_request_file(&path),
            RequestSource::Inline {
                account_id,
                tickets,
            } => Ok(PurchaseRequest {
                account_id,
                tickets: Some(tickets),
            }),
        }
    }
}

/// Parses `TYPE=QTY`, e.g. `adult=2`.
///
/// An unrecognised type is reported as the purchase rejection
/// `UnknownTicketType`.
pub fn parse_ticket(spec: &str) -> AppResult<TicketTypeRequest> {
    let (ticket_type, quantity) = spec.split_once('=').ok_or_else(|| {
        AppError::InvalidArgument(format!("--ticket expects TYPE=QTY, got '{}'", spec))
    })?;

    let ticket_type: TicketType = ticket_type.parse().map_err(PurchaseError::from)?;
    let quantity = quantity.trim().parse::<i32>().map_err(|_| {
        AppError::InvalidArgument(format!("ticket quantity must be an integer, got '{}'", quantity))
    })?;

    Ok(TicketTypeRequest::new(ticket_type, quantity))
}

fn read_request_file(path: &Path) -> AppResult<PurchaseRequest> {
    let contents = std::fs::read_to_string(path)?;
    Ok(PurchaseRequest::from_json(&contents)?)
}
