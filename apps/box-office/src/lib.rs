//! # Box Office
//!
//! Command-line front end for `cinema-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       box-office                                        │
//! │                                                                         │
//! │  1. Parse arguments ──────────► Cli (clap)                              │
//! │  2. Load configuration ───────► BoxOfficeConfig (file + env),           │
//! │                                 under a bootstrap subscriber            │
//! │  3. Initialize logging ───────► tracing-subscriber + EnvFilter          │
//! │  4. Build purchase request ───► JSON file or --account/--ticket         │
//! │  5. TicketService::purchase ──► LoggingPaymentGateway                   │
//! │                                 LoggingSeatReservation                  │
//! │  6. Print totals or the rejection reason                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use cinema_core::{PricingResult, TicketService};

use crate::cli::RequestSource;
use crate::config::{BoxOfficeConfig, DEFAULT_LOG_FILTER};
use crate::error::AppResult;
use crate::gateway::{LoggingPaymentGateway, LoggingSeatReservation};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cinema_core=trace` - Show trace for the core only
/// - Otherwise `default_filter` (from config, `CINEMA_LOG`, or built-in)
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(true)
        .init();
}

/// Runs `f` with a temporary subscriber using the built-in filter.
///
/// Configuration is loaded before the configured filter is known, so events
/// from the loader (such as ignored environment overrides) go here.
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_LOG_FILTER))
        .with_target(true)
        .finish();

    tracing::subscriber::with_default(subscriber, f)
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Builds the purchase request and runs it through a `TicketService` wired
/// to the stand-in collaborators.
pub fn purchase(source: RequestSource, config: &BoxOfficeConfig) -> AppResult<PricingResult> {
    let request = source.into_request()?;
    let service = TicketService::with_rules(
        LoggingPaymentGateway,
        LoggingSeatReservation,
        config.rules(),
    );

    Ok(service.purchase(&request)?)
}

/// Writes the default configuration and returns where it went.
pub fn init_config(path: Option<&Path>) -> AppResult<PathBuf> {
    BoxOfficeConfig::default().save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tracing::Level;
    use cinema_core::{InvalidPurchase, Money, TicketType, TicketTypeRequest};

    fn inline(account_id: Option<i64>, tickets: Vec<TicketTypeRequest>) -> RequestSource {
        RequestSource::Inline {
            account_id,
            tickets,
        }
    }

    #[test]
    fn test_purchase_with_default_config() {
        let result = purchase(
            inline(
                Some(2),
                vec![
                    TicketTypeRequest::new(TicketType::Adult, 20),
                    TicketTypeRequest::new(TicketType::Child, 5),
                ],
            ),
            &BoxOfficeConfig::default(),
        )
        .unwrap();

        assert_eq!(result.total_amount, Money::from_units(575));
        assert_eq!(result.total_seats, 25);
    }

    #[test]
    fn test_purchase_uses_configured_rules() {
        let mut config = BoxOfficeConfig::default();
        config.pricing.adult = 10;
        config.limits.max_tickets_per_purchase = 3;

        let result = purchase(
            inline(Some(1), vec![TicketTypeRequest::new(TicketType::Adult, 3)]),
            &config,
        )
        .unwrap();
        assert_eq!(result.total_amount, Money::from_units(30));

        let err = purchase(
            inline(Some(1), vec![TicketTypeRequest::new(TicketType::Adult, 4)]),
            &config,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Maximum of 3 tickets can be purchased at a time");
    }

    #[test]
    fn test_missing_account_is_rejected() {
        let err = purchase(
            inline(None, vec![TicketTypeRequest::new(TicketType::Adult, 1)]),
            &BoxOfficeConfig::default(),
        )
        .unwrap_err();

        match err {
            AppError::Purchase(err) => {
                assert_eq!(err.as_invalid(), Some(&InvalidPurchase::InvalidAccount))
            }
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_purchase_from_request_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("purchase.json");
        std::fs::write(
            &path,
            r#"{"accountId": 3, "tickets": [
                {"type": "ADULT", "quantity": 2},
                {"type": "CHILD", "quantity": 3},
                {"type": "INFANT", "quantity": 1}
            ]}"#,
        )
        .unwrap();

        let result = purchase(RequestSource::File(path), &BoxOfficeConfig::default()).unwrap();
        assert_eq!(result.total_amount, Money::from_units(95));
        assert_eq!(result.total_seats, 5);
    }

    #[test]
    fn test_malformed_request_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("purchase.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            purchase(RequestSource::File(path), &BoxOfficeConfig::default()),
            Err(AppError::RequestParse(_))
        ));
    }

    #[test]
    fn test_init_config_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let written = init_config(Some(path.as_path())).unwrap();
        assert_eq!(written, path);
        assert_eq!(
            BoxOfficeConfig::from_file(&path).unwrap(),
            BoxOfficeConfig::default()
        );
    }

    #[test]
    fn test_bootstrap_logging_is_active_while_loading() {
        let (warn_enabled, value) =
            with_bootstrap_logging(|| (tracing::enabled!(Level::WARN), 42));

        assert!(warn_enabled);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_huge_configured_price_is_rejected_not_overflowed() {
        let mut config = BoxOfficeConfig::default();
        config.apply_overrides(|key: &str| {
            (key == "CINEMA_ADULT_PRICE").then(|| i64::MAX.to_string())
        });
        assert!(config.validate().is_ok());

        let err = purchase(
            inline(Some(1), vec![TicketTypeRequest::new(TicketType::Adult, 2)]),
            &config,
        )
        .unwrap_err();

        match err {
            AppError::Purchase(err) => {
                assert_eq!(err.as_invalid(), Some(&InvalidPurchase::AmountOutOfRange))
            }
            other => panic!("expected a rejection, got {:?}", other),
        }
    }
}
