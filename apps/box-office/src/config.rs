//! # Box Office Configuration
//!
//! Prices, the ticket limit and the log filter.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CINEMA_ADULT_PRICE=25                                              │
//! │     CINEMA_MAX_TICKETS=25                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/box-office/config.toml (Linux)                           │
//! │     ~/Library/Application Support/com.cinema.box-office/config.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ADULT 25, CHILD 15, INFANT 0, max 25 tickets                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [pricing]
//! adult = 25
//! child = 15
//! infant = 0
//!
//! [limits]
//! max_tickets_per_purchase = 25
//!
//! [logging]
//! filter = "info,cinema=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use cinema_core::{
    Money, PurchaseRules, TicketPrices, ADULT_TICKET_PRICE, CHILD_TICKET_PRICE,
    INFANT_TICKET_PRICE, MAX_TICKETS_PER_PURCHASE,
};

use crate::error::{AppError, AppResult};

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,cinema=debug";

// =============================================================================
// Pricing Settings
// =============================================================================

/// Unit price per ticket type, in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    #[serde(default = "default_adult_price")]
    pub adult: i64,

    #[serde(default = "default_child_price")]
    pub child: i64,

    #[serde(default = "default_infant_price")]
    pub infant: i64,
}

fn default_adult_price() -> i64 {
    ADULT_TICKET_PRICE
}

fn default_child_price() -> i64 {
    CHILD_TICKET_PRICE
}

fn default_infant_price() -> i64 {
    INFANT_TICKET_PRICE
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            adult: default_adult_price(),
            child: default_child_price(),
            infant: default_infant_price(),
        }
    }
}

// =============================================================================
// Limit Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitSettings {
    /// Largest number of tickets accepted in one purchase.
    #[serde(default = "default_max_tickets")]
    pub max_tickets_per_purchase: i64,
}

fn default_max_tickets() -> i64 {
    MAX_TICKETS_PER_PURCHASE
}

impl Default for LimitSettings {
    fn default() -> Self {
        LimitSettings {
            max_tickets_per_purchase: default_max_tickets(),
        }
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` wins over this.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete box office configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxOfficeConfig {
    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub limits: LimitSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl BoxOfficeConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else the platform default)
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(config_path: Option<&Path>) -> AppResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML config file. Missing sections and keys take defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading box office config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Writes the configuration as TOML, creating parent directories.
    ///
    /// Returns the path written to.
    pub fn save(&self, config_path: Option<&Path>) -> AppResult<PathBuf> {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path)
            .ok_or_else(|| AppError::InvalidConfig("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Box office config saved");
        Ok(path)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        let prices = [
            ("adult", self.pricing.adult),
            ("child", self.pricing.child),
            ("infant", self.pricing.infant),
        ];
        for (name, price) in prices {
            if price < 0 {
                return Err(AppError::InvalidConfig(format!(
                    "{} price must not be negative, got {}",
                    name, price
                )));
            }
        }

        if self.limits.max_tickets_per_purchase < 1 {
            return Err(AppError::InvalidConfig(format!(
                "max_tickets_per_purchase must be at least 1, got {}",
                self.limits.max_tickets_per_purchase
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    ///
    /// Values that do not parse are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let numeric = [
            ("CINEMA_ADULT_PRICE", &mut self.pricing.adult),
            ("CINEMA_CHILD_PRICE", &mut self.pricing.child),
            ("CINEMA_INFANT_PRICE", &mut self.pricing.infant),
            ("CINEMA_MAX_TICKETS", &mut self.limits.max_tickets_per_purchase),
        ];
        for (key, slot) in numeric {
            if let Some(raw) = lookup(key) {
                match raw.trim().parse::<i64>() {
                    Ok(value) => {
                        debug!(key, value, "Overriding config from environment");
                        *slot = value;
                    }
                    Err(_) => warn!(key, value = %raw, "Ignoring non-numeric environment override"),
                }
            }
        }

        if let Some(filter) = lookup("CINEMA_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "cinema", "box-office")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// The purchase rules this configuration describes.
    pub fn rules(&self) -> PurchaseRules {
        PurchaseRules {
            prices: TicketPrices {
                adult: Money::from_units(self.pricing.adult),
                child: Money::from_units(self.pricing.child),
                infant: Money::from_units(self.pricing.infant),
            },
            max_tickets_per_purchase: self.limits.max_tickets_per_purchase,
        }
    }
}
