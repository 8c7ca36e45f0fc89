//! # Box Office Errors
//!
//! Everything the application can fail with, from a bad command line to a
//! rejected purchase.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io / toml / serde_json / PurchaseError                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (this module) ← adds which step failed                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  main → anyhow → stderr + non-zero exit                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use cinema_core::PurchaseError;

/// Result type alias for box office operations.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // =========================================================================
    // Command Line
    // =========================================================================
    /// The command line could not be understood.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // =========================================================================
    // Configuration
    // =========================================================================
    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The config file is not valid TOML for `BoxOfficeConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The config could not be written back out.
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    // =========================================================================
    // Input
    // =========================================================================
    /// A file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The purchase request file is not valid JSON for `PurchaseRequest`.
    #[error("Invalid purchase request: {0}")]
    RequestParse(#[from] serde_json::Error),

    // =========================================================================
    // Purchase
    // =========================================================================
    /// The purchase was rejected or a collaborator failed.
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
}
