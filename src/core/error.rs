//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Appliance not found: {0}")]
    ApplianceNotFound(i64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Usage record {usage_id} references missing appliance {appliance_id}")]
    MissingAppliance { usage_id: i64, appliance_id: i64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
