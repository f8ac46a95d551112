//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, DisplayConfig, GeneralConfig, StorageConfig};
pub use error::{Error, Result};
pub use types::{Appliance, CalculationResult, EnergyCost, UsageEvent};
