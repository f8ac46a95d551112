//! Common types used across the application

use serde::{Deserialize, Serialize};

/// A catalog entry describing a device's rated power draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub id: i64,
    /// Short display name (never empty)
    pub name: String,
    /// Rated power draw in watts (always positive)
    pub power: f64,
}

/// One immutable record of an appliance being used for some number of hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub id: i64,
    /// Weak reference into the appliance catalog
    pub appliance_id: i64,
    pub hours_used: f64,
}

/// Energy consumed and its cost at the tariff rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyCost {
    pub energy_kwh: f64,
    pub cost: f64,
}

/// Everything the result view needs after a single calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    pub appliance: Appliance,
    pub hours_used: f64,
    pub energy_kwh: f64,
    pub cost: f64,
    /// The full list of energy-saving tips, always in the same order
    pub tips: Vec<String>,
}
