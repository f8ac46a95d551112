//! Pricing engine for electricity cost calculation
//!
//! A single flat tariff is applied to every kWh. The rate is compiled in.

use crate::core::{Appliance, EnergyCost};

/// Tariff in currency units per kWh
pub const RATE_PER_KWH: f64 = 8.0;

/// Flat-rate tariff that turns energy into cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TariffRate {
    rate_per_kwh: f64,
}

impl TariffRate {
    pub const fn new(rate_per_kwh: f64) -> Self {
        Self { rate_per_kwh }
    }

    /// Get the rate per kWh
    pub fn rate(&self) -> f64 {
        self.rate_per_kwh
    }

    /// Calculate cost for a given energy consumption in kWh
    pub fn cost_for(&self, kwh: f64) -> f64 {
        kwh * self.rate_per_kwh
    }

    /// Energy and cost of running `appliance` for `hours_used` hours
    pub fn compute(&self, appliance: &Appliance, hours_used: f64) -> EnergyCost {
        let energy_kwh = energy_kwh(appliance.power, hours_used);
        EnergyCost {
            energy_kwh,
            cost: self.cost_for(energy_kwh),
        }
    }
}

impl Default for TariffRate {
    fn default() -> Self {
        Self::new(RATE_PER_KWH)
    }
}

/// Energy in kWh drawn by `power_watts` over `hours_used` hours
pub fn energy_kwh(power_watts: f64, hours_used: f64) -> f64 {
    power_watts * hours_used / 1000.0
}

/// Energy and cost of one usage at the standard tariff
pub fn compute_single(appliance: &Appliance, hours_used: f64) -> EnergyCost {
    TariffRate::default().compute(appliance, hours_used)
}

/// Round to two decimal places for display series
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
