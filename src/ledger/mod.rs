//! Usage ledger
//!
//! Append-only history of appliance usage. Every event references a catalog
//! entry and is validated before it is written, so a rejected request leaves
//! the ledger untouched.

use crate::catalog::Catalog;
use crate::core::{Error, Result, UsageEvent};
use crate::db::Database;
use crate::pricing::compute_single;

/// Append and read access to recorded usage
pub struct UsageLedger<'a> {
    db: &'a Database,
}

impl<'a> UsageLedger<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Record that an appliance was used for `hours_used` hours
    pub fn record_usage(&self, appliance_id: i64, hours_used: f64) -> Result<UsageEvent> {
        validate_hours(hours_used)?;
        let appliance = Catalog::new(self.db).get_appliance(appliance_id)?;

        // Derived energy and cost must stay representable for every stored event
        let priced = compute_single(&appliance, hours_used);
        if !priced.energy_kwh.is_finite() || !priced.cost.is_finite() {
            return Err(Error::InvalidInput(format!(
                "{} h of {} is too large to price",
                hours_used, appliance.name
            )));
        }

        let event = self.db.insert_usage(appliance.id, hours_used)?;
        log::debug!(
            "Recorded usage #{}: {} for {} h",
            event.id,
            appliance.name,
            event.hours_used
        );
        Ok(event)
    }

    /// Full usage history in the order it was recorded
    pub fn list_all_usage(&self) -> Result<Vec<UsageEvent>> {
        self.db.get_usage()
    }

    /// Number of recorded events
    pub fn count(&self) -> Result<usize> {
        Ok(self.db.get_usage_count()? as usize)
    }
}

/// Parse a submitted hours value into a finite, non-negative number
pub fn parse_hours(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let hours: f64 = trimmed
        .parse()
        .map_err(|_| Error::InvalidInput(format!("hours must be a number, got {:?}", input)))?;

    validate_hours(hours)?;
    Ok(hours)
}

/// Parse a submitted appliance identifier
pub fn parse_appliance_id(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("appliance id must be an integer, got {:?}", input)))
}

fn validate_hours(hours: f64) -> Result<()> {
    if !hours.is_finite() {
        return Err(Error::InvalidInput(format!("hours must be finite, got {}", hours)));
    }
    if hours < 0.0 {
        return Err(Error::InvalidInput(format!("hours must not be negative, got {}", hours)));
    }
    Ok(())
}
