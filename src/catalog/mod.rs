//! Appliance catalog
//!
//! Holds the set of appliances users can pick from. The catalog is seeded
//! once with a fixed default list and can be extended afterwards.

use crate::core::{Appliance, Error, Result};
use crate::db::Database;

/// Appliances inserted by `seed_if_empty` on first bootstrap (name, watts)
pub const DEFAULT_APPLIANCES: [(&str, f64); 8] = [
    ("Fan", 75.0),
    ("LED Bulb", 10.0),
    ("Tube Light", 40.0),
    ("Television", 120.0),
    ("Refrigerator", 150.0),
    ("Air Conditioner", 1500.0),
    ("Washing Machine", 500.0),
    ("Heater", 120.0),
];

/// Read and extend access to the appliance catalog
pub struct Catalog<'a> {
    db: &'a Database,
}

impl<'a> Catalog<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All appliances in insertion order
    pub fn list_appliances(&self) -> Result<Vec<Appliance>> {
        self.db.get_appliances()
    }

    /// Look up one appliance, failing with `ApplianceNotFound` when absent
    pub fn get_appliance(&self, id: i64) -> Result<Appliance> {
        self.db
            .get_appliance(id)?
            .ok_or(Error::ApplianceNotFound(id))
    }

    /// Number of appliances in the catalog
    pub fn count(&self) -> Result<usize> {
        Ok(self.db.get_appliances_count()? as usize)
    }

    /// Add a new appliance to the catalog
    pub fn add_appliance(&self, name: &str, power: f64) -> Result<Appliance> {
        let name = validate_entry(name, power)?;
        let appliance = self.db.insert_appliance(name, power)?;
        log::info!("Added appliance {} ({} W)", appliance.name, appliance.power);
        Ok(appliance)
    }

    /// Insert `defaults` in order if the catalog is empty.
    ///
    /// Returns the number of appliances inserted; zero when the catalog
    /// already had entries.
    pub fn seed_if_empty(&self, defaults: &[(&str, f64)]) -> Result<usize> {
        let mut entries = Vec::with_capacity(defaults.len());
        for &(name, power) in defaults {
            entries.push((validate_entry(name, power)?, power));
        }

        let inserted = self.db.insert_appliances_if_empty(&entries)?;
        if inserted.is_empty() {
            log::debug!("Catalog already populated, skipping seed");
        } else {
            log::info!("Seeded catalog with {} appliances", inserted.len());
        }
        Ok(inserted.len())
    }
}

/// Check an entry and return its normalized (trimmed) name
fn validate_entry(name: &str, power: f64) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidInput("appliance name must not be empty".to_string()));
    }
    if !power.is_finite() || power <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "appliance power must be a positive number of watts, got {}",
            power
        )));
    }
    Ok(name)
}
