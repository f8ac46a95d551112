//! Request/response facade over the catalog, ledger, and reports
//!
//! Each method is one complete request: the index listing, a single
//! calculation (which records usage), or the full dashboard.

use crate::catalog::{Catalog, DEFAULT_APPLIANCES};
use crate::core::{Appliance, CalculationResult, Config, Result};
use crate::db::Database;
use crate::ledger::{parse_appliance_id, parse_hours, UsageLedger};
use crate::pricing::compute_single;
use crate::report::{build_dashboard, tips, Dashboard};

/// Energy tracker owning its store
pub struct Tracker {
    db: Database,
}

impl Tracker {
    /// Wrap an existing store, seeding the catalog if it is empty
    pub fn new(db: Database) -> Result<Self> {
        Catalog::new(&db).seed_if_empty(&DEFAULT_APPLIANCES)?;
        Ok(Self { db })
    }

    /// Open the store configured in `config`
    pub fn open(config: &Config) -> Result<Self> {
        let path = config.database_path()?;
        Self::new(Database::open(&path)?)
    }

    /// Tracker backed by a private in-memory store
    pub fn in_memory() -> Result<Self> {
        Self::new(Database::open_in_memory()?)
    }

    pub fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.db)
    }

    pub fn ledger(&self) -> UsageLedger<'_> {
        UsageLedger::new(&self.db)
    }

    /// Appliances available for selection
    pub fn index(&self) -> Result<Vec<Appliance>> {
        self.catalog().list_appliances()
    }

    /// Validate a submitted calculation, record it, and price it
    pub fn calculate(&self, appliance_id: &str, hours: &str) -> Result<CalculationResult> {
        let appliance_id = parse_appliance_id(appliance_id)?;
        let hours_used = parse_hours(hours)?;
        let appliance = self.catalog().get_appliance(appliance_id)?;

        self.ledger().record_usage(appliance.id, hours_used)?;
        let priced = compute_single(&appliance, hours_used);

        Ok(CalculationResult {
            appliance,
            hours_used,
            energy_kwh: priced.energy_kwh,
            cost: priced.cost,
            tips: tips(),
        })
    }

    /// Aggregate the full usage history
    pub fn dashboard(&self) -> Result<Dashboard> {
        let appliances = self.catalog().list_appliances()?;
        let events = self.ledger().list_all_usage()?;
        Ok(build_dashboard(&appliances, &events))
    }
}
