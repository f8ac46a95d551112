//! Database module for persisting the appliance catalog and usage ledger
//!
//! Uses SQLite for local storage of:
//! - Appliances (name and rated power)
//! - Usage records (appliance reference and hours used)
//!
//! The store is an explicit object; the catalog and ledger borrow it.

use crate::core::{Appliance, Error, Result, UsageEvent};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};
use std::path::Path;

/// Database manager
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database file
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        log::info!("Opened database at {}", path.display());

        let db = Self { conn };
        db.init_schema()?;

        Ok(db)
    }

    /// Create a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        let db = Self { conn };
        db.init_schema()?;

        Ok(db)
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            -- Appliance catalog
            CREATE TABLE IF NOT EXISTS appliances (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                power REAL NOT NULL
            );

            -- Usage ledger (append-only)
            CREATE TABLE IF NOT EXISTS usage (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                appliance_id INTEGER NOT NULL REFERENCES appliances(id),
                hours_used REAL NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    // ===== Appliances =====

    /// Insert an appliance and return it with its assigned id
    pub fn insert_appliance(&self, name: &str, power: f64) -> Result<Appliance> {
        self.conn.execute(
            "INSERT INTO appliances (name, power) VALUES (?1, ?2)",
            params![name, power],
        )?;

        Ok(Appliance {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            power,
        })
    }

    /// Insert several appliances in order, but only into an empty table.
    ///
    /// The emptiness check and the inserts share one write-locked
    /// transaction, so concurrent openers cannot both insert. Returns the
    /// inserted appliances, or nothing if the table already had rows.
    pub fn insert_appliances_if_empty(&self, entries: &[(&str, f64)]) -> Result<Vec<Appliance>> {
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)?;

        let count: i64 = tx.query_row("SELECT COUNT(*) FROM appliances", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(Vec::new());
        }

        let mut inserted = Vec::with_capacity(entries.len());
        for (name, power) in entries {
            inserted.push(self.insert_appliance(name, *power)?);
        }

        tx.commit()?;
        Ok(inserted)
    }

    /// Get a specific appliance by ID
    pub fn get_appliance(&self, id: i64) -> Result<Option<Appliance>> {
        let result = self.conn.query_row(
            "SELECT id, name, power FROM appliances WHERE id = ?1",
            params![id],
            appliance_from_row,
        );

        match result {
            Ok(appliance) => Ok(Some(appliance)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Error::Database(e)),
        }
    }

    /// Get all appliances in insertion order
    pub fn get_appliances(&self) -> Result<Vec<Appliance>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, power FROM appliances ORDER BY id ASC")?;

        let appliances = stmt
            .query_map([], appliance_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(appliances)
    }

    /// Get total appliance count
    pub fn get_appliances_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM appliances", [], |row| row.get(0))?;
        Ok(count)
    }

    // ===== Usage =====

    /// Append a usage record and return it with its assigned id
    pub fn insert_usage(&self, appliance_id: i64, hours_used: f64) -> Result<UsageEvent> {
        self.conn.execute(
            "INSERT INTO usage (appliance_id, hours_used) VALUES (?1, ?2)",
            params![appliance_id, hours_used],
        )?;

        Ok(UsageEvent {
            id: self.conn.last_insert_rowid(),
            appliance_id,
            hours_used,
        })
    }

    /// Get the full usage history in insertion order
    pub fn get_usage(&self) -> Result<Vec<UsageEvent>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, appliance_id, hours_used FROM usage ORDER BY id ASC")?;

        let events = stmt
            .query_map([], |row| {
                Ok(UsageEvent {
                    id: row.get(0)?,
                    appliance_id: row.get(1)?,
                    hours_used: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }

    /// Get total usage record count
    pub fn get_usage_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM usage", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn appliance_from_row(row: &Row<'_>) -> rusqlite::Result<Appliance> {
    Ok(Appliance {
        id: row.get(0)?,
        name: row.get(1)?,
        power: row.get(2)?,
    })
}
