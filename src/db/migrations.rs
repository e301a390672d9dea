//! Database schema migration management and versioning system.
//!
//! Keeps the local SQLite schema in step with the application. Applied
//! versions are recorded in a `migrations` table; pending migrations run
//! inside a single transaction during database initialization, so a partial
//! failure never leaves the schema half-upgraded.

use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema migration with its transformation logic.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Function that applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: reminder templates and recorded activities
        self.add_migration(1, "create_templates_and_activities", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS reminder_templates (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE,
                    kind TEXT NOT NULL,
                    title TEXT NOT NULL,
                    message TEXT NOT NULL,
                    priority TEXT NOT NULL DEFAULT 'medium',
                    duration INTEGER NOT NULL,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS activities (
                    id INTEGER PRIMARY KEY,
                    activity_type TEXT NOT NULL,
                    score REAL,
                    duration INTEGER,
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            // Index activities by timestamp for daily counter queries
            tx.execute("CREATE INDEX IF NOT EXISTS idx_activities_created_at ON activities(created_at)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_activities_type ON activities(activity_type)", [])?;

            Ok(())
        });

        // Version 2: recurrence support for reminder templates
        self.add_migration(2, "add_template_interval", |tx| {
            tx.execute("ALTER TABLE reminder_templates ADD COLUMN interval_minutes INTEGER", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Executes all pending migrations in the correct order.
    ///
    /// Creates the tracking table if needed, determines the current version
    /// and applies everything newer inside one transaction. Each successful
    /// migration is recorded before the transaction commits.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        let tx = conn.transaction()?;

        for migration in pending {
            msg_debug!(format!("Running migration v{}: {}", migration.version, migration.name));
            (migration.up)(&tx)?;
            tx.execute("INSERT INTO migrations (version, name) VALUES (?1, ?2)", params![migration.version, migration.name])?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Retrieves the current database schema version (0 for a fresh database).
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }
}
