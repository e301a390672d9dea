use crate::db::migrations::MigrationManager;
use crate::libs::data_storage::DataStorage;
use anyhow::{anyhow, Result};
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "ergomate.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and applies any pending migrations.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME).map_err(|e| anyhow!(e.to_string()))?;
        let mut conn = Connection::open(db_file_path)?;

        MigrationManager::new().run_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
