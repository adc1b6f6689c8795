use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}

/// Open the database at `path`, creating the schema if needed.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Open the database and load the record store kept inside it.
pub fn open_store(cfg: &Config) -> AppResult<RecordStore<DbPool>> {
    let pool = open_db(&cfg.database)?;
    let mut store = RecordStore::new(pool).with_default_schedule(&cfg.default_schedule);
    store.load()?;
    Ok(store)
}
