pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod schedule;
pub mod summary;

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::store::RecordStore;
use tracing::warn;

/// Audit a completed operation. A failed log write never fails the command.
pub(crate) fn audit(store: &RecordStore<DbPool>, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&store.storage().conn, operation, target, message) {
        warn!(operation, error = %e, "failed to write internal log");
    }
}
