use crate::db::Database;
use crate::error::AppError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Execute a database operation with proper lock handling and error
/// mapping.
///
/// Every store operation goes through here: acquire the single
/// connection, run one statement, release the lock on return. A
/// failed operation surfaces as an error and leaves prior data
/// untouched.
///
/// # Example
/// ```ignore
/// with_connection(&db, "load recent entries", |conn| {
///     Entry::find_recent(conn, 50)
/// })
/// ```
pub fn with_connection<F, T>(
    db: &Arc<Mutex<Database>>,
    operation: &str,
    f: F,
) -> Result<T, AppError>
where
    F: FnOnce(&Connection) -> rusqlite::Result<T>,
{
    let db = db.lock().map_err(|e| {
        log::error!("Failed to acquire database lock for {}: {}", operation, e);
        AppError::LockPoisoned
    })?;

    f(db.connection()).map_err(|e| {
        log::error!("Failed to {}: {}", operation, e);
        AppError::Database(e)
    })
}
