//! SQLx error classification
//!
//! Every driver failure is reduced to a [`StorageError`] here, so nothing
//! above the storage layer sees `sqlx::Error`.

use agora_core::StorageError;
use sqlx::Error as SqlxError;

/// Lock and serialization failures: serialization_failure, deadlock_detected, lock_not_available
const CONCURRENCY_CODES: [&str; 3] = ["40001", "40P01", "55P03"];

/// SQLSTATE classes raised when the server itself is down or broken:
/// connection exception, insufficient resources, operator intervention
/// (shutdown), system error, internal error
const UNAVAILABLE_CODE_PREFIXES: [&str; 5] = ["08", "53", "57P", "58", "XX"];

/// Convert an SQLx error to a StorageError
pub fn map_storage_error(e: SqlxError) -> StorageError {
    let message = e.to_string();

    match &e {
        SqlxError::Database(db_err) => {
            if db_err.is_unique_violation() {
                StorageError::duplicate_key(message)
            } else if db_err.is_foreign_key_violation() {
                StorageError::foreign_key_violation(message)
            } else if db_err
                .code()
                .is_some_and(|code| CONCURRENCY_CODES.contains(&code.as_ref()))
            {
                StorageError::concurrency_conflict(message)
            } else if db_err.code().is_some_and(|code| {
                UNAVAILABLE_CODE_PREFIXES
                    .iter()
                    .any(|prefix| code.starts_with(prefix))
            }) {
                StorageError::connection(message)
            } else {
                StorageError::write(message)
            }
        }
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::Protocol(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed => StorageError::connection(message),
        _ => StorageError::unexpected(message),
    }
}

/// A row read by key disappeared before it could be written
pub fn row_vanished(table: &str) -> StorageError {
    StorageError::concurrency_conflict(format!("{table} row changed concurrently"))
}
