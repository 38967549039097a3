//! Transaction scoping for multi-statement repository operations
//!
//! A primary repository opens a [`Tx`], threads `&mut *tx` through every
//! relation repository call, and hands the outcome to [`finish`].

use sqlx::{Postgres, Transaction};

use super::DbError;

/// A transaction holding one pooled connection.
pub type Tx = Transaction<'static, Postgres>;

/// Commit on success, roll back on failure.
///
/// A failed rollback is logged and the original error is returned. The
/// connection is released in every case.
pub async fn finish<T>(tx: Tx, outcome: Result<T, DbError>) -> Result<T, DbError> {
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err)
        }
    }
}
