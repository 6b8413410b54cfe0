use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::error::FixtureError;

/// Boxed future borrowed from the transaction, as returned by `with_txn` closures.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, FixtureError>> + Send + 'a>>;

/// Run `f` inside a transaction: commit on `Ok`, roll back on `Err`.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, FixtureError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    let txn = db.begin().await?;
    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // best-effort rollback; preserve original error
            if let Err(rollback_err) = txn.rollback().await {
                warn!(error = %rollback_err, "rollback failed after fixture error");
            }
            Err(err)
        }
    }
}
