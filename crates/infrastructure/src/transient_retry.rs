use std::future::Future;
use std::time::Duration;

use com360_core::{AppError, AppResult};
use tracing::warn;

const TRANSIENT_RETRY_BACKOFF: Duration = Duration::from_millis(100);

/// Runs a read, retrying it once after a short backoff on transient errors.
///
/// Only pool acquisition timeouts, a closed pool and I/O failures are
/// retried. Every other error, and a second failure, surfaces as
/// `AppError::Internal`.
pub(crate) async fn retry_transient<T, F, Fut>(operation: &str, mut run: F) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    match run().await {
        Ok(value) => Ok(value),
        Err(error) if is_transient(&error) => {
            warn!(operation, error = %error, "transient database error, retrying once");
            tokio::time::sleep(TRANSIENT_RETRY_BACKOFF).await;
            run().await.map_err(|error| {
                AppError::Internal(format!("failed to {operation} after retry: {error}"))
            })
        }
        Err(error) => Err(AppError::Internal(format!("failed to {operation}: {error}"))),
    }
}

fn is_transient(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
    )
}
