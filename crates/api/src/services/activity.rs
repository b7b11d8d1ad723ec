//! Server-side activity recording.

use persistence::repositories::ActivityLogRepository;
use sqlx::PgPool;

/// Writes an activity log row for a mutation. Failures are logged and
/// swallowed; the mutation they describe has already committed.
pub async fn record(pool: &PgPool, user_id: i64, action: &str) {
    match ActivityLogRepository::new(pool.clone())
        .create(user_id, action, None)
        .await
    {
        Ok(log) => tracing::debug!(log_id = log.log_id, user_id, action, "Activity recorded"),
        Err(e) => tracing::warn!(error = %e, user_id, action, "Failed to record activity"),
    }
}
