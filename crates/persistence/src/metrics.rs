//! Database metrics collection.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::future::Future;
use std::time::Instant;

/// Record database connection pool metrics.
///
/// Called on every scrape so the gauges are current.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Times a single named query.
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Records the elapsed time, labelled with the query outcome.
    pub fn finish(self, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        histogram!(
            "database_query_duration_seconds",
            "query" => self.query_name,
            "status" => status
        )
        .record(self.start.elapsed().as_secs_f64());

        if !ok {
            counter!("database_query_errors_total", "query" => self.query_name).increment(1);
        }
    }
}

/// Runs a query future under a [`QueryTimer`].
///
/// ```ignore
/// let bins = timed("list_wastebins", sqlx::query_as::<_, WastebinEntity>(sql).fetch_all(&pool)).await?;
/// ```
pub async fn timed<T, E, F>(query_name: &'static str, query: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    let timer = QueryTimer::new(query_name);
    let result = query.await;
    timer.finish(result.is_ok());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_timer_keeps_name() {
        let timer = QueryTimer::new("count_wastebins");
        assert_eq!(timer.query_name, "count_wastebins");
        timer.finish(true);
    }

    #[tokio::test]
    async fn test_timed_passes_result_through() {
        let ok: Result<i64, String> = timed("noop", async { Ok(3) }).await;
        assert_eq!(ok, Ok(3));

        let err: Result<i64, String> = timed("noop", async { Err("boom".to_string()) }).await;
        assert_eq!(err, Err("boom".to_string()));
    }
}
