/// Video Repository
///
/// Postgres-backed implementation of the catalog operations.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::error;

use crate::db::VideoCatalog;
use crate::error::{AppError, Result};

/// Maximum number of candidates a trending request may return.
pub const TRENDING_LIMIT: i64 = 20;

pub struct VideoRepo {
    pool: PgPool,
}

impl VideoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoCatalog for VideoRepo {
    #[tracing::instrument(skip(self))]
    async fn trending_candidates(&self) -> Result<Vec<String>> {
        // Single statement so concurrent finalizations cannot produce a
        // partially consistent candidate list.
        let ids = sqlx::query_scalar::<_, String>(
            r#"
            SELECT id
            FROM videos
            WHERE uploaded = true
            ORDER BY date_uploaded ASC
            LIMIT $1
            "#,
        )
        .bind(TRENDING_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to select trending candidates: {}", e);
            AppError::from(e)
        })?;

        Ok(ids)
    }

    #[tracing::instrument(skip(self))]
    async fn prune_expired(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        // One DELETE, count from rows_affected: the reported number is
        // exactly what this statement removed, with no read-then-delete race.
        let pruned = sqlx::query(
            r#"
            DELETE FROM videos
            WHERE uploaded = false AND timeout_date < $1
            "#,
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to prune expired videos: {}", e);
            AppError::from(e)
        })?
        .rows_affected();

        Ok(pruned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_limit() {
        assert_eq!(TRENDING_LIMIT, 20);
    }
}
