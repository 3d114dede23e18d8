/// Database access layer
///
/// The videos catalog holds one row per upload attempt. Rows start
/// provisional (`uploaded = false`) with an upload deadline and flip to
/// finalized exactly once when the hosting flow completes; this service
/// only ever reads finalized rows and deletes expired provisional ones.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;

use crate::error::Result;

pub mod video_repo;

pub use video_repo::{VideoRepo, TRENDING_LIMIT};

/// Catalog operations the trending core needs from storage.
///
/// Kept minimal so tests can substitute an in-memory fake for the
/// Postgres-backed implementation.
#[async_trait]
pub trait VideoCatalog: Send + Sync {
    /// Identifiers of finalized videos, ascending by `date_uploaded`,
    /// truncated to [`TRENDING_LIMIT`]. Empty catalog yields an empty vec.
    async fn trending_candidates(&self) -> Result<Vec<String>>;

    /// Delete provisional rows whose `timeout_date` is strictly before
    /// `cutoff` and report exactly how many were removed.
    async fn prune_expired(&self, cutoff: DateTime<Utc>) -> Result<u64>;
}

/// Ensure the videos catalog table exists.
///
/// Lazily created at service startup to unblock environments where the
/// upstream upload flow has not provisioned the schema yet (fresh developer
/// machines, CI spins).
pub async fn ensure_videos_table(pool: &PgPool) -> Result<()> {
    info!("Ensuring videos catalog table exists");

    sqlx::query(VIDEOS_TABLE).execute(pool).await?;

    Ok(())
}

const VIDEOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS videos (
    id            TEXT PRIMARY KEY,
    uploaded      BOOLEAN NOT NULL DEFAULT FALSE,
    date_uploaded TIMESTAMPTZ,
    timeout_date  TIMESTAMPTZ NOT NULL
)
"#;
