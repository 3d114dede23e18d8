/// Trending Service
///
/// Coordinates the two operations this service exposes: assembling the
/// trending list (catalog selection followed by per-video detail lookup
/// against the hosting service) and pruning expired provisional uploads.
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info};
use video_host_client::{VideoDetail, VideoHostClient};

use crate::db::VideoCatalog;
use crate::error::{AppError, Result};

/// The service surface: exactly the two operations callers may invoke.
///
/// Handlers depend on this trait, not on the concrete repository, so a
/// fake storage/provider pair can stand in during tests.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn get_trending(&self) -> Result<Vec<VideoDetail>>;
    async fn prune(&self) -> Result<u64>;
}

/// Detail lookup against the video-hosting service.
#[async_trait]
pub trait VideoHost: Send + Sync {
    async fn get_video_info(&self, id: &str) -> Result<VideoDetail>;
}

#[async_trait]
impl VideoHost for VideoHostClient {
    async fn get_video_info(&self, id: &str) -> Result<VideoDetail> {
        VideoHostClient::get_video_info(self, id)
            .await
            .map_err(AppError::from)
    }
}

pub struct TrendingRepository {
    catalog: Arc<dyn VideoCatalog>,
    host: Arc<dyn VideoHost>,
}

impl TrendingRepository {
    pub fn new(catalog: Arc<dyn VideoCatalog>, host: Arc<dyn VideoHost>) -> Self {
        Self { catalog, host }
    }
}

#[async_trait]
impl Repository for TrendingRepository {
    #[tracing::instrument(skip(self))]
    async fn get_trending(&self) -> Result<Vec<VideoDetail>> {
        let ids = self.catalog.trending_candidates().await?;
        debug!(candidates = ids.len(), "Selected trending candidates");

        // One host call per candidate, strictly in selection order. The
        // first failure aborts the whole request and drops anything fetched
        // so far: the trending list is a fully resolved snapshot or nothing.
        let mut data = Vec::with_capacity(ids.len());
        for id in &ids {
            let detail = self.host.get_video_info(id).await.map_err(|e| {
                error!(video_id = %id, error = %e, "Video detail lookup failed");
                e
            })?;
            data.push(detail);
        }

        Ok(data)
    }

    #[tracing::instrument(skip(self))]
    async fn prune(&self) -> Result<u64> {
        // Cutoff captured once so every row is judged against the same
        // instant, however long the delete takes.
        let cutoff = Utc::now();
        let pruned = self.catalog.prune_expired(cutoff).await?;

        info!(num_pruned = pruned, "Pruned expired provisional videos");
        Ok(pruned)
    }
}
