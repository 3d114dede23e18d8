use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use video_host_client::VideoDetail;

use crate::error::Result;
use crate::services::Repository;

/// Handler state shared across workers.
pub struct TrendingHandlerState {
    pub repo: Arc<dyn Repository>,
}

/// Response body for GET /api/v1/trending
#[derive(Debug, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub data: Vec<VideoDetail>,
}

/// Response body for POST /api/v1/trending/prune
#[derive(Debug, Serialize, Deserialize)]
pub struct PruneResponse {
    pub num_pruned: u64,
}

/// GET /api/v1/trending
///
/// Returns full detail for the current trending candidates, in selection
/// order. All-or-nothing: any failure yields an error response, never a
/// partial list.
#[get("/api/v1/trending")]
pub async fn get_trending(state: web::Data<TrendingHandlerState>) -> Result<HttpResponse> {
    debug!("Trending request received");

    let data = state.repo.get_trending().await.map_err(|e| {
        error!(error = %e, "Failed to assemble trending list");
        e
    })?;

    Ok(HttpResponse::Ok().json(TrendingResponse { data }))
}

/// POST /api/v1/trending/prune
///
/// Deletes provisional uploads past their deadline and reports the exact
/// number of rows removed.
#[post("/api/v1/trending/prune")]
pub async fn prune(state: web::Data<TrendingHandlerState>) -> Result<HttpResponse> {
    debug!("Prune request received");

    let num_pruned = state.repo.prune().await.map_err(|e| {
        error!(error = %e, "Failed to prune expired videos");
        e
    })?;

    Ok(HttpResponse::Ok().json(PruneResponse { num_pruned }))
}
