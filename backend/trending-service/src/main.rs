use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use video_host_client::VideoHostClient;

use trending_service::config::Config;
use trending_service::db::{self, VideoRepo};
use trending_service::handlers::{self, TrendingHandlerState};
use trending_service::services::{Repository, TrendingRepository};

async fn health(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "trending-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "trending-service"
        })),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Starting trending-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to create database pool");

    db::ensure_videos_table(&pool)
        .await
        .expect("Failed to ensure videos table");

    let host = VideoHostClient::new(
        config.video_host.url.clone(),
        Duration::from_secs(config.video_host.timeout_secs),
    )
    .expect("Failed to build video host client");

    let repo: Arc<dyn Repository> =
        Arc::new(TrendingRepository::new(Arc::new(VideoRepo::new(pool.clone())), Arc::new(host)));

    let state = web::Data::new(TrendingHandlerState { repo });
    let db_pool = web::Data::new(pool);

    tracing::info!(port = config.app.port, "Binding HTTP server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(db_pool.clone())
            .route("/health", web::get().to(health))
            .service(handlers::get_trending)
            .service(handlers::prune)
    })
    .bind(format!("0.0.0.0:{}", config.app.port))?
    .run()
    .await
}
