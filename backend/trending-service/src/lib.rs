/// Trending Service
///
/// Computes the trending list of videos and retires stale, never-finalized
/// upload records. Candidate identifiers come from the Postgres catalog;
/// per-video detail comes from the video-hosting service.
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod services;
