pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod schemas;

use std::sync::Arc;
use std::time::Duration;
use actix_web::HttpResponse;

pub use error::AppError;
pub type Result<T> = std::result::Result<T, AppError>;
pub use config::Settings;

pub use db::{DbOperations, Employee, Goal, Review, Store};

/// Health check endpoint handler
/// Returns a JSON response with server status and timestamp
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Application state shared across all workers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Connects to PostgreSQL and makes sure the schema exists.
    pub async fn new(config: Settings) -> Result<Self> {
        let db = DbOperations::new_with_options(
            &config.database.url,
            config.database.max_connections,
            Duration::from_secs(config.database.acquire_timeout_secs),
        )
        .await
        .map_err(|e| AppError::DatabaseError(error::DatabaseError::ConnectionError(e.to_string())))?;

        db::ensure_schema(db.pool()).await?;

        Ok(Self::with_store(config, Arc::new(db)))
    }

    pub fn with_store(config: Settings, store: Arc<dyn Store>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
