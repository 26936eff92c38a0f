//! API Server - HTTP server for document intake

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::processor::DocumentProcessor;
use crate::storage::{DocumentStore, TempFileStore};

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
    request_timeout: Duration,
    max_body_bytes: usize,
}

impl ApiServer {
    /// Create a new API server backed by an arbitrary store
    pub fn new(config: &Config, store: Arc<dyn DocumentStore>) -> Self {
        let state = Arc::new(AppState {
            processor: DocumentProcessor::new(store),
        });

        Self {
            state,
            addr: config.listen_addr(),
            request_timeout: Duration::from_secs(config.server.request_timeout_seconds),
            max_body_bytes: config.server.max_body_bytes,
        }
    }

    /// Create a server persisting into the configured temp directory
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(TempFileStore::new(&config.storage.temp_dir));
        Self::new(config, store)
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/process-document", post(handlers::process_document))
            .route("/cleanup/:file_path", delete(handlers::cleanup))
            .layer(DefaultBodyLimit::max(self.max_body_bytes))
            .layer(TimeoutLayer::new(self.request_timeout))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> Result<()> {
        let router = self.router();

        info!("🌐 Document Handler API listening on http://{}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
