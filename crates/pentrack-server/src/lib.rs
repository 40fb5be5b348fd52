#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod error;
mod http;
mod middleware;
mod store;
mod telemetry;

pub use config::{validate_startup_config_contract, ApiConfig, CONFIG_SCHEMA_VERSION};
pub use error::{Error, Result};
pub use store::{FakeStore, MemoryStore, ProjectStore};
pub use telemetry::RequestMetrics;

pub const CRATE_NAME: &str = "pentrack-server";

/// Shared per-process state handed to every handler.
///
/// The store is held behind the [`ProjectStore`] trait object so tests and
/// alternative backends can be swapped in without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub api: ApiConfig,
    pub metrics: Arc<RequestMetrics>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn ProjectStore>, api: ApiConfig) -> Self {
        Self {
            store,
            api,
            metrics: Arc::new(RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::dashboard_handler))
        .route(
            "/api/projects",
            get(http::handlers::list_projects_handler)
                .post(http::handlers::create_project_handler),
        )
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/api/version", get(http::handlers::version_handler))
        .route("/metrics", get(http::handlers::metrics_handler))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[tokio::test]
    async fn app_state_shares_one_store_across_clones() {
        let store = Arc::new(FakeStore::default());
        let state = AppState::new(store.clone());
        let cloned = state.clone();

        cloned.store.list().await;
        state.store.list().await;
        assert_eq!(store.list_calls.load(std::sync::atomic::Ordering::Relaxed), 2);
    }

    #[test]
    fn router_builds_with_default_config() {
        let state = AppState::new(Arc::new(MemoryStore::seeded()));
        let _router = build_router(state);
    }
}
