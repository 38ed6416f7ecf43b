pub mod handler;
pub mod middleware;

use axum::{Router, middleware as axum_mw};
use relay_core::env::ReadEnv;
use relay_core::provider::UpstreamExecutor;
use std::sync::Arc;

/// Shared, read-only state handed to every invocation.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<dyn UpstreamExecutor>,
    /// Source of the API key, consulted on every request.
    pub env: Arc<dyn ReadEnv + Send + Sync>,
    /// Name of the variable holding the API key.
    pub api_key_env: Arc<str>,
    pub body_limit_bytes: usize,
}

impl AppState {
    pub fn from_config(
        config: &relay_core::config::Config,
        executor: Arc<dyn UpstreamExecutor>,
        env: Arc<dyn ReadEnv + Send + Sync>,
    ) -> Self {
        Self {
            executor,
            env,
            api_key_env: Arc::from(config.upstream.api_key_env.as_str()),
            body_limit_bytes: config.body_limit_bytes(),
        }
    }
}

/// Mount the relay on `route_path` (all methods) next to `/health`.
pub fn build_router(state: AppState, route_path: &str) -> Router {
    Router::new()
        .route("/health", axum::routing::get(handler::health::health))
        .route(route_path, axum::routing::any(handler::messages::messages))
        .layer(axum_mw::from_fn(
            middleware::request_logging::request_logging_middleware,
        ))
        .layer(axum_mw::from_fn(
            middleware::request_context::request_context_middleware,
        ))
        .with_state(state)
}
