use crate::AppState;
use axum::extract::{Request, State};
use axum::http::Method;
use relay_core::context::RequestContext;
use relay_core::env::read_secret;
use relay_core::error::ProxyError;
use relay_core::provider::UpstreamReply;

/// Credential-injecting passthrough to the Messages API.
///
/// Order matters: method, then API key, then body. The first two reject
/// before any upstream call; everything after folds into `ProxyError::Proxy`.
pub async fn messages(
    State(state): State<AppState>,
    request: Request,
) -> Result<UpstreamReply, ProxyError> {
    if request.method() != Method::POST {
        return Err(ProxyError::MethodNotAllowed);
    }

    let request_id = request
        .extensions()
        .get::<RequestContext>()
        .map(|c| c.request_id.clone())
        .unwrap_or_default();

    let Some(api_key) = read_secret(&*state.env, &state.api_key_env) else {
        tracing::error!(
            request_id = %request_id,
            var = %state.api_key_env,
            "API key environment variable not set"
        );
        return Err(ProxyError::ConfigMissing(state.api_key_env.to_string()));
    };

    match forward(&state, &api_key, request).await {
        Ok(reply) => {
            tracing::debug!(
                request_id = %request_id,
                upstream = state.executor.identifier(),
                status = reply.status,
                "Relayed upstream reply"
            );
            Ok(reply)
        }
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Proxy failure");
            Err(e)
        }
    }
}

async fn forward(
    state: &AppState,
    api_key: &str,
    request: Request,
) -> Result<UpstreamReply, ProxyError> {
    let bytes = axum::body::to_bytes(request.into_body(), state.body_limit_bytes).await?;
    let body: serde_json::Value = serde_json::from_slice(&bytes)?;
    state.executor.forward(api_key, &body).await
}
