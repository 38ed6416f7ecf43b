use crate::error::ProxyError;
use async_trait::async_trait;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const MESSAGES_PATH: &str = "/v1/messages";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// What the upstream answered, relayed verbatim regardless of status.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: serde_json::Value,
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        // Non-standard codes the http crate rejects (<100 or >999) degrade to 502.
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_GATEWAY);
        let mut response = (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body.to_string(),
        )
            .into_response();
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        response
    }
}

/// Forwards one message-creation request upstream.
///
/// `api_key` is injected by the caller from server-side configuration;
/// implementations must never take it from the inbound request.
#[async_trait]
pub trait UpstreamExecutor: Send + Sync {
    fn identifier(&self) -> &str;

    async fn forward(
        &self,
        api_key: &str,
        body: &serde_json::Value,
    ) -> Result<UpstreamReply, ProxyError>;
}
