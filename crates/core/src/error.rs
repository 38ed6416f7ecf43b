use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Local outcomes of a proxy invocation that never reach the upstream's
/// own status. Upstream 4xx/5xx replies are not errors and never land here.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Carries the name of the missing environment variable, never a value.
    #[error("{0} environment variable not set")]
    ConfigMissing(String),

    #[error("Proxy error: {0}")]
    Proxy(String),
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::ConfigMissing(_) | Self::Proxy(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            Self::MethodNotAllowed | Self::ConfigMissing(_) => json!({ "error": self.to_string() }),
            Self::Proxy(detail) => json!({ "error": "Proxy error", "detail": detail }),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body().to_string(),
        )
            .into_response();

        // Failures past the config check are proxied responses and stay
        // readable from any origin.
        if matches!(self, Self::Proxy(_)) {
            response.headers_mut().insert(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            );
        }
        response
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        // Strip the URL so the detail never carries query strings.
        let e = e.without_url();
        if e.is_timeout() {
            Self::Proxy(format!("request timed out: {e}"))
        } else if e.is_connect() {
            Self::Proxy(format!("connection failed: {e}"))
        } else if e.is_decode() {
            Self::Proxy(format!("invalid upstream response: {e}"))
        } else {
            Self::Proxy(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Proxy(e.to_string())
    }
}

impl From<axum::Error> for ProxyError {
    fn from(e: axum::Error) -> Self {
        Self::Proxy(format!("failed to read request body: {e}"))
    }
}
