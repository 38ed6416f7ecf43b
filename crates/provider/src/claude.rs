use async_trait::async_trait;
use relay_core::error::ProxyError;
use relay_core::provider::{
    ANTHROPIC_VERSION, DEFAULT_BASE_URL, MESSAGES_PATH, UpstreamExecutor, UpstreamReply,
};

/// Forwards to the Anthropic Messages API with `x-api-key` auth.
pub struct MessagesExecutor {
    client: reqwest::Client,
    url: String,
}

impl MessagesExecutor {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        let base_url = if base_url.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            base_url
        };
        let url = format!("{}{MESSAGES_PATH}", base_url.trim_end_matches('/'));
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn build_request(&self, api_key: &str, body: &serde_json::Value) -> reqwest::RequestBuilder {
        self.client
            .post(&self.url)
            .header("content-type", "application/json")
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .body(body.to_string())
    }
}

#[async_trait]
impl UpstreamExecutor for MessagesExecutor {
    fn identifier(&self) -> &str {
        "claude"
    }

    async fn forward(
        &self,
        api_key: &str,
        body: &serde_json::Value,
    ) -> Result<UpstreamReply, ProxyError> {
        let resp = self.build_request(api_key, body).send().await?;
        let status = resp.status().as_u16();

        tracing::debug!(status, url = %self.url, "Upstream responded");

        // Upstream errors still carry JSON; only a non-JSON body is a failure.
        let body = resp.json::<serde_json::Value>().await?;
        Ok(UpstreamReply { status, body })
    }
}
