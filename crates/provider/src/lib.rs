pub mod claude;

use relay_core::config::UpstreamConfig;
use relay_core::error::ProxyError;
use relay_core::provider::UpstreamExecutor;
use std::sync::Arc;

/// Build the executor the relay forwards to.
pub fn build_executor(cfg: &UpstreamConfig) -> Result<Arc<dyn UpstreamExecutor>, ProxyError> {
    let client = relay_core::proxy::build_http_client(cfg)
        .map_err(|e| ProxyError::Proxy(format!("failed to build HTTP client: {e}")))?;
    Ok(Arc::new(claude::MessagesExecutor::new(
        client,
        cfg.base_url.clone(),
    )))
}
