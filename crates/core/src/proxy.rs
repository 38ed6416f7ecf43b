use crate::config::UpstreamConfig;
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Build the upstream HTTP client.
///
/// - `proxy-url` set → all traffic goes through it
/// - unset → direct connection; system proxy env vars are ignored
/// - timeouts are applied only when configured
pub fn build_http_client(cfg: &UpstreamConfig) -> Result<Client, anyhow::Error> {
    let mut builder =
        Client::builder().user_agent(concat!("claude-relay/", env!("CARGO_PKG_VERSION")));

    if let Some(secs) = cfg.connect_timeout {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = cfg.request_timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    match cfg.proxy_url.as_deref() {
        Some(url) if !url.is_empty() => {
            builder = builder.proxy(Proxy::all(url)?); // reqwest auto-detects http/https/socks5
        }
        _ => {
            builder = builder.no_proxy();
        }
    }

    Ok(builder.build()?)
}

/// Validate that a proxy URL is well-formed.
pub fn validate_proxy_url(url: &str) -> Result<(), anyhow::Error> {
    if url.is_empty() {
        return Ok(());
    }
    let parsed =
        url::Url::parse(url).map_err(|e| anyhow::anyhow!("invalid proxy URL '{url}': {e}"))?;
    match parsed.scheme() {
        "http" | "https" | "socks5" => Ok(()),
        scheme => Err(anyhow::anyhow!(
            "unsupported proxy scheme '{scheme}' in URL '{url}', expected http/https/socks5"
        )),
    }
}
