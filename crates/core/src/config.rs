use serde::{Deserialize, Serialize};

// ─── Config ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    /// Path the proxy handler is mounted on (all methods).
    pub route_path: String,

    // Request body size limit (MB)
    pub body_limit_mb: usize,

    // Logging
    pub logging_to_file: bool,
    pub log_dir: Option<String>,
    pub log_format: LogFormat,

    // Graceful shutdown drain (seconds)
    pub shutdown_timeout: u64,

    pub upstream: UpstreamConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8888,
            route_path: "/api/claude".to_string(),
            body_limit_mb: 10,
            logging_to_file: false,
            log_dir: None,
            log_format: LogFormat::Text,
            shutdown_timeout: 5,
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file, sanitize, and validate.
    pub fn load(path: &str) -> Result<Self, anyhow::Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, anyhow::Error> {
        let mut config: Config = serde_yaml_ng::from_str(contents)?;
        config.sanitize();
        config.validate()?;
        Ok(config)
    }

    /// Body limit in bytes.
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb.saturating_mul(1024 * 1024)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        anyhow::ensure!(
            self.route_path.starts_with('/'),
            "route-path must start with '/', got '{}'",
            self.route_path
        );
        anyhow::ensure!(
            self.route_path != "/health",
            "route-path '/health' is reserved"
        );
        anyhow::ensure!(
            !self.upstream.api_key_env.is_empty(),
            "upstream.api-key-env must not be empty"
        );
        validate_base_url(&self.upstream.base_url)?;
        if let Some(ref proxy) = self.upstream.proxy_url {
            crate::proxy::validate_proxy_url(proxy)?;
        }
        Ok(())
    }

    fn sanitize(&mut self) {
        // Strip trailing slash from base_url
        while self.upstream.base_url.ends_with('/') {
            self.upstream.base_url.pop();
        }
        self.upstream.api_key_env = self.upstream.api_key_env.trim().to_string();
        if self.upstream.proxy_url.as_deref() == Some("") {
            self.upstream.proxy_url = None;
        }
    }
}

fn validate_base_url(base_url: &str) -> Result<(), anyhow::Error> {
    let parsed = url::Url::parse(base_url)
        .map_err(|e| anyhow::anyhow!("invalid upstream base-url '{base_url}': {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(anyhow::anyhow!(
            "unsupported upstream scheme '{scheme}' in '{base_url}', expected http/https"
        )),
    }
}

// ─── Sub-configs ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct UpstreamConfig {
    pub base_url: String,
    /// Name of the environment variable holding the API key. The key itself
    /// never lives in the config file.
    pub api_key_env: String,
    pub proxy_url: Option<String>,
    /// Unset means no explicit timeout.
    pub connect_timeout: Option<u64>,
    pub request_timeout: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: crate::provider::DEFAULT_BASE_URL.to_string(),
            api_key_env: crate::provider::DEFAULT_API_KEY_ENV.to_string(),
            proxy_url: None,
            connect_timeout: None,
            request_timeout: None,
        }
    }
}
