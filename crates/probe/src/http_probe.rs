//! HttpProbe - reqwest-backed transport

use crate::transport::{Method, ProbeResponse, Transport};
use async_trait::async_trait;
use shared::{Result, SmokeConfig, SmokeError};
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// Issues requests against a live catalog server
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpProbe {
    /// Create a probe for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SmokeError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SmokeError::Config(format!(
                "Base URL must use http or https, got '{}'",
                base_url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SmokeError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Create a probe from a validated configuration
    pub fn from_config(config: &SmokeConfig) -> Result<Self> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request path the way a browser resolves it against the page's base
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| SmokeError::Config(format!("Cannot resolve '{}': {}", path, e)))
    }

    async fn send(&self, method: Method, path: &str) -> Result<ProbeResponse> {
        let url = self.resolve(path)?;
        let request = match method {
            Method::Get => self.client.get(url.clone()),
            Method::Post => self.client.post(url.clone()),
        };

        let started = Instant::now();
        let response = request.send().await.map_err(|e| SmokeError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = response.text().await.map_err(|e| SmokeError::Transport {
            url: url.to_string(),
            reason: format!("failed to read body: {}", e),
        })?;

        debug!(
            %method,
            url = %url,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "probe exchange"
        );

        Ok(ProbeResponse {
            method,
            path: path.to_string(),
            url: url.to_string(),
            status,
            content_type,
            body,
        })
    }
}

#[async_trait]
impl Transport for HttpProbe {
    async fn get(&self, path: &str) -> Result<ProbeResponse> {
        self.send(Method::Get, path).await
    }

    async fn post(&self, path: &str) -> Result<ProbeResponse> {
        self.send(Method::Post, path).await
    }
}
