//! Configuration types for cosmic-smoke

use crate::{CheckId, Result, SmokeError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "COSMIC_BASE_URL";

/// Default file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "cosmic-smoke.yaml";

/// Top-level smoke configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SmokeConfig {
    /// Root URL of the running Cosmic Catalog server
    pub base_url: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Fixed wait between the sample import and the featured fetch
    pub import_settle_ms: u64,

    /// `limit` query parameter for the featured endpoint
    pub featured_limit: u32,

    /// `size` query parameter for the observations endpoint
    pub page_size: u32,

    /// Home page expectations
    pub home_page: HomePageExpectations,

    /// Parameters for the extended checks
    pub extended: ExtendedChecksConfig,

    /// Checks to run when none are named on the command line
    pub checks: Vec<CheckId>,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 10_000,
            import_settle_ms: 500,
            featured_limit: 2,
            page_size: 1,
            home_page: HomePageExpectations::default(),
            extended: ExtendedChecksConfig::default(),
            checks: CheckId::core(),
        }
    }
}

/// What the rendered home page must contain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomePageExpectations {
    /// Regular expression the document title must match
    pub title_pattern: String,

    /// Text the first heading must contain, compared lower-cased
    pub heading_keyword: String,
}

impl Default for HomePageExpectations {
    fn default() -> Self {
        Self {
            title_pattern: "(?i)cosmic".to_string(),
            heading_keyword: "cosmic".to_string(),
        }
    }
}

/// Parameters for checks beyond the core three
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtendedChecksConfig {
    /// Observation id assumed not to exist on the server
    pub missing_observation_id: u64,

    /// Path of the static OpenAPI document
    pub openapi_path: String,

    /// Substrings the OpenAPI document must contain
    pub openapi_markers: Vec<String>,
}

impl Default for ExtendedChecksConfig {
    fn default() -> Self {
        Self {
            missing_observation_id: 999_999_999,
            openapi_path: "/openapi.yaml".to_string(),
            openapi_markers: vec![
                "openapi: 3.0.3".to_string(),
                "/api/import/realistic".to_string(),
            ],
        }
    }
}

impl SmokeConfig {
    /// Load configuration from a YAML or JSON file
    ///
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let config: Self = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        Ok(config)
    }

    /// Apply `COSMIC_BASE_URL` if set
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = url.trim().to_string();
            }
        }
    }

    /// Reject configurations no check could run with
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            SmokeError::Config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SmokeError::Config(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.featured_limit == 0 {
            return Err(SmokeError::Config("featuredLimit must be at least 1".to_string()));
        }
        if self.page_size == 0 {
            return Err(SmokeError::Config("pageSize must be at least 1".to_string()));
        }
        if self.home_page.heading_keyword.trim().is_empty() {
            return Err(SmokeError::Config("homePage.headingKeyword must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn import_settle(&self) -> Duration {
        Duration::from_millis(self.import_settle_ms)
    }
}
