//! Transport seam between the checks and the catalog server

use async_trait::async_trait;
use shared::{Result, SmokeError, UnexpectedStatusError};
use std::fmt;

/// HTTP method used by a probe request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// A fully-buffered response from the server
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub method: Method,
    /// Request path as the check issued it, query included
    pub path: String,
    /// Absolute URL the request went to
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl ProbeResponse {
    /// 2xx status
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail unless the status is exactly `expected`
    pub fn expect_status(&self, expected: u16) -> Result<()> {
        if self.status == expected {
            return Ok(());
        }
        Err(UnexpectedStatusError {
            method: self.method.to_string(),
            path: self.path.clone(),
            expected: expected.to_string(),
            actual: self.status,
        }
        .into())
    }

    /// Fail unless the status is 2xx and exactly `expected`
    pub fn expect_ok(&self, expected: u16) -> Result<()> {
        if !self.is_ok() {
            return Err(UnexpectedStatusError {
                method: self.method.to_string(),
                path: self.path.clone(),
                expected: "a 2xx status".to_string(),
                actual: self.status,
            }
            .into());
        }
        self.expect_status(expected)
    }

    /// Parse the body as JSON
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.body).map_err(|e| SmokeError::NotJson {
            url: self.url.clone(),
            reason: e.to_string(),
        })
    }
}

/// Something that can issue requests against the catalog
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET for `path` (relative to the base URL, query allowed)
    async fn get(&self, path: &str) -> Result<ProbeResponse>;

    /// Issue a bodiless POST for `path`
    async fn post(&self, path: &str) -> Result<ProbeResponse>;
}
