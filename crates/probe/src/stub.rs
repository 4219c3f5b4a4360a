//! StubTransport - canned responses for exercising checks without a server

use crate::transport::{Method, ProbeResponse, Transport};
use async_trait::async_trait;
use shared::{Result, SmokeError};
use std::collections::HashMap;
use std::sync::Mutex;

/// A canned reply
#[derive(Debug, Clone)]
pub struct StubReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl StubReply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    pub fn html(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/html;charset=UTF-8".to_string()),
            body: body.into(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain".to_string()),
            body: body.into(),
        }
    }
}

/// In-memory transport keyed by method and exact path
///
/// Unregistered routes answer 404. Routes registered with [`StubTransport::unreachable`]
/// fail as a transport error.
#[derive(Debug, Default)]
pub struct StubTransport {
    replies: HashMap<(Method, String), Option<StubReply>>,
    requests: Mutex<Vec<(Method, String)>>,
}

impl StubTransport {
    /// Create an empty StubTransport
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a GET reply
    pub fn on_get(mut self, path: impl Into<String>, reply: StubReply) -> Self {
        self.replies.insert((Method::Get, path.into()), Some(reply));
        self
    }

    /// Register a POST reply
    pub fn on_post(mut self, path: impl Into<String>, reply: StubReply) -> Self {
        self.replies.insert((Method::Post, path.into()), Some(reply));
        self
    }

    /// Make a route fail as if the connection were refused
    pub fn unreachable(mut self, method: Method, path: impl Into<String>) -> Self {
        self.replies.insert((method, path.into()), None);
        self
    }

    /// Requests issued so far, in order
    pub fn requests(&self) -> Vec<(Method, String)> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn reply(&self, method: Method, path: &str) -> Result<ProbeResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push((method, path.to_string()));
        }

        let url = format!("http://stub{}", path);
        match self.replies.get(&(method, path.to_string())) {
            Some(Some(reply)) => Ok(ProbeResponse {
                method,
                path: path.to_string(),
                url,
                status: reply.status,
                content_type: reply.content_type.clone(),
                body: reply.body.clone(),
            }),
            Some(None) => Err(SmokeError::Transport {
                url,
                reason: "connection refused".to_string(),
            }),
            None => Ok(ProbeResponse {
                method,
                path: path.to_string(),
                url,
                status: 404,
                content_type: None,
                body: String::new(),
            }),
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, path: &str) -> Result<ProbeResponse> {
        self.reply(Method::Get, path)
    }

    async fn post(&self, path: &str) -> Result<ProbeResponse> {
        self.reply(Method::Post, path)
    }
}
