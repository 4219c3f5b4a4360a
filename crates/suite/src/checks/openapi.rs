//! openapi-document: the static API description is served

use super::SmokeCheck;
use async_trait::async_trait;
use probe::Transport;
use shared::{CheckId, Result, SmokeError};

#[derive(Debug, Clone)]
pub struct OpenApiDocumentCheck {
    path: String,
    markers: Vec<String>,
}

impl OpenApiDocumentCheck {
    pub fn new(path: impl Into<String>, markers: Vec<String>) -> Self {
        Self {
            path: path.into(),
            markers,
        }
    }
}

#[async_trait]
impl SmokeCheck for OpenApiDocumentCheck {
    fn id(&self) -> CheckId {
        CheckId::OpenApiDocument
    }

    async fn run(&self, transport: &dyn Transport) -> Result<()> {
        let response = transport.get(&self.path).await?;
        response.expect_ok(200)?;

        let missing: Vec<&str> = self
            .markers
            .iter()
            .filter(|m| !response.body.contains(m.as_str()))
            .map(|m| m.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(SmokeError::assertion(format!(
                "{} lacks: {}",
                self.path,
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use probe::{StubReply, StubTransport};
    use shared::ExtendedChecksConfig;

    fn check() -> OpenApiDocumentCheck {
        let config = ExtendedChecksConfig::default();
        OpenApiDocumentCheck::new(config.openapi_path, config.openapi_markers)
    }

    #[tokio::test]
    async fn test_catalog_document_passes() {
        check().run(&fixtures::healthy_catalog()).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_marker_fails() {
        let stub = StubTransport::new().on_get(
            "/openapi.yaml",
            StubReply::text(200, "openapi: 3.0.3\npaths:\n  /api/import/sample: {}\n"),
        );
        let err = check().run(&stub).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Assertion failed: /openapi.yaml lacks: /api/import/realistic"
        );
    }

    #[tokio::test]
    async fn test_not_served_fails() {
        let err = check().run(&StubTransport::new()).await.unwrap_err();
        assert!(err.to_string().contains("GET /openapi.yaml returned 404"));
    }
}
