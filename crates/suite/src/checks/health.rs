//! health: version, entity counts and last import timestamp

use super::SmokeCheck;
use async_trait::async_trait;
use probe::Transport;
use serde_json::Value;
use shared::{expect_object, expect_u64, kind_of, require_fields, CheckId, Result, ShapeMismatchError};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct HealthCheck;

#[async_trait]
impl SmokeCheck for HealthCheck {
    fn id(&self) -> CheckId {
        CheckId::Health
    }

    async fn run(&self, transport: &dyn Transport) -> Result<()> {
        let response = transport.get("/health").await?;
        response.expect_ok(200)?;

        let body = response.json()?;
        let health = expect_object(&body, "health")?;
        require_fields(health, &["version", "counts", "lastImport"], "health")?;

        let version = health["version"].as_str().ok_or_else(|| ShapeMismatchError {
            context: "health.version".to_string(),
            expected: "string".to_string(),
            found: kind_of(&health["version"]).to_string(),
        })?;

        let counts = expect_object(&health["counts"], "health.counts")?;
        let observations = expect_u64(counts, "obs", "health.counts")?;
        let targets = expect_u64(counts, "targets", "health.counts")?;

        let last_import = match &health["lastImport"] {
            Value::Null => None,
            Value::String(s) => Some(s.as_str()),
            other => {
                return Err(ShapeMismatchError {
                    context: "health.lastImport".to_string(),
                    expected: "string or null".to_string(),
                    found: kind_of(other).to_string(),
                }
                .into())
            }
        };

        info!(version, observations, targets, last_import = ?last_import, "catalog health");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use probe::{StubReply, StubTransport};
    use serde_json::json;
    use shared::SmokeError;

    fn serving(body: Value) -> StubTransport {
        StubTransport::new().on_get("/health", StubReply::json(200, body))
    }

    #[tokio::test]
    async fn test_catalog_health_passes() {
        HealthCheck.run(&fixtures::healthy_catalog()).await.unwrap();
    }

    #[tokio::test]
    async fn test_no_imports_yet_passes() {
        let stub = serving(json!({
            "version": "0.0.1-SNAPSHOT",
            "counts": { "obs": 0, "targets": 0 },
            "lastImport": null
        }));
        HealthCheck.run(&stub).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_last_import_key_fails() {
        let stub = serving(json!({ "version": "1.0.0", "counts": { "obs": 0, "targets": 0 } }));
        let err = HealthCheck.run(&stub).await.unwrap_err();
        assert!(matches!(err, SmokeError::MissingField(ref e) if e.field == "lastImport"));
    }

    #[tokio::test]
    async fn test_negative_count_fails() {
        let stub = serving(json!({
            "version": "1.0.0",
            "counts": { "obs": -1, "targets": 0 },
            "lastImport": null
        }));
        let err = HealthCheck.run(&stub).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "health.counts.obs: expected non-negative integer, found number"
        );
    }

    #[tokio::test]
    async fn test_numeric_version_fails() {
        let stub = serving(json!({
            "version": 1,
            "counts": { "obs": 0, "targets": 0 },
            "lastImport": null
        }));
        let err = HealthCheck.run(&stub).await.unwrap_err();
        assert!(err.to_string().starts_with("health.version: expected string"));
    }
}
