//! import-and-featured: load the sample data, then list featured observations

use super::SmokeCheck;
use async_trait::async_trait;
use probe::Transport;
use shared::{
    expect_array, expect_object, require_fields, CheckId, Result, SmokeError, FEATURED_FIELDS,
    IMPORT_SUMMARY_FIELDS,
};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ImportAndFeaturedCheck {
    limit: u32,
    settle: Duration,
}

impl ImportAndFeaturedCheck {
    pub fn new(limit: u32, settle: Duration) -> Self {
        Self { limit, settle }
    }
}

#[async_trait]
impl SmokeCheck for ImportAndFeaturedCheck {
    fn id(&self) -> CheckId {
        CheckId::ImportAndFeatured
    }

    async fn run(&self, transport: &dyn Transport) -> Result<()> {
        let response = transport.post("/api/import/sample").await?;
        response.expect_ok(200)?;

        let summary = response.json()?;
        let summary = expect_object(&summary, "import summary")?;
        require_fields(summary, &IMPORT_SUMMARY_FIELDS, "import summary")?;
        info!(
            total_processed = %summary["totalProcessed"],
            imported = %summary["imported"],
            duplicates = %summary.get("duplicatesFound").cloned().unwrap_or_default(),
            status = %summary.get("status").cloned().unwrap_or_default(),
            "sample import finished"
        );

        // The import may still be settling server-side.
        tokio::time::sleep(self.settle).await;

        let response = transport
            .get(&format!("/api/featured?limit={}", self.limit))
            .await?;
        response.expect_ok(200)?;

        let featured = response.json()?;
        let featured = expect_array(&featured, "featured observations")?;
        debug!(count = featured.len(), limit = self.limit, "featured observations listed");

        if featured.len() > self.limit as usize {
            return Err(SmokeError::assertion(format!(
                "featured returned {} observations, limit was {}",
                featured.len(),
                self.limit
            )));
        }

        if let Some(first) = featured.first() {
            let first = expect_object(first, "featured[0]")?;
            require_fields(first, &FEATURED_FIELDS, "featured[0]")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use probe::{Method, StubReply, StubTransport};
    use serde_json::json;
    use std::time::Instant;

    fn check() -> ImportAndFeaturedCheck {
        ImportAndFeaturedCheck::new(2, Duration::ZERO)
    }

    fn catalog_with_featured(reply: StubReply) -> StubTransport {
        StubTransport::new()
            .on_post("/api/import/sample", StubReply::json(200, fixtures::import_summary()))
            .on_get("/api/featured?limit=2", reply)
    }

    #[tokio::test]
    async fn test_import_then_featured_passes() {
        let stub = fixtures::healthy_catalog();
        check().run(&stub).await.unwrap();

        assert_eq!(
            stub.requests(),
            vec![
                (Method::Post, "/api/import/sample".to_string()),
                (Method::Get, "/api/featured?limit=2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_waits_settle_delay_between_requests() {
        let stub = fixtures::healthy_catalog();
        let started = Instant::now();
        ImportAndFeaturedCheck::new(2, Duration::from_millis(50))
            .run(&stub)
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_empty_featured_list_passes() {
        let stub = catalog_with_featured(StubReply::json(200, json!([])));
        check().run(&stub).await.unwrap();
    }

    #[tokio::test]
    async fn test_only_first_item_is_inspected() {
        let stub = catalog_with_featured(StubReply::json(
            200,
            json!([fixtures::observation(1, "Carina", 90), { "id": 2 }]),
        ));
        check().run(&stub).await.unwrap();
    }

    #[tokio::test]
    async fn test_import_failure_skips_featured() {
        let stub = StubTransport::new().on_post(
            "/api/import/sample",
            StubReply::json(500, fixtures::error_body("INTERNAL_ERROR", 500, "An unexpected error occurred", "/api/import/sample")),
        );
        let err = check().run(&stub).await.unwrap_err();

        assert!(err.to_string().contains("returned 500"));
        assert_eq!(stub.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_import_summary_missing_imported() {
        let stub = StubTransport::new()
            .on_post("/api/import/sample", StubReply::json(200, json!({ "totalProcessed": 4 })));
        let err = check().run(&stub).await.unwrap_err();

        assert!(matches!(err, SmokeError::MissingField(ref e) if e.field == "imported"));
    }

    #[tokio::test]
    async fn test_import_non_200_success_fails() {
        let stub = StubTransport::new()
            .on_post("/api/import/sample", StubReply::json(202, fixtures::import_summary()));
        let err = check().run(&stub).await.unwrap_err();
        assert!(err.to_string().contains("returned 202, expected 200"));
    }

    #[tokio::test]
    async fn test_too_many_featured_fails() {
        let stub = catalog_with_featured(StubReply::json(
            200,
            json!([
                fixtures::observation(1, "A", 90),
                fixtures::observation(2, "B", 80),
                fixtures::observation(3, "C", 70)
            ]),
        ));
        let err = check().run(&stub).await.unwrap_err();
        assert!(err.to_string().contains("returned 3 observations, limit was 2"));
    }

    #[tokio::test]
    async fn test_featured_not_array_fails() {
        let stub = catalog_with_featured(StubReply::json(200, fixtures::page(vec![], 2, 0)));
        let err = check().run(&stub).await.unwrap_err();
        assert!(matches!(err, SmokeError::ShapeMismatch(_)));
    }

    #[tokio::test]
    async fn test_first_featured_missing_score_fails() {
        let stub = catalog_with_featured(StubReply::json(
            200,
            json!([{ "id": 1, "telescope": "JWST", "targetName": "Carina" }]),
        ));
        let err = check().run(&stub).await.unwrap_err();
        assert!(matches!(err, SmokeError::MissingField(ref e) if e.field == "score"));
    }
}
