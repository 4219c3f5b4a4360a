//! approve-missing-observation: approving an unknown id yields a NOT_FOUND error body

use super::{expect_error_code, SmokeCheck};
use async_trait::async_trait;
use probe::Transport;
use shared::{CheckId, Result};

#[derive(Debug, Clone, Copy)]
pub struct ApproveMissingObservationCheck {
    observation_id: u64,
}

impl ApproveMissingObservationCheck {
    pub fn new(observation_id: u64) -> Self {
        Self { observation_id }
    }
}

#[async_trait]
impl SmokeCheck for ApproveMissingObservationCheck {
    fn id(&self) -> CheckId {
        CheckId::ApproveMissingObservation
    }

    async fn run(&self, transport: &dyn Transport) -> Result<()> {
        let path = format!("/api/observations/{}/approve", self.observation_id);
        let response = transport.post(&path).await?;
        response.expect_status(404)?;
        expect_error_code(&response, "NOT_FOUND", "approve error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use probe::{Method, StubReply, StubTransport};
    use shared::SmokeError;

    #[tokio::test]
    async fn test_catalog_reports_not_found() {
        let stub = fixtures::healthy_catalog();
        ApproveMissingObservationCheck::new(999_999_999)
            .run(&stub)
            .await
            .unwrap();
        assert_eq!(
            stub.requests(),
            vec![(Method::Post, "/api/observations/999999999/approve".to_string())]
        );
    }

    #[tokio::test]
    async fn test_existing_observation_fails() {
        let stub = StubTransport::new().on_post(
            "/api/observations/5/approve",
            StubReply::json(200, fixtures::observation(5, "Carina", 90)),
        );
        let err = ApproveMissingObservationCheck::new(5)
            .run(&stub)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("returned 200, expected 404"));
    }

    #[tokio::test]
    async fn test_bare_404_fails() {
        // A 404 from a missing route has no structured error body.
        let err = ApproveMissingObservationCheck::new(5)
            .run(&StubTransport::new())
            .await
            .unwrap_err();
        assert!(matches!(err, SmokeError::NotJson { .. }));
    }
}
