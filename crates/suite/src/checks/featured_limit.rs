//! featured-limit-rejected: a zero limit is a validation error, not an empty list

use super::{expect_error_code, SmokeCheck};
use async_trait::async_trait;
use probe::Transport;
use shared::{CheckId, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturedLimitRejectedCheck;

#[async_trait]
impl SmokeCheck for FeaturedLimitRejectedCheck {
    fn id(&self) -> CheckId {
        CheckId::FeaturedLimitRejected
    }

    async fn run(&self, transport: &dyn Transport) -> Result<()> {
        let response = transport.get("/api/featured?limit=0").await?;
        response.expect_status(400)?;
        expect_error_code(&response, "VALIDATION_ERROR", "featured validation error")
    }
}
