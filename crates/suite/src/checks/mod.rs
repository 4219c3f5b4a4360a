//! Smoke checks

mod approve_missing;
mod featured_limit;
mod health;
mod home_page;
mod import_featured;
mod openapi;
mod pagination;

pub use approve_missing::ApproveMissingObservationCheck;
pub use featured_limit::FeaturedLimitRejectedCheck;
pub use health::HealthCheck;
pub use home_page::HomePageCheck;
pub use import_featured::ImportAndFeaturedCheck;
pub use openapi::OpenApiDocumentCheck;
pub use pagination::ObservationsPaginationCheck;

use async_trait::async_trait;
use probe::{ProbeResponse, Transport};
use shared::{expect_object, require_fields, CheckId, Result, SmokeConfig, SmokeError};

/// One independent smoke check
#[async_trait]
pub trait SmokeCheck: Send + Sync {
    fn id(&self) -> CheckId;

    /// Run the check; any error is the failure reason
    async fn run(&self, transport: &dyn Transport) -> Result<()>;
}

/// Build the check for `id` from configuration
pub fn build_check(id: CheckId, config: &SmokeConfig) -> Box<dyn SmokeCheck> {
    match id {
        CheckId::HomePage => Box::new(HomePageCheck::new(config.home_page.clone())),
        CheckId::ImportAndFeatured => Box::new(ImportAndFeaturedCheck::new(
            config.featured_limit,
            config.import_settle(),
        )),
        CheckId::ObservationsPagination => {
            Box::new(ObservationsPaginationCheck::new(config.page_size))
        }
        CheckId::Health => Box::new(HealthCheck),
        CheckId::OpenApiDocument => Box::new(OpenApiDocumentCheck::new(
            config.extended.openapi_path.clone(),
            config.extended.openapi_markers.clone(),
        )),
        CheckId::FeaturedLimitRejected => Box::new(FeaturedLimitRejectedCheck),
        CheckId::ApproveMissingObservation => Box::new(ApproveMissingObservationCheck::new(
            config.extended.missing_observation_id,
        )),
    }
}

/// Require a structured error body `{error, message, status, timestamp, path}` with the given code
fn expect_error_code(response: &ProbeResponse, code: &str, context: &str) -> Result<()> {
    let body = response.json()?;
    let object = expect_object(&body, context)?;
    require_fields(object, &["error", "message"], context)?;

    match object.get("error").and_then(|e| e.as_str()) {
        Some(actual) if actual == code => Ok(()),
        Some(actual) => Err(SmokeError::assertion(format!(
            "{}: error code was '{}', expected '{}'",
            context, actual, code
        ))),
        None => Err(SmokeError::assertion(format!(
            "{}: error code is not a string",
            context
        ))),
    }
}
