//! observations-pagination: one page of observations honours the requested size

use super::SmokeCheck;
use async_trait::async_trait;
use probe::Transport;
use shared::{
    expect_array, expect_object, expect_u64, require_fields, CheckId, Result, SmokeError,
    PAGE_ENVELOPE_FIELDS,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ObservationsPaginationCheck {
    size: u32,
}

impl ObservationsPaginationCheck {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

#[async_trait]
impl SmokeCheck for ObservationsPaginationCheck {
    fn id(&self) -> CheckId {
        CheckId::ObservationsPagination
    }

    async fn run(&self, transport: &dyn Transport) -> Result<()> {
        let response = transport
            .get(&format!("/api/observations?size={}", self.size))
            .await?;
        response.expect_ok(200)?;

        let body = response.json()?;
        let page = expect_object(&body, "observations page")?;
        require_fields(page, &PAGE_ENVELOPE_FIELDS, "observations page")?;

        let content = expect_array(&page["content"], "observations page.content")?;
        if content.len() > self.size as usize {
            return Err(SmokeError::assertion(format!(
                "page content has {} observations, size was {}",
                content.len(),
                self.size
            )));
        }

        let size = expect_u64(page, "size", "observations page")?;
        if size != u64::from(self.size) {
            return Err(SmokeError::assertion(format!(
                "page size was {}, expected {}",
                size, self.size
            )));
        }

        debug!(
            total_elements = %page["totalElements"],
            total_pages = %page["totalPages"],
            "observations page checked"
        );
        Ok(())
    }
}
