//! home-page: the root document renders with the catalog's title and heading

use super::SmokeCheck;
use crate::html::PageSummary;
use async_trait::async_trait;
use probe::Transport;
use regex::Regex;
use shared::{CheckId, HomePageExpectations, Result, SmokeError};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HomePageCheck {
    expectations: HomePageExpectations,
}

impl HomePageCheck {
    pub fn new(expectations: HomePageExpectations) -> Self {
        Self { expectations }
    }
}

#[async_trait]
impl SmokeCheck for HomePageCheck {
    fn id(&self) -> CheckId {
        CheckId::HomePage
    }

    async fn run(&self, transport: &dyn Transport) -> Result<()> {
        let title_pattern = Regex::new(&self.expectations.title_pattern).map_err(|e| {
            SmokeError::Config(format!(
                "Invalid title pattern '{}': {}",
                self.expectations.title_pattern, e
            ))
        })?;

        // Only the rendered document is judged, whatever the status
        let response = transport.get("/").await?;
        let page = PageSummary::parse(&response.body)?;
        debug!(status = response.status, title = ?page.title, heading = ?page.first_heading, "home page parsed");

        let title = page.title.unwrap_or_default();
        if !title_pattern.is_match(&title) {
            return Err(SmokeError::assertion(format!(
                "page title '{}' does not match /{}/",
                title, self.expectations.title_pattern
            )));
        }

        let heading = page
            .first_heading
            .ok_or_else(|| SmokeError::assertion("page has no h1 or h2 element"))?;
        if !heading.visible {
            return Err(SmokeError::assertion(format!(
                "first heading (h{}) is not visible",
                heading.level
            )));
        }

        let keyword = self.expectations.heading_keyword.to_lowercase();
        if !heading.text.to_lowercase().contains(&keyword) {
            return Err(SmokeError::assertion(format!(
                "first heading '{}' does not contain '{}'",
                heading.text, keyword
            )));
        }

        Ok(())
    }
}
