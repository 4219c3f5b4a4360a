//! Check identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one smoke check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    HomePage,
    ImportAndFeatured,
    ObservationsPagination,
    Health,
    #[serde(rename = "openapi-document")]
    OpenApiDocument,
    FeaturedLimitRejected,
    ApproveMissingObservation,
}

impl CheckId {
    const ALL: [CheckId; 7] = [
        CheckId::HomePage,
        CheckId::ImportAndFeatured,
        CheckId::ObservationsPagination,
        CheckId::Health,
        CheckId::OpenApiDocument,
        CheckId::FeaturedLimitRejected,
        CheckId::ApproveMissingObservation,
    ];

    /// The default set: home page, import + featured, pagination
    pub fn core() -> Vec<CheckId> {
        Self::ALL.iter().copied().filter(|c| c.is_core()).collect()
    }

    /// Every known check, core first
    pub fn all() -> Vec<CheckId> {
        Self::ALL.to_vec()
    }

    /// Whether the check belongs to the default set
    pub fn is_core(&self) -> bool {
        matches!(
            self,
            CheckId::HomePage | CheckId::ImportAndFeatured | CheckId::ObservationsPagination
        )
    }

    /// Kebab-case name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::HomePage => "home-page",
            CheckId::ImportAndFeatured => "import-and-featured",
            CheckId::ObservationsPagination => "observations-pagination",
            CheckId::Health => "health",
            CheckId::OpenApiDocument => "openapi-document",
            CheckId::FeaturedLimitRejected => "featured-limit-rejected",
            CheckId::ApproveMissingObservation => "approve-missing-observation",
        }
    }

    /// One-line human description
    pub fn description(&self) -> &'static str {
        match self {
            CheckId::HomePage => "home page loads with a Cosmic title and heading",
            CheckId::ImportAndFeatured => "sample import succeeds and featured observations are listed",
            CheckId::ObservationsPagination => "observations endpoint honours the requested page size",
            CheckId::Health => "health endpoint reports version, counts and last import",
            CheckId::OpenApiDocument => "static OpenAPI document is served",
            CheckId::FeaturedLimitRejected => "featured endpoint rejects a zero limit",
            CheckId::ApproveMissingObservation => "approving an unknown observation returns NOT_FOUND",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                format!("Unknown check '{}'. Known checks: {}", s, known.join(", "))
            })
    }
}
