use serde::Deserialize;

pub mod notion;

pub use notion::{NotionPagePayload, SelectOption};

// ============================================================================
// Inbound Request
// ============================================================================

/// Body of `POST /`.
///
/// Absent fields decode as empty strings; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveItRequest {
    pub integration_token: String,
    pub database_id: String,
    pub url: String,
    /// Comma-separated, e.g. `"reading, go, notion"`.
    pub tags: String,
}

// ============================================================================
// Scraped Page
// ============================================================================

/// Details scraped from the target page. `title` and `image` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDetails {
    pub title: String,
    pub image: String,
    pub favicon: String,
    pub url: String,
}
