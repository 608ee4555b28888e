use std::sync::Arc;

use reqwest::Client as ReqwestClient;

use crate::notion::NotionClient;

/// Shared application state passed to all handlers.
/// Immutable after start-up; every request works on its own data.
#[derive(Clone)]
pub struct AppState {
    pub http_client: ReqwestClient,
    pub notion: NotionClient,
}

impl AppState {
    /// Build state around a single pooled client, used both for page
    /// fetches and for Notion calls.
    pub fn new(notion_api_url: impl Into<Arc<str>>) -> Self {
        let http_client = ReqwestClient::new();
        AppState {
            notion: NotionClient::new(http_client.clone(), notion_api_url),
            http_client,
        }
    }
}
