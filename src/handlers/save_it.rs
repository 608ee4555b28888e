use axum::{body::Bytes, extract::State};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    models::{NotionPagePayload, SaveItRequest},
    notion::NotionResponse,
    state::AppState,
};

use super::{page_details::get_page_details, tags::format_tags};

/// POST /
///
/// Scrapes `url` and files it as a new page in the caller's Notion database.
/// The body is decoded whatever its `Content-Type`.
pub async fn save_it(State(state): State<AppState>, body: Bytes) -> AppResult<NotionResponse> {
    let req: SaveItRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected unparsable request body");
        AppError::RequestParse
    })?;

    let tags = format_tags(&req.tags);
    info!(url = %req.url, tags = tags.len(), "Saving page to Notion");

    let details = get_page_details(&state.http_client, &req.url).await?;
    let payload = NotionPagePayload::new(&details, tags, &req.database_id);

    let response = state
        .notion
        .create_page(&req.integration_token, &payload)
        .await?;

    if response.status.is_success() {
        info!(url = %req.url, status = %response.status, "Notion page created");
    } else {
        tracing::warn!(url = %req.url, status = %response.status, "Notion rejected page");
    }

    Ok(response)
}
