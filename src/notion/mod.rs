use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use reqwest::Client as ReqwestClient;

use crate::error::{AppError, AppResult};
use crate::models::NotionPagePayload;

pub const NOTION_VERSION: &str = "2022-06-28";

/// Thin client for the one Notion endpoint this service calls.
#[derive(Clone)]
pub struct NotionClient {
    http_client: ReqwestClient,
    api_url: Arc<str>,
}

/// Notion's reply, relayed to the caller as-is.
#[derive(Debug)]
pub struct NotionResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl NotionClient {
    pub fn new(http_client: ReqwestClient, api_url: impl Into<Arc<str>>) -> Self {
        NotionClient {
            http_client,
            api_url: api_url.into(),
        }
    }

    pub fn pages_url(&self) -> String {
        format!("{}/v1/pages", self.api_url.trim_end_matches('/'))
    }

    /// POST /v1/pages
    ///
    /// A transport failure on send or while reading the body is an error;
    /// any HTTP status Notion answers with is returned in the response.
    pub async fn create_page(
        &self,
        integration_token: &str,
        payload: &NotionPagePayload,
    ) -> AppResult<NotionResponse> {
        let resp = self
            .http_client
            .post(self.pages_url())
            .bearer_auth(integration_token)
            .header("Notion-Version", NOTION_VERSION)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = ?e, "Failed to contact Notion API");
                AppError::NotionCall(e.to_string())
            })?;

        let status = StatusCode::from_u16(resp.status().as_u16()).map_err(|_| AppError::Internal)?;

        let body = resp.bytes().await.map_err(|e| {
            tracing::warn!(error = ?e, "Failed to read Notion API response");
            AppError::NotionCall(e.to_string())
        })?;

        Ok(NotionResponse { status, body })
    }
}

impl IntoResponse for NotionResponse {
    /// 200 passes through; any other Notion status becomes a 400 carrying
    /// Notion's own error body.
    fn into_response(self) -> Response {
        let status = if self.status == StatusCode::OK {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        };

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}
