use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("The body could not be parsed")]
    RequestParse,

    #[error("{0}")]
    PageFetch(String),

    #[error("{0}")]
    HtmlParse(String),

    #[error("{0}")]
    NotionCall(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::RequestParse
            | AppError::PageFetch(_)
            | AppError::HtmlParse(_)
            | AppError::NotionCall(_) => StatusCode::BAD_REQUEST,
            AppError::Internal => {
                tracing::error!("Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
