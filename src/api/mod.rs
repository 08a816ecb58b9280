//! REST API module.
//!
//! Read-only JSON endpoints for the page collaborators, plus sitemap.xml and robots.txt.

mod pages;
mod site;

pub use pages::*;
pub use site::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{ApiError, AppError};

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, last_updated: Option<DateTime<Utc>>) -> Self {
        Self {
            success: true,
            data,
            last_updated,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, last_updated: Option<DateTime<Utc>>) -> ApiResult<T> {
    Ok(ApiResponse::new(data, last_updated))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: AppError, last_updated: Option<DateTime<Utc>>) -> ApiResult<T> {
    Err(ApiError {
        error: err,
        last_updated,
    })
}
