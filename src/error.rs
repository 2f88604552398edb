use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};
use validator::ValidationErrors;

use crate::click_data::ClickDataError;
use crate::store::StorageError;

pub const MISSING_PAGE_MESSAGE: &str = "Missing required query parameter: page";
pub const INVALID_PAGE_MESSAGE: &str =
    "Query parameter page must be between 1 and 128 characters long";
pub const STORAGE_UNAVAILABLE_MESSAGE: &str = "Storage is currently unavailable";
pub const CLICK_DATA_UNAVAILABLE_MESSAGE: &str = "Click data is currently unavailable";

pub enum ApiError {
    MissingParameter(&'static str),
    InvalidParameter(ValidationErrors),
    Storage(StorageError),
    ClickData(ClickDataError),
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

impl From<ClickDataError> for ApiError {
    fn from(e: ClickDataError) -> Self {
        Self::ClickData(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingParameter(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::InvalidParameter(e) => {
                debug!(error = %e, "rejected query parameters");
                (StatusCode::BAD_REQUEST, INVALID_PAGE_MESSAGE).into_response()
            }
            Self::Storage(e) => {
                error!(error = %e, "storage request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, STORAGE_UNAVAILABLE_MESSAGE).into_response()
            }
            Self::ClickData(e) => {
                error!(error = %e, "could not build click data");
                (StatusCode::INTERNAL_SERVER_ERROR, CLICK_DATA_UNAVAILABLE_MESSAGE).into_response()
            }
        }
    }
}
