use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub type ApiResponse<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error(transparent)]
    DataBaseError(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DataBaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// the raw driver message goes back to the client
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::DataBaseError(error) = &self {
            tracing::error!("Database error: {error}");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
