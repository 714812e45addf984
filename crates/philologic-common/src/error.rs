use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhiloError {
    #[error("Philosopher not found: {0}")]
    PhilosopherNotFound(i64),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PhiloError>;

/// Error returned from JSON API handlers, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// A collaborator (remote catalog, generation backend) failed.
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_)   => StatusCode::NOT_FOUND,
            ApiError::Upstream(_)   => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_)   => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PhiloError> for ApiError {
    fn from(err: PhiloError) -> Self {
        match err {
            PhiloError::PhilosopherNotFound(id) => {
                ApiError::NotFound(format!("No philosopher with id {}", id))
            }
            PhiloError::Config(msg) => ApiError::Internal(format!("Configuration error: {}", msg)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, "API error: {}", self);
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
