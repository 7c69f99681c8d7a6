use axum::{http::StatusCode, Json};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    StoreFull(usize),
    NotFound(String),
    Configuration(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::StoreFull(max) => {
                write!(f, "Registration limit reached: {} users", max)
            }
            AppError::NotFound(e) => write!(f, "Not found: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

// HTTP response mapping
impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::StoreFull(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> (StatusCode, Json<serde_json::Value>) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (status, Json(json!({ "error": self.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::StoreFull(3).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::Configuration("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_body() {
        let (status, Json(body)) = AppError::StoreFull(2).to_response();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Registration limit reached: 2 users");
    }
}
