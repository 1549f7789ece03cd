use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not enough content found for this topic")]
    InsufficientContent { sentences: usize, required: usize },

    #[error("{0}")]
    ValidationError(String),

    #[error("Failed to fetch quiz data")]
    FetchError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InsufficientContent { .. } => "INSUFFICIENT_CONTENT",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::FetchError(_) => "FETCH_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InsufficientContent { .. } => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::FetchError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::FetchError(detail) | AppError::InternalError(detail) => {
                log::error!("{} ({}): {}", self, self.error_code(), detail);
            }
            _ => log::warn!("{} ({})", self, self.error_code()),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        AppError::ValidationError("Topic is required".to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
