use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::views;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Could not read form submission: {message}")]
    Multipart { status: StatusCode, message: String },

    #[error("Could not save uploaded document: {0}")]
    Upload(#[from] std::io::Error),

    #[error("Template rendering error: {0}")]
    Template(#[from] askama::Error),
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        let status = err.status();
        let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
            "the uploaded document exceeds the size limit".to_string()
        } else {
            err.body_text()
        };
        AppError::Multipart { status, message }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::Multipart { status, .. } => *status,
            AppError::Upload(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }
        (status, Html(views::render_error(status, &self.to_string()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
