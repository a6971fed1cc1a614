use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no word record for letter `{0}`")]
    WordNotFound(String), // Contains the normalized letter

    #[error("word record for letter `{0}` has no words")]
    NoWordsAvailable(String), // Contains the normalized letter

    // Internal Errors
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::WordNotFound(_) | Self::NoWordsAvailable(_) => StatusCode::NOT_FOUND,
            Self::Sqlx(_) | Self::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The stable message clients see. Store details never leave the process.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::WordNotFound(_) => "Word not found",
            Self::NoWordsAvailable(_) => "No words available for this letter",
            _ => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            tracing::error!("Generating response for AppError: {:?}", self);
        } else {
            tracing::warn!("{self}");
        }

        let body = ErrorBody {
            error: self.public_message().to_string(),
        };
        (status_code, Json(body)).into_response()
    }
}
