//! API error taxonomy.
//!
//! Every failure is answered locally with a JSON `{"error": "..."}` body.
//! Messages are fixed strings; underlying causes are logged by the handler
//! and never serialized.

use super::types::ErrorResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::GateError;

/// Errors returned by the résumé endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Credential check failed (not configured, missing, or incorrect).
    Gate(GateError),
    /// Unlock body is not a JSON object of the expected shape.
    InvalidBody,
    /// Download requested without an access cookie.
    Unauthorized,
    /// The protected file could not be read.
    AssetNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Gate(GateError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Gate(GateError::MissingCredential) | Self::InvalidBody => StatusCode::BAD_REQUEST,
            Self::Gate(GateError::IncorrectCredential) | Self::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            Self::AssetNotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Gate(e) => e.to_string(),
            Self::InvalidBody => "Invalid request body".to_string(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::AssetNotFound => "Resume file not found".to_string(),
        }
    }
}

impl From<GateError> for ApiError {
    fn from(e: GateError) -> Self {
        Self::Gate(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
