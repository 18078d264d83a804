use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::eth::EncodeError;
use crate::metadata::MetadataError;
use crate::types::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing required parameters: {}", .0.join(", "))]
    MissingParameters(Vec<&'static str>),
    #[error("metadata rejected: {0}")]
    Metadata(#[from] MetadataError),
    #[error("transaction build failed: {0}")]
    Encode(#[from] EncodeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters(_) => StatusCode::BAD_REQUEST,
            ApiError::Metadata(_) | ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the client gets to see; the details stay in the server log.
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingParameters(_) => "Missing required parameters",
            ApiError::Metadata(_) => "Failed to create metadata",
            ApiError::Encode(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_kinds_to_status() {
        assert_eq!(
            ApiError::MissingParameters(vec!["xp"]).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(EncodeError::InvalidNumber("abc".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(MetadataError::NoActions).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn server_errors_hide_details() {
        let err = ApiError::from(EncodeError::InvalidAddress("0xnope".into()));
        assert_eq!(err.public_message(), "Internal Server Error");
        assert!(err.to_string().contains("0xnope"));
    }
}
