//! Application error taxonomy and HTTP mapping.
//!
//! Every failure a request can hit is an [`AppError`] variant. Handlers return
//! `Result<_, AppError>` and the [`IntoResponse`] impl turns the error into a
//! status code with a plain-text body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors produced by the slug generator, the stores and both workflows.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("long_url is irregular or too long ({length} > {max} characters)")]
    DestinationTooLong { length: usize, max: usize },

    #[error("long_url is not a valid URL reference: {0}")]
    MalformedDestination(String),

    #[error("Unknown 'protocol' {0}")]
    UnsupportedScheme(String),

    #[error("secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    #[error("unique constraint violation on {}", .constraint.as_deref().unwrap_or("short_slug"))]
    ConstraintViolation { constraint: Option<String> },

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("no url mapping for slug '{0}'")]
    UnknownSlug(String),

    #[error("Must have Content-Type: application/json in request")]
    MissingContentType,

    #[error("Must have Accept: application/json in request")]
    MissingAcceptHeader,

    #[error("malformed request body: {0}")]
    MalformedRequestBody(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status the error maps to.
    ///
    /// Caller-supplied data problems are 4xx, backend problems are 5xx.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DestinationTooLong { .. }
            | AppError::MalformedDestination(_)
            | AppError::UnsupportedScheme(_)
            | AppError::MissingContentType
            | AppError::MissingAcceptHeader
            | AppError::MalformedRequestBody(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownSlug(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::RandomSourceUnavailable(_)
            | AppError::ConstraintViolation { .. }
            | AppError::StoreUnavailable(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true for a uniqueness violation reported by the store.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, AppError::ConstraintViolation { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, self.to_string()).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::ConstraintViolation {
                constraint: db.constraint().map(str::to_string),
            };
        }

        AppError::StoreUnavailable(e.to_string())
    }
}
