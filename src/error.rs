//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
///
/// Every error is terminal: the operation that produced it did not change
/// the [DataStore](crate::store::DataStore).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was missing or empty.
    ///
    /// The string names the offending field so the client can point the user
    /// at it.
    #[error("{0} is required")]
    Validation(String),

    /// The request body or query string could not be read as the expected
    /// type, e.g. malformed JSON or a field with the wrong type.
    #[error("{0}")]
    InvalidRequest(String),

    /// The request body is larger than the server accepts.
    #[error("Request body is too large")]
    PayloadTooLarge,

    /// No transaction has the requested ID.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// No partner link has the requested ID.
    #[error("Partner not found")]
    PartnerNotFound,

    /// The requested route does not exist.
    #[error("Not found")]
    NotFound,

    /// The email address has already been invited to the household.
    ///
    /// Any existing link blocks a re-invite, whatever its status.
    #[error("Partner already invited")]
    DuplicateInvite(String),

    /// A writer panicked while holding the data store lock.
    #[error("could not acquire the data store lock")]
    LockPoisoned,

    /// The configured timezone is not a canonical timezone name.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// A timestamp fell outside the supported calendar range or could not be
    /// formatted as RFC 3339.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl Error {
    /// The HTTP status code that the request layer should respond with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Error::TransactionNotFound | Error::PartnerNotFound | Error::NotFound => {
                StatusCode::NOT_FOUND
            }
            Error::DuplicateInvite(_) => StatusCode::CONFLICT,
            Error::LockPoisoned | Error::InvalidTimezone(_) | Error::InvalidTimestamp(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Check that the required field `field` was given a non-empty `value`.
///
/// # Errors
/// Returns [Error::Validation] naming `field` if `value` is empty.
pub(crate) fn require(field: &str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        Err(Error::Validation(field.to_owned()))
    } else {
        Ok(())
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(ref error)
                if error.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                Error::PayloadTooLarge
            }
            rejection => Error::InvalidRequest(rejection.body_text()),
        }
    }
}

impl From<time::error::Format> for Error {
    fn from(value: time::error::Format) -> Self {
        Error::InvalidTimestamp(value.to_string())
    }
}

impl From<time::error::ComponentRange> for Error {
    fn from(value: time::error::ComponentRange) -> Self {
        Error::InvalidTimestamp(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            // Internal details stay in the server logs.
            tracing::error!("An unexpected error occurred: {self}");
            "Something went wrong, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::{Error, require};

    #[test]
    fn require_rejects_empty_values() {
        assert_eq!(require("name", "Emergency Fund"), Ok(()));
        assert_eq!(require("name", ""), Err(Error::Validation("name".to_owned())));
    }

    #[test]
    fn client_errors_map_to_distinct_status_codes() {
        assert_eq!(
            Error::Validation("email".to_owned()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::TransactionNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(Error::PartnerNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::DuplicateInvite("a@b.com".to_owned()).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn validation_message_names_field() {
        assert_eq!(
            Error::Validation("limitAmount".to_owned()).to_string(),
            "limitAmount is required"
        );
    }

    #[tokio::test]
    async fn server_errors_hide_details() {
        let response = Error::InvalidTimezone("Mars/Olympus_Mons".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8_lossy(&body);
        assert!(!body.contains("Mars"), "got body {body}");
    }
}
