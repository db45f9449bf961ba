//! Error types for the console client.

use thiserror::Error;

/// Errors that can occur when talking to the iSmartPay admin service.
///
/// Every variant renders as a human-readable string suitable for inline
/// display; nothing here is fatal to the process and the triggering action
/// may always be retried by the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session token is present for an endpoint that requires one.
    /// Produced before any network call is issued.
    #[error("not authenticated: sign in first")]
    NotAuthenticated,

    /// Transport or network failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, or a generic
        /// "<operation> failed" fallback.
        message: String,
    },

    /// The service answered 2xx but the body was error-shaped
    /// (`{"error": true}` or `{"success": false}`).
    #[error("{message}")]
    Rejected {
        /// Message from the body, or a generic fallback.
        message: String,
    },

    /// A success response could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Required input was missing or malformed; no request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    /// A mutating submission was attempted while another one on the same
    /// handle is still outstanding.
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// The session was torn down while the request was in flight.
    #[error("operation cancelled by session teardown")]
    Cancelled,
}

impl From<ismartpay_core::EmailError> for ApiError {
    fn from(err: ismartpay_core::EmailError) -> Self {
        Self::Validation(err.to_string())
    }
}
