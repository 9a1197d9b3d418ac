//! Error taxonomy for every remote call.
//!
//! The variants map one-to-one onto how the UI must react: `Validation`
//! never reached the network and is shown inline, `Unauthorized` forces a
//! global logout, `Rejected` carries the server's own message verbatim,
//! and `Network`/`UnexpectedResponse` are generic and safe to retry.

/// Failure of an API operation. No call panics or escapes this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Rejected client-side before any network call was made.
    #[error("{0}")]
    Validation(String),

    /// The server answered 401: the session is invalid or expired.
    /// The session store has already been cleared when this surfaces.
    #[error("Your session has expired. Please log in again.")]
    Unauthorized,

    /// The server refused the request with its own message
    /// (e.g. "You have already voted in this category").
    #[error("{0}")]
    Rejected(String),

    /// No usable response: transport failure or the request timed out.
    #[error("Network error. Please check your internet connection.")]
    Network,

    /// A 2xx response whose body did not match the endpoint's contract.
    #[error("The server sent an unexpected response. Please try again.")]
    UnexpectedResponse,
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// True when the failure invalidates the session and the user must
    /// re-authenticate.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }
}
