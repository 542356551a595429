use thiserror::Error;

/// Provider Error Types
///
/// Every error is recoverable by the caller: each operation reports at most
/// one of these and never retries.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The remote call itself failed; the message is passed through verbatim
    #[error("{0}")]
    Transport(String),

    /// The publish-permission check denied; the message is passed through verbatim
    #[error("{0}")]
    PermissionDenied(String),

    /// The remote call succeeded but the response body indicated failure
    #[error("Unable to submit score")]
    SubmitRejected,

    #[error("Failed to parse response: {0}")]
    ResponseParse(String),
}

impl From<ProviderError> for String {
    fn from(err: ProviderError) -> Self {
        err.to_string()
    }
}
