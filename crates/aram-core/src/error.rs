//! Error types shared by the sampler, the seed generator and the data sources.

/// Errors raised by `aram-core`.
#[derive(Debug, thiserror::Error)]
pub enum AramError {
    /// Caller supplied an out-of-range count, length or alphabet.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Transport-level failure talking to the champion data endpoint.
    #[error("network error: {message}")]
    Network { message: String },

    /// Endpoint answered, but not with something we can use.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// A local champion dataset could not be read or parsed.
    #[error("dataset error: {message}")]
    Dataset { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl AramError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } => 1,
            Self::Config { .. } => 2,
            Self::Network { .. } | Self::InvalidResponse { .. } | Self::Dataset { .. } => 3,
        }
    }

    /// Whether the error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

impl From<reqwest::Error> for AramError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// Result type for `aram-core` operations.
pub type AramResult<T> = Result<T, AramError>;
