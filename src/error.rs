//! Error types and handling for geocode-rs.

/// Result type alias for geocoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for geocoding operations.
///
/// Only [`Error::InvalidArgument`] ever escapes [`crate::Geocoder::get`]; the
/// other variants are reported by the strict [`crate::Geocoder::try_get`] and
/// by [`crate::Fetch`] implementations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller supplied an unusable argument, such as an empty address
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// The HTTP round trip failed
    #[error("Transport error: {message}")]
    TransportError {
        /// Error message
        message: String,
    },

    /// The response body did not look like a geocode response
    #[error("Decode error: {message}")]
    DecodeError {
        /// Error message
        message: String,
    },

    /// The client could not be configured
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Error message
        message: String,
    },

    /// JSON errors
    #[error("JSON error: {source}")]
    Json {
        /// Source error
        #[from]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport_error(message: impl Into<String>) -> Self {
        Self::TransportError {
            message: message.into(),
        }
    }

    /// Create a new decode error
    pub fn decode_error(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Check whether this error came from the network layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportError { .. })
    }
}
