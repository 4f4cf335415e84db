//! Error handling for the chunked encryption streams

use core::fmt;

pub mod validate;

/// The error type for chunked stream operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid stream configuration, detected at construction
    Configuration {
        /// Parameter that failed validation
        context: &'static str,
        /// Reason why the configuration is invalid
        details: &'static str,
    },

    /// Length validation error (keys, nonces)
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// AEAD tag verification failure for a chunk
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Malformed wire data that cannot be framed into chunks
    Format {
        /// Context where the malformed data was found
        context: &'static str,
        /// Additional details about the problem
        details: &'static str,
    },

    /// I/O error from the underlying sink or source
    #[cfg(feature = "std")]
    Io(String),
}

/// Result type for chunked stream operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { context, details } => {
                write!(f, "Invalid configuration for {}: {}", context, details)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {} bytes, got {}",
                    context, expected, actual
                )
            }
            Error::Authentication { algorithm } => {
                write!(f, "Authentication failed for {}", algorithm)
            }
            Error::Format { context, details } => {
                write!(f, "Format error in {}: {}", context, details)
            }
            #[cfg(feature = "std")]
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
