//! Error handling for msgvault operations
//!
//! One small closed enumeration covers every failure the workspace can
//! report. Human-readable formatting lives in the `Display` impl; callers
//! match on the variant, never on text.

#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

/// Primary error type for all msgvault operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was absent (empty slice at a boundary that needs data)
    EmptyInput {
        /// Name of the missing input
        context: &'static str,
    },

    /// Declared cipher key length is not one of 128/192/256 bits
    InvalidKeyLength {
        /// The rejected bit length
        bits: usize,
    },

    /// A length is zero, wrong for the operation, or over a capacity ceiling
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length, or the ceiling that was exceeded
        expected: usize,
        /// Actual length supplied
        actual: usize,
    },

    /// The encrypt/decrypt selector was neither recognized value
    InvalidDirection {
        /// The rejected flag value
        flag: u8,
    },

    /// Propagated verbatim from a storage collaborator; never retried
    #[cfg(feature = "std")]
    Storage {
        /// Operation that failed
        context: &'static str,
        /// Collaborator-supplied detail
        message: String,
    },

    /// Propagated verbatim from a storage collaborator; never retried
    #[cfg(not(feature = "std"))]
    Storage {
        /// Operation that failed
        context: &'static str,
    },
}

/// Result type for msgvault operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::EmptyInput { .. } => Self::EmptyInput { context },
            Self::InvalidKeyLength { bits } => Self::InvalidKeyLength { bits },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidDirection { flag } => Self::InvalidDirection { flag },
            #[cfg(feature = "std")]
            Self::Storage { message, .. } => Self::Storage { context, message },
            #[cfg(not(feature = "std"))]
            Self::Storage { .. } => Self::Storage { context },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { context } => {
                write!(f, "{}: required input is empty", context)
            }
            Self::InvalidKeyLength { bits } => {
                write!(f, "invalid key length: {} bits (expected 128, 192, or 256)", bits)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidDirection { flag } => {
                write!(f, "invalid direction flag: {}", flag)
            }
            #[cfg(feature = "std")]
            Self::Storage { context, message } => {
                write!(f, "storage failure in {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Storage { context } => {
                write!(f, "storage failure in {}", context)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub mod validate;
