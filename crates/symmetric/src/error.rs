//! Error handling for the orchestration layer
//!
//! Re-exports the workspace taxonomy from `msgvault-api` and adds the one
//! constructor this crate needs for storage collaborator failures.

pub use msgvault_api::error::{validate, Error, Result};

/// Build a storage failure, carrying the collaborator's detail when the
/// `std` feature provides `String`
pub(crate) fn storage_error(context: &'static str, detail: &str) -> Error {
    #[cfg(feature = "std")]
    {
        Error::Storage {
            context,
            message: detail.into(),
        }
    }
    #[cfg(not(feature = "std"))]
    {
        let _ = detail;
        Error::Storage { context }
    }
}
