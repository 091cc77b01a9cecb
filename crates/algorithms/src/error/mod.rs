//! Error handling for the primitive layer
//!
//! The primitives report failures through the workspace-wide taxonomy defined
//! in `msgvault-api`; this module re-exports it together with the validation
//! helpers the primitives use at their boundaries.

pub use msgvault_api::error::{validate, Error, Result};
