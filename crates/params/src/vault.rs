//! Capacity ceilings for the record store and orchestrator
//!
//! These bound what a single vault holds; the cryptographic primitives
//! themselves impose no such limits.

/// Number of record slots in a vault
pub const RECORD_SLOTS: usize = 10;

/// Maximum encrypted message length per slot, in bytes
pub const MAX_MESSAGE_LEN: usize = 256;

/// Maximum record title length, in bytes
pub const MAX_TITLE_LEN: usize = 16;

/// Maximum password length accepted by the orchestrator, in bytes
pub const MAX_PASSWORD_LEN: usize = 32;
