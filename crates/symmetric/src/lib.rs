//! Password-based encryption over fixed-size message blocks
//!
//! This crate is the orchestration layer of the msgvault workspace. [`pbe`]
//! derives an AES key from a password via SHA-256 and drives the cipher over
//! a message buffer in place; [`store`] defines the storage collaborator
//! boundary and an in-memory slot store; [`vault`] composes the two into a
//! save/open/delete record service.
//!
//! Every chunk of a message is transformed independently with the same key
//! (no chaining, no IV). Equal plaintext blocks therefore produce equal
//! ciphertext blocks; callers who need semantic security must layer a mode on
//! top. Key material derived here is wiped before control returns, on success
//! and error paths alike.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod pbe;
pub mod store;
pub mod vault;

pub use error::{Error, Result};
pub use pbe::{padded_len, process, process_with_key};
pub use store::{MemoryStore, RecordStore};
pub use vault::Vault;
