//! Cryptographic primitives implemented from first principles
//!
//! This crate provides the two primitives the msgvault workspace is built on:
//! the AES block cipher ([`block::aes`]) for all three standard key sizes, and
//! SHA-256 ([`hash::sha256`]) with both a streaming byte interface and a
//! word-oriented one-shot interface.
//!
//! No external cryptography crates are used. Key schedules, message schedules,
//! and working state live in zeroizing containers from `msgvault-common` so
//! that intermediate secrets never outlive the call that produced them.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod block;
pub mod error;
pub mod hash;
pub mod types;

pub use block::{Aes, Aes128, Aes192, Aes256, BlockCipher, CipherAlgorithm, KeySize};
pub use error::{Error, Result};
pub use hash::{HashAlgorithm, HashFunction, Sha256};
pub use types::Digest;
