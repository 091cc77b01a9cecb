//! msgvault: password-based message encryption from first principles
//!
//! AES (128/192/256-bit keys) and SHA-256 implemented from scratch, composed
//! into a password-based encrypt/decrypt service with a strict erase-on-use
//! discipline for key material, plus a slot-indexed encrypted record store.
//!
//! The workspace is layered the same way the crates re-exported here are
//! named:
//!
//! - [`api`] — the closed error taxonomy, validation helpers, [`Direction`],
//!   and [`SecretBytes`].
//! - [`common`] — zeroize-on-drop secret containers and memory barriers.
//! - [`params`] — every size constant and capacity ceiling in one place.
//! - [`algorithms`] — the AES and SHA-256 primitives.
//! - [`symmetric`] — the password-based orchestrator ([`pbe`]), the storage
//!   boundary ([`RecordStore`]), and the composed [`Vault`].
//!
//! # Example
//!
//! ```
//! use msgvault::{KeySize, MemoryStore, Vault};
//!
//! let mut vault = Vault::new(MemoryStore::new());
//! vault.save(0, b"note", b"the cake is real", b"hunter2", KeySize::Bits256)?;
//!
//! let mut out = [0u8; 256];
//! let len = vault.open(0, b"hunter2", KeySize::Bits256, &mut out)?;
//! assert_eq!(&out[..len], b"the cake is real");
//! # Ok::<(), msgvault::Error>(())
//! ```
//!
//! Blocks are transformed independently under the same key: equal plaintext
//! blocks give equal ciphertext blocks. This crate provides no chaining mode,
//! no authentication, and no IV handling.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub use msgvault_algorithms as algorithms;
pub use msgvault_api as api;
pub use msgvault_common as common;
pub use msgvault_params as params;
pub use msgvault_symmetric as symmetric;

pub use msgvault_algorithms::{
    Aes, Aes128, Aes192, Aes256, BlockCipher, CipherAlgorithm, Digest, HashFunction, KeySize,
    Sha256,
};
pub use msgvault_api::{Direction, Error, Result, SecretBytes};
pub use msgvault_symmetric::{pbe, MemoryStore, RecordStore, Vault};
