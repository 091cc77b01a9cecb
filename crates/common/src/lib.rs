//! Shared security utilities for the msgvault workspace
//!
//! Everything here exists to enforce one invariant: key material and other
//! secrets never outlive their single use. The types in [`security`] zeroize
//! on drop, and the barrier helpers keep the compiler from reordering around
//! the wipes.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

pub use security::{barrier, EphemeralSecret, SecretBuffer, SecureZeroingType, ZeroizeGuard};
