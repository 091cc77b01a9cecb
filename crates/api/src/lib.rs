//! Boundary types shared by every msgvault crate
//!
//! This crate defines the single closed error taxonomy returned by every
//! fallible entry point in the workspace, the validation helpers that produce
//! those errors, and the two types that cross the primitive-layer boundary:
//! [`SecretBytes`] for raw key material and [`Direction`] for the
//! encrypt/decrypt selector.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod types;

pub use error::{validate, Error, Result};
pub use types::{Direction, SecretBytes};
