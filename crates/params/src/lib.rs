//! Constant values shared across the msgvault workspace
//!
//! Nothing in this crate allocates or computes; it only names the sizes and
//! ceilings the rest of the workspace validates against.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
pub mod hash;
pub mod vault;
