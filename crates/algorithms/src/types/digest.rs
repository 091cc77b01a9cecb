//! Fixed-size hash output

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::string::String;

use core::fmt;
use core::ops::Deref;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// A fixed-size hash digest
///
/// The size is fixed at compile time by the hash function that produced it.
/// Equality is constant-time so digests derived from secrets can be compared
/// without leaking where they differ.
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a digest from an array of bytes
    pub fn new(bytes: [u8; N]) -> Self {
        Self { bytes }
    }

    /// Create a digest from a slice of exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(slice);
        Ok(Self { bytes })
    }

    /// Length of the digest in bytes
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the digest is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// The digest as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the digest, returning the inner array
    pub fn into_bytes(self) -> [u8; N] {
        self.bytes
    }

    /// Hex-encode the digest
    #[cfg(feature = "alloc")]
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a digest from a hex string of exactly `2 * N` characters
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        validate::length("Digest::from_hex", hex_str.len(), N * 2)?;
        let mut bytes = [0u8; N];
        hex::decode_to_slice(hex_str, &mut bytes).map_err(|_| Error::InvalidLength {
            context: "Digest::from_hex",
            expected: N * 2,
            actual: hex_str.len(),
        })?;
        Ok(Self { bytes })
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.bytes
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>(", N)?;
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
