//! Hash function primitives

use crate::error::Result;

pub mod sha256;

pub use sha256::Sha256;

/// Compile-time parameters of a hash function
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;
    /// Human-readable algorithm name
    const NAME: &'static str;
}

/// An incremental hash function
pub trait HashFunction: Sized {
    /// Marker type carrying the algorithm parameters
    type Algorithm: HashAlgorithm;
    /// Digest type produced by `finalize`
    type Output;

    /// Create a fresh hasher
    fn new() -> Self;

    /// Absorb more input, returning `self` for chaining
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Complete the computation and produce the digest, resetting the hasher
    fn finalize(&mut self) -> Result<Self::Output>;

    /// One-shot convenience over `new` + `update` + `finalize`
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Internal block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Human-readable algorithm name
    fn name() -> &'static str {
        Self::Algorithm::NAME
    }
}
