//! Block cipher primitives

use rand::{CryptoRng, RngCore};

use crate::error::Result;

pub mod aes;

pub use aes::{Aes, Aes128, Aes192, Aes256, KeySize};

/// Compile-time parameters of a block cipher
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;
}

/// A block cipher operating in place on single blocks
///
/// Implementations transform the caller's buffer directly; no copy of the
/// block is retained inside the cipher.
pub trait BlockCipher: CipherAlgorithm + Sized {
    /// Key type, sized for this cipher
    type Key: AsRef<[u8]> + AsMut<[u8]> + Clone;

    /// Construct a cipher instance, expanding the key schedule once
    fn new(key: &Self::Key) -> Self;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Generate a random key for this cipher
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
