//! Constants for the AES block cipher

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of 32-bit words in an AES round key
pub const WORDS_PER_ROUND_KEY: usize = 4;

/// Round count for AES-128 (Nr when Nk = 4)
pub const AES128_ROUNDS: usize = 10;

/// Round count for AES-192 (Nr when Nk = 6)
pub const AES192_ROUNDS: usize = 12;

/// Round count for AES-256 (Nr when Nk = 8)
pub const AES256_ROUNDS: usize = 14;

/// Key schedule size in bytes, sized for the largest key (Nr = 14).
///
/// Smaller keys use only the first `16 * (Nr + 1)` bytes.
pub const MAX_KEY_SCHEDULE_SIZE: usize = AES_BLOCK_SIZE * (AES256_ROUNDS + 1);
