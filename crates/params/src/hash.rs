//! Constants for SHA-256

/// SHA-256 output size in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// SHA-256 block size in bytes (512 bits)
pub const SHA256_BLOCK_SIZE: usize = 64;

/// 32-bit words per 512-bit message block
pub const SHA256_BLOCK_WORDS: usize = 16;

/// 32-bit words in the hash state (and in a word-oriented digest)
pub const SHA256_STATE_WORDS: usize = 8;

/// Length of the expanded message schedule in 32-bit words
pub const SHA256_SCHEDULE_WORDS: usize = 64;

/// Minimum padding for a word-aligned message: the marker word plus the
/// two-word bit-length suffix.
pub const SHA256_MIN_PAD_WORDS: usize = 3;

/// Largest possible word-oriented pad: a remainder of 2 words wraps into the
/// next block, giving 16 + 2 words of padding.
pub const SHA256_MAX_PAD_WORDS: usize = 18;
