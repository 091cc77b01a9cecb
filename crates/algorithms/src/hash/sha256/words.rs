//! Word-oriented SHA-256 interface
//!
//! For callers whose messages are already arrays of big-endian 32-bit words.
//! Padding is computed in words: a marker word of `0x8000_0000`, zero fill,
//! and the two-word bit length. A word-aligned message leaves no room for a
//! partial-word pad, so when fewer than three words remain in the final block
//! the pad wraps into an additional block.
//!
//! Blocks are assembled on the fly in one of three shapes: entirely message
//! words, the boundary block where message words meet the head of the pad,
//! and the pad tail that spilled into the following block.

use byteorder::{BigEndian, ByteOrder};
use msgvault_common::ZeroizeGuard;
use msgvault_params::hash::{
    SHA256_BLOCK_WORDS, SHA256_MAX_PAD_WORDS, SHA256_MIN_PAD_WORDS, SHA256_OUTPUT_SIZE,
    SHA256_STATE_WORDS,
};

use super::{compress, INITIAL_STATE};
use crate::error::{validate, Error, Result};
use crate::types::Digest;

/// First pad word: a single one bit at the top, 31 zero bits below
const PAD_MARKER: u32 = 0x8000_0000;

/// Number of pad words for a message of `message_words` 32-bit words
///
/// Fills the final block, wrapping into an extra block when fewer than
/// [`SHA256_MIN_PAD_WORDS`] would remain for the marker and length suffix.
pub fn pad_len(message_words: usize) -> usize {
    let remaining = SHA256_BLOCK_WORDS - (message_words % SHA256_BLOCK_WORDS);
    if remaining < SHA256_MIN_PAD_WORDS {
        remaining + SHA256_BLOCK_WORDS
    } else {
        remaining
    }
}

/// The complete pad for one message: marker, zero fill, bit length
struct Pad {
    words: [u32; SHA256_MAX_PAD_WORDS],
    len: usize,
}

impl Pad {
    fn new(message_words: usize) -> Self {
        let len = pad_len(message_words);
        let mut words = [0u32; SHA256_MAX_PAD_WORDS];
        words[0] = PAD_MARKER;

        let bit_len = (message_words as u64) * 32;
        words[len - 2] = (bit_len >> 32) as u32;
        words[len - 1] = bit_len as u32;

        Self { words, len }
    }
}

/// Hash a message of 32-bit words, writing the digest into the caller's
/// 8-word state buffer.
///
/// Empty messages are rejected on this interface; the streaming byte
/// interface accepts them.
pub fn digest_into(message: &[u32], output: &mut [u32; SHA256_STATE_WORDS]) -> Result<()> {
    validate::non_empty("message words", message.len())?;
    // The bit length must fit the 64-bit suffix
    (message.len() as u64)
        .checked_mul(32)
        .ok_or(Error::InvalidLength {
            context: "SHA-256 message",
            expected: (u64::MAX / 32) as usize,
            actual: message.len(),
        })?;

    let pad = Pad::new(message.len());
    let total_blocks = (message.len() + pad.len) / SHA256_BLOCK_WORDS;
    let boundary = message.len() / SHA256_BLOCK_WORDS;

    let mut state = INITIAL_STATE;
    let mut block = [0u32; SHA256_BLOCK_WORDS];
    let mut block_guard = ZeroizeGuard::new(&mut block);

    for blk in 0..total_blocks {
        if blk < boundary {
            fill_message_block(&mut block_guard, message, blk);
        } else if blk == boundary {
            fill_boundary_block(&mut block_guard, message, &pad, blk);
        } else {
            fill_pad_tail(&mut block_guard, message, &pad);
        }
        compress(&mut state, &block_guard);
    }

    *output = state;
    Ok(())
}

/// Hash a message of 32-bit words to a byte digest
pub fn digest(message: &[u32]) -> Result<Digest<SHA256_OUTPUT_SIZE>> {
    let mut state = [0u32; SHA256_STATE_WORDS];
    let mut state_guard = ZeroizeGuard::new(&mut state);
    digest_into(message, &mut state_guard)?;

    let mut bytes = [0u8; SHA256_OUTPUT_SIZE];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(state_guard.iter()) {
        BigEndian::write_u32(chunk, *word);
    }
    Ok(Digest::new(bytes))
}

/// A block lying entirely inside the message
fn fill_message_block(block: &mut [u32; SHA256_BLOCK_WORDS], message: &[u32], blk: usize) {
    let start = blk * SHA256_BLOCK_WORDS;
    block.copy_from_slice(&message[start..start + SHA256_BLOCK_WORDS]);
}

/// The block where the message ends and the pad begins
fn fill_boundary_block(
    block: &mut [u32; SHA256_BLOCK_WORDS],
    message: &[u32],
    pad: &Pad,
    blk: usize,
) {
    let message_words = message.len() - blk * SHA256_BLOCK_WORDS;
    block[..message_words].copy_from_slice(&message[blk * SHA256_BLOCK_WORDS..]);
    block[message_words..].copy_from_slice(&pad.words[..SHA256_BLOCK_WORDS - message_words]);
}

/// The pad words that wrapped past the boundary block
fn fill_pad_tail(block: &mut [u32; SHA256_BLOCK_WORDS], message: &[u32], pad: &Pad) {
    let consumed = SHA256_BLOCK_WORDS - (message.len() % SHA256_BLOCK_WORDS);
    block.copy_from_slice(&pad.words[consumed..consumed + SHA256_BLOCK_WORDS]);
}
