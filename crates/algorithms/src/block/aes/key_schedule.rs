//! AES key expansion
//!
//! One expansion routine covers all three key sizes; the differences are
//! entirely captured by Nk. The word buffer used during expansion is
//! ephemeral and the finished schedule lives in a [`SecretBuffer`] so both
//! are wiped once they are no longer needed.

use byteorder::{BigEndian, ByteOrder};
use msgvault_common::{barrier, EphemeralSecret, SecretBuffer};
use msgvault_params::cipher::MAX_KEY_SCHEDULE_SIZE;

use super::gf;
use super::sbox::sub_word;
use super::KeySize;
use crate::error::{validate, Result};

/// Total 32-bit words in the largest schedule (AES-256, Nr = 14)
const MAX_SCHEDULE_WORDS: usize = MAX_KEY_SCHEDULE_SIZE / 4;

/// Expand a cipher key into the full round-key schedule.
///
/// The returned buffer is always `MAX_KEY_SCHEDULE_SIZE` bytes; only the
/// first `16 * (Nr + 1)` bytes are meaningful for the given key size.
pub(crate) fn expand_key(key: &[u8], size: KeySize) -> Result<SecretBuffer<MAX_KEY_SCHEDULE_SIZE>> {
    validate::length("AES key", key.len(), size.key_len())?;

    let nk = size.nk();
    let schedule_words = 4 * (size.rounds() + 1);

    let mut words = EphemeralSecret::new([0u32; MAX_SCHEDULE_WORDS]);

    for i in 0..nk {
        words[i] = BigEndian::read_u32(&key[i * 4..(i + 1) * 4]);
    }

    for i in nk..schedule_words {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            // RotWord, SubWord, then the round constant in the top byte
            temp = sub_word(temp.rotate_left(8)) ^ ((gf::rcon(i / nk) as u32) << 24);
        } else if nk > 6 && i % nk == 4 {
            // The extra SubWord unique to 256-bit keys
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }

    let mut schedule = SecretBuffer::zeroed();
    for (i, chunk) in schedule.as_mut_slice().chunks_exact_mut(4).enumerate() {
        BigEndian::write_u32(chunk, words[i]);
    }

    // Keep the wipe of the word buffer from being reordered past this point
    barrier::compiler_fence_seq_cst();

    Ok(schedule)
}
