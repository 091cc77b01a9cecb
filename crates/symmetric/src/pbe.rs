//! Key derivation and cipher orchestration
//!
//! The password path: SHA-256 the password bytes, take the most significant
//! bytes of the digest as the cipher key, wipe the digest, expand the key
//! schedule, wipe the key, then transform every 16-byte chunk of the message
//! independently in place.
//!
//! Chunks are independent: the same key is applied to each block with no
//! chaining and no IV. All validation happens before the first byte of the
//! message is touched, so a rejected call leaves the buffer exactly as it
//! was.

use msgvault_algorithms::{Aes, HashFunction, KeySize, Sha256};
use msgvault_api::Direction;
use msgvault_common::{barrier, ZeroizeGuard};
use msgvault_params::cipher::AES_BLOCK_SIZE;
use msgvault_params::vault::{MAX_MESSAGE_LEN, MAX_PASSWORD_LEN};
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// The message buffer length needed to hold `msg_len` logical bytes: the
/// smallest multiple of the block size that covers them
pub fn padded_len(msg_len: usize) -> usize {
    msg_len.div_ceil(AES_BLOCK_SIZE) * AES_BLOCK_SIZE
}

/// Derive cipher key bytes from a password.
///
/// The password is hashed with SHA-256 and the most significant
/// `key_out.len()` bytes of the digest become the key. The digest is wiped
/// before returning. `key_out` must match the key length of `key_size`.
pub fn derive_key(password: &[u8], key_size: KeySize, key_out: &mut [u8]) -> Result<()> {
    validate::non_empty("password", password.len())?;
    validate::max_length("password", password.len(), MAX_PASSWORD_LEN)?;
    validate::length("derived key", key_out.len(), key_size.key_len())?;

    let mut digest = Sha256::digest(password)?;
    key_out.copy_from_slice(&digest.as_bytes()[..key_out.len()]);
    digest.zeroize();
    barrier::compiler_fence_seq_cst();

    Ok(())
}

/// Encrypt or decrypt a message in place under a password-derived key.
///
/// `message` is the backing buffer; `msg_len` is the logical length, capped
/// at the per-record ceiling. The buffer must hold at least
/// [`padded_len`]`(msg_len)` bytes, and that many bytes are transformed, one
/// independent 16-byte chunk at a time. Key material exists only inside this
/// call.
pub fn process(
    direction: Direction,
    password: &[u8],
    key_size: KeySize,
    message: &mut [u8],
    msg_len: usize,
) -> Result<()> {
    validate::non_empty("message", msg_len)?;
    validate::max_length("message", msg_len, MAX_MESSAGE_LEN)?;
    let full_len = padded_len(msg_len);
    validate::min_length("message buffer", message.len(), full_len)?;

    let mut key = [0u8; 32];
    let mut key_guard = ZeroizeGuard::new(&mut key[..key_size.key_len()]);
    derive_key(password, key_size, &mut key_guard)?;

    let cipher = Aes::new(&key_guard, key_size)?;
    // The schedule is expanded; the raw key is not needed past this point
    drop(key_guard);

    apply_chunks(&cipher, &mut message[..full_len], direction)
}

/// Encrypt or decrypt a message in place under a caller-supplied key.
///
/// The key buffer is consumed: it is zeroized before this function returns,
/// whether the operation succeeds or fails. The key length selects the
/// cipher variant.
pub fn process_with_key(
    direction: Direction,
    key: &mut [u8],
    message: &mut [u8],
    msg_len: usize,
) -> Result<()> {
    let key_guard = ZeroizeGuard::new(key);

    let size = KeySize::from_key_len(key_guard.len())?;
    validate::non_empty("message", msg_len)?;
    validate::max_length("message", msg_len, MAX_MESSAGE_LEN)?;
    let full_len = padded_len(msg_len);
    validate::min_length("message buffer", message.len(), full_len)?;

    let cipher = Aes::new(&key_guard, size)?;
    drop(key_guard);

    apply_chunks(&cipher, &mut message[..full_len], direction)
}

fn apply_chunks(cipher: &Aes, buffer: &mut [u8], direction: Direction) -> Result<()> {
    for chunk in buffer.chunks_exact_mut(AES_BLOCK_SIZE) {
        cipher.apply_block(chunk, direction)?;
    }
    barrier::compiler_fence_seq_cst();
    Ok(())
}

#[cfg(test)]
mod tests {
    use msgvault_api::Error;

    use super::*;

    #[test]
    fn padded_len_rounds_up_to_blocks() {
        assert_eq!(padded_len(1), 16);
        assert_eq!(padded_len(16), 16);
        assert_eq!(padded_len(17), 32);
        assert_eq!(padded_len(256), 256);
    }

    #[test]
    fn derive_key_is_digest_prefix() {
        let digest = Sha256::digest(b"correct horse").unwrap();

        let mut key = [0u8; 24];
        derive_key(b"correct horse", KeySize::Bits192, &mut key).unwrap();
        assert_eq!(&key[..], &digest.as_bytes()[..24]);
    }

    #[test]
    fn derive_key_enforces_password_ceiling() {
        let mut key = [0u8; 16];
        assert_eq!(
            derive_key(b"", KeySize::Bits128, &mut key),
            Err(Error::EmptyInput {
                context: "password"
            })
        );
        assert!(derive_key(&[b'x'; 33], KeySize::Bits128, &mut key).is_err());
        assert!(derive_key(&[b'x'; 32], KeySize::Bits128, &mut key).is_ok());
    }

    #[test]
    fn process_enforces_message_ceiling() {
        let mut buffer = [0x42u8; 1024];
        let snapshot = buffer;
        let err =
            process(Direction::Encrypt, b"pw", KeySize::Bits128, &mut buffer, 1024).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "message",
                expected: 256,
                actual: 1024
            }
        );
        assert_eq!(buffer, snapshot);

        // The ceiling itself is accepted
        assert!(process(Direction::Encrypt, b"pw", KeySize::Bits128, &mut buffer, 256).is_ok());

        // The explicit-key path enforces it too, and still consumes the key
        let mut key = [0x11u8; 16];
        let mut long = [0x42u8; 1024];
        assert!(process_with_key(Direction::Decrypt, &mut key, &mut long, 1024).is_err());
        assert_eq!(key, [0u8; 16]);
    }

    #[test]
    fn round_trip_all_key_sizes() {
        let plaintext = *b"attack at dawn, bring snacks....";
        for key_size in [KeySize::Bits128, KeySize::Bits192, KeySize::Bits256] {
            let mut buffer = plaintext;
            process(
                Direction::Encrypt,
                b"hunter2",
                key_size,
                &mut buffer,
                plaintext.len(),
            )
            .unwrap();
            assert_ne!(buffer, plaintext);

            process(
                Direction::Decrypt,
                b"hunter2",
                key_size,
                &mut buffer,
                plaintext.len(),
            )
            .unwrap();
            assert_eq!(buffer, plaintext);
        }
    }

    #[test]
    fn partial_final_chunk_uses_backing_buffer() {
        // 20 logical bytes in a 32-byte backing buffer: both chunks transform
        let mut buffer = [0u8; 32];
        buffer[..20].copy_from_slice(b"twenty bytes of text");
        let snapshot = buffer;

        process(Direction::Encrypt, b"pw", KeySize::Bits128, &mut buffer, 20).unwrap();
        assert_ne!(buffer[16..], snapshot[16..]);

        process(Direction::Decrypt, b"pw", KeySize::Bits128, &mut buffer, 20).unwrap();
        assert_eq!(buffer, snapshot);
    }

    #[test]
    fn rejects_undersized_buffer_untouched() {
        let mut buffer = [0xaau8; 20];
        let snapshot = buffer;
        let err = process(Direction::Encrypt, b"pw", KeySize::Bits128, &mut buffer, 21).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "message buffer",
                expected: 32,
                actual: 20
            }
        );
        assert_eq!(buffer, snapshot);
    }

    #[test]
    fn rejects_empty_message_untouched() {
        let mut buffer = [0xaau8; 16];
        let snapshot = buffer;
        assert!(process(Direction::Encrypt, b"pw", KeySize::Bits128, &mut buffer, 0).is_err());
        assert_eq!(buffer, snapshot);
    }

    #[test]
    fn equal_blocks_encrypt_equally() {
        // No chaining: two identical chunks yield identical ciphertext
        let mut buffer = [0x42u8; 32];
        process(Direction::Encrypt, b"pw", KeySize::Bits256, &mut buffer, 32).unwrap();
        let (first, second) = buffer.split_at(16);
        assert_eq!(first, second);
    }

    #[test]
    fn process_with_key_wipes_key_on_success() {
        let mut key = [0x11u8; 16];
        let mut buffer = [0x22u8; 16];
        process_with_key(Direction::Encrypt, &mut key, &mut buffer, 16).unwrap();
        assert_eq!(key, [0u8; 16]);
    }

    #[test]
    fn process_with_key_wipes_key_on_error() {
        let mut key = [0x11u8; 16];
        let mut buffer = [0x22u8; 8];
        assert!(process_with_key(Direction::Encrypt, &mut key, &mut buffer, 16).is_err());
        assert_eq!(key, [0u8; 16]);
    }

    #[test]
    fn process_with_key_rejects_odd_key_lengths() {
        let mut key = [0x11u8; 17];
        let mut buffer = [0u8; 16];
        assert_eq!(
            process_with_key(Direction::Encrypt, &mut key, &mut buffer, 16),
            Err(Error::InvalidKeyLength { bits: 136 })
        );
    }

    #[test]
    fn password_and_explicit_key_agree() {
        let mut key = [0u8; 32];
        derive_key(b"agreement", KeySize::Bits256, &mut key).unwrap();

        let mut via_password = [0x7eu8; 16];
        let mut via_key = [0x7eu8; 16];
        process(
            Direction::Encrypt,
            b"agreement",
            KeySize::Bits256,
            &mut via_password,
            16,
        )
        .unwrap();
        process_with_key(Direction::Encrypt, &mut key, &mut via_key, 16).unwrap();
        assert_eq!(via_password, via_key);
    }
}
