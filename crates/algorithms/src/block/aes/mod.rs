//! AES block cipher, from first principles
//!
//! One engine ([`Aes`]) implements all three standard key sizes; the round
//! count and key-schedule length are the only things that vary. The state is
//! the caller's own 16-byte buffer, treated as a 4x4 column-major matrix:
//! byte `i` of the buffer is row `i % 4` of column `i / 4`.
//!
//! The round-key schedule is the only state a cipher instance holds. It lives
//! in a [`SecretBuffer`] and is wiped when the instance drops.

use msgvault_api::{Direction, SecretBytes};
use msgvault_common::{barrier, SecretBuffer};
use msgvault_params::cipher::{
    AES128_KEY_SIZE, AES128_ROUNDS, AES192_KEY_SIZE, AES192_ROUNDS, AES256_KEY_SIZE,
    AES256_ROUNDS, AES_BLOCK_SIZE, MAX_KEY_SCHEDULE_SIZE,
};
use rand::{CryptoRng, RngCore};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Error, Result};

mod gf;
mod key_schedule;
mod sbox;


/// The three standard AES key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// 128-bit key, 10 rounds
    Bits128,
    /// 192-bit key, 12 rounds
    Bits192,
    /// 256-bit key, 14 rounds
    Bits256,
}

impl KeySize {
    /// Select a key size from a declared bit length
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            128 => Ok(KeySize::Bits128),
            192 => Ok(KeySize::Bits192),
            256 => Ok(KeySize::Bits256),
            _ => Err(Error::InvalidKeyLength { bits }),
        }
    }

    /// Select a key size from a key length in bytes
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            AES128_KEY_SIZE => Ok(KeySize::Bits128),
            AES192_KEY_SIZE => Ok(KeySize::Bits192),
            AES256_KEY_SIZE => Ok(KeySize::Bits256),
            _ => Err(Error::InvalidKeyLength { bits: len * 8 }),
        }
    }

    /// Key length in bits
    pub fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Key length in bytes
    pub fn key_len(self) -> usize {
        match self {
            KeySize::Bits128 => AES128_KEY_SIZE,
            KeySize::Bits192 => AES192_KEY_SIZE,
            KeySize::Bits256 => AES256_KEY_SIZE,
        }
    }

    /// Key length in 32-bit words (Nk)
    pub fn nk(self) -> usize {
        self.key_len() / 4
    }

    /// Round count (Nr)
    pub fn rounds(self) -> usize {
        match self {
            KeySize::Bits128 => AES128_ROUNDS,
            KeySize::Bits192 => AES192_ROUNDS,
            KeySize::Bits256 => AES256_ROUNDS,
        }
    }
}

/// Index into the state matrix: column-major, 4 rows
#[inline(always)]
const fn at(row: usize, col: usize) -> usize {
    row + 4 * col
}

/// AES engine parameterized over key size at runtime
///
/// Expands the key schedule once at construction and applies it to one
/// 16-byte block at a time, in place.
#[derive(Clone)]
pub struct Aes {
    round_keys: SecretBuffer<MAX_KEY_SCHEDULE_SIZE>,
    size: KeySize,
}

impl Aes {
    /// Construct an engine from raw key bytes
    ///
    /// The key length must match `size`; the caller keeps ownership of the
    /// key bytes and remains responsible for wiping them.
    pub fn new(key: &[u8], size: KeySize) -> Result<Self> {
        let round_keys = key_schedule::expand_key(key, size)?;
        Ok(Self { round_keys, size })
    }

    /// Construct an engine, inferring the key size from the key length
    pub fn with_key(key: &[u8]) -> Result<Self> {
        let size = KeySize::from_key_len(key.len())?;
        Self::new(key, size)
    }

    /// The key size this engine was built with
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Encrypt one block in place
    pub fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let state = Self::as_state(block)?;
        self.warm_round_keys();
        barrier::compiler_fence_seq_cst();

        let rounds = self.size.rounds();
        let schedule = self.round_keys.as_slice();
        let mut round = 0;

        Self::add_round_key(state, schedule, &mut round, Direction::Encrypt);
        for _ in 1..rounds {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            Self::add_round_key(state, schedule, &mut round, Direction::Encrypt);
        }
        sub_bytes(state);
        shift_rows(state);
        Self::add_round_key(state, schedule, &mut round, Direction::Encrypt);

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// Decrypt one block in place
    pub fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let state = Self::as_state(block)?;
        self.warm_round_keys();
        barrier::compiler_fence_seq_cst();

        let schedule = self.round_keys.as_slice();
        let mut round = self.size.rounds();

        Self::add_round_key(state, schedule, &mut round, Direction::Decrypt);
        while round > 0 {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            Self::add_round_key(state, schedule, &mut round, Direction::Decrypt);
            inv_mix_columns(state);
        }
        inv_shift_rows(state);
        inv_sub_bytes(state);
        Self::add_round_key(state, schedule, &mut round, Direction::Decrypt);

        barrier::compiler_fence_seq_cst();
        Ok(())
    }

    /// Apply the transform selected by `direction` to one block in place
    pub fn apply_block(&self, block: &mut [u8], direction: Direction) -> Result<()> {
        match direction {
            Direction::Encrypt => self.encrypt_block(block),
            Direction::Decrypt => self.decrypt_block(block),
        }
    }

    fn as_state(block: &mut [u8]) -> Result<&mut [u8; AES_BLOCK_SIZE]> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        block.try_into().map_err(|_| Error::InvalidLength {
            context: "AES block",
            expected: AES_BLOCK_SIZE,
            actual: 0,
        })
    }

    /// Touch every active round key before the first round so the schedule
    /// is cache-resident during the block transform
    fn warm_round_keys(&self) {
        let active = AES_BLOCK_SIZE * (self.size.rounds() + 1);
        let mut acc = 0u8;
        for &byte in &self.round_keys.as_slice()[..active] {
            acc |= byte;
        }
        core::hint::black_box(acc);
    }

    /// XOR one round key into the state, then step the round counter in the
    /// direction of travel
    fn add_round_key(
        state: &mut [u8; AES_BLOCK_SIZE],
        schedule: &[u8],
        round: &mut usize,
        direction: Direction,
    ) {
        let offset = *round * AES_BLOCK_SIZE;
        for (byte, key_byte) in state.iter_mut().zip(&schedule[offset..offset + AES_BLOCK_SIZE]) {
            *byte ^= key_byte;
        }
        match direction {
            Direction::Encrypt => *round += 1,
            Direction::Decrypt => *round = round.saturating_sub(1),
        }
    }
}

impl core::fmt::Debug for Aes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Aes({} bits, schedule redacted)", self.size.bits())
    }
}

fn sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    for byte in state.iter_mut() {
        *byte = sbox::sub_byte(*byte);
    }
}

fn inv_sub_bytes(state: &mut [u8; AES_BLOCK_SIZE]) {
    for byte in state.iter_mut() {
        *byte = sbox::inv_sub_byte(*byte);
    }
}

/// Rotate row r left by r positions
fn shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    for row in 1..4 {
        let mut tmp = [0u8; 4];
        for col in 0..4 {
            tmp[col] = state[at(row, (col + row) % 4)];
        }
        for col in 0..4 {
            state[at(row, col)] = tmp[col];
        }
    }
}

/// Rotate row r right by r positions
fn inv_shift_rows(state: &mut [u8; AES_BLOCK_SIZE]) {
    for row in 1..4 {
        let mut tmp = [0u8; 4];
        for col in 0..4 {
            tmp[(col + row) % 4] = state[at(row, col)];
        }
        for col in 0..4 {
            state[at(row, col)] = tmp[col];
        }
    }
}

/// Multiply each column by the fixed polynomial {03}x^3 + x^2 + x + {02}
fn mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for col in 0..4 {
        let s0 = state[at(0, col)];
        let s1 = state[at(1, col)];
        let s2 = state[at(2, col)];
        let s3 = state[at(3, col)];

        state[at(0, col)] = gf::xtime(s0) ^ gf::mul3(s1) ^ s2 ^ s3;
        state[at(1, col)] = s0 ^ gf::xtime(s1) ^ gf::mul3(s2) ^ s3;
        state[at(2, col)] = s0 ^ s1 ^ gf::xtime(s2) ^ gf::mul3(s3);
        state[at(3, col)] = gf::mul3(s0) ^ s1 ^ s2 ^ gf::xtime(s3);
    }
}

/// Multiply each column by the inverse polynomial {0b}x^3 + {0d}x^2 + {09}x + {0e}
fn inv_mix_columns(state: &mut [u8; AES_BLOCK_SIZE]) {
    for col in 0..4 {
        let s0 = state[at(0, col)];
        let s1 = state[at(1, col)];
        let s2 = state[at(2, col)];
        let s3 = state[at(3, col)];

        state[at(0, col)] = gf::mul14(s0) ^ gf::mul11(s1) ^ gf::mul13(s2) ^ gf::mul9(s3);
        state[at(1, col)] = gf::mul9(s0) ^ gf::mul14(s1) ^ gf::mul11(s2) ^ gf::mul13(s3);
        state[at(2, col)] = gf::mul13(s0) ^ gf::mul9(s1) ^ gf::mul14(s2) ^ gf::mul11(s3);
        state[at(3, col)] = gf::mul11(s0) ^ gf::mul13(s1) ^ gf::mul9(s2) ^ gf::mul14(s3);
    }
}

macro_rules! define_aes_variant {
    ($name:ident, $key_size:expr, $size:expr, $label:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            inner: Aes,
        }

        impl CipherAlgorithm for $name {
            const KEY_SIZE: usize = $key_size;
            const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

            fn name() -> &'static str {
                $label
            }
        }

        impl BlockCipher for $name {
            type Key = SecretBytes<$key_size>;

            fn new(key: &Self::Key) -> Self {
                // The key type fixes the length, so expansion cannot fail
                let inner = Aes::new(key.as_ref(), $size)
                    .expect("key length is correct by construction");
                Self { inner }
            }

            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                self.inner.encrypt_block(block)
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                self.inner.decrypt_block(block)
            }

            fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
                SecretBytes::random(rng)
            }
        }
    };
}

define_aes_variant!(
    Aes128,
    AES128_KEY_SIZE,
    KeySize::Bits128,
    "AES-128",
    "AES with a 128-bit key (10 rounds)"
);
define_aes_variant!(
    Aes192,
    AES192_KEY_SIZE,
    KeySize::Bits192,
    "AES-192",
    "AES with a 192-bit key (12 rounds)"
);
define_aes_variant!(
    Aes256,
    AES256_KEY_SIZE,
    KeySize::Bits256,
    "AES-256",
    "AES with a 256-bit key (14 rounds)"
);
