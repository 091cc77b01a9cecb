//! SHA-256, from first principles
//!
//! Two entry points share one compression core: the streaming [`Sha256`]
//! hasher absorbs arbitrary byte slices, and [`words`] exposes the
//! word-oriented one-shot interface for callers whose messages are already
//! arrays of 32-bit words.
//!
//! The message schedule and working variables of every compression are held
//! in zeroizing containers, so no intermediate hash state survives the call.

use byteorder::{BigEndian, ByteOrder};
use msgvault_common::{EphemeralSecret, ZeroizeGuard};
use msgvault_params::hash::{
    SHA256_BLOCK_SIZE, SHA256_BLOCK_WORDS, SHA256_OUTPUT_SIZE, SHA256_SCHEDULE_WORDS,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{HashAlgorithm, HashFunction};
use crate::error::Result;
use crate::types::Digest;

pub mod words;


/// Round constants: fractional parts of the cube roots of the first 64 primes
const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash value: fractional parts of the square roots of the first
/// 8 primes
pub(crate) const INITIAL_STATE: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// One compression round over a single 16-word block.
///
/// Shared by the streaming and word-oriented interfaces. The expanded
/// message schedule is ephemeral and the working variables are wiped before
/// the function returns.
pub(crate) fn compress(state: &mut [u32; 8], block: &[u32; SHA256_BLOCK_WORDS]) {
    let mut schedule = EphemeralSecret::new([0u32; SHA256_SCHEDULE_WORDS]);
    schedule[..SHA256_BLOCK_WORDS].copy_from_slice(block);
    for t in SHA256_BLOCK_WORDS..SHA256_SCHEDULE_WORDS {
        schedule[t] = small_sigma1(schedule[t - 2])
            .wrapping_add(schedule[t - 7])
            .wrapping_add(small_sigma0(schedule[t - 15]))
            .wrapping_add(schedule[t - 16]);
    }

    let mut working = *state;
    let mut vars = ZeroizeGuard::new(&mut working);

    for t in 0..SHA256_SCHEDULE_WORDS {
        let t1 = vars[7]
            .wrapping_add(big_sigma1(vars[4]))
            .wrapping_add(ch(vars[4], vars[5], vars[6]))
            .wrapping_add(K256[t])
            .wrapping_add(schedule[t]);
        let t2 = big_sigma0(vars[0]).wrapping_add(maj(vars[0], vars[1], vars[2]));

        vars[7] = vars[6];
        vars[6] = vars[5];
        vars[5] = vars[4];
        vars[4] = vars[3].wrapping_add(t1);
        vars[3] = vars[2];
        vars[2] = vars[1];
        vars[1] = vars[0];
        vars[0] = t1.wrapping_add(t2);
    }

    for (word, var) in state.iter_mut().zip(vars.iter()) {
        *word = word.wrapping_add(*var);
    }
}

/// Marker type carrying the SHA-256 parameters
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const NAME: &'static str = "SHA-256";
}

/// Streaming SHA-256 hasher
///
/// Absorbs input through [`HashFunction::update`]; `finalize` pads, produces
/// the digest, and resets the hasher to its initial state. All internal state
/// zeroizes on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    state: [u32; 8],
    buffer: [u8; SHA256_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Sha256 {
    fn update_internal(&mut self, mut data: &[u8]) {
        self.total_bytes = self.total_bytes.wrapping_add(data.len() as u64);

        if self.buffer_idx > 0 {
            let take = (SHA256_BLOCK_SIZE - self.buffer_idx).min(data.len());
            self.buffer[self.buffer_idx..self.buffer_idx + take].copy_from_slice(&data[..take]);
            self.buffer_idx += take;
            data = &data[take..];

            if self.buffer_idx == SHA256_BLOCK_SIZE {
                self.compress_buffer();
                self.buffer_idx = 0;
            }
        }

        while data.len() >= SHA256_BLOCK_SIZE {
            self.buffer.copy_from_slice(&data[..SHA256_BLOCK_SIZE]);
            self.compress_buffer();
            data = &data[SHA256_BLOCK_SIZE..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffer_idx = data.len();
        }
    }

    fn finalize_internal(&mut self) -> Digest<SHA256_OUTPUT_SIZE> {
        let bit_len = self.total_bytes.wrapping_mul(8);

        self.buffer[self.buffer_idx] = 0x80;
        self.buffer_idx += 1;

        if self.buffer_idx > SHA256_BLOCK_SIZE - 8 {
            // No room for the length suffix; it goes in an extra block
            for byte in &mut self.buffer[self.buffer_idx..] {
                *byte = 0;
            }
            self.compress_buffer();
            self.buffer_idx = 0;
        }

        for byte in &mut self.buffer[self.buffer_idx..SHA256_BLOCK_SIZE - 8] {
            *byte = 0;
        }
        BigEndian::write_u64(&mut self.buffer[SHA256_BLOCK_SIZE - 8..], bit_len);
        self.compress_buffer();

        let mut output = [0u8; SHA256_OUTPUT_SIZE];
        for (chunk, word) in output.chunks_exact_mut(4).zip(self.state.iter()) {
            BigEndian::write_u32(chunk, *word);
        }

        self.reset();
        Digest::new(output)
    }

    fn compress_buffer(&mut self) {
        let mut block = [0u32; SHA256_BLOCK_WORDS];
        let mut guard = ZeroizeGuard::new(&mut block);
        for (word, chunk) in guard.iter_mut().zip(self.buffer.chunks_exact(4)) {
            *word = BigEndian::read_u32(chunk);
        }
        compress(&mut self.state, &guard);
    }

    fn reset(&mut self) {
        self.buffer.zeroize();
        self.state = INITIAL_STATE;
        self.buffer_idx = 0;
        self.total_bytes = 0;
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        <Self as HashFunction>::new()
    }
}

impl HashFunction for Sha256 {
    type Algorithm = Sha256Algorithm;
    type Output = Digest<SHA256_OUTPUT_SIZE>;

    fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; SHA256_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        Ok(self.finalize_internal())
    }
}
