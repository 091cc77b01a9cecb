//! Arithmetic in GF(2^8) with the AES reduction polynomial
//!
//! Everything here is built from [`xtime`], multiplication by x modulo
//! x^8 + x^4 + x^3 + x + 1. The fixed MixColumns coefficients are expanded
//! into xtime chains rather than table lookups, so no multiplication is
//! data-dependent in its memory access pattern.

/// Multiply a field element by x (i.e. by {02})
#[inline(always)]
pub fn xtime(byte: u8) -> u8 {
    let carry = byte >> 7;
    (byte << 1) ^ (carry * 0x1b)
}

/// Multiply by {03} = {02} + {01}
#[inline(always)]
pub fn mul3(byte: u8) -> u8 {
    xtime(byte) ^ byte
}

/// Multiply by {09} = {08} + {01}
#[inline(always)]
pub fn mul9(byte: u8) -> u8 {
    xtime(xtime(xtime(byte))) ^ byte
}

/// Multiply by {0b} = {08} + {02} + {01}
#[inline(always)]
pub fn mul11(byte: u8) -> u8 {
    xtime(xtime(xtime(byte))) ^ xtime(byte) ^ byte
}

/// Multiply by {0d} = {08} + {04} + {01}
#[inline(always)]
pub fn mul13(byte: u8) -> u8 {
    xtime(xtime(xtime(byte))) ^ xtime(xtime(byte)) ^ byte
}

/// Multiply by {0e} = {08} + {04} + {02}
#[inline(always)]
pub fn mul14(byte: u8) -> u8 {
    xtime(xtime(xtime(byte))) ^ xtime(xtime(byte)) ^ xtime(byte)
}

/// Round constant for key expansion: x^(round - 1) in GF(2^8)
///
/// `round` starts at 1; computed by repeated [`xtime`] rather than stored
/// in a table.
#[inline]
pub fn rcon(round: usize) -> u8 {
    let mut value = 0x01u8;
    for _ in 1..round {
        value = xtime(value);
    }
    value
}
