//! Fixed-width little-endian conversion between integers and bytes

use crate::{AlgebraError, AlgebraResult};
use num_bigint::BigUint;

/// Width of every scalar and compressed point encoding
pub const ENCODED_LEN: usize = 32;

/// Interpret `bytes` as a little-endian unsigned integer.
pub fn bytes_to_int(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Encode `n` as exactly 32 little-endian bytes, zero padded.
///
/// Values wider than 256 bits are rejected rather than wrapped; reduce them
/// modulo the group order first when a scalar is wanted.
pub fn int_to_bytes(n: &BigUint) -> AlgebraResult<[u8; ENCODED_LEN]> {
    let bits = n.bits();
    if bits > (ENCODED_LEN as u64) * 8 {
        return Err(AlgebraError::IntegerOverflow { bits });
    }

    let le = n.to_bytes_le();
    let mut out = [0u8; ENCODED_LEN];
    out[..le.len()].copy_from_slice(&le);
    Ok(out)
}

/// Decode a hex string holding exactly 32 bytes.
pub fn decode_hex32(s: &str) -> AlgebraResult<[u8; ENCODED_LEN]> {
    let bytes = hex::decode(s).map_err(|e| AlgebraError::InvalidHex(e.to_string()))?;
    bytes.try_into().map_err(|v: Vec<u8>| {
        AlgebraError::InvalidHex(format!("expected {} bytes, got {}", ENCODED_LEN, v.len()))
    })
}

/// Bit length of a little-endian 32-byte integer (0 for zero).
pub(crate) fn bit_length(bytes: &[u8; ENCODED_LEN]) -> usize {
    match bytes.iter().rposition(|b| *b != 0) {
        Some(i) => i * 8 + (8 - bytes[i].leading_zeros() as usize),
        None => 0,
    }
}
