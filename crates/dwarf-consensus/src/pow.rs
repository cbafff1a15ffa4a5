use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{ConsensusError, ErrorCode};
use crate::util::hex_array;

/// Decodes a compact ("nBits") target.
///
/// Returns `None` for encodings with the sign bit set on a non-zero
/// mantissa, and for encodings that do not fit in 256 bits.
pub fn target_from_compact(bits: u32) -> Option<BigUint> {
    let size = bits >> 24;
    let word = bits & 0x007f_ffff;

    if word != 0 && bits & 0x0080_0000 != 0 {
        return None;
    }
    if word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32)) {
        return None;
    }

    let w = BigUint::from(word);
    if size <= 3 {
        Some(w >> (8 * (3 - size)))
    } else {
        Some(w << (8 * (size - 3)))
    }
}

/// Encodes a target in compact form, rounding the mantissa down.
pub fn target_to_compact(target: &BigUint) -> u32 {
    let bytes = target.to_bytes_be();
    if target.is_zero() {
        return 0;
    }
    let mut size = bytes.len() as u32;
    let mut word: u32 = if size <= 3 {
        let mut w = 0u32;
        for b in &bytes {
            w = (w << 8) | u32::from(*b);
        }
        w << (8 * (3 - size))
    } else {
        (u32::from(bytes[0]) << 16) | (u32::from(bytes[1]) << 8) | u32::from(bytes[2])
    };
    // Keep the mantissa positive.
    if word & 0x0080_0000 != 0 {
        word >>= 8;
        size += 1;
    }
    word | (size << 24)
}

pub fn pow_limit_from_be_bytes(b: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(b)
}

/// Parses a 64-digit big-endian hex literal into a pow limit.
pub const fn pow_limit_from_hex(s: &str) -> [u8; 32] {
    hex_array::<32>(s)
}

/// The genesis target must decode and must not be easier than the pow limit.
pub fn check_genesis_bits(bits: u32, pow_limit: &[u8; 32]) -> Result<(), ConsensusError> {
    let Some(target) = target_from_compact(bits) else {
        return Err(ConsensusError::new(
            ErrorCode::GenesisErrBitsInvalid,
            "genesis bits do not decode",
        ));
    };
    if target.is_zero() {
        return Err(ConsensusError::new(
            ErrorCode::GenesisErrBitsInvalid,
            "genesis target is zero",
        ));
    }
    if target > pow_limit_from_be_bytes(pow_limit) {
        return Err(ConsensusError::new(
            ErrorCode::GenesisErrBitsInvalid,
            "genesis target above pow limit",
        ));
    }
    Ok(())
}
