//! MSB base-128 variable-length integers.
//!
//! Every continuation byte carries an implicit +1, so each value has exactly
//! one encoding and there is no padding form to reject.

use crate::error::{ConsensusError, ErrorCode};
use crate::wire_read::Reader;

/// Reads a VARINT whose value must not exceed `max`.
pub fn read_varint(r: &mut Reader<'_>, max: u64) -> Result<u64, ConsensusError> {
    let mut n: u64 = 0;
    loop {
        let ch = r.read_u8()?;
        if n > (max >> 7) {
            return Err(ConsensusError::new(ErrorCode::WireErrOverflow, "VARINT too large"));
        }
        n = (n << 7) | u64::from(ch & 0x7f);
        if n > max {
            return Err(ConsensusError::new(ErrorCode::WireErrOverflow, "VARINT too large"));
        }
        if ch & 0x80 == 0 {
            return Ok(n);
        }
        if n == max {
            return Err(ConsensusError::new(ErrorCode::WireErrOverflow, "VARINT too large"));
        }
        n += 1;
    }
}

pub fn read_varint_u8(r: &mut Reader<'_>) -> Result<u8, ConsensusError> {
    Ok(read_varint(r, u64::from(u8::MAX))? as u8)
}

pub fn read_varint_bytes(b: &[u8]) -> Result<(u64, usize), ConsensusError> {
    let mut r = Reader::new(b);
    let v = read_varint(&mut r, u64::MAX)?;
    Ok((v, r.offset()))
}

pub fn encode_varint(mut n: u64, out: &mut Vec<u8>) {
    // 64 bits need at most ceil(64 / 7) = 10 groups.
    let mut tmp = [0u8; 10];
    let mut len = 0usize;
    loop {
        tmp[len] = (n & 0x7f) as u8 | if len > 0 { 0x80 } else { 0x00 };
        if n <= 0x7f {
            break;
        }
        n = (n >> 7) - 1;
        len += 1;
    }
    for i in (0..=len).rev() {
        out.push(tmp[i]);
    }
}
