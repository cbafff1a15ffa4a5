//! Bitcoin CompactSize lengths, minimal encoding only.

use crate::error::{ConsensusError, ErrorCode};
use crate::wire_read::Reader;

/// Decodes one CompactSize and returns it with the number of bytes it used.
pub fn read_compact_size(r: &mut Reader<'_>) -> Result<(u64, usize), ConsensusError> {
    let start = r.offset();
    // Each wide form must carry a value the next narrower form cannot.
    let (value, smallest) = match r.read_u8()? {
        0xfd => (u64::from(r.read_u16_le()?), 0xfd),
        0xfe => (u64::from(r.read_u32_le()?), 0x1_0000),
        0xff => (r.read_u64_le()?, 0x1_0000_0000),
        b => return Ok((u64::from(b), 1)),
    };
    if value < smallest {
        return Err(ConsensusError::new(
            ErrorCode::WireErrNonMinimal,
            "non-minimal CompactSize",
        ));
    }
    Ok((value, r.offset() - start))
}

pub fn read_compact_size_bytes(b: &[u8]) -> Result<(u64, usize), ConsensusError> {
    read_compact_size(&mut Reader::new(b))
}

pub fn encode_compact_size(n: u64, out: &mut Vec<u8>) {
    if let Ok(small) = u8::try_from(n) {
        if small < 0xfd {
            out.push(small);
            return;
        }
    }
    if let Ok(v) = u16::try_from(n) {
        out.push(0xfd);
        out.extend_from_slice(&v.to_le_bytes());
    } else if let Ok(v) = u32::try_from(n) {
        out.push(0xfe);
        out.extend_from_slice(&v.to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&n.to_le_bytes());
    }
}

/// Reads a CompactSize length prefix followed by that many bytes.
pub fn read_prefixed_bytes<'a>(r: &mut Reader<'a>) -> Result<&'a [u8], ConsensusError> {
    let (n, _) = read_compact_size(r)?;
    let n = usize::try_from(n)
        .map_err(|_| ConsensusError::new(ErrorCode::WireErrOverflow, "length overflows usize"))?;
    r.read_bytes(n)
}

pub fn encode_prefixed_bytes(b: &[u8], out: &mut Vec<u8>) {
    encode_compact_size(b.len() as u64, out);
    out.extend_from_slice(b);
}
