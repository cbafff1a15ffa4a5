use crate::error::{ConsensusError, ErrorCode};

/// Forward-only cursor over a byte slice. Every short read is `WireErrEof`.
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], ConsensusError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.buf.len())
            .ok_or(ConsensusError::new(ErrorCode::WireErrEof, "unexpected end of input"))?;
        let out = &self.buf[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ConsensusError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, ConsensusError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    pub fn read_u16_le(&mut self) -> Result<u16, ConsensusError> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32_le(&mut self) -> Result<u32, ConsensusError> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_i32_le(&mut self) -> Result<i32, ConsensusError> {
        self.read_array().map(i32::from_le_bytes)
    }

    pub fn read_u64_le(&mut self) -> Result<u64, ConsensusError> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn read_i64_le(&mut self) -> Result<i64, ConsensusError> {
        self.read_array().map(i64::from_le_bytes)
    }

    /// Fails unless the whole buffer has been consumed.
    pub fn finish(&self) -> Result<(), ConsensusError> {
        match self.remaining() {
            0 => Ok(()),
            _ => Err(ConsensusError::new(ErrorCode::WireErrTrailing, "trailing bytes")),
        }
    }
}
