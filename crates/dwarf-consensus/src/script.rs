//! Script payloads tagged with the asset they move.

use core::fmt;
use core::str::FromStr;

use crate::compactsize::{encode_prefixed_bytes, read_prefixed_bytes};
use crate::error::ConsensusError;
use crate::varint::{encode_varint, read_varint_u8};
use crate::wire_read::Reader;

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_CHECKSIG: u8 = 0xac;

/// Which asset an output script carries.
///
/// Tags beyond the two defined assets decode as `Reserved` and re-encode
/// unchanged; interpreting them is left to the script consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AssetType {
    #[default]
    Mith,
    Ring,
    Reserved(u8),
}

impl AssetType {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => AssetType::Mith,
            1 => AssetType::Ring,
            n => AssetType::Reserved(n),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            AssetType::Mith => 0,
            AssetType::Ring => 1,
            AssetType::Reserved(n) => n,
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, AssetType::Reserved(_))
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::Mith => write!(f, "mith"),
            AssetType::Ring => write!(f, "ring"),
            AssetType::Reserved(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for AssetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mith" => Ok(AssetType::Mith),
            "ring" => Ok(AssetType::Ring),
            other => other
                .parse::<u8>()
                .map(AssetType::from_code)
                .map_err(|_| format!("unknown asset type: {s}")),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TaggedScript {
    pub payload: Vec<u8>,
    pub asset: AssetType,
}

impl TaggedScript {
    pub fn new(payload: Vec<u8>, asset: AssetType) -> Self {
        Self { payload, asset }
    }

    pub fn encode_to(&self, out: &mut Vec<u8>) {
        encode_prefixed_bytes(&self.payload, out);
        encode_varint(u64::from(self.asset.code()), out);
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.payload.len() + 10);
        self.encode_to(&mut out);
        out
    }

    pub(crate) fn decode_from(r: &mut Reader<'_>) -> Result<Self, ConsensusError> {
        let payload = read_prefixed_bytes(r)?.to_vec();
        let asset = AssetType::from_code(read_varint_u8(r)?);
        Ok(Self { payload, asset })
    }

    /// Decodes exactly one tagged script; trailing bytes are an error.
    pub fn decode(b: &[u8]) -> Result<Self, ConsensusError> {
        let mut r = Reader::new(b);
        let s = Self::decode_from(&mut r)?;
        r.finish()?;
        Ok(s)
    }
}

/// Appends script pushes and opcodes.
#[derive(Clone, Debug, Default)]
pub struct ScriptBuilder {
    buf: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_opcode(mut self, op: u8) -> Self {
        self.buf.push(op);
        self
    }

    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let n = data.len();
        if n < OP_PUSHDATA1 as usize {
            self.buf.push(n as u8);
        } else if n <= 0xff {
            self.buf.push(OP_PUSHDATA1);
            self.buf.push(n as u8);
        } else if n <= 0xffff {
            self.buf.push(OP_PUSHDATA2);
            self.buf.extend_from_slice(&(n as u16).to_le_bytes());
        } else {
            self.buf.push(OP_PUSHDATA4);
            self.buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        self.buf.extend_from_slice(data);
        self
    }

    /// Pushes an integer, using the small-integer opcodes where they exist.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (n as u8) - 1),
            _ => self.push_slice(&script_num_bytes(n)),
        }
    }

    /// Pushes the minimal script-number encoding of `n` as data, even for
    /// values that have a dedicated opcode.
    pub fn push_num(self, n: i64) -> Self {
        self.push_slice(&script_num_bytes(n))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number.
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let neg = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if neg { 0x80 } else { 0x00 });
    } else if neg {
        out[last] |= 0x80;
    }
    out
}
