use crate::compactsize::{
    encode_compact_size, encode_prefixed_bytes, read_compact_size, read_prefixed_bytes,
};
use crate::error::{ConsensusError, ErrorCode};
use crate::hash::sha256d;
use crate::merkle::merkle_root_txids;
use crate::script::TaggedScript;
use crate::wire_read::Reader;

pub const BLOCK_HEADER_BYTES: usize = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutPoint {
    pub hash: [u8; 32],
    pub index: u32,
}

impl OutPoint {
    pub const fn null() -> Self {
        Self {
            hash: [0u8; 32],
            index: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.hash == [0u8; 32] && self.index == u32::MAX
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxOut {
    pub value: i64,
    pub script_pubkey: TaggedScript,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.version.to_le_bytes());
        encode_compact_size(self.inputs.len() as u64, &mut out);
        for input in &self.inputs {
            out.extend_from_slice(&input.prevout.hash);
            out.extend_from_slice(&input.prevout.index.to_le_bytes());
            encode_prefixed_bytes(&input.script_sig, &mut out);
            out.extend_from_slice(&input.sequence.to_le_bytes());
        }
        encode_compact_size(self.outputs.len() as u64, &mut out);
        for output in &self.outputs {
            out.extend_from_slice(&output.value.to_le_bytes());
            output.script_pubkey.encode_to(&mut out);
        }
        out.extend_from_slice(&self.lock_time.to_le_bytes());
        out
    }

    pub fn parse(b: &[u8]) -> Result<Self, ConsensusError> {
        let mut r = Reader::new(b);
        let tx = Self::parse_from(&mut r)?;
        r.finish()?;
        Ok(tx)
    }

    pub(crate) fn parse_from(r: &mut Reader<'_>) -> Result<Self, ConsensusError> {
        let version = r.read_i32_le()?;

        let (input_count, _) = read_compact_size(r)?;
        let input_count = checked_count(input_count, r.remaining())?;
        let mut inputs = Vec::with_capacity(input_count);
        for _ in 0..input_count {
            let hash = r.read_array()?;
            let index = r.read_u32_le()?;
            let script_sig = read_prefixed_bytes(r)?.to_vec();
            let sequence = r.read_u32_le()?;
            inputs.push(TxIn {
                prevout: OutPoint { hash, index },
                script_sig,
                sequence,
            });
        }

        let (output_count, _) = read_compact_size(r)?;
        let output_count = checked_count(output_count, r.remaining())?;
        let mut outputs = Vec::with_capacity(output_count);
        for _ in 0..output_count {
            let value = r.read_i64_le()?;
            let script_pubkey = TaggedScript::decode_from(r)?;
            outputs.push(TxOut {
                value,
                script_pubkey,
            });
        }

        let lock_time = r.read_u32_le()?;
        Ok(Self {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    pub fn txid(&self) -> [u8; 32] {
        sha256d(&self.serialize())
    }
}

// Every element takes at least one byte, so a count larger than the rest of
// the buffer cannot be satisfied.
fn checked_count(n: u64, remaining: usize) -> Result<usize, ConsensusError> {
    if n > remaining as u64 {
        return Err(ConsensusError::new(
            ErrorCode::WireErrEof,
            "element count exceeds input",
        ));
    }
    Ok(n as usize)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: [u8; 32],
    pub merkle_root: [u8; 32],
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub fn to_bytes(&self) -> [u8; BLOCK_HEADER_BYTES] {
        let mut out = [0u8; BLOCK_HEADER_BYTES];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(&self.prev_block_hash);
        out[36..68].copy_from_slice(&self.merkle_root);
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    pub fn hash(&self) -> [u8; 32] {
        sha256d(&self.to_bytes())
    }
}

pub fn parse_block_header_bytes(b: &[u8]) -> Result<BlockHeader, ConsensusError> {
    if b.len() != BLOCK_HEADER_BYTES {
        return Err(ConsensusError::new(
            ErrorCode::WireErrEof,
            "block header length mismatch",
        ));
    }
    let mut r = Reader::new(b);
    let version = r.read_i32_le()?;
    let prev_block_hash = r.read_array()?;
    let merkle_root = r.read_array()?;
    let time = r.read_u32_le()?;
    let bits = r.read_u32_le()?;
    let nonce = r.read_u32_le()?;

    Ok(BlockHeader {
        version,
        prev_block_hash,
        merkle_root,
        time,
        bits,
        nonce,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub txs: Vec<Transaction>,
}

impl Block {
    pub fn hash(&self) -> [u8; 32] {
        self.header.hash()
    }

    pub fn compute_merkle_root(&self) -> [u8; 32] {
        let txids: Vec<[u8; 32]> = self.txs.iter().map(Transaction::txid).collect();
        merkle_root_txids(&txids)
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = self.header.to_bytes().to_vec();
        encode_compact_size(self.txs.len() as u64, &mut out);
        for tx in &self.txs {
            out.extend_from_slice(&tx.serialize());
        }
        out
    }

    pub fn parse(b: &[u8]) -> Result<Self, ConsensusError> {
        if b.len() < BLOCK_HEADER_BYTES {
            return Err(ConsensusError::new(
                ErrorCode::WireErrEof,
                "block shorter than header",
            ));
        }
        let header = parse_block_header_bytes(&b[..BLOCK_HEADER_BYTES])?;
        let mut r = Reader::new(&b[BLOCK_HEADER_BYTES..]);
        let (tx_count, _) = read_compact_size(&mut r)?;
        let tx_count = checked_count(tx_count, r.remaining())?;
        let mut txs = Vec::with_capacity(tx_count);
        for _ in 0..tx_count {
            txs.push(Transaction::parse_from(&mut r)?);
        }
        r.finish()?;
        Ok(Self { header, txs })
    }
}
