//! Genesis block construction and checkpoint verification.

use tracing::warn;

use crate::block::{Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut};
use crate::error::{ConsensusError, ErrorCode};
use crate::hash::hash_to_display_hex;
use crate::script::{AssetType, ScriptBuilder, TaggedScript, OP_CHECKSIG};
use crate::util::hex_array;

pub const GENESIS_MESSAGE: &str =
    "The Times 03/Jan/2009 Chancellor on brink of second bailout for banks";

pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = hex_array(
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb6\
     49f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f",
);

// Compact bits pushed at the head of every genesis coinbase script_sig.
const GENESIS_SCRIPT_SIG_BITS: i64 = 486_604_799;

pub fn genesis_output_script() -> Vec<u8> {
    ScriptBuilder::new()
        .push_slice(&GENESIS_OUTPUT_PUBKEY)
        .push_opcode(OP_CHECKSIG)
        .into_bytes()
}

/// Builds a genesis block from an explicit coinbase message and output script.
///
/// The coinbase pays `reward` in Mith to `output_script`; the header commits
/// to the coinbase through the merkle root.
pub fn create_genesis_block_with(
    message: &str,
    output_script: &[u8],
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: i64,
) -> Block {
    let script_sig = ScriptBuilder::new()
        .push_int(GENESIS_SCRIPT_SIG_BITS)
        .push_num(4)
        .push_slice(message.as_bytes())
        .into_bytes();

    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }],
        outputs: vec![TxOut {
            value: reward,
            script_pubkey: TaggedScript::new(output_script.to_vec(), AssetType::Mith),
        }],
        lock_time: 0,
    };

    let mut block = Block {
        header: BlockHeader {
            version,
            prev_block_hash: [0u8; 32],
            merkle_root: [0u8; 32],
            time,
            bits,
            nonce,
        },
        txs: vec![coinbase],
    };
    block.header.merkle_root = block.compute_merkle_root();
    block
}

pub fn create_genesis_block(time: u32, nonce: u32, bits: u32, version: i32, reward: i64) -> Block {
    create_genesis_block_with(
        GENESIS_MESSAGE,
        &genesis_output_script(),
        time,
        nonce,
        bits,
        version,
        reward,
    )
}

/// Known-good genesis hash and merkle root for a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisCheckpoint {
    pub hash: [u8; 32],
    pub merkle_root: [u8; 32],
}

/// Compares a derived genesis block against its checkpoint.
///
/// Networks without a checkpoint pass with a warning, since their genesis
/// constants have not been fixed yet.
pub fn verify_genesis(
    network_id: &str,
    block: &Block,
    checkpoint: Option<&GenesisCheckpoint>,
) -> Result<(), ConsensusError> {
    let Some(cp) = checkpoint else {
        warn!(
            network = network_id,
            genesis_hash = %hash_to_display_hex(&block.hash()),
            "no genesis checkpoint; derived genesis block is unverified"
        );
        return Ok(());
    };
    if block.header.merkle_root != cp.merkle_root {
        return Err(ConsensusError::new(
            ErrorCode::GenesisErrMerkleMismatch,
            "genesis merkle root mismatch",
        ));
    }
    if block.hash() != cp.hash {
        return Err(ConsensusError::new(
            ErrorCode::GenesisErrHashMismatch,
            "genesis hash mismatch",
        ));
    }
    Ok(())
}
