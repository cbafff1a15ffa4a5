pub mod block;
mod compactsize;
pub mod constants;
pub mod deployments;
pub mod error;
pub mod genesis;
mod hash;
pub mod merkle;
pub mod params;
pub mod pow;
pub mod script;
mod util;
mod varint;
mod wire_read;

pub use block::{
    parse_block_header_bytes, Block, BlockHeader, OutPoint, Transaction, TxIn, TxOut,
    BLOCK_HEADER_BYTES,
};
pub use compactsize::{encode_compact_size, read_compact_size_bytes};
pub use constants::COIN;
pub use deployments::{BuriedDeployment, DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS};
pub use error::{ConsensusError, ErrorCode};
pub use genesis::{
    create_genesis_block, create_genesis_block_with, verify_genesis, GenesisCheckpoint,
};
pub use hash::{hash_to_display_hex, sha256d};
pub use merkle::merkle_root_txids;
pub use params::{ConsensusParams, VersionBitsDeployment};
pub use pow::{check_genesis_bits, pow_limit_from_hex, target_from_compact, target_to_compact};
pub use script::{AssetType, ScriptBuilder, TaggedScript};
pub use util::hex_array;
pub use varint::{encode_varint, read_varint_bytes};

#[cfg(test)]
mod tests;
