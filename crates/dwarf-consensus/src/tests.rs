use crate::constants::COIN;
use crate::error::ErrorCode;
use crate::genesis::{
    create_genesis_block, create_genesis_block_with, genesis_output_script, verify_genesis,
    GenesisCheckpoint, GENESIS_MESSAGE,
};
use crate::hash::{hash_to_display_hex, sha256d};
use crate::script::AssetType;
use crate::{parse_block_header_bytes, Block, Transaction, BLOCK_HEADER_BYTES};

const BITCOIN_GENESIS_SCRIPT_SIG_HEX: &str = "04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73";

fn dwarf_genesis() -> Block {
    create_genesis_block(1231006505, 2084524493, 0x1d00ffff, 1, 128 * COIN)
}

#[test]
fn genesis_coinbase_shape() {
    let g = dwarf_genesis();
    assert_eq!(g.txs.len(), 1);
    let cb = &g.txs[0];
    assert!(cb.is_coinbase());
    assert_eq!(
        hex::encode(&cb.inputs[0].script_sig),
        BITCOIN_GENESIS_SCRIPT_SIG_HEX
    );
    assert_eq!(cb.inputs[0].sequence, u32::MAX);
    assert_eq!(cb.outputs.len(), 1);
    assert_eq!(cb.outputs[0].value, 128 * COIN);
    assert_eq!(cb.outputs[0].script_pubkey.asset, AssetType::Mith);
    assert_eq!(cb.outputs[0].script_pubkey.payload, genesis_output_script());
    assert_eq!(genesis_output_script().len(), 67);
}

#[test]
fn genesis_header_commits_to_coinbase() {
    let g = dwarf_genesis();
    assert_eq!(g.header.merkle_root, g.txs[0].txid());
    assert_eq!(g.header.prev_block_hash, [0u8; 32]);
    assert_eq!(g.header.time, 1231006505);
    assert_eq!(g.header.nonce, 2084524493);
    assert_eq!(g.header.bits, 0x1d00ffff);
    assert_eq!(g.header.version, 1);
    assert_eq!(g.hash(), sha256d(&g.header.to_bytes()));
}

#[test]
fn genesis_is_deterministic_and_input_sensitive() {
    let a = dwarf_genesis();
    let b = dwarf_genesis();
    assert_eq!(a.hash(), b.hash());
    assert_eq!(a, b);

    let other_reward = create_genesis_block(1231006505, 2084524493, 0x1d00ffff, 1, 50 * COIN);
    assert_ne!(other_reward.header.merkle_root, a.header.merkle_root);
    assert_ne!(other_reward.hash(), a.hash());

    let other_nonce = create_genesis_block(1231006505, 1, 0x1d00ffff, 1, 128 * COIN);
    assert_eq!(other_nonce.header.merkle_root, a.header.merkle_root);
    assert_ne!(other_nonce.hash(), a.hash());
}

#[test]
fn genesis_custom_message_changes_merkle_root() {
    let a = dwarf_genesis();
    let b = create_genesis_block_with(
        "a different headline",
        &genesis_output_script(),
        1231006505,
        2084524493,
        0x1d00ffff,
        1,
        128 * COIN,
    );
    assert_ne!(a.header.merkle_root, b.header.merkle_root);
    assert!(GENESIS_MESSAGE.starts_with("The Times"));
}

#[test]
fn verify_genesis_checkpoint() {
    let g = dwarf_genesis();
    assert!(verify_genesis("dwarfchain", &g, None).is_ok());

    let good = GenesisCheckpoint {
        hash: g.hash(),
        merkle_root: g.header.merkle_root,
    };
    assert!(verify_genesis("dwarfchain", &g, Some(&good)).is_ok());

    let bad_hash = GenesisCheckpoint {
        hash: [0x11; 32],
        ..good
    };
    let err = verify_genesis("dwarfchain", &g, Some(&bad_hash)).unwrap_err();
    assert_eq!(err.code, ErrorCode::GenesisErrHashMismatch);

    let bad_root = GenesisCheckpoint {
        merkle_root: [0x22; 32],
        ..good
    };
    let err = verify_genesis("dwarfchain", &g, Some(&bad_root)).unwrap_err();
    assert_eq!(err.code, ErrorCode::GenesisErrMerkleMismatch);
}

const DWARF_GENESIS_BLOCK_HEX: &str = concat!(
    "0100000000000000000000000000000000000000000000000000000000000000",
    "000000007aa654aaa79b50bbf15d6e8a11e93571b66c2090da4ebbf901e0ff12",
    "016726b629ab5f49ffff001dcd513f7c01010000000100000000000000000000",
    "00000000000000000000000000000000000000000000ffffffff4d04ffff001d",
    "0104455468652054696d65732030332f4a616e2f32303039204368616e63656c",
    "6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f75742066",
    "6f722062616e6b73ffffffff010080f0fa02000000434104678afdb0fe554827",
    "1967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4",
    "f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac0000000000",
);

#[test]
fn dwarf_genesis_bytes_are_pinned() {
    let g = dwarf_genesis();
    assert_eq!(hex::encode(g.serialize()), DWARF_GENESIS_BLOCK_HEX);
    assert_eq!(
        hash_to_display_hex(&g.hash()),
        "620237b9714d7f67653236200e196c30bb68d8244ecd0a94c7f5acd351c065c5"
    );
    assert_eq!(
        hash_to_display_hex(&g.header.merkle_root),
        "b626670112ffe001f9bb4eda90206cb67135e9118a6e5df1bb509ba7aa54a67a"
    );

    let raw = hex::decode(DWARF_GENESIS_BLOCK_HEX).expect("hex");
    let parsed = Block::parse(&raw).expect("parse block");
    assert_eq!(parsed.txs[0].outputs[0].script_pubkey.asset, AssetType::Mith);
}

#[test]
fn block_serialization_parses_back() {
    let g = dwarf_genesis();
    let raw = g.serialize();
    let parsed = Block::parse(&raw).expect("parse block");
    assert_eq!(parsed, g);

    let header = parse_block_header_bytes(&raw[..BLOCK_HEADER_BYTES]).expect("header");
    assert_eq!(header, g.header);
}

#[test]
fn transaction_parse_rejects_truncation_and_trailing() {
    let g = dwarf_genesis();
    let raw = g.txs[0].serialize();

    let err = Transaction::parse(&raw[..raw.len() - 1]).unwrap_err();
    assert_eq!(err.code, ErrorCode::WireErrEof);

    let mut long = raw.clone();
    long.push(0x00);
    let err = Transaction::parse(&long).unwrap_err();
    assert_eq!(err.code, ErrorCode::WireErrTrailing);
}

#[test]
fn transaction_parse_rejects_absurd_counts() {
    // version, then CompactSize(0xffffffff) inputs with nothing behind it.
    let raw = [0x01, 0x00, 0x00, 0x00, 0xfe, 0xff, 0xff, 0xff, 0xff];
    let err = Transaction::parse(&raw).unwrap_err();
    assert_eq!(err.code, ErrorCode::WireErrEof);
}

#[test]
fn header_length_checked() {
    let err = parse_block_header_bytes(&[0u8; 79]).unwrap_err();
    assert_eq!(err.code, ErrorCode::WireErrEof);
}
