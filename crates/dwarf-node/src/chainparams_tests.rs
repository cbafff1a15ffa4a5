use std::collections::BTreeMap;

use dwarf_consensus::{
    hash_to_display_hex, AssetType, BuriedDeployment, DeploymentPos, TaggedScript,
    VersionBitsDeployment, COIN,
};

use crate::args::ArgsManager;
use crate::chainparams::{ChainParams, DWARFCHAIN_NETWORK_ID};
use crate::chaintype::ChainType;
use crate::overrides::{RegTestOptions, SigNetOptions, VersionBitsParameters};
use crate::select::create_chain_params;

fn all_networks() -> Vec<ChainParams> {
    vec![
        ChainParams::dwarfchain(),
        ChainParams::main(),
        ChainParams::testnet(),
        ChainParams::testnet4(),
        ChainParams::signet(&SigNetOptions::default()),
        ChainParams::regtest(&RegTestOptions::default()),
    ]
}

#[test]
fn every_network_has_address_prefixes() {
    for p in all_networks() {
        assert!(!p.mith_hrp().is_empty(), "{}", p.network_id());
        assert!(!p.ring_hrp().is_empty(), "{}", p.network_id());
        assert!(!p.ring_black_hole_address().is_empty(), "{}", p.network_id());
    }
}

#[test]
fn genesis_hash_is_recorded_in_consensus() {
    for p in all_networks() {
        assert_eq!(p.consensus().hash_genesis_block, p.genesis_block().hash());
        assert_eq!(
            p.genesis_block().header.merkle_root,
            p.genesis_block().compute_merkle_root()
        );
    }
}

#[test]
fn genesis_is_deterministic() {
    let a = ChainParams::dwarfchain();
    let b = ChainParams::dwarfchain();
    assert_eq!(a.genesis_hash(), b.genesis_hash());
    assert_eq!(a, b);
}

#[test]
fn genesis_vectors_are_pinned() {
    let cases = [
        (
            ChainParams::dwarfchain(),
            "620237b9714d7f67653236200e196c30bb68d8244ecd0a94c7f5acd351c065c5",
            "b626670112ffe001f9bb4eda90206cb67135e9118a6e5df1bb509ba7aa54a67a",
        ),
        (
            ChainParams::testnet4(),
            "85511fb39358ce1c2ff682933f624eaf79e0e03e08f51f7b2062032ba65cb8f0",
            "3daf2ee3589fb517b1f68efbc4ace76e47310b7caaaf1fb75554250264207202",
        ),
        (
            ChainParams::regtest(&RegTestOptions::default()),
            "f1b3c3dcbbb7abbce2b5054fdf4c8d7429be8cc99e5289c74ee85f4cb644a92e",
            "509063d1580636225e73f65d82c87bfd5c2d20b76986e1745d31cb396e1e2115",
        ),
    ];
    for (p, hash, merkle_root) in cases {
        assert_eq!(hash_to_display_hex(&p.genesis_hash()), hash, "{}", p.network_id());
        assert_eq!(
            hash_to_display_hex(&p.genesis_block().header.merkle_root),
            merkle_root,
            "{}",
            p.network_id()
        );
    }
}

#[test]
fn genesis_hashes_differ_between_networks() {
    let main = ChainParams::dwarfchain();
    let legacy = ChainParams::main();
    let regtest = ChainParams::regtest(&RegTestOptions::default());
    assert_ne!(main.genesis_hash(), legacy.genesis_hash());
    assert_ne!(legacy.genesis_hash(), regtest.genesis_hash());
}

#[test]
fn dwarfchain_genesis_pays_mith() {
    let p = ChainParams::dwarfchain();
    let coinbase = &p.genesis_block().txs[0];
    assert!(coinbase.is_coinbase());
    assert_eq!(coinbase.outputs.len(), 1);
    assert_eq!(coinbase.outputs[0].value, 128 * COIN);
    assert_eq!(coinbase.outputs[0].script_pubkey.asset, AssetType::Mith);
    assert_eq!(p.consensus().block_reward(0), 128 * COIN);
}

#[test]
fn dwarfchain_identity() {
    let p = ChainParams::dwarfchain();
    assert_eq!(p.network_id(), DWARFCHAIN_NETWORK_ID);
    assert_eq!(p.chain_type(), ChainType::Main);
    assert_eq!(p.mith_hrp(), "mthq");
    assert_eq!(p.ring_hrp(), "rngp");
    // The burn address predates the "rngp" prefix and keeps its "rng1p" form.
    assert_eq!(
        p.ring_black_hole_address(),
        "rng1pxxxxxxxxxxxxxxxxxx8gf2tvdw0s3jn54khce6mua7lyk9p3z"
    );
    assert!(!p.is_test_chain());
    assert!(!p.is_mockable_chain());
    assert_eq!(p.consensus().pow_target_spacing, 300);
    assert_eq!(p.consensus().difficulty_adjustment_interval(), 288);
}

#[test]
fn legacy_main_keeps_bitcoin_heights() {
    let p = ChainParams::main();
    assert_eq!(p.network_id(), "main");
    let c = p.consensus();
    assert_eq!(c.deployment_height(BuriedDeployment::HeightInCoinbase), 227_931);
    assert_eq!(c.deployment_height(BuriedDeployment::Segwit), 481_824);
    assert_eq!(c.difficulty_adjustment_interval(), 2016);
    assert_eq!(c.block_reward(0), 50 * COIN);
    assert_eq!(c.deployment(DeploymentPos::Taproot).min_activation_height, 709_632);
}

#[test]
fn testnet4_uses_its_own_coinbase() {
    let p = ChainParams::testnet4();
    assert!(p.consensus().enforce_bip94);
    let coinbase = &p.genesis_block().txs[0];
    let script_sig = &coinbase.inputs[0].script_sig;
    let msg = b"03/May/2024";
    assert!(script_sig.windows(msg.len()).any(|w| w == msg));
    let payload = &coinbase.outputs[0].script_pubkey.payload;
    assert_eq!(payload.len(), 35);
    assert_eq!(payload[0], 33);
    assert!(payload[1..34].iter().all(|b| *b == 0));
}

#[test]
fn signet_default_challenge_and_seeds() {
    let p = ChainParams::signet(&SigNetOptions::default());
    assert!(p.consensus().signet_blocks);
    assert_eq!(p.consensus().signet_challenge.len(), 71);
    assert_eq!(p.consensus().signet_challenge[0], 0x51);
    assert!(!p.dns_seeds().is_empty());
}

#[test]
fn signet_custom_challenge_drops_default_seeds() {
    let p = ChainParams::signet(&SigNetOptions {
        challenge: Some(vec![0x51]),
        seeds: None,
    });
    assert_eq!(p.consensus().signet_challenge, vec![0x51]);
    assert!(p.dns_seeds().is_empty());

    let p = ChainParams::signet(&SigNetOptions {
        challenge: Some(vec![0x51]),
        seeds: Some(vec!["127.0.0.1:38333".to_string()]),
    });
    assert_eq!(p.dns_seeds(), ["127.0.0.1:38333".to_string()]);
}

#[test]
fn regtest_defaults() {
    let p = ChainParams::regtest(&RegTestOptions::default());
    assert!(p.is_mockable_chain());
    assert!(p.is_test_chain());
    let c = p.consensus();
    assert!(c.pow_no_retargeting);
    assert_eq!(c.deployment_height(BuriedDeployment::Segwit), 0);
    assert_eq!(c.block_reward(150), 25 * COIN);
    assert_eq!(p.prune_after_height(), 1000);
    assert!(!p.fast_prune());
}

#[test]
fn regtest_applies_overrides() {
    let options = RegTestOptions {
        version_bits_parameters: BTreeMap::from([(
            DeploymentPos::RingBurn,
            VersionBitsParameters {
                start_time: 100,
                timeout: 200,
                min_activation_height: 5,
            },
        )]),
        activation_heights: BTreeMap::from([(BuriedDeployment::Segwit, 500_000)]),
        fastprune: true,
        enforce_bip94: true,
    };
    let p = ChainParams::regtest(&options);
    let c = p.consensus();
    assert_eq!(c.deployment_height(BuriedDeployment::Segwit), 500_000);
    assert_eq!(c.deployment_height(BuriedDeployment::Csv), 1);
    let rb = c.deployment(DeploymentPos::RingBurn);
    assert_eq!((rb.start_time, rb.timeout, rb.min_activation_height), (100, 200, 5));
    assert_eq!(rb.bit, 3);
    assert_eq!(
        *c.deployment(DeploymentPos::Taproot),
        VersionBitsDeployment::always(2)
    );
    assert!(c.enforce_bip94);
    assert!(p.fast_prune());
    assert_eq!(p.prune_after_height(), 100);
}

#[test]
fn create_chain_params_reads_regtest_overrides() {
    let args = ArgsManager::new()
        .with("-vbparams", "ringburn:100:200:5")
        .with("-testactivationheight", "segwit@500000");
    let p = create_chain_params(&args, ChainType::Regtest).expect("valid overrides");
    let rb = p.consensus().deployment(DeploymentPos::RingBurn);
    assert_eq!((rb.start_time, rb.timeout, rb.min_activation_height), (100, 200, 5));
    assert_eq!(
        p.consensus().deployment_height(BuriedDeployment::Segwit),
        500_000
    );
}

#[test]
fn create_chain_params_rejects_bad_overrides() {
    let args = ArgsManager::new().with("-vbparams", "ringburn:100");
    assert!(create_chain_params(&args, ChainType::Regtest).is_err());

    let args = ArgsManager::new().with("-signetchallenge", "zz");
    assert!(create_chain_params(&args, ChainType::Signet).is_err());
}

#[test]
fn overrides_are_ignored_outside_test_networks() {
    let args = ArgsManager::new().with("-vbparams", "not-even-parsed");
    let p = create_chain_params(&args, ChainType::Main).expect("main ignores overrides");
    assert_eq!(p.network_id(), DWARFCHAIN_NETWORK_ID);
}

#[test]
fn genesis_outputs_are_tagged() {
    let p = ChainParams::dwarfchain();
    let out = &p.genesis_block().txs[0].outputs[0].script_pubkey;
    let encoded = out.encode();
    assert_eq!(encoded.last(), Some(&0u8));
    assert_eq!(TaggedScript::decode(&encoded).expect("decode"), *out);
}
