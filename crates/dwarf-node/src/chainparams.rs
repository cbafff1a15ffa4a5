//! Per-network parameter sets.
//!
//! Each factory builds an owned, immutable `ChainParams`. Factories do not
//! return errors: operator input is validated by the readers in
//! [`crate::overrides`] before it reaches them, and anything else that can go
//! wrong here is a defect in the constants.

use std::collections::BTreeMap;

use dwarf_consensus::script::OP_CHECKSIG;
use dwarf_consensus::{
    check_genesis_bits, create_genesis_block, create_genesis_block_with, hash_to_display_hex,
    hex_array, pow_limit_from_hex, verify_genesis, Block, BuriedDeployment, ConsensusParams,
    DeploymentPos, GenesisCheckpoint, ScriptBuilder, VersionBitsDeployment, COIN,
};
use tracing::info;

use crate::chaintype::ChainType;
use crate::overrides::{RegTestOptions, SigNetOptions};

pub const DWARFCHAIN_NETWORK_ID: &str = "dwarfchain";

const POW_LIMIT_MAIN: [u8; 32] =
    pow_limit_from_hex("00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
const POW_LIMIT_SIGNET: [u8; 32] =
    pow_limit_from_hex("00000377ae000000000000000000000000000000000000000000000000000000");
const POW_LIMIT_REGTEST: [u8; 32] =
    pow_limit_from_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");

const RING_BLACK_HOLE_MAIN: &str = "rng1pxxxxxxxxxxxxxxxxxx8gf2tvdw0s3jn54khce6mua7lyk9p3z";
const RING_BLACK_HOLE_TEST: &str = "trng1pxxxxxxxxxxxxxxxxxxx4k0qv8yd3nlrs5t2ay9fm6wj7e0cz";
const RING_BLACK_HOLE_SIGNET: &str = "srng1pxxxxxxxxxxxxxxxxxxx9v3hq2k7dl0fw5rz8ne6ty4cmj3xs";
const RING_BLACK_HOLE_REGTEST: &str = "rrng1pxxxxxxxxxxxxxxxxxxx2m8dj5wq0sk7fy3hv6lr9nc4ta0ge";

const DEFAULT_SIGNET_CHALLENGE: [u8; 71] = hex_array(
    "512103ad5e0edad18cb1f0fc0d28a3d4f1f3e445640337489abb10404f2d1e086be430210359ef5021964fe22d6f8e05b2463c9540ce96883fe3b278760f048f5189f2e6c452ae",
);

const TESTNET4_GENESIS_MESSAGE: &str =
    "03/May/2024 000000000000000000001ebd58c244970b3aa9d783bb001011fbe8ea8e98e00e";

/// Inputs from which a network's genesis block is derived.
#[derive(Clone, Copy, Debug)]
struct GenesisInputs {
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainParams {
    chain_type: ChainType,
    network_id: &'static str,
    consensus: ConsensusParams,
    genesis: Block,
    mith_hrp: &'static str,
    ring_hrp: &'static str,
    ring_black_hole_address: &'static str,
    default_port: u16,
    prune_after_height: u64,
    seeds: Vec<String>,
    fast_prune: bool,
}

impl ChainParams {
    pub fn chain_type(&self) -> ChainType {
        self.chain_type
    }

    pub fn network_id(&self) -> &str {
        self.network_id
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> [u8; 32] {
        self.consensus.hash_genesis_block
    }

    /// Bech32 human-readable prefix for Mith addresses.
    pub fn mith_hrp(&self) -> &str {
        self.mith_hrp
    }

    /// Bech32m human-readable prefix for Ring addresses.
    pub fn ring_hrp(&self) -> &str {
        self.ring_hrp
    }

    /// Unspendable Ring address that burned value is sent to.
    pub fn ring_black_hole_address(&self) -> &str {
        self.ring_black_hole_address
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    pub fn dns_seeds(&self) -> &[String] {
        &self.seeds
    }

    pub fn fast_prune(&self) -> bool {
        self.fast_prune
    }

    pub fn is_test_chain(&self) -> bool {
        self.chain_type != ChainType::Main
    }

    pub fn is_mockable_chain(&self) -> bool {
        self.chain_type == ChainType::Regtest
    }

    /// Dwarfchain's own network; the chain selected for `ChainType::Main`.
    pub fn dwarfchain() -> Self {
        let mut consensus = ConsensusParams {
            subsidy_halving_interval: 420_000,
            initial_block_reward: 128 * COIN,
            reward_halving_interval: 420_000,
            final_block_reward: 16 * COIN,
            pow_limit: POW_LIMIT_MAIN,
            pow_target_timespan: 24 * 60 * 60,
            pow_target_spacing: 5 * 60,
            coinbase_maturity: 100,
            pow_allow_min_difficulty_blocks: false,
            miner_confirmation_window: 288,
            rule_change_activation_threshold: 273,
            ..ConsensusParams::default()
        };
        *consensus.deployment_mut(DeploymentPos::Taproot) = VersionBitsDeployment::always(2);

        Self::assemble(
            ChainType::Main,
            DWARFCHAIN_NETWORK_ID,
            consensus,
            create_genesis(
                GenesisInputs {
                    time: 1231006505,
                    nonce: 2084524493,
                    bits: 0x1d00ffff,
                    version: 1,
                    reward: 128 * COIN,
                },
                None,
            ),
            None,
            AddressSet {
                mith_hrp: "mthq",
                ring_hrp: "rngp",
                ring_black_hole_address: RING_BLACK_HOLE_MAIN,
            },
            8333,
            100_000,
            vec!["seed.dwarfchain.org".to_string()],
        )
    }

    /// The inherited main network, kept for tooling that compares against it.
    pub fn main() -> Self {
        let mut consensus = ConsensusParams {
            subsidy_halving_interval: 210_000,
            initial_block_reward: 50 * COIN,
            reward_halving_interval: 210_000,
            final_block_reward: 0,
            pow_limit: POW_LIMIT_MAIN,
            pow_target_timespan: 14 * 24 * 60 * 60,
            pow_target_spacing: 10 * 60,
            pow_allow_min_difficulty_blocks: false,
            rule_change_activation_threshold: 1815,
            miner_confirmation_window: 2016,
            activation_heights: buried_heights(227_931, 388_381, 363_725, 419_328, 481_824),
            ..ConsensusParams::default()
        };
        *consensus.deployment_mut(DeploymentPos::Taproot) = VersionBitsDeployment {
            bit: 2,
            start_time: 1_619_222_400,
            timeout: 1_628_640_000,
            min_activation_height: 709_632,
        };

        Self::assemble(
            ChainType::Main,
            "main",
            consensus,
            create_genesis(
                GenesisInputs {
                    time: 1231006505,
                    nonce: 2084524493,
                    bits: 0x1d00ffff,
                    version: 1,
                    reward: 50 * COIN,
                },
                None,
            ),
            None,
            AddressSet {
                mith_hrp: "mth",
                ring_hrp: "rng",
                ring_black_hole_address: RING_BLACK_HOLE_MAIN,
            },
            8333,
            100_000,
            vec!["seed.dwarfchain.org".to_string()],
        )
    }

    pub fn testnet() -> Self {
        let mut consensus = ConsensusParams {
            subsidy_halving_interval: 210_000,
            initial_block_reward: 50 * COIN,
            reward_halving_interval: 210_000,
            final_block_reward: 0,
            pow_limit: POW_LIMIT_MAIN,
            pow_target_timespan: 14 * 24 * 60 * 60,
            pow_target_spacing: 10 * 60,
            pow_allow_min_difficulty_blocks: true,
            rule_change_activation_threshold: 1512,
            miner_confirmation_window: 2016,
            activation_heights: buried_heights(21_111, 581_885, 330_776, 770_112, 834_624),
            ..ConsensusParams::default()
        };
        *consensus.deployment_mut(DeploymentPos::Taproot) = VersionBitsDeployment {
            bit: 2,
            start_time: 1_619_222_400,
            timeout: 1_628_640_000,
            min_activation_height: 0,
        };

        Self::assemble(
            ChainType::Testnet,
            "test",
            consensus,
            create_genesis(
                GenesisInputs {
                    time: 1296688602,
                    nonce: 414098458,
                    bits: 0x1d00ffff,
                    version: 1,
                    reward: 50 * COIN,
                },
                None,
            ),
            None,
            AddressSet {
                mith_hrp: "tmth",
                ring_hrp: "trng",
                ring_black_hole_address: RING_BLACK_HOLE_TEST,
            },
            18333,
            1000,
            vec!["testnet-seed.dwarfchain.org".to_string()],
        )
    }

    pub fn testnet4() -> Self {
        let mut consensus = ConsensusParams {
            subsidy_halving_interval: 210_000,
            initial_block_reward: 50 * COIN,
            reward_halving_interval: 210_000,
            final_block_reward: 0,
            pow_limit: POW_LIMIT_MAIN,
            pow_target_timespan: 14 * 24 * 60 * 60,
            pow_target_spacing: 10 * 60,
            pow_allow_min_difficulty_blocks: true,
            enforce_bip94: true,
            rule_change_activation_threshold: 1512,
            miner_confirmation_window: 2016,
            ..ConsensusParams::default()
        };
        *consensus.deployment_mut(DeploymentPos::Taproot) = VersionBitsDeployment::always(2);

        let output_script = ScriptBuilder::new()
            .push_slice(&[0u8; 33])
            .push_opcode(OP_CHECKSIG)
            .into_bytes();

        Self::assemble(
            ChainType::Testnet4,
            "testnet4",
            consensus,
            create_genesis(
                GenesisInputs {
                    time: 1714777860,
                    nonce: 393743547,
                    bits: 0x1d00ffff,
                    version: 1,
                    reward: 50 * COIN,
                },
                Some((TESTNET4_GENESIS_MESSAGE, output_script.as_slice())),
            ),
            None,
            AddressSet {
                mith_hrp: "tmth",
                ring_hrp: "trng",
                ring_black_hole_address: RING_BLACK_HOLE_TEST,
            },
            48333,
            1000,
            vec!["seed.testnet4.dwarfchain.org".to_string()],
        )
    }

    pub fn signet(options: &SigNetOptions) -> Self {
        let (challenge, mut seeds) = match &options.challenge {
            Some(c) => {
                info!(challenge = %hex::encode(c), "Signet with custom challenge");
                (c.clone(), Vec::new())
            }
            None => (
                DEFAULT_SIGNET_CHALLENGE.to_vec(),
                vec!["seed.signet.dwarfchain.org".to_string()],
            ),
        };
        if let Some(s) = &options.seeds {
            seeds = s.clone();
        }

        let mut consensus = ConsensusParams {
            signet_blocks: true,
            signet_challenge: challenge,
            subsidy_halving_interval: 210_000,
            initial_block_reward: 50 * COIN,
            reward_halving_interval: 210_000,
            final_block_reward: 0,
            pow_limit: POW_LIMIT_SIGNET,
            pow_target_timespan: 14 * 24 * 60 * 60,
            pow_target_spacing: 10 * 60,
            pow_allow_min_difficulty_blocks: false,
            rule_change_activation_threshold: 1815,
            miner_confirmation_window: 2016,
            ..ConsensusParams::default()
        };
        *consensus.deployment_mut(DeploymentPos::Taproot) = VersionBitsDeployment::always(2);

        Self::assemble(
            ChainType::Signet,
            "signet",
            consensus,
            create_genesis(
                GenesisInputs {
                    time: 1598918400,
                    nonce: 52613770,
                    bits: 0x1e0377ae,
                    version: 1,
                    reward: 50 * COIN,
                },
                None,
            ),
            None,
            AddressSet {
                mith_hrp: "smth",
                ring_hrp: "srng",
                ring_black_hole_address: RING_BLACK_HOLE_SIGNET,
            },
            38333,
            1000,
            seeds,
        )
    }

    pub fn regtest(options: &RegTestOptions) -> Self {
        let mut consensus = ConsensusParams {
            subsidy_halving_interval: 150,
            initial_block_reward: 50 * COIN,
            reward_halving_interval: 150,
            final_block_reward: 0,
            pow_limit: POW_LIMIT_REGTEST,
            pow_target_timespan: 24 * 60 * 60,
            pow_target_spacing: 10 * 60,
            pow_allow_min_difficulty_blocks: true,
            pow_no_retargeting: true,
            enforce_bip94: options.enforce_bip94,
            rule_change_activation_threshold: 108,
            miner_confirmation_window: 144,
            activation_heights: buried_heights(1, 1, 1, 1, 0),
            ..ConsensusParams::default()
        };
        *consensus.deployment_mut(DeploymentPos::TestDummy) = VersionBitsDeployment {
            bit: 28,
            start_time: 0,
            timeout: VersionBitsDeployment::NO_TIMEOUT,
            min_activation_height: 0,
        };
        *consensus.deployment_mut(DeploymentPos::Taproot) = VersionBitsDeployment::always(2);
        *consensus.deployment_mut(DeploymentPos::RingBurn) = VersionBitsDeployment {
            bit: 3,
            start_time: 0,
            timeout: VersionBitsDeployment::NO_TIMEOUT,
            min_activation_height: 0,
        };

        for (dep, height) in &options.activation_heights {
            consensus.activation_heights.insert(*dep, *height);
        }
        for (pos, vb) in &options.version_bits_parameters {
            let d = consensus.deployment_mut(*pos);
            d.start_time = vb.start_time;
            d.timeout = vb.timeout;
            d.min_activation_height = vb.min_activation_height;
        }

        let mut params = Self::assemble(
            ChainType::Regtest,
            "regtest",
            consensus,
            create_genesis(
                GenesisInputs {
                    time: 1296688602,
                    nonce: 2,
                    bits: 0x207fffff,
                    version: 1,
                    reward: 50 * COIN,
                },
                None,
            ),
            None,
            AddressSet {
                mith_hrp: "rmth",
                ring_hrp: "rrng",
                ring_black_hole_address: RING_BLACK_HOLE_REGTEST,
            },
            18444,
            if options.fastprune { 100 } else { 1000 },
            Vec::new(),
        );
        params.fast_prune = options.fastprune;
        params
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        chain_type: ChainType,
        network_id: &'static str,
        mut consensus: ConsensusParams,
        genesis: Block,
        checkpoint: Option<GenesisCheckpoint>,
        addresses: AddressSet,
        default_port: u16,
        prune_after_height: u64,
        seeds: Vec<String>,
    ) -> Self {
        assert!(!addresses.mith_hrp.is_empty(), "{network_id}: empty Mith prefix");
        assert!(!addresses.ring_hrp.is_empty(), "{network_id}: empty Ring prefix");
        assert!(
            !addresses.ring_black_hole_address.is_empty(),
            "{network_id}: empty Ring black hole address"
        );
        if let Err(e) = check_genesis_bits(genesis.header.bits, &consensus.pow_limit) {
            panic!("{network_id}: {e}");
        }
        if let Err(e) = verify_genesis(network_id, &genesis, checkpoint.as_ref()) {
            panic!(
                "{network_id}: {e} (derived {})",
                hash_to_display_hex(&genesis.hash())
            );
        }

        consensus.hash_genesis_block = genesis.hash();
        Self {
            chain_type,
            network_id,
            consensus,
            genesis,
            mith_hrp: addresses.mith_hrp,
            ring_hrp: addresses.ring_hrp,
            ring_black_hole_address: addresses.ring_black_hole_address,
            default_port,
            prune_after_height,
            seeds,
            fast_prune: false,
        }
    }
}

struct AddressSet {
    mith_hrp: &'static str,
    ring_hrp: &'static str,
    ring_black_hole_address: &'static str,
}

fn create_genesis(inputs: GenesisInputs, custom: Option<(&str, &[u8])>) -> Block {
    match custom {
        Some((message, output_script)) => create_genesis_block_with(
            message,
            output_script,
            inputs.time,
            inputs.nonce,
            inputs.bits,
            inputs.version,
            inputs.reward,
        ),
        None => create_genesis_block(
            inputs.time,
            inputs.nonce,
            inputs.bits,
            inputs.version,
            inputs.reward,
        ),
    }
}

fn buried_heights(
    bip34: i32,
    cltv: i32,
    dersig: i32,
    csv: i32,
    segwit: i32,
) -> BTreeMap<BuriedDeployment, i32> {
    BTreeMap::from([
        (BuriedDeployment::HeightInCoinbase, bip34),
        (BuriedDeployment::Cltv, cltv),
        (BuriedDeployment::DerSig, dersig),
        (BuriedDeployment::Csv, csv),
        (BuriedDeployment::Segwit, segwit),
    ])
}
