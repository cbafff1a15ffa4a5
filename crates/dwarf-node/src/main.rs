use std::collections::BTreeMap;

use dwarf_consensus::{hash_to_display_hex, AssetType, ConsensusParams, TaggedScript};
use dwarf_node::{chain_type_from_args, select_params, ArgsManager, ChainParams};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct DeploymentView {
    name: &'static str,
    bit: u8,
    start_time: i64,
    timeout: i64,
    min_activation_height: i32,
}

#[derive(Serialize)]
struct ConsensusView {
    genesis_hash: String,
    subsidy_halving_interval: u32,
    initial_block_reward: i64,
    reward_halving_interval: u32,
    final_block_reward: i64,
    pow_limit: String,
    pow_target_timespan: i64,
    pow_target_spacing: i64,
    pow_allow_min_difficulty_blocks: bool,
    pow_no_retargeting: bool,
    enforce_bip94: bool,
    rule_change_activation_threshold: u32,
    miner_confirmation_window: u32,
    activation_heights: BTreeMap<&'static str, i32>,
    deployments: Vec<DeploymentView>,
    signet_blocks: bool,
    signet_challenge: String,
}

#[derive(Serialize)]
struct ParamsView {
    chain: &'static str,
    network_id: String,
    mith_hrp: String,
    ring_hrp: String,
    ring_black_hole_address: String,
    default_port: u16,
    prune_after_height: u64,
    seeds: Vec<String>,
    is_test_chain: bool,
    consensus: ConsensusView,
}

impl ConsensusView {
    fn new(c: &ConsensusParams) -> Self {
        Self {
            genesis_hash: hash_to_display_hex(&c.hash_genesis_block),
            subsidy_halving_interval: c.subsidy_halving_interval,
            initial_block_reward: c.initial_block_reward,
            reward_halving_interval: c.reward_halving_interval,
            final_block_reward: c.final_block_reward,
            pow_limit: hex::encode(c.pow_limit),
            pow_target_timespan: c.pow_target_timespan,
            pow_target_spacing: c.pow_target_spacing,
            pow_allow_min_difficulty_blocks: c.pow_allow_min_difficulty_blocks,
            pow_no_retargeting: c.pow_no_retargeting,
            enforce_bip94: c.enforce_bip94,
            rule_change_activation_threshold: c.rule_change_activation_threshold,
            miner_confirmation_window: c.miner_confirmation_window,
            activation_heights: c
                .activation_heights
                .iter()
                .map(|(dep, h)| (dep.name(), *h))
                .collect(),
            deployments: dwarf_consensus::DeploymentPos::ALL
                .iter()
                .map(|pos| {
                    let d = c.deployment(*pos);
                    DeploymentView {
                        name: pos.name(),
                        bit: d.bit,
                        start_time: d.start_time,
                        timeout: d.timeout,
                        min_activation_height: d.min_activation_height,
                    }
                })
                .collect(),
            signet_blocks: c.signet_blocks,
            signet_challenge: hex::encode(&c.signet_challenge),
        }
    }
}

impl ParamsView {
    fn new(p: &ChainParams) -> Self {
        Self {
            chain: p.chain_type().as_str(),
            network_id: p.network_id().to_string(),
            mith_hrp: p.mith_hrp().to_string(),
            ring_hrp: p.ring_hrp().to_string(),
            ring_black_hole_address: p.ring_black_hole_address().to_string(),
            default_port: p.default_port(),
            prune_after_height: p.prune_after_height(),
            seeds: p.dns_seeds().to_vec(),
            is_test_chain: p.is_test_chain(),
            consensus: ConsensusView::new(p.consensus()),
        }
    }
}

fn get_flag(args: &[String], flag: &str) -> Result<Option<String>, String> {
    let mut i = 0;
    while i < args.len() {
        if args[i] == flag {
            if i + 1 >= args.len() {
                return Err(format!("missing value for {flag}"));
            }
            return Ok(Some(args[i + 1].clone()));
        }
        i += 1;
    }
    Ok(None)
}

fn required_flag(args: &[String], flag: &str) -> Result<String, i32> {
    match get_flag(args, flag) {
        Ok(Some(v)) => Ok(v),
        Ok(None) => {
            eprintln!("missing required flag: {flag}");
            Err(2)
        }
        Err(e) => {
            eprintln!("{e}");
            Err(2)
        }
    }
}

fn load_params(args: &[String]) -> Result<std::sync::Arc<ChainParams>, String> {
    let (manager, _) = ArgsManager::from_tokens(args);
    let chain = chain_type_from_args(&manager).map_err(|e| e.to_string())?;
    select_params(&manager, chain).map_err(|e| e.to_string())
}

fn cmd_params(args: &[String]) -> Result<(), String> {
    let params = load_params(args)?;
    let out = serde_json::to_string_pretty(&ParamsView::new(&params))
        .map_err(|e| format!("encode json: {e}"))?;
    println!("{out}");
    Ok(())
}

fn cmd_genesis(args: &[String]) -> Result<(), String> {
    let params = load_params(args)?;
    let genesis = params.genesis_block();
    println!("hash {}", hash_to_display_hex(&genesis.hash()));
    println!("merkle_root {}", hash_to_display_hex(&genesis.header.merkle_root));
    Ok(())
}

fn cmd_reward(args: &[String], height: &str) -> Result<(), String> {
    let height = height
        .parse::<u32>()
        .map_err(|e| format!("--height: {e}"))?;
    let params = load_params(args)?;
    println!("{}", params.consensus().block_reward(height));
    Ok(())
}

fn cmd_script_encode(script_hex: &str, asset: &str) -> Result<(), String> {
    let payload = hex::decode(script_hex).map_err(|e| format!("--script-hex: {e}"))?;
    let asset = asset.parse::<AssetType>()?;
    println!("{}", hex::encode(TaggedScript::new(payload, asset).encode()));
    Ok(())
}

fn cmd_script_decode(encoded_hex: &str) -> Result<(), String> {
    let bytes = hex::decode(encoded_hex).map_err(|e| format!("--encoded-hex: {e}"))?;
    let script = TaggedScript::decode(&bytes).map_err(|e| e.to_string())?;
    println!("script {}", hex::encode(&script.payload));
    println!("asset {}", script.asset);
    Ok(())
}

fn usage() {
    eprintln!("usage: dwarf-node <command> [args]");
    eprintln!("commands:");
    eprintln!("  params [-chain=<name>] [-signetchallenge=<hex>] [-testactivationheight=<name@height>] [-vbparams=<deployment:start:end[:min_activation_height]>]");
    eprintln!("  genesis [-chain=<name>]");
    eprintln!("  reward --height <u32> [-chain=<name>]");
    eprintln!("  script-encode --script-hex <hex> --asset <mith|ring|n>");
    eprintln!("  script-decode --encoded-hex <hex>");
}

fn report(label: &str, res: Result<(), String>) -> i32 {
    match res {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{label} error: {e}");
            1
        }
    }
}

fn dispatch(cmd: &str, args: &[String]) -> i32 {
    match cmd {
        "params" => report("params", cmd_params(args)),
        "genesis" => report("genesis", cmd_genesis(args)),
        "reward" => match required_flag(args, "--height") {
            Ok(h) => report("reward", cmd_reward(args, &h)),
            Err(code) => code,
        },
        "script-encode" => {
            let script_hex = match required_flag(args, "--script-hex") {
                Ok(v) => v,
                Err(code) => return code,
            };
            let asset = match get_flag(args, "--asset") {
                Ok(v) => v.unwrap_or_else(|| "mith".to_string()),
                Err(e) => {
                    eprintln!("{e}");
                    return 2;
                }
            };
            report("script-encode", cmd_script_encode(&script_hex, &asset))
        }
        "script-decode" => match required_flag(args, "--encoded-hex") {
            Ok(v) => report("script-decode", cmd_script_decode(&v)),
            Err(code) => code,
        },
        _ => {
            eprintln!("unknown command: {cmd}");
            2
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.is_empty() {
        usage();
        std::process::exit(2);
    }
    let cmd = args.remove(0);
    let exit_code = dispatch(&cmd, &args);
    if exit_code != 0 {
        if exit_code == 2 {
            usage();
        }
        std::process::exit(exit_code);
    }
}
