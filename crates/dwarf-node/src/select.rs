//! Building and publishing the active parameter set.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::args::ArgSource;
use crate::chainparams::ChainParams;
use crate::chainparamsbase::select_base_params;
use crate::chaintype::ChainType;
use crate::error::Result;
use crate::overrides::{read_regtest_args, read_signet_args};

/// Builds the parameter set for `chain`, applying operator overrides for
/// the networks that accept them.
///
/// Consumers that take the handle at construction time never need the
/// process-wide binding.
pub fn create_chain_params(args: &dyn ArgSource, chain: ChainType) -> Result<Arc<ChainParams>> {
    let params = match chain {
        ChainType::Main => ChainParams::dwarfchain(),
        ChainType::Testnet => ChainParams::testnet(),
        ChainType::Testnet4 => ChainParams::testnet4(),
        ChainType::Signet => ChainParams::signet(&read_signet_args(args)?),
        ChainType::Regtest => ChainParams::regtest(&read_regtest_args(args)?),
    };
    Ok(Arc::new(params))
}

static GLOBAL_CHAIN_PARAMS: RwLock<Option<Arc<ChainParams>>> = parking_lot::const_rwlock(None);

/// Selects base and chain parameters for `chain` and publishes them.
///
/// Meant to run once during startup. Calling it again replaces the
/// published set; nothing is published if the overrides are invalid.
pub fn select_params(args: &dyn ArgSource, chain: ChainType) -> Result<Arc<ChainParams>> {
    let params = create_chain_params(args, chain)?;
    select_base_params(chain);
    *GLOBAL_CHAIN_PARAMS.write() = Some(Arc::clone(&params));
    info!(
        chain = %chain,
        network = params.network_id(),
        "selected chain parameters"
    );
    Ok(params)
}

/// The published parameter set.
///
/// # Panics
///
/// If called before [`select_params`].
pub fn params() -> Arc<ChainParams> {
    match GLOBAL_CHAIN_PARAMS.read().as_ref() {
        Some(p) => Arc::clone(p),
        None => panic!("params() called before select_params()"),
    }
}
