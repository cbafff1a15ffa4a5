//! Per-network defaults that exist before consensus parameters are built.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::chaintype::ChainType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseChainParams {
    pub data_dir: &'static str,
    pub rpc_port: u16,
    pub onion_service_target_port: u16,
}

pub fn create_base_chain_params(chain: ChainType) -> BaseChainParams {
    match chain {
        ChainType::Main => BaseChainParams {
            data_dir: "",
            rpc_port: 8332,
            onion_service_target_port: 8334,
        },
        ChainType::Testnet => BaseChainParams {
            data_dir: "testnet3",
            rpc_port: 18332,
            onion_service_target_port: 18334,
        },
        ChainType::Testnet4 => BaseChainParams {
            data_dir: "testnet4",
            rpc_port: 48332,
            onion_service_target_port: 48334,
        },
        ChainType::Signet => BaseChainParams {
            data_dir: "signet",
            rpc_port: 38332,
            onion_service_target_port: 38334,
        },
        ChainType::Regtest => BaseChainParams {
            data_dir: "regtest",
            rpc_port: 18443,
            onion_service_target_port: 18445,
        },
    }
}

static GLOBAL_BASE_PARAMS: RwLock<Option<Arc<BaseChainParams>>> = parking_lot::const_rwlock(None);

pub fn select_base_params(chain: ChainType) {
    *GLOBAL_BASE_PARAMS.write() = Some(Arc::new(create_base_chain_params(chain)));
}

/// The selected base parameters.
///
/// # Panics
///
/// If called before [`select_base_params`].
pub fn base_params() -> Arc<BaseChainParams> {
    match GLOBAL_BASE_PARAMS.read().as_ref() {
        Some(p) => Arc::clone(p),
        None => panic!("base_params() called before select_base_params()"),
    }
}
