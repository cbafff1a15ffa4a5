pub mod args;
pub mod chainparams;
pub mod chainparamsbase;
pub mod chaintype;
pub mod error;
pub mod overrides;
pub mod select;

pub use args::{has_test_option, ArgSource, ArgsManager};
pub use chainparams::{ChainParams, DWARFCHAIN_NETWORK_ID};
pub use chainparamsbase::{
    base_params, create_base_chain_params, select_base_params, BaseChainParams,
};
pub use chaintype::{chain_type_from_args, ChainType};
pub use error::{ChainParamsError, Result};
pub use overrides::{
    parse_test_activation_height, parse_vbparams, read_regtest_args, read_signet_args,
    RegTestOptions, SigNetOptions, VersionBitsParameters,
};
pub use select::{create_chain_params, params, select_params};

#[cfg(test)]
mod chainparams_tests;
