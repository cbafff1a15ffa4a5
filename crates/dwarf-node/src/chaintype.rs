use std::fmt;
use std::str::FromStr;

use crate::args::ArgSource;
use crate::error::ChainParamsError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChainType {
    Main,
    Testnet,
    Testnet4,
    Signet,
    Regtest,
}

impl ChainType {
    pub const ALL: [ChainType; 5] = [
        ChainType::Main,
        ChainType::Testnet,
        ChainType::Testnet4,
        ChainType::Signet,
        ChainType::Regtest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChainType::Main => "main",
            ChainType::Testnet => "test",
            ChainType::Testnet4 => "testnet4",
            ChainType::Signet => "signet",
            ChainType::Regtest => "regtest",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ChainParamsError::UnknownChain(s.to_string()))
    }
}

/// Resolves the chain from `-chain=<name>` or one of the legacy
/// `-testnet`, `-testnet4`, `-signet`, `-regtest` flags. Defaults to main.
pub fn chain_type_from_args(args: &dyn ArgSource) -> Result<ChainType, ChainParamsError> {
    let mut picked: Vec<ChainType> = Vec::new();
    for (flag, chain) in [
        ("-testnet", ChainType::Testnet),
        ("-testnet4", ChainType::Testnet4),
        ("-signet", ChainType::Signet),
        ("-regtest", ChainType::Regtest),
    ] {
        if args.get_bool_arg(flag).unwrap_or(false) {
            picked.push(chain);
        }
    }

    let chain_args = args.get_args("-chain");
    if let Some(last) = chain_args.last() {
        picked.push(last.parse()?);
    }

    match picked.as_slice() {
        [] => Ok(ChainType::Main),
        [one] => Ok(*one),
        _ => Err(ChainParamsError::ConflictingChains),
    }
}
