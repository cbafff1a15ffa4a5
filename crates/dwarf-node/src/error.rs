use thiserror::Error;

/// Operator configuration errors. Each one aborts startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainParamsError {
    #[error("-signetchallenge cannot be multiple values.")]
    SignetChallengeMultiple,

    #[error("-signetchallenge must be hex, not '{0}'.")]
    SignetChallengeNotHex(String),

    #[error("Invalid format ({0}) for -testactivationheight=name@height.")]
    ActivationHeightFormat(String),

    #[error("Invalid height value ({0}) for -testactivationheight=name@height.")]
    ActivationHeightValue(String),

    #[error("Invalid name ({0}) for -testactivationheight=name@height.")]
    ActivationHeightName(String),

    #[error("Version bits parameters malformed ({0}), expecting deployment:start:end[:min_activation_height]")]
    VbParamsMalformed(String),

    #[error("Invalid nStartTime ({0})")]
    VbParamsStartTime(String),

    #[error("Invalid nTimeout ({0})")]
    VbParamsTimeout(String),

    #[error("Invalid min_activation_height ({0})")]
    VbParamsMinActivationHeight(String),

    #[error("Invalid deployment ({0})")]
    VbParamsDeployment(String),

    #[error("Unknown chain {0}.")]
    UnknownChain(String),

    #[error("Invalid combination of -regtest, -signet, -testnet, -testnet4 and -chain. Can use at most one.")]
    ConflictingChains,
}

pub type Result<T> = std::result::Result<T, ChainParamsError>;
