use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    WireErrEof,
    WireErrNonMinimal,
    WireErrOverflow,
    WireErrTrailing,

    GenesisErrHashMismatch,
    GenesisErrMerkleMismatch,
    GenesisErrBitsInvalid,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::WireErrEof => "WIRE_ERR_EOF",
            ErrorCode::WireErrNonMinimal => "WIRE_ERR_NON_MINIMAL",
            ErrorCode::WireErrOverflow => "WIRE_ERR_OVERFLOW",
            ErrorCode::WireErrTrailing => "WIRE_ERR_TRAILING",

            ErrorCode::GenesisErrHashMismatch => "GENESIS_ERR_HASH_MISMATCH",
            ErrorCode::GenesisErrMerkleMismatch => "GENESIS_ERR_MERKLE_MISMATCH",
            ErrorCode::GenesisErrBitsInvalid => "GENESIS_ERR_BITS_INVALID",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusError {
    pub code: ErrorCode,
    pub msg: &'static str,
}

impl ConsensusError {
    pub fn new(code: ErrorCode, msg: &'static str) -> Self {
        Self { code, msg }
    }
}

impl fmt::Display for ConsensusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.code.as_str())
        } else {
            write!(f, "{}: {}", self.code.as_str(), self.msg)
        }
    }
}

impl std::error::Error for ConsensusError {}
