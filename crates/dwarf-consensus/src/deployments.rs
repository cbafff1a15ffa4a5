//! Soft-fork deployment identifiers.
//!
//! Both tables are closed enums; `name()` is an exhaustive match so adding a
//! variant without a name does not compile, and `ALL` fixes the slot order
//! used for name lookup and for the per-slot parameter arrays.

use core::fmt;

/// Deployments activated at a fixed height, without signalling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuriedDeployment {
    HeightInCoinbase,
    Cltv,
    DerSig,
    Csv,
    Segwit,
}

impl BuriedDeployment {
    pub const ALL: [BuriedDeployment; 5] = [
        BuriedDeployment::HeightInCoinbase,
        BuriedDeployment::Cltv,
        BuriedDeployment::DerSig,
        BuriedDeployment::Csv,
        BuriedDeployment::Segwit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuriedDeployment::HeightInCoinbase => "bip34",
            BuriedDeployment::Cltv => "cltv",
            BuriedDeployment::DerSig => "dersig",
            BuriedDeployment::Csv => "csv",
            BuriedDeployment::Segwit => "segwit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for BuriedDeployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Version-bits deployment slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeploymentPos {
    TestDummy,
    Taproot,
    RingBurn,
}

pub const MAX_VERSION_BITS_DEPLOYMENTS: usize = DeploymentPos::ALL.len();

impl DeploymentPos {
    pub const ALL: [DeploymentPos; 3] = [
        DeploymentPos::TestDummy,
        DeploymentPos::Taproot,
        DeploymentPos::RingBurn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DeploymentPos::TestDummy => "testdummy",
            DeploymentPos::Taproot => "taproot",
            DeploymentPos::RingBurn => "ringburn",
        }
    }

    pub fn index(self) -> usize {
        match self {
            DeploymentPos::TestDummy => 0,
            DeploymentPos::Taproot => 1,
            DeploymentPos::RingBurn => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for DeploymentPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
