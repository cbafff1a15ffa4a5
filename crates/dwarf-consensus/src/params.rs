use std::collections::BTreeMap;

use crate::constants::{
    ARGON2ID_ITERATIONS, ARGON2ID_MEMORY_KIB, ARGON2ID_PARALLELISM, ASERT_HALF_LIFE,
    ASERT_TARGET_BLOCK_TIME, COINBASE_MATURITY, FINAL_BLOCK_REWARD, INITIAL_BLOCK_REWARD,
    REWARD_HALVING_INTERVAL, SECONDS_PER_DAY, SECONDS_PER_MINUTE,
};
use crate::deployments::{BuriedDeployment, DeploymentPos, MAX_VERSION_BITS_DEPLOYMENTS};

/// Signalling window for one version-bits deployment.
///
/// No ordering between `start_time` and `timeout` is enforced here; the
/// deployment state machine is responsible for interpreting the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionBitsDeployment {
    pub bit: u8,
    pub start_time: i64,
    pub timeout: i64,
    pub min_activation_height: i32,
}

impl VersionBitsDeployment {
    /// Start-time sentinel: active from genesis.
    pub const ALWAYS_ACTIVE: i64 = -1;
    /// Start-time sentinel: never signals.
    pub const NEVER_ACTIVE: i64 = -2;
    pub const NO_TIMEOUT: i64 = i64::MAX;

    pub const fn never(bit: u8) -> Self {
        Self {
            bit,
            start_time: Self::NEVER_ACTIVE,
            timeout: Self::NO_TIMEOUT,
            min_activation_height: 0,
        }
    }

    pub const fn always(bit: u8) -> Self {
        Self {
            bit,
            start_time: Self::ALWAYS_ACTIVE,
            timeout: Self::NO_TIMEOUT,
            min_activation_height: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusParams {
    pub hash_genesis_block: [u8; 32],

    // Reward schedule.
    pub initial_block_reward: i64,
    pub reward_halving_interval: u32,
    pub final_block_reward: i64,
    pub subsidy_halving_interval: u32,

    // Argon2id tuning.
    pub pow_memory_cost: u32,
    pub pow_parallelism: u32,
    pub pow_iterations: u32,

    // ASERT retargeting, in seconds.
    pub asert_target_block_time: i64,
    pub asert_half_life: i64,

    /// Big-endian 256-bit maximum target.
    pub pow_limit: [u8; 32],
    pub pow_target_timespan: i64,
    pub pow_target_spacing: i64,
    pub pow_allow_min_difficulty_blocks: bool,
    pub pow_no_retargeting: bool,
    pub enforce_bip94: bool,

    pub coinbase_maturity: u32,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,

    pub deployments: [VersionBitsDeployment; MAX_VERSION_BITS_DEPLOYMENTS],
    pub activation_heights: BTreeMap<BuriedDeployment, i32>,

    pub signet_blocks: bool,
    pub signet_challenge: Vec<u8>,
}

impl Default for ConsensusParams {
    fn default() -> Self {
        Self {
            hash_genesis_block: [0u8; 32],

            initial_block_reward: INITIAL_BLOCK_REWARD,
            reward_halving_interval: REWARD_HALVING_INTERVAL,
            final_block_reward: FINAL_BLOCK_REWARD,
            subsidy_halving_interval: REWARD_HALVING_INTERVAL,

            pow_memory_cost: ARGON2ID_MEMORY_KIB,
            pow_parallelism: ARGON2ID_PARALLELISM,
            pow_iterations: ARGON2ID_ITERATIONS,

            asert_target_block_time: ASERT_TARGET_BLOCK_TIME,
            asert_half_life: ASERT_HALF_LIFE,

            pow_limit: [0xff; 32],
            pow_target_timespan: SECONDS_PER_DAY,
            pow_target_spacing: 5 * SECONDS_PER_MINUTE,
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            enforce_bip94: false,

            coinbase_maturity: COINBASE_MATURITY,
            rule_change_activation_threshold: 273, // 95% of 288
            miner_confirmation_window: 288,

            deployments: [
                VersionBitsDeployment::never(28),
                VersionBitsDeployment::never(2),
                VersionBitsDeployment::never(3),
            ],
            activation_heights: BuriedDeployment::ALL.into_iter().map(|d| (d, 1)).collect(),

            signet_blocks: false,
            signet_challenge: Vec::new(),
        }
    }
}

impl ConsensusParams {
    /// Block reward at `height`: halves every `reward_halving_interval`
    /// blocks and never drops below `final_block_reward`.
    pub fn block_reward(&self, height: u32) -> i64 {
        if self.reward_halving_interval == 0 {
            return self.initial_block_reward;
        }
        let halvings = height / self.reward_halving_interval;
        if halvings >= 63 {
            return self.final_block_reward;
        }
        let reward = self.initial_block_reward >> halvings;
        reward.max(self.final_block_reward)
    }

    pub fn difficulty_adjustment_interval(&self) -> i64 {
        self.pow_target_timespan / self.pow_target_spacing
    }

    pub fn deployment(&self, pos: DeploymentPos) -> &VersionBitsDeployment {
        &self.deployments[pos.index()]
    }

    pub fn deployment_mut(&mut self, pos: DeploymentPos) -> &mut VersionBitsDeployment {
        &mut self.deployments[pos.index()]
    }

    /// Activation height of a buried deployment; `i32::MAX` when unset.
    pub fn deployment_height(&self, dep: BuriedDeployment) -> i32 {
        self.activation_heights.get(&dep).copied().unwrap_or(i32::MAX)
    }

    pub fn deployment_active_at(&self, dep: BuriedDeployment, height: i32) -> bool {
        height >= self.deployment_height(dep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COIN;

    #[test]
    fn defaults_hold_reward_and_pow_tuning() {
        let p = ConsensusParams::default();
        assert_eq!(p.initial_block_reward, 128 * COIN);
        assert_eq!(p.final_block_reward, 16 * COIN);
        assert_eq!(p.reward_halving_interval, 420_000);
        assert_eq!(p.pow_memory_cost, 1024 * 1024);
        assert_eq!(p.pow_parallelism, 1);
        assert_eq!(p.pow_iterations, 4000);
        assert_eq!(p.asert_target_block_time, 300);
        assert_eq!(p.asert_half_life, 288 * 3600);
        assert!(p.pow_memory_cost > 0 && p.pow_parallelism > 0 && p.pow_iterations > 0);
    }

    #[test]
    fn reward_steps_and_floor() {
        let p = ConsensusParams::default();
        assert_eq!(p.block_reward(0), 128 * COIN);
        assert_eq!(p.block_reward(419_999), 128 * COIN);
        assert_eq!(p.block_reward(420_000), 64 * COIN);
        assert_eq!(p.block_reward(840_000), 32 * COIN);
        assert_eq!(p.block_reward(1_260_000), 16 * COIN);
        assert_eq!(p.block_reward(1_680_000), 16 * COIN);
        assert_eq!(p.block_reward(u32::MAX), 16 * COIN);
    }

    #[test]
    fn reward_without_halving_interval_is_flat() {
        let p = ConsensusParams {
            reward_halving_interval: 0,
            ..ConsensusParams::default()
        };
        assert_eq!(p.block_reward(10_000_000), 128 * COIN);
    }

    #[test]
    fn adjustment_interval() {
        let p = ConsensusParams::default();
        assert_eq!(p.difficulty_adjustment_interval(), 288);
    }

    #[test]
    fn buried_heights_and_deployments() {
        let mut p = ConsensusParams::default();
        assert_eq!(p.deployment_height(BuriedDeployment::Segwit), 1);
        p.activation_heights.remove(&BuriedDeployment::Segwit);
        assert_eq!(p.deployment_height(BuriedDeployment::Segwit), i32::MAX);
        assert!(!p.deployment_active_at(BuriedDeployment::Segwit, 1_000_000));
        assert!(p.deployment_active_at(BuriedDeployment::Csv, 1));

        assert_eq!(
            p.deployment(DeploymentPos::RingBurn).start_time,
            VersionBitsDeployment::NEVER_ACTIVE
        );
        p.deployment_mut(DeploymentPos::RingBurn).start_time = 100;
        assert_eq!(p.deployments[2].start_time, 100);
    }
}
