/// Base units per whole coin, for both Mith and Ring amounts.
pub const COIN: i64 = 100_000_000;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

// Argon2id memory cost is expressed in KiB.
pub const ARGON2ID_MEMORY_KIB: u32 = 1024 * 1024;
pub const ARGON2ID_PARALLELISM: u32 = 1;
pub const ARGON2ID_ITERATIONS: u32 = 4000;

pub const INITIAL_BLOCK_REWARD: i64 = 128 * COIN;
pub const FINAL_BLOCK_REWARD: i64 = 16 * COIN;
pub const REWARD_HALVING_INTERVAL: u32 = 420_000;

pub const ASERT_TARGET_BLOCK_TIME: i64 = 5 * SECONDS_PER_MINUTE;
pub const ASERT_HALF_LIFE: i64 = 288 * SECONDS_PER_HOUR;

pub const COINBASE_MATURITY: u32 = 100;
