//! Engine constants. Token amounts are in GTT, prices in USD.
//!
//! Per-tier values (APY, multipliers, stake thresholds, prices, limits) are
//! deliberately absent here: they live only in [`TierTable`](crate::TierTable).

/// Base GTT reward for creating one capsule, before the tier multiplier.
pub const BASE_CAPSULE_REWARD: f64 = 10.0;

/// Months in a year, used to pro-rate annual yields.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Default compounding periods per year for compound-yield projections.
pub const DEFAULT_COMPOUNDING_FREQUENCY: u32 = 12;

/// Percentage of a usage limit at which a warning is raised.
pub const USAGE_WARNING_PERCENT: f64 = 80.0;

/// Sentinel used by external configuration to mean "no limit".
pub const UNLIMITED_SENTINEL: f64 = -1.0;

/// Usage pattern thresholds for tier recommendation.
pub const RECOMMEND_SOVEREIGN_CAPSULES: u64 = 20;
pub const RECOMMEND_CREATOR_CAPSULES: u64 = 5;
pub const RECOMMEND_SEEKER_CAPSULES: u64 = 1;
pub const RECOMMEND_SEEKER_STORAGE_GB: f64 = 1.0;
pub const RECOMMEND_SEEKER_API_CALLS: u64 = 100;
