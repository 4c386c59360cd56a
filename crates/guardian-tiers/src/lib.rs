//! # guardian-tiers — Tier policy functions.
//!
//! Stateless checks over a shared tier table and caller-supplied balances
//! and usage counters. Validators never fail: they return a report listing
//! every violated constraint so a caller can show all problems at once.

pub mod policy;
pub mod recommend;
pub mod upgrade;
pub mod usage;

pub use policy::TierPolicy;
pub use recommend::{get_recommended_tier, UsagePattern};
pub use upgrade::{UpgradeBenefits, UpgradeValidation};
pub use usage::{UsageReport, UsageSnapshot};
