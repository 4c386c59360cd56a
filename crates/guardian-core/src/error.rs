//! Error types for the GuardianChain tier engine.
//!
//! Only parsing and configuration loading can fail. Compute functions return
//! plain values and validators return structured reports.
use std::path::PathBuf;

use thiserror::Error;

use crate::tier::TierName;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTierError {
    #[error("unknown tier: {0}")] Unknown(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseHorizonError {
    #[error("unknown time horizon: {0} (expected 1month, 3months, 6months or 1year)")] Unknown(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing tier: {0}")] MissingTier(TierName),
    #[error("duplicate tier: {0}")] DuplicateTier(TierName),
    #[error("negative price for {tier}: {price}")] NegativePrice { tier: TierName, price: f64 },
    #[error("apy out of range for {tier}: {apy}")] ApyOutOfRange { tier: TierName, apy: f64 },
    #[error("non-positive reward multiplier for {tier}: {multiplier}")] NonPositiveMultiplier { tier: TierName, multiplier: f64 },
    #[error("negative limit: {0} (only -1 means unlimited)")] NegativeLimit(f64),
    #[error("{field} decreases from {lower} to {higher}")] NonMonotonic { field: &'static str, lower: TierName, higher: TierName },
    #[error("reading {path}: {source}")] Io { path: PathBuf, source: std::io::Error },
    #[error("parsing tier table: {0}")] Json(#[from] serde_json::Error),
}
