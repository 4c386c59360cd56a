//! Tier data model: names, limits and per-tier configuration.
//!
//! Tiers form a strict total order by required stake:
//! `Explorer < Seeker < Creator < Sovereign`. The order is modelled
//! explicitly by [`TierName::ALL`] and [`TierName::rank`] rather than being
//! implied by threshold constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::UNLIMITED_SENTINEL;
use crate::error::{ConfigError, ParseTierError};

/// One of the closed set of user plans.
///
/// Parsing is case-insensitive.
///
/// # Examples
///
/// ```
/// use guardian_core::TierName;
/// assert_eq!("CREATOR".parse::<TierName>().unwrap(), TierName::Creator);
/// assert!(TierName::Seeker < TierName::Sovereign);
/// ```
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TierName {
    #[default]
    Explorer,
    Seeker,
    Creator,
    Sovereign,
}

impl TierName {
    /// All tiers, lowest rank first.
    pub const ALL: [TierName; 4] = [
        TierName::Explorer,
        TierName::Seeker,
        TierName::Creator,
        TierName::Sovereign,
    ];

    /// Zero-based position in the tier ladder.
    pub fn rank(self) -> usize {
        match self {
            Self::Explorer => 0,
            Self::Seeker => 1,
            Self::Creator => 2,
            Self::Sovereign => 3,
        }
    }

    /// One-based display level (Explorer = 1, Sovereign = 4).
    pub fn level(self) -> u32 {
        self.rank() as u32 + 1
    }

    /// The tier one step up the ladder, if any.
    pub fn next(self) -> Option<TierName> {
        Self::ALL.get(self.rank() + 1).copied()
    }

    /// Lowercase identifier used in configuration and APIs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Explorer => "explorer",
            Self::Seeker => "seeker",
            Self::Creator => "creator",
            Self::Sovereign => "sovereign",
        }
    }

    /// Capitalised display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Explorer => "Explorer",
            Self::Seeker => "Seeker",
            Self::Creator => "Creator",
            Self::Sovereign => "Sovereign",
        }
    }

    /// Label of the capsule reward bucket for this tier, e.g. `"Sovereign Capsule"`.
    pub fn capsule_label(self) -> &'static str {
        match self {
            Self::Explorer => "Explorer Capsule",
            Self::Seeker => "Seeker Capsule",
            Self::Creator => "Creator Capsule",
            Self::Sovereign => "Sovereign Capsule",
        }
    }

    /// Static perks attached to a capsule created in this tier's reward bucket.
    pub fn capsule_perks(self) -> &'static [&'static str] {
        match self {
            Self::Explorer => &["Basic verification"],
            Self::Seeker => &["Standard verification", "Community visibility"],
            Self::Creator => &[
                "Enhanced verification",
                "Priority visibility",
                "Analytics access",
            ],
            Self::Sovereign => &[
                "Premium verification",
                "Enhanced visibility",
                "Revenue sharing",
            ],
        }
    }
}

impl fmt::Display for TierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TierName {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| ParseTierError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for TierName {
    type Error = ParseTierError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A usage cap. External configuration encodes [`Limit::Unlimited`] as `-1`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "f64", into = "f64")]
pub enum Limit {
    Unlimited,
    Capped(f64),
}

impl Limit {
    /// The finite cap, or `None` when unlimited.
    pub fn cap(&self) -> Option<f64> {
        match self {
            Self::Unlimited => None,
            Self::Capped(v) => Some(*v),
        }
    }

    /// Whether `self` allows strictly more than `other`.
    ///
    /// Unlimited beats any finite cap; two unlimited limits are equal.
    pub fn exceeds(&self, other: &Limit) -> bool {
        match (self, other) {
            (Self::Unlimited, Self::Capped(_)) => true,
            (Self::Capped(a), Self::Capped(b)) => a > b,
            _ => false,
        }
    }
}

impl TryFrom<f64> for Limit {
    type Error = ConfigError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if v == UNLIMITED_SENTINEL {
            Ok(Self::Unlimited)
        } else if v < 0.0 || v.is_nan() {
            Err(ConfigError::NegativeLimit(v))
        } else {
            Ok(Self::Capped(v))
        }
    }
}

impl From<Limit> for f64 {
    fn from(limit: Limit) -> f64 {
        limit.cap().unwrap_or(UNLIMITED_SENTINEL)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("Unlimited"),
            Self::Capped(v) => write!(f, "{v}"),
        }
    }
}

/// Usage caps for a tier.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierLimits {
    pub capsules_per_month: Limit,
    #[serde(rename = "storageGB")]
    pub storage_gb: Limit,
    pub api_calls_per_day: Limit,
}

/// Static, immutable configuration of one tier.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TierConfig {
    pub name: TierName,
    pub monthly_price: f64,
    pub annual_price: f64,
    /// Minimum GTT stake to hold this tier.
    pub gtt_required: u64,
    /// Fractional annual yield rate.
    pub apy: f64,
    /// Multiplier applied to [`BASE_CAPSULE_REWARD`](crate::constants::BASE_CAPSULE_REWARD).
    pub reward_multiplier: f64,
    pub limits: TierLimits,
    /// Capability descriptions, in display order.
    pub features: Vec<String>,
}
