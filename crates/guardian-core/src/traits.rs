//! Trait interfaces between the GuardianChain crates.
//!
//! - [`TierCatalog`] — read-only access to tier configuration
//!   ([`TierTable`](crate::TierTable) implements; the yield engine and tier
//!   policy consume).

use tracing::warn;

use crate::tier::{TierConfig, TierName};

/// Outcome of resolving a caller-supplied tier name.
///
/// Unknown names resolve to the explorer tier with `used_fallback` set, so
/// callers and tests can detect misconfiguration instead of silently
/// receiving the lowest tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierResolution<'a> {
    pub config: &'a TierConfig,
    pub used_fallback: bool,
}

impl TierResolution<'_> {
    pub fn tier(&self) -> TierName {
        self.config.name
    }
}

/// Read-only view of the tier configuration.
pub trait TierCatalog: Send + Sync {
    /// Configuration for a known tier.
    fn tier(&self, name: TierName) -> &TierConfig;

    /// Resolve a free-form tier name, case-insensitively.
    ///
    /// Default implementation parses the name and falls back to
    /// [`TierName::Explorer`], emitting a `warn!` event on fallback.
    fn resolve(&self, name: &str) -> TierResolution<'_> {
        match name.parse::<TierName>() {
            Ok(tier) => TierResolution {
                config: self.tier(tier),
                used_fallback: false,
            },
            Err(_) => {
                warn!(requested = name, "unknown tier, falling back to explorer");
                TierResolution {
                    config: self.tier(TierName::Explorer),
                    used_fallback: true,
                }
            }
        }
    }

    /// Highest tier whose stake threshold `amount` meets.
    ///
    /// Thresholds are inclusive and read from `gtt_required`. Amounts below
    /// every threshold (including zero and negative amounts) land in the
    /// explorer tier.
    fn tier_for_stake(&self, amount: f64) -> &TierConfig {
        TierName::ALL
            .iter()
            .rev()
            .map(|t| self.tier(*t))
            .find(|c| amount >= c.gtt_required as f64)
            .unwrap_or_else(|| self.tier(TierName::Explorer))
    }

    /// All tiers ordered lowest rank first.
    fn tiers(&self) -> Vec<&TierConfig> {
        TierName::ALL.iter().map(|t| self.tier(*t)).collect()
    }
}
