//! The tier configuration table.
//!
//! [`TierTable`] is the single source of truth for every per-tier constant:
//! APY, reward multiplier, stake threshold, prices, limits and features. It is
//! built once (built-in defaults or an external JSON file), validated, and
//! shared by the yield engine and the tier policy.

use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::tier::{Limit, TierConfig, TierLimits, TierName};
use crate::traits::TierCatalog;

/// Validated tier configuration, indexed by [`TierName::rank`].
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    tiers: Vec<TierConfig>,
}

fn features(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for TierTable {
    fn default() -> Self {
        let tiers = vec![
            TierConfig {
                name: TierName::Explorer,
                monthly_price: 0.0,
                annual_price: 0.0,
                gtt_required: 0,
                apy: 0.05,
                reward_multiplier: 1.0,
                limits: TierLimits {
                    capsules_per_month: Limit::Capped(5.0),
                    storage_gb: Limit::Capped(1.0),
                    api_calls_per_day: Limit::Capped(100.0),
                },
                features: features(&[
                    "Basic Truth Capsules",
                    "Community Verification",
                    "Basic GTT Rewards",
                    "Mobile Access",
                ]),
            },
            TierConfig {
                name: TierName::Seeker,
                monthly_price: 9.99,
                annual_price: 99.99,
                gtt_required: 100,
                apy: 0.08,
                reward_multiplier: 1.5,
                limits: TierLimits {
                    capsules_per_month: Limit::Capped(25.0),
                    storage_gb: Limit::Capped(5.0),
                    api_calls_per_day: Limit::Capped(1_000.0),
                },
                features: features(&[
                    "Enhanced Truth Capsules",
                    "Priority Verification",
                    "1.5x GTT Rewards",
                    "AI Insights Pro",
                    "Custom Categories",
                    "Mobile Access",
                ]),
            },
            TierConfig {
                name: TierName::Creator,
                monthly_price: 29.99,
                annual_price: 299.99,
                gtt_required: 1_000,
                apy: 0.12,
                reward_multiplier: 2.0,
                limits: TierLimits {
                    capsules_per_month: Limit::Capped(100.0),
                    storage_gb: Limit::Capped(25.0),
                    api_calls_per_day: Limit::Capped(10_000.0),
                },
                features: features(&[
                    "Professional Capsules",
                    "Expert Validation",
                    "2x GTT Rewards",
                    "AI Insights Elite",
                    "Analytics Dashboard",
                    "Veritas Sealed",
                    "Mobile Access",
                ]),
            },
            TierConfig {
                name: TierName::Sovereign,
                monthly_price: 99.99,
                annual_price: 999.99,
                gtt_required: 10_000,
                apy: 0.25,
                reward_multiplier: 3.0,
                limits: TierLimits {
                    capsules_per_month: Limit::Unlimited,
                    storage_gb: Limit::Capped(100.0),
                    api_calls_per_day: Limit::Unlimited,
                },
                features: features(&[
                    "Unlimited Capsules",
                    "Instant Verification",
                    "3x GTT Rewards",
                    "AI Co-Pilot",
                    "White-label Access",
                    "Custom Branding",
                    "Analytics Dashboard",
                    "Veritas Sealed+",
                    "Mobile Access",
                ]),
            },
        ];
        Self { tiers }
    }
}

impl TierTable {
    /// Build a table from tier configurations in any order.
    ///
    /// Every tier must appear exactly once and the table must pass
    /// [`validate`](Self::validate).
    pub fn new(configs: Vec<TierConfig>) -> Result<Self, ConfigError> {
        let mut slots: Vec<Option<TierConfig>> = vec![None; TierName::ALL.len()];
        for config in configs {
            let slot = &mut slots[config.name.rank()];
            if slot.is_some() {
                return Err(ConfigError::DuplicateTier(config.name));
            }
            *slot = Some(config);
        }

        let mut tiers = Vec::with_capacity(slots.len());
        for (tier, slot) in TierName::ALL.into_iter().zip(slots) {
            tiers.push(slot.ok_or(ConfigError::MissingTier(tier))?);
        }

        let table = Self { tiers };
        table.validate()?;
        Ok(table)
    }

    /// Parse a JSON array of tier configurations.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let configs: Vec<TierConfig> = serde_json::from_str(json)?;
        Self::new(configs)
    }

    /// Load a tier table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "loaded tier table");
        Ok(table)
    }

    /// Serialize the table as pretty-printed JSON, lowest tier first.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.tiers)?)
    }

    /// Check per-tier ranges and the monotonic invariant: stake threshold,
    /// APY and reward multiplier never decrease as rank increases.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for t in &self.tiers {
            for price in [t.monthly_price, t.annual_price] {
                if price < 0.0 || price.is_nan() {
                    return Err(ConfigError::NegativePrice { tier: t.name, price });
                }
            }
            if !(0.0..=1.0).contains(&t.apy) {
                return Err(ConfigError::ApyOutOfRange { tier: t.name, apy: t.apy });
            }
            if t.reward_multiplier <= 0.0 || t.reward_multiplier.is_nan() {
                return Err(ConfigError::NonPositiveMultiplier {
                    tier: t.name,
                    multiplier: t.reward_multiplier,
                });
            }
        }

        for pair in self.tiers.windows(2) {
            let (lower, higher) = (&pair[0], &pair[1]);
            let field = if higher.gtt_required < lower.gtt_required {
                Some("gttRequired")
            } else if higher.apy < lower.apy {
                Some("apy")
            } else if higher.reward_multiplier < lower.reward_multiplier {
                Some("rewardMultiplier")
            } else {
                None
            };
            if let Some(field) = field {
                return Err(ConfigError::NonMonotonic {
                    field,
                    lower: lower.name,
                    higher: higher.name,
                });
            }
        }
        Ok(())
    }
}

impl TierCatalog for TierTable {
    fn tier(&self, name: TierName) -> &TierConfig {
        &self.tiers[name.rank()]
    }

    fn tiers(&self) -> Vec<&TierConfig> {
        self.tiers.iter().collect()
    }
}
