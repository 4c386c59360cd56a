//! Upgrade comparisons and eligibility.

use guardian_core::{Limit, TierCatalog, TierName};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::policy::TierPolicy;

/// What moving from one tier to another gains.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeBenefits {
    /// Target features absent from the current tier, by exact string match.
    pub additional_features: Vec<String>,
    /// `"<dimension>: <before> → <after>"` for every limit that grows.
    pub increased_limits: Vec<String>,
    /// Target monthly price minus current monthly price; negative for downgrades.
    pub price_difference: f64,
    pub gtt_requirement: u64,
    /// Set when either tier name was unknown and explorer was compared instead.
    pub used_fallback: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// Target requirements, listed whether or not they are already met.
    pub requirements: Vec<String>,
    pub target: TierName,
    pub used_fallback: bool,
}

fn describe(limit: Limit, unit: &str) -> String {
    match limit {
        Limit::Unlimited => "Unlimited".to_string(),
        Limit::Capped(v) => format!("{v}{unit}"),
    }
}

impl<C: TierCatalog> TierPolicy<C> {
    pub fn get_upgrade_benefits(&self, current_tier: &str, target_tier: &str) -> UpgradeBenefits {
        let current_resolved = self.catalog.resolve(current_tier);
        let target_resolved = self.catalog.resolve(target_tier);
        let (current, target) = (current_resolved.config, target_resolved.config);

        let additional_features = target
            .features
            .iter()
            .filter(|f| !current.features.contains(f))
            .cloned()
            .collect();

        let (before, after) = (current.limits, target.limits);
        let dimensions = [
            (
                "Capsules per month",
                before.capsules_per_month,
                after.capsules_per_month,
                "",
            ),
            ("Storage", before.storage_gb, after.storage_gb, "GB"),
            (
                "API calls per day",
                before.api_calls_per_day,
                after.api_calls_per_day,
                "",
            ),
        ];
        let increased_limits = dimensions
            .into_iter()
            .filter(|(_, before, after, _)| after.exceeds(before))
            .map(|(label, before, after, unit)| {
                format!("{label}: {} → {}", describe(before, unit), describe(after, unit))
            })
            .collect();

        UpgradeBenefits {
            additional_features,
            increased_limits,
            price_difference: target.monthly_price - current.monthly_price,
            gtt_requirement: target.gtt_required,
            used_fallback: current_resolved.used_fallback || target_resolved.used_fallback,
        }
    }

    /// Check whether `gtt_balance` covers the target tier's stake requirement.
    ///
    /// The target's stake and monthly-payment requirements are always listed.
    pub fn validate_tier_upgrade(
        &self,
        current_tier: &str,
        target_tier: &str,
        gtt_balance: f64,
    ) -> UpgradeValidation {
        let current = self.catalog.resolve(current_tier);
        let target = self.catalog.resolve(target_tier);
        let required = target.config.gtt_required;

        let mut errors = Vec::new();
        if gtt_balance.is_nan() || gtt_balance < required as f64 {
            errors.push(format!(
                "Insufficient GTT balance: {} requires {required} GTT, have {gtt_balance}",
                target.config.name.display_name()
            ));
        }

        let requirements = vec![
            format!("Stake at least {required} GTT"),
            format!("Monthly payment of ${:.2}", target.config.monthly_price),
        ];

        debug!(
            from = %current.tier(),
            to = %target.tier(),
            gtt_balance,
            valid = errors.is_empty(),
            "validated tier upgrade"
        );
        UpgradeValidation {
            is_valid: errors.is_empty(),
            errors,
            requirements,
            target: target.tier(),
            used_fallback: current.used_fallback || target.used_fallback,
        }
    }

    /// Whether the balance covers the target's stake and the target differs
    /// from the current tier. Moves down the ladder are allowed.
    pub fn can_upgrade(&self, current_tier: &str, target_tier: &str, gtt_balance: f64) -> bool {
        let current = self.catalog.resolve(current_tier).tier();
        let target = self.catalog.resolve(target_tier).config;
        target.name != current && gtt_balance >= target.gtt_required as f64
    }

    /// Percentage of the target's stake requirement the balance covers.
    ///
    /// 100 whenever [`can_upgrade`](Self::can_upgrade) holds or the target
    /// needs no stake; otherwise `balance / required * 100`, clamped to
    /// `0..=100`.
    pub fn upgrade_progress(&self, current_tier: &str, target_tier: &str, gtt_balance: f64) -> f64 {
        let required = self.get_tier_details(target_tier).gtt_required;
        if required == 0 || self.can_upgrade(current_tier, target_tier, gtt_balance) {
            return 100.0;
        }
        (gtt_balance / required as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// GTT still needed to reach the target's stake requirement; never negative.
    pub fn gtt_shortfall(&self, target_tier: &str, gtt_balance: f64) -> f64 {
        let required = self.get_tier_details(target_tier).gtt_required as f64;
        (required - gtt_balance).max(0.0)
    }
}
