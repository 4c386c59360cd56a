//! Yield engine over a shared [`TierCatalog`].
//!
//! Compute methods accept any numeric input and return a (possibly
//! degenerate) result. [`YieldEngine::validate_yield_params`] is the separate
//! step that reports every violated constraint.

use std::sync::Arc;

use guardian_core::constants::{BASE_CAPSULE_REWARD, MONTHS_PER_YEAR};
use guardian_core::{TierCatalog, TierName, TierTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::horizon::TimeHorizon;

/// Simple pro-rated yield on a stake.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YieldResult {
    pub yield_earned: f64,
    /// APY applied.
    pub rate: f64,
    /// Tier whose rate was applied.
    pub tier: TierName,
    pub amount: f64,
    /// Duration in months.
    pub duration: f64,
    /// Set when the requested tier was unknown and explorer was used instead.
    pub used_fallback: bool,
}

/// Caller-supplied yield inputs, checked by [`YieldEngine::validate_yield_params`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct YieldParams {
    pub tier: String,
    pub amount: f64,
    /// Duration in months.
    pub duration: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct YieldValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Reward for creating one capsule at a given stake.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CapsuleReward {
    /// Reward bucket label, e.g. `"Creator Capsule"`.
    pub tier: String,
    pub tier_name: TierName,
    pub gtt_bonus: f64,
    pub features: Vec<String>,
    pub staking_multiplier: f64,
}

/// Projected earnings over a [`TimeHorizon`].
///
/// `capsule_rewards` assumes exactly one capsule is created per elapsed
/// month.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub period: TimeHorizon,
    pub months: u32,
    pub yield_earnings: f64,
    pub capsule_rewards: f64,
    pub total_earnings: f64,
    pub rate: f64,
    pub tier: TierName,
    pub used_fallback: bool,
}

/// The production yield calculator.
#[derive(Debug, Clone)]
pub struct YieldEngine<C = TierTable> {
    catalog: Arc<C>,
}

impl Default for YieldEngine<TierTable> {
    fn default() -> Self {
        Self::new(Arc::new(TierTable::default()))
    }
}

impl<C: TierCatalog> YieldEngine<C> {
    /// Create an engine reading tier constants from `catalog`.
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Simple (non-compounding) yield: `principal * apy * months / 12`.
    ///
    /// `tier` is matched case-insensitively; unknown names use the explorer
    /// rate and set `used_fallback`.
    pub fn calculate_yield(&self, tier: &str, principal: f64, duration_months: f64) -> YieldResult {
        let resolved = self.catalog.resolve(tier);
        let rate = resolved.config.apy;
        let yield_earned = principal * rate * (duration_months / MONTHS_PER_YEAR);
        debug!(tier = %resolved.tier(), principal, duration_months, yield_earned, "computed yield");
        YieldResult {
            yield_earned,
            rate,
            tier: resolved.tier(),
            amount: principal,
            duration: duration_months,
            used_fallback: resolved.used_fallback,
        }
    }

    /// Check yield inputs, collecting every violation rather than stopping at
    /// the first.
    pub fn validate_yield_params(&self, params: &YieldParams) -> YieldValidation {
        let mut errors = Vec::new();
        if params.amount.is_nan() || params.amount <= 0.0 {
            errors.push("Amount must be greater than 0".to_string());
        }
        if params.duration.is_nan() || params.duration <= 0.0 {
            errors.push("Duration must be greater than 0".to_string());
        }
        if params.tier.parse::<TierName>().is_err() {
            errors.push(format!("Invalid tier: {}", params.tier));
        }
        debug!(errors = errors.len(), "validated yield params");
        YieldValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Capsule creation reward for a stake.
    ///
    /// The reward bucket is the highest tier whose `gtt_required` the stake
    /// meets (thresholds inclusive); anything below the seeker threshold,
    /// including zero or negative stakes, earns the explorer reward.
    pub fn calculate_capsule_rewards(&self, amount_staked: f64) -> CapsuleReward {
        let config = self.catalog.tier_for_stake(amount_staked);
        CapsuleReward {
            tier: config.name.capsule_label().to_string(),
            tier_name: config.name,
            gtt_bonus: BASE_CAPSULE_REWARD * config.reward_multiplier,
            features: config
                .name
                .capsule_perks()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            staking_multiplier: config.reward_multiplier,
        }
    }

    /// Yield plus capsule rewards over `horizon`.
    ///
    /// The yield rate comes from `tier`, while the capsule reward bucket comes
    /// from `staked_amount`; one capsule per month is assumed.
    pub fn calculate_projected_earnings(
        &self,
        staked_amount: f64,
        tier: &str,
        horizon: TimeHorizon,
    ) -> Projection {
        let months = horizon.months();
        let yield_result = self.calculate_yield(tier, staked_amount, f64::from(months));
        let capsule_rewards =
            self.calculate_capsule_rewards(staked_amount).gtt_bonus * f64::from(months);
        Projection {
            period: horizon,
            months,
            yield_earnings: yield_result.yield_earned,
            capsule_rewards,
            total_earnings: yield_result.yield_earned + capsule_rewards,
            rate: yield_result.rate,
            tier: yield_result.tier,
            used_fallback: yield_result.used_fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine() -> YieldEngine {
        YieldEngine::default()
    }

    fn params(tier: &str, amount: f64, duration: f64) -> YieldParams {
        YieldParams {
            tier: tier.to_string(),
            amount,
            duration,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // --- calculate_yield ---

    #[test]
    fn creator_one_year() {
        let r = engine().calculate_yield("creator", 1000.0, 12.0);
        assert_eq!(r.yield_earned, 120.0);
        assert_eq!(r.rate, 0.12);
        assert_eq!(r.tier, TierName::Creator);
        assert!(!r.used_fallback);
    }

    #[test]
    fn sovereign_one_year() {
        let r = engine().calculate_yield("sovereign", 15_000.0, 12.0);
        assert_eq!(r.yield_earned, 3750.0);
    }

    #[test]
    fn half_year_is_pro_rated() {
        let r = engine().calculate_yield("explorer", 1000.0, 6.0);
        assert_eq!(r.yield_earned, 25.0);
    }

    #[test]
    fn fractional_months_accepted() {
        let r = engine().calculate_yield("seeker", 1200.0, 1.5);
        assert!(close(r.yield_earned, 1200.0 * 0.08 * 1.5 / 12.0));
    }

    #[test]
    fn tier_is_case_insensitive() {
        let a = engine().calculate_yield("CrEaToR", 1000.0, 12.0);
        assert_eq!(a.tier, TierName::Creator);
        assert!(!a.used_fallback);
    }

    #[test]
    fn unknown_tier_uses_explorer_rate_and_flags_it() {
        let r = engine().calculate_yield("bogus", 1000.0, 12.0);
        assert_eq!(r.tier, TierName::Explorer);
        assert_eq!(r.rate, 0.05);
        assert!(close(r.yield_earned, 50.0));
        assert!(r.used_fallback);
    }

    #[test]
    fn degenerate_inputs_do_not_fail() {
        let e = engine();
        assert_eq!(e.calculate_yield("creator", 0.0, 12.0).yield_earned, 0.0);
        assert!(e.calculate_yield("creator", -100.0, 12.0).yield_earned < 0.0);
        assert!(e.calculate_yield("creator", 100.0, -12.0).yield_earned < 0.0);
    }

    // --- validate_yield_params ---

    #[test]
    fn valid_params() {
        let v = engine().validate_yield_params(&params("creator", 1000.0, 12.0));
        assert!(v.is_valid);
        assert!(v.errors.is_empty());
    }

    #[test]
    fn negative_amount_rejected() {
        let v = engine().validate_yield_params(&params("creator", -100.0, 12.0));
        assert!(!v.is_valid);
        assert_eq!(v.errors, vec!["Amount must be greater than 0".to_string()]);
    }

    #[test]
    fn unknown_tier_rejected() {
        let v = engine().validate_yield_params(&params("bogus", 1000.0, 12.0));
        assert!(!v.is_valid);
        assert_eq!(v.errors, vec!["Invalid tier: bogus".to_string()]);
    }

    #[test]
    fn tier_validation_is_case_insensitive() {
        assert!(engine().validate_yield_params(&params("SEEKER", 1.0, 1.0)).is_valid);
    }

    #[test]
    fn all_errors_collected() {
        let v = engine().validate_yield_params(&params("nope", 0.0, 0.0));
        assert!(!v.is_valid);
        assert_eq!(v.errors.len(), 3);
    }

    #[test]
    fn nan_amount_rejected() {
        let v = engine().validate_yield_params(&params("creator", f64::NAN, 12.0));
        assert!(!v.is_valid);
    }

    // --- calculate_capsule_rewards ---

    #[test]
    fn sovereign_reward_bucket() {
        let r = engine().calculate_capsule_rewards(10_000.0);
        assert_eq!(r.tier, "Sovereign Capsule");
        assert_eq!(r.tier_name, TierName::Sovereign);
        assert_eq!(r.gtt_bonus, 30.0);
        assert_eq!(r.staking_multiplier, 3.0);
        assert_eq!(
            r.features,
            vec!["Premium verification", "Enhanced visibility", "Revenue sharing"]
        );
    }

    #[test]
    fn threshold_boundaries_are_exact() {
        let e = engine();
        assert_eq!(e.calculate_capsule_rewards(99.0).tier, "Explorer Capsule");
        assert_eq!(e.calculate_capsule_rewards(100.0).tier, "Seeker Capsule");
        assert_eq!(e.calculate_capsule_rewards(999.0).tier, "Seeker Capsule");
        assert_eq!(e.calculate_capsule_rewards(1000.0).tier, "Creator Capsule");
        assert_eq!(e.calculate_capsule_rewards(9_999.99).tier, "Creator Capsule");
        assert_eq!(e.calculate_capsule_rewards(10_000.0).tier, "Sovereign Capsule");
    }

    #[test]
    fn bonuses_follow_table_multipliers() {
        let e = engine();
        assert_eq!(e.calculate_capsule_rewards(0.0).gtt_bonus, 10.0);
        assert_eq!(e.calculate_capsule_rewards(150.0).gtt_bonus, 15.0);
        assert_eq!(e.calculate_capsule_rewards(5_000.0).gtt_bonus, 20.0);
    }

    #[test]
    fn negative_stake_is_explorer() {
        let r = engine().calculate_capsule_rewards(-500.0);
        assert_eq!(r.tier_name, TierName::Explorer);
        assert_eq!(r.staking_multiplier, 1.0);
    }

    #[test]
    fn custom_table_moves_thresholds() {
        let mut configs = TierTable::default().tiers().into_iter().cloned().collect::<Vec<_>>();
        configs[1].gtt_required = 50;
        let table = TierTable::new(configs).unwrap();
        let e = YieldEngine::new(Arc::new(table));
        assert_eq!(e.calculate_capsule_rewards(50.0).tier_name, TierName::Seeker);
    }

    // --- calculate_projected_earnings ---

    #[test]
    fn creator_one_year_projection() {
        let p = engine().calculate_projected_earnings(1000.0, "creator", TimeHorizon::OneYear);
        assert_eq!(p.months, 12);
        assert_eq!(p.yield_earnings, 120.0);
        assert_eq!(p.capsule_rewards, 240.0);
        assert_eq!(p.total_earnings, 360.0);
        assert_eq!(p.rate, 0.12);
    }

    #[test]
    fn one_capsule_per_month_assumed() {
        let e = engine();
        for h in TimeHorizon::ALL {
            let p = e.calculate_projected_earnings(10_000.0, "sovereign", h);
            assert_eq!(p.capsule_rewards, 30.0 * f64::from(h.months()));
            assert!(close(p.total_earnings, p.yield_earnings + p.capsule_rewards));
        }
    }

    #[test]
    fn projection_tier_and_stake_bucket_are_independent() {
        // Sovereign rate, but a seeker-sized stake earns seeker capsule rewards.
        let p = engine().calculate_projected_earnings(500.0, "sovereign", TimeHorizon::ThreeMonths);
        assert_eq!(p.rate, 0.25);
        assert_eq!(p.capsule_rewards, 45.0);
    }

    #[test]
    fn projection_reports_fallback() {
        let p = engine().calculate_projected_earnings(1000.0, "gold", TimeHorizon::OneMonth);
        assert!(p.used_fallback);
        assert_eq!(p.tier, TierName::Explorer);
    }

    #[test]
    fn results_serialise_camel_case() {
        let r = engine().calculate_capsule_rewards(100.0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["gttBonus"], 15.0);
        assert_eq!(json["stakingMultiplier"], 1.5);
    }

    proptest! {
        #[test]
        fn capsule_multiplier_is_monotonic(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let e = engine();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                e.calculate_capsule_rewards(lo).staking_multiplier
                    <= e.calculate_capsule_rewards(hi).staking_multiplier
            );
        }

        #[test]
        fn yield_is_idempotent(
            principal in -1e9f64..1e9,
            months in -120f64..120.0,
            t in 0usize..4,
        ) {
            let e = engine();
            let tier = TierName::ALL[t].as_str();
            let a = e.calculate_yield(tier, principal, months);
            let b = e.calculate_yield(tier, principal, months);
            prop_assert_eq!(a.yield_earned.to_bits(), b.yield_earned.to_bits());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn yield_scales_linearly_with_duration(principal in 1f64..1e6, months in 1f64..60.0) {
            let e = engine();
            let one = e.calculate_yield("seeker", principal, months).yield_earned;
            let two = e.calculate_yield("seeker", principal, months * 2.0).yield_earned;
            prop_assert!((two - 2.0 * one).abs() <= 1e-9 * two.abs().max(1.0));
        }
    }
}
