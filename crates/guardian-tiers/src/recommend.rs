//! Tier recommendation from a usage pattern.

use guardian_core::constants::{
    RECOMMEND_CREATOR_CAPSULES, RECOMMEND_SEEKER_API_CALLS, RECOMMEND_SEEKER_CAPSULES,
    RECOMMEND_SEEKER_STORAGE_GB, RECOMMEND_SOVEREIGN_CAPSULES,
};
use guardian_core::TierName;
use serde::{Deserialize, Serialize};

/// Expected usage and needs of a prospective user.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UsagePattern {
    pub capsules_per_month: u64,
    #[serde(rename = "storageGB")]
    pub storage_gb: f64,
    pub api_calls_per_day: u64,
    pub enterprise: bool,
    pub monetization: bool,
    pub custom_branding: bool,
}

/// Recommend a tier. Rules are checked in priority order; the first match wins.
///
/// | Rule | Tier |
/// |------|------|
/// | enterprise, or more than 20 capsules/month | Sovereign |
/// | monetization or custom branding, or more than 5 capsules/month | Creator |
/// | more than 1 capsule/month, 1 GB storage or 100 API calls/day | Seeker |
/// | otherwise | Explorer |
///
/// # Examples
///
/// ```
/// use guardian_core::TierName;
/// use guardian_tiers::{get_recommended_tier, UsagePattern};
///
/// let light = UsagePattern { capsules_per_month: 1, ..Default::default() };
/// assert_eq!(get_recommended_tier(&light), TierName::Explorer);
/// let busy = UsagePattern { capsules_per_month: 21, ..Default::default() };
/// assert_eq!(get_recommended_tier(&busy), TierName::Sovereign);
/// ```
pub fn get_recommended_tier(pattern: &UsagePattern) -> TierName {
    if pattern.enterprise || pattern.capsules_per_month > RECOMMEND_SOVEREIGN_CAPSULES {
        TierName::Sovereign
    } else if pattern.monetization
        || pattern.custom_branding
        || pattern.capsules_per_month > RECOMMEND_CREATOR_CAPSULES
    {
        TierName::Creator
    } else if pattern.capsules_per_month > RECOMMEND_SEEKER_CAPSULES
        || pattern.storage_gb > RECOMMEND_SEEKER_STORAGE_GB
        || pattern.api_calls_per_day > RECOMMEND_SEEKER_API_CALLS
    {
        TierName::Seeker
    } else {
        TierName::Explorer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capsules(n: u64) -> UsagePattern {
        UsagePattern {
            capsules_per_month: n,
            ..Default::default()
        }
    }

    #[test]
    fn capsule_thresholds_are_strict() {
        assert_eq!(get_recommended_tier(&capsules(0)), TierName::Explorer);
        assert_eq!(get_recommended_tier(&capsules(1)), TierName::Explorer);
        assert_eq!(get_recommended_tier(&capsules(2)), TierName::Seeker);
        assert_eq!(get_recommended_tier(&capsules(5)), TierName::Seeker);
        assert_eq!(get_recommended_tier(&capsules(6)), TierName::Creator);
        assert_eq!(get_recommended_tier(&capsules(20)), TierName::Creator);
        assert_eq!(get_recommended_tier(&capsules(21)), TierName::Sovereign);
    }

    #[test]
    fn flags_take_priority() {
        let p = UsagePattern {
            enterprise: true,
            ..Default::default()
        };
        assert_eq!(get_recommended_tier(&p), TierName::Sovereign);

        let p = UsagePattern {
            monetization: true,
            ..Default::default()
        };
        assert_eq!(get_recommended_tier(&p), TierName::Creator);

        let p = UsagePattern {
            custom_branding: true,
            storage_gb: 50.0,
            ..Default::default()
        };
        assert_eq!(get_recommended_tier(&p), TierName::Creator);
    }

    #[test]
    fn storage_and_api_push_to_seeker() {
        let p = UsagePattern {
            storage_gb: 1.5,
            ..Default::default()
        };
        assert_eq!(get_recommended_tier(&p), TierName::Seeker);

        let p = UsagePattern {
            storage_gb: 1.0,
            api_calls_per_day: 100,
            ..Default::default()
        };
        assert_eq!(get_recommended_tier(&p), TierName::Explorer);

        let p = UsagePattern {
            api_calls_per_day: 101,
            ..Default::default()
        };
        assert_eq!(get_recommended_tier(&p), TierName::Seeker);
    }

    #[test]
    fn pattern_from_json() {
        let p: UsagePattern =
            serde_json::from_str(r#"{"capsulesPerMonth": 8, "customBranding": false}"#).unwrap();
        assert_eq!(get_recommended_tier(&p), TierName::Creator);
    }
}
