//! [`TierPolicy`]: tier lookups and feature checks over a shared catalog.
//!
//! Usage-limit and upgrade methods live in [`usage`](crate::usage) and
//! [`upgrade`](crate::upgrade).

use std::sync::Arc;

use guardian_core::{TierCatalog, TierConfig, TierName, TierTable};

/// Tier policy bound to a tier catalog.
#[derive(Debug, Clone)]
pub struct TierPolicy<C = TierTable> {
    pub(crate) catalog: Arc<C>,
}

impl Default for TierPolicy<TierTable> {
    fn default() -> Self {
        Self::new(Arc::new(TierTable::default()))
    }
}

impl<C: TierCatalog> TierPolicy<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Configuration for `tier_name`, matched case-insensitively.
    ///
    /// Unknown names return the explorer configuration. Use
    /// [`TierCatalog::resolve`] to observe the fallback.
    pub fn get_tier_details(&self, tier_name: &str) -> &TierConfig {
        self.catalog.resolve(tier_name).config
    }

    /// Whether any of the tier's features contains `feature` as a
    /// case-insensitive substring.
    ///
    /// Partial words match (`"insight"` matches `"AI Insights Pro"`), and an
    /// empty `feature` matches any tier with at least one feature.
    pub fn has_feature_access(&self, tier_name: &str, feature: &str) -> bool {
        let needle = feature.to_lowercase();
        self.get_tier_details(tier_name)
            .features
            .iter()
            .any(|f| f.to_lowercase().contains(&needle))
    }

    /// Tier level as a percentage of the highest level.
    ///
    /// Explorer is 25, Sovereign is 100.
    pub fn tier_progress(&self, tier_name: &str) -> f64 {
        let level = self.catalog.resolve(tier_name).tier().level();
        let max = TierName::ALL[TierName::ALL.len() - 1].level();
        f64::from(level) / f64::from(max) * 100.0
    }

    /// The tier one step above `tier_name`, or `None` at the top.
    pub fn next_tier(&self, tier_name: &str) -> Option<TierName> {
        self.catalog.resolve(tier_name).tier().next()
    }

    /// What a year costs on the monthly plan minus the annual price.
    pub fn annual_savings(&self, tier_name: &str) -> f64 {
        let t = self.get_tier_details(tier_name);
        t.monthly_price * 12.0 - t.annual_price
    }
}
