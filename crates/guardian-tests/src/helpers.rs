//! Shared helpers for integration tests.

use std::sync::Arc;

use guardian_core::{TierCatalog, TierConfig, TierTable};
use guardian_tiers::TierPolicy;
use guardian_yield::YieldEngine;

/// A yield engine and tier policy sharing one table.
pub fn engines(table: TierTable) -> (YieldEngine, TierPolicy) {
    let table = Arc::new(table);
    (YieldEngine::new(table.clone()), TierPolicy::new(table))
}

/// The built-in tier configurations, lowest tier first, as owned values.
pub fn default_configs() -> Vec<TierConfig> {
    TierTable::default().tiers().into_iter().cloned().collect()
}

/// Floating-point comparison with an absolute tolerance of `1e-9`.
pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
