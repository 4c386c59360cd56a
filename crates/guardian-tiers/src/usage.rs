//! Usage-limit checks.
//!
//! Per dimension: usage at or above the cap is *exceeded*; otherwise usage at
//! or above 80% of the cap is a *warning*. Unlimited dimensions are skipped.

use guardian_core::constants::USAGE_WARNING_PERCENT;
use guardian_core::{Limit, TierCatalog, TierName};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::policy::TierPolicy;

/// Externally supplied usage counters.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageSnapshot {
    pub capsules_this_month: u64,
    #[serde(rename = "storageUsedGB")]
    pub storage_used_gb: f64,
    pub api_calls_today: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsageReport {
    pub is_within_limits: bool,
    pub exceeded: Vec<String>,
    pub warnings: Vec<String>,
    pub tier: TierName,
    pub used_fallback: bool,
}

struct Dimension {
    label: &'static str,
    unit: &'static str,
}

const CAPSULES: Dimension = Dimension {
    label: "Monthly capsule",
    unit: "",
};
const STORAGE: Dimension = Dimension {
    label: "Storage",
    unit: " GB",
};
const API_CALLS: Dimension = Dimension {
    label: "Daily API call",
    unit: "",
};

impl Dimension {
    fn check(&self, limit: Limit, used: f64, report: &mut UsageReport) {
        let Some(cap) = limit.cap() else {
            return;
        };
        if used >= cap {
            report
                .exceeded
                .push(format!("{} limit reached ({used}/{cap}{})", self.label, self.unit));
        } else if used * 100.0 >= cap * USAGE_WARNING_PERCENT {
            report.warnings.push(format!(
                "{} usage at {:.0}% of limit ({used}/{cap}{})",
                self.label,
                used / cap * 100.0,
                self.unit
            ));
        }
    }
}

impl<C: TierCatalog> TierPolicy<C> {
    /// Compare `usage` against the tier's limits.
    pub fn check_usage_limits(&self, tier_name: &str, usage: &UsageSnapshot) -> UsageReport {
        let resolved = self.catalog.resolve(tier_name);
        let limits = resolved.config.limits;
        let mut report = UsageReport {
            is_within_limits: true,
            exceeded: Vec::new(),
            warnings: Vec::new(),
            tier: resolved.tier(),
            used_fallback: resolved.used_fallback,
        };

        let capsules = usage.capsules_this_month as f64;
        CAPSULES.check(limits.capsules_per_month, capsules, &mut report);
        STORAGE.check(limits.storage_gb, usage.storage_used_gb, &mut report);
        API_CALLS.check(limits.api_calls_per_day, usage.api_calls_today as f64, &mut report);

        report.is_within_limits = report.exceeded.is_empty();
        debug!(
            tier = %report.tier,
            exceeded = report.exceeded.len(),
            warnings = report.warnings.len(),
            "checked usage limits"
        );
        report
    }
}
