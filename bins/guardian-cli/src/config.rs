//! CLI configuration loaded from environment variables.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use guardian_core::TierTable;
use tracing::info;

#[derive(Clone, Debug)]
pub struct Config {
    /// Tier table file. `None` uses the built-in table.
    pub tiers_path: Option<PathBuf>,
    /// Log filter string (e.g. "info", "guardian_yield=debug").
    pub log_filter: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// `GUARDIAN_TIERS_PATH` names a JSON tier table; when unset, the
    /// per-user `guardianchain/tiers.json` under the config directory is used
    /// if it exists. `GUARDIAN_LOG` sets the log filter (default `info`).
    pub fn from_env() -> Self {
        let tiers_path = std::env::var("GUARDIAN_TIERS_PATH")
            .map(PathBuf::from)
            .ok()
            .or_else(|| {
                dirs::config_dir()
                    .map(|d| d.join("guardianchain").join("tiers.json"))
                    .filter(|p| p.is_file())
            });

        let log_filter = std::env::var("GUARDIAN_LOG").unwrap_or_else(|_| "info".to_string());

        Config {
            tiers_path,
            log_filter,
        }
    }

    /// Build the shared tier table: the configured file, or the built-in defaults.
    pub fn tier_table(&self) -> Result<Arc<TierTable>> {
        let table = match &self.tiers_path {
            Some(path) => {
                let table = TierTable::load(path)
                    .with_context(|| format!("loading tier table from {}", path.display()))?;
                info!(path = %path.display(), "using tier table file");
                table
            }
            None => TierTable::default(),
        };
        Ok(Arc::new(table))
    }
}
