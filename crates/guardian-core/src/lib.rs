//! # guardian-core
//! Foundation types, configuration and traits for the GuardianChain tier engine.

pub mod constants;
pub mod error;
pub mod table;
pub mod tier;
pub mod traits;

pub use error::{ConfigError, ParseHorizonError, ParseTierError};
pub use table::TierTable;
pub use tier::{Limit, TierConfig, TierLimits, TierName};
pub use traits::{TierCatalog, TierResolution};
