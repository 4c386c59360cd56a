//! # guardian-yield — Staking yield and capsule reward engine.
//!
//! Pure, synchronous computations over a shared tier table:
//! - **Simple yield**: `principal * apy * months / 12`, never compounding.
//! - **Compound yield**: the standard periodic-compounding formula.
//! - **Capsule rewards**: a stake-threshold ladder over the tier table's
//!   `gtt_required`, paying `BASE_CAPSULE_REWARD * reward_multiplier`.
//! - **Projections**: yield plus one capsule reward per elapsed month.
//!
//! Compute functions never fail, even on zero or negative inputs. Callers
//! validate first with [`YieldEngine::validate_yield_params`].

pub mod compound;
pub mod engine;
pub mod horizon;

pub use compound::calculate_compound_yield;
pub use engine::{CapsuleReward, Projection, YieldEngine, YieldParams, YieldResult, YieldValidation};
pub use horizon::TimeHorizon;
