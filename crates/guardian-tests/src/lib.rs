//! Integration test suite for the GuardianChain tier engine.
//!
//! Exercises the yield engine and tier policy together over one shared tier
//! table, including tables loaded from external configuration.

pub mod helpers;
