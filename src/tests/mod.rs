//! Crate-internal tests for the configuration and error plumbing.
//!
//! Matcher behaviour is tested next to each strategy and in
//! `matcher::tests`; integration tests live under `tests/`.

pub mod config_tests;
pub mod error_tests;
pub mod test_utils;

pub use test_utils::{TestFixture, SCENARIO_ROUTES};
