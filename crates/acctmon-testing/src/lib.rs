//! Testing infrastructure for acctmon integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated config environment for CLI runs
//! - `assertions`: Custom assertions for acctmon-specific validation
//! - `fixtures`: Auth-state builders and canned scenarios

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::AuthStateBuilder;
pub use world::TestWorld;
