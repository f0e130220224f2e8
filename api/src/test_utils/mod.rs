//! Test utilities
//!
//! Manual stub implementations and test fixtures for unit testing.
//!
//! Why manual stubs instead of mockall?
//! - mockall has lifetime issues with traits containing `&str` parameters
//! - Stubs record calls, so "this upstream was never hit" is a plain assertion
//! - We control exactly what they return without macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
