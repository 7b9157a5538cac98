//! Common test utilities for ftpush CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus stand-in tools
//! - Profile fixtures

// Each test binary uses a different subset of the helpers.
#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
