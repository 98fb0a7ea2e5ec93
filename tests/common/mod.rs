//! Common test utilities for Linthold contract and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated build directory plus isolated home
//! - Assertion macros: `assert_success!`, `assert_failure!`
//! - Fixtures: Reusable catalog, rule-set and report content

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
