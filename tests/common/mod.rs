//! Common test utilities for pxf-cluster integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated config home plus helpers to run the CLI
//! - Fixtures: environments and topologies reused across tests

#![allow(dead_code)]

pub mod env;

pub use env::*;
pub use fixtures::*;
