//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `env` - the process environment as an `EnvironmentSource`
//! - `executor/` - cluster topology and the dry-run `PlanExecutor`

pub mod env;
pub mod executor;

pub use env::ProcessEnvironment;
pub use executor::{ClusterTopology, PlanExecutor, PlannedInvocation};
