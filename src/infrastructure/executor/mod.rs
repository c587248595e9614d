//! Cluster executors
//!
//! Only a dry-run executor lives here: it resolves a scope against a
//! configured topology and prints what each host would run. Reaching the
//! hosts is left to an external executor implementing `ClusterExecutor`.

mod plan;
mod topology;

pub use plan::{PlanExecutor, PlannedInvocation};
pub use topology::ClusterTopology;
