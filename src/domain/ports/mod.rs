//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cluster_executor;
pub mod environment;

pub use cluster_executor::{
    ClusterExecutor, ExecutionReport, ExecutorError, HostFailure, TargetSummary,
};
pub use environment::{EnvironmentSource, MapEnvironment};
