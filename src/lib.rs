//! pxf-cluster - cluster-wide administration for PXF
//!
//! PXF runs identically on every host of a cluster. This crate turns an
//! operation name (`start`, `sync`, `reload`, ...) into the validated
//! environment it needs, the cluster roles it targets, and the exact command
//! line each host runs. Reaching the hosts is delegated to a
//! [`ClusterExecutor`](domain::ports::ClusterExecutor).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{OperationRunner, PreparedOperation, RunSummary};
pub use config::Config;
pub use domain::entities::{BoundEnvironment, CommandDescriptor, SynthesizedCommand};
pub use domain::ports::{ClusterExecutor, EnvironmentSource, ExecutionReport, MapEnvironment};
pub use domain::services::{
    descriptor, synthesize, validate, Confirmation, ConfirmationGate, ReloadTarget,
    SynthesisOptions,
};
pub use domain::value_objects::{DistributionScope, EnvVar, Execution, MessageKind, Operation};
pub use error::{PxfError, PxfResult};
pub use infrastructure::{ClusterTopology, PlanExecutor, ProcessEnvironment};
