//! Cluster Executor Port
//!
//! The capability that actually reaches the hosts: given a scope and the
//! command for each host, run it and report how many hosts failed. Transport,
//! parallelism and retries are the implementation's business.

use serde::Serialize;

use crate::domain::entities::SynthesizedCommand;
use crate::domain::value_objects::DistributionScope;

/// Error that prevented the executor from running at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    /// No coordinator host is known
    EmptyTopology,
    /// Output could not be written
    IoError(String),
    /// Executor-specific failure
    Unavailable(String),
}

impl std::fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTopology => write!(f, "no coordinator host configured"),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
            Self::Unavailable(msg) => write!(f, "executor unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ExecutorError {}

/// A host that failed to run its command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostFailure {
    pub host: String,
    pub reason: String,
}

/// Aggregated result of running one operation across the cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    /// Number of hosts the command was sent to
    pub total: usize,
    pub failures: Vec<HostFailure>,
}

impl ExecutionReport {
    /// Report where every one of `total` hosts succeeded
    pub fn all_succeeded(total: usize) -> Self {
        Self {
            total,
            failures: Vec::new(),
        }
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn succeeded(&self) -> usize {
        self.total.saturating_sub(self.failures.len())
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Which roles a scope resolves to, for the status message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TargetSummary {
    /// Targeted hosts that are neither coordinator nor standby
    pub segment_hosts: usize,
    /// Whether a distinct standby coordinator host is targeted
    pub standby: bool,
}

/// Runs a synthesized command on the hosts selected by a scope
pub trait ClusterExecutor {
    /// Describe the hosts `scope` selects without running anything
    fn summarize(&self, scope: &DistributionScope) -> Result<TargetSummary, ExecutorError>;

    fn execute(
        &self,
        scope: &DistributionScope,
        command: &SynthesizedCommand,
    ) -> Result<ExecutionReport, ExecutorError>;
}
