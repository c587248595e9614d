//! Distribution scope - which cluster roles an operation targets
//!
//! Produced by the catalog and consumed by a `ClusterExecutor`; nothing in the
//! domain layer interprets it.

use serde::Serialize;

/// Where the command for each target host is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Execution {
    /// Run on the coordinator, with the target host as a parameter
    Local,
    /// Run on the target host itself
    Remote,
}

/// Target selection for one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DistributionScope {
    pub execution: Execution,
    pub include_coordinator: bool,
    pub include_standby: bool,
}

impl DistributionScope {
    /// Run on every host of the cluster, coordinator and standby included
    pub const fn all_hosts() -> Self {
        Self {
            execution: Execution::Remote,
            include_coordinator: true,
            include_standby: true,
        }
    }

    /// Run from the coordinator against every other host
    pub const fn from_coordinator() -> Self {
        Self {
            execution: Execution::Local,
            include_coordinator: false,
            include_standby: true,
        }
    }

    pub fn is_local(&self) -> bool {
        self.execution == Execution::Local
    }
}
