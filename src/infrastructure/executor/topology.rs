//! Cluster topology - the hosts behind each role

use serde::Serialize;

use crate::config::ClusterConfig;
use crate::domain::ports::{ExecutorError, TargetSummary};
use crate::domain::value_objects::DistributionScope;

/// Coordinator, optional standby, and segment hosts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusterTopology {
    pub coordinator: Option<String>,
    pub standby: Option<String>,
    /// Distinct host names, in configuration order
    pub segments: Vec<String>,
}

impl ClusterTopology {
    pub fn new(
        coordinator: Option<String>,
        standby: Option<String>,
        segments: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for host in segments {
            if !unique.contains(&host) {
                unique.push(host);
            }
        }

        Self {
            coordinator,
            standby,
            segments: unique,
        }
    }

    pub fn from_config(config: &ClusterConfig) -> Self {
        Self::new(
            config.coordinator.clone(),
            config.standby.clone(),
            config.segments.iter().cloned(),
        )
    }

    /// Coordinator host, required by every executor
    pub fn coordinator(&self) -> Result<&str, ExecutorError> {
        self.coordinator
            .as_deref()
            .filter(|h| !h.is_empty())
            .ok_or(ExecutorError::EmptyTopology)
    }

    /// Standby host, if it is a host of its own
    fn distinct_standby(&self) -> Option<&str> {
        self.standby
            .as_deref()
            .filter(|s| !s.is_empty() && Some(*s) != self.coordinator.as_deref())
    }

    /// Distinct hosts selected by `scope`: coordinator, standby, then segments
    ///
    /// A host excluded by role stays excluded even if it also runs segments.
    pub fn targets(&self, scope: &DistributionScope) -> Result<Vec<String>, ExecutorError> {
        let coordinator = self.coordinator()?;
        let standby = self.distinct_standby();

        let mut hosts: Vec<String> = Vec::new();
        if scope.include_coordinator {
            hosts.push(coordinator.to_string());
        }
        if scope.include_standby {
            if let Some(standby) = standby {
                hosts.push(standby.to_string());
            }
        }

        for host in &self.segments {
            let excluded = (!scope.include_coordinator && host == coordinator)
                || (!scope.include_standby && Some(host.as_str()) == standby);
            if !excluded && !hosts.contains(host) {
                hosts.push(host.clone());
            }
        }

        Ok(hosts)
    }

    pub fn summarize(&self, scope: &DistributionScope) -> Result<TargetSummary, ExecutorError> {
        let coordinator = self.coordinator()?;
        let standby = self.distinct_standby().filter(|_| scope.include_standby);
        let segment_hosts = self
            .targets(scope)?
            .iter()
            .filter(|h| h.as_str() != coordinator && Some(h.as_str()) != standby)
            .count();

        Ok(TargetSummary {
            segment_hosts,
            standby: standby.is_some(),
        })
    }
}
