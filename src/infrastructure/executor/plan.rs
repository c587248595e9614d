//! Dry-run executor
//!
//! Prints the command every targeted host would run, as text or NDJSON, and
//! reports every host as successful. Nothing is sent anywhere.

use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;

use super::topology::ClusterTopology;
use crate::domain::entities::SynthesizedCommand;
use crate::domain::ports::{ClusterExecutor, ExecutionReport, ExecutorError, TargetSummary};
use crate::domain::value_objects::DistributionScope;

/// One command on one host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedInvocation {
    /// Host the command is about
    pub target: String,
    /// Host the command runs on
    pub run_on: String,
    pub command: String,
}

/// Executor that only prints its plan
pub struct PlanExecutor {
    topology: ClusterTopology,
    json: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl PlanExecutor {
    /// Plan executor writing to stdout
    pub fn stdout(topology: ClusterTopology, json: bool) -> Self {
        Self::with_writer(topology, json, io::stdout())
    }

    /// Plan executor writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(
        topology: ClusterTopology,
        json: bool,
        writer: W,
    ) -> Self {
        Self {
            topology,
            json,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Resolve `scope` and build the invocation for every target
    pub fn plan(
        &self,
        scope: &DistributionScope,
        command: &SynthesizedCommand,
    ) -> Result<Vec<PlannedInvocation>, ExecutorError> {
        let coordinator = self.topology.coordinator()?;

        Ok(self
            .topology
            .targets(scope)?
            .into_iter()
            .map(|target| PlannedInvocation {
                run_on: if scope.is_local() {
                    coordinator.to_string()
                } else {
                    target.clone()
                },
                command: command.for_host(&target),
                target,
            })
            .collect())
    }

    fn write_invocation(&self, invocation: &PlannedInvocation) -> Result<(), ExecutorError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| ExecutorError::IoError(e.to_string()))?;

        let result = if self.json {
            let event = serde_json::json!({
                "event": "invocation",
                "target": invocation.target,
                "run_on": invocation.run_on,
                "command": invocation.command,
            });
            writeln!(writer, "{}", event)
        } else {
            writeln!(writer, "[{}] {}", invocation.run_on, invocation.command)
        };

        result
            .and_then(|_| writer.flush())
            .map_err(|e| ExecutorError::IoError(e.to_string()))
    }
}

impl ClusterExecutor for PlanExecutor {
    fn summarize(&self, scope: &DistributionScope) -> Result<TargetSummary, ExecutorError> {
        self.topology.summarize(scope)
    }

    fn execute(
        &self,
        scope: &DistributionScope,
        command: &SynthesizedCommand,
    ) -> Result<ExecutionReport, ExecutorError> {
        let invocations = self.plan(scope, command)?;
        for invocation in &invocations {
            self.write_invocation(invocation)?;
        }
        Ok(ExecutionReport::all_succeeded(invocations.len()))
    }
}
