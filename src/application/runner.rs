//! Operation Runner
//!
//! Orchestrates one cluster operation: catalog lookup, environment
//! validation, the confirmation gate, synthesis, then execution through a
//! `ClusterExecutor`. Preparation and execution are separate steps so the
//! caller can print the status message in between.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::domain::entities::{CommandDescriptor, SynthesizedCommand};
use crate::domain::ports::{ClusterExecutor, EnvironmentSource, ExecutionReport};
use crate::domain::services::{
    descriptor, outcome_report, status_report, synthesize, validate, ConfirmationGate,
    SynthesisOptions,
};
use crate::domain::value_objects::{DistributionScope, Operation};
use crate::error::{PxfError, PxfResult};

/// An operation that passed validation and confirmation
#[derive(Debug)]
pub struct PreparedOperation {
    pub descriptor: &'static CommandDescriptor,
    pub command: SynthesizedCommand,
    /// Message to show before execution
    pub status: String,
}

impl PreparedOperation {
    pub fn operation(&self) -> Operation {
        self.descriptor.operation
    }

    pub fn scope(&self) -> &DistributionScope {
        &self.descriptor.scope
    }
}

/// Result of running an operation across the cluster
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub operation: Operation,
    pub scope: DistributionScope,
    pub report: ExecutionReport,
    /// Success or error message built from the report
    pub outcome: String,
}

impl RunSummary {
    /// Turn host failures into an error
    pub fn ensure_success(&self) -> PxfResult<()> {
        if self.report.is_success() {
            return Ok(());
        }
        Err(PxfError::ExecutionFailed {
            operation: self.operation,
            failed: self.report.failed(),
            total: self.report.total,
        })
    }
}

/// Runs operations against one environment and one executor
pub struct OperationRunner<'a, E: ?Sized, X: ?Sized> {
    env: &'a E,
    executor: &'a X,
}

impl<'a, E, X> OperationRunner<'a, E, X>
where
    E: EnvironmentSource + ?Sized,
    X: ClusterExecutor + ?Sized,
{
    pub fn new(env: &'a E, executor: &'a X) -> Self {
        Self { env, executor }
    }

    /// Validate, confirm and synthesize `op`
    ///
    /// Nothing reaches the executor if this fails.
    pub fn prepare<R: BufRead, W: Write>(
        &self,
        op: Operation,
        options: &SynthesisOptions,
        gate: &mut ConfirmationGate<R, W>,
    ) -> PxfResult<PreparedOperation> {
        let descriptor = descriptor(op);
        let env = validate(descriptor, self.env)?;
        gate.guard(descriptor, options.auto_confirm)?;
        let command = synthesize(descriptor, &env, options)?;

        let targets = self.executor.summarize(&descriptor.scope)?;
        let status = status_report(descriptor, targets.segment_hosts, targets.standby);

        Ok(PreparedOperation {
            descriptor,
            command,
            status,
        })
    }

    /// Hand a prepared operation to the executor
    pub fn execute(&self, prepared: &PreparedOperation) -> PxfResult<RunSummary> {
        let report = self
            .executor
            .execute(prepared.scope(), &prepared.command)?;

        tracing::info!(
            operation = %prepared.operation(),
            total = report.total,
            failed = report.failed(),
            "operation finished"
        );

        Ok(RunSummary {
            operation: prepared.operation(),
            scope: *prepared.scope(),
            outcome: outcome_report(prepared.descriptor, &report),
            report,
        })
    }

    /// Prepare and execute in one step
    pub fn run<R: BufRead, W: Write>(
        &self,
        op: Operation,
        options: &SynthesisOptions,
        gate: &mut ConfirmationGate<R, W>,
    ) -> PxfResult<RunSummary> {
        let prepared = self.prepare(op, options, gate)?;
        self.execute(&prepared)
    }
}
