//! Application Layer
//!
//! Use cases that orchestrate the business flow. Depends on the domain layer
//! and reaches infrastructure only through ports.
//!
//! - `OperationRunner` - validate, confirm, synthesize, execute, report

pub mod runner;

pub use runner::{OperationRunner, PreparedOperation, RunSummary};
