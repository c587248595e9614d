//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts: the closed set of
//! operations, the environment variables they read, the message kinds they
//! report with, and where they run.

mod env_var;
mod message_kind;
mod operation;
mod scope;

pub use env_var::EnvVar;
pub use message_kind::MessageKind;
pub use operation::Operation;
pub use scope::{DistributionScope, Execution};
