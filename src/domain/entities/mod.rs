//! Domain Entities
//!
//! - `CommandDescriptor` - static metadata for one operation
//! - `BoundEnvironment` - validated variable values for one invocation
//! - `SynthesizedCommand` - the command line(s) handed to the executor

mod bound_environment;
mod descriptor;
mod synthesized_command;

pub use bound_environment::BoundEnvironment;
pub use descriptor::CommandDescriptor;
pub use synthesized_command::SynthesizedCommand;
