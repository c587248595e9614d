//! Process environment source

use crate::domain::ports::EnvironmentSource;
use crate::domain::value_objects::EnvVar;

/// Reads variables from the environment of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn lookup(&self, var: EnvVar) -> Option<String> {
        // non-UTF-8 values count as unset
        std::env::var(var.name()).ok()
    }
}
