//! Environment Source Port
//!
//! Where variable values come from. The process environment in production,
//! an in-memory map in tests.

use std::collections::HashMap;

use crate::domain::value_objects::EnvVar;

/// Looks up named environment variables
pub trait EnvironmentSource {
    /// Value of `var`, or `None` if it is not set at all
    fn lookup(&self, var: EnvVar) -> Option<String>;
}

/// In-memory environment
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    values: HashMap<EnvVar, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, var: EnvVar, value: impl Into<String>) -> Self {
        self.values.insert(var, value.into());
        self
    }

    pub fn set(&mut self, var: EnvVar, value: impl Into<String>) {
        self.values.insert(var, value.into());
    }

    pub fn unset(&mut self, var: EnvVar) {
        self.values.remove(&var);
    }
}

impl EnvironmentSource for MapEnvironment {
    fn lookup(&self, var: EnvVar) -> Option<String> {
        self.values.get(&var).cloned()
    }
}

impl<T: EnvironmentSource + ?Sized> EnvironmentSource for &T {
    fn lookup(&self, var: EnvVar) -> Option<String> {
        (**self).lookup(var)
    }
}
