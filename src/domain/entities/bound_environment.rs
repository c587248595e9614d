//! Bound environment - validated variable values for a single invocation

use std::collections::BTreeMap;

use crate::domain::value_objects::EnvVar;

/// Mapping from variable to its resolved, non-empty value
///
/// Only the environment validator binds values, so every required variable of
/// the descriptor it was built for is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundEnvironment {
    values: BTreeMap<EnvVar, String>,
}

impl BoundEnvironment {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind(&mut self, var: EnvVar, value: String) {
        self.values.insert(var, value);
    }

    /// Value of `var`, or `None` when it was optional and unset
    pub fn get(&self, var: EnvVar) -> Option<&str> {
        self.values.get(&var).map(String::as_str)
    }

    /// Value of `var`, or the empty string
    pub fn get_or_empty(&self, var: EnvVar) -> &str {
        self.get(var).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnvVar, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
