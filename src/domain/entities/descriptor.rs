//! Command descriptor - what one operation needs, says, and targets

use crate::domain::value_objects::{DistributionScope, EnvVar, MessageKind, Operation};

/// Static metadata describing one operation
///
/// Descriptors live in the catalog for the whole process and are never
/// mutated. A synthesizer only ever reads variables listed in `required` or
/// `optional`.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub operation: Operation,
    /// Must be set and non-empty, checked in this order
    pub required: &'static [EnvVar],
    /// Bound when set and non-empty, never an error when absent
    pub optional: &'static [EnvVar],
    pub messages: &'static [(MessageKind, &'static str)],
    pub scope: DistributionScope,
    pub requires_confirmation: bool,
}

impl CommandDescriptor {
    /// Message template for the given kind
    pub fn message(&self, kind: MessageKind) -> Option<&'static str> {
        self.messages
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, template)| *template)
    }

    /// Whether a synthesizer for this operation may read `var`
    pub fn consults(&self, var: EnvVar) -> bool {
        self.required.contains(&var) || self.optional.contains(&var)
    }
}
