//! Environment validation
//!
//! Resolves a descriptor's variables against an `EnvironmentSource`. Required
//! variables are checked in declaration order and the first one that is unset
//! or blank aborts validation.

use crate::domain::entities::{BoundEnvironment, CommandDescriptor};
use crate::domain::ports::EnvironmentSource;
use crate::error::{PxfError, PxfResult};

/// Bind every variable `descriptor` consults
pub fn validate<E>(descriptor: &CommandDescriptor, source: &E) -> PxfResult<BoundEnvironment>
where
    E: EnvironmentSource + ?Sized,
{
    let mut bound = BoundEnvironment::new();

    for &var in descriptor.required {
        match source.lookup(var) {
            None => return Err(PxfError::MissingVariable { var }),
            Some(value) if value.is_empty() => return Err(PxfError::BlankVariable { var }),
            Some(value) => bound.bind(var, value),
        }
    }

    for &var in descriptor.optional {
        if let Some(value) = source.lookup(var).filter(|v| !v.is_empty()) {
            bound.bind(var, value);
        }
    }

    tracing::debug!(
        operation = %descriptor.operation,
        bound = bound.len(),
        "environment validated"
    );
    Ok(bound)
}
