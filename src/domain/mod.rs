//! Domain Layer
//!
//! The command descriptor model and the command-synthesis engine, free of any
//! transport concerns.
//!
//! ## Structure
//!
//! - `value_objects/` - Operation, EnvVar, MessageKind, DistributionScope
//! - `entities/` - CommandDescriptor, BoundEnvironment, SynthesizedCommand
//! - `services/` - catalog, validation, confirmation, synthesis, reports
//! - `ports/` - where variables come from, who runs the commands

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
