//! Domain Services
//!
//! The catalog, environment validation, the confirmation gate, command
//! synthesis and message rendering. Only the confirmation gate touches I/O,
//! and only through the streams it is handed.

pub mod catalog;
mod confirmation;
mod env_validator;
mod report;
mod synthesizer;

pub use catalog::descriptor;
pub use confirmation::{parse_answer, Confirmation, ConfirmationGate};
pub use env_validator::validate;
pub use report::{outcome_report, status_report};
pub use synthesizer::{
    strategy_for, synthesize, ReloadTarget, Strategy, SynthesisOptions, DEFAULT_RELOAD_PORT,
    DEFAULT_RELOAD_PROTOCOL, RELOAD_HOST,
};
