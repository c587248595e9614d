//! Message kinds a descriptor can report with

use serde::Serialize;

/// Outcome kind a message template is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Every host succeeded
    Success,
    /// Printed before the operation fans out
    Status,
    /// At least one host failed
    Error,
    /// Confirmation prompt text
    Warning,
    /// Fragment spliced into the status message when a standby is targeted
    Standby,
}
