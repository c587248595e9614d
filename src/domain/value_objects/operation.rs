//! Operation value object - the administrative actions pxf-cluster knows

use serde::{Deserialize, Serialize};

/// One named administrative action performable cluster-wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Initialize PXF (deprecated in favour of `register`)
    Init,
    Start,
    Stop,
    /// Copy configuration from the coordinator to every other host
    Sync,
    Status,
    /// Reset PXF to an uninitialized state (deprecated)
    Reset,
    /// Install the PXF extension into the database
    Register,
    Restart,
    /// Create a new PXF_BASE directory layout
    Prepare,
    /// Move configuration from PXF_CONF into PXF_BASE
    Migrate,
    /// Reload profiles on every running PXF server
    Reload,
}

impl Operation {
    /// Every operation, in catalog order
    pub const ALL: [Operation; 11] = [
        Operation::Init,
        Operation::Start,
        Operation::Stop,
        Operation::Sync,
        Operation::Status,
        Operation::Reset,
        Operation::Register,
        Operation::Restart,
        Operation::Prepare,
        Operation::Migrate,
        Operation::Reload,
    ];

    /// The subcommand passed to the `pxf` binary
    pub fn subcommand(&self) -> &'static str {
        match self {
            Operation::Init => "init",
            Operation::Start => "start",
            Operation::Stop => "stop",
            Operation::Sync => "sync",
            Operation::Status => "status",
            Operation::Reset => "reset",
            Operation::Register => "register",
            Operation::Restart => "restart",
            Operation::Prepare => "prepare",
            Operation::Migrate => "migrate",
            Operation::Reload => "reload",
        }
    }

    /// Parse a subcommand name back into an operation
    pub fn from_subcommand(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.subcommand() == name)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.subcommand())
    }
}
