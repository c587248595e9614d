//! Command descriptor catalog
//!
//! One static descriptor per operation. Message templates use named
//! placeholders that `report` fills in:
//!
//! - `{ok}`, `{failed}`, `{total}` - host counts after execution
//! - `{segments}` - number of segment hosts before execution
//! - `{standby}` - the descriptor's `Standby` fragment, or nothing
//! - `{s}` - plural suffix for the count in the same message

use crate::domain::entities::CommandDescriptor;
use crate::domain::value_objects::{DistributionScope, EnvVar, Operation};

use crate::domain::value_objects::MessageKind::{Error, Standby, Status, Success, Warning};

const STANDBY_NOTE: &str = ", standby coordinator host,";

static INIT: CommandDescriptor = CommandDescriptor {
    operation: Operation::Init,
    required: &[EnvVar::GpHome, EnvVar::PxfHome, EnvVar::JavaHome],
    optional: &[],
    messages: &[
        (Success, "PXF initialized successfully on {ok} out of {total} host{s}"),
        (
            Status,
            "*****************************************************************************\n\
             * DEPRECATION NOTICE:\n\
             * The \"pxf cluster init\" command is deprecated and will be removed\n\
             * in a future release of PXF.\n\
             *\n\
             * Use the \"pxf cluster register\" command instead.\n\
             *\n\
             *****************************************************************************\n\n\
             Initializing PXF on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (Error, "PXF failed to initialize on {failed} out of {total} host{s}"),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: false,
};

static START: CommandDescriptor = CommandDescriptor {
    operation: Operation::Start,
    required: &[EnvVar::PxfHome, EnvVar::PxfBase],
    optional: &[],
    messages: &[
        (Success, "PXF started successfully on {ok} out of {total} host{s}"),
        (
            Status,
            "Starting PXF on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (Error, "PXF failed to start on {failed} out of {total} host{s}"),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: false,
};

static STOP: CommandDescriptor = CommandDescriptor {
    operation: Operation::Stop,
    required: &[EnvVar::PxfHome, EnvVar::PxfBase],
    optional: &[],
    messages: &[
        (Success, "PXF stopped successfully on {ok} out of {total} host{s}"),
        (
            Status,
            "Stopping PXF on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (Error, "PXF failed to stop on {failed} out of {total} host{s}"),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: false,
};

// Files already live on the coordinator, so sync runs there and targets
// every other host, standby included.
static SYNC: CommandDescriptor = CommandDescriptor {
    operation: Operation::Sync,
    required: &[EnvVar::PxfBase],
    optional: &[],
    messages: &[
        (Success, "PXF configs synced successfully on {ok} out of {total} host{s}"),
        (
            Status,
            "Syncing PXF configuration files from coordinator host to{standby} {segments} segment host{s}...",
        ),
        (Standby, " standby coordinator host and"),
        (Error, "PXF configs failed to sync on {failed} out of {total} host{s}"),
    ],
    scope: DistributionScope::from_coordinator(),
    requires_confirmation: false,
};

static STATUS: CommandDescriptor = CommandDescriptor {
    operation: Operation::Status,
    required: &[EnvVar::PxfHome, EnvVar::PxfBase],
    optional: &[],
    messages: &[
        (Success, "PXF is running on {ok} out of {total} host{s}"),
        (
            Status,
            "Checking status of PXF servers on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (Error, "PXF is not running on {failed} out of {total} host{s}"),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: false,
};

static RESET: CommandDescriptor = CommandDescriptor {
    operation: Operation::Reset,
    required: &[EnvVar::PxfHome],
    optional: &[],
    messages: &[
        (Success, "PXF has been reset on {ok} out of {total} host{s}"),
        (
            Status,
            "*****************************************************************************\n\
             * DEPRECATION NOTICE:\n\
             * The \"pxf cluster reset\" command is deprecated and will be removed\n\
             * in a future release of PXF.\n\
             *****************************************************************************\n\n\
             Resetting PXF on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (Error, "Failed to reset PXF on {failed} out of {total} host{s}"),
        (
            Warning,
            "Ensure your PXF cluster is stopped before continuing. \
             This is a destructive action. Press y to continue: ",
        ),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: true,
};

static REGISTER: CommandDescriptor = CommandDescriptor {
    operation: Operation::Register,
    required: &[EnvVar::GpHome, EnvVar::PxfHome],
    optional: &[],
    messages: &[
        (Success, "PXF extension has been installed on {ok} out of {total} host{s}"),
        (
            Status,
            "Installing PXF extension on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (Error, "Failed to install PXF extension on {failed} out of {total} host{s}"),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: false,
};

static RESTART: CommandDescriptor = CommandDescriptor {
    operation: Operation::Restart,
    required: &[EnvVar::PxfHome, EnvVar::PxfBase],
    optional: &[],
    messages: &[
        (Success, "PXF restarted successfully on {ok} out of {total} host{s}"),
        (
            Status,
            "Restarting PXF on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (Error, "PXF failed to restart on {failed} out of {total} host{s}"),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: false,
};

static PREPARE: CommandDescriptor = CommandDescriptor {
    operation: Operation::Prepare,
    required: &[EnvVar::PxfHome, EnvVar::PxfBase],
    optional: &[],
    messages: &[
        (Success, "PXF prepared successfully on {ok} out of {total} host{s}"),
        (
            Status,
            "Preparing PXF on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (Error, "PXF failed to prepare on {failed} out of {total} host{s}"),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: false,
};

static MIGRATE: CommandDescriptor = CommandDescriptor {
    operation: Operation::Migrate,
    required: &[EnvVar::PxfHome, EnvVar::PxfConf, EnvVar::PxfBase],
    optional: &[],
    messages: &[
        (
            Success,
            "PXF configuration migrated successfully on {ok} out of {total} host{s}",
        ),
        (
            Status,
            "Migrating PXF configuration on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (
            Error,
            "PXF failed to migrate configuration on {failed} out of {total} host{s}",
        ),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: false,
};

static RELOAD: CommandDescriptor = CommandDescriptor {
    operation: Operation::Reload,
    required: &[EnvVar::PxfBase],
    optional: &[EnvVar::PxfProtocol, EnvVar::PxfPort],
    messages: &[
        (Success, "PXF successfully reloaded profiles on {ok} out of {total} host{s}"),
        (
            Status,
            "PXF is reloading profiles on coordinator host{standby} and {segments} segment host{s}...",
        ),
        (Standby, STANDBY_NOTE),
        (
            Error,
            "PXF failed to reload profile on {failed} out of {total} host{s}. \
             Check the PXF logs located in the '$PXF_BASE/logs' directory",
        ),
        (
            Warning,
            "Do you really want to reload profile(s) and terminate all related queries? \
             Yy|Nn (default=N):",
        ),
    ],
    scope: DistributionScope::all_hosts(),
    requires_confirmation: true,
};

/// Descriptor for `op`
pub fn descriptor(op: Operation) -> &'static CommandDescriptor {
    match op {
        Operation::Init => &INIT,
        Operation::Start => &START,
        Operation::Stop => &STOP,
        Operation::Sync => &SYNC,
        Operation::Status => &STATUS,
        Operation::Reset => &RESET,
        Operation::Register => &REGISTER,
        Operation::Restart => &RESTART,
        Operation::Prepare => &PREPARE,
        Operation::Migrate => &MIGRATE,
        Operation::Reload => &RELOAD,
    }
}

/// Every descriptor, in catalog order
pub fn all() -> impl Iterator<Item = &'static CommandDescriptor> {
    Operation::ALL.into_iter().map(descriptor)
}
