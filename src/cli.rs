use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pxf_cluster::Operation;

/// pxf-cluster - run PXF administration commands across a cluster
#[derive(Parser, Debug)]
#[command(name = "pxf-cluster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for automation (NDJSON plan + JSON summary)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ~/.config/pxf-cluster/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Coordinator host name
    #[arg(long, global = true)]
    pub coordinator: Option<String>,

    /// Standby coordinator host name
    #[arg(long, global = true)]
    pub standby: Option<String>,

    /// Segment host names (repeatable or comma separated)
    #[arg(long = "segment", value_delimiter = ',', global = true)]
    pub segments: Vec<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize PXF on every host (deprecated, use register)
    Init,

    /// Start the PXF server on every host
    Start,

    /// Stop the PXF server on every host
    Stop,

    /// Copy PXF_BASE conf, lib and servers from the coordinator to every other host
    Sync {
        /// Delete files on the other hosts that no longer exist on the coordinator
        #[arg(short, long)]
        delete: bool,
    },

    /// Check whether the PXF server runs on every host
    Status,

    /// Reset PXF on every host (deprecated)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Install the PXF extension on every host
    Register,

    /// Restart the PXF server on every host
    Restart,

    /// Create the PXF_BASE directory layout on every host
    Prepare,

    /// Migrate configuration from PXF_CONF to PXF_BASE on every host
    Migrate,

    /// Reload profiles on every running PXF server
    Reload {
        /// Only reload this profile
        #[arg(short, long, default_value = "")]
        profile: String,

        /// Only reload this server configuration
        #[arg(short, long, default_value = "")]
        server: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl Commands {
    pub fn operation(&self) -> Operation {
        match self {
            Commands::Init => Operation::Init,
            Commands::Start => Operation::Start,
            Commands::Stop => Operation::Stop,
            Commands::Sync { .. } => Operation::Sync,
            Commands::Status => Operation::Status,
            Commands::Reset { .. } => Operation::Reset,
            Commands::Register => Operation::Register,
            Commands::Restart => Operation::Restart,
            Commands::Prepare => Operation::Prepare,
            Commands::Migrate => Operation::Migrate,
            Commands::Reload { .. } => Operation::Reload,
        }
    }
}
