//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PxfResult;

use super::loader::{self, ConfigWarning};

/// Hosts that make up the cluster
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClusterConfig {
    #[serde(default)]
    pub coordinator: Option<String>,

    #[serde(default)]
    pub standby: Option<String>,

    #[serde(default)]
    pub segments: Vec<String>,
}

/// `sync` defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SyncConfig {
    /// Remove files on the targets that no longer exist on the coordinator
    #[serde(default)]
    pub delete: bool,
}

/// `reload` defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReloadConfig {
    /// Skip the confirmation prompt
    #[serde(default)]
    pub auto_confirm: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the configured level by the number of `-v` flags
    pub fn raised_by(self, count: u8) -> Self {
        match (self as u8).saturating_add(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }

    /// `tracing` filter directive for this level
    pub fn filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub cluster: ClusterConfig,

    #[serde(default)]
    pub sync: SyncConfig,

    #[serde(default)]
    pub reload: ReloadConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load from an explicit path, the user config, or defaults
    ///
    /// Does not apply `PXF_CLUSTER_*` overrides; see `with_env_overrides`.
    pub fn discover(explicit: Option<&Path>) -> PxfResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit)
    }

    /// Apply environment variable overrides (PXF_CLUSTER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
