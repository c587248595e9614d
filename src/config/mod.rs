//! Configuration module for pxf-cluster
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PXF_CLUSTER_*)
//! 3. Config file (`--config`, or ~/.config/pxf-cluster/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! The PXF variables themselves (`PXF_HOME`, `PXF_BASE`, ...) are not
//! configuration; they are read per operation by the environment validator.

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, parse_bool, EnvVarValidator};
pub use loader::{user_config_path, with_env_overrides_from, ConfigWarning};
pub use types::{ClusterConfig, Config, OutputConfig, ReloadConfig, SyncConfig, Verbosity};
