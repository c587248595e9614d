//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PxfError, PxfResult};

use super::env_validator::{levenshtein, parse_bool, EnvVarValidator, BOOL_VALUES};
use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PxfResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PxfError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, the user config, or defaults
///
/// An explicit path must exist; a missing user config is not an error.
/// `PXF_CLUSTER_*` overrides are applied separately, once logging is up,
/// so their warnings are not lost.
pub fn discover(explicit: Option<&Path>) -> PxfResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match user_config_path().filter(|p| p.exists()) {
            Some(path) => load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((config, warnings))
}

/// `$XDG_CONFIG_HOME/pxf-cluster/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pxf-cluster").join("config.toml"))
}

/// Apply environment variable overrides (PXF_CLUSTER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // PXF_CLUSTER_DELETE_ON_SYNC
    if let Some(val) = lookup("PXF_CLUSTER_DELETE_ON_SYNC") {
        config.sync.delete = EnvVarValidator::new("PXF_CLUSTER_DELETE_ON_SYNC", BOOL_VALUES).parse(
            &val,
            parse_bool,
            config.sync.delete,
        );
    }

    // PXF_CLUSTER_AUTO_CONFIRM
    if let Some(val) = lookup("PXF_CLUSTER_AUTO_CONFIRM") {
        config.reload.auto_confirm = EnvVarValidator::new("PXF_CLUSTER_AUTO_CONFIRM", BOOL_VALUES)
            .parse(&val, parse_bool, config.reload.auto_confirm);
    }

    // PXF_CLUSTER_COORDINATOR
    if let Some(host) = lookup("PXF_CLUSTER_COORDINATOR").filter(|h| !h.trim().is_empty()) {
        config.cluster.coordinator = Some(host.trim().to_string());
    }

    // PXF_CLUSTER_SEGMENTS (comma-separated)
    if let Some(hosts) = lookup("PXF_CLUSTER_SEGMENTS") {
        let parsed: Vec<String> = hosts
            .split(',')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .collect();
        if !parsed.is_empty() {
            config.cluster.segments = parsed;
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cluster",
        "coordinator",
        "standby",
        "segments",
        "sync",
        "delete",
        "reload",
        "auto_confirm",
        "output",
        "verbosity",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
