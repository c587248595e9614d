//! Environment variables read from the deployment environment
//!
//! The names are the wire contract with the hosts the cluster runs on.

use serde::{Deserialize, Serialize};

/// A named external input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnvVar {
    /// Database installation home
    #[serde(rename = "GPHOME")]
    GpHome,
    /// PXF installation (runtime) home
    #[serde(rename = "PXF_HOME")]
    PxfHome,
    /// Base directory holding PXF configuration, libraries and servers
    #[serde(rename = "PXF_BASE")]
    PxfBase,
    /// Java runtime used by the PXF server
    #[serde(rename = "JAVA_HOME")]
    JavaHome,
    /// Legacy configuration directory, read by `migrate`
    #[serde(rename = "PXF_CONF")]
    PxfConf,
    /// `http` or `https`, read by `reload`
    #[serde(rename = "PXF_PROTOCOL")]
    PxfProtocol,
    /// Port of the local PXF server, read by `reload`
    #[serde(rename = "PXF_PORT")]
    PxfPort,
}

impl EnvVar {
    pub fn name(&self) -> &'static str {
        match self {
            EnvVar::GpHome => "GPHOME",
            EnvVar::PxfHome => "PXF_HOME",
            EnvVar::PxfBase => "PXF_BASE",
            EnvVar::JavaHome => "JAVA_HOME",
            EnvVar::PxfConf => "PXF_CONF",
            EnvVar::PxfProtocol => "PXF_PROTOCOL",
            EnvVar::PxfPort => "PXF_PORT",
        }
    }
}

impl std::fmt::Display for EnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
