//! Command synthesis
//!
//! Turns a descriptor and its bound environment into the command each target
//! host runs. Dispatch goes through a small strategy table: `sync` and
//! `reload` have their own command shapes, every other operation invokes the
//! `pxf` binary directly.

use serde::{Deserialize, Serialize};

use crate::config::EnvVarValidator;
use crate::domain::entities::{BoundEnvironment, CommandDescriptor, SynthesizedCommand};
use crate::domain::value_objects::{EnvVar, Operation};
use crate::error::{PxfError, PxfResult};

/// Protocol used by `reload` when `PXF_PROTOCOL` is unset
pub const DEFAULT_RELOAD_PROTOCOL: &str = "http";
/// Port used by `reload` when `PXF_PORT` is unset
pub const DEFAULT_RELOAD_PORT: &str = "5888";
/// Reload is never sent to another host; each host reloads itself
pub const RELOAD_HOST: &str = "localhost";

const RELOAD_PROTOCOLS: &[&str] = &["http", "https"];

/// Environment assignments prefixed to a `pxf` invocation, in this order
const PREFIXED_VARS: [EnvVar; 4] = [
    EnvVar::GpHome,
    EnvVar::PxfConf,
    EnvVar::PxfBase,
    EnvVar::JavaHome,
];

/// Which profile and server `reload` acts on; empty means all
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReloadTarget {
    pub profile: String,
    pub server: String,
}

/// Per-invocation overrides supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Pass `--delete` to rsync during `sync`
    pub delete_on_sync: bool,
    /// Skip the confirmation gate
    pub auto_confirm: bool,
    pub reload: ReloadTarget,
}

/// One synthesis strategy
pub type Strategy =
    fn(&CommandDescriptor, &BoundEnvironment, &SynthesisOptions) -> PxfResult<SynthesizedCommand>;

/// Strategy used for `op`
pub fn strategy_for(op: Operation) -> Strategy {
    match op {
        Operation::Sync => sync_command,
        Operation::Reload => reload_command,
        Operation::Init
        | Operation::Start
        | Operation::Stop
        | Operation::Status
        | Operation::Reset
        | Operation::Register
        | Operation::Restart
        | Operation::Prepare
        | Operation::Migrate => pxf_command,
    }
}

/// Build the command for `descriptor`
pub fn synthesize(
    descriptor: &CommandDescriptor,
    env: &BoundEnvironment,
    options: &SynthesisOptions,
) -> PxfResult<SynthesizedCommand> {
    let command = strategy_for(descriptor.operation)(descriptor, env, options)?;
    match command.as_shared() {
        Some(shared) => tracing::debug!(operation = %descriptor.operation, command = shared, "synthesized"),
        None => tracing::debug!(operation = %descriptor.operation, "synthesized per-host command"),
    }
    Ok(command)
}

fn read<'e>(descriptor: &CommandDescriptor, env: &'e BoundEnvironment, var: EnvVar) -> &'e str {
    debug_assert!(
        descriptor.consults(var),
        "{} reads undeclared {}",
        descriptor.operation,
        var
    );
    env.get_or_empty(var)
}

/// Wrap `value` in single quotes for a POSIX shell
///
/// An embedded `'` closes the quote, emits an escaped quote and reopens.
fn single_quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn sync_command(
    descriptor: &CommandDescriptor,
    env: &BoundEnvironment,
    options: &SynthesisOptions,
) -> PxfResult<SynthesizedCommand> {
    let base = read(descriptor, env, EnvVar::PxfBase).to_string();
    let delete = if options.delete_on_sync { " --delete" } else { "" };

    let sources = ["conf", "lib", "servers"]
        .map(|dir| single_quoted(&format!("{base}/{dir}")))
        .join(" ");

    Ok(SynthesizedCommand::per_host(move |host| {
        format!(
            "rsync -az{delete} -e 'ssh -o StrictHostKeyChecking=no' {sources} {}",
            single_quoted(&format!("{host}:{base}"))
        )
    }))
}

fn reload_command(
    descriptor: &CommandDescriptor,
    env: &BoundEnvironment,
    options: &SynthesisOptions,
) -> PxfResult<SynthesizedCommand> {
    let protocol = env
        .get(EnvVar::PxfProtocol)
        .filter(|_| descriptor.consults(EnvVar::PxfProtocol))
        .unwrap_or(DEFAULT_RELOAD_PROTOCOL);
    let port = env
        .get(EnvVar::PxfPort)
        .filter(|_| descriptor.consults(EnvVar::PxfPort))
        .unwrap_or(DEFAULT_RELOAD_PORT);

    EnvVarValidator::new(EnvVar::PxfProtocol.name(), RELOAD_PROTOCOLS).check(protocol);

    let tls = if protocol == "https" {
        "-k --cacert ${PXF_SSL_CACERT} --cert ${PXF_SSL_CERT} --key ${PXF_SSL_KEY} "
    } else {
        ""
    };
    let body = serde_json::json!({
        "profile": options.reload.profile,
        "server": options.reload.server,
    });

    let command = format!(
        "curl {tls}--silent --fail --show-error --request POST \
         {protocol}://{RELOAD_HOST}:{port}/pxf/reload \
         --header \"Content-Type: application/json\" --data {}",
        single_quoted(&body.to_string())
    );
    tracing::info!("Execute command: {}", command);
    Ok(SynthesizedCommand::Shared(command))
}

fn pxf_command(
    descriptor: &CommandDescriptor,
    env: &BoundEnvironment,
    _options: &SynthesisOptions,
) -> PxfResult<SynthesizedCommand> {
    let mut command = String::new();
    for var in PREFIXED_VARS {
        if !descriptor.consults(var) {
            continue;
        }
        if let Some(value) = env.get(var) {
            command.push_str(&format!("{}={} ", var, value));
        }
    }

    let pxf_home = read(descriptor, env, EnvVar::PxfHome);
    command.push_str(&format!("{}/bin/pxf {}", pxf_home, descriptor.operation.subcommand()));

    // PXF_BASE falls back to PXF_HOME when unset
    let effective_base = env
        .get(EnvVar::PxfBase)
        .filter(|_| descriptor.consults(EnvVar::PxfBase))
        .unwrap_or(pxf_home);

    match descriptor.operation {
        Operation::Prepare if pxf_home == effective_base => {
            return Err(PxfError::ConfigurationConflict {
                message: "the PXF_BASE value must be different from your PXF installation directory"
                    .to_string(),
            });
        }
        Operation::Migrate if read(descriptor, env, EnvVar::PxfConf) == effective_base => {
            return Err(PxfError::ConfigurationConflict {
                message: "your target PXF_BASE directory must be different from your existing PXF_CONF directory"
                    .to_string(),
            });
        }
        // the local reset prompts too; the cluster already asked
        Operation::Reset => command.push_str(" --force"),
        _ => {}
    }

    Ok(SynthesizedCommand::Shared(command))
}
