//! Synthesized command - what each target host will run

type HostCommandFn = dyn Fn(&str) -> String + Send + Sync;

/// A ready-to-execute command line
///
/// Built fresh for every invocation and consumed by the cluster executor.
pub enum SynthesizedCommand {
    /// Same command on every target host
    Shared(String),
    /// Command that embeds the target host name
    PerHost(Box<HostCommandFn>),
}

impl SynthesizedCommand {
    pub fn per_host<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        SynthesizedCommand::PerHost(Box::new(f))
    }

    /// The command to run for `host`
    pub fn for_host(&self, host: &str) -> String {
        match self {
            SynthesizedCommand::Shared(command) => command.clone(),
            SynthesizedCommand::PerHost(f) => f(host),
        }
    }

    /// The shared command, if this command does not vary per host
    pub fn as_shared(&self) -> Option<&str> {
        match self {
            SynthesizedCommand::Shared(command) => Some(command),
            SynthesizedCommand::PerHost(_) => None,
        }
    }

    pub fn is_per_host(&self) -> bool {
        matches!(self, SynthesizedCommand::PerHost(_))
    }
}

impl std::fmt::Debug for SynthesizedCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthesizedCommand::Shared(command) => f.debug_tuple("Shared").field(command).finish(),
            SynthesizedCommand::PerHost(_) => f.write_str("PerHost(<fn>)"),
        }
    }
}
