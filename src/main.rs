//! pxf-cluster CLI
//!
//! Usage: pxf-cluster [--coordinator HOST] [--segment HOST...] <COMMAND>
//!
//! Validates the PXF environment, asks for confirmation where the operation
//! is destructive, and prints the command every targeted host would run.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use pxf_cluster::config::{Config, Verbosity};
use pxf_cluster::{
    ClusterTopology, ConfirmationGate, OperationRunner, PlanExecutor, ProcessEnvironment,
    ReloadTarget, SynthesisOptions,
};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn synthesis_options(command: &Commands, config: &Config) -> SynthesisOptions {
    match command {
        Commands::Sync { delete } => SynthesisOptions {
            delete_on_sync: *delete || config.sync.delete,
            ..Default::default()
        },
        Commands::Reset { yes } => SynthesisOptions {
            auto_confirm: *yes,
            ..Default::default()
        },
        Commands::Reload {
            profile,
            server,
            yes,
        } => SynthesisOptions {
            auto_confirm: *yes || config.reload.auto_confirm,
            reload: ReloadTarget {
                profile: profile.clone(),
                server: server.clone(),
            },
            ..Default::default()
        },
        _ => SynthesisOptions::default(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, warnings) = Config::discover(cli.config.as_deref())?;
    init_tracing(config.output.verbosity.raised_by(cli.verbose));
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    // after init, so invalid override values are reported
    let mut config = config.with_env_overrides();

    // CLI flags win over file and environment
    if cli.coordinator.is_some() {
        config.cluster.coordinator = cli.coordinator.clone();
    }
    if cli.standby.is_some() {
        config.cluster.standby = cli.standby.clone();
    }
    if !cli.segments.is_empty() {
        config.cluster.segments = cli.segments.clone();
    }

    let options = synthesis_options(&cli.command, &config);
    let executor = PlanExecutor::stdout(ClusterTopology::from_config(&config.cluster), cli.json);
    let env = ProcessEnvironment;
    let runner = OperationRunner::new(&env, &executor);
    let mut gate = ConfirmationGate::stdio();

    let prepared = runner.prepare(cli.command.operation(), &options, &mut gate)?;
    if !cli.json {
        println!("{}", prepared.status);
    }

    let summary = runner.execute(&prepared)?;
    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{}", summary.outcome);
    }

    summary.ensure_success()?;
    Ok(())
}
