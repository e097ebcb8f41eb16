mod args;
mod config;
mod helpers;
mod plot;
use anyhow::Result;
use args::Args;
use bve_core::{
    experiment::{dispatch, ExecutionMode, ManifestLauncher, ManifestRunner},
    record::LoggerRegistry,
};
use clap::Parser;
use config::build_experiment_config;
use log::info;
use plot::plot_evaluator_returns;
use std::sync::Arc;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let registry = LoggerRegistry::new()
        .csv_dir(&args.results_dir)
        .terminal(true);
    let experiment = build_experiment_config(&args, Arc::new(registry.clone()));

    if args.show_config {
        println!("{}", serde_yaml::to_string(&experiment)?);
        return Ok(());
    }

    let mode = ExecutionMode::from_flags(args.run_distributed, args.num_actors);
    dispatch(
        experiment,
        mode,
        &ManifestRunner::new(&args.results_dir),
        &ManifestLauncher::new(&args.results_dir),
    )?;

    if mode == ExecutionMode::SingleProcess {
        plot_evaluator_returns(&registry, &args.plot_path)?;
        info!("Saved evaluation returns to {}", args.plot_path.display());
    }
    Ok(())
}
