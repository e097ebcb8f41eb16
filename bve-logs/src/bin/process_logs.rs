use anyhow::Result;
use bve_logs::{ColumnSelector, LogSet, ReturnCurve, DEFAULT_RETURN_COLUMN, DEFAULT_STEP_COLUMN};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Summarizes the logs of an experiment and plots evaluation returns.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory holding actor/, evaluator/ and learner/ logs
    #[arg(long = "results_dir")]
    results_dir: PathBuf,

    /// Step column of the evaluator log, a header or a position
    #[arg(long = "step_column", default_value = DEFAULT_STEP_COLUMN)]
    step_column: ColumnSelector,

    /// Return column of the evaluator log, a header or a position
    #[arg(long = "return_column", default_value = DEFAULT_RETURN_COLUMN)]
    return_column: ColumnSelector,

    /// Path of the plot, not rendered if omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let logs = LogSet::load(&args.results_dir)?;
    match logs.learner.last_row() {
        Some(row) => {
            let fields: Vec<String> = logs
                .learner
                .header()
                .iter()
                .zip(row)
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            info!("Last learner row: {}", fields.join(" | "));
        }
        None => info!("Learner log is empty"),
    }

    let curve = ReturnCurve::from_table(&logs.evaluator, &args.step_column, &args.return_column)?
        .title("Evaluation episode returns")
        .labels("Actor steps", "Episode return");
    info!("Read {} evaluation points", curve.len());
    if let (Some(step), Some(ret)) = (curve.steps().last(), curve.returns().last()) {
        info!("Last evaluation: {} steps, return {}", step, ret);
    }

    if let Some(output) = &args.output {
        curve.save(output)?;
    }
    Ok(())
}
