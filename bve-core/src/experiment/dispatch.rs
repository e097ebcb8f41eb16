//! Choice between distributed and single-process execution.
use super::{make_distributed_experiment, DistributedProgram, ExperimentConfig, Launcher, Runner};
use anyhow::Result;
use log::info;

/// How an experiment is executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionMode {
    /// As a distributed program with the given number of actors.
    Distributed {
        /// Number of actor nodes.
        num_actors: usize,
    },

    /// In the current process.
    SingleProcess,
}

impl ExecutionMode {
    /// Maps command-line flags to a mode.
    pub fn from_flags(run_distributed: bool, num_actors: usize) -> Self {
        if run_distributed {
            Self::Distributed { num_actors }
        } else {
            Self::SingleProcess
        }
    }
}

/// Hands an experiment to exactly one of `launcher` and `runner`.
///
/// Errors of the chosen collaborator are returned unchanged.
pub fn dispatch<E, N, B, R, L>(
    experiment: ExperimentConfig<E, N, B>,
    mode: ExecutionMode,
    runner: &R,
    launcher: &L,
) -> Result<()>
where
    R: Runner<ExperimentConfig<E, N, B>>,
    L: Launcher<DistributedProgram<E, N, B>>,
{
    match mode {
        ExecutionMode::Distributed { num_actors } => {
            info!("Launch distributed program with {} actors", num_actors);
            launcher.launch(make_distributed_experiment(experiment, num_actors))
        }
        ExecutionMode::SingleProcess => {
            info!("Run experiment in a single process");
            runner.run(experiment)
        }
    }
}
