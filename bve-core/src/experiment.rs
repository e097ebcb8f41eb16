//! Assembly and execution of experiments.
mod config;
mod dispatch;
mod distributed;
mod manifest;
mod runner;
pub use config::ExperimentConfig;
pub use dispatch::{dispatch, ExecutionMode};
pub use distributed::{
    make_distributed_experiment, DistributedProgram, Launcher, NodeGroup, ProgramNode,
};
pub use manifest::{ManifestLauncher, ManifestRunner, EXPERIMENT_MANIFEST, PROGRAM_MANIFEST};
pub use runner::{Runner, SequentialRunner};
