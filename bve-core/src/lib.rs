#![warn(missing_docs)]
//! Core abstractions for assembling and running value-based RL experiments.
//!
//! An experiment is an [`ExperimentConfig`](experiment::ExperimentConfig)
//! bundling a [`Builder`], an [`EnvironmentFactory`] and a [`NetworkFactory`].
//! It is either laid out as a [`DistributedProgram`](experiment::DistributedProgram)
//! for a [`Launcher`](experiment::Launcher) or run in the current process by a
//! [`Runner`](experiment::Runner), see [`experiment::dispatch`].
//! Metrics flow through the loggers of the [`record`] module.
pub mod dummy;
pub mod error;
pub mod experiment;
pub mod record;

mod base;
pub use base::{
    Actor, Builder, Environment, EnvironmentFactory, EnvironmentSpec, Learner, NetworkFactory,
    StepType, TimeStep,
};
pub use record::{Record, RecordValue};
