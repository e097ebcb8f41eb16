//! Core abstractions of an experiment.
mod agent;
mod builder;
mod env;
mod factory;
pub use agent::{Actor, Learner};
pub use builder::Builder;
pub use env::{Environment, EnvironmentSpec, StepType, TimeStep};
pub use factory::{EnvironmentFactory, NetworkFactory};
