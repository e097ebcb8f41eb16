//! Factories of environments and networks.
use super::{Environment, EnvironmentSpec};
use anyhow::Result;

/// Builds environments.
pub trait EnvironmentFactory {
    /// Environment built by the factory.
    type Env: Environment;

    /// Builds an environment with a given random seed.
    fn make(&self, seed: u64) -> Result<Self::Env>;
}

/// Builds the networks of an agent for an environment.
pub trait NetworkFactory {
    /// Networks built by the factory.
    type Networks;

    /// Builds networks fitting the given environment spec.
    fn make(&self, spec: &EnvironmentSpec) -> Result<Self::Networks>;
}
