//! Networks of BVE agent.
use crate::EpsilonGreedy;
use anyhow::Result;

/// Maps an observation to one value per action.
pub trait ActionValueNetwork<O> {
    /// Returns the action values of an observation.
    fn action_values(&self, obs: &O) -> Result<Vec<f32>>;
}

/// A policy network and the function sampling actions from its outputs.
pub struct BveNetworks<P> {
    /// Network giving the action values.
    pub policy_network: P,

    /// Samples an action from action values with a given epsilon.
    pub sample_fn: fn(&[f32], f64) -> usize,
}

impl<P> BveNetworks<P> {
    /// Bundles a policy network with epsilon-greedy sampling.
    pub fn new(policy_network: P) -> Self {
        Self {
            policy_network,
            sample_fn: EpsilonGreedy::select,
        }
    }

    /// Samples an action for an observation.
    pub fn sample<O>(&self, obs: &O, epsilon: f64) -> Result<usize>
    where
        P: ActionValueNetwork<O>,
    {
        let values = self.policy_network.action_values(obs)?;
        Ok((self.sample_fn)(&values, epsilon))
    }
}
