//! Configuration of DQN agent.
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Hyperparameters of [`DqnBuilder`](super::DqnBuilder).
///
/// Values are passed through unchanged; nothing is validated here.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct DqnConfig {
    /// Epsilon of the training actors.
    pub epsilon: f64,

    /// Epsilon of the evaluation actor. Falls back to `epsilon` if not set.
    #[serde(default)]
    pub eval_epsilon: Option<f64>,

    /// Random seed of the agent.
    pub seed: u64,

    /// Learning rate of the optimizer.
    pub learning_rate: f64,

    /// Epsilon of the Adam optimizer.
    pub adam_eps: f64,

    /// Discount factor.
    pub discount: f64,

    /// Length of the bootstrapped returns.
    pub n_step: usize,

    /// Interval of target network updates in learner steps.
    pub target_update_period: usize,

    /// Maximum norm of gradients.
    pub max_gradient_norm: f64,

    /// Batch size.
    pub batch_size: usize,

    /// Number of items in the replay buffer before learning starts.
    pub min_replay_size: usize,

    /// Capacity of the replay buffer.
    pub max_replay_size: usize,

    /// Exponent of importance sampling weights.
    pub importance_sampling_exponent: f64,

    /// Exponent of sampling priorities.
    pub priority_exponent: f64,

    /// Ratio of sampled to inserted items.
    pub samples_per_insert: f64,

    /// Allowed deviation from `samples_per_insert`.
    pub samples_per_insert_tolerance_rate: f64,

    /// Number of SGD steps per learner step.
    pub num_sgd_steps_per_step: usize,
}

impl Default for DqnConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.05,
            eval_epsilon: None,
            seed: 1,
            learning_rate: 1e-3,
            adam_eps: 1e-8,
            discount: 0.99,
            n_step: 5,
            target_update_period: 100,
            max_gradient_norm: f64::INFINITY,
            batch_size: 256,
            min_replay_size: 1_000,
            max_replay_size: 1_000_000,
            importance_sampling_exponent: 0.2,
            priority_exponent: 0.6,
            samples_per_insert: 0.5,
            samples_per_insert_tolerance_rate: 0.1,
            num_sgd_steps_per_step: 1,
        }
    }
}

impl DqnConfig {
    /// Sets epsilon of the training actors.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.epsilon = v;
        self
    }

    /// Sets epsilon of the evaluation actor.
    pub fn eval_epsilon(mut self, v: f64) -> Self {
        self.eval_epsilon = Some(v);
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, v: f64) -> Self {
        self.learning_rate = v;
        self
    }

    /// Sets epsilon of the Adam optimizer.
    pub fn adam_eps(mut self, v: f64) -> Self {
        self.adam_eps = v;
        self
    }

    /// Sets the discount factor.
    pub fn discount(mut self, v: f64) -> Self {
        self.discount = v;
        self
    }

    /// Sets the length of the bootstrapped returns.
    pub fn n_step(mut self, v: usize) -> Self {
        self.n_step = v;
        self
    }

    /// Sets the interval of target network updates.
    pub fn target_update_period(mut self, v: usize) -> Self {
        self.target_update_period = v;
        self
    }

    /// Sets the maximum norm of gradients.
    pub fn max_gradient_norm(mut self, v: f64) -> Self {
        self.max_gradient_norm = v;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the replay size at which learning starts.
    pub fn min_replay_size(mut self, v: usize) -> Self {
        self.min_replay_size = v;
        self
    }

    /// Sets the capacity of the replay buffer.
    pub fn max_replay_size(mut self, v: usize) -> Self {
        self.max_replay_size = v;
        self
    }

    /// Sets the exponent of importance sampling weights.
    pub fn importance_sampling_exponent(mut self, v: f64) -> Self {
        self.importance_sampling_exponent = v;
        self
    }

    /// Sets the exponent of sampling priorities.
    pub fn priority_exponent(mut self, v: f64) -> Self {
        self.priority_exponent = v;
        self
    }

    /// Sets the ratio of sampled to inserted items.
    pub fn samples_per_insert(mut self, v: f64) -> Self {
        self.samples_per_insert = v;
        self
    }

    /// Sets the allowed deviation from `samples_per_insert`.
    pub fn samples_per_insert_tolerance_rate(mut self, v: f64) -> Self {
        self.samples_per_insert_tolerance_rate = v;
        self
    }

    /// Sets the number of SGD steps per learner step.
    pub fn num_sgd_steps_per_step(mut self, v: usize) -> Self {
        self.num_sgd_steps_per_step = v;
        self
    }

    /// Epsilon used by evaluation actors.
    pub fn evaluation_epsilon(&self) -> f64 {
        self.eval_epsilon.unwrap_or(self.epsilon)
    }

    /// Loads [`DqnConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        info!("Load config of DQN agent from {}", path_.display());
        Ok(b)
    }

    /// Saves [`DqnConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path_ = path.as_ref().to_owned();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save config of DQN agent into {}", path_.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn evaluation_epsilon_falls_back() {
        let config = DqnConfig::default().epsilon(0.3);
        assert_eq!(config.evaluation_epsilon(), 0.3);
        assert_eq!(config.eval_epsilon(0.0).evaluation_epsilon(), 0.0);
    }

    #[test]
    fn save_and_load() -> Result<()> {
        let config = DqnConfig::default()
            .learning_rate(5e-5)
            .n_step(1)
            .target_update_period(2000)
            .samples_per_insert(8.0);
        let dir = TempDir::new("dqn_config")?;
        let path = dir.path().join("dqn_config.yaml");
        config.save(&path)?;
        assert_eq!(DqnConfig::load(&path)?, config);
        Ok(())
    }
}
