//! Configuration of BVE agent.
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Hyperparameters of [`BveBuilder`](super::BveBuilder).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct BveConfig {
    /// Epsilon of the actors.
    pub epsilon: f64,

    /// Random seed of the agent.
    pub seed: u64,

    /// Learning rate of the optimizer.
    pub learning_rate: f64,

    /// Epsilon of the Adam optimizer.
    pub adam_eps: f64,

    /// Discount factor.
    pub discount: f64,

    /// Interval of target network updates in learner steps.
    pub target_update_period: usize,

    /// Maximum norm of gradients.
    pub max_gradient_norm: f64,

    /// Number of SGD steps per learner step.
    pub num_sgd_steps_per_step: usize,
}

impl Default for BveConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.0,
            seed: 1,
            learning_rate: 3e-4,
            adam_eps: 1.5e-4,
            discount: 0.99,
            target_update_period: 2500,
            max_gradient_norm: f64::INFINITY,
            num_sgd_steps_per_step: 1,
        }
    }
}

impl BveConfig {
    /// Sets epsilon of the actors.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.epsilon = v;
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

    /// Sets the number of SGD steps per learner step.
    pub fn num_sgd_steps_per_step(mut self, v: usize) -> Self {
        self.num_sgd_steps_per_step = v;
        self
    }

    /// Loads [`BveConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        info!("Load config of BVE agent from {}", path_.display());
        Ok(b)
    }

    /// Saves [`BveConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path_ = path.as_ref().to_owned();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save config of BVE agent into {}", path_.display());
        Ok(())
    }
}
