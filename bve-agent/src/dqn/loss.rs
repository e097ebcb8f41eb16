//! Loss of DQN.
use serde::{Deserialize, Serialize};

/// Parameters of the Q-learning loss: clipped rewards and Huber loss on the
/// TD error, evaluated by the agent backend.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct QLearning {
    /// Discount factor of the bootstrapped target.
    pub discount: f64,

    /// Rewards are clipped to this absolute value.
    pub max_abs_reward: f64,

    /// Threshold of the Huber loss.
    pub huber_loss_parameter: f64,
}

impl Default for QLearning {
    fn default() -> Self {
        Self {
            discount: 0.99,
            max_abs_reward: 1.0,
            huber_loss_parameter: 1.0,
        }
    }
}

impl QLearning {
    /// Creates the loss with a discount factor and a reward clipping value.
    pub fn new(discount: f64, max_abs_reward: f64) -> Self {
        Self {
            discount,
            max_abs_reward,
            ..Default::default()
        }
    }

    /// Sets the threshold of the Huber loss.
    pub fn huber_loss_parameter(mut self, v: f64) -> Self {
        self.huber_loss_parameter = v;
        self
    }
}
