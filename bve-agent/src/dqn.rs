//! DQN agent.
mod builder;
mod config;
mod loss;
pub use builder::DqnBuilder;
pub use config::DqnConfig;
pub use loss::QLearning;
