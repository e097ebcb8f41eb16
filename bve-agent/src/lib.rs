//! Configurations and builders of value-based agents.
//!
//! The [`bve`] module provides behavior value estimation, the [`dqn`] module
//! deep Q-networks. Builders bundle a configuration and a loss, and implement
//! [`bve_core::Builder`] when an [`AgentBackend`] is attached.
//!
//! ```rust
//! use bve_agent::{DqnBuilder, DqnConfig, QLearning};
//!
//! let config = DqnConfig::default().discount(0.99).epsilon(0.01);
//! let loss = QLearning::new(config.discount, 1.0);
//! let builder = DqnBuilder::new(config, loss);
//! assert_eq!(builder.loss().max_abs_reward, 1.0);
//! ```
mod backend;
pub mod bve;
pub mod dqn;
mod explorer;
pub use backend::AgentBackend;
pub use bve::{BveBuilder, BveConfig, BveLoss, BveNetworks};
pub use dqn::{DqnBuilder, DqnConfig, QLearning};
pub use explorer::{argmax, EpsilonGreedy};
