//! Behavior value estimation (BVE) agent.
mod builder;
mod config;
mod loss;
mod networks;
pub use builder::BveBuilder;
pub use config::BveConfig;
pub use loss::BveLoss;
pub use networks::{ActionValueNetwork, BveNetworks};
