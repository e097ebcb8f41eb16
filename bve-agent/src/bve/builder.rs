//! Builder of BVE agent.
use super::{BveConfig, BveLoss};
use crate::AgentBackend;
use anyhow::Result;
use bve_core::{Builder, Environment};
use serde::Serialize;

/// Bundles a [`BveConfig`] and a [`BveLoss`].
///
/// Implements [`Builder`] once a backend is attached by [`BveBuilder::backend`].
#[derive(Debug, Clone, Serialize)]
pub struct BveBuilder<B = ()> {
    config: BveConfig,
    loss: BveLoss,
    #[serde(skip)]
    backend: B,
}

impl BveBuilder {
    /// Creates the builder.
    pub fn new(config: BveConfig, loss: BveLoss) -> Self {
        Self {
            config,
            loss,
            backend: (),
        }
    }
}

impl<B> BveBuilder<B> {
    /// Attaches a backend.
    pub fn backend<B2>(self, backend: B2) -> BveBuilder<B2> {
        BveBuilder {
            config: self.config,
            loss: self.loss,
            backend,
        }
    }

    /// Configuration of the agent.
    pub fn config(&self) -> &BveConfig {
        &self.config
    }

    /// Loss of the learner.
    pub fn loss(&self) -> &BveLoss {
        &self.loss
    }
}

impl<E, B> Builder<E> for BveBuilder<B>
where
    E: Environment,
    B: AgentBackend<E, BveConfig, BveLoss>,
{
    type Networks = B::Networks;
    type Actor = B::Actor;
    type Learner = B::Learner;

    fn make_learner(&self, networks: &Self::Networks, random_key: u64) -> Result<Self::Learner> {
        self.backend
            .make_learner(&self.config, &self.loss, networks, random_key)
    }

    fn make_actor(
        &self,
        networks: &Self::Networks,
        random_key: u64,
        evaluation: bool,
    ) -> Result<Self::Actor> {
        self.backend
            .make_actor(&self.config, networks, random_key, evaluation)
    }
}
