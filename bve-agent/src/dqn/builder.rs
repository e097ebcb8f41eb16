//! Builder of DQN agent.
use super::{DqnConfig, QLearning};
use crate::AgentBackend;
use anyhow::Result;
use bve_core::{Builder, Environment};
use serde::Serialize;

/// Bundles a [`DqnConfig`] and a [`QLearning`] loss.
///
/// Without a backend the builder only describes the agent; it can be
/// serialized and handed to an external runner. With a backend attached by
/// [`DqnBuilder::backend`], it implements [`Builder`].
#[derive(Debug, Clone, Serialize)]
pub struct DqnBuilder<B = ()> {
    config: DqnConfig,
    loss: QLearning,
    #[serde(skip)]
    backend: B,
}

impl DqnBuilder {
    /// Creates the builder.
    pub fn new(config: DqnConfig, loss: QLearning) -> Self {
        Self {
            config,
            loss,
            backend: (),
        }
    }
}

impl<B> DqnBuilder<B> {
    /// Attaches a backend.
    pub fn backend<B2>(self, backend: B2) -> DqnBuilder<B2> {
        DqnBuilder {
            config: self.config,
            loss: self.loss,
            backend,
        }
    }

    /// Configuration of the agent.
    pub fn config(&self) -> &DqnConfig {
        &self.config
    }

    /// Loss of the learner.
    pub fn loss(&self) -> &QLearning {
        &self.loss
    }
}

impl<E, B> Builder<E> for DqnBuilder<B>
where
    E: Environment,
    B: AgentBackend<E, DqnConfig, QLearning>,
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
