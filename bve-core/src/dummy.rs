//! Toy components for tests and examples.
//!
//! [`ChainEnv`] emits its position in an episode of fixed length and a reward
//! of `1` per step. [`DummyBuilder`] builds an actor always taking action `0`
//! and a learner reporting a loss after a warmup.
use crate::{
    Actor, Builder, Environment, EnvironmentFactory, EnvironmentSpec, Learner, NetworkFactory,
    Record, RecordValue, TimeStep,
};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Environment of fixed episode length.
pub struct ChainEnv {
    episode_length: usize,
    position: usize,
    seed: u64,
}

impl ChainEnv {
    /// Seed the environment was made with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Environment for ChainEnv {
    type Obs = usize;
    type Act = usize;

    fn reset(&mut self) -> Result<TimeStep<usize>> {
        self.position = 0;
        Ok(TimeStep::first(0))
    }

    fn step(&mut self, _act: &usize) -> Result<TimeStep<usize>> {
        self.position += 1;
        if self.position >= self.episode_length {
            Ok(TimeStep::termination(self.position, 1.0))
        } else {
            Ok(TimeStep::mid(self.position, 1.0, 1.0))
        }
    }

    fn spec(&self) -> EnvironmentSpec {
        EnvironmentSpec {
            observation_shape: vec![1],
            num_actions: 2,
        }
    }
}

/// Makes [`ChainEnv`]s.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainEnvFactory {
    /// Number of steps in an episode.
    pub episode_length: usize,
}

impl EnvironmentFactory for ChainEnvFactory {
    type Env = ChainEnv;

    fn make(&self, seed: u64) -> Result<ChainEnv> {
        Ok(ChainEnv {
            episode_length: self.episode_length.max(1),
            position: 0,
            seed,
        })
    }
}

/// Networks of the dummy agent, only carrying the number of actions.
#[derive(Clone, Debug, PartialEq)]
pub struct DummyNetworks {
    /// Number of actions of the environment.
    pub num_actions: usize,
}

/// Makes [`DummyNetworks`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DummyNetworkFactory;

impl NetworkFactory for DummyNetworkFactory {
    type Networks = DummyNetworks;

    fn make(&self, spec: &EnvironmentSpec) -> Result<DummyNetworks> {
        Ok(DummyNetworks {
            num_actions: spec.num_actions,
        })
    }
}

/// Always takes action `0`.
#[derive(Default)]
pub struct DummyActor {
    /// Number of calls to [`Actor::update`].
    pub num_updates: usize,

    /// Number of observed transitions.
    pub num_observed: usize,
}

impl Actor<ChainEnv> for DummyActor {
    fn select_action(&mut self, _obs: &usize) -> usize {
        0
    }

    fn observe(&mut self, _act: &usize, _next: &TimeStep<usize>) {
        self.num_observed += 1;
    }

    fn update(&mut self) {
        self.num_updates += 1;
    }
}

/// Skips its first `warmup` steps, then reports a loss on every step.
pub struct DummyLearner {
    warmup: usize,
    calls: usize,
}

impl Learner for DummyLearner {
    fn step(&mut self) -> Result<Option<Record>> {
        self.calls += 1;
        if self.calls <= self.warmup {
            return Ok(None);
        }
        let loss = 1.0 / (self.calls - self.warmup) as f32;
        Ok(Some(Record::from_slice(&[("loss", RecordValue::Scalar(loss))])))
    }
}

/// Builds [`DummyActor`]s and [`DummyLearner`]s.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DummyBuilder {
    /// Number of learner calls without a learning step.
    pub warmup: usize,
}

impl Builder<ChainEnv> for DummyBuilder {
    type Networks = DummyNetworks;
    type Actor = DummyActor;
    type Learner = DummyLearner;

    fn make_learner(&self, _networks: &DummyNetworks, _random_key: u64) -> Result<DummyLearner> {
        Ok(DummyLearner {
            warmup: self.warmup,
            calls: 0,
        })
    }

    fn make_actor(
        &self,
        _networks: &DummyNetworks,
        _random_key: u64,
        _evaluation: bool,
    ) -> Result<DummyActor> {
        Ok(DummyActor::default())
    }
}
