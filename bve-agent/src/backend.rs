//! Backends producing the actors and learners of an agent.
use anyhow::Result;
use bve_core::{Actor, Environment, Learner};

/// Produces actors and learners from an agent configuration and a loss.
///
/// Builders such as [`DqnBuilder`](crate::DqnBuilder) carry the
/// configuration and the loss, and delegate to a backend implementing this
/// trait for the numerical parts.
pub trait AgentBackend<E: Environment, C, L> {
    /// Networks the agent is built on.
    type Networks;

    /// Actor of the agent.
    type Actor: Actor<E>;

    /// Learner of the agent.
    type Learner: Learner;

    /// Builds the learner optimizing `loss`.
    fn make_learner(
        &self,
        config: &C,
        loss: &L,
        networks: &Self::Networks,
        random_key: u64,
    ) -> Result<Self::Learner>;

    /// Builds an actor.
    fn make_actor(
        &self,
        config: &C,
        networks: &Self::Networks,
        random_key: u64,
        evaluation: bool,
    ) -> Result<Self::Actor>;
}
