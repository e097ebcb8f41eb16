//! Builder of agents.
use super::{Actor, Environment, Learner};
use anyhow::Result;

/// Assembles the actor and the learner of an agent.
///
/// Both are built from the same networks, produced by a
/// [`NetworkFactory`](super::NetworkFactory) with the same associated type.
pub trait Builder<E: Environment> {
    /// Networks the agent is built on.
    type Networks;

    /// Actor of the agent.
    type Actor: Actor<E>;

    /// Learner of the agent.
    type Learner: Learner;

    /// Builds the learner.
    fn make_learner(&self, networks: &Self::Networks, random_key: u64) -> Result<Self::Learner>;

    /// Builds an actor.
    ///
    /// With `evaluation`, the actor is expected to act with its evaluation
    /// policy and not to feed any replay buffer.
    fn make_actor(
        &self,
        networks: &Self::Networks,
        random_key: u64,
        evaluation: bool,
    ) -> Result<Self::Actor>;
}
