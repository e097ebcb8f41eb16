//! Actor and learner.
use super::{Environment, TimeStep};
use crate::record::Record;
use anyhow::Result;

/// Interacts with an environment.
///
/// An actor selects actions and collects the transitions it observes, which
/// it may forward to a replay buffer owned by its learner.
pub trait Actor<E: Environment> {
    /// Selects an action given an observation.
    fn select_action(&mut self, obs: &E::Obs) -> E::Act;

    /// Observes the first step of an episode.
    fn observe_first(&mut self, _timestep: &TimeStep<E::Obs>) {}

    /// Observes the action taken and the step it led to.
    fn observe(&mut self, _act: &E::Act, _next: &TimeStep<E::Obs>) {}

    /// Pulls the latest parameters, if the actor keeps a copy of them.
    fn update(&mut self) {}
}

/// Updates the parameters of an agent.
pub trait Learner {
    /// Performs a learning step.
    ///
    /// Returns `None` if no step was performed, for example while the replay
    /// buffer is still filling up.
    fn step(&mut self) -> Result<Option<Record>>;
}
