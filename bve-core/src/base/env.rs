//! Environment.
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Position of a [`TimeStep`] in an episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepType {
    /// The first step of an episode, returned by [`Environment::reset`].
    First,

    /// Any step that is neither first nor last.
    Mid,

    /// The last step of an episode.
    Last,
}

/// What an environment returns on reset and after every action.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeStep<O> {
    /// Position in the episode.
    pub step_type: StepType,

    /// Reward for the action that led to this step.
    pub reward: f32,

    /// Discount for the next step; `0` on termination.
    pub discount: f32,

    /// Observation of the environment.
    pub observation: O,
}

impl<O> TimeStep<O> {
    /// Returns the first step of an episode.
    pub fn first(observation: O) -> Self {
        Self {
            step_type: StepType::First,
            reward: 0.0,
            discount: 1.0,
            observation,
        }
    }

    /// Returns an intermediate step.
    pub fn mid(observation: O, reward: f32, discount: f32) -> Self {
        Self {
            step_type: StepType::Mid,
            reward,
            discount,
            observation,
        }
    }

    /// Returns a step ending the episode by termination.
    pub fn termination(observation: O, reward: f32) -> Self {
        Self {
            step_type: StepType::Last,
            reward,
            discount: 0.0,
            observation,
        }
    }

    /// Returns a step ending the episode by truncation.
    pub fn truncation(observation: O, reward: f32, discount: f32) -> Self {
        Self {
            step_type: StepType::Last,
            reward,
            discount,
            observation,
        }
    }

    /// Returns `true` if this is the first step of an episode.
    pub fn is_first(&self) -> bool {
        self.step_type == StepType::First
    }

    /// Returns `true` if this step ends the episode.
    pub fn is_last(&self) -> bool {
        self.step_type == StepType::Last
    }
}

/// Shapes of what an environment consumes and emits.
///
/// Network factories build networks from this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSpec {
    /// Shape of an observation.
    pub observation_shape: Vec<usize>,

    /// Number of discrete actions.
    pub num_actions: usize,
}

/// Represents an environment, typically an MDP.
pub trait Environment {
    /// Observation of the environment.
    type Obs: Clone;

    /// Action of the environment.
    type Act: Clone;

    /// Starts a new episode.
    fn reset(&mut self) -> Result<TimeStep<Self::Obs>>;

    /// Performs an environment step.
    fn step(&mut self, act: &Self::Act) -> Result<TimeStep<Self::Obs>>;

    /// Returns the spec of the environment.
    fn spec(&self) -> EnvironmentSpec;
}
