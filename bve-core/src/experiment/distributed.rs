//! Description of a distributed experiment.
use super::ExperimentConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Role of a node in a distributed program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeGroup {
    /// Shared step counters.
    Counter,

    /// Replay buffer fed by the actors.
    Replay,

    /// Learner updating the parameters.
    Learner,

    /// Actor collecting experience.
    Actor,

    /// Evaluator running the evaluation policy.
    Evaluator,
}

/// A node of a distributed program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramNode {
    /// Role of the node.
    pub group: NodeGroup,

    /// Unique label of the node.
    pub label: String,

    /// Random seed of the node.
    pub seed: u64,
}

impl ProgramNode {
    fn new(group: NodeGroup, label: impl Into<String>, seed: u64) -> Self {
        Self {
            group,
            label: label.into(),
            seed,
        }
    }
}

/// An experiment laid out as a set of nodes for a [`Launcher`].
#[derive(Serialize)]
pub struct DistributedProgram<E, N, B> {
    name: String,
    num_actors: usize,
    nodes: Vec<ProgramNode>,
    experiment: ExperimentConfig<E, N, B>,
}

impl<E, N, B> DistributedProgram<E, N, B> {
    /// Name of the program.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of actor nodes.
    pub fn num_actors(&self) -> usize {
        self.num_actors
    }

    /// Nodes of the program.
    pub fn nodes(&self) -> &[ProgramNode] {
        &self.nodes
    }

    /// Experiment run by the program.
    pub fn experiment(&self) -> &ExperimentConfig<E, N, B> {
        &self.experiment
    }

    /// Returns the experiment, dropping the layout.
    pub fn into_experiment(self) -> ExperimentConfig<E, N, B> {
        self.experiment
    }
}

/// Lays out an experiment as a distributed program.
///
/// The program has a counter, a replay buffer, a learner, `num_actors` actors
/// labeled `actor_0` to `actor_{num_actors - 1}` and an evaluator. Actor `i`
/// is seeded with `seed + i`, the evaluator with `seed + num_actors`, the
/// other nodes with `seed`.
pub fn make_distributed_experiment<E, N, B>(
    experiment: ExperimentConfig<E, N, B>,
    num_actors: usize,
) -> DistributedProgram<E, N, B> {
    let seed = experiment.seed();
    let mut nodes = vec![
        ProgramNode::new(NodeGroup::Counter, "counter", seed),
        ProgramNode::new(NodeGroup::Replay, "replay", seed),
        ProgramNode::new(NodeGroup::Learner, "learner", seed),
    ];
    nodes.extend((0..num_actors).map(|i| {
        ProgramNode::new(
            NodeGroup::Actor,
            format!("actor_{}", i),
            seed.wrapping_add(i as u64),
        )
    }));
    nodes.push(ProgramNode::new(
        NodeGroup::Evaluator,
        "evaluator",
        seed.wrapping_add(num_actors as u64),
    ));

    DistributedProgram {
        name: "agent".to_string(),
        num_actors,
        nodes,
        experiment,
    }
}

/// Launches a distributed program.
pub trait Launcher<P> {
    /// Launches the program and blocks until it is handed over.
    fn launch(&self, program: P) -> Result<()>;
}
