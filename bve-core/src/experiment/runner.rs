//! Runners of single-process experiments.
use super::ExperimentConfig;
use crate::{
    record::{Logger, Record, RecordValue},
    Actor, Builder, Environment, EnvironmentFactory, Learner, NetworkFactory,
};
use anyhow::Result;
use log::info;
use std::time::Instant;

/// Runs an experiment in the current process.
pub trait Runner<X> {
    /// Runs the experiment until completion.
    fn run(&self, experiment: X) -> Result<()>;
}

#[derive(Default)]
struct Counts {
    actor_steps: usize,
    actor_episodes: usize,
    learner_steps: usize,
}

struct Episode {
    length: usize,
    episode_return: f32,
}

fn run_episode<E, A, F>(env: &mut E, actor: &mut A, update: bool, mut on_step: F) -> Result<Episode>
where
    E: Environment,
    A: Actor<E>,
    F: FnMut() -> Result<()>,
{
    let mut timestep = env.reset()?;
    actor.observe_first(&timestep);
    let mut episode = Episode {
        length: 0,
        episode_return: 0.0,
    };

    while !timestep.is_last() {
        let act = actor.select_action(&timestep.observation);
        timestep = env.step(&act)?;
        actor.observe(&act, &timestep);
        if update {
            actor.update();
        }
        episode.length += 1;
        episode.episode_return += timestep.reward;
        on_step()?;
    }

    Ok(episode)
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Runs the environment loop of an experiment synchronously.
///
/// # Loop
///
/// 1. Make the training environment with `seed` and the evaluation environment
///    with `seed + 1`, then the networks from the environment spec, the learner,
///    a training actor and an evaluation actor.
/// 2. Make loggers `actor`, `learner` and `evaluator`.
/// 3. Evaluate before training and then every `eval_every` actor steps.
///    Evaluation runs `num_eval_episodes` episodes and writes one record per
///    episode with `actor_steps`, `actor_episodes`, `episode_length` and
///    `episode_return`.
/// 4. Run training episodes while `actor_steps < max_num_actor_steps`. After
///    every actor step the actor pulls parameters and the learner takes a step.
///    Learner records are written with `learner_steps`. Each episode writes an
///    actor record, with `steps_per_second` in addition to the evaluator keys.
/// 5. Close the loggers.
///
/// Evaluation and the step limit are checked between episodes, so the last
/// training episode may run past `max_num_actor_steps`.
///
/// ```mermaid
/// graph LR
///     A[Actor]-->|Act|B[Environment]
///     B -->|TimeStep|A
///     A -->|update|L[Learner]
///     L -->|Record|R[learner logger]
///     A -->|episode Record|S[actor logger]
/// ```
pub struct SequentialRunner {
    eval_every: usize,
    num_eval_episodes: usize,
}

impl Default for SequentialRunner {
    fn default() -> Self {
        Self {
            eval_every: 100,
            num_eval_episodes: 1,
        }
    }
}

impl SequentialRunner {
    /// Sets the interval of evaluations in actor steps.
    ///
    /// With `0`, only the evaluation before training takes place.
    pub fn eval_every(mut self, eval_every: usize) -> Self {
        self.eval_every = eval_every;
        self
    }

    /// Sets the number of episodes of an evaluation.
    pub fn num_eval_episodes(mut self, num_eval_episodes: usize) -> Self {
        self.num_eval_episodes = num_eval_episodes;
        self
    }

    fn evaluate<E, A>(
        &self,
        env: &mut E,
        actor: &mut A,
        counts: &Counts,
        logger: &mut dyn Logger,
    ) -> Result<()>
    where
        E: Environment,
        A: Actor<E>,
    {
        for _ in 0..self.num_eval_episodes {
            let episode = run_episode(env, actor, false, || Ok(()))?;
            logger.write(episode_record(&episode, counts))?;
        }
        Ok(())
    }
}

fn episode_record(episode: &Episode, counts: &Counts) -> Record {
    Record::from_slice(&[
        ("actor_steps", RecordValue::Integer(counts.actor_steps as i64)),
        (
            "actor_episodes",
            RecordValue::Integer(counts.actor_episodes as i64),
        ),
        ("episode_length", RecordValue::Integer(episode.length as i64)),
        ("episode_return", RecordValue::Scalar(episode.episode_return)),
    ])
}

impl<E, N, B> Runner<ExperimentConfig<E, N, B>> for SequentialRunner
where
    E: EnvironmentFactory,
    N: NetworkFactory,
    B: Builder<E::Env, Networks = N::Networks>,
{
    fn run(&self, experiment: ExperimentConfig<E, N, B>) -> Result<()> {
        let seed = experiment.seed();
        let max_num_actor_steps = experiment.max_num_actor_steps();
        let mut env = experiment.environment_factory().make(seed)?;
        let mut eval_env = experiment
            .environment_factory()
            .make(seed.wrapping_add(1))?;
        let spec = env.spec();
        let networks = experiment.network_factory().make(&spec)?;
        let builder = experiment.builder();
        let mut learner = builder.make_learner(&networks, seed)?;
        let mut actor = builder.make_actor(&networks, seed, false)?;
        let mut eval_actor = builder.make_actor(&networks, seed.wrapping_add(1), true)?;

        let mut actor_logger = experiment.make_logger("actor", Some("actor_steps"), Some(0))?;
        let mut learner_logger =
            experiment.make_logger("learner", Some("learner_steps"), None)?;
        let mut eval_logger = experiment.make_logger("evaluator", Some("actor_steps"), None)?;

        info!(
            "Start training for {} actor steps, {} actions",
            max_num_actor_steps, spec.num_actions
        );
        let mut counts = Counts::default();
        let mut next_eval = 0;

        loop {
            if counts.actor_steps >= next_eval {
                self.evaluate(&mut eval_env, &mut eval_actor, &counts, eval_logger.as_mut())?;
                next_eval = match self.eval_every {
                    0 => usize::MAX,
                    n => counts.actor_steps.saturating_add(n),
                };
            }
            if counts.actor_steps >= max_num_actor_steps {
                break;
            }

            let timer = Instant::now();
            let episode = run_episode(&mut env, &mut actor, true, || {
                counts.actor_steps += 1;
                if let Some(mut record) = learner.step()? {
                    counts.learner_steps += 1;
                    record.insert(
                        "learner_steps",
                        RecordValue::Integer(counts.learner_steps as i64),
                    );
                    learner_logger.write(record)?;
                }
                Ok(())
            })?;
            counts.actor_episodes += 1;

            let elapsed = timer.elapsed().as_secs_f32().max(f32::EPSILON);
            let mut record = episode_record(&episode, &counts);
            record.insert(
                "steps_per_second",
                RecordValue::Scalar(episode.length as f32 / elapsed),
            );
            actor_logger.write(record)?;
        }

        info!(
            "Finished after {} actor steps, {} episodes, {} learner steps",
            counts.actor_steps, counts.actor_episodes, counts.learner_steps
        );
        actor_logger.close()?;
        learner_logger.close()?;
        eval_logger.close()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dummy::{ChainEnvFactory, DummyBuilder, DummyNetworkFactory},
        record::LoggerRegistry,
    };
    use std::sync::Arc;
    use test_log::test;

    fn experiment(
        episode_length: usize,
        warmup: usize,
        max_num_actor_steps: usize,
        registry: &LoggerRegistry,
    ) -> ExperimentConfig<ChainEnvFactory, DummyNetworkFactory, DummyBuilder> {
        ExperimentConfig::new(
            DummyBuilder { warmup },
            ChainEnvFactory { episode_length },
            DummyNetworkFactory,
            0,
            max_num_actor_steps,
        )
        .with_logger_factory(Arc::new(registry.clone()))
    }

    #[test]
    fn trains_until_max_actor_steps() -> Result<()> {
        let registry = LoggerRegistry::new();
        SequentialRunner::default()
            .eval_every(0)
            .run(experiment(5, 0, 20, &registry))?;

        let actor = registry.records("actor");
        assert_eq!(actor.len(), 4);
        let last = &actor[3];
        assert_eq!(last.get_integer("actor_steps")?, 20);
        assert_eq!(last.get_integer("actor_episodes")?, 4);
        assert_eq!(last.get_integer("episode_length")?, 5);
        assert_eq!(last.get_scalar("episode_return")?, 5.0);
        assert!(last.get_scalar("steps_per_second")? > 0.0);
        Ok(())
    }

    #[test]
    fn last_episode_may_overshoot() -> Result<()> {
        let registry = LoggerRegistry::new();
        SequentialRunner::default()
            .eval_every(0)
            .run(experiment(3, 0, 7, &registry))?;

        let actor = registry.records("actor");
        assert_eq!(actor.len(), 3);
        assert_eq!(actor[2].get_integer("actor_steps")?, 9);
        Ok(())
    }

    #[test]
    fn evaluates_before_and_during_training() -> Result<()> {
        let registry = LoggerRegistry::new();
        SequentialRunner::default()
            .eval_every(10)
            .num_eval_episodes(2)
            .run(experiment(5, 0, 20, &registry))?;

        let steps = registry
            .records("evaluator")
            .iter()
            .map(|r| r.get_integer("actor_steps"))
            .collect::<Result<Vec<_>, _>>()?;
        assert_eq!(steps, vec![0, 0, 10, 10, 20, 20]);
        Ok(())
    }

    #[test]
    fn huge_eval_interval_evaluates_once() -> Result<()> {
        let registry = LoggerRegistry::new();
        SequentialRunner::default()
            .eval_every(usize::MAX)
            .run(experiment(5, 0, 10, &registry))?;

        assert_eq!(registry.records("evaluator").len(), 1);
        assert_eq!(registry.records("actor").len(), 2);
        Ok(())
    }

    #[test]
    fn writes_learner_records_with_steps() -> Result<()> {
        let registry = LoggerRegistry::new();
        SequentialRunner::default()
            .eval_every(0)
            .run(experiment(4, 4, 8, &registry))?;

        let learner = registry.records("learner");
        assert_eq!(learner.len(), 4);
        assert_eq!(learner[3].get_integer("learner_steps")?, 4);
        assert!(learner[3].get_scalar("loss").is_ok());
        Ok(())
    }

    #[test]
    fn zero_steps_only_evaluates() -> Result<()> {
        let registry = LoggerRegistry::new();
        SequentialRunner::default().run(experiment(5, 0, 0, &registry))?;

        assert!(registry.records("actor").is_empty());
        assert_eq!(registry.records("evaluator").len(), 1);
        Ok(())
    }
}
