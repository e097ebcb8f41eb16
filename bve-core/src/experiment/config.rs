//! Configuration of an experiment.
use crate::record::{make_default_logger, Logger, LoggerFactory};
use anyhow::Result;
use serde::Serialize;
use std::{fs::File, io::Write, path::Path, sync::Arc};

/// Everything needed to run an experiment, independently of how it is run.
///
/// The configuration is built once and only read afterwards. The same value
/// can be handed to a [`Runner`](super::Runner) or turned into a
/// [`DistributedProgram`](super::DistributedProgram).
///
/// The logger factory is not part of the serialized form.
#[derive(Serialize)]
pub struct ExperimentConfig<E, N, B> {
    builder: B,
    environment_factory: E,
    network_factory: N,
    #[serde(skip)]
    logger_factory: Option<Arc<dyn LoggerFactory>>,
    seed: u64,
    max_num_actor_steps: usize,
}

impl<E, N, B> ExperimentConfig<E, N, B> {
    /// Creates a configuration without logger factory.
    pub fn new(
        builder: B,
        environment_factory: E,
        network_factory: N,
        seed: u64,
        max_num_actor_steps: usize,
    ) -> Self {
        Self {
            builder,
            environment_factory,
            network_factory,
            logger_factory: None,
            seed,
            max_num_actor_steps,
        }
    }

    /// Sets the logger factory.
    pub fn with_logger_factory(mut self, logger_factory: Arc<dyn LoggerFactory>) -> Self {
        self.logger_factory = Some(logger_factory);
        self
    }

    /// Agent builder.
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// Factory of environments.
    pub fn environment_factory(&self) -> &E {
        &self.environment_factory
    }

    /// Factory of networks.
    pub fn network_factory(&self) -> &N {
        &self.network_factory
    }

    /// Factory of loggers, if one was given.
    pub fn logger_factory(&self) -> Option<&Arc<dyn LoggerFactory>> {
        self.logger_factory.as_ref()
    }

    /// Random seed of the experiment.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of actor steps after which training stops.
    pub fn max_num_actor_steps(&self) -> usize {
        self.max_num_actor_steps
    }

    /// Makes a logger through the logger factory.
    ///
    /// Falls back to a terminal logger when no factory was given.
    pub fn make_logger(
        &self,
        label: &str,
        steps_key: Option<&str>,
        task_id: Option<usize>,
    ) -> Result<Box<dyn Logger>> {
        match &self.logger_factory {
            Some(factory) => factory.make_logger(label, steps_key, task_id),
            None => make_default_logger(label, steps_key, task_id),
        }
    }
}

impl<E, N, B> ExperimentConfig<E, N, B>
where
    E: Serialize,
    N: Serialize,
    B: Serialize,
{
    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
