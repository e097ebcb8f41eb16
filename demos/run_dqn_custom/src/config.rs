use crate::{
    args::Args,
    helpers::{AtariEnvFactory, DqnAtariNetworkFactory},
};
use bve_agent::{DqnBuilder, DqnConfig, QLearning};
use bve_core::{experiment::ExperimentConfig, record::LoggerFactory};
use std::sync::Arc;

pub const DISCOUNT: f64 = 0.99;
pub const EVAL_EPSILON: f64 = 0.0;
pub const LEARNING_RATE: f64 = 5e-5;
pub const N_STEP: usize = 1;
pub const EPSILON: f64 = 0.01;
pub const TARGET_UPDATE_PERIOD: usize = 2000;
pub const MIN_REPLAY_SIZE: usize = 20_000;
pub const MAX_REPLAY_SIZE: usize = 1_000_000;
pub const SAMPLES_PER_INSERT: f64 = 8.0;
pub const BATCH_SIZE: usize = 32;
pub const MAX_ABS_REWARD: f64 = 1.0;

pub type DqnAtariExperiment = ExperimentConfig<AtariEnvFactory, DqnAtariNetworkFactory, DqnBuilder>;

fn create_agent_config() -> DqnConfig {
    DqnConfig::default()
        .discount(DISCOUNT)
        .eval_epsilon(EVAL_EPSILON)
        .learning_rate(LEARNING_RATE)
        .n_step(N_STEP)
        .epsilon(EPSILON)
        .target_update_period(TARGET_UPDATE_PERIOD)
        .min_replay_size(MIN_REPLAY_SIZE)
        .max_replay_size(MAX_REPLAY_SIZE)
        .samples_per_insert(SAMPLES_PER_INSERT)
        .batch_size(BATCH_SIZE)
}

/// DQN on the Atari game of `args`, runnable either distributed or in a single process.
pub fn build_experiment_config(
    args: &Args,
    logger_factory: Arc<dyn LoggerFactory>,
) -> DqnAtariExperiment {
    let config = create_agent_config();
    let loss = QLearning::new(config.discount, MAX_ABS_REWARD);
    let builder = DqnBuilder::new(config, loss);

    ExperimentConfig::new(
        builder,
        AtariEnvFactory::new(args.env_name.as_str()),
        DqnAtariNetworkFactory::default(),
        args.seed,
        args.num_steps,
    )
    .with_logger_factory(logger_factory)
}
