use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run DQN on an Atari game, distributed or in a single process
#[derive(Clone, Parser, Debug, Serialize, Deserialize)]
#[command(version, about)]
pub struct Args {
    /// Execute the agent as a distributed program.
    /// If false, it runs in a single process.
    #[arg(long = "run_distributed", default_value_t = true, action = ArgAction::Set)]
    pub run_distributed: bool,

    /// Name of the game
    #[arg(long = "env_name", default_value = "BeamRider")]
    pub env_name: String,

    /// Random seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Number of actor steps to run
    #[arg(long = "num_steps", default_value_t = 10_000_000)]
    pub num_steps: usize,

    /// Number of actors of the distributed program
    #[arg(long = "num_actors", default_value_t = 128)]
    pub num_actors: usize,

    /// Directory of the manifests and CSV logs
    #[arg(long = "results_dir", default_value = "results")]
    pub results_dir: PathBuf,

    /// Plot of evaluation returns, written after a single-process run
    #[arg(long = "plot_path", default_value = "test.png")]
    pub plot_path: PathBuf,

    /// Print the experiment configuration as YAML and exit
    #[arg(long = "show_config")]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["run_dqn_custom"]).unwrap();
        assert!(args.run_distributed);
        assert_eq!(args.env_name, "BeamRider");
        assert_eq!(args.seed, 0);
        assert_eq!(args.num_steps, 10_000_000);
        assert_eq!(args.num_actors, 128);
        assert_eq!(args.plot_path, PathBuf::from("test.png"));
        assert!(!args.show_config);
    }

    #[test]
    fn single_process_flag() {
        let args = Args::try_parse_from([
            "run_dqn_custom",
            "--run_distributed",
            "false",
            "--env_name",
            "Pong",
            "--num_steps",
            "1000",
        ])
        .unwrap();
        assert!(!args.run_distributed);
        assert_eq!(args.env_name, "Pong");
        assert_eq!(args.num_steps, 1000);
    }
}
