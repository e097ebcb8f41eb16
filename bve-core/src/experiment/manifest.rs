//! Hand-off of experiments to external processes through YAML manifests.
use super::{DistributedProgram, ExperimentConfig, Launcher, Runner};
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

/// File name of the manifest written by [`ManifestLauncher`].
pub const PROGRAM_MANIFEST: &str = "program.yaml";

/// File name of the manifest written by [`ManifestRunner`].
pub const EXPERIMENT_MANIFEST: &str = "experiment.yaml";

fn write_yaml<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(serde_yaml::to_string(value)?.as_bytes())?;
    Ok(())
}

/// Writes a distributed program to `<dir>/program.yaml` for an external launcher.
pub struct ManifestLauncher {
    dir: PathBuf,
}

impl ManifestLauncher {
    /// Creates a launcher writing into `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the manifest.
    pub fn path(&self) -> PathBuf {
        self.dir.join(PROGRAM_MANIFEST)
    }
}

impl<E, N, B> Launcher<DistributedProgram<E, N, B>> for ManifestLauncher
where
    E: Serialize,
    N: Serialize,
    B: Serialize,
{
    fn launch(&self, program: DistributedProgram<E, N, B>) -> Result<()> {
        let path = self.path();
        write_yaml(&program, &path)?;
        info!(
            "Wrote program {} with {} nodes to {}",
            program.name(),
            program.nodes().len(),
            path.display()
        );
        for node in program.nodes() {
            info!("  {:?} {} (seed {})", node.group, node.label, node.seed);
        }
        Ok(())
    }
}

/// Writes an experiment to `<dir>/experiment.yaml` for an external runner.
pub struct ManifestRunner {
    dir: PathBuf,
}

impl ManifestRunner {
    /// Creates a runner writing into `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the manifest.
    pub fn path(&self) -> PathBuf {
        self.dir.join(EXPERIMENT_MANIFEST)
    }
}

impl<E, N, B> Runner<ExperimentConfig<E, N, B>> for ManifestRunner
where
    E: Serialize,
    N: Serialize,
    B: Serialize,
{
    fn run(&self, experiment: ExperimentConfig<E, N, B>) -> Result<()> {
        let path = self.path();
        write_yaml(&experiment, &path)?;
        info!(
            "Wrote experiment (seed {}, {} actor steps) to {}",
            experiment.seed(),
            experiment.max_num_actor_steps(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experiment::make_distributed_experiment;
    use tempdir::TempDir;

    #[derive(Serialize)]
    struct Level {
        level: String,
    }

    fn experiment() -> ExperimentConfig<Level, (), ()> {
        ExperimentConfig::new(
            (),
            Level {
                level: "Pong".to_string(),
            },
            (),
            3,
            50,
        )
    }

    #[test]
    fn launcher_writes_program() -> Result<()> {
        let dir = TempDir::new("manifest_launcher")?;
        let launcher = ManifestLauncher::new(dir.path().join("results"));
        launcher.launch(make_distributed_experiment(experiment(), 2))?;

        let yaml = fs::read_to_string(launcher.path())?;
        assert!(yaml.contains("actor_1"));
        assert!(yaml.contains("group: evaluator"));
        assert!(yaml.contains("level: Pong"));
        Ok(())
    }

    #[test]
    fn runner_writes_experiment() -> Result<()> {
        let dir = TempDir::new("manifest_runner")?;
        let runner = ManifestRunner::new(dir.path());
        runner.run(experiment())?;

        let yaml = fs::read_to_string(runner.path())?;
        assert!(yaml.contains("seed: 3"));
        assert!(yaml.contains("max_num_actor_steps: 50"));
        Ok(())
    }
}
