use anyhow::Result;
use bve_core::record::LoggerRegistry;
use bve_logs::ReturnCurve;
use std::path::Path;

/// Plots the episode returns recorded by the evaluator against the number of
/// training episodes.
pub fn plot_evaluator_returns(registry: &LoggerRegistry, path: impl AsRef<Path>) -> Result<()> {
    let records = registry.records("evaluator");
    let mut episodes = Vec::with_capacity(records.len());
    let mut returns = Vec::with_capacity(records.len());
    for record in &records {
        episodes.push(record.get_integer("actor_episodes")?);
        returns.push(record.get_scalar("episode_return")? as f64);
    }

    ReturnCurve::new(episodes, returns)?
        .title("Training episodes returns")
        .labels("Training episodes", "Episode return")
        .save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bve_core::record::{Logger, LoggerFactory, Record, RecordValue};
    use tempdir::TempDir;

    #[test]
    fn plots_evaluator_records() -> Result<()> {
        let registry = LoggerRegistry::new();
        let mut logger = registry.make_logger("evaluator", Some("actor_steps"), None)?;
        for (episodes, ret) in &[(0, 1.0), (5, 3.0)] {
            logger.write(Record::from_slice(&[
                ("actor_episodes", RecordValue::Integer(*episodes)),
                ("episode_return", RecordValue::Scalar(*ret)),
            ]))?;
        }

        let dir = TempDir::new("plot")?;
        let path = dir.path().join("test.svg");
        plot_evaluator_returns(&registry, &path)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn plots_evaluator_records_to_png() -> Result<()> {
        let registry = LoggerRegistry::new();
        let mut logger = registry.make_logger("evaluator", Some("actor_steps"), None)?;
        logger.write(Record::from_slice(&[
            ("actor_episodes", RecordValue::Integer(3)),
            ("episode_return", RecordValue::Scalar(-2.5)),
        ]))?;

        let dir = TempDir::new("plot")?;
        let path = dir.path().join("test.png");
        plot_evaluator_returns(&registry, &path)?;
        assert!(std::fs::read(&path)?.starts_with(b"\x89PNG"));
        Ok(())
    }

    #[test]
    fn empty_registry_plots_empty_png() -> Result<()> {
        let dir = TempDir::new("plot")?;
        let path = dir.path().join("test.png");
        plot_evaluator_returns(&LoggerRegistry::new(), &path)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn missing_key_fails() -> Result<()> {
        let registry = LoggerRegistry::new();
        let mut logger = registry.make_logger("evaluator", None, None)?;
        logger.write(Record::from_scalar("episode_return", 1.0))?;

        let dir = TempDir::new("plot")?;
        assert!(plot_evaluator_returns(&registry, dir.path().join("test.svg")).is_err());
        Ok(())
    }
}
