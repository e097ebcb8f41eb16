use bve_core::{
    dummy::{ChainEnvFactory, DummyBuilder, DummyNetworkFactory},
    experiment::{ExperimentConfig, Runner, SequentialRunner},
    record::LoggerRegistry,
};
use bve_logs::{ColumnSelector, LogSet, ReturnCurve};
use std::{fs, sync::Arc};
use tempdir::TempDir;
use test_log::test;

#[test]
fn sequential_run_is_read_back() -> anyhow::Result<()> {
    let dir = TempDir::new("pipeline")?;
    let registry = LoggerRegistry::new().csv_dir(dir.path());
    let experiment = ExperimentConfig::new(
        DummyBuilder { warmup: 3 },
        ChainEnvFactory { episode_length: 4 },
        DummyNetworkFactory,
        0,
        40,
    )
    .with_logger_factory(Arc::new(registry.clone()));
    SequentialRunner::default()
        .eval_every(20)
        .run(experiment)?;

    let logs = LogSet::load(dir.path())?;
    assert_eq!(logs.actor.len(), 10);
    assert_eq!(logs.learner.len(), 37);
    assert_eq!(logs.evaluator.len(), 3);
    assert_eq!(logs.learner.last_row().map(|r| r.len()), Some(2));

    let curve = ReturnCurve::from_table(
        &logs.evaluator,
        &ColumnSelector::name("actor_steps"),
        &ColumnSelector::name("episode_return"),
    )?;
    assert_eq!(curve.steps(), &[0, 20, 40][..]);
    assert_eq!(curve.returns(), &[4.0, 4.0, 4.0][..]);

    let in_memory = registry.records("evaluator");
    assert_eq!(in_memory.len(), curve.len());
    Ok(())
}

#[test]
fn positional_columns_of_legacy_logs() -> anyhow::Result<()> {
    let dir = TempDir::new("pipeline")?;
    for label in &["actor", "evaluator", "learner"] {
        fs::create_dir_all(dir.path().join(label))?;
    }
    fs::write(dir.path().join("actor/logs.csv"), "a,b\n")?;
    fs::write(dir.path().join("learner/logs.csv"), "learner_steps,loss\n1,0.5\n")?;
    fs::write(
        dir.path().join("evaluator/logs.csv"),
        "h,c1,c2,c3,c4,c5,c6\nh0,1,-,-,-,-,10.0\nh1,2,-,-,-,-,20.0\n",
    )?;

    let logs = LogSet::load(dir.path())?;
    let curve = ReturnCurve::from_table(
        &logs.evaluator,
        &"1".parse()?,
        &"6".parse()?,
    )?;
    assert_eq!(curve.steps(), &[1, 2][..]);
    assert_eq!(curve.returns(), &[10.0, 20.0][..]);

    let output = dir.path().join("returns.svg");
    curve.save(&output)?;
    assert!(output.exists());
    Ok(())
}

#[test]
fn header_only_evaluator_gives_empty_plot() -> anyhow::Result<()> {
    let dir = TempDir::new("pipeline")?;
    for label in &["actor", "evaluator", "learner"] {
        fs::create_dir_all(dir.path().join(label))?;
        fs::write(
            dir.path().join(label).join("logs.csv"),
            "actor_steps,episode_return\n",
        )?;
    }

    let logs = LogSet::load(dir.path())?;
    let curve = ReturnCurve::from_table(
        &logs.evaluator,
        &ColumnSelector::Index(0),
        &ColumnSelector::Index(1),
    )?;
    assert!(curve.is_empty());
    curve.save(dir.path().join("empty.svg"))?;
    Ok(())
}
