use std::time::Duration;

use anyhow::{Context, Result};
use decimate_lab::{Geometry, Image, Strategy};

use crate::config::HarnessConfig;
use crate::report::RunRecord;
use crate::timing::Stopwatch;

const REFERENCE: Strategy = Strategy::RowColIndexed;

#[derive(Debug)]
pub struct StrategyRun {
    pub mean: Duration,
    pub best: Duration,
    /// Output of the last repeat.
    pub output: Vec<u8>,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub input: Image<u8>,
    pub records: Vec<RunRecord>,
    /// Per-strategy outputs, in the order of `records`.
    pub outputs: Vec<Vec<u8>>,
}

impl RunOutcome {
    pub fn all_match(&self) -> bool {
        self.records.iter().all(|r| r.matches_reference)
    }
}

/// Times `repeats` calls of one strategy, each on a freshly allocated output.
///
/// Only the decimation call is inside the timed region.
pub fn run_strategy(
    strategy: Strategy,
    input: &[u8],
    geometry: Geometry,
    repeats: usize,
) -> Result<StrategyRun> {
    let repeats = repeats.max(1);
    let mut total = Duration::ZERO;
    let mut best = Duration::MAX;
    let mut output = Vec::new();

    for i in 0..repeats {
        let mut dst = vec![0u8; geometry.dst_len()];
        let sw = Stopwatch::start();
        let res = strategy.decimate(&mut dst, input, geometry);
        let elapsed = sw.stop();
        res.with_context(|| format!("running {strategy}"))?;

        log::debug!("{strategy} repeat {i}: {} us", elapsed.as_micros());
        total += elapsed;
        best = best.min(elapsed);
        output = dst;
    }

    Ok(StrategyRun {
        mean: total / repeats as u32,
        best,
        output,
    })
}

/// Generates the configured input once and runs every selected strategy.
pub fn run_all(config: &HarnessConfig) -> Result<RunOutcome> {
    config.validate()?;
    let geometry = config.geometry()?;
    let strategies = config.resolve_strategies()?;

    log::info!(
        "generating {:?} input {}x{}",
        config.pattern,
        geometry.src_width(),
        geometry.src_height()
    );
    let input = config.pattern.generate(geometry.src_width(), geometry.src_height());

    let mut reference = vec![0u8; geometry.dst_len()];
    REFERENCE
        .decimate(&mut reference, input.data(), geometry)
        .context("computing reference output")?;

    let mut records = Vec::with_capacity(strategies.len());
    let mut outputs = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let run = run_strategy(strategy, input.data(), geometry, config.repeats)?;
        let matches_reference = run.output == reference;
        if !matches_reference {
            log::error!("{strategy} output differs from {REFERENCE}");
        }

        records.push(RunRecord {
            strategy: strategy.name(),
            label: strategy.label(),
            micros: run.mean.as_micros(),
            best_micros: run.best.as_micros(),
            repeats: config.repeats,
            matches_reference,
        });
        outputs.push(run.output);
    }

    Ok(RunOutcome {
        input,
        records,
        outputs,
    })
}
