use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use dlab_harness::{HarnessConfig, Pattern, RunOutcome, format_report, run_all};
use image::GrayImage;

#[derive(Parser, Debug)]
#[command(name = "dlab_bench")]
#[command(about = "Time every 2:1 decimation strategy on a synthetic grayscale frame")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source width in pixels (even)
    #[arg(long)]
    width: Option<usize>,

    /// Source height in pixels (even)
    #[arg(long)]
    height: Option<usize>,

    /// Timed calls per strategy
    #[arg(long)]
    repeats: Option<usize>,

    /// Strategy to run; repeat the flag to select several (default: all)
    #[arg(long = "strategy")]
    strategies: Vec<String>,

    #[arg(long, value_enum)]
    pattern: Option<Pattern>,

    /// Write the run records as pretty JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the input and every output as PNG into this directory
    #[arg(long)]
    png_dir: Option<PathBuf>,
}

impl Cli {
    fn resolve_config(&self) -> Result<HarnessConfig> {
        let mut cfg = match &self.config {
            Some(path) => HarnessConfig::from_json_file(path)?,
            None => HarnessConfig::default(),
        };

        if let Some(width) = self.width {
            cfg.width = width;
        }
        if let Some(height) = self.height {
            cfg.height = height;
        }
        if let Some(repeats) = self.repeats {
            cfg.repeats = repeats;
        }
        if !self.strategies.is_empty() {
            cfg.strategies = self.strategies.clone();
        }
        if let Some(pattern) = self.pattern {
            cfg.pattern = pattern;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;
    log::info!(
        "config: {}x{}, repeats={}, pattern={:?}, strategies={}",
        cfg.width,
        cfg.height,
        cfg.repeats,
        cfg.pattern,
        cfg.strategies.join(",")
    );

    let outcome = run_all(&cfg)?;
    for line in format_report(&outcome.records) {
        println!("{line}");
    }

    if let Some(path) = &cli.json {
        let bytes = serde_json::to_vec_pretty(&outcome.records).context("serializing json")?;
        fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))?;
        log::info!("report written to {}", path.display());
    }

    if let Some(dir) = &cli.png_dir {
        save_previews(dir, &cfg, &outcome)?;
    }

    if !outcome.all_match() {
        let bad: Vec<_> = outcome
            .records
            .iter()
            .filter(|r| !r.matches_reference)
            .map(|r| r.strategy)
            .collect();
        bail!("outputs differ from reference: {}", bad.join(", "));
    }

    Ok(())
}

fn save_previews(dir: &Path, cfg: &HarnessConfig, outcome: &RunOutcome) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    save_luma_raw(
        dir.join("input.png"),
        cfg.width,
        cfg.height,
        outcome.input.data().to_vec(),
    )?;
    for (record, output) in outcome.records.iter().zip(&outcome.outputs) {
        save_luma_raw(
            dir.join(format!("output_{}.png", record.strategy)),
            cfg.width / 2,
            cfg.height / 2,
            output.clone(),
        )?;
    }

    log::info!("previews written to {}", dir.display());
    Ok(())
}

fn save_luma_raw(path: PathBuf, width: usize, height: usize, data: Vec<u8>) -> Result<()> {
    let gray = GrayImage::from_raw(width as u32, height as u32, data)
        .context("constructing GrayImage from raw bytes")?;
    gray.save(&path)
        .with_context(|| format!("saving image {}", path.display()))
}
