use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use decimate_lab::{Geometry, Image, Strategy, synthetic};
use serde::{Deserialize, Serialize};

/// Synthetic input content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    #[default]
    Disc,
    Ramp,
}

impl Pattern {
    pub fn generate(self, width: usize, height: usize) -> Image<u8> {
        match self {
            Pattern::Disc => synthetic::disc_u8(width, height),
            Pattern::Ramp => synthetic::ramp_u8(width, height),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub width: usize,
    pub height: usize,
    /// Timed calls per strategy; the report carries mean and best.
    pub repeats: usize,
    /// Strategy names in run order.
    pub strategies: Vec<String>,
    pub pattern: Pattern,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            width: Geometry::REFERENCE.src_width(),
            height: Geometry::REFERENCE.src_height(),
            repeats: 1,
            strategies: Strategy::ALL.iter().map(|s| s.name().to_owned()).collect(),
            pattern: Pattern::Disc,
        }
    }
}

impl HarnessConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
    }

    pub fn geometry(&self) -> Result<Geometry> {
        Geometry::new(self.width, self.height)
            .with_context(|| format!("invalid geometry {}x{}", self.width, self.height))
    }

    pub fn resolve_strategies(&self) -> Result<Vec<Strategy>> {
        if self.strategies.is_empty() {
            bail!("no strategies selected");
        }
        self.strategies
            .iter()
            .map(|name| name.parse::<Strategy>().map_err(anyhow::Error::from))
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        self.geometry()?;
        self.resolve_strategies()?;
        if self.repeats == 0 {
            bail!("repeats must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use decimate_lab::Strategy;

    use super::{HarnessConfig, Pattern};

    #[test]
    fn defaults_match_reference_frame() {
        let cfg = HarnessConfig::default();
        assert_eq!((cfg.width, cfg.height), (15360, 8640));
        assert_eq!(cfg.repeats, 1);
        assert_eq!(cfg.pattern, Pattern::Disc);
        assert_eq!(
            cfg.resolve_strategies().expect("default names parse"),
            Strategy::ALL.to_vec()
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: HarnessConfig =
            serde_json::from_str(r#"{ "width": 64, "height": 32, "pattern": "ramp" }"#)
                .expect("valid json");
        assert_eq!((cfg.width, cfg.height), (64, 32));
        assert_eq!(cfg.pattern, Pattern::Ramp);
        assert_eq!(cfg.repeats, 1);
        assert_eq!(cfg.strategies.len(), Strategy::ALL.len());
    }

    #[test]
    fn validation_errors() {
        let odd = HarnessConfig {
            width: 7,
            ..HarnessConfig::default()
        };
        assert!(odd.validate().is_err());

        let unknown = HarnessConfig {
            strategies: vec!["simd".to_owned()],
            ..HarnessConfig::default()
        };
        assert!(unknown.validate().is_err());

        let none = HarnessConfig {
            strategies: Vec::new(),
            ..HarnessConfig::default()
        };
        assert!(none.validate().is_err());

        let zero_repeats = HarnessConfig {
            repeats: 0,
            ..HarnessConfig::default()
        };
        assert!(zero_repeats.validate().is_err());
    }

    #[test]
    fn patterns_generate_requested_size() {
        for pattern in [Pattern::Disc, Pattern::Ramp] {
            let img = pattern.generate(12, 6);
            assert_eq!((img.width(), img.height()), (12, 6));
        }
    }
}
