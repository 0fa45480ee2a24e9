//! Configuration management for HF/MP2 energy calculations
//!
//! This module handles configuration structures, defaults, and command-line
//! overrides.

mod args;

pub use args::Args;

use crate::dataset::DEFAULT_ERI_CHUNK_SIZE;
use crate::mp2_impl::DEFAULT_DEGENERACY_THRESHOLD;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Main configuration structure for an energy calculation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Path to the integral dataset
    #[serde(default)]
    pub dataset: Option<String>,
    /// Number of sparse integrals requested per read
    #[serde(default)]
    pub eri_chunk_size: Option<usize>,
    #[serde(default)]
    pub hf: HfParams,
    #[serde(default)]
    pub mp2: Option<Mp2Params>,
    /// Optional path of a YAML energy report
    #[serde(default)]
    pub report: Option<String>,
}

/// How two-electron integrals are looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    /// Hash map keyed by canonical index order
    Indexed,
    /// Linear scan over the stored records
    Scan,
}

/// Source of the occupied-virtual integrals in the MP2 loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mp2Algorithm {
    /// Dense G(i,j,a,b) tensor built once from the sparse table
    Dense,
    /// Query the integral resolver for every term
    Direct,
}

/// HF-specific parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HfParams {
    #[serde(default)]
    pub resolver: Option<ResolverKind>,
}

impl Default for HfParams {
    fn default() -> Self {
        HfParams {
            resolver: Some(ResolverKind::Indexed),
        }
    }
}

impl HfParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        if self.resolver.is_none() {
            self.resolver = Self::default().resolver;
        }
        self
    }
}

/// MP2 calculation parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Mp2Params {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub algorithm: Option<Mp2Algorithm>,
    /// Smallest accepted |ε_i + ε_j - ε_a - ε_b|
    #[serde(default)]
    pub degeneracy_threshold: Option<f64>,
}

impl Default for Mp2Params {
    fn default() -> Self {
        Mp2Params {
            enabled: Some(true),
            algorithm: Some(Mp2Algorithm::Dense),
            degeneracy_threshold: Some(DEFAULT_DEGENERACY_THRESHOLD),
        }
    }
}

impl Mp2Params {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.enabled.is_none() {
            self.enabled = defaults.enabled;
        }
        if self.algorithm.is_none() {
            self.algorithm = defaults.algorithm;
        }
        if self.degeneracy_threshold.is_none() {
            self.degeneracy_threshold = defaults.degeneracy_threshold;
        }
        self
    }
}

impl Config {
    /// Apply defaults to all configuration sections
    pub fn with_defaults(mut self) -> Self {
        if self.eri_chunk_size.is_none() {
            self.eri_chunk_size = Some(DEFAULT_ERI_CHUNK_SIZE);
        }
        self.hf = self.hf.with_defaults();
        self.mp2 = Some(self.mp2.take().unwrap_or_default().with_defaults());
        self
    }

    /// Override configuration values with those given on the command line
    pub fn merge_args(mut self, args: &Args) -> Self {
        if let Some(ref dataset) = args.dataset {
            self.dataset = Some(dataset.clone());
        }
        if let Some(chunk) = args.eri_chunk_size {
            self.eri_chunk_size = Some(chunk);
        }
        if let Some(resolver) = args.resolver {
            self.hf.resolver = Some(resolver);
        }
        if let Some(ref report) = args.report {
            self.report = Some(report.clone());
        }

        let mut mp2 = self.mp2.take().unwrap_or_default();
        if args.no_mp2 {
            mp2.enabled = Some(false);
        }
        if let Some(algorithm) = args.mp2_algorithm {
            mp2.algorithm = Some(algorithm);
        }
        if let Some(threshold) = args.degeneracy_threshold {
            mp2.degeneracy_threshold = Some(threshold);
        }
        self.mp2 = Some(mp2);
        self
    }

    pub fn eri_chunk_size(&self) -> usize {
        self.eri_chunk_size.unwrap_or(DEFAULT_ERI_CHUNK_SIZE)
    }

    pub fn hf_resolver(&self) -> ResolverKind {
        self.hf.resolver.unwrap_or(ResolverKind::Indexed)
    }

    /// Check if MP2 calculation is enabled
    pub fn is_mp2_enabled(&self) -> bool {
        self.mp2.as_ref().and_then(|m| m.enabled).unwrap_or(true)
    }

    /// Get the MP2 algorithm
    pub fn mp2_algorithm(&self) -> Mp2Algorithm {
        self.mp2
            .as_ref()
            .and_then(|m| m.algorithm)
            .unwrap_or(Mp2Algorithm::Dense)
    }

    pub fn mp2_degeneracy_threshold(&self) -> f64 {
        self.mp2
            .as_ref()
            .and_then(|m| m.degeneracy_threshold)
            .unwrap_or(DEFAULT_DEGENERACY_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_defaults() {
        let config = Config::default().with_defaults();

        assert_eq!(config.eri_chunk_size(), DEFAULT_ERI_CHUNK_SIZE);
        assert_eq!(config.hf_resolver(), ResolverKind::Indexed);
        assert!(config.is_mp2_enabled());
        assert_eq!(config.mp2_algorithm(), Mp2Algorithm::Dense);
        assert_eq!(config.mp2_degeneracy_threshold(), 1e-10);
        assert!(config.dataset.is_none());
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
dataset: example/h2_minimal.yaml
eri_chunk_size: 128
hf:
  resolver: scan
mp2:
  algorithm: direct
  degeneracy_threshold: 1.0e-8
"#;

        let config: Config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        assert_eq!(config.dataset.as_deref(), Some("example/h2_minimal.yaml"));
        assert_eq!(config.eri_chunk_size(), 128);
        assert_eq!(config.hf_resolver(), ResolverKind::Scan);
        assert!(config.is_mp2_enabled());
        assert_eq!(config.mp2_algorithm(), Mp2Algorithm::Direct);
        assert_eq!(config.mp2_degeneracy_threshold(), 1e-8);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let yaml = r#"
mp2:
  algorithm: quartic
"#;
        assert!(serde_yml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_command_line_overrides() {
        let args = Args::parse_from([
            "mp2_energy",
            "--dataset",
            "other.yaml",
            "--no-mp2",
            "--resolver",
            "scan",
            "--degeneracy-threshold",
            "1e-6",
        ]);
        let config = Config::default().with_defaults().merge_args(&args);

        assert_eq!(config.dataset.as_deref(), Some("other.yaml"));
        assert!(!config.is_mp2_enabled());
        assert_eq!(config.hf_resolver(), ResolverKind::Scan);
        assert_eq!(config.mp2_degeneracy_threshold(), 1e-6);
        assert_eq!(config.mp2_algorithm(), Mp2Algorithm::Dense);
    }
}
