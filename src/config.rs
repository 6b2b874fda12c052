//! Configuration loading from linkrank.toml.
//!
//! Precedence, highest first:
//! 1. Command-line flags
//! 2. `--config <path>`, or `linkrank.toml` inside the corpus directory
//! 3. Compiled-in defaults
//!
//! ## Example
//!
//! ```toml
//! damping-factor = 0.85
//! sample-count = 10000
//! threshold = 0.001
//! max-iterations = 1000
//! seed = 42
//! include = ["*.html", "*.htm"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RankError, Result};
use crate::types::RankingConfig;

/// File looked up in the corpus directory when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = "linkrank.toml";

/// Default page patterns, matched against file names.
pub const DEFAULT_INCLUDE: &[&str] = &["*.html"];

/// Effective linkrank configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,

    /// Algorithm parameters.
    pub ranking: RankingConfig,

    /// Glob patterns selecting which files in the corpus directory are pages.
    pub include: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            ranking: RankingConfig::default(),
            include: DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    damping_factor: Option<f64>,
    sample_count: Option<usize>,
    threshold: Option<f64>,
    max_iterations: Option<usize>,
    seed: Option<u64>,
    include: Option<Vec<String>>,
}

/// Values supplied on the command line; `None` keeps the file/default value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub damping_factor: Option<f64>,
    pub sample_count: Option<usize>,
    pub threshold: Option<f64>,
    pub max_iterations: Option<usize>,
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration for a corpus.
    ///
    /// An explicit path must exist and parse. Without one, `linkrank.toml` in
    /// the corpus directory is used if present, else the defaults.
    pub fn load(corpus_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = corpus_dir.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| RankError::io(&path, e))?;
        Self::from_toml_str(&content, Some(path))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str, source: Option<PathBuf>) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).map_err(|e| {
            let origin = source
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<inline>".to_string());
            RankError::Config(format!("{}: {}", origin, e))
        })?;
        Ok(Self::from_raw(raw, source))
    }

    fn from_raw(raw: RawConfig, source: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            source,
            ranking: RankingConfig {
                damping_factor: raw.damping_factor.unwrap_or(defaults.ranking.damping_factor),
                sample_count: raw.sample_count.unwrap_or(defaults.ranking.sample_count),
                convergence_threshold: raw
                    .threshold
                    .unwrap_or(defaults.ranking.convergence_threshold),
                max_iterations: raw.max_iterations.unwrap_or(defaults.ranking.max_iterations),
                seed: raw.seed,
            },
            include: raw.include.unwrap_or(defaults.include),
        }
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(d) = overrides.damping_factor {
            self.ranking.damping_factor = d;
        }
        if let Some(n) = overrides.sample_count {
            self.ranking.sample_count = n;
        }
        if let Some(t) = overrides.threshold {
            self.ranking.convergence_threshold = t;
        }
        if let Some(m) = overrides.max_iterations {
            self.ranking.max_iterations = m;
        }
        if overrides.seed.is_some() {
            self.ranking.seed = overrides.seed;
        }
        self
    }

    /// Check ranges and page patterns.
    pub fn validate(&self) -> Result<()> {
        self.ranking.validate()?;

        if self.include.is_empty() {
            return Err(RankError::Pattern("include list is empty".to_string()));
        }
        for pattern in &self.include {
            if pattern.trim().is_empty() {
                return Err(RankError::Pattern("empty include pattern".to_string()));
            }
            // Pages are looked up directly inside the corpus directory
            if pattern.contains('/') || pattern.contains('\\') {
                return Err(RankError::Pattern(format!(
                    "'{}': patterns match file names, not paths",
                    pattern
                )));
            }
        }

        Ok(())
    }

    /// Check if a file name matches any include pattern.
    pub fn matches_include(&self, file_name: &str) -> bool {
        self.include
            .iter()
            .any(|pattern| glob_match::glob_match(pattern, file_name))
    }

    /// Format config for verbose display.
    pub fn display_summary(&self) -> String {
        let mut lines = Vec::new();

        match &self.source {
            Some(source) => lines.push(format!("   Config: {}", source.display())),
            None => lines.push("   Config: (defaults)".to_string()),
        }

        let r = &self.ranking;
        lines.push(format!("   Damping: {}", r.damping_factor));
        lines.push(format!("   Samples: {}", r.sample_count));
        lines.push(format!(
            "   Threshold: {} (cap {} iterations)",
            r.convergence_threshold, r.max_iterations
        ));
        if let Some(seed) = r.seed {
            lines.push(format!("   Seed: {}", seed));
        }
        lines.push(format!("   Include: {}", self.include.join(", ")));

        lines.join("\n")
    }
}
