//! linkrank - PageRank for small linked corpora
//!
//! Ranks the pages of a directory of HTML documents two ways: by sampling a
//! long random walk, and by iterating the PageRank recurrence to a fixed
//! point. Both share one transition model and report a probability
//! distribution over pages.
//!
//! # Architecture
//!
//! ```text
//! Page Discovery → Link Extraction → Corpus → { Sampling, Iteration } → Rendering
//!       ↓                ↓              ↓           ↓          ↓             ↓
//!    ignore            regex       validated     rand     petgraph     text / JSON
//!    crate          <a href>       link map     walk     power iter    (owo-colors)
//! ```
//!
//! # Example
//!
//! ```
//! use linkrank::{Corpus, RankingConfig, rank_corpus};
//!
//! let corpus = Corpus::from_links([("a", vec!["b"]), ("b", vec!["a"])]).unwrap();
//! let config = RankingConfig { seed: Some(7), ..Default::default() };
//! let report = rank_corpus(&corpus, &config).unwrap();
//!
//! assert!((report.iteration.ranks["a"] - 0.5).abs() < 0.01);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod extraction;
pub mod ranking;
pub mod rendering;
pub mod types;

use tracing::info;

// Re-export core types
pub use error::{RankError, Result};
pub use extraction::load_corpus;
pub use ranking::{
    IterationOutcome, IterativeRanker, iterate_rank, sample_rank, sample_rank_seeded,
    sample_rank_with_rng, transition,
};
pub use rendering::RankReport;
pub use types::{Corpus, Distribution, RankingConfig};

/// Run both estimators over `corpus` with the given settings.
///
/// Sampling runs first, then iteration. A seed in `config` makes the sampling
/// half reproducible; the iterative half is always deterministic.
pub fn rank_corpus(corpus: &Corpus, config: &RankingConfig) -> Result<RankReport> {
    config.validate()?;
    corpus.ensure_not_empty()?;

    let sampling = match config.seed {
        Some(seed) => sample_rank_seeded(corpus, config.damping_factor, config.sample_count, seed)?,
        None => sample_rank(corpus, config.damping_factor, config.sample_count)?,
    };
    info!(samples = config.sample_count, "sampling estimate complete");

    let iteration = IterativeRanker::new()
        .with_damping(config.damping_factor)
        .with_threshold(config.convergence_threshold)
        .with_max_iterations(config.max_iterations)
        .run(corpus)?;
    info!(
        iterations = iteration.iterations,
        converged = iteration.converged,
        "iterative solution complete"
    );

    Ok(RankReport {
        sampling,
        samples: config.sample_count,
        iteration,
    })
}
