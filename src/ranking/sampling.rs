//! Sampling estimator: PageRank as random-walk visitation frequency.
//!
//! A single surfer walks `n` steps over the transition model. The fraction of
//! steps spent on each page estimates its PageRank; the estimate converges in
//! expectation to the iterative solver's answer as `n` grows.
//!
//! The RNG is a parameter so callers can pass a seeded `StdRng` and get the
//! same walk back on every run.

use rand::Rng;
use rand::SeedableRng;
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution as _;
use rand::rngs::StdRng;
use tracing::debug;

use super::transition::transition;
use crate::error::{RankError, Result, check_damping};
use crate::types::{Corpus, Distribution};

/// Estimate PageRank by sampling `n` steps of a random walk.
///
/// Uses a freshly entropy-seeded RNG, so repeated calls give statistically
/// similar but not identical results.
pub fn sample_rank(corpus: &Corpus, damping_factor: f64, n: usize) -> Result<Distribution> {
    sample_rank_with_rng(corpus, damping_factor, n, &mut StdRng::from_entropy())
}

/// Same as [`sample_rank`] with a fixed seed, for reproducible output.
pub fn sample_rank_seeded(
    corpus: &Corpus,
    damping_factor: f64,
    n: usize,
    seed: u64,
) -> Result<Distribution> {
    sample_rank_with_rng(corpus, damping_factor, n, &mut StdRng::seed_from_u64(seed))
}

/// Estimate PageRank with a caller-supplied random number generator.
///
/// The algorithm:
/// 1. Zero a visit counter for every page
/// 2. Start on a page chosen uniformly at random
/// 3. `n` times: count the current page, then draw the next one from its
///    transition distribution
/// 4. Divide every counter by `n`
pub fn sample_rank_with_rng<R: Rng>(
    corpus: &Corpus,
    damping_factor: f64,
    n: usize,
    rng: &mut R,
) -> Result<Distribution> {
    corpus.ensure_not_empty()?;
    check_damping(damping_factor)?;
    if n < 1 {
        return Err(RankError::invalid("sample count must be at least 1"));
    }

    let pages: Vec<&str> = corpus.pages().collect();
    let mut visits = vec![0usize; pages.len()];

    // Built on the first visit to each page, then reused
    let mut choosers: Vec<Option<WeightedIndex<f64>>> = vec![None; pages.len()];

    let mut current = rng.gen_range(0..pages.len());

    for _ in 0..n {
        visits[current] += 1;

        if choosers[current].is_none() {
            let dist = transition(corpus, pages[current], damping_factor)?;
            // Distribution keys iterate in the same lexicographic order as `pages`
            let weights: Vec<f64> = dist.values().copied().collect();
            let chooser = WeightedIndex::new(&weights)
                .map_err(|e| RankError::invalid(format!("bad transition weights: {}", e)))?;
            choosers[current] = Some(chooser);
        }

        if let Some(chooser) = &choosers[current] {
            current = chooser.sample(rng);
        }
    }

    debug!(
        samples = n,
        pages = pages.len(),
        distinct_visited = visits.iter().filter(|&&v| v > 0).count(),
        "random walk finished"
    );

    Ok(pages
        .iter()
        .zip(visits)
        .map(|(page, count)| (page.to_string(), count as f64 / n as f64))
        .collect())
}
