//! Transition model for the random surfer.
//!
//! From any page with out-links the surfer follows one of them with
//! probability `d`, spread evenly, and teleports to a uniformly random page
//! with probability `1 - d`. A dangling page links nowhere, so it is treated
//! as linking to every page in the corpus, itself included. That keeps the
//! chain irreducible and the walk never gets stuck.

use crate::error::{RankError, Result, check_damping};
use crate::types::{Corpus, Distribution};

/// Probability distribution over the next page to visit from `page`.
///
/// Every corpus page gets an entry, not just the out-links of `page`.
pub fn transition(corpus: &Corpus, page: &str, damping_factor: f64) -> Result<Distribution> {
    corpus.ensure_not_empty()?;
    check_damping(damping_factor)?;

    let links = corpus
        .links(page)
        .ok_or_else(|| RankError::invalid(format!("page '{}' is not in the corpus", page)))?;

    let n = corpus.len() as f64;

    if links.is_empty() {
        return Ok(corpus.pages().map(|p| (p.to_string(), 1.0 / n)).collect());
    }

    let teleport = (1.0 - damping_factor) / n;
    let follow = damping_factor / links.len() as f64;

    Ok(corpus
        .pages()
        .map(|p| {
            let weight = if links.contains(p) { teleport + follow } else { teleport };
            (p.to_string(), weight)
        })
        .collect())
}
