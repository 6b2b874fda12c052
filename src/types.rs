//! Core types for linkrank.
//!
//! Key design decisions:
//! - `BTreeMap`/`BTreeSet` everywhere so pages iterate in lexicographic order;
//!   a seeded random walk then visits the same pages on every run
//! - The corpus validates its link invariants once, at construction, and is
//!   immutable afterwards

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{RankError, Result, check_damping};

/// Probability distribution over every page of a corpus.
///
/// Pages with zero weight still carry an entry.
pub type Distribution = BTreeMap<String, f64>;

/// A set of pages and the in-corpus pages each one links to.
///
/// Invariants:
/// - every out-link names a page of the corpus
/// - no page links to itself
///
/// A page with no out-links is a "dangling" page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Build a corpus from an already-assembled link map, validating it.
    pub fn new(pages: BTreeMap<String, BTreeSet<String>>) -> Result<Self> {
        for (page, links) in &pages {
            if links.contains(page) {
                return Err(RankError::invalid(format!("page '{}' links to itself", page)));
            }
            if let Some(missing) = links.iter().find(|link| !pages.contains_key(*link)) {
                return Err(RankError::invalid(format!(
                    "page '{}' links to '{}', which is not in the corpus",
                    page, missing
                )));
            }
        }

        Ok(Self { pages })
    }

    /// Build a corpus from `(page, out-links)` pairs.
    ///
    /// Repeated pages have their link sets merged.
    pub fn from_links<I, P, L, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pages: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, links) in entries {
            pages
                .entry(page.into())
                .or_default()
                .extend(links.into_iter().map(Into::into));
        }
        Self::new(pages)
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the corpus has no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check whether `page` belongs to the corpus
    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Iterate over page identifiers in lexicographic order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Out-links of a page, or `None` if the page is unknown
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    /// Iterate over `(page, out-links)` in lexicographic page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.pages.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Pages with no out-links
    pub fn dangling_pages(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(page, _)| page)
            .collect()
    }

    /// Total number of links
    pub fn link_count(&self) -> usize {
        self.pages.values().map(BTreeSet::len).sum()
    }

    /// Fail with `EmptyCorpus` when there is nothing to rank
    pub(crate) fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(RankError::EmptyCorpus)
        } else {
            Ok(())
        }
    }
}

/// Configuration for the ranking algorithms.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingConfig {
    /// Probability of following a link instead of teleporting
    pub damping_factor: f64,
    /// Number of random-walk steps for the sampling estimator
    pub sample_count: usize,
    /// Per-page change below which the iterative solver stops
    pub convergence_threshold: f64,
    /// Safety cap on iterative solver rounds
    pub max_iterations: usize,
    /// Seed for the sampling RNG; `None` draws from OS entropy
    pub seed: Option<u64>,
}

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_SAMPLES: usize = 10_000;
pub const DEFAULT_THRESHOLD: f64 = 0.001;
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000;

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING,
            sample_count: DEFAULT_SAMPLES,
            convergence_threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl RankingConfig {
    /// Check every field is within its valid range.
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping_factor)?;

        if self.sample_count < 1 {
            return Err(RankError::invalid("sample count must be at least 1"));
        }
        if !(self.convergence_threshold > 0.0) {
            return Err(RankError::invalid(format!(
                "convergence threshold must be positive, got {}",
                self.convergence_threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::invalid("max iterations must be at least 1"));
        }

        Ok(())
    }
}
