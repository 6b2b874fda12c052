//! Iterative PageRank solver.
//!
//! Builds a directed graph where:
//! - Nodes represent pages
//! - Edges represent links (page A links to page B => edge A -> B)
//!
//! and runs power iteration on the PageRank recurrence until no page moves
//! by more than the convergence threshold. Fully deterministic.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, warn};

use crate::error::{RankError, Result, check_damping};
use crate::types::{Corpus, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_THRESHOLD, Distribution};

/// Compute PageRank by iteration with the default threshold (0.001).
///
/// If the safety cap is hit before convergence a warning is logged and the
/// last rank vector is returned anyway.
pub fn iterate_rank(corpus: &Corpus, damping_factor: f64) -> Result<Distribution> {
    IterativeRanker::new()
        .with_damping(damping_factor)
        .run(corpus)
        .map(|outcome| outcome.ranks)
}

/// Result of an iterative PageRank computation
#[derive(Debug, Clone)]
pub struct IterationOutcome {
    /// Rank for every page
    pub ranks: Distribution,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-page change in the final iteration
    pub delta: f64,
    /// Whether the threshold was reached before the iteration cap
    pub converged: bool,
}

/// Power-iteration PageRank with configurable stopping rules
#[derive(Debug, Clone)]
pub struct IterativeRanker {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Stop once every page changes by less than this
    pub threshold: f64,
    /// Safety cap against floating-point oscillation
    pub max_iterations: usize,
}

impl Default for IterativeRanker {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl IterativeRanker {
    /// Create a new IterativeRanker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Run power iteration over the corpus.
    ///
    /// The algorithm:
    /// 1. Build the link graph, one node per page in lexicographic order
    /// 2. Start every page at `1 / N`
    /// 3. Compute the next rank vector entirely from the previous one
    /// 4. Stop when the largest per-page change drops below the threshold,
    ///    or when the iteration cap is reached
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, corpus: &Corpus) -> Result<IterationOutcome> {
        corpus.ensure_not_empty()?;
        check_damping(self.damping)?;
        if !(self.threshold > 0.0) {
            return Err(RankError::invalid(format!(
                "convergence threshold must be positive, got {}",
                self.threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::invalid("max iterations must be at least 1"));
        }

        let graph = LinkGraph::from_corpus(corpus);
        let n = graph.len();

        let mut ranks = vec![1.0 / n as f64; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations {
            iterations += 1;

            let next = graph.step(&ranks, self.damping);
            delta = max_change(&ranks, &next);
            ranks = next;

            if delta < self.threshold {
                break;
            }
        }

        let converged = delta < self.threshold;
        if converged {
            debug!(iterations, delta, "iterative PageRank converged");
        } else {
            warn!(
                iterations,
                delta,
                threshold = self.threshold,
                "iterative PageRank hit the iteration cap before converging; returning best effort"
            );
        }

        Ok(IterationOutcome {
            ranks: graph.to_distribution(&ranks),
            iterations,
            delta,
            converged,
        })
    }
}

/// Largest absolute per-page difference between two rank vectors
fn max_change(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0_f64, f64::max)
}

/// Page graph with nodes indexed in corpus order.
struct LinkGraph {
    graph: DiGraph<String, ()>,
    out_degree: Vec<usize>,
}

impl LinkGraph {
    fn from_corpus(corpus: &Corpus) -> Self {
        let mut graph = DiGraph::with_capacity(corpus.len(), corpus.link_count());

        // Nodes are added in lexicographic order, so NodeIndex(i) is the i-th page
        let nodes: std::collections::HashMap<&str, NodeIndex> = corpus
            .pages()
            .map(|page| (page, graph.add_node(page.to_string())))
            .collect();

        for (page, links) in corpus.iter() {
            for link in links {
                graph.add_edge(nodes[page], nodes[link.as_str()], ());
            }
        }

        let out_degree = graph
            .node_indices()
            .map(|node| graph.neighbors_directed(node, Direction::Outgoing).count())
            .collect();

        Self { graph, out_degree }
    }

    fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// One synchronous application of the PageRank recurrence.
    ///
    /// ```text
    /// PR'(p) = (1-d)/N + d * ( Σ PR(q) / out_degree(q)   for q linking to p
    ///                        + Σ PR(q) / N               for dangling q )
    /// ```
    ///
    /// Dangling pages link to every page, themselves included.
    fn step(&self, ranks: &[f64], damping: f64) -> Vec<f64> {
        let n = self.len() as f64;
        let teleport = (1.0 - damping) / n;

        let dangling_mass: f64 = self
            .out_degree
            .iter()
            .zip(ranks)
            .filter(|(degree, _)| **degree == 0)
            .map(|(_, rank)| rank)
            .sum();
        let dangling_share = dangling_mass / n;

        self.graph
            .node_indices()
            .map(|node| {
                let incoming: f64 = self
                    .graph
                    .neighbors_directed(node, Direction::Incoming)
                    .map(|pred| ranks[pred.index()] / self.out_degree[pred.index()] as f64)
                    .sum();

                teleport + damping * (incoming + dangling_share)
            })
            .collect()
    }

    fn to_distribution(&self, ranks: &[f64]) -> Distribution {
        self.graph
            .node_indices()
            .map(|node| (self.graph[node].clone(), ranks[node.index()]))
            .collect()
    }
}
