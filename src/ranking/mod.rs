//! Ranking algorithms - from a link graph to PageRank.
//!
//! Two estimators share one transition model:
//! - Sampling: visitation frequency of a long random walk (randomized)
//! - Iterative: fixed-point power iteration (deterministic)
//!
//! Both return a [`Distribution`](crate::types::Distribution) covering every
//! page and summing to 1.

mod iterative;
mod sampling;
mod transition;

pub use iterative::{IterationOutcome, IterativeRanker, iterate_rank};
pub use sampling::{sample_rank, sample_rank_seeded, sample_rank_with_rng};
pub use transition::transition;
