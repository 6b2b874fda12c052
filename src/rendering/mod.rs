//! Output rendering - from rank results to terminal/text output.
//!
//! Supports two formats:
//! - Text: sorted page list with four-decimal ranks, optional ANSI color
//! - JSON: both results plus iteration metadata, for scripting

mod colors;
mod report;

pub use colors::Colorizer;
pub use report::{RANK_PRECISION, RankReport};
