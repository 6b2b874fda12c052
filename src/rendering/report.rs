//! Rank report rendering.
//!
//! Text layout, one block per algorithm, pages sorted lexicographically and
//! ranks printed with four decimals:
//!
//! ```text
//! PageRank Results from Sampling (n = 10000)
//!   1.html: 0.2223
//!   2.html: 0.4303
//! PageRank Results from Iteration
//!   1.html: 0.2202
//!   2.html: 0.4289
//! ```

use serde::Serialize;

use super::colors::Colorizer;
use crate::error::Result;
use crate::ranking::IterationOutcome;
use crate::types::Distribution;

/// Decimal places used for ranks in the text report
pub const RANK_PRECISION: usize = 4;

/// Output of one full run: both estimators over the same corpus.
#[derive(Debug, Clone)]
pub struct RankReport {
    /// Sampling estimate
    pub sampling: Distribution,
    /// Number of random-walk steps behind `sampling`
    pub samples: usize,
    /// Iterative solution
    pub iteration: IterationOutcome,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    sampling: JsonSampling<'a>,
    iteration: JsonIteration<'a>,
}

#[derive(Serialize)]
struct JsonSampling<'a> {
    samples: usize,
    ranks: &'a Distribution,
}

#[derive(Serialize)]
struct JsonIteration<'a> {
    iterations: usize,
    converged: bool,
    delta: f64,
    ranks: &'a Distribution,
}

impl RankReport {
    /// Render the plain (optionally colored) text report.
    pub fn render_text(&self, use_color: bool) -> String {
        let colors = Colorizer::new(use_color);
        let mut out = String::new();

        out.push_str(&colors.header(&format!(
            "PageRank Results from Sampling (n = {})",
            self.samples
        )));
        out.push('\n');
        render_ranks(&mut out, &self.sampling, &colors);

        out.push_str(&colors.header("PageRank Results from Iteration"));
        out.push('\n');
        render_ranks(&mut out, &self.iteration.ranks, &colors);

        if !self.iteration.converged {
            out.push_str(&colors.note(&format!(
                "  (not converged after {} iterations, last change {:.6})",
                self.iteration.iterations, self.iteration.delta
            )));
            out.push('\n');
        }

        out
    }

    /// Render the report as pretty-printed JSON.
    pub fn render_json(&self) -> Result<String> {
        let report = JsonReport {
            sampling: JsonSampling {
                samples: self.samples,
                ranks: &self.sampling,
            },
            iteration: JsonIteration {
                iterations: self.iteration.iterations,
                converged: self.iteration.converged,
                delta: self.iteration.delta,
                ranks: &self.iteration.ranks,
            },
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

/// `Distribution` is a BTreeMap, so iteration is already sorted by page.
fn render_ranks(out: &mut String, ranks: &Distribution, colors: &Colorizer) {
    for (page, rank) in ranks {
        out.push_str(&format!(
            "  {}: {:.*}\n",
            colors.page(page),
            RANK_PRECISION,
            rank
        ));
    }
}
