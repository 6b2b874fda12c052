//! linkrank CLI - PageRank for a directory of HTML pages
//!
//! Orchestrates the pipeline:
//!
//! 1. Configuration: defaults, then linkrank.toml, then command-line flags
//! 2. Corpus Loading: discover pages, extract links, validate the graph
//! 3. Sampling: random-walk estimate over the transition model
//! 4. Iteration: fixed-point PageRank
//! 5. Rendering: sorted text report (or JSON) on stdout
//!
//! Diagnostics go to stderr through `tracing`, so stdout only ever carries
//! the report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkrank::config::{Config, ConfigOverrides};
use linkrank::{load_corpus, rank_corpus};

/// Rank the pages of a linked corpus with PageRank
///
/// Every `*.html` file directly inside CORPUS is a page; its `<a href="...">`
/// links to other pages of the corpus form the link graph. Ranks are
/// computed twice: by sampling a random walk, and by iterating to a fixed
/// point.
///
/// Examples:
///   linkrank corpus0                     # Defaults: d = 0.85, n = 10000
///   linkrank corpus0 --seed 42           # Reproducible sampling
///   linkrank corpus0 -d 0.9 -n 100000    # Stronger links, more samples
///   linkrank corpus0 --format json       # Machine-readable output
#[derive(Parser, Debug)]
#[command(name = "linkrank")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Directory containing the corpus pages
    #[arg(value_name = "CORPUS")]
    pub corpus: PathBuf,

    /// Damping factor, in (0, 1)
    ///
    /// Probability of following a link rather than jumping to a random page.
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of random-walk samples for the sampling estimate
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Convergence threshold for the iterative solver
    ///
    /// Iteration stops once no page's rank changes by this much or more.
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Safety cap on iterative solver rounds
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Seed the sampling RNG for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file (defaults to CORPUS/linkrank.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    ///
    /// Shows progress on stderr: config in effect, pages loaded, iteration
    /// counts. `RUST_LOG` overrides this.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = run(&cli)?;

    // Print to stdout (can be piped or redirected)
    print!("{}", output);

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Execute the full linkrank pipeline and return the rendered report.
fn run(cli: &Cli) -> Result<String> {
    let overrides = ConfigOverrides {
        damping_factor: cli.damping,
        sample_count: cli.samples,
        threshold: cli.threshold,
        max_iterations: cli.max_iterations,
        seed: cli.seed,
    };

    let config = Config::load(&cli.corpus, cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(&overrides);
    config.validate().context("Invalid configuration")?;

    info!("linkrank v{}", env!("CARGO_PKG_VERSION"));
    info!("corpus: {}", cli.corpus.display());
    for line in config.display_summary().lines() {
        info!("{}", line.trim());
    }

    let corpus = load_corpus(&cli.corpus, &config).with_context(|| {
        format!("Failed to load corpus from '{}'", cli.corpus.display())
    })?;
    info!(
        pages = corpus.len(),
        links = corpus.link_count(),
        "corpus loaded"
    );

    let report = rank_corpus(&corpus, &config.ranking).context("Ranking failed")?;

    let use_color = !cli.no_color && std::io::IsTerminal::is_terminal(&std::io::stdout());

    match cli.format {
        OutputFormat::Text => Ok(report.render_text(use_color)),
        OutputFormat::Json => {
            let mut json = report.render_json()?;
            json.push('\n');
            Ok(json)
        }
    }
}
