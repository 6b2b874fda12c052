//! End-to-end checks: directory of pages in, rank report out.

use std::fs;
use std::path::{Path, PathBuf};

use linkrank::config::Config;
use linkrank::{Corpus, RankError, RankingConfig, load_corpus, rank_corpus};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn seeded() -> RankingConfig {
    RankingConfig {
        seed: Some(2024),
        ..Default::default()
    }
}

#[test]
fn test_fixture_corpus_loads() {
    let corpus = load_corpus(&fixture("corpus0"), &Config::default()).unwrap();

    assert_eq!(
        corpus.pages().collect::<Vec<_>>(),
        vec!["1.html", "2.html", "3.html", "4.html"]
    );
    assert_eq!(corpus.link_count(), 6);
    assert!(corpus.dangling_pages().is_empty());
}

#[test]
fn test_fixture_corpus_ranks() {
    let corpus = load_corpus(&fixture("corpus0"), &Config::default()).unwrap();
    let report = rank_corpus(&corpus, &seeded()).unwrap();

    let expected = [
        ("1.html", 0.2199),
        ("2.html", 0.4292),
        ("3.html", 0.2199),
        ("4.html", 0.1310),
    ];

    for (page, rank) in expected {
        let iterative = report.iteration.ranks[page];
        let sampled = report.sampling[page];
        assert!((iterative - rank).abs() < 0.005, "{}: iterative {}", page, iterative);
        assert!((sampled - rank).abs() < 0.03, "{}: sampled {}", page, sampled);
    }
}

#[test]
fn test_report_text_is_sorted_with_four_decimals() {
    let corpus = load_corpus(&fixture("corpus0"), &Config::default()).unwrap();
    let text = rank_corpus(&corpus, &seeded()).unwrap().render_text(false);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "PageRank Results from Sampling (n = 10000)");
    assert_eq!(lines[5], "PageRank Results from Iteration");
    assert_eq!(lines.len(), 10);

    for line in lines.iter().filter(|l| l.starts_with("  ")) {
        let (_, rank) = line.rsplit_once(": ").unwrap();
        assert_eq!(rank.len(), 6, "rank '{}' should have four decimals", rank);
    }

    let pages: Vec<&str> = lines[1..5]
        .iter()
        .map(|l| l.trim().split(':').next().unwrap())
        .collect();
    assert_eq!(pages, vec!["1.html", "2.html", "3.html", "4.html"]);
}

#[test]
fn test_seeded_runs_match() {
    let corpus = load_corpus(&fixture("corpus0"), &Config::default()).unwrap();
    let first = rank_corpus(&corpus, &seeded()).unwrap();
    let second = rank_corpus(&corpus, &seeded()).unwrap();
    assert_eq!(first.sampling, second.sampling);
    assert_eq!(first.iteration.ranks, second.iteration.ranks);
}

#[test]
fn test_dangling_page_in_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.html"), r#"<a href="b.html">b</a>"#).unwrap();
    fs::write(dir.path().join("b.html"), "<p>no links here</p>").unwrap();
    fs::write(dir.path().join("c.html"), r#"<a href="a.html">a</a>"#).unwrap();

    let corpus = load_corpus(dir.path(), &Config::default()).unwrap();
    assert_eq!(corpus.dangling_pages(), vec!["b.html"]);

    let report = rank_corpus(&corpus, &seeded()).unwrap();
    assert!(report.iteration.ranks["b.html"] > 0.3);
    assert!(report.sampling["b.html"] > 0.3);

    let sum: f64 = report.iteration.ranks.values().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_empty_directory_is_empty_corpus_error() {
    let dir = TempDir::new().unwrap();
    let corpus = load_corpus(dir.path(), &Config::default()).unwrap();
    assert!(matches!(
        rank_corpus(&corpus, &RankingConfig::default()),
        Err(RankError::EmptyCorpus)
    ));
}

#[test]
fn test_gitignore_above_corpus_is_not_applied() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join(".gitignore"), "*.html\n").unwrap();

    let corpus_dir = root.path().join("corpus");
    fs::create_dir(&corpus_dir).unwrap();
    fs::write(corpus_dir.join("a.html"), r#"<a href="b.html">b</a>"#).unwrap();
    fs::write(corpus_dir.join("b.html"), r#"<a href="a.html">a</a>"#).unwrap();

    let corpus = load_corpus(&corpus_dir, &Config::default()).unwrap();
    assert_eq!(corpus.len(), 2);

    let report = rank_corpus(&corpus, &seeded()).unwrap();
    assert!((report.iteration.ranks["a.html"] - 0.5).abs() < 0.001);
}

#[test]
fn test_config_file_in_corpus_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("x.html"), r#"<a href="y.html">y</a>"#).unwrap();
    fs::write(dir.path().join("y.html"), r#"<a href="x.html">x</a>"#).unwrap();
    fs::write(dir.path().join("linkrank.toml"), "sample-count = 2000\nseed = 5").unwrap();

    let config = Config::load(dir.path(), None).unwrap();
    config.validate().unwrap();

    let corpus = load_corpus(dir.path(), &config).unwrap();
    let report = rank_corpus(&corpus, &config.ranking).unwrap();

    assert_eq!(report.samples, 2000);
    assert!((report.iteration.ranks["x.html"] - 0.5).abs() < 0.001);
}

#[test]
fn test_single_page_corpus() {
    let corpus = Corpus::from_links([("index.html", Vec::<&str>::new())]).unwrap();
    let report = rank_corpus(&corpus, &seeded()).unwrap();
    assert_eq!(report.sampling["index.html"], 1.0);
    assert!((report.iteration.ranks["index.html"] - 1.0).abs() < 1e-12);
}
