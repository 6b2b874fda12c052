//! Corpus assembly: page files to a validated link graph.
//!
//! The page identifier is the file name. Links are pruned in two passes,
//! mirroring how a crawler sees a closed corpus:
//! 1. Self-links are dropped per page
//! 2. Links to names that are not pages of the corpus are dropped

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::debug;

use super::links::extract_links;
use crate::config::Config;
use crate::discovery::find_page_files;
use crate::error::{RankError, Result};
use crate::types::Corpus;

/// Load a corpus from a directory of pages.
///
/// An empty directory yields an empty corpus; the ranking algorithms are the
/// ones that refuse it.
pub fn load_corpus(directory: &Path, config: &Config) -> Result<Corpus> {
    let files = find_page_files(directory, config)?;

    let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for path in &files {
        let Some(page) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let content = std::fs::read_to_string(path).map_err(|e| RankError::io(path, e))?;
        let mut links = extract_links(&content);
        links.remove(page);

        debug!(page, links = links.len(), "parsed page");
        raw.insert(page.to_string(), links);
    }

    corpus_from_raw_links(raw)
}

/// Keep only links that point at other pages of the corpus, then validate.
pub fn corpus_from_raw_links(mut raw: BTreeMap<String, BTreeSet<String>>) -> Result<Corpus> {
    let pages: BTreeSet<String> = raw.keys().cloned().collect();

    let mut dropped = 0;
    for (page, links) in raw.iter_mut() {
        let before = links.len();
        links.retain(|link| link != page && pages.contains(link));
        dropped += before - links.len();
    }

    let corpus = Corpus::new(raw)?;
    debug!(
        pages = corpus.len(),
        links = corpus.link_count(),
        dropped,
        dangling = corpus.dangling_pages().len(),
        "corpus loaded"
    );

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_page(dir: &Path, name: &str, links: &[&str]) {
        let anchors: String = links
            .iter()
            .map(|l| format!("<li><a href=\"{}\">{}</a></li>\n", l, l))
            .collect();
        let html = format!(
            "<!DOCTYPE html>\n<html>\n<body>\n<h1>{}</h1>\n<ul>\n{}</ul>\n</body>\n</html>\n",
            name, anchors
        );
        fs::write(dir.join(name), html).unwrap();
    }

    #[test]
    fn test_load_corpus() {
        let dir = TempDir::new().unwrap();
        write_page(dir.path(), "1.html", &["2.html"]);
        write_page(dir.path(), "2.html", &["1.html", "3.html"]);
        write_page(dir.path(), "3.html", &[]);

        let corpus = load_corpus(dir.path(), &Config::default()).unwrap();

        assert_eq!(corpus.len(), 3);
        assert!(corpus.links("1.html").unwrap().contains("2.html"));
        assert_eq!(corpus.links("2.html").unwrap().len(), 2);
        assert!(corpus.links("3.html").unwrap().is_empty());
    }

    #[test]
    fn test_self_and_external_links_are_dropped() {
        let dir = TempDir::new().unwrap();
        write_page(
            dir.path(),
            "a.html",
            &["a.html", "b.html", "https://example.com", "missing.html"],
        );
        write_page(dir.path(), "b.html", &[]);

        let corpus = load_corpus(dir.path(), &Config::default()).unwrap();

        let links = corpus.links("a.html").unwrap();
        assert_eq!(links.len(), 1);
        assert!(links.contains("b.html"));
    }

    #[test]
    fn test_non_page_files_are_not_link_targets() {
        let dir = TempDir::new().unwrap();
        write_page(dir.path(), "a.html", &["notes.txt"]);
        fs::write(dir.path().join("notes.txt"), "plain text").unwrap();

        let corpus = load_corpus(dir.path(), &Config::default()).unwrap();
        assert_eq!(corpus.len(), 1);
        assert!(corpus.links("a.html").unwrap().is_empty());
    }

    #[test]
    fn test_empty_directory_gives_empty_corpus() {
        let dir = TempDir::new().unwrap();
        let corpus = load_corpus(dir.path(), &Config::default()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_corpus_from_raw_links() {
        let mut raw = BTreeMap::new();
        raw.insert(
            "x".to_string(),
            ["x", "y", "z"].iter().map(|s| s.to_string()).collect(),
        );
        raw.insert("y".to_string(), BTreeSet::new());

        let corpus = corpus_from_raw_links(raw).unwrap();
        assert_eq!(corpus.link_count(), 1);
    }
}
