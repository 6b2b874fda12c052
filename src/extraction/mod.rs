//! Link graph loading from a directory of HTML pages.
//!
//! This module handles:
//! - Extracting anchor `href` targets from page markup
//! - Assembling a validated [`Corpus`](crate::types::Corpus) with self-links
//!   and out-of-corpus links removed

mod corpus;
mod links;

pub use corpus::{corpus_from_raw_links, load_corpus};
pub use links::extract_links;
