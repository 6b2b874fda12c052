//! Corpus page discovery.
//!
//! Uses the `ignore` crate to list the corpus directory while respecting
//! .gitignore, then keeps the files that match the configured page patterns.

mod files;

pub use files::find_page_files;
