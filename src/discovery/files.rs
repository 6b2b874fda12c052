//! Page file discovery inside a corpus directory.
//!
//! This module implements discovery that:
//! - Looks only at the top level of the corpus directory (no recursion)
//! - Respects ignore files inside the corpus directory, never its ancestors
//! - Keeps files whose name matches a configured include pattern
//! - Returns deterministic (sorted) results

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{RankError, Result};

/// Find page files directly inside `directory`.
///
/// ## Returns
/// Sorted vector of paths to files whose name matches `config.include`.
pub fn find_page_files(directory: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(RankError::io(
            directory,
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "corpus directory does not exist or is not a directory",
            ),
        ));
    }

    let walker = WalkBuilder::new(directory)
        .hidden(false)          // Don't automatically skip hidden files (let .gitignore decide)
        .git_ignore(true)       // Respect .gitignore
        .parents(false)         // Only ignore files inside the corpus directory apply
        .git_global(false)      // Ignore the user's global excludes file
        .git_exclude(true)      // Respect .git/info/exclude
        .require_git(false)     // Work even in non-git directories
        .follow_links(false)    // Don't follow symlinks
        .max_depth(Some(1))     // Pages live at the top level only
        .build();

    let mut files = Vec::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                // Skip entries we can't read (permissions, broken symlinks, etc.)
                debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!("skipping page with non UTF-8 file name: {}", path.display());
            continue;
        };

        if config.matches_include(file_name) {
            files.push(path.to_path_buf());
        }
    }

    // Sort for reproducibility
    files.sort();

    Ok(files)
}
