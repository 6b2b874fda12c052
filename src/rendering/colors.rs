//! ANSI color helpers for the rank report.
//!
//! Color scheme optimized for both light and dark terminals:
//! - High contrast for section headers
//! - Cyan page names, plain rank values so columns stay easy to scan
//! - Muted warnings for non-converged runs

use owo_colors::OwoColorize;

/// Colorize report elements; a no-op when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Section header (bold bright blue)
    pub fn header(&self, s: &str) -> String {
        if self.enabled {
            s.bright_blue().bold().to_string()
        } else {
            s.to_string()
        }
    }

    /// Page identifier (cyan)
    pub fn page(&self, s: &str) -> String {
        if self.enabled {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    /// Secondary note (dimmed yellow)
    pub fn note(&self, s: &str) -> String {
        if self.enabled {
            s.yellow().dimmed().to_string()
        } else {
            s.to_string()
        }
    }
}
