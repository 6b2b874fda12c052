//! Error types for linkrank

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RankError
pub type Result<T> = std::result::Result<T, RankError>;

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum RankError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Corpus is empty: no pages to rank")]
    EmptyCorpus,

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid page pattern: {0}")]
    Pattern(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RankError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Reject damping factors outside the open interval (0, 1).
///
/// NaN fails both comparisons and is rejected as well.
pub fn check_damping(damping_factor: f64) -> Result<()> {
    if damping_factor > 0.0 && damping_factor < 1.0 {
        Ok(())
    } else {
        Err(RankError::invalid(format!(
            "damping factor must be in (0, 1), got {}",
            damping_factor
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_damping_bounds() {
        assert!(check_damping(0.85).is_ok());
        assert!(check_damping(0.01).is_ok());
        assert!(check_damping(0.0).is_err());
        assert!(check_damping(1.0).is_err());
        assert!(check_damping(-0.5).is_err());
        assert!(check_damping(f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = RankError::invalid("sample count must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid input: sample count must be at least 1"
        );

        let err = RankError::io(
            "corpus/missing.html",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("corpus/missing.html"));
    }
}
