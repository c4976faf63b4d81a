//! # Design
//!
//! - Removal failures are scoped to one item and never abort a run.
//! - Capture the operation and path so a failed item can be retried by hand.
//! - Preserve the IO source without interpolating it into the message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for removal of a single target.
pub type RemoveResult<T> = Result<T, RemoveError>;

/// Errors produced while removing one item's target.
#[derive(Debug, Error)]
pub enum RemoveError {
    /// IO failures while inspecting or removing the target.
    #[error("fsops io failure")]
    Io {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Target path.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl RemoveError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// One-line description including the operation and the IO cause.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Io {
                operation,
                path,
                source,
            } => format!("{operation} {}: {source}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_helper_builds_variant_with_source() {
        let err = RemoveError::io(
            "remove_file",
            "/tv/show.mkv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(
            err,
            RemoveError::Io {
                operation: "remove_file",
                ..
            }
        ));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "fsops io failure");
        assert_eq!(err.detail(), "remove_file /tv/show.mkv: denied");
    }
}
