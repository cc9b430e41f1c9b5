//! Errors raised while walking a directory tree.

use std::path::PathBuf;

use thiserror::Error;

/// Any failure while listing a directory or reading an entry aborts the render.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Path does not exist.
    #[error("path not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Permission denied for a path.
    #[error("permission denied: {path}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path exists but cannot be listed as a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rendered tree could not be written out.
    #[error("failed to write tree")]
    Write(#[source] std::io::Error),
}

impl TreeError {
    /// Classify an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path, source },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path, source },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn io_errors_are_classified() {
        let err = TreeError::io("/x", Error::new(ErrorKind::NotFound, "gone"));
        assert!(matches!(err, TreeError::NotFound { .. }));

        let err = TreeError::io("/x", Error::new(ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, TreeError::PermissionDenied { .. }));

        let err = TreeError::io("/x", Error::new(ErrorKind::NotADirectory, "file"));
        assert!(matches!(err, TreeError::NotADirectory { .. }));

        let err = TreeError::io("/x", Error::other("boom"));
        assert!(matches!(err, TreeError::Io { .. }));
    }

    #[test]
    fn message_names_the_path() {
        let err = TreeError::io("/some/dir", Error::new(ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "permission denied: /some/dir");
    }

    #[test]
    fn os_error_is_kept_as_source() {
        for kind in [
            ErrorKind::NotFound,
            ErrorKind::PermissionDenied,
            ErrorKind::NotADirectory,
            ErrorKind::Other,
        ] {
            let err = TreeError::io("/x", Error::new(kind, "os says no"));
            let source = err.source().expect("io source");
            assert_eq!(source.to_string(), "os says no");
            // cause is only reported once along the chain
            assert!(!err.to_string().contains("os says no"), "{kind:?}");
        }
    }
}
