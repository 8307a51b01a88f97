//! Error types for configuration loading and validation.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while loading, parsing, or validating a configuration.
pub enum Error {
    #[error("{message}")]
    /// I/O or filesystem read error.
    Read {
        /// Optional path associated with the read error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
    #[error("{message}")]
    /// RON syntax error, or a value of the wrong shape.
    Parse {
        /// Optional path associated with the parse error.
        path: Option<PathBuf>,
        /// Parser message, including the `line:column` position.
        message: String,
    },
    #[error("{message}")]
    /// A well-formed value outside its allowed range.
    Validation {
        /// Optional path associated with the validation error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Render a human-friendly error message including the path when available.
    pub fn pretty(&self) -> String {
        let (kind, path, message) = match self {
            Self::Read { path, message } => ("Read error", path, message),
            Self::Parse { path, message } => ("Config parse error", path, message),
            Self::Validation { path, message } => ("Config validation error", path, message),
        };
        match path {
            Some(p) => format!("{kind} at {}: {message}", p.display()),
            None => format!("{kind}: {message}"),
        }
    }

    /// Access the optional path attached to this error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Validation { path, .. } => {
                path.as_deref()
            }
        }
    }

    /// Attach `path` to this error, replacing any existing one.
    pub(crate) fn with_path(self, p: &Path) -> Self {
        let path = Some(p.to_path_buf());
        match self {
            Self::Read { message, .. } => Self::Read { path, message },
            Self::Parse { message, .. } => Self::Parse { path, message },
            Self::Validation { message, .. } => Self::Validation { path, message },
        }
    }
}
