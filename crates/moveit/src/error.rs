//! Error handling for the moveit binary.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for moveit commands.
pub type Result<T> = result::Result<T, Error>;

/// Errors that end a moveit invocation with a non-zero status.
#[derive(Debug, Error)]
pub enum Error {
    /// Desktop discovery, window queries, or window manager requests failed.
    #[error(transparent)]
    Desk(#[from] moveit_core::Error),
    /// Configuration could not be read, parsed, or validated.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),
    /// Writing command output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
