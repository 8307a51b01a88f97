//! Error type shared by discovery, scanning and window requests.

use thiserror::Error;

use crate::WindowId;

/// Errors that can occur while discovering the desktop or issuing window requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Could not establish or use the connection to the windowing server.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Desktop-wide state (heads, struts, stacking order, current desktop)
    /// could not be discovered. Nothing downstream is usable.
    #[error("discovery of {what} failed: {message}")]
    Discovery {
        /// What was being discovered (e.g., "heads", "stacking order").
        what: &'static str,
        /// Backend-provided failure description.
        message: String,
    },

    /// A single window's property could not be read. Callers decide whether
    /// to skip the window or abort.
    #[error("window {window}: reading {property} failed: {message}")]
    WindowProperty {
        /// Window whose property failed.
        window: WindowId,
        /// Property name (e.g., "_NET_WM_DESKTOP").
        property: &'static str,
        /// Backend-provided failure description.
        message: String,
    },

    /// A move/resize, restack or activate request failed.
    #[error("{op} request for window {window} failed: {message}")]
    Request {
        /// Logical request name ("move_resize", "restack", "activate").
        op: &'static str,
        /// Target window.
        window: WindowId,
        /// Backend-provided failure description.
        message: String,
    },

    /// Split percentages must lie within `0..=100`.
    #[error("invalid split percentage {0} (expected 0..=100)")]
    InvalidSplit(u32),
}

impl Error {
    /// True for failures confined to a single window's metadata.
    pub fn is_per_window(&self) -> bool {
        matches!(self, Self::WindowProperty { .. })
    }

    /// Helper to build a discovery error from any displayable cause.
    pub fn discovery(what: &'static str, message: impl ToString) -> Self {
        Self::Discovery {
            what,
            message: message.to_string(),
        }
    }

    /// Helper to build a per-window property error.
    pub fn property(window: WindowId, property: &'static str, message: impl ToString) -> Self {
        Self::WindowProperty {
            window,
            property,
            message: message.to_string(),
        }
    }

    /// Helper to build a request error.
    pub fn request(op: &'static str, window: WindowId, message: impl ToString) -> Self {
        Self::Request {
            op,
            window,
            message: message.to_string(),
        }
    }
}

/// Convenient result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
