//! Identifiers and per-window snapshots.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::ParseIntError,
    str::FromStr,
};

use crate::geom::Rect;

/// Desktop number meaning "visible on every virtual desktop".
pub const PINNED: u32 = 0xFFFF_FFFF;

/// Identifier of a top-level client window as published by the window manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u32);

impl WindowId {
    /// Wrap a raw window id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw window id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Map the protocol's "no window" value (`0`) to `None`.
    #[must_use]
    pub const fn from_raw_nonzero(raw: u32) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }
}

impl Display for WindowId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "0x{:x}", self.0)
    }
}

/// Accepts `0x`-prefixed hexadecimal (as printed by `xwininfo` and `list`) or decimal.
impl FromStr for WindowId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let raw = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16)?,
            None => s.parse()?,
        };
        Ok(Self(raw))
    }
}

impl From<u32> for WindowId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Virtual desktop membership of a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Desktop {
    /// Shown only on the given desktop.
    Index(u32),
    /// Shown on every desktop.
    Pinned,
}

impl Desktop {
    /// Whether a window with this membership is visible on desktop `current`.
    pub fn shows_on(self, current: u32) -> bool {
        match self {
            Self::Pinned => true,
            Self::Index(n) => n == current,
        }
    }
}

impl From<u32> for Desktop {
    fn from(value: u32) -> Self {
        if value == PINNED {
            Self::Pinned
        } else {
            Self::Index(value)
        }
    }
}

impl Display for Desktop {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Index(n) => write!(f, "{n}"),
            Self::Pinned => write!(f, "pinned"),
        }
    }
}

/// Decoration added by the window manager around a window's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FrameExtents {
    /// Left border width.
    pub left: i32,
    /// Right border width.
    pub right: i32,
    /// Title bar or top border height.
    pub top: i32,
    /// Bottom border height.
    pub bottom: i32,
}

impl FrameExtents {
    /// Construct extents from the four edge thicknesses.
    #[must_use]
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Total horizontal decoration.
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical decoration.
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Read-only view of one window taken during a single invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Window identifier.
    pub id: WindowId,
    /// Decorated geometry in desktop coordinates.
    pub geometry: Rect,
    /// Decoration size.
    pub extents: FrameExtents,
    /// Desktop membership.
    pub desktop: Desktop,
    /// Whether the window is in the normal or maximized state.
    pub visible: bool,
}
