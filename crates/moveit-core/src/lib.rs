//! moveit-core: multi-head window placement and focus rotation.
//!
//! Builds a model of the monitors ("heads") and the space panels leave free,
//! maps symbolic position tokens (`NE`, `C`, `BSW`, `O`, ...) onto those heads,
//! and either moves the active window there or cycles focus through the
//! windows already docked there.
//!
//! Everything talks to the windowing system through [`DeskOps`]; the crate
//! itself has no windowing-system dependency.

use std::fmt::{Display, Formatter, Result as FmtResult};

mod error;
pub mod focus;
pub mod geom;
pub mod heads;
mod ops;
pub mod place;
pub mod position;
pub mod scan;
mod window;

#[cfg(test)]
mod test_focus;
#[cfg(test)]
mod test_place;

pub use error::{Error, Result};
pub use focus::{FocusOptions, FocusSelector};
pub use geom::{Point, Rect};
pub use heads::{Heads, Strut, StrutPolicy};
pub use ops::DeskOps;
#[cfg(any(test, feature = "test-utils"))]
pub use ops::{MockDeskOps, MockWindow};
pub use place::PlacementEngine;
pub use position::Position;
pub use scan::{ScanPolicy, WindowScan};
pub use window::{Desktop, FrameExtents, PINNED, WindowId, WindowSnapshot};

/// What a `place` or `focus` invocation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The window was moved/resized to `rect` (content rectangle) and raised.
    Placed { window: WindowId, rect: Rect },
    /// The window was raised and focused.
    Focused { window: WindowId },
    /// Nothing matched; no requests were issued.
    Nothing,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Placed { window, rect } => write!(f, "placed {window} at {rect}"),
            Self::Focused { window } => write!(f, "focused {window}"),
            Self::Nothing => write!(f, "nothing to do"),
        }
    }
}
