//! Lazy enumeration of the windows on the current virtual desktop.

use std::vec::IntoIter;

use tracing::{debug, warn};

use crate::{Result, WindowId, ops::DeskOps, window::WindowSnapshot};

/// What to do when a single window's metadata cannot be read mid-scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Log the failure and leave the window out.
    #[default]
    Skip,
    /// Stop the scan and report the failure.
    Abort,
}

/// Windows on the current desktop (pinned ones included), bottom-to-top.
///
/// The stacking order and current desktop are fetched once on construction;
/// each call to `next` queries one window. The scan is finite and cannot be
/// restarted. A window that publishes no desktop is excluded rather than
/// reported as an error.
pub struct WindowScan<'a, O: DeskOps + ?Sized> {
    /// Backend queried per window.
    ops: &'a O,
    /// Desktop being scanned.
    current: u32,
    /// Remaining stacking order.
    ids: IntoIter<WindowId>,
}

impl<'a, O: DeskOps + ?Sized> WindowScan<'a, O> {
    /// Snapshot the stacking order and current desktop. Failures here are discovery failures.
    pub fn new(ops: &'a O) -> Result<Self> {
        let current = ops.current_desktop()?;
        let ids = ops.stacking_order()?;
        debug!(current, windows = ids.len(), "scanning stacking order");
        Ok(Self {
            ops,
            current,
            ids: ids.into_iter(),
        })
    }

    /// Desktop whose windows are being enumerated.
    pub fn current_desktop(&self) -> u32 {
        self.current
    }

    /// Drain the scan, applying `policy` to per-window failures.
    pub fn collect_with(self, policy: ScanPolicy) -> Result<Vec<WindowSnapshot>> {
        let mut out = Vec::new();
        for item in self {
            match item {
                Ok(snapshot) => out.push(snapshot),
                Err(err) if err.is_per_window() && policy == ScanPolicy::Skip => {
                    warn!(error = %err, "skipping unreadable window");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(out)
    }

    /// Query one window; `Ok(None)` means it is not on the scanned desktop.
    fn snapshot(&self, id: WindowId) -> Result<Option<WindowSnapshot>> {
        let Some(desktop) = self.ops.desktop_of(id)? else {
            debug!(window = %id, "no desktop, excluded");
            return Ok(None);
        };
        if !desktop.shows_on(self.current) {
            return Ok(None);
        }
        let geometry = self.ops.geometry(id)?;
        let extents = self.ops.frame_extents(id)?;
        let visible = self.ops.is_visible(id)?;
        Ok(Some(WindowSnapshot {
            id,
            geometry,
            extents,
            desktop,
            visible,
        }))
    }
}

impl<O: DeskOps + ?Sized> Iterator for WindowScan<'_, O> {
    type Item = Result<WindowSnapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.ids.next()?;
            match self.snapshot(id) {
                Ok(Some(snapshot)) => return Some(Ok(snapshot)),
                Ok(None) => {}
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
