//! Rotate focus through the windows docked at a symbolic position.
//!
//! Nothing persists between invocations: the rotation is recomputed from the
//! stacking order and the focused window each time, so repeating the same
//! command walks through every window at that location.

use tracing::{debug, info, warn};

use crate::{
    Outcome, Result, WindowId,
    geom::{Rect, each_axis_mostly_overlaps, mostly_contains},
    heads::Heads,
    ops::DeskOps,
    place::{check_split, region_in_head},
    position::Position,
    scan::{ScanPolicy, WindowScan},
    window::WindowSnapshot,
};

/// Default inset applied to focus targets, in pixels.
pub const DEFAULT_MARGIN: u32 = 35;

/// Tuning for focus selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusOptions {
    /// Inset applied to every edge of the target region.
    pub margin: u32,
    /// Handling of windows whose metadata cannot be read.
    pub scan: ScanPolicy,
}

impl Default for FocusOptions {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            scan: ScanPolicy::default(),
        }
    }
}

/// How windows are compared against a target region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    /// The window mostly lies inside the target.
    Contained,
    /// Contained, or the window covers most of the target on both axes.
    ContainedOrCovering,
}

impl MatchRule {
    /// Whether `window` belongs to `target` under this rule.
    pub fn matches(self, target: &Rect, window: &Rect) -> bool {
        match self {
            Self::Contained => mostly_contains(target, window),
            Self::ContainedOrCovering => {
                mostly_contains(target, window) || each_axis_mostly_overlaps(window, target)
            }
        }
    }
}

/// Region searched for candidate windows, in desktop coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    /// Inset target rectangle.
    pub rect: Rect,
    /// Comparison applied to candidates.
    pub rule: MatchRule,
}

/// Target region for `position` on head `head`, before the inset.
///
/// `None` when the token names no focus region: `B` tokens, unknown tokens,
/// and `O` on a single-head desktop.
pub fn target_region(heads: &Heads, head: usize, position: &Position, split: u32) -> Option<Target> {
    let usable = heads.usable_rect(head);
    match position {
        Position::Compass { .. } => {
            let r = region_in_head(position, usable.w, usable.h, split);
            Some(Target {
                rect: r.translate(usable.x, usable.y),
                rule: MatchRule::ContainedOrCovering,
            })
        }
        Position::Center => {
            let (x0, x1) = (usable.w * 5 / 20, usable.w * 15 / 20);
            let (y0, y1) = (usable.h * 5 / 20, usable.h * 15 / 20);
            Some(Target {
                rect: Rect::new(usable.x + x0, usable.y + y0, x1 - x0, y1 - y0),
                rule: MatchRule::ContainedOrCovering,
            })
        }
        Position::OtherHead if heads.len() > 1 => Some(Target {
            rect: heads.usable_rect(heads.next_index(head)),
            rule: MatchRule::Contained,
        }),
        Position::OtherHead | Position::Big { .. } | Position::Unknown(_) => None,
    }
}

/// Pick the next window in a bottom-to-top match list.
///
/// Advances cyclically past `active` when it is among the matches; otherwise
/// selects the topmost match.
pub fn next_in_rotation(matches: &[WindowId], active: Option<WindowId>) -> Option<WindowId> {
    let last = *matches.last()?;
    let position = active.and_then(|a| matches.iter().position(|&m| m == a));
    Some(match position {
        Some(i) => matches[(i + 1) % matches.len()],
        None => last,
    })
}

/// Chooses and focuses the next window at a position.
pub struct FocusSelector<'a, O: DeskOps + ?Sized> {
    /// Backend for queries and requests.
    ops: &'a O,
    /// Head model for this invocation.
    heads: &'a Heads,
    /// Margin and scan policy.
    options: FocusOptions,
}

impl<'a, O: DeskOps + ?Sized> FocusSelector<'a, O> {
    /// Construct a selector over a discovered head model.
    pub fn new(ops: &'a O, heads: &'a Heads, options: FocusOptions) -> Self {
        Self {
            ops,
            heads,
            options,
        }
    }

    /// Head holding `active`, or the head under the pointer.
    fn resolve_head(&self, active: Option<WindowId>) -> Result<usize> {
        if let Some(id) = active {
            match self.ops.geometry(id) {
                Ok(geometry) => return Ok(self.heads.head_for_window(&geometry)),
                Err(err) if err.is_per_window() => {
                    warn!(window = %id, error = %err, "active window unreadable, using pointer");
                }
                Err(err) => return Err(err),
            }
        }
        let pointer = self.ops.pointer()?;
        Ok(self.heads.head_at(pointer).unwrap_or_else(|| {
            warn!(x = pointer.x, y = pointer.y, "pointer outside every head, using head 0");
            0
        }))
    }

    /// Inset target for `position`, or `None` if the token selects nothing.
    pub fn target(
        &self,
        active: Option<WindowId>,
        position: &Position,
        split: u32,
    ) -> Result<Option<Target>> {
        check_split(split)?;
        let head = self.resolve_head(active)?;
        let margin = i32::try_from(self.options.margin).unwrap_or(i32::MAX);
        let target = target_region(self.heads, head, position, split).map(|t| Target {
            rect: t.rect.inset(margin),
            rule: t.rule,
        });
        debug!(%position, head, ?target, "focus target");
        Ok(target)
    }

    /// Visible windows on the current desktop matching `target`, bottom-to-top.
    pub fn candidates(&self, target: &Target) -> Result<Vec<WindowSnapshot>> {
        let windows = WindowScan::new(self.ops)?.collect_with(self.options.scan)?;
        Ok(windows
            .into_iter()
            .filter(|w| {
                let hit = w.visible && target.rule.matches(&target.rect, &w.geometry);
                debug!(window = %w.id, geometry = %w.geometry, visible = w.visible, hit, "candidate");
                hit
            })
            .collect())
    }

    /// Window that would receive focus, without issuing requests.
    pub fn select(
        &self,
        active: Option<WindowId>,
        position: &Position,
        split: u32,
    ) -> Result<Option<WindowId>> {
        let Some(target) = self.target(active, position, split)? else {
            return Ok(None);
        };
        let matches: Vec<WindowId> = self.candidates(&target)?.iter().map(|w| w.id).collect();
        Ok(next_in_rotation(&matches, active))
    }

    /// Raise and focus the next window at `position`. An empty match is a no-op.
    pub fn focus_next(
        &self,
        active: Option<WindowId>,
        position: &Position,
        split: u32,
    ) -> Result<Outcome> {
        let Some(id) = self.select(active, position, split)? else {
            info!(%position, "no window to focus");
            return Ok(Outcome::Nothing);
        };
        info!(window = %id, %position, "activate");
        self.ops.restack(id)?;
        self.ops.activate(id)?;
        Ok(Outcome::Focused { window: id })
    }

    /// Like [`focus_next`](Self::focus_next), starting from the backend's focused window.
    pub fn focus_from_active(&self, position: &Position, split: u32) -> Result<Outcome> {
        let active = self.ops.active_window()?;
        self.focus_next(active, position, split)
    }
}
