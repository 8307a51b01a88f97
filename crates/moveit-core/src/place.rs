//! Move/resize a window to a symbolic position on its current head.

use tracing::{debug, info};

use crate::{
    Error, Outcome, Result, WindowId,
    geom::Rect,
    heads::Heads,
    ops::DeskOps,
    position::{Horizontal, Position, Vertical},
};

/// Reject split percentages outside `0..=100`.
pub(crate) fn check_split(split: u32) -> Result<()> {
    if split > 100 {
        return Err(Error::InvalidSplit(split));
    }
    Ok(())
}

/// Head-relative rectangle for `position` on a head of usable size `hw x hh`.
///
/// `split` is the percentage of the width given to the western side.
/// Tokens without a placement meaning (`O`, unknown) cover the whole head.
pub fn region_in_head(position: &Position, hw: i32, hh: i32, split: u32) -> Rect {
    let split = i64::from(split.min(100));
    let scale = |v: i32, num: i64, den: i64| -> i32 {
        i32::try_from(i64::from(v) * num / den).unwrap_or(v)
    };
    match position {
        Position::Compass {
            vertical,
            horizontal,
        } => {
            let (x, width) = match horizontal {
                Some(Horizontal::West) => (0, scale(hw, split, 100)),
                Some(Horizontal::East) => {
                    let width = scale(hw, 100 - split, 100);
                    (hw - width, width)
                }
                None => (0, hw),
            };
            let (y, height) = match vertical {
                Some(Vertical::North) => (0, hh / 2),
                Some(Vertical::South) => (hh - hh / 2, hh / 2),
                None => (0, hh),
            };
            Rect::new(x, y, width, height)
        }
        Position::Center => {
            let width = scale(hw, 7, 10);
            let height = scale(hh, 7, 10);
            Rect::new((hw - width) / 2, (hh - height) / 2, width, height)
        }
        Position::Big {
            vertical,
            horizontal,
        } => {
            let width = scale(hw, 7, 10);
            let height = scale(hh, 7, 10);
            let x = match horizontal {
                Horizontal::East => hw - width,
                Horizontal::West => 0,
            };
            let y = match vertical {
                Vertical::South => hh - height,
                Vertical::North => 0,
            };
            Rect::new(x, y, width, height)
        }
        Position::OtherHead | Position::Unknown(_) => Rect::new(0, 0, hw, hh),
    }
}

/// Outcome of a placement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Window that was moved.
    pub window: WindowId,
    /// Head the window was placed on.
    pub head: usize,
    /// Content rectangle requested, in desktop coordinates.
    pub rect: Rect,
}

/// Maps position tokens onto absolute rectangles and issues the move/resize.
pub struct PlacementEngine<'a, O: DeskOps + ?Sized> {
    ops: &'a O,
    heads: &'a Heads,
}

impl<'a, O: DeskOps + ?Sized> PlacementEngine<'a, O> {
    /// Construct an engine over a discovered head model.
    pub fn new(ops: &'a O, heads: &'a Heads) -> Self {
        Self { ops, heads }
    }

    /// Compute the content rectangle for `id` without issuing any request.
    pub fn target(&self, id: WindowId, position: &Position, split: u32) -> Result<Placement> {
        check_split(split)?;
        let geometry = self.ops.geometry(id)?;
        let extents = self.ops.frame_extents(id)?;
        let head = self.heads.head_for_window(&geometry);
        let usable = self.heads.usable_rect(head);
        let region = region_in_head(position, usable.w, usable.h, split);
        let rect = Rect::new(
            region.x + usable.x,
            region.y + usable.y,
            (region.w - extents.horizontal()).max(1),
            (region.h - extents.vertical()).max(1),
        );
        debug!(
            window = %id,
            %position,
            split,
            head,
            current = %geometry,
            usable = %usable,
            ?extents,
            target = %rect,
            "placement target"
        );
        Ok(Placement {
            window: id,
            head,
            rect,
        })
    }

    /// Move/resize `id` to `position`, then raise it. Request failures are fatal.
    pub fn place_window(&self, id: WindowId, position: &Position, split: u32) -> Result<Outcome> {
        let placement = self.target(id, position, split)?;
        info!(window = %id, rect = %placement.rect, "move_resize");
        self.ops.move_resize(id, placement.rect)?;
        self.ops.restack(id)?;
        Ok(Outcome::Placed {
            window: id,
            rect: placement.rect,
        })
    }

    /// Place the focused window; nothing happens when no window has focus.
    pub fn place_active(&self, position: &Position, split: u32) -> Result<Outcome> {
        check_split(split)?;
        match self.ops.active_window()? {
            Some(id) => self.place_window(id, position, split),
            None => {
                info!(%position, "no active window to place");
                Ok(Outcome::Nothing)
            }
        }
    }
}
