//! Monitor ("head") geometry and the space left after panels reserve their struts.

use tracing::{debug, warn};

use crate::{
    Result,
    geom::{Point, Rect},
    ops::DeskOps,
};

/// Reserved desktop-edge space published by a panel or dock.
///
/// Amounts are pixel thicknesses measured from the desktop edge. Span ends
/// are inclusive, as published in `_NET_WM_STRUT_PARTIAL`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Strut {
    /// Thickness reserved at the left edge.
    pub left: u32,
    /// Thickness reserved at the right edge.
    pub right: u32,
    /// Thickness reserved at the top edge.
    pub top: u32,
    /// Thickness reserved at the bottom edge.
    pub bottom: u32,
    /// First row of the left band.
    pub left_start_y: u32,
    /// Last row of the left band.
    pub left_end_y: u32,
    /// First row of the right band.
    pub right_start_y: u32,
    /// Last row of the right band.
    pub right_end_y: u32,
    /// First column of the top band.
    pub top_start_x: u32,
    /// Last column of the top band.
    pub top_end_x: u32,
    /// First column of the bottom band.
    pub bottom_start_x: u32,
    /// Last column of the bottom band.
    pub bottom_end_x: u32,
}

impl Strut {
    /// Build a strut from the twelve cardinals of `_NET_WM_STRUT_PARTIAL`.
    /// Returns `None` when fewer than twelve values are supplied.
    pub fn from_partial(values: &[u32]) -> Option<Self> {
        let v: &[u32; 12] = values.get(..12)?.try_into().ok()?;
        Some(Self {
            left: v[0],
            right: v[1],
            top: v[2],
            bottom: v[3],
            left_start_y: v[4],
            left_end_y: v[5],
            right_start_y: v[6],
            right_end_y: v[7],
            top_start_x: v[8],
            top_end_x: v[9],
            bottom_start_x: v[10],
            bottom_end_x: v[11],
        })
    }

    /// Build a strut from the four cardinals of legacy `_NET_WM_STRUT`; every
    /// edge spans the whole side of a desktop of the given size.
    pub fn from_legacy(values: &[u32], desktop: Rect) -> Option<Self> {
        let v: &[u32; 4] = values.get(..4)?.try_into().ok()?;
        let max_x = desktop.w.saturating_sub(1).max(0).unsigned_abs();
        let max_y = desktop.h.saturating_sub(1).max(0).unsigned_abs();
        Some(Self {
            left: v[0],
            right: v[1],
            top: v[2],
            bottom: v[3],
            left_start_y: 0,
            left_end_y: max_y,
            right_start_y: 0,
            right_end_y: max_y,
            top_start_x: 0,
            top_end_x: max_x,
            bottom_start_x: 0,
            bottom_end_x: max_x,
        })
    }

    /// True if the strut reserves nothing.
    pub fn is_empty(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }

    /// The reserved bands in desktop coordinates, one per non-zero edge.
    ///
    /// Thicknesses and spans are clipped to the desktop, so a client
    /// publishing out-of-range cardinals cannot push a band off the root window.
    pub fn bands(&self, desktop: Rect) -> Vec<(Edge, Rect)> {
        let mut out = Vec::with_capacity(4);
        if self.left > 0 {
            let (y, h) = span(self.left_start_y, self.left_end_y, desktop.h);
            let w = thickness(self.left, desktop.w);
            out.push((Edge::Left, Rect::new(desktop.left(), desktop.top() + y, w, h)));
        }
        if self.right > 0 {
            let (y, h) = span(self.right_start_y, self.right_end_y, desktop.h);
            let w = thickness(self.right, desktop.w);
            out.push((
                Edge::Right,
                Rect::new(desktop.right() - w, desktop.top() + y, w, h),
            ));
        }
        if self.top > 0 {
            let (x, w) = span(self.top_start_x, self.top_end_x, desktop.w);
            let h = thickness(self.top, desktop.h);
            out.push((Edge::Top, Rect::new(desktop.left() + x, desktop.top(), w, h)));
        }
        if self.bottom > 0 {
            let (x, w) = span(self.bottom_start_x, self.bottom_end_x, desktop.w);
            let h = thickness(self.bottom, desktop.h);
            out.push((
                Edge::Bottom,
                Rect::new(desktop.left() + x, desktop.bottom() - h, w, h),
            ));
        }
        out
    }
}

/// Strut thickness as pixels, never more than the desktop `extent` on that axis.
fn thickness(v: u32, extent: i32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX).min(extent.max(0))
}

/// Offset and length of the inclusive span `[start, end]` clipped to `[0, extent)`.
/// Reversed spans, and spans starting past the desktop, are empty.
fn span(start: u32, end: u32, extent: i32) -> (i32, i32) {
    let extent = extent.max(0).unsigned_abs();
    if end < start || start >= extent {
        return (0, 0);
    }
    let end = end.min(extent - 1);
    let to_px = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
    (to_px(start), to_px(end - start + 1))
}

/// Desktop edge a strut band is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Left desktop edge.
    Left,
    /// Right desktop edge.
    Right,
    /// Top desktop edge.
    Top,
    /// Bottom desktop edge.
    Bottom,
}

/// Which heads a strut shrinks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrutPolicy {
    /// Only heads that the strut's reserved band actually overlaps.
    #[default]
    Intersecting,
    /// Every head touching the reserved desktop edge, regardless of the declared span.
    DesktopWide,
}

/// One monitor rectangle and its position in the head list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Head {
    /// Position in both the raw and usable head lists.
    pub index: usize,
    /// Rectangle in desktop coordinates.
    pub rect: Rect,
}

/// Raw monitor rectangles and their strut-adjusted counterparts.
///
/// Both lists always have the same length and index order; index `i` refers
/// to the same physical monitor in each. There is always at least one head.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heads {
    desktop: Rect,
    raw: Vec<Head>,
    usable: Vec<Head>,
}

impl Heads {
    /// Derive heads from raw monitor geometry and the struts published by clients.
    ///
    /// An empty `monitors` list means the multi-monitor extension is unavailable;
    /// the whole desktop then becomes the single head.
    pub fn build(desktop: Rect, monitors: &[Rect], struts: &[Strut], policy: StrutPolicy) -> Self {
        let rects: Vec<Rect> = if monitors.is_empty() {
            vec![desktop]
        } else {
            monitors.to_vec()
        };
        let raw: Vec<Head> = rects
            .iter()
            .enumerate()
            .map(|(index, &rect)| Head { index, rect })
            .collect();
        let usable = raw
            .iter()
            .map(|head| Head {
                index: head.index,
                rect: struts
                    .iter()
                    .fold(head.rect, |r, s| apply_strut(r, s, desktop, policy)),
            })
            .collect();
        Self {
            desktop,
            raw,
            usable,
        }
    }

    /// Query the backend for monitors and struts and build the head model.
    ///
    /// Failing to read the desktop, monitors or client list is fatal. A client
    /// whose strut cannot be read is treated as publishing none.
    pub fn discover<O: DeskOps + ?Sized>(ops: &O, policy: StrutPolicy) -> Result<Self> {
        let desktop = ops.desktop_geometry()?;
        let monitors = ops.monitors()?;
        let clients = ops.client_list()?;
        let mut struts = Vec::new();
        for id in clients {
            match ops.strut(id) {
                Ok(Some(strut)) if !strut.is_empty() => {
                    debug!(window = %id, ?strut, "strut");
                    struts.push(strut);
                }
                Ok(_) => {}
                Err(err) => warn!(window = %id, error = %err, "ignoring unreadable strut"),
            }
        }
        let heads = Self::build(desktop, &monitors, &struts, policy);
        for (raw, usable) in heads.raw.iter().zip(&heads.usable) {
            debug!(head = raw.index, raw = %raw.rect, usable = %usable.rect, "head");
        }
        Ok(heads)
    }

    /// Whole desktop rectangle.
    pub fn desktop(&self) -> Rect {
        self.desktop
    }

    /// Number of heads (never zero).
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Raw monitor rectangles.
    pub fn raw(&self) -> &[Head] {
        &self.raw
    }

    /// Strut-adjusted monitor rectangles.
    pub fn usable(&self) -> &[Head] {
        &self.usable
    }

    /// Usable rectangle of head `index`, falling back to head 0 when out of range.
    pub fn usable_rect(&self, index: usize) -> Rect {
        self.usable
            .get(index)
            .or_else(|| self.usable.first())
            .map_or(self.desktop, |h| h.rect)
    }

    /// Index of the head whose raw rectangle contains `p`, first match wins.
    pub fn head_at(&self, p: Point) -> Option<usize> {
        self.raw.iter().position(|h| h.rect.contains(p))
    }

    /// Head holding a window, judged by the window's decorated origin. Windows
    /// off every head resolve to head 0.
    pub fn head_for_window(&self, geometry: &Rect) -> usize {
        self.head_at(geometry.origin()).unwrap_or(0)
    }

    /// Next head in cyclic order.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }
}

/// Shrink `head` out of every band of `strut` that the policy says applies.
fn apply_strut(head: Rect, strut: &Strut, desktop: Rect, policy: StrutPolicy) -> Rect {
    let mut left = head.left();
    let mut right = head.right();
    let mut top = head.top();
    let mut bottom = head.bottom();
    for (edge, band) in strut.bands(desktop) {
        let applies = match policy {
            StrutPolicy::Intersecting => head.intersection(&band).is_some(),
            StrutPolicy::DesktopWide => true,
        };
        if !applies {
            continue;
        }
        match edge {
            Edge::Left => left = left.max(band.right()),
            Edge::Right => right = right.min(band.left()),
            Edge::Top => top = top.max(band.bottom()),
            Edge::Bottom => bottom = bottom.min(band.top()),
        }
    }
    let left = left.min(head.right());
    let top = top.min(head.bottom());
    let right = right.max(left);
    let bottom = bottom.max(top);
    Rect::from_edges(left, top, right, bottom)
}
