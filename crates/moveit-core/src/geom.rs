//! Integer rectangle primitives and the overlap predicates used by focus selection.
//!
//! All coordinates are X11 desktop pixels: the origin is the top-left corner of
//! the root window and `y` grows downwards.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A point in desktop coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle. Width and height are never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Rect {
    /// Construct a rectangle, clamping negative sizes to zero.
    #[must_use]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: w.max(0),
            h: h.max(0),
        }
    }

    /// Construct a rectangle from its edges.
    #[must_use]
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Left edge (inclusive).
    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }
    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }
    /// Top edge (inclusive).
    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }
    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Area in square pixels, widened so large monitors cannot overflow.
    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom edges are not.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Same rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Shrink every edge inwards by `margin`. The result never has a negative
    /// size; an over-large margin collapses the rectangle onto its centre line.
    #[must_use]
    pub fn inset(&self, margin: i32) -> Self {
        let dx = margin.min(self.w / 2);
        let dy = margin.min(self.h / 2);
        Self::new(self.x + dx, self.y + dy, self.w - 2 * dx, self.h - 2 * dy)
    }

    /// Intersection rectangle, if the two rectangles share any area.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right > left && bottom > top).then(|| Self::from_edges(left, top, right, bottom))
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[x={} y={} w={} h={}]", self.x, self.y, self.w, self.h)
    }
}

/// Length of the overlap between intervals `[a1, a2)` and `[b1, b2)`.
#[inline]
pub fn overlap_1d(a1: i32, a2: i32, b1: i32, b2: i32) -> i32 {
    let l = a1.max(b1);
    let r = a2.min(b2);
    (r - l).max(0)
}

/// Area of the intersection of `a` and `b`; `0` when they are disjoint.
pub fn overlap_area(a: &Rect, b: &Rect) -> i64 {
    let xo = overlap_1d(a.left(), a.right(), b.left(), b.right());
    let yo = overlap_1d(a.top(), a.bottom(), b.top(), b.bottom());
    i64::from(xo) * i64::from(yo)
}

/// True when at least 50.5% of `b` lies inside `a`, or when the whole of `b`
/// lies inside `a`. Disjoint rectangles never match.
///
/// Catches windows (`b`) that are smaller than or equal to a target region (`a`).
pub fn mostly_contains(a: &Rect, b: &Rect) -> bool {
    let overlap = overlap_area(a, b);
    if overlap == 0 {
        return false;
    }
    let b_area = b.area();
    overlap == b_area || overlap * 1000 >= b_area * 505
}

/// True when, independently on each axis, the overlap of `a` and `b` exceeds
/// 75% of `b`'s extent on that axis.
///
/// Catches windows (`a`) larger than the target region (`b`), such as a
/// maximized window that still belongs to a corner.
pub fn each_axis_mostly_overlaps(a: &Rect, b: &Rect) -> bool {
    let xo = i64::from(overlap_1d(a.left(), a.right(), b.left(), b.right()));
    let yo = i64::from(overlap_1d(a.top(), a.bottom(), b.top(), b.bottom()));
    xo * 4 > i64::from(b.w) * 3 && yo * 4 > i64::from(b.h) * 3
}
