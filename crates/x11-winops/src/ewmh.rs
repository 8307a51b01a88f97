//! Payloads of EWMH client messages and decoding of window properties.
//!
//! Kept free of any connection so the wire layout can be tested directly.

use moveit_core::{Desktop, FrameExtents, Rect, WindowId};

/// Source indication for requests sent on behalf of a pager or tool.
pub const SOURCE_PAGER: u32 = 2;

/// `CurrentTime` in the X protocol.
const CURRENT_TIME: u32 = 0;

/// `Above` stack mode.
const STACK_ABOVE: u32 = 0;

/// ICCCM `WM_STATE` values treated as on-screen: Normal and the obsolete Zoomed.
const WM_STATE_NORMAL: u32 = 1;
/// See [`WM_STATE_NORMAL`].
const WM_STATE_ZOOMED: u32 = 2;

/// Flags word of `_NET_MOVERESIZE_WINDOW`: default gravity, x/y/width/height
/// present, pager source.
pub fn moveresize_flags() -> u32 {
    let present = (1 << 8) | (1 << 9) | (1 << 10) | (1 << 11);
    present | (SOURCE_PAGER << 12)
}

/// Data of a `_NET_MOVERESIZE_WINDOW` message for content rectangle `rect`.
pub fn moveresize_data(rect: Rect) -> [u32; 5] {
    [
        moveresize_flags(),
        // Coordinates travel as two's-complement CARDINALs.
        rect.x as u32,
        rect.y as u32,
        rect.w.max(1) as u32,
        rect.h.max(1) as u32,
    ]
}

/// Data of a `_NET_RESTACK_WINDOW` message raising a window above all siblings.
pub fn restack_data() -> [u32; 5] {
    [SOURCE_PAGER, 0, STACK_ABOVE, 0, 0]
}

/// Data of a `_NET_ACTIVE_WINDOW` message; `current` is the window that has focus now.
pub fn activate_data(current: Option<WindowId>) -> [u32; 5] {
    [
        SOURCE_PAGER,
        CURRENT_TIME,
        current.map_or(0, WindowId::raw),
        0,
        0,
    ]
}

/// Whether an ICCCM `WM_STATE` value means the window is displayed.
pub fn wm_state_visible(state: u32) -> bool {
    matches!(state, WM_STATE_NORMAL | WM_STATE_ZOOMED)
}

/// Decode `_NET_FRAME_EXTENTS` (left, right, top, bottom). Short values mean no decoration.
pub fn frame_extents(values: &[u32]) -> FrameExtents {
    match values {
        [l, r, t, b, ..] => FrameExtents::new(px(*l), px(*r), px(*t), px(*b)),
        _ => FrameExtents::default(),
    }
}

/// Decode `_NET_WM_DESKTOP`.
pub fn desktop(values: &[u32]) -> Option<Desktop> {
    values.first().map(|&d| Desktop::from(d))
}

/// Decode a window list property, dropping `None` entries.
pub fn windows(values: &[u32]) -> Vec<WindowId> {
    values
        .iter()
        .filter_map(|&raw| WindowId::from_raw_nonzero(raw))
        .collect()
}

/// Decode a text property, trimming the trailing NULs some clients append.
pub fn text(bytes: &[u8]) -> Option<String> {
    let s = String::from_utf8_lossy(bytes);
    let s = s.trim_end_matches('\0');
    (!s.is_empty()).then(|| s.to_string())
}

/// Saturating conversion of a CARDINAL to a pixel count.
fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
