//! The desktop collaborator trait and its scripted test double.

use crate::{
    Result, WindowId,
    geom::{Point, Rect},
    heads::Strut,
    window::{Desktop, FrameExtents},
};

/// Trait abstraction over the windowing environment to keep the engines testable.
///
/// Desktop-wide queries failing is fatal to a command. Per-window queries
/// report `Error::WindowProperty` so callers can skip the window instead.
/// Requests are fire-and-forget; an `Err` means the invocation must stop.
pub trait DeskOps: Send + Sync {
    /// Whole desktop (root window) rectangle.
    fn desktop_geometry(&self) -> Result<Rect>;
    /// Physical monitor rectangles; empty when multi-monitor info is unavailable.
    fn monitors(&self) -> Result<Vec<Rect>>;
    /// Managed top-level windows, in mapping order.
    fn client_list(&self) -> Result<Vec<WindowId>>;
    /// Managed windows bottom-to-top across all desktops.
    fn stacking_order(&self) -> Result<Vec<WindowId>>;
    /// Currently displayed virtual desktop.
    fn current_desktop(&self) -> Result<u32>;
    /// Focused window, if any.
    fn active_window(&self) -> Result<Option<WindowId>>;
    /// Pointer position in desktop coordinates.
    fn pointer(&self) -> Result<Point>;

    /// Reserved edge space published by `id`, if any.
    fn strut(&self, id: WindowId) -> Result<Option<Strut>>;
    /// Decorated geometry of `id` in desktop coordinates.
    fn geometry(&self, id: WindowId) -> Result<Rect>;
    /// Decoration sizes of `id`; zero when the window manager publishes none.
    fn frame_extents(&self, id: WindowId) -> Result<FrameExtents>;
    /// Desktop membership of `id`; `None` when the window does not publish one.
    fn desktop_of(&self, id: WindowId) -> Result<Option<Desktop>>;
    /// Whether `id` is in the normal or maximized display state.
    fn is_visible(&self, id: WindowId) -> Result<bool>;
    /// Human-readable title of `id`, if any.
    fn window_name(&self, id: WindowId) -> Result<Option<String>>;

    /// Ask the window manager to move and resize `id`; `rect` is the content rectangle.
    fn move_resize(&self, id: WindowId, rect: Rect) -> Result<()>;
    /// Ask the window manager to raise `id`.
    fn restack(&self, id: WindowId) -> Result<()>;
    /// Ask the window manager to focus `id`.
    fn activate(&self, id: WindowId) -> Result<()>;
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::{MockDeskOps, MockWindow};

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::{
        collections::HashSet,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
    };

    use parking_lot::Mutex;

    use super::DeskOps;
    use crate::{
        Error, Result, WindowId,
        geom::{Point, Rect},
        heads::Strut,
        window::{Desktop, FrameExtents},
    };

    /// A scripted window for [`MockDeskOps`].
    #[derive(Clone, Debug)]
    pub struct MockWindow {
        /// Window id.
        pub id: WindowId,
        /// Title reported by `window_name`.
        pub name: Option<String>,
        /// Decorated geometry in desktop coordinates.
        pub geometry: Rect,
        /// Decoration thickness.
        pub extents: FrameExtents,
        /// Desktop membership; `None` means the property is missing.
        pub desktop: Option<Desktop>,
        /// Normal or maximized, as opposed to minimized.
        pub visible: bool,
        /// Reserved edge space, if the window is a panel.
        pub strut: Option<Strut>,
    }

    impl MockWindow {
        /// A visible, undecorated window on desktop 0.
        pub fn new(id: u32, geometry: Rect) -> Self {
            Self {
                id: WindowId::new(id),
                name: None,
                geometry,
                extents: FrameExtents::default(),
                desktop: Some(Desktop::Index(0)),
                visible: true,
                strut: None,
            }
        }

        /// Give the window a title.
        pub fn named(mut self, name: &str) -> Self {
            self.name = Some(name.to_string());
            self
        }

        /// Move the window to `desktop`, or drop its desktop property.
        pub fn on_desktop(mut self, desktop: Option<Desktop>) -> Self {
            self.desktop = desktop;
            self
        }

        /// Mark the window minimized.
        pub fn hidden(mut self) -> Self {
            self.visible = false;
            self
        }

        /// Set the decoration extents.
        pub fn with_extents(mut self, extents: FrameExtents) -> Self {
            self.extents = extents;
            self
        }

        /// Publish a strut from this window.
        pub fn with_strut(mut self, strut: Strut) -> Self {
            self.strut = Some(strut);
            self
        }
    }

    /// Simple in-memory desktop for tests (enabled with the `test-utils` feature).
    ///
    /// Windows are stacked bottom-to-top in insertion order.
    #[derive(Clone)]
    pub struct MockDeskOps {
        calls: Arc<Mutex<Vec<String>>>,
        desktop: Arc<Mutex<Rect>>,
        monitors: Arc<Mutex<Vec<Rect>>>,
        windows: Arc<Mutex<Vec<MockWindow>>>,
        current_desktop: Arc<Mutex<u32>>,
        active: Arc<Mutex<Option<WindowId>>>,
        pointer: Arc<Mutex<Point>>,
        broken_windows: Arc<Mutex<HashSet<WindowId>>>,
        fail_discovery: Arc<AtomicBool>,
        fail_move_resize: Arc<AtomicBool>,
        fail_restack: Arc<AtomicBool>,
        fail_activate: Arc<AtomicBool>,
    }

    impl Default for MockDeskOps {
        fn default() -> Self {
            Self::new(Rect::new(0, 0, 1920, 1080))
        }
    }

    impl MockDeskOps {
        /// An empty desktop of the given size with no multi-monitor information.
        pub fn new(desktop: Rect) -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                desktop: Arc::new(Mutex::new(desktop)),
                monitors: Arc::new(Mutex::new(Vec::new())),
                windows: Arc::new(Mutex::new(Vec::new())),
                current_desktop: Arc::new(Mutex::new(0)),
                active: Arc::new(Mutex::new(None)),
                pointer: Arc::new(Mutex::new(Point::default())),
                broken_windows: Arc::new(Mutex::new(HashSet::new())),
                fail_discovery: Arc::new(AtomicBool::new(false)),
                fail_move_resize: Arc::new(AtomicBool::new(false)),
                fail_restack: Arc::new(AtomicBool::new(false)),
                fail_activate: Arc::new(AtomicBool::new(false)),
            }
        }
        /// Replace the monitor list.
        pub fn set_monitors(&self, monitors: Vec<Rect>) {
            *self.monitors.lock() = monitors;
        }
        /// Replace the windows, bottom-to-top.
        pub fn set_windows(&self, windows: Vec<MockWindow>) {
            *self.windows.lock() = windows;
        }
        /// Switch the current virtual desktop.
        pub fn set_current_desktop(&self, desktop: u32) {
            *self.current_desktop.lock() = desktop;
        }
        /// Set the focused window.
        pub fn set_active(&self, id: Option<u32>) {
            *self.active.lock() = id.map(WindowId::new);
        }
        /// Move the pointer.
        pub fn set_pointer(&self, p: Point) {
            *self.pointer.lock() = p;
        }
        /// Every per-window query for `id` fails with a property error.
        pub fn break_window(&self, id: u32) {
            self.broken_windows.lock().insert(WindowId::new(id));
        }
        /// Make every discovery query fail.
        pub fn set_fail_discovery(&self, v: bool) {
            self.fail_discovery.store(v, Ordering::SeqCst);
        }
        /// Make move/resize requests fail.
        pub fn set_fail_move_resize(&self, v: bool) {
            self.fail_move_resize.store(v, Ordering::SeqCst);
        }
        /// Make restack requests fail.
        pub fn set_fail_restack(&self, v: bool) {
            self.fail_restack.store(v, Ordering::SeqCst);
        }
        /// Make activate requests fail.
        pub fn set_fail_activate(&self, v: bool) {
            self.fail_activate.store(v, Ordering::SeqCst);
        }
        /// Requests issued so far, e.g. `"move_resize 0x2 [x=0 y=0 w=500 h=800]"`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
        /// True if exactly `s` was recorded.
        pub fn calls_contains(&self, s: &str) -> bool {
            self.calls.lock().iter().any(|x| x == s)
        }
        fn note(&self, s: String) {
            self.calls.lock().push(s);
        }
        fn discovery(&self, what: &'static str) -> Result<()> {
            if self.fail_discovery.load(Ordering::SeqCst) {
                return Err(Error::discovery(what, "mock failure"));
            }
            Ok(())
        }
        fn window(&self, id: WindowId, property: &'static str) -> Result<MockWindow> {
            if self.broken_windows.lock().contains(&id) {
                return Err(Error::property(id, property, "mock failure"));
            }
            self.windows
                .lock()
                .iter()
                .find(|w| w.id == id)
                .cloned()
                .ok_or_else(|| Error::property(id, property, "no such window"))
        }
    }

    impl DeskOps for MockDeskOps {
        fn desktop_geometry(&self) -> Result<Rect> {
            self.discovery("desktop geometry")?;
            Ok(*self.desktop.lock())
        }
        fn monitors(&self) -> Result<Vec<Rect>> {
            self.discovery("heads")?;
            Ok(self.monitors.lock().clone())
        }
        fn client_list(&self) -> Result<Vec<WindowId>> {
            self.discovery("client list")?;
            Ok(self.windows.lock().iter().map(|w| w.id).collect())
        }
        fn stacking_order(&self) -> Result<Vec<WindowId>> {
            self.discovery("stacking order")?;
            Ok(self.windows.lock().iter().map(|w| w.id).collect())
        }
        fn current_desktop(&self) -> Result<u32> {
            self.discovery("current desktop")?;
            Ok(*self.current_desktop.lock())
        }
        fn active_window(&self) -> Result<Option<WindowId>> {
            Ok(*self.active.lock())
        }
        fn pointer(&self) -> Result<Point> {
            Ok(*self.pointer.lock())
        }
        fn strut(&self, id: WindowId) -> Result<Option<Strut>> {
            Ok(self.window(id, "_NET_WM_STRUT_PARTIAL")?.strut)
        }
        fn geometry(&self, id: WindowId) -> Result<Rect> {
            Ok(self.window(id, "geometry")?.geometry)
        }
        fn frame_extents(&self, id: WindowId) -> Result<FrameExtents> {
            Ok(self.window(id, "_NET_FRAME_EXTENTS")?.extents)
        }
        fn desktop_of(&self, id: WindowId) -> Result<Option<Desktop>> {
            Ok(self.window(id, "_NET_WM_DESKTOP")?.desktop)
        }
        fn is_visible(&self, id: WindowId) -> Result<bool> {
            Ok(self.window(id, "WM_STATE")?.visible)
        }
        fn window_name(&self, id: WindowId) -> Result<Option<String>> {
            Ok(self.window(id, "_NET_WM_NAME")?.name)
        }
        fn move_resize(&self, id: WindowId, rect: Rect) -> Result<()> {
            self.note(format!("move_resize {id} {rect}"));
            if self.fail_move_resize.load(Ordering::SeqCst) {
                return Err(Error::request("move_resize", id, "mock failure"));
            }
            Ok(())
        }
        fn restack(&self, id: WindowId) -> Result<()> {
            self.note(format!("restack {id}"));
            if self.fail_restack.load(Ordering::SeqCst) {
                return Err(Error::request("restack", id, "mock failure"));
            }
            Ok(())
        }
        fn activate(&self, id: WindowId) -> Result<()> {
            self.note(format!("activate {id}"));
            if self.fail_activate.load(Ordering::SeqCst) {
                return Err(Error::request("activate", id, "mock failure"));
            }
            *self.active.lock() = Some(id);
            Ok(())
        }
    }
}
