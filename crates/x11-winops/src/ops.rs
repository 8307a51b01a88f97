//! `DeskOps` over an X11 connection.

use std::fmt::Display;

use moveit_core::{DeskOps, Desktop, Error, FrameExtents, Point, Rect, Result, Strut, WindowId};
use tracing::{debug, trace, warn};
use x11rb::{
    connection::{Connection, RequestConnection},
    errors::ReplyError,
    protocol::{
        xinerama::{self, ConnectionExt as _},
        xproto::{Atom, AtomEnum, ClientMessageEvent, ConnectionExt as _, EventMask, Window},
    },
    rust_connection::RustConnection,
};

use crate::{atoms::Atoms, ewmh};

/// Result of a raw protocol exchange, before it is mapped onto a core error.
type ReplyResult<T> = std::result::Result<T, ReplyError>;

/// Upper bound on property lengths requested, in 32-bit units.
const MAX_PROPERTY_LEN: u32 = 4096;

/// Map a protocol failure to a fatal discovery error.
fn discovery<E: Display>(what: &'static str) -> impl FnOnce(E) -> Error {
    move |e| Error::discovery(what, e)
}

/// Map a protocol failure to a per-window property error.
fn property<E: Display>(id: WindowId, name: &'static str) -> impl FnOnce(E) -> Error {
    move |e| Error::property(id, name, e)
}

/// Map a protocol failure to a request error.
fn request<E: Display>(op: &'static str, id: WindowId) -> impl FnOnce(E) -> Error {
    move |e| Error::request(op, id, e)
}

/// Production [`DeskOps`] talking to the X server named by `$DISPLAY`.
pub struct X11Ops {
    /// Server connection.
    conn: RustConnection,
    /// Root window of the default screen.
    root: Window,
    /// Root window size.
    desktop: Rect,
    /// Interned atoms.
    atoms: Atoms,
}

impl X11Ops {
    /// Connect to the display in `$DISPLAY` and intern the atoms we use.
    pub fn connect() -> Result<Self> {
        let (conn, screen_num) =
            x11rb::connect(None).map_err(|e| Error::Connection(e.to_string()))?;
        let screen = conn
            .setup()
            .roots
            .get(screen_num)
            .ok_or_else(|| Error::Connection(format!("screen {screen_num} not found")))?;
        let root = screen.root;
        let desktop = Rect::new(
            0,
            0,
            i32::from(screen.width_in_pixels),
            i32::from(screen.height_in_pixels),
        );
        let atoms = Atoms::new(&conn)
            .map_err(|e| Error::Connection(e.to_string()))?
            .reply()
            .map_err(|e| Error::Connection(e.to_string()))?;
        debug!(screen = screen_num, root = format_args!("0x{root:x}"), %desktop, "connected");
        Ok(Self {
            conn,
            root,
            desktop,
            atoms,
        })
    }

    /// 32-bit values of `prop` on `window`; `None` when the property is absent or empty.
    fn prop32(&self, window: Window, prop: Atom) -> ReplyResult<Option<Vec<u32>>> {
        let reply = self
            .conn
            .get_property(false, window, prop, AtomEnum::ANY, 0, MAX_PROPERTY_LEN)?
            .reply()?;
        Ok(reply
            .value32()
            .map(|v| v.collect::<Vec<u32>>())
            .filter(|v| !v.is_empty()))
    }

    /// Text value of property `prop` on `window`, requested as `type_`.
    fn prop_text(&self, window: Window, prop: Atom, type_: Atom) -> ReplyResult<Option<String>> {
        let reply = self
            .conn
            .get_property(false, window, prop, type_, 0, MAX_PROPERTY_LEN)?
            .reply()?;
        Ok(ewmh::text(&reply.value))
    }

    /// A window list published on the root window.
    fn root_windows(&self, prop: Atom, what: &'static str) -> Result<Vec<WindowId>> {
        let values = self
            .prop32(self.root, prop)
            .map_err(discovery(what))?
            .ok_or_else(|| Error::discovery(what, "property not set by the window manager"))?;
        Ok(ewmh::windows(&values))
    }

    /// Topmost ancestor of `window` below the root: the window manager's frame, if any.
    fn frame_of(&self, window: Window) -> ReplyResult<Window> {
        let mut current = window;
        loop {
            let tree = self.conn.query_tree(current)?.reply()?;
            if tree.parent == tree.root || tree.parent == x11rb::NONE {
                return Ok(current);
            }
            current = tree.parent;
        }
    }

    /// Send an EWMH client message about `id` to the root window, check it and flush.
    fn send(&self, op: &'static str, id: WindowId, type_: Atom, data: [u32; 5]) -> Result<()> {
        trace!(op, window = %id, ?data, "client message");
        let event = ClientMessageEvent::new(32, id.raw(), type_, data);
        self.conn
            .send_event(
                false,
                self.root,
                EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
                event,
            )
            .map_err(request(op, id))?
            .check()
            .map_err(request(op, id))?;
        self.conn.flush().map_err(request(op, id))
    }
}

impl DeskOps for X11Ops {
    fn desktop_geometry(&self) -> Result<Rect> {
        Ok(self.desktop)
    }

    fn monitors(&self) -> Result<Vec<Rect>> {
        let present = self
            .conn
            .extension_information(xinerama::X11_EXTENSION_NAME)
            .map_err(discovery("heads"))?
            .is_some();
        if !present {
            debug!("xinerama not available");
            return Ok(Vec::new());
        }
        let active = self
            .conn
            .xinerama_is_active()
            .map_err(discovery("heads"))?
            .reply()
            .map_err(discovery("heads"))?;
        if active.state == 0 {
            debug!("xinerama inactive");
            return Ok(Vec::new());
        }
        let screens = self
            .conn
            .xinerama_query_screens()
            .map_err(discovery("heads"))?
            .reply()
            .map_err(discovery("heads"))?;
        Ok(screens
            .screen_info
            .iter()
            .map(|s| {
                Rect::new(
                    i32::from(s.x_org),
                    i32::from(s.y_org),
                    i32::from(s.width),
                    i32::from(s.height),
                )
            })
            .collect())
    }

    fn client_list(&self) -> Result<Vec<WindowId>> {
        self.root_windows(self.atoms._NET_CLIENT_LIST, "client list")
    }

    fn stacking_order(&self) -> Result<Vec<WindowId>> {
        self.root_windows(self.atoms._NET_CLIENT_LIST_STACKING, "stacking order")
    }

    fn current_desktop(&self) -> Result<u32> {
        self.prop32(self.root, self.atoms._NET_CURRENT_DESKTOP)
            .map_err(discovery("current desktop"))?
            .and_then(|v| v.first().copied())
            .ok_or_else(|| Error::discovery("current desktop", "property not set"))
    }

    fn active_window(&self) -> Result<Option<WindowId>> {
        Ok(self
            .prop32(self.root, self.atoms._NET_ACTIVE_WINDOW)
            .map_err(discovery("active window"))?
            .and_then(|v| v.first().copied())
            .and_then(WindowId::from_raw_nonzero))
    }

    fn pointer(&self) -> Result<Point> {
        let reply = self
            .conn
            .query_pointer(self.root)
            .map_err(discovery("pointer"))?
            .reply()
            .map_err(discovery("pointer"))?;
        Ok(Point::new(i32::from(reply.root_x), i32::from(reply.root_y)))
    }

    fn strut(&self, id: WindowId) -> Result<Option<Strut>> {
        let partial = self
            .prop32(id.raw(), self.atoms._NET_WM_STRUT_PARTIAL)
            .map_err(property(id, "_NET_WM_STRUT_PARTIAL"))?;
        if let Some(strut) = partial.as_deref().and_then(Strut::from_partial) {
            return Ok(Some(strut));
        }
        let legacy = self
            .prop32(id.raw(), self.atoms._NET_WM_STRUT)
            .map_err(property(id, "_NET_WM_STRUT"))?;
        Ok(legacy
            .as_deref()
            .and_then(|v| Strut::from_legacy(v, self.desktop)))
    }

    fn geometry(&self, id: WindowId) -> Result<Rect> {
        let frame = self.frame_of(id.raw()).map_err(property(id, "geometry"))?;
        let g = self
            .conn
            .get_geometry(frame)
            .map_err(property(id, "geometry"))?
            .reply()
            .map_err(property(id, "geometry"))?;
        Ok(Rect::new(
            i32::from(g.x),
            i32::from(g.y),
            i32::from(g.width),
            i32::from(g.height),
        ))
    }

    fn frame_extents(&self, id: WindowId) -> Result<FrameExtents> {
        let values = self
            .prop32(id.raw(), self.atoms._NET_FRAME_EXTENTS)
            .map_err(property(id, "_NET_FRAME_EXTENTS"))?;
        Ok(values.as_deref().map(ewmh::frame_extents).unwrap_or_default())
    }

    fn desktop_of(&self, id: WindowId) -> Result<Option<Desktop>> {
        let values = self
            .prop32(id.raw(), self.atoms._NET_WM_DESKTOP)
            .map_err(property(id, "_NET_WM_DESKTOP"))?;
        Ok(values.as_deref().and_then(ewmh::desktop))
    }

    fn is_visible(&self, id: WindowId) -> Result<bool> {
        let state = self
            .prop32(id.raw(), self.atoms.WM_STATE)
            .map_err(property(id, "WM_STATE"))?;
        if let Some(&value) = state.as_deref().and_then(<[u32]>::first) {
            return Ok(ewmh::wm_state_visible(value));
        }
        let net_state = self
            .prop32(id.raw(), self.atoms._NET_WM_STATE)
            .map_err(property(id, "_NET_WM_STATE"))?
            .unwrap_or_default();
        Ok(!net_state.contains(&self.atoms._NET_WM_STATE_HIDDEN))
    }

    fn window_name(&self, id: WindowId) -> Result<Option<String>> {
        let name = self
            .prop_text(id.raw(), self.atoms._NET_WM_NAME, self.atoms.UTF8_STRING)
            .map_err(property(id, "_NET_WM_NAME"))?;
        if name.is_some() {
            return Ok(name);
        }
        self.prop_text(id.raw(), AtomEnum::WM_NAME.into(), AtomEnum::STRING.into())
            .map_err(property(id, "WM_NAME"))
    }

    fn move_resize(&self, id: WindowId, rect: Rect) -> Result<()> {
        self.send(
            "move_resize",
            id,
            self.atoms._NET_MOVERESIZE_WINDOW,
            ewmh::moveresize_data(rect),
        )
    }

    fn restack(&self, id: WindowId) -> Result<()> {
        self.send(
            "restack",
            id,
            self.atoms._NET_RESTACK_WINDOW,
            ewmh::restack_data(),
        )
    }

    fn activate(&self, id: WindowId) -> Result<()> {
        let current = current_or_none(id, self.active_window());
        self.send(
            "activate",
            id,
            self.atoms._NET_ACTIVE_WINDOW,
            ewmh::activate_data(current),
        )
    }
}

/// The currently active window for an activate request. An unreadable
/// `_NET_ACTIVE_WINDOW` is logged and sent as none.
fn current_or_none(id: WindowId, active: Result<Option<WindowId>>) -> Option<WindowId> {
    active.unwrap_or_else(|err| {
        warn!(window = %id, error = %err, "activating without the current active window");
        None
    })
}
