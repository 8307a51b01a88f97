//! x11-winops: X11 window operations for moveit.
//!
//! Implements [`moveit_core::DeskOps`] over an `x11rb` connection. Desktop
//! state is read from EWMH/ICCCM properties on the root and client windows,
//! monitor layout comes from Xinerama, and every request is an EWMH client
//! message so the running window manager stays in charge.

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod atoms;
pub mod ewmh;
mod ops;

pub use ops::X11Ops;
