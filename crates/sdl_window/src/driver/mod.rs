//! Native window call seam
//!
//! [`VideoDriver`] lists the native window functions the wrapper forwards to.
//! The native API is process-global, so the functions are associated
//! functions rather than methods: a driver is a marker type, and the state
//! lives on the native side.
//!
//! - [`headless::HeadlessDriver`]: in-memory window system, always available
//! - `sdl::Sdl2Driver`: the real SDL2 library (cargo feature `sdl2`)

pub mod headless;
#[cfg(feature = "sdl2")]
pub mod sdl;

use crate::point::Point;
use std::fmt::Debug;

/// Native window functions
///
/// Implementations are thin: every function maps to exactly one native call.
/// Failures are reported the way the native side reports them (a missing
/// handle or a `false` status) and the diagnostic is read separately through
/// [`VideoDriver::last_error`], which must be called before any other native
/// function since the text is global and gets overwritten.
///
/// # Safety
/// Every function taking a handle is `unsafe`: the handle must be a live
/// window obtained from `create_window` (or adopted from the native side) and
/// not yet passed to `destroy_window`. [`Window`](crate::Window) upholds this
/// for the handle it owns; code calling a driver directly takes over that
/// obligation.
///
/// ```compile_fail
/// use sdl_window::{HeadlessDriver, VideoDriver, Window, WindowFlags};
///
/// let window = Window::<HeadlessDriver>::new("a", 0, 0, 10, 10, WindowFlags::empty()).unwrap();
/// // Releasing behind the owner's back needs an unsafe block
/// HeadlessDriver::destroy_window(window.raw());
/// ```
#[allow(unsafe_code, clippy::missing_safety_doc)]
pub trait VideoDriver {
    /// Opaque native window handle
    type Handle: Copy + Eq + Debug;

    /// Create a window; `None` on failure
    fn create_window(title: &str, x: i32, y: i32, w: i32, h: i32, flags: u32) -> Option<Self::Handle>;

    /// Release a window
    unsafe fn destroy_window(window: Self::Handle);

    /// Native last-error text
    fn last_error() -> String;

    /// Client area size
    unsafe fn window_size(window: Self::Handle) -> Point;

    /// Resize the client area
    unsafe fn set_window_size(window: Self::Handle, w: i32, h: i32);

    /// Title, if the native side has one
    unsafe fn window_title(window: Self::Handle) -> Option<String>;

    /// Change the title
    unsafe fn set_window_title(window: Self::Handle, title: &str);

    /// Request maximization
    unsafe fn maximize_window(window: Self::Handle);

    /// Request minimization
    unsafe fn minimize_window(window: Self::Handle);

    /// Hide
    unsafe fn hide_window(window: Self::Handle);

    /// Restore from minimized or maximized
    unsafe fn restore_window(window: Self::Handle);

    /// Raise above other windows and focus
    unsafe fn raise_window(window: Self::Handle);

    /// Show
    unsafe fn show_window(window: Self::Handle);

    /// Change fullscreen state; `false` on failure
    unsafe fn set_window_fullscreen(window: Self::Handle, flags: u32) -> bool;

    /// Gamma multiplier of the owning display
    unsafe fn window_brightness(window: Self::Handle) -> f32;

    /// Set the gamma multiplier; `false` on failure
    unsafe fn set_window_brightness(window: Self::Handle, brightness: f32) -> bool;

    /// Top-left corner position
    unsafe fn window_position(window: Self::Handle) -> Point;

    /// Move; sentinel coordinates are accepted
    unsafe fn set_window_position(window: Self::Handle, x: i32, y: i32);

    /// Minimum client area size
    unsafe fn window_minimum_size(window: Self::Handle) -> Point;

    /// Set the minimum client area size
    unsafe fn set_window_minimum_size(window: Self::Handle, w: i32, h: i32);

    /// Maximum client area size
    unsafe fn window_maximum_size(window: Self::Handle) -> Point;

    /// Set the maximum client area size
    unsafe fn set_window_maximum_size(window: Self::Handle, w: i32, h: i32);

    /// Input grab mode
    unsafe fn window_grab(window: Self::Handle) -> bool;

    /// Grab or release input
    unsafe fn set_window_grab(window: Self::Handle, grabbed: bool);

    /// Current window flags
    unsafe fn window_flags(window: Self::Handle) -> u32;

    /// Numeric window id
    unsafe fn window_id(window: Self::Handle) -> u32;
}

/// Text the native side reads from a NUL-terminated copy of `s`
pub(crate) fn truncate_at_nul(s: &str) -> &str {
    s.find('\0').map_or(s, |end| &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_at_nul() {
        assert_eq!(truncate_at_nul("plain"), "plain");
        assert_eq!(truncate_at_nul("left\0right"), "left");
        assert_eq!(truncate_at_nul("\0"), "");
    }
}
