//! SDL2 driver
//!
//! Direct calls into the system SDL2 library through the `sdl2` crate's raw
//! bindings. Window functions must be called from the thread that initialized
//! the video subsystem.

#![allow(unsafe_code)]

use super::{truncate_at_nul, VideoDriver};
use crate::error::{WindowError, WindowResult};
use crate::point::Point;
use sdl2::sys;
use std::ffi::{c_int, CStr, CString};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

/// Owned SDL2 window pointer
pub type SdlHandle = NonNull<sys::SDL_Window>;

fn c_title(title: &str) -> CString {
    CString::new(truncate_at_nul(title)).unwrap_or_default()
}

fn read_pair(f: impl FnOnce(*mut c_int, *mut c_int)) -> Point {
    let mut x: c_int = 0;
    let mut y: c_int = 0;
    f(ptr::addr_of_mut!(x), ptr::addr_of_mut!(y));
    Point::new(x, y)
}

const fn sdl_bool(value: bool) -> sys::SDL_bool {
    if value {
        sys::SDL_bool::SDL_TRUE
    } else {
        sys::SDL_bool::SDL_FALSE
    }
}

/// SDL video subsystem guard
///
/// Holds one reference on the video subsystem; SDL counts them, so several
/// contexts may coexist. Dropping the last one shuts SDL down. Windows must
/// be dropped before the context that created them.
#[derive(Debug)]
pub struct SdlContext {
    _not_send: PhantomData<*mut ()>,
}

impl SdlContext {
    /// Initialize the video subsystem
    ///
    /// # Errors
    /// [`WindowError::Creation`] with the native diagnostic if SDL cannot
    /// bring up video (no display, no usable video driver).
    pub fn new() -> WindowResult<Self> {
        // SAFETY: plain library initialization, no pointers involved
        let status = unsafe { sys::SDL_InitSubSystem(sys::SDL_INIT_VIDEO) };
        if status != 0 {
            let msg = Sdl2Driver::last_error();
            log::warn!("SDL video initialization failed: {msg}");
            return Err(WindowError::Creation(msg));
        }
        log::debug!("SDL video subsystem initialized");
        Ok(Self { _not_send: PhantomData })
    }
}

impl Drop for SdlContext {
    fn drop(&mut self) {
        // SAFETY: releases the reference taken in `new`
        unsafe { sys::SDL_QuitSubSystem(sys::SDL_INIT_VIDEO) };
        if unsafe { sys::SDL_WasInit(0) } == 0 {
            log::debug!("Shutting down SDL");
            // SAFETY: no subsystem is left running
            unsafe { sys::SDL_Quit() };
        }
    }
}

/// Driver calling the native SDL2 library
#[derive(Debug, Clone, Copy, Default)]
pub struct Sdl2Driver;

// SAFETY (all window functions below): callers guarantee the handle is a
// live SDL window, per the `VideoDriver` contract.
impl VideoDriver for Sdl2Driver {
    type Handle = SdlHandle;

    fn create_window(title: &str, x: i32, y: i32, w: i32, h: i32, flags: u32) -> Option<SdlHandle> {
        let title = c_title(title);
        NonNull::new(unsafe { sys::SDL_CreateWindow(title.as_ptr(), x, y, w, h, flags) })
    }

    unsafe fn destroy_window(window: SdlHandle) {
        unsafe { sys::SDL_DestroyWindow(window.as_ptr()) }
    }

    fn last_error() -> String {
        let ptr = unsafe { sys::SDL_GetError() };
        if ptr.is_null() {
            return String::new();
        }
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }

    unsafe fn window_size(window: SdlHandle) -> Point {
        read_pair(|w, h| unsafe { sys::SDL_GetWindowSize(window.as_ptr(), w, h) })
    }

    unsafe fn set_window_size(window: SdlHandle, w: i32, h: i32) {
        unsafe { sys::SDL_SetWindowSize(window.as_ptr(), w, h) }
    }

    unsafe fn window_title(window: SdlHandle) -> Option<String> {
        let ptr = unsafe { sys::SDL_GetWindowTitle(window.as_ptr()) };
        if ptr.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }

    unsafe fn set_window_title(window: SdlHandle, title: &str) {
        let title = c_title(title);
        unsafe { sys::SDL_SetWindowTitle(window.as_ptr(), title.as_ptr()) }
    }

    unsafe fn maximize_window(window: SdlHandle) {
        unsafe { sys::SDL_MaximizeWindow(window.as_ptr()) }
    }

    unsafe fn minimize_window(window: SdlHandle) {
        unsafe { sys::SDL_MinimizeWindow(window.as_ptr()) }
    }

    unsafe fn hide_window(window: SdlHandle) {
        unsafe { sys::SDL_HideWindow(window.as_ptr()) }
    }

    unsafe fn restore_window(window: SdlHandle) {
        unsafe { sys::SDL_RestoreWindow(window.as_ptr()) }
    }

    unsafe fn raise_window(window: SdlHandle) {
        unsafe { sys::SDL_RaiseWindow(window.as_ptr()) }
    }

    unsafe fn show_window(window: SdlHandle) {
        unsafe { sys::SDL_ShowWindow(window.as_ptr()) }
    }

    unsafe fn set_window_fullscreen(window: SdlHandle, flags: u32) -> bool {
        unsafe { sys::SDL_SetWindowFullscreen(window.as_ptr(), flags) == 0 }
    }

    unsafe fn window_brightness(window: SdlHandle) -> f32 {
        unsafe { sys::SDL_GetWindowBrightness(window.as_ptr()) }
    }

    unsafe fn set_window_brightness(window: SdlHandle, brightness: f32) -> bool {
        unsafe { sys::SDL_SetWindowBrightness(window.as_ptr(), brightness) == 0 }
    }

    unsafe fn window_position(window: SdlHandle) -> Point {
        read_pair(|x, y| unsafe { sys::SDL_GetWindowPosition(window.as_ptr(), x, y) })
    }

    unsafe fn set_window_position(window: SdlHandle, x: i32, y: i32) {
        unsafe { sys::SDL_SetWindowPosition(window.as_ptr(), x, y) }
    }

    unsafe fn window_minimum_size(window: SdlHandle) -> Point {
        read_pair(|w, h| unsafe { sys::SDL_GetWindowMinimumSize(window.as_ptr(), w, h) })
    }

    unsafe fn set_window_minimum_size(window: SdlHandle, w: i32, h: i32) {
        unsafe { sys::SDL_SetWindowMinimumSize(window.as_ptr(), w, h) }
    }

    unsafe fn window_maximum_size(window: SdlHandle) -> Point {
        read_pair(|w, h| unsafe { sys::SDL_GetWindowMaximumSize(window.as_ptr(), w, h) })
    }

    unsafe fn set_window_maximum_size(window: SdlHandle, w: i32, h: i32) {
        unsafe { sys::SDL_SetWindowMaximumSize(window.as_ptr(), w, h) }
    }

    unsafe fn window_grab(window: SdlHandle) -> bool {
        unsafe { sys::SDL_GetWindowGrab(window.as_ptr()) == sys::SDL_bool::SDL_TRUE }
    }

    unsafe fn set_window_grab(window: SdlHandle, grabbed: bool) {
        unsafe { sys::SDL_SetWindowGrab(window.as_ptr(), sdl_bool(grabbed)) }
    }

    unsafe fn window_flags(window: SdlHandle) -> u32 {
        unsafe { sys::SDL_GetWindowFlags(window.as_ptr()) }
    }

    unsafe fn window_id(window: SdlHandle) -> u32 {
        unsafe { sys::SDL_GetWindowID(window.as_ptr()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::WindowFlags;
    use crate::window::Window;

    fn dummy_video() {
        std::env::set_var("SDL_VIDEODRIVER", "dummy");
    }

    // SDL init state is process-global; one test keeps the sequence ordered.
    #[test]
    fn test_nested_contexts_keep_video_alive() {
        dummy_video();
        let outer = SdlContext::new().expect("dummy video driver");
        {
            let inner = SdlContext::new().expect("second context");
            drop(inner);
        }

        // The outer reference still holds video up
        assert_ne!(unsafe { sys::SDL_WasInit(sys::SDL_INIT_VIDEO) }, 0);
        let window = Window::<Sdl2Driver>::new("nested", 0, 0, 64, 48, WindowFlags::HIDDEN).expect("window");
        assert_eq!(window.size(), Point::new(64, 48));
        drop(window);

        drop(outer);
        assert_eq!(unsafe { sys::SDL_WasInit(sys::SDL_INIT_VIDEO) }, 0);
    }
}
