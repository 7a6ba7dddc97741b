//! In-memory window system
//!
//! Behaves like the native library as far as the wrapper can observe: windows
//! are created and destroyed, sizes are clamped to their limits, sentinel
//! coordinates are resolved against a virtual display, and failures set a
//! last-error string. Nothing is drawn.
//!
//! State is thread-local, mirroring the native library's main-thread
//! affinity. Each thread sees its own window system.

use super::{truncate_at_nul, VideoDriver};
use crate::flags::WindowFlags;
use crate::point::Point;
use crate::position::{is_windowpos_centered, is_windowpos_undefined};
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;

new_key_type! {
    /// Handle to a headless window
    pub struct HeadlessHandle;
}

/// Size of the virtual display used to resolve centered coordinates
pub const DEFAULT_DISPLAY_SIZE: Point = Point::new(1920, 1080);

/// Counters of native calls that acquire or release windows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverStats {
    /// Successful creations
    pub created: usize,
    /// Releases of live windows
    pub destroyed: usize,
    /// Failed creations
    pub failed: usize,
}

impl DriverStats {
    /// Windows created and not yet released
    pub const fn live(&self) -> usize {
        self.created - self.destroyed
    }
}

#[derive(Debug)]
struct HeadlessWindow {
    id: u32,
    title: Option<String>,
    position: Point,
    size: Point,
    minimum_size: Point,
    maximum_size: Point,
    flags: WindowFlags,
    brightness: f32,
}

impl HeadlessWindow {
    fn clamp_size(&mut self) {
        if self.minimum_size.x > 0 {
            self.size.x = self.size.x.max(self.minimum_size.x);
        }
        if self.minimum_size.y > 0 {
            self.size.y = self.size.y.max(self.minimum_size.y);
        }
        if self.maximum_size.x > 0 {
            self.size.x = self.size.x.min(self.maximum_size.x);
        }
        if self.maximum_size.y > 0 {
            self.size.y = self.size.y.min(self.maximum_size.y);
        }
    }
}

#[derive(Debug)]
struct HeadlessSystem {
    windows: SlotMap<HeadlessHandle, HeadlessWindow>,
    next_id: u32,
    last_error: String,
    stats: DriverStats,
    pending_create_failure: Option<String>,
    gamma_supported: bool,
    display_size: Point,
}

impl Default for HeadlessSystem {
    fn default() -> Self {
        Self {
            windows: SlotMap::with_key(),
            next_id: 1,
            last_error: String::new(),
            stats: DriverStats::default(),
            pending_create_failure: None,
            gamma_supported: true,
            display_size: DEFAULT_DISPLAY_SIZE,
        }
    }
}

impl HeadlessSystem {
    fn set_error(&mut self, msg: impl Into<String>) {
        self.last_error = msg.into();
    }

    fn resolve_coordinate(&self, value: i32, extent: i32, display_extent: i32) -> i32 {
        if is_windowpos_centered(value) {
            (display_extent - extent) / 2
        } else if is_windowpos_undefined(value) {
            0
        } else {
            value
        }
    }

    fn insert(&mut self, title: Option<String>, x: i32, y: i32, w: i32, h: i32, flags: WindowFlags) -> HeadlessHandle {
        let size = Point::new(w.max(1), h.max(1));
        let position = Point::new(
            self.resolve_coordinate(x, size.x, self.display_size.x),
            self.resolve_coordinate(y, size.y, self.display_size.y),
        );
        let mut flags = flags;
        if !flags.contains(WindowFlags::HIDDEN) {
            flags.insert(WindowFlags::SHOWN);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.stats.created += 1;
        self.windows.insert(HeadlessWindow {
            id,
            title,
            position,
            size,
            minimum_size: Point::default(),
            maximum_size: Point::default(),
            flags,
            brightness: 1.0,
        })
    }
}

thread_local! {
    static SYSTEM: RefCell<HeadlessSystem> = RefCell::new(HeadlessSystem::default());
}

fn with_system<R>(f: impl FnOnce(&mut HeadlessSystem) -> R) -> R {
    SYSTEM.with(|system| f(&mut system.borrow_mut()))
}

/// Run `f` against a live window, or record "Invalid window" and return `default`
fn with_window<R>(handle: HeadlessHandle, default: R, f: impl FnOnce(&mut HeadlessWindow) -> R) -> R {
    with_system(|system| {
        if let Some(window) = system.windows.get_mut(handle) {
            f(window)
        } else {
            system.set_error("Invalid window");
            default
        }
    })
}

/// Driver over the in-memory window system
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessDriver;

impl HeadlessDriver {
    /// Call counters for the current thread
    pub fn stats() -> DriverStats {
        with_system(|system| system.stats)
    }

    /// Drop every window and restore defaults for the current thread
    ///
    /// Slots are cleared rather than reallocated, so handles issued before the
    /// reset stay invalid instead of aliasing windows created after it.
    pub fn reset() {
        with_system(|system| {
            let mut windows = std::mem::take(&mut system.windows);
            windows.clear();
            *system = HeadlessSystem {
                windows,
                ..HeadlessSystem::default()
            };
        });
    }

    /// Make the next `create_window` fail with `message`
    pub fn fail_next_create(message: impl Into<String>) {
        let message = message.into();
        with_system(|system| system.pending_create_failure = Some(message));
    }

    /// Whether the display accepts gamma changes
    pub fn set_gamma_supported(supported: bool) {
        with_system(|system| system.gamma_supported = supported);
    }

    /// Change the virtual display size
    pub fn set_display_size(size: Point) {
        with_system(|system| system.display_size = size);
    }

    /// Whether `handle` refers to a window that has not been released
    pub fn is_live(handle: HeadlessHandle) -> bool {
        with_system(|system| system.windows.contains_key(handle))
    }

    /// Create an untitled window outside of any wrapper
    ///
    /// Stands in for windows created by other code (a toolkit, an embedding
    /// host) that are then handed over for ownership.
    pub fn create_foreign(w: i32, h: i32) -> HeadlessHandle {
        with_system(|system| system.insert(None, 0, 0, w, h, WindowFlags::FOREIGN))
    }
}

// Handles are generational keys; stale or foreign ones are reported as
// "Invalid window", so the unsafe contract is never relied upon here.
#[allow(unsafe_code)]
impl VideoDriver for HeadlessDriver {
    type Handle = HeadlessHandle;

    fn create_window(title: &str, x: i32, y: i32, w: i32, h: i32, flags: u32) -> Option<HeadlessHandle> {
        with_system(|system| {
            if let Some(msg) = system.pending_create_failure.take() {
                system.stats.failed += 1;
                system.set_error(msg);
                return None;
            }
            let flags = WindowFlags::from_bits_retain(flags);
            if flags.contains(WindowFlags::OPENGL | WindowFlags::VULKAN)
                || flags.contains(WindowFlags::VULKAN | WindowFlags::METAL)
            {
                system.stats.failed += 1;
                system.set_error("Conflicting window flags specified");
                return None;
            }
            let title = Some(truncate_at_nul(title).to_owned());
            Some(system.insert(title, x, y, w, h, flags))
        })
    }

    unsafe fn destroy_window(window: HeadlessHandle) {
        with_system(|system| {
            if system.windows.remove(window).is_some() {
                system.stats.destroyed += 1;
            } else {
                system.set_error("Invalid window");
            }
        });
    }

    fn last_error() -> String {
        with_system(|system| system.last_error.clone())
    }

    unsafe fn window_size(window: HeadlessHandle) -> Point {
        with_window(window, Point::default(), |w| w.size)
    }

    unsafe fn set_window_size(window: HeadlessHandle, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            with_system(|system| system.set_error("Parameter 'w' or 'h' is invalid"));
            return;
        }
        with_window(window, (), |win| {
            win.size = Point::new(w, h);
            win.clamp_size();
        });
    }

    unsafe fn window_title(window: HeadlessHandle) -> Option<String> {
        with_window(window, None, |w| w.title.clone())
    }

    unsafe fn set_window_title(window: HeadlessHandle, title: &str) {
        with_window(window, (), |w| w.title = Some(truncate_at_nul(title).to_owned()));
    }

    unsafe fn maximize_window(window: HeadlessHandle) {
        with_window(window, (), |w| {
            w.flags.remove(WindowFlags::MINIMIZED);
            w.flags.insert(WindowFlags::MAXIMIZED);
        });
    }

    unsafe fn minimize_window(window: HeadlessHandle) {
        with_window(window, (), |w| {
            w.flags.remove(WindowFlags::MAXIMIZED | WindowFlags::INPUT_FOCUS);
            w.flags.insert(WindowFlags::MINIMIZED);
        });
    }

    unsafe fn hide_window(window: HeadlessHandle) {
        with_window(window, (), |w| {
            w.flags.remove(WindowFlags::SHOWN | WindowFlags::INPUT_FOCUS);
            w.flags.insert(WindowFlags::HIDDEN);
        });
    }

    unsafe fn restore_window(window: HeadlessHandle) {
        with_window(window, (), |w| w.flags.remove(WindowFlags::MINIMIZED | WindowFlags::MAXIMIZED));
    }

    unsafe fn raise_window(window: HeadlessHandle) {
        with_window(window, (), |w| {
            if w.flags.contains(WindowFlags::SHOWN) {
                w.flags.insert(WindowFlags::INPUT_FOCUS);
            }
        });
    }

    unsafe fn show_window(window: HeadlessHandle) {
        with_window(window, (), |w| {
            w.flags.remove(WindowFlags::HIDDEN);
            w.flags.insert(WindowFlags::SHOWN);
        });
    }

    unsafe fn set_window_fullscreen(window: HeadlessHandle, flags: u32) -> bool {
        with_system(|system| {
            let requested = WindowFlags::from_bits_retain(flags);
            if !WindowFlags::FULLSCREEN_DESKTOP.contains(requested) {
                system.set_error(format!("Invalid fullscreen flags 0x{flags:08x}"));
                return false;
            }
            let Some(win) = system.windows.get_mut(window) else {
                system.set_error("Invalid window");
                return false;
            };
            win.flags.remove(WindowFlags::FULLSCREEN_DESKTOP);
            win.flags.insert(requested);
            true
        })
    }

    unsafe fn window_brightness(window: HeadlessHandle) -> f32 {
        with_window(window, 1.0, |w| w.brightness)
    }

    unsafe fn set_window_brightness(window: HeadlessHandle, brightness: f32) -> bool {
        with_system(|system| {
            if !system.gamma_supported {
                system.set_error("Gamma ramps not supported by the display");
                return false;
            }
            let Some(win) = system.windows.get_mut(window) else {
                system.set_error("Invalid window");
                return false;
            };
            win.brightness = brightness;
            true
        })
    }

    unsafe fn window_position(window: HeadlessHandle) -> Point {
        with_window(window, Point::default(), |w| w.position)
    }

    unsafe fn set_window_position(window: HeadlessHandle, x: i32, y: i32) {
        with_system(|system| {
            let display = system.display_size;
            let Some(win) = system.windows.get_mut(window) else {
                system.set_error("Invalid window");
                return;
            };
            if is_windowpos_centered(x) {
                win.position.x = (display.x - win.size.x) / 2;
            } else if !is_windowpos_undefined(x) {
                win.position.x = x;
            }
            if is_windowpos_centered(y) {
                win.position.y = (display.y - win.size.y) / 2;
            } else if !is_windowpos_undefined(y) {
                win.position.y = y;
            }
        });
    }

    unsafe fn window_minimum_size(window: HeadlessHandle) -> Point {
        with_window(window, Point::default(), |w| w.minimum_size)
    }

    unsafe fn set_window_minimum_size(window: HeadlessHandle, w: i32, h: i32) {
        with_system(|system| {
            if w <= 0 || h <= 0 {
                system.set_error("Parameter 'min_w' or 'min_h' is invalid");
                return;
            }
            let Some(win) = system.windows.get_mut(window) else {
                system.set_error("Invalid window");
                return;
            };
            let max = win.maximum_size;
            if (max.x > 0 && w > max.x) || (max.y > 0 && h > max.y) {
                system.set_error("Tried to set minimum size larger than maximum size");
                return;
            }
            win.minimum_size = Point::new(w, h);
            win.clamp_size();
        });
    }

    unsafe fn window_maximum_size(window: HeadlessHandle) -> Point {
        with_window(window, Point::default(), |w| w.maximum_size)
    }

    unsafe fn set_window_maximum_size(window: HeadlessHandle, w: i32, h: i32) {
        with_system(|system| {
            if w <= 0 || h <= 0 {
                system.set_error("Parameter 'max_w' or 'max_h' is invalid");
                return;
            }
            let Some(win) = system.windows.get_mut(window) else {
                system.set_error("Invalid window");
                return;
            };
            let min = win.minimum_size;
            if w < min.x || h < min.y {
                system.set_error("Tried to set maximum size smaller than minimum size");
                return;
            }
            win.maximum_size = Point::new(w, h);
            win.clamp_size();
        });
    }

    unsafe fn window_grab(window: HeadlessHandle) -> bool {
        with_window(window, false, |w| w.flags.contains(WindowFlags::INPUT_GRABBED))
    }

    unsafe fn set_window_grab(window: HeadlessHandle, grabbed: bool) {
        with_window(window, (), |w| w.flags.set(WindowFlags::INPUT_GRABBED, grabbed));
    }

    unsafe fn window_flags(window: HeadlessHandle) -> u32 {
        with_window(window, 0, |w| w.flags.bits())
    }

    unsafe fn window_id(window: HeadlessHandle) -> u32 {
        with_window(window, 0, |w| w.id)
    }
}
