//! Owned native window
//!
//! [`Window`] binds the lifetime of one native window handle to a Rust value.
//! The handle is released exactly once, when the value is dropped; moving the
//! value moves ownership. Every method forwards to a single native call.
//!
//! ```
//! use sdl_window::{HeadlessDriver, Window, WindowFlags, WINDOWPOS_UNDEFINED};
//!
//! let mut window = Window::<HeadlessDriver>::new(
//!     "Test Window",
//!     WINDOWPOS_UNDEFINED,
//!     WINDOWPOS_UNDEFINED,
//!     640,
//!     480,
//!     WindowFlags::RESIZABLE,
//! )?;
//! window.set_size((800, 600));
//! assert_eq!(window.size(), (800, 600));
//! # Ok::<(), sdl_window::WindowError>(())
//! ```
//!
//! Ownership cannot be duplicated:
//!
//! ```compile_fail
//! use sdl_window::{HeadlessDriver, Window, WindowFlags};
//!
//! let window = Window::<HeadlessDriver>::new("a", 0, 0, 10, 10, WindowFlags::empty()).unwrap();
//! let copy = window.clone();
//! ```

use crate::config::WindowConfig;
use crate::driver::VideoDriver;
use crate::error::{WindowError, WindowResult};
use crate::flags::WindowFlags;
use crate::point::Point;
use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;

/// GUI window owning a native handle
///
/// Not `Clone`: the native API has no reference counting for windows, so a
/// second owner would release the handle twice. Not `Send`: native window
/// calls belong to the thread that set up the video subsystem.
pub struct Window<D: VideoDriver> {
    handle: D::Handle,
    _thread_bound: PhantomData<*const ()>,
}

// SAFETY (driver calls below): `handle` is owned by this window and stays
// live until `drop` or `into_raw`.
#[allow(unsafe_code)]
impl<D: VideoDriver> Window<D> {
    /// Take ownership of an existing native window
    ///
    /// No validation is performed.
    ///
    /// # Safety
    /// `handle` must be a live window that no other owner will release.
    pub unsafe fn from_raw(handle: D::Handle) -> Self {
        log::debug!("Adopting native window {handle:?}");
        Self { handle, _thread_bound: PhantomData }
    }

    /// Create a window
    ///
    /// `x` and `y` accept pixel coordinates or the
    /// [`WINDOWPOS_CENTERED`](crate::WINDOWPOS_CENTERED) /
    /// [`WINDOWPOS_UNDEFINED`](crate::WINDOWPOS_UNDEFINED) sentinels. The title
    /// is UTF-8.
    ///
    /// # Errors
    /// [`WindowError::Creation`] with the native diagnostic if the native call
    /// returns no window. Nothing is owned in that case.
    pub fn new(title: &str, x: i32, y: i32, w: i32, h: i32, flags: WindowFlags) -> WindowResult<Self> {
        match D::create_window(title, x, y, w, h, flags.bits()) {
            Some(handle) => {
                log::debug!("Created window {handle:?} \"{title}\" {w}x{h} flags {flags:?}");
                Ok(Self { handle, _thread_bound: PhantomData })
            }
            None => {
                let msg = D::last_error();
                log::warn!("Window creation failed: {msg}");
                Err(WindowError::Creation(msg))
            }
        }
    }

    /// Create a window from a configuration and apply its post-creation settings
    ///
    /// # Errors
    /// [`WindowError::Creation`] if the native window cannot be created, or
    /// [`WindowError::StateChange`] if a configured fullscreen mode or
    /// brightness is rejected. The window is released in the latter case.
    pub fn from_config(config: &WindowConfig) -> WindowResult<Self> {
        let mut window = Self::new(
            &config.title,
            config.x.to_raw(),
            config.y.to_raw(),
            config.width,
            config.height,
            config.flags,
        )?;
        window.apply_config(config)?;
        Ok(window)
    }

    /// Apply limits, grab, fullscreen and brightness from a configuration
    ///
    /// # Errors
    /// [`WindowError::StateChange`] from [`set_fullscreen`](Self::set_fullscreen)
    /// or [`set_brightness`](Self::set_brightness).
    pub fn apply_config(&mut self, config: &WindowConfig) -> WindowResult<()> {
        if let Some(min) = config.minimum_size {
            self.set_minimum_size(min);
        }
        if let Some(max) = config.maximum_size {
            self.set_maximum_size(max);
        }
        self.set_grab(config.grab);
        self.set_fullscreen(config.fullscreen)?;
        if let Some(brightness) = config.brightness {
            self.set_brightness(brightness)?;
        }
        Ok(())
    }

    /// Give up ownership without releasing the native window
    pub fn into_raw(self) -> D::Handle {
        let this = ManuallyDrop::new(self);
        this.handle
    }

    /// Managed native handle
    pub fn raw(&self) -> D::Handle {
        self.handle
    }

    /// Client area size in pixels
    pub fn size(&self) -> Point {
        unsafe { D::window_size(self.handle) }
    }

    /// Client area width in pixels
    pub fn width(&self) -> i32 {
        self.size().x
    }

    /// Client area height in pixels
    pub fn height(&self) -> i32 {
        self.size().y
    }

    /// Set the title (UTF-8)
    pub fn set_title(&mut self, title: &str) {
        log::trace!("{:?}: set title \"{title}\"", self.handle);
        unsafe { D::set_window_title(self.handle, title) };
    }

    /// Title, or `""` when the native side has none
    pub fn title(&self) -> String {
        unsafe { D::window_title(self.handle) }.unwrap_or_default()
    }

    /// Make the window as large as possible
    pub fn maximize(&mut self) {
        log::trace!("{:?}: maximize", self.handle);
        unsafe { D::maximize_window(self.handle) };
    }

    /// Minimize to an iconic representation
    pub fn minimize(&mut self) {
        log::trace!("{:?}: minimize", self.handle);
        unsafe { D::minimize_window(self.handle) };
    }

    /// Hide the window
    pub fn hide(&mut self) {
        log::trace!("{:?}: hide", self.handle);
        unsafe { D::hide_window(self.handle) };
    }

    /// Restore size and position of a minimized or maximized window
    pub fn restore(&mut self) {
        log::trace!("{:?}: restore", self.handle);
        unsafe { D::restore_window(self.handle) };
    }

    /// Raise above other windows and set input focus
    pub fn raise(&mut self) {
        log::trace!("{:?}: raise", self.handle);
        unsafe { D::raise_window(self.handle) };
    }

    /// Show the window
    pub fn show(&mut self) {
        log::trace!("{:?}: show", self.handle);
        unsafe { D::show_window(self.handle) };
    }

    /// Set the fullscreen state
    ///
    /// Takes [`FullscreenMode`](crate::FullscreenMode) or raw
    /// [`WindowFlags`]: `FULLSCREEN`, `FULLSCREEN_DESKTOP` or empty.
    ///
    /// # Errors
    /// [`WindowError::StateChange`] if the native call fails.
    pub fn set_fullscreen(&mut self, flags: impl Into<WindowFlags>) -> WindowResult<()> {
        let flags = flags.into();
        log::trace!("{:?}: set fullscreen {flags:?}", self.handle);
        if unsafe { D::set_window_fullscreen(self.handle, flags.bits()) } {
            Ok(())
        } else {
            let msg = D::last_error();
            log::warn!("{:?}: fullscreen change failed: {msg}", self.handle);
            Err(WindowError::StateChange(msg))
        }
    }

    /// Set the client area size; accepts `(w, h)` or a [`Point`]
    pub fn set_size(&mut self, size: impl Into<Point>) {
        let size = size.into();
        log::trace!("{:?}: set size {size}", self.handle);
        unsafe { D::set_window_size(self.handle, size.x, size.y) };
    }

    /// Gamma multiplier of the display owning the window
    ///
    /// 0.0 is completely dark, 1.0 is normal brightness.
    pub fn brightness(&self) -> f32 {
        unsafe { D::window_brightness(self.handle) }
    }

    /// Set the gamma multiplier of the display owning the window
    ///
    /// 0.0 is completely dark, 1.0 is normal brightness. Other values are
    /// passed to the native side unchanged.
    ///
    /// # Errors
    /// [`WindowError::StateChange`] if the native call fails.
    pub fn set_brightness(&mut self, brightness: f32) -> WindowResult<()> {
        log::trace!("{:?}: set brightness {brightness}", self.handle);
        if unsafe { D::set_window_brightness(self.handle, brightness) } {
            Ok(())
        } else {
            let msg = D::last_error();
            log::warn!("{:?}: brightness change failed: {msg}", self.handle);
            Err(WindowError::StateChange(msg))
        }
    }

    /// Position of the top-left corner
    pub fn position(&self) -> Point {
        unsafe { D::window_position(self.handle) }
    }

    /// Move the window; sentinel coordinates are passed through
    pub fn set_position(&mut self, position: impl Into<Point>) {
        let position = position.into();
        log::trace!("{:?}: set position {position}", self.handle);
        unsafe { D::set_window_position(self.handle, position.x, position.y) };
    }

    /// Minimum client area size
    pub fn minimum_size(&self) -> Point {
        unsafe { D::window_minimum_size(self.handle) }
    }

    /// Set the minimum client area size
    pub fn set_minimum_size(&mut self, size: impl Into<Point>) {
        let size = size.into();
        log::trace!("{:?}: set minimum size {size}", self.handle);
        unsafe { D::set_window_minimum_size(self.handle, size.x, size.y) };
    }

    /// Maximum client area size
    pub fn maximum_size(&self) -> Point {
        unsafe { D::window_maximum_size(self.handle) }
    }

    /// Set the maximum client area size
    pub fn set_maximum_size(&mut self, size: impl Into<Point>) {
        let size = size.into();
        log::trace!("{:?}: set maximum size {size}", self.handle);
        unsafe { D::set_window_maximum_size(self.handle, size.x, size.y) };
    }

    /// Whether input is grabbed
    pub fn grab(&self) -> bool {
        unsafe { D::window_grab(self.handle) }
    }

    /// Grab or release input
    pub fn set_grab(&mut self, grabbed: bool) {
        log::trace!("{:?}: set grab {grabbed}", self.handle);
        unsafe { D::set_window_grab(self.handle, grabbed) };
    }

    /// Current window flags
    pub fn flags(&self) -> WindowFlags {
        WindowFlags::from_bits_retain(unsafe { D::window_flags(self.handle) })
    }

    /// Native numeric window id
    pub fn id(&self) -> u32 {
        unsafe { D::window_id(self.handle) }
    }
}

#[allow(unsafe_code)]
impl<D: VideoDriver> Drop for Window<D> {
    fn drop(&mut self) {
        log::debug!("Destroying window {:?}", self.handle);
        unsafe { D::destroy_window(self.handle) };
    }
}

impl<D: VideoDriver> fmt::Debug for Window<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window").field("handle", &self.handle).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::headless::{DriverStats, HeadlessDriver};
    use crate::flags::FullscreenMode;
    use crate::position::{Coordinate, WINDOWPOS_CENTERED, WINDOWPOS_UNDEFINED};
    use approx::assert_relative_eq;

    type TestWindow = Window<HeadlessDriver>;

    fn setup() {
        let _ = env_logger::builder().is_test(true).try_init();
        HeadlessDriver::reset();
    }

    fn open(title: &str) -> TestWindow {
        TestWindow::new(title, WINDOWPOS_UNDEFINED, WINDOWPOS_UNDEFINED, 640, 480, WindowFlags::empty())
            .expect("headless window creation")
    }

    #[test]
    fn test_create_then_drop_releases_once() {
        setup();
        let window = open("lifecycle");
        assert_eq!(HeadlessDriver::stats(), DriverStats { created: 1, destroyed: 0, failed: 0 });

        let handle = window.raw();
        drop(window);
        assert_eq!(HeadlessDriver::stats(), DriverStats { created: 1, destroyed: 1, failed: 0 });
        assert!(!HeadlessDriver::is_live(handle));
    }

    #[test]
    fn test_failed_creation_owns_nothing() {
        setup();
        HeadlessDriver::fail_next_create("Couldn't find matching GLX visual");

        let err = TestWindow::new("fail", 0, 0, 10, 10, WindowFlags::OPENGL).unwrap_err();
        assert_eq!(err, WindowError::Creation("Couldn't find matching GLX visual".to_string()));
        assert_eq!(err.to_string(), "Window creation failed: Couldn't find matching GLX visual");

        let stats = HeadlessDriver::stats();
        assert_eq!(stats.created, 0);
        assert_eq!(stats.destroyed, 0);
        assert_eq!(stats.failed, 1);
    }

    #[test]
    fn test_move_transfers_handle_once() {
        setup();
        let b = open("b");
        let hb = b.raw();

        let moved = b;
        assert_eq!(moved.raw(), hb);
        assert_eq!(HeadlessDriver::stats().destroyed, 0);

        drop(moved);
        assert_eq!(HeadlessDriver::stats().destroyed, 1);
    }

    #[test]
    fn test_move_assignment_releases_previous_handle() {
        setup();
        let mut a = open("a");
        let ha = a.raw();
        let b = open("b");
        let hb = b.raw();

        a = b;
        assert!(!HeadlessDriver::is_live(ha));
        assert!(HeadlessDriver::is_live(hb));
        assert_eq!(a.raw(), hb);
        assert_eq!(HeadlessDriver::stats().destroyed, 1);

        drop(a);
        assert_eq!(HeadlessDriver::stats(), DriverStats { created: 2, destroyed: 2, failed: 0 });
    }

    #[test]
    fn test_into_raw_and_from_raw() {
        setup();
        let window = open("raw");
        let handle = window.into_raw();
        assert!(HeadlessDriver::is_live(handle));
        assert_eq!(HeadlessDriver::stats().destroyed, 0);

        #[allow(unsafe_code)]
        // SAFETY: handle came from `into_raw` and has no other owner
        let adopted = unsafe { TestWindow::from_raw(handle) };
        assert_eq!(adopted.title(), "raw");
        drop(adopted);
        assert_eq!(HeadlessDriver::stats().destroyed, 1);
    }

    #[test]
    fn test_adopted_window_without_title_reads_empty() {
        setup();
        let handle = HeadlessDriver::create_foreign(300, 200);
        #[allow(unsafe_code)]
        // SAFETY: freshly created and not owned elsewhere
        let window = unsafe { TestWindow::from_raw(handle) };
        assert_eq!(window.title(), "");
        assert_eq!(window.size(), (300, 200));
    }

    #[test]
    fn test_size_round_trip() {
        setup();
        let mut window = open("size");
        window.set_size((640, 480));
        assert_eq!(window.size(), Point::new(640, 480));

        window.set_size(Point::new(1024, 768));
        assert_eq!(window.width(), 1024);
        assert_eq!(window.height(), 768);
    }

    #[test]
    fn test_title_round_trip() {
        setup();
        let mut window = open("initial");
        assert_eq!(window.title(), "initial");

        window.set_title("Test");
        assert_eq!(window.title(), "Test");

        window.set_title("Тест ✓");
        assert_eq!(window.title(), "Тест ✓");
    }

    #[test]
    fn test_position_and_sentinels() {
        setup();
        let mut window = open("position");
        window.set_position((100, 50));
        assert_eq!(window.position(), (100, 50));

        // Undefined leaves the coordinate to the platform
        window.set_position((WINDOWPOS_UNDEFINED, 75));
        assert_eq!(window.position(), (100, 75));

        window.set_position((WINDOWPOS_CENTERED, WINDOWPOS_CENTERED));
        assert_eq!(window.position(), ((1920 - 640) / 2, (1080 - 480) / 2));
    }

    #[test]
    fn test_size_limits() {
        setup();
        let mut window = open("limits");
        window.set_minimum_size((200, 100));
        window.set_maximum_size(Point::new(800, 600));
        assert_eq!(window.minimum_size(), (200, 100));
        assert_eq!(window.maximum_size(), (800, 600));

        window.set_size((1000, 50));
        assert_eq!(window.size(), (800, 100));
    }

    #[test]
    fn test_fullscreen() {
        setup();
        let mut window = open("fullscreen");
        window.set_fullscreen(FullscreenMode::Desktop).expect("desktop fullscreen");
        assert!(window.flags().contains(WindowFlags::FULLSCREEN_DESKTOP));

        window.set_fullscreen(FullscreenMode::Windowed).expect("windowed");
        assert!(!window.flags().intersects(WindowFlags::FULLSCREEN_DESKTOP));
    }

    #[test]
    fn test_fullscreen_rejected_combination() {
        setup();
        let mut window = open("fullscreen");
        let err = window
            .set_fullscreen(WindowFlags::FULLSCREEN | WindowFlags::RESIZABLE)
            .unwrap_err();
        assert!(matches!(err, WindowError::StateChange(_)));
        assert!(!err.message().is_empty());
    }

    #[test]
    fn test_brightness() {
        setup();
        let mut window = open("gamma");
        assert_relative_eq!(window.brightness(), 1.0);

        window.set_brightness(0.5).expect("brightness");
        assert_relative_eq!(window.brightness(), 0.5);

        // No clamping
        window.set_brightness(1.75).expect("brightness");
        assert_relative_eq!(window.brightness(), 1.75);
    }

    #[test]
    fn test_brightness_failure() {
        setup();
        let mut window = open("gamma");
        HeadlessDriver::set_gamma_supported(false);

        let err = window.set_brightness(0.8).unwrap_err();
        assert_eq!(err, WindowError::StateChange("Gamma ramps not supported by the display".to_string()));
        assert_relative_eq!(window.brightness(), 1.0);
    }

    #[test]
    fn test_grab_round_trip() {
        setup();
        let mut window = open("grab");
        assert!(!window.grab());
        window.set_grab(true);
        assert!(window.grab());
        window.set_grab(false);
        assert!(!window.grab());
    }

    #[test]
    fn test_state_requests() {
        setup();
        let mut window = open("state");
        window.maximize();
        assert!(window.flags().contains(WindowFlags::MAXIMIZED));
        window.restore();
        window.minimize();
        assert!(window.flags().contains(WindowFlags::MINIMIZED));
        window.restore();
        window.hide();
        assert!(window.flags().contains(WindowFlags::HIDDEN));
        window.show();
        window.raise();
        assert!(window.flags().contains(WindowFlags::SHOWN | WindowFlags::INPUT_FOCUS));
    }

    #[test]
    fn test_ids_are_distinct() {
        setup();
        let a = open("a");
        let b = open("b");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_from_config() {
        setup();
        let config = WindowConfig::new("configured")
            .with_size(800, 600)
            .with_position(Coordinate::At(10), Coordinate::At(20))
            .with_minimum_size(320, 240)
            .with_grab(true)
            .with_brightness(0.9);

        let window = TestWindow::from_config(&config).expect("configured window");
        assert_eq!(window.title(), "configured");
        assert_eq!(window.size(), (800, 600));
        assert_eq!(window.position(), (10, 20));
        assert_eq!(window.minimum_size(), (320, 240));
        assert!(window.grab());
        assert_relative_eq!(window.brightness(), 0.9);
    }

    #[test]
    fn test_from_config_failure_releases_window() {
        setup();
        HeadlessDriver::set_gamma_supported(false);
        let config = WindowConfig::new("dim").with_brightness(0.2);

        let err = TestWindow::from_config(&config).unwrap_err();
        assert!(matches!(err, WindowError::StateChange(_)));
        assert_eq!(HeadlessDriver::stats().live(), 0);
    }

    // Autoref check: the inherent const only exists when T: Clone
    trait NotClone {
        const IS_CLONE: bool = false;
    }
    impl<T> NotClone for T {}
    struct CloneCheck<T>(PhantomData<T>);
    impl<T: Clone> CloneCheck<T> {
        const IS_CLONE: bool = true;
    }

    #[test]
    fn test_window_is_not_clone() {
        assert!(!CloneCheck::<TestWindow>::IS_CLONE);
        assert!(CloneCheck::<Point>::IS_CLONE);
    }
}
