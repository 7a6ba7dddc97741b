//! # SDL Window
//!
//! Move-only owners for native window handles.
//!
//! [`Window`] holds exactly one native window and releases it when dropped.
//! Each method is a direct call into the native library; the two calls that
//! can fail (fullscreen and brightness changes), as well as creation, return
//! a [`WindowError`] carrying the library's own diagnostic text.
//!
//! The native side is reached through a [`VideoDriver`]:
//!
//! - [`HeadlessDriver`]: in-memory window system, always built
//! - `Sdl2Driver`: the system SDL2 library, behind the `sdl2` feature
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(feature = "sdl2")]
//! # fn main() -> Result<(), sdl_window::WindowError> {
//! use sdl_window::prelude::*;
//! use sdl_window::{SdlContext, SdlWindow};
//!
//! let _sdl = SdlContext::new()?;
//! let mut window = SdlWindow::new(
//!     "Test Window",
//!     WINDOWPOS_UNDEFINED,
//!     WINDOWPOS_UNDEFINED,
//!     640,
//!     480,
//!     WindowFlags::OPENGL,
//! )?;
//! window.set_title("Hello");
//! window.set_fullscreen(FullscreenMode::Desktop)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sdl2"))]
//! # fn main() {}
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod flags;
pub mod logging;
pub mod point;
pub mod position;
pub mod window;

pub use config::{Config, ConfigError, WindowConfig};
pub use driver::headless::{DriverStats, HeadlessDriver, HeadlessHandle};
pub use driver::VideoDriver;
pub use error::{WindowError, WindowResult};
pub use flags::{FullscreenMode, WindowFlags};
pub use point::Point;
pub use position::{
    is_windowpos_centered, is_windowpos_undefined, windowpos_centered_display, windowpos_undefined_display,
    Coordinate, WINDOWPOS_CENTERED, WINDOWPOS_UNDEFINED,
};
pub use window::Window;

#[cfg(feature = "sdl2")]
pub use driver::sdl::{Sdl2Driver, SdlContext, SdlHandle};

/// Window backed by the in-memory driver
pub type HeadlessWindow = Window<HeadlessDriver>;

/// Window backed by the system SDL2 library
#[cfg(feature = "sdl2")]
pub type SdlWindow = Window<Sdl2Driver>;

/// Common imports
pub mod prelude {
    pub use crate::{
        Config, Coordinate, FullscreenMode, Point, VideoDriver, Window, WindowConfig, WindowError, WindowFlags,
        WindowResult, WINDOWPOS_CENTERED, WINDOWPOS_UNDEFINED,
    };
}
