//! Window creation and fullscreen flags

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Native window flags, OR-combinable
    ///
    /// Values are those of the native `SDL_WindowFlags`. Bits the native
    /// library defines later are kept as-is; combinations are never validated
    /// here.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct WindowFlags: u32 {
        /// Fullscreen window with a video mode change
        const FULLSCREEN = 0x0000_0001;
        /// Usable with an OpenGL context
        const OPENGL = 0x0000_0002;
        /// Visible
        const SHOWN = 0x0000_0004;
        /// Not visible
        const HIDDEN = 0x0000_0008;
        /// No decoration
        const BORDERLESS = 0x0000_0010;
        /// Can be resized
        const RESIZABLE = 0x0000_0020;
        /// Minimized
        const MINIMIZED = 0x0000_0040;
        /// Maximized
        const MAXIMIZED = 0x0000_0080;
        /// Has grabbed input focus
        const INPUT_GRABBED = 0x0000_0100;
        /// Has input focus
        const INPUT_FOCUS = 0x0000_0200;
        /// Has mouse focus
        const MOUSE_FOCUS = 0x0000_0400;
        /// Fullscreen at the desktop resolution
        const FULLSCREEN_DESKTOP = Self::FULLSCREEN.bits() | 0x0000_1000;
        /// Not created by the library
        const FOREIGN = 0x0000_0800;
        /// High-DPI mode if supported
        const ALLOW_HIGHDPI = 0x0000_2000;
        /// Mouse captured
        const MOUSE_CAPTURE = 0x0000_4000;
        /// Always above others
        const ALWAYS_ON_TOP = 0x0000_8000;
        /// Not added to the taskbar
        const SKIP_TASKBAR = 0x0001_0000;
        /// Utility window
        const UTILITY = 0x0002_0000;
        /// Tooltip
        const TOOLTIP = 0x0004_0000;
        /// Popup menu
        const POPUP_MENU = 0x0008_0000;
        /// Usable for Vulkan surface
        const VULKAN = 0x1000_0000;
        /// Usable for Metal view
        const METAL = 0x2000_0000;

        const _ = !0;
    }
}

/// Fullscreen selector for [`Window::set_fullscreen`](crate::Window::set_fullscreen)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FullscreenMode {
    /// Regular window
    #[default]
    Windowed,
    /// Real fullscreen with a video mode change
    Fullscreen,
    /// Fake fullscreen covering the desktop
    Desktop,
}

impl From<FullscreenMode> for WindowFlags {
    fn from(mode: FullscreenMode) -> Self {
        match mode {
            FullscreenMode::Windowed => Self::empty(),
            FullscreenMode::Fullscreen => Self::FULLSCREEN,
            FullscreenMode::Desktop => Self::FULLSCREEN_DESKTOP,
        }
    }
}
