//! Sentinel window coordinates
//!
//! The native library reserves two coordinate values that are not pixel
//! positions: "undefined" (let the platform choose) and "centered". Both can
//! carry a display index in their low bits. They are passed to the native
//! positioning calls untouched.

use serde::{Deserialize, Serialize};

/// Mask of the "undefined" sentinel
pub const WINDOWPOS_UNDEFINED_MASK: u32 = 0x1FFF_0000;

/// Mask of the "centered" sentinel
pub const WINDOWPOS_CENTERED_MASK: u32 = 0x2FFF_0000;

/// Let the platform choose the coordinate (primary display)
pub const WINDOWPOS_UNDEFINED: i32 = windowpos_undefined_display(0);

/// Center the window on the primary display
pub const WINDOWPOS_CENTERED: i32 = windowpos_centered_display(0);

/// "Undefined" sentinel for a specific display
#[allow(clippy::cast_possible_wrap)]
pub const fn windowpos_undefined_display(display: u32) -> i32 {
    (WINDOWPOS_UNDEFINED_MASK | display) as i32
}

/// "Centered" sentinel for a specific display
#[allow(clippy::cast_possible_wrap)]
pub const fn windowpos_centered_display(display: u32) -> i32 {
    (WINDOWPOS_CENTERED_MASK | display) as i32
}

/// Whether a coordinate is an "undefined" sentinel (any display)
#[allow(clippy::cast_sign_loss)]
pub const fn is_windowpos_undefined(value: i32) -> bool {
    (value as u32 & 0xFFFF_0000) == WINDOWPOS_UNDEFINED_MASK
}

/// Whether a coordinate is a "centered" sentinel (any display)
#[allow(clippy::cast_sign_loss)]
pub const fn is_windowpos_centered(value: i32) -> bool {
    (value as u32 & 0xFFFF_0000) == WINDOWPOS_CENTERED_MASK
}

/// Window coordinate as written in configuration files
///
/// In TOML: `x = "centered"`, `x = "undefined"` or `x = { at = 100 }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coordinate {
    /// Platform decides
    Undefined,
    /// Centered on the primary display
    #[default]
    Centered,
    /// Concrete pixel coordinate
    At(i32),
}

impl Coordinate {
    /// Raw value handed to the native call
    pub const fn to_raw(self) -> i32 {
        match self {
            Self::Undefined => WINDOWPOS_UNDEFINED,
            Self::Centered => WINDOWPOS_CENTERED,
            Self::At(v) => v,
        }
    }
}

impl From<i32> for Coordinate {
    fn from(value: i32) -> Self {
        if is_windowpos_undefined(value) {
            Self::Undefined
        } else if is_windowpos_centered(value) {
            Self::Centered
        } else {
            Self::At(value)
        }
    }
}

impl From<Coordinate> for i32 {
    fn from(c: Coordinate) -> Self {
        c.to_raw()
    }
}
