//! The color value stored on each LED.
//!
//! This is a plain ARGB container, not a color-management type: color-space
//! conversion and effect composition happen outside the core. Backends read
//! whichever channels their hardware understands at transmit time.

use serde::{Deserialize, Serialize};

/// An ARGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Alpha channel; `0` is fully transparent, `255` fully opaque.
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Fully transparent black, the color of a freshly registered LED.
    pub const TRANSPARENT: Self = Self { a: 0, r: 0, g: 0, b: 0 };

    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates an opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Creates a color from all four channels.
    pub const fn rgba(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}
