//! Conversions between 8-bit colors and ring intensities
//!
//! Scaling is linear, no gamma or dimming curve is applied.

use smart_leds::hsv::hsv2rgb;

use super::{BRIGHT_MAX, Color, Hsv, MAX_INTENSITY, RGB8};

/// Map a 0-255 value onto `0..BRIGHT_MAX`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn downscale(value: u8) -> u8 {
    ((value as u16 * BRIGHT_MAX as u16) >> 8) as u8
}

/// Map an intensity back onto 0-255
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
const fn upscale(value: u8) -> u8 {
    (value as u16 * 255 / MAX_INTENSITY as u16) as u8
}

impl Color {
    /// Quantize an 8-bit RGB color to ring intensities
    pub const fn from_rgb8(rgb: RGB8) -> Self {
        Self::saturating(downscale(rgb.r), downscale(rgb.g), downscale(rgb.b))
    }

    /// Expand ring intensities to an 8-bit RGB color
    pub const fn to_rgb8(&self) -> RGB8 {
        RGB8 {
            r: upscale(self.red()),
            g: upscale(self.green()),
            b: upscale(self.blue()),
        }
    }

    /// Quantize an HSV color (0-255 hue circle) to ring intensities
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self::from_rgb8(hsv2rgb(hsv))
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self {
        Self::from_rgb8(rgb)
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        color.to_rgb8()
    }
}
