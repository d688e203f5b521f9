//! Color model of the ring
//!
//! Every LED holds three linear intensities, one per channel, each in
//! `0..BRIGHT_MAX`. The range is enforced at construction, so a [`Color`]
//! that exists is always safe to hand to the scan engine.

mod convert;
mod palette;

pub use palette::ColorKind;
pub use smart_leds::{RGB8, hsv::Hsv};

/// Number of distinct intensity levels per channel
pub const BRIGHT_MAX: u8 = 16;

/// Highest intensity a channel can hold
pub const MAX_INTENSITY: u8 = BRIGHT_MAX - 1;

/// Error returned when an intensity does not fit into `0..BRIGHT_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityOutOfRange(pub u8);

/// Single color channel of an LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in bus order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Next channel on the color wheel (red -> green -> blue -> red)
    pub const fn next(self) -> Self {
        match self {
            Channel::Red => Channel::Green,
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::Red,
        }
    }
}

/// Color of one LED in ring intensities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

/// Validate a single intensity
const fn checked(value: u8) -> Result<u8, IntensityOutOfRange> {
    if value < BRIGHT_MAX {
        Ok(value)
    } else {
        Err(IntensityOutOfRange(value))
    }
}

/// Clamp a single intensity to `MAX_INTENSITY`
const fn clamped(value: u8) -> u8 {
    if value > MAX_INTENSITY {
        MAX_INTENSITY
    } else {
        value
    }
}

impl Color {
    /// All channels off
    pub const OFF: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Create a color, rejecting intensities outside `0..BRIGHT_MAX`
    pub const fn new(red: u8, green: u8, blue: u8) -> Result<Self, IntensityOutOfRange> {
        let red = match checked(red) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };
        let green = match checked(green) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };
        let blue = match checked(blue) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };
        Ok(Self { red, green, blue })
    }

    /// Create a color, clamping every intensity to `MAX_INTENSITY`
    pub const fn saturating(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: clamped(red),
            green: clamped(green),
            blue: clamped(blue),
        }
    }

    /// Single hue with a variation on the neighbouring channel
    ///
    /// The `primary` channel is driven at `MAX_INTENSITY`, the next channel on
    /// the wheel gets `variation` (clamped) and the remaining one stays off.
    /// `unicolor(Red, 0)` is pure red, `unicolor(Red, MAX_INTENSITY)` is yellow.
    pub const fn unicolor(primary: Channel, variation: u8) -> Self {
        Self::OFF
            .with_clamped(primary, MAX_INTENSITY)
            .with_clamped(primary.next(), variation)
    }

    pub const fn red(&self) -> u8 {
        self.red
    }

    pub const fn green(&self) -> u8 {
        self.green
    }

    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Intensity of a single channel
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Copy of this color with one channel replaced
    pub const fn with_channel(self, channel: Channel, value: u8) -> Result<Self, IntensityOutOfRange> {
        match checked(value) {
            Ok(value) => Ok(self.with_clamped(channel, value)),
            Err(err) => Err(err),
        }
    }

    /// Copy of this color with one channel replaced, clamping the value
    pub const fn with_clamped(mut self, channel: Channel, value: u8) -> Self {
        let value = clamped(value);
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
        self
    }

    /// Check if every channel is off
    pub const fn is_off(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }
}
