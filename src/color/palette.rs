//! Named hues used by the palette presets

use super::{Channel, Color};

const COLOR_NAME_BLACK: &str = "black";
const COLOR_NAME_RED: &str = "red";
const COLOR_NAME_YELLOW: &str = "yellow";
const COLOR_NAME_GREEN: &str = "green";
const COLOR_NAME_TURQUOISE: &str = "turquoise";
const COLOR_NAME_BLUE: &str = "blue";
const COLOR_NAME_FUCHSIA: &str = "fuchsia";
const COLOR_NAME_WHITE: &str = "white";

const COLOR_ID_BLACK: u8 = 0;
const COLOR_ID_RED: u8 = 1;
const COLOR_ID_YELLOW: u8 = 2;
const COLOR_ID_GREEN: u8 = 3;
const COLOR_ID_TURQUOISE: u8 = 4;
const COLOR_ID_BLUE: u8 = 5;
const COLOR_ID_FUCHSIA: u8 = 6;
const COLOR_ID_WHITE: u8 = 7;

/// Fixed hue built from fully-on or fully-off channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorKind {
    Black = COLOR_ID_BLACK,
    Red = COLOR_ID_RED,
    Yellow = COLOR_ID_YELLOW,
    Green = COLOR_ID_GREEN,
    Turquoise = COLOR_ID_TURQUOISE,
    Blue = COLOR_ID_BLUE,
    Fuchsia = COLOR_ID_FUCHSIA,
    White = COLOR_ID_WHITE,
}

impl ColorKind {
    pub const ALL: [ColorKind; 8] = [
        Self::Black,
        Self::Red,
        Self::Yellow,
        Self::Green,
        Self::Turquoise,
        Self::Blue,
        Self::Fuchsia,
        Self::White,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            COLOR_ID_BLACK => Self::Black,
            COLOR_ID_RED => Self::Red,
            COLOR_ID_YELLOW => Self::Yellow,
            COLOR_ID_GREEN => Self::Green,
            COLOR_ID_TURQUOISE => Self::Turquoise,
            COLOR_ID_BLUE => Self::Blue,
            COLOR_ID_FUCHSIA => Self::Fuchsia,
            COLOR_ID_WHITE => Self::White,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => COLOR_NAME_BLACK,
            Self::Red => COLOR_NAME_RED,
            Self::Yellow => COLOR_NAME_YELLOW,
            Self::Green => COLOR_NAME_GREEN,
            Self::Turquoise => COLOR_NAME_TURQUOISE,
            Self::Blue => COLOR_NAME_BLUE,
            Self::Fuchsia => COLOR_NAME_FUCHSIA,
            Self::White => COLOR_NAME_WHITE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_NAME_BLACK => Some(Self::Black),
            COLOR_NAME_RED => Some(Self::Red),
            COLOR_NAME_YELLOW => Some(Self::Yellow),
            COLOR_NAME_GREEN => Some(Self::Green),
            COLOR_NAME_TURQUOISE => Some(Self::Turquoise),
            COLOR_NAME_BLUE => Some(Self::Blue),
            COLOR_NAME_FUCHSIA => Some(Self::Fuchsia),
            COLOR_NAME_WHITE => Some(Self::White),
            _ => None,
        }
    }

    /// Check if the hue lights the given channel
    pub const fn lights(self, channel: Channel) -> bool {
        let (red, green, blue) = match self {
            Self::Black => (false, false, false),
            Self::Red => (true, false, false),
            Self::Yellow => (true, true, false),
            Self::Green => (false, true, false),
            Self::Turquoise => (false, true, true),
            Self::Blue => (false, false, true),
            Self::Fuchsia => (true, false, true),
            Self::White => (true, true, true),
        };
        match channel {
            Channel::Red => red,
            Channel::Green => green,
            Channel::Blue => blue,
        }
    }

    /// Build the hue with every lit channel at `level`
    ///
    /// `level` is clamped to `MAX_INTENSITY`.
    pub const fn at_level(self, level: u8) -> Color {
        let mut color = Color::OFF;
        if self.lights(Channel::Red) {
            color = color.with_clamped(Channel::Red, level);
        }
        if self.lights(Channel::Green) {
            color = color.with_clamped(Channel::Green, level);
        }
        if self.lights(Channel::Blue) {
            color = color.with_clamped(Channel::Blue, level);
        }
        color
    }
}
