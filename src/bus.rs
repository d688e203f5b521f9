//! Physical bus of the ring
//!
//! The ring is wired as a selector port plus two color buses. Each selector
//! mask enables one pair of LEDs: the first LED of the pair listens to bus A,
//! the second one to bus B.

use embassy_time::{Duration, block_for};
use heapless::Vec;

use crate::color::{Channel, Color};

/// Maximum number of LED pairs a selector port can address
pub const MAX_SELECTORS: usize = 8;

/// Abstract bus driver trait
///
/// Implement this trait to drive the ring on a specific platform.
/// The scan engine is generic over this trait.
pub trait BusDriver {
    /// Enable the LED pair addressed by `mask`, disabling every other pair
    fn select_pair(&mut self, mask: u8);

    /// Drive the color buses of the selected pair
    fn write_channels(&mut self, bus_a: u8, bus_b: u8);

    /// De-assert the selector port and both color buses
    fn clear_all(&mut self);

    /// Hold the cleared bus so the previous pair goes dark
    ///
    /// Busy-waits for `hold` by default. Platforms with a cheaper fixed delay
    /// (a couple of `nop`s) may override it, the hold must stay non-zero.
    fn settle(&mut self, hold: Duration) {
        block_for(hold);
    }
}

/// Error returned when a bus topology is not a valid one-to-one wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    /// No selectors were given
    Empty,
    /// More selectors than the port can address
    TooManySelectors,
    /// Selector at this index is zero or shares a bit with an earlier one
    OverlappingSelector(usize),
    /// Channel bits are not three distinct single bits
    InvalidChannelBits,
    /// Number of selectors does not match the number of LED pairs
    PairCountMismatch { expected: usize, actual: usize },
}

/// Bit positions of the three channels on one color bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelBits {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ChannelBits {
    /// Red on bit 0, green on bit 1, blue on bit 2
    pub const DEFAULT: ChannelBits = ChannelBits {
        red: 1 << 0,
        green: 1 << 1,
        blue: 1 << 2,
    };

    /// Bit of a single channel
    pub const fn bit(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Mask with every channel bit set
    pub const fn all(&self) -> u8 {
        self.red | self.green | self.blue
    }

    /// Bus pattern of `color` for the slot starting at `level`
    ///
    /// A channel is on when `level` is strictly below its intensity.
    #[inline]
    pub const fn encode(&self, color: Color, level: u8) -> u8 {
        let mut bits = 0;
        if level < color.red() {
            bits |= self.red;
        }
        if level < color.green() {
            bits |= self.green;
        }
        if level < color.blue() {
            bits |= self.blue;
        }
        bits
    }

    const fn is_valid(&self) -> bool {
        self.red.count_ones() == 1
            && self.green.count_ones() == 1
            && self.blue.count_ones() == 1
            && self.red != self.green
            && self.red != self.blue
            && self.green != self.blue
    }
}

impl Default for ChannelBits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Wiring of the selector port and both color buses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusTopology {
    selectors: Vec<u8, MAX_SELECTORS>,
    bus_a: ChannelBits,
    bus_b: ChannelBits,
}

impl BusTopology {
    /// Create a topology from selector masks and channel bits
    ///
    /// Every selector must be non-zero and share no bit with another one,
    /// each bus must map the three channels to three distinct single bits.
    pub fn new(
        selectors: &[u8],
        bus_a: ChannelBits,
        bus_b: ChannelBits,
    ) -> Result<Self, TopologyError> {
        if selectors.is_empty() {
            return Err(TopologyError::Empty);
        }
        let selectors =
            Vec::from_slice(selectors).map_err(|()| TopologyError::TooManySelectors)?;

        let mut seen = 0u8;
        for (index, mask) in selectors.iter().enumerate() {
            if *mask == 0 || seen & mask != 0 {
                return Err(TopologyError::OverlappingSelector(index));
            }
            seen |= mask;
        }

        if !bus_a.is_valid() || !bus_b.is_valid() {
            return Err(TopologyError::InvalidChannelBits);
        }

        Ok(Self {
            selectors,
            bus_a,
            bus_b,
        })
    }

    /// Reference wiring: selector `i` on bit `i`, default channel bits on both buses
    pub fn ring(pairs: usize) -> Result<Self, TopologyError> {
        if pairs > MAX_SELECTORS {
            return Err(TopologyError::TooManySelectors);
        }
        let mut selectors = [0u8; MAX_SELECTORS];
        for (index, mask) in selectors.iter_mut().enumerate().take(pairs) {
            *mask = 1 << index;
        }
        Self::new(&selectors[..pairs], ChannelBits::DEFAULT, ChannelBits::DEFAULT)
    }

    /// Number of addressable LED pairs
    pub fn pairs(&self) -> usize {
        self.selectors.len()
    }

    /// Selector mask of the pair at `index`
    pub fn selector(&self, index: usize) -> Option<u8> {
        self.selectors.get(index).copied()
    }

    /// All selector masks in scan order
    pub fn selectors(&self) -> &[u8] {
        &self.selectors
    }

    pub const fn bus_a(&self) -> ChannelBits {
        self.bus_a
    }

    pub const fn bus_b(&self) -> ChannelBits {
        self.bus_b
    }
}
