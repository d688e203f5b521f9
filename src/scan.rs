//! Multiplexing scan engine
//!
//! One pass walks the sampled brightness thresholds in increasing order and,
//! for every threshold, every LED pair in selector order. Each sampled
//! threshold stands for a slot of `scale_divisor` levels; a channel is lit in
//! a slot when the slot's first level is strictly below its intensity, so
//! over a pass each channel is on for a number of slots proportional to its
//! intensity. Zero is never lit, `MAX_INTENSITY` is lit in every slot.
//!
//! Note that a channel is therefore still lit at a threshold equal to its
//! intensity: intensity 7 is on at thresholds 3 and 7 with the default
//! divisor, where a plain `threshold < intensity` test would light it at 3 only.
//!
//! Before each pair is asserted the bus is cleared and held for the settle
//! time, which keeps the previous pair from flashing with the next pattern.
//! A pass always ends with the bus cleared.

use core::iter::StepBy;
use core::ops::Range;

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bus::{BusDriver, BusTopology, TopologyError};
use crate::color::BRIGHT_MAX;
use crate::store::ColorStore;

/// Default distance between two sampled thresholds
pub const DEFAULT_SCALE_DIVISOR: u8 = 4;

/// Default hold between clearing the bus and selecting the next pair
pub const DEFAULT_SETTLE: Duration = Duration::from_micros(2);

/// Error returned when a scale divisor cannot split `0..BRIGHT_MAX` into
/// equal slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfigError(pub u8);

/// Threshold sampling of a scan pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    scale_divisor: u8,
    settle: Duration,
}

impl ScanConfig {
    pub const DEFAULT: ScanConfig = ScanConfig {
        scale_divisor: DEFAULT_SCALE_DIVISOR,
        settle: DEFAULT_SETTLE,
    };

    /// Create a config sampling one threshold out of every `scale_divisor`
    ///
    /// The divisor must divide `BRIGHT_MAX`, which keeps every slot the same
    /// width, and be at least 2 so that `MAX_INTENSITY` can fill every slot.
    pub const fn new(scale_divisor: u8) -> Result<Self, ScanConfigError> {
        if scale_divisor < 2 || !BRIGHT_MAX.is_multiple_of(scale_divisor) {
            return Err(ScanConfigError(scale_divisor));
        }
        Ok(Self {
            scale_divisor,
            settle: DEFAULT_SETTLE,
        })
    }

    /// Use a custom settle hold, zero is raised to one tick
    pub const fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = if settle.as_ticks() == 0 {
            Duration::from_ticks(1)
        } else {
            settle
        };
        self
    }

    pub const fn scale_divisor(&self) -> u8 {
        self.scale_divisor
    }

    /// Hold between clearing the bus and asserting the next pair
    pub const fn settle(&self) -> Duration {
        self.settle
    }

    /// Sampled thresholds in scan order
    ///
    /// `[0..d), [d..2d), ...` are each represented by their last level, so
    /// with `BRIGHT_MAX = 16` and a divisor of 4 the pass visits 3, 7, 11, 15.
    pub fn thresholds(&self) -> StepBy<Range<u8>> {
        (self.scale_divisor - 1..BRIGHT_MAX).step_by(usize::from(self.scale_divisor))
    }

    /// First level of the slot represented by the sampled threshold `level`
    #[inline]
    pub const fn slot_floor(&self, level: u8) -> u8 {
        level.saturating_sub(self.scale_divisor - 1)
    }

    /// Number of thresholds visited by one pass
    #[allow(clippy::cast_lossless)]
    pub const fn sampled_levels(&self) -> usize {
        (BRIGHT_MAX / self.scale_divisor) as usize
    }

    /// Number of thresholds at which a channel of `intensity` is lit
    pub fn on_count(&self, intensity: u8) -> usize {
        self.thresholds()
            .filter(|level| self.slot_floor(*level) < intensity)
            .count()
    }

    /// Bus driver calls made by one full pass over `pairs` LED pairs
    ///
    /// Every pair costs a clear, a select and a channel write, plus the final
    /// clear. Multiply by the platform's cost per call and add the settle
    /// time to check that a pass fits inside the scheduler period.
    pub const fn bus_writes_per_pass(&self, pairs: usize) -> usize {
        self.sampled_levels() * pairs * 3 + 1
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of one [`ScanEngine::scan`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Scanning is disabled, the bus was not touched
    Idle,
    /// Full pass driven, bus left cleared
    Completed,
    /// Scanning was disabled during the pass, bus cleared early
    Stopped,
}

/// Scan engine driving the ring from a [`ColorStore`]
///
/// N is the number of LEDs in the ring
pub struct ScanEngine<'a, B: BusDriver, const N: usize> {
    bus: B,
    store: &'a ColorStore<N>,
    topology: BusTopology,
    config: ScanConfig,
}

impl<'a, B: BusDriver, const N: usize> ScanEngine<'a, B, N> {
    /// Create a new engine and clear the bus
    ///
    /// The topology must provide exactly one selector per LED pair.
    /// Scanning starts disabled, even if an earlier engine left the store's
    /// scanning flag set.
    pub fn new(
        mut bus: B,
        store: &'a ColorStore<N>,
        topology: BusTopology,
        config: ScanConfig,
    ) -> Result<Self, TopologyError> {
        if topology.pairs() != N / 2 {
            return Err(TopologyError::PairCountMismatch {
                expected: N / 2,
                actual: topology.pairs(),
            });
        }
        store.set_scanning(false);
        bus.clear_all();
        Ok(Self {
            bus,
            store,
            topology,
            config,
        })
    }

    /// Allow [`scan`](Self::scan) to drive the bus
    pub fn enable(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[ScanEngine.enable] scanning {} LEDs", N);
        self.store.set_scanning(true);
    }

    /// Stop scanning and leave every bus line de-asserted
    ///
    /// Safe to call repeatedly. The stored colors are not touched.
    pub fn disable(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[ScanEngine.disable] scanning stopped");
        self.store.set_scanning(false);
        self.bus.clear_all();
    }

    pub fn is_enabled(&self) -> bool {
        self.store.is_scanning()
    }

    /// Run one full scan pass
    ///
    /// Never blocks and never allocates. If the store reports scanning as
    /// stopped between two pairs, the bus is cleared and the pass ends.
    pub fn scan(&mut self) -> ScanOutcome {
        if !self.store.is_scanning() {
            return ScanOutcome::Idle;
        }

        let bus_a = self.topology.bus_a();
        let bus_b = self.topology.bus_b();
        let settle = self.config.settle();

        for level in self.config.thresholds() {
            let floor = self.config.slot_floor(level);
            for (selector, &mask) in self.topology.selectors().iter().enumerate() {
                let Some((first, second)) = self.store.scan_pair(selector) else {
                    self.bus.clear_all();
                    return ScanOutcome::Stopped;
                };
                let pattern_a = bus_a.encode(first, floor);
                let pattern_b = bus_b.encode(second, floor);

                self.bus.clear_all();
                self.bus.settle(settle);
                self.bus.select_pair(mask);
                self.bus.write_channels(pattern_a, pattern_b);
            }
        }

        self.bus.clear_all();
        ScanOutcome::Completed
    }

    pub const fn config(&self) -> ScanConfig {
        self.config
    }

    pub fn topology(&self) -> &BusTopology {
        &self.topology
    }

    /// Color store the engine reads from
    pub const fn store(&self) -> &'a ColorStore<N> {
        self.store
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the bus driver
    pub fn into_bus(self) -> B {
        self.bus
    }
}
