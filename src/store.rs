//! Color store of the ring
//!
//! [`LedRing`] is the plain per-LED color array. [`ColorStore`] wraps it
//! together with the scanning flag behind a critical-section mutex, so the
//! control path and the periodic scan can share it without a lock that could
//! stall the timer. Every operation holds the critical section only for the
//! duration of a copy.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::color::{Channel, Color, ColorKind};

/// Error returned when an LED index is outside the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Fixed-size ring of LED colors
///
/// N is the number of LEDs and must be even, LEDs are driven in pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedRing<const N: usize> {
    leds: [Color; N],
}

impl<const N: usize> LedRing<N> {
    /// Create a ring with every LED off
    pub const fn new() -> Self {
        const {
            assert!(N > 0 && N.is_multiple_of(2), "LED count must be a positive even number");
        }
        Self {
            leds: [Color::OFF; N],
        }
    }

    /// Number of LEDs in the ring
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `false`, a ring holds at least one pair
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Number of LED pairs sharing a selector
    pub const fn pairs(&self) -> usize {
        N / 2
    }

    /// Color of the LED at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn get(&self, index: usize) -> Color {
        self.leds[index]
    }

    pub fn try_get(&self, index: usize) -> Result<Color, IndexOutOfRange> {
        self.leds
            .get(index)
            .copied()
            .ok_or(IndexOutOfRange { index, len: N })
    }

    /// Replace the color of the LED at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set(&mut self, index: usize, color: Color) {
        self.leds[index] = color;
    }

    pub fn try_set(&mut self, index: usize, color: Color) -> Result<(), IndexOutOfRange> {
        let slot = self
            .leds
            .get_mut(index)
            .ok_or(IndexOutOfRange { index, len: N })?;
        *slot = color;
        Ok(())
    }

    /// Replace one channel of the LED at `index`, clamping the value
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set_channel(&mut self, index: usize, channel: Channel, value: u8) {
        self.leds[index] = self.leds[index].with_clamped(channel, value);
    }

    /// Set the LED at `index` to a single hue with variation
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set_unicolor(&mut self, index: usize, primary: Channel, variation: u8) {
        self.leds[index] = Color::unicolor(primary, variation);
    }

    /// Set every LED to `color`
    pub fn set_all(&mut self, color: Color) {
        self.leds = [color; N];
    }

    /// Set every LED to the palette hue `kind` at `level`
    pub fn set_all_at_level(&mut self, kind: ColorKind, level: u8) {
        self.set_all(kind.at_level(level));
    }

    /// Set every LED to a single hue with variation
    pub fn set_all_unicolor(&mut self, primary: Channel, variation: u8) {
        self.set_all(Color::unicolor(primary, variation));
    }

    /// Colors of the LED pair behind `selector`, bus A first
    pub fn pair(&self, selector: usize) -> Option<(Color, Color)> {
        let first = *self.leds.get(selector * 2)?;
        let second = *self.leds.get(selector * 2 + 1)?;
        Some((first, second))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.leds.iter()
    }

    pub const fn as_slice(&self) -> &[Color] {
        &self.leds
    }
}

impl<const N: usize> Default for LedRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

struct StoreState<const N: usize> {
    ring: LedRing<N>,
    scanning: bool,
}

/// Ring colors shared between the control path and the scan engine.
///
/// Writes are immediate. A write racing with a scan pass may be seen by only
/// part of that pass; the next pass is always consistent.
pub struct ColorStore<const N: usize> {
    inner: Mutex<RefCell<StoreState<N>>>,
}

impl<const N: usize> ColorStore<N> {
    /// Create a store with every LED off and scanning disabled
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(StoreState {
                ring: LedRing::new(),
                scanning: false,
            })),
        }
    }

    /// Read the ring inside a critical section
    pub fn with<R>(&self, read: impl FnOnce(&LedRing<N>) -> R) -> R {
        critical_section::with(|cs| read(&self.inner.borrow(cs).borrow().ring))
    }

    /// Modify the ring inside a critical section
    pub fn update<R>(&self, write: impl FnOnce(&mut LedRing<N>) -> R) -> R {
        critical_section::with(|cs| write(&mut self.inner.borrow(cs).borrow_mut().ring))
    }

    /// Copy of the whole ring
    pub fn snapshot(&self) -> LedRing<N> {
        self.with(|ring| *ring)
    }

    /// Color of the LED at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn get(&self, index: usize) -> Color {
        assert!(index < N, "LED index {index} out of range for a ring of {N}");
        self.with(|ring| ring.get(index))
    }

    pub fn try_get(&self, index: usize) -> Result<Color, IndexOutOfRange> {
        self.with(|ring| ring.try_get(index))
    }

    /// Replace the color of the LED at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set(&self, index: usize, color: Color) {
        assert!(index < N, "LED index {index} out of range for a ring of {N}");
        self.update(|ring| ring.set(index, color));
    }

    pub fn try_set(&self, index: usize, color: Color) -> Result<(), IndexOutOfRange> {
        self.update(|ring| ring.try_set(index, color))
    }

    /// Replace one channel of the LED at `index`, clamping the value
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set_channel(&self, index: usize, channel: Channel, value: u8) {
        assert!(index < N, "LED index {index} out of range for a ring of {N}");
        self.update(|ring| ring.set_channel(index, channel, value));
    }

    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set_unicolor(&self, index: usize, primary: Channel, variation: u8) {
        assert!(index < N, "LED index {index} out of range for a ring of {N}");
        self.update(|ring| ring.set_unicolor(index, primary, variation));
    }

    pub fn set_all(&self, color: Color) {
        self.update(|ring| ring.set_all(color));
    }

    pub fn set_all_at_level(&self, kind: ColorKind, level: u8) {
        self.update(|ring| ring.set_all_at_level(kind, level));
    }

    pub fn set_all_unicolor(&self, primary: Channel, variation: u8) {
        self.update(|ring| ring.set_all_unicolor(primary, variation));
    }

    /// Check if the scan engine is allowed to drive the bus
    pub fn is_scanning(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().scanning)
    }

    /// Ask a running scan to stop at the next LED pair
    ///
    /// The engine clears the bus when it observes the request. Colors are
    /// kept, so scanning resumes with the same picture once re-enabled.
    pub fn request_stop(&self) {
        self.set_scanning(false);
    }

    pub(crate) fn set_scanning(&self, scanning: bool) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().scanning = scanning);
    }

    /// Colors of one LED pair, or `None` once scanning has been stopped
    pub(crate) fn scan_pair(&self, selector: usize) -> Option<(Color, Color)> {
        critical_section::with(|cs| {
            let state = self.inner.borrow(cs).borrow();
            if state.scanning {
                state.ring.pair(selector)
            } else {
                None
            }
        })
    }
}

impl<const N: usize> Default for ColorStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
