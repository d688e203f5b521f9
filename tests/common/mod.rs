#![allow(dead_code)]

use embassy_time::Duration;
use myrtio_rgb_ring::{BusDriver, ColorStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    Select(u8),
    Write(u8, u8),
    Clear,
    Settle,
}

/// Bus that records every call and tracks the current line levels
#[derive(Default)]
pub struct RecordingBus {
    pub events: Vec<BusEvent>,
    pub selected: u8,
    pub bus_a: u8,
    pub bus_b: u8,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.events.clear();
    }

    pub fn is_dark(&self) -> bool {
        self.selected == 0 && self.bus_a == 0 && self.bus_b == 0
    }

    /// Every asserted (selector, bus A, bus B) triple in write order
    pub fn frames(&self) -> Vec<(u8, u8, u8)> {
        let mut selected = 0;
        let mut frames = Vec::new();
        for event in &self.events {
            match *event {
                BusEvent::Select(mask) => selected = mask,
                BusEvent::Write(a, b) => frames.push((selected, a, b)),
                BusEvent::Clear => selected = 0,
                BusEvent::Settle => {}
            }
        }
        frames
    }

    /// Bus calls that cost time on hardware, settle excluded
    pub fn writes(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event != BusEvent::Settle)
            .count()
    }
}

impl BusDriver for RecordingBus {
    fn select_pair(&mut self, mask: u8) {
        self.selected = mask;
        self.events.push(BusEvent::Select(mask));
    }

    fn write_channels(&mut self, bus_a: u8, bus_b: u8) {
        self.bus_a = bus_a;
        self.bus_b = bus_b;
        self.events.push(BusEvent::Write(bus_a, bus_b));
    }

    fn clear_all(&mut self) {
        self.selected = 0;
        self.bus_a = 0;
        self.bus_b = 0;
        self.events.push(BusEvent::Clear);
    }

    fn settle(&mut self, _hold: Duration) {
        self.events.push(BusEvent::Settle);
    }
}

/// Recording bus that stops scanning from "another context" after a number
/// of channel writes
pub struct StoppingBus<'a, const N: usize> {
    pub inner: RecordingBus,
    pub store: &'a ColorStore<N>,
    pub stop_after: usize,
}

impl<'a, const N: usize> StoppingBus<'a, N> {
    pub fn new(store: &'a ColorStore<N>, stop_after: usize) -> Self {
        Self {
            inner: RecordingBus::new(),
            store,
            stop_after,
        }
    }
}

impl<const N: usize> BusDriver for StoppingBus<'_, N> {
    fn select_pair(&mut self, mask: u8) {
        self.inner.select_pair(mask);
    }

    fn write_channels(&mut self, bus_a: u8, bus_b: u8) {
        self.inner.write_channels(bus_a, bus_b);
        if self.inner.frames().len() == self.stop_after {
            self.store.request_stop();
        }
    }

    fn clear_all(&mut self) {
        self.inner.clear_all();
    }

    fn settle(&mut self, hold: Duration) {
        self.inner.settle(hold);
    }
}
