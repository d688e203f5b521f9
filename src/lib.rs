//! Driver for a ring of discrete RGB LEDs on a multiplexed bus.
//!
//! Pairs of LEDs share a selector line and two color buses. The
//! [`ScanEngine`] lights one pair at a time and compares each channel's
//! intensity against a set of brightness thresholds, so the eye sees every
//! LED at its own color. Colors live in a [`ColorStore`] that the control
//! path may write at any time.
//!
//! ```ignore
//! static STORE: ColorStore<12> = ColorStore::new();
//!
//! let topology = BusTopology::ring(6)?;
//! let engine = ScanEngine::new(bus, &STORE, topology, ScanConfig::DEFAULT)?;
//! let mut scheduler = ScanScheduler::new(engine);
//! scheduler.start(Instant::now());
//!
//! STORE.set_all_at_level(ColorKind::Turquoise, MAX_INTENSITY);
//! ```

#![no_std]

pub mod bus;
pub mod color;
pub mod scan;
pub mod scan_scheduler;
pub mod store;

pub use bus::{BusDriver, BusTopology, ChannelBits, MAX_SELECTORS, TopologyError};
pub use color::{BRIGHT_MAX, Channel, Color, ColorKind, IntensityOutOfRange, MAX_INTENSITY};
pub use scan::{DEFAULT_SCALE_DIVISOR, DEFAULT_SETTLE, ScanConfig, ScanConfigError, ScanEngine, ScanOutcome};
pub use scan_scheduler::{DEFAULT_PERIOD, ScanScheduler, TickResult};
pub use store::{ColorStore, IndexOutOfRange, LedRing};

pub use embassy_time::{Duration, Instant};
