//! Periodic scheduling of scan passes.
//!
//! Models the hardware timer without tying the crate to a platform timer:
//! the caller feeds the current time into [`ScanScheduler::tick`] and waits
//! for the returned deadline. The deadline for the next pass is fixed before
//! the pass runs, so the time spent scanning does not add drift.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bus::BusDriver;
use crate::scan::{ScanEngine, ScanOutcome};

/// Default scan period (500 passes per second).
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(2);

/// Result of a scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// What the scan pass did.
    pub outcome: ScanOutcome,
    /// The deadline for the next pass, `None` once the scheduler is stopped.
    pub next_deadline: Option<Instant>,
    /// How long to wait until the next pass (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Fixed-period trigger for a [`ScanEngine`].
///
/// This scheduler:
/// - Re-arms itself before every pass
/// - Resets the schedule after stalls longer than two periods
/// - Counts passes that started late
/// - Stops itself when the engine reports scanning as stopped
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = ScanScheduler::new(engine);
/// scheduler.start(Instant::now());
///
/// while let Some(result) = scheduler.tick(Instant::now()) {
///     // Platform-specific sleep
///     block_for(result.sleep_duration);
/// }
/// ```
pub struct ScanScheduler<'a, B: BusDriver, const N: usize> {
    engine: ScanEngine<'a, B, N>,
    period: Duration,
    next_pass: Option<Instant>,
    missed_deadlines: u32,
}

impl<'a, B: BusDriver, const N: usize> ScanScheduler<'a, B, N> {
    /// Create a stopped scheduler using `DEFAULT_PERIOD`.
    pub fn new(engine: ScanEngine<'a, B, N>) -> Self {
        Self::with_period(engine, DEFAULT_PERIOD)
    }

    /// Create a stopped scheduler with a custom period.
    pub fn with_period(engine: ScanEngine<'a, B, N>, period: Duration) -> Self {
        Self {
            engine,
            period,
            next_pass: None,
            missed_deadlines: 0,
        }
    }

    /// Arm the trigger, the first pass is due at `now`.
    pub fn start(&mut self, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[ScanScheduler.start] period {}us", self.period.as_micros());
        self.engine.enable();
        self.next_pass = Some(now);
    }

    /// Disarm the trigger and clear the bus.
    pub fn stop(&mut self) {
        self.next_pass = None;
        self.engine.disable();
    }

    pub const fn is_running(&self) -> bool {
        self.next_pass.is_some()
    }

    /// Run the pass due at `now`.
    ///
    /// Returns `None` without touching the bus if the scheduler is stopped.
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Option<TickResult> {
        let mut deadline = self.next_pass?;

        // Re-arm first so the pass duration never shifts the schedule
        if now > deadline {
            self.missed_deadlines = self.missed_deadlines.saturating_add(1);
            // Skip the backlog instead of catching up after a long stall
            if now > deadline + self.period * 2 {
                #[cfg(feature = "esp32-log")]
                println!("[ScanScheduler.tick] stalled, resetting schedule");
                deadline = now;
            }
        }
        let next = deadline + self.period;
        self.next_pass = Some(next);

        let outcome = self.engine.scan();
        if outcome != ScanOutcome::Completed {
            // Stopped from another context, the engine already cleared the bus
            self.next_pass = None;
        }

        let sleep_duration = match self.next_pass {
            Some(next) if next > now => next - now,
            _ => Duration::from_ticks(0),
        };

        Some(TickResult {
            outcome,
            next_deadline: self.next_pass,
            sleep_duration,
        })
    }

    /// Number of passes that started after their deadline.
    ///
    /// A growing count means a pass does not fit inside the period.
    pub const fn missed_deadlines(&self) -> u32 {
        self.missed_deadlines
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &ScanEngine<'a, B, N> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut ScanEngine<'a, B, N> {
        &mut self.engine
    }
}
