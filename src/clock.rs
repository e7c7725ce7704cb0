//! Clock module - drives the engine's tick from outside
//!
//! The engine never sleeps or schedules; it only exposes the interval the
//! next tick is due after. A [`GameClock`] polls a [`TimeSource`] and fires
//! `tick` whenever enough time has elapsed, re-reading the interval between
//! ticks so soft-drop, hard-drop, and level changes take effect on the very
//! next step. Tests substitute a manual time source and never sleep.

use crate::core::Engine;
use crate::events::EventSink;

/// Monotonic time in milliseconds.
pub trait TimeSource {
    fn now_ms(&mut self) -> u64;
}

/// Wall-clock time source backed by `std::time::Instant`.
#[derive(Debug)]
pub struct WallClock {
    origin: std::time::Instant,
}

impl WallClock {
    pub fn new() -> Self {
        WallClock {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for WallClock {
    fn now_ms(&mut self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Fires engine ticks on schedule.
///
/// `poll` is cheap and meant to be called from the host's event loop. After
/// a pause or any other gap the host does not want replayed, call `reset`
/// before polling again; otherwise the clock catches up with one tick per
/// elapsed interval.
#[derive(Debug)]
pub struct GameClock<T: TimeSource> {
    time: T,
    last_tick_ms: u64,
}

impl<T: TimeSource> GameClock<T> {
    pub fn new(mut time: T) -> Self {
        let last_tick_ms = time.now_ms();
        GameClock { time, last_tick_ms }
    }

    /// Fire every tick that has come due, returning how many fired.
    ///
    /// The interval is re-read from the engine after each tick: a lock event
    /// restores the level interval, a drop command collapses it, and the
    /// remaining elapsed time is spent against the new value.
    pub fn poll<S: EventSink>(&mut self, engine: &mut Engine<S>) -> u32 {
        let now = self.time.now_ms();
        let mut fired = 0;
        while engine.is_running() {
            let interval = u64::from(engine.tick_interval_ms());
            if now.saturating_sub(self.last_tick_ms) < interval {
                break;
            }
            self.last_tick_ms += interval;
            engine.tick();
            fired += 1;
        }
        fired
    }

    /// Forget elapsed time; the next tick is due one full interval from now.
    pub fn reset(&mut self) {
        self.last_tick_ms = self.time.now_ms();
    }
}
