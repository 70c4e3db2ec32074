//! Software blink emulation.
//!
//! The device's native flash mode runs at one fixed speed. This module
//! toggles solid/off commands itself so the interval is caller-chosen.
//! [`BlinkScheduler`] is polled: the owner passes the current time in and
//! no waiting happens inside, so it can live in a cooperative main loop.

use embassy_time::{Duration, Instant};
use log::debug;

use crate::color::Color;
use crate::port::LedPort;
use crate::{ByteSink, Waiter};

/// On/off phase lengths for one blink cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkTimings {
    pub on: Duration,
    pub off: Duration,
}

impl BlinkTimings {
    pub const fn new(on: Duration, off: Duration) -> Self {
        Self { on, off }
    }

    /// Equal on and off phases.
    pub const fn symmetric(period: Duration) -> Self {
        Self {
            on: period,
            off: period,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    On,
    Off,
}

/// Polled blink state machine.
///
/// While active, exactly one of the on/off phases holds and the next
/// transition is fully determined by the phase start time, the configured
/// timings and the time passed into [`poll`](Self::poll). Poll at least
/// twice per smallest configured interval to keep phase error within one
/// poll period.
#[derive(Debug)]
pub struct BlinkScheduler {
    phase: Phase,
    color: Color,
    timings: BlinkTimings,
    phase_start: Instant,
}

impl BlinkScheduler {
    pub const fn new() -> Self {
        Self {
            phase: Phase::Idle,
            color: Color::OFF,
            timings: BlinkTimings::symmetric(Duration::from_millis(0)),
            phase_start: Instant::from_millis(0),
        }
    }

    /// Begin blinking `color`, restarting the cycle if one is running.
    ///
    /// The color is sent immediately; `now` marks the start of the on
    /// phase.
    pub fn start<S: ByteSink>(
        &mut self,
        port: &mut LedPort<S>,
        color: Color,
        timings: BlinkTimings,
        now: Instant,
    ) {
        debug!(
            "blink start: color={:#04x} on={}ms off={}ms",
            color.bits(),
            timings.on.as_millis(),
            timings.off.as_millis()
        );
        self.phase = Phase::On;
        self.color = color;
        self.timings = timings;
        self.phase_start = now;
        port.set_color(color);
    }

    /// Stop blinking and turn the LED off. Safe to call in any state.
    pub fn stop<S: ByteSink>(&mut self, port: &mut LedPort<S>) {
        debug!("blink stop");
        self.phase = Phase::Idle;
        port.off();
    }

    /// Whether a blink cycle is running.
    pub const fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Advance the state machine, flipping the phase when its interval has
    /// elapsed.
    ///
    /// At most one transition fires per call: when polling falls behind,
    /// the surplus time is absorbed rather than replayed, so a stalled
    /// caller drifts but never triggers a burst of queued commands.
    pub fn poll<S: ByteSink>(&mut self, port: &mut LedPort<S>, now: Instant) {
        match self.phase {
            Phase::Idle => {}
            Phase::On if elapsed(self.phase_start, now) >= self.timings.on => {
                port.off();
                self.phase = Phase::Off;
                self.phase_start = now;
            }
            Phase::Off if elapsed(self.phase_start, now) >= self.timings.off => {
                port.set_color(self.color);
                self.phase = Phase::On;
                self.phase_start = now;
            }
            Phase::On | Phase::Off => {}
        }
    }
}

impl Default for BlinkScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Time since `since`, zero if the clock has not moved past it.
fn elapsed(since: Instant, now: Instant) -> Duration {
    if now.as_millis() > since.as_millis() {
        Duration::from_millis(now.as_millis() - since.as_millis())
    } else {
        Duration::from_millis(0)
    }
}

/// Blocking fixed-count companion to [`BlinkScheduler`].
///
/// Runs `cycles` on/off pairs in strict alternation starting with on,
/// occupying the caller through `waiter` for the whole run.
pub fn run_fixed_cycles<S: ByteSink, W: Waiter>(
    port: &mut LedPort<S>,
    waiter: &mut W,
    color: Color,
    timings: BlinkTimings,
    cycles: u8,
) {
    for _ in 0..cycles {
        port.set_color(color);
        waiter.wait(timings.on);
        port.off();
        waiter.wait(timings.off);
    }
}
