//! Blocking effect helpers.
//!
//! Thin compositions of the port and the blink machinery. Each helper
//! occupies the caller for its whole duration through the [`Waiter`]
//! capability, so they must not run in contexts that cannot tolerate
//! blocking. Use [`BlinkScheduler`] when the control loop must keep
//! running.

use embassy_time::{Duration, Instant};

use crate::blink::{BlinkScheduler, BlinkTimings, run_fixed_cycles};
use crate::color::Color;
use crate::command::{LedCommand, Mode};
use crate::port::LedPort;
use crate::{ByteSink, Waiter};

/// The seven saturated colors in sweep order.
pub const RAINBOW: [Color; 7] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::CYAN,
    Color::MAGENTA,
    Color::WHITE,
];

/// Flash `color` `count` times at caller-chosen speed, blocking.
pub fn flash<S: ByteSink, W: Waiter>(
    port: &mut LedPort<S>,
    waiter: &mut W,
    color: Color,
    timings: BlinkTimings,
    count: u8,
) {
    run_fixed_cycles(port, waiter, color, timings, count);
}

/// Show each color in sequence, holding each for `step`.
pub fn cycle_colors<S: ByteSink, W: Waiter>(
    port: &mut LedPort<S>,
    waiter: &mut W,
    colors: &[Color],
    step: Duration,
) {
    for &color in colors {
        port.set_color(color);
        waiter.wait(step);
    }
}

/// Sweep through the seven saturated colors.
pub fn rainbow<S: ByteSink, W: Waiter>(port: &mut LedPort<S>, waiter: &mut W, step: Duration) {
    cycle_colors(port, waiter, &RAINBOW, step);
}

/// Ramp up to `color` once. The device performs the fade; returns
/// immediately.
pub fn fade_in<S: ByteSink>(port: &mut LedPort<S>, color: Color) {
    port.send(LedCommand::fade_in(color));
}

/// Ramp down from `color` once. The device performs the fade; returns
/// immediately.
pub fn fade_out<S: ByteSink>(port: &mut LedPort<S>, color: Color) {
    port.send(LedCommand::fade_out(color));
}

/// Breathe `color` with caller-chosen pacing.
///
/// For a positive cycle count, issues one single-cycle native breathing
/// command per cycle and blocks `per_cycle` between them. A count of 0
/// issues one infinite native breathing command and returns immediately;
/// the device continues on its own.
pub fn breathing<S: ByteSink, W: Waiter>(
    port: &mut LedPort<S>,
    waiter: &mut W,
    color: Color,
    per_cycle: Duration,
    cycles: u8,
) {
    if cycles == 0 {
        port.send(LedCommand::breathing(color, 0));
        return;
    }
    for _ in 0..cycles {
        port.send(LedCommand::breathing(color, 1));
        waiter.wait(per_cycle);
    }
}

/// Speed-controlled dispatch over the native modes.
///
/// A zero `speed` issues the native command untouched, at the device's own
/// fixed pacing. A non-zero `speed` substitutes software pacing where the
/// device cannot: flashing with `cycles` of 0 hands off to the non-blocking
/// scheduler and returns, flashing with a positive count runs the blocking
/// fixed-cycle loop, breathing runs the single-cycle approximation. Modes
/// without a paced variant fall through to the native command.
#[allow(clippy::too_many_arguments)]
pub fn led_control<S: ByteSink, W: Waiter>(
    port: &mut LedPort<S>,
    waiter: &mut W,
    scheduler: &mut BlinkScheduler,
    mode: Mode,
    speed: Duration,
    color: Color,
    cycles: u8,
    now: Instant,
) {
    if speed.as_millis() == 0 {
        port.send(LedCommand::new(mode, color, color, cycles));
        return;
    }
    match mode {
        Mode::Flash if cycles == 0 => {
            scheduler.start(port, color, BlinkTimings::symmetric(speed), now);
        }
        Mode::Flash => run_fixed_cycles(port, waiter, color, BlinkTimings::symmetric(speed), cycles),
        Mode::Breathing => breathing(port, waiter, color, speed, cycles),
        Mode::On => port.set_color(color),
        Mode::Off => port.off(),
        Mode::FadeIn | Mode::FadeOut => port.send(LedCommand::new(mode, color, color, cycles)),
    }
}
