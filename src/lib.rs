#![no_std]

pub mod blink;
pub mod color;
pub mod command;
pub mod effects;
pub mod frame;
pub mod port;

pub use blink::{BlinkScheduler, BlinkTimings, run_fixed_cycles};
pub use color::Color;
pub use command::{LedCommand, Mode};
pub use frame::Frame;
pub use port::{LedPort, NotAttached};

pub use embassy_time::{Duration, Instant};

/// Abstract serial transport trait
///
/// Implement this trait to connect the driver to a platform UART.
/// The driver is generic over this trait and never reads back: the
/// sensor's acknowledgement stream is ignored at this layer, so
/// write failures are the transport's concern.
pub trait ByteSink {
    /// Write raw bytes to the transport
    fn write(&mut self, bytes: &[u8]);

    /// Block until written bytes are handed off to the transport.
    ///
    /// This does not wait for the sensor to act on them.
    fn flush(&mut self) {}
}

/// Blocking delay used by the blocking effect helpers.
///
/// Implement this over the platform timer. Only millisecond resolution
/// is needed.
pub trait Waiter {
    /// Block the caller for `duration`.
    fn wait(&mut self, duration: Duration);
}
