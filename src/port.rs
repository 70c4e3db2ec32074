//! Transport-facing side of the driver.
//!
//! [`LedPort`] owns the optional serial transport and turns commands into
//! wire frames. A port starts detached; sends are silently dropped until a
//! transport is attached, so the driver is safe to call before the
//! platform has brought the serial channel up.

use log::trace;

use crate::ByteSink;
use crate::color::Color;
use crate::command::LedCommand;
use crate::frame::Frame;

/// Error returned by [`LedPort::try_send`] when no transport is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAttached;

/// Serial port handle that serializes LED commands.
///
/// One port assumes exclusive write access to its transport; callers on
/// multiple threads must serialize access externally.
#[derive(Debug)]
pub struct LedPort<S> {
    sink: Option<S>,
}

impl<S: ByteSink> LedPort<S> {
    /// Create a detached port.
    pub const fn new() -> Self {
        Self { sink: None }
    }

    /// Create a port with a transport already attached.
    pub const fn attached(sink: S) -> Self {
        Self { sink: Some(sink) }
    }

    /// Attach a transport, replacing any previous one.
    pub fn attach(&mut self, sink: S) {
        self.sink = Some(sink);
    }

    /// Detach and return the transport, if any.
    pub fn detach(&mut self) -> Option<S> {
        self.sink.take()
    }

    /// Whether a transport is currently attached.
    ///
    /// The link is send-only, so no handshake is performed; an attached
    /// transport is reported as connected.
    pub const fn is_connected(&self) -> bool {
        self.sink.is_some()
    }

    /// Get a reference to the attached transport.
    pub const fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Get a mutable reference to the attached transport.
    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Send a command, dropping it silently when detached.
    pub fn send(&mut self, command: LedCommand) {
        let _ = self.try_send(command);
    }

    /// Send a command, reporting the detached case.
    pub fn try_send(&mut self, command: LedCommand) -> Result<(), NotAttached> {
        trace!(
            "led {}: start={:#04x} end={:#04x} cycles={}",
            command.mode.as_str(),
            command.start.bits(),
            command.end.bits(),
            command.cycles
        );
        self.try_send_frame(Frame::from(command))
    }

    /// Send a pre-built frame, reporting the detached case.
    ///
    /// Escape hatch for parameter bytes the named types do not cover;
    /// nothing is validated.
    pub fn try_send_frame(&mut self, frame: Frame) -> Result<(), NotAttached> {
        let Some(sink) = self.sink.as_mut() else {
            trace!("led command dropped, no transport attached");
            return Err(NotAttached);
        };
        sink.write(&frame.encode());
        sink.flush();
        Ok(())
    }

    /// Hold `color` steadily.
    pub fn set_color(&mut self, color: Color) {
        self.send(LedCommand::solid(color));
    }

    /// Turn the LED off.
    pub fn off(&mut self) {
        self.send(LedCommand::off());
    }
}

impl<S: ByteSink> Default for LedPort<S> {
    fn default() -> Self {
        Self::new()
    }
}
