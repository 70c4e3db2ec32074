//! Wire framing for the sensor's binary command protocol.
//!
//! Every command travels as one fixed 16-byte packet: header, broadcast
//! address, packet id, payload length, opcode, four parameter bytes and a
//! big-endian checksum. The checksum covers packet id through the last
//! parameter byte; the range is derived from the layout here so it cannot
//! drift from the field offsets.

use core::ops::Range;

use crate::command::LedCommand;

/// 16-byte "set LED" command frame.
///
/// Holds the four parameter bytes; everything else in the packet is fixed.
/// Parameters are raw bytes and are emitted verbatim, including values the
/// named [`Mode`](crate::Mode) and [`Color`](crate::Color) types do not
/// cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    mode: u8,
    start_color: u8,
    end_color: u8,
    cycles: u8,
}

impl Frame {
    /// Encoded length in bytes.
    pub const LEN: usize = 16;

    const HEADER: [u8; 2] = [0xEF, 0x01];
    const BROADCAST_ADDRESS: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
    const PACKET_ID_COMMAND: u8 = 0x01;
    const PAYLOAD_LEN: [u8; 2] = [0x00, 0x07];
    const OPCODE_SET_LED: u8 = 0x3C;

    /// Bytes covered by the checksum: packet id through the last parameter.
    const CHECKSUM_RANGE: Range<usize> = 6..14;

    pub const fn new(mode: u8, start_color: u8, end_color: u8, cycles: u8) -> Self {
        Self {
            mode,
            start_color,
            end_color,
            cycles,
        }
    }

    /// Serialize the frame, filling in the checksum.
    pub fn encode(&self) -> [u8; Self::LEN] {
        let mut bytes = [
            Self::HEADER[0],
            Self::HEADER[1],
            Self::BROADCAST_ADDRESS[0],
            Self::BROADCAST_ADDRESS[1],
            Self::BROADCAST_ADDRESS[2],
            Self::BROADCAST_ADDRESS[3],
            Self::PACKET_ID_COMMAND,
            Self::PAYLOAD_LEN[0],
            Self::PAYLOAD_LEN[1],
            Self::OPCODE_SET_LED,
            self.mode,
            self.start_color,
            self.end_color,
            self.cycles,
            0,
            0,
        ];
        let sum = checksum(&bytes[Self::CHECKSUM_RANGE]);
        bytes[Self::CHECKSUM_RANGE.end..].copy_from_slice(&sum.to_be_bytes());
        bytes
    }
}

impl From<LedCommand> for Frame {
    fn from(command: LedCommand) -> Self {
        Self::new(
            command.mode.as_raw(),
            command.start.bits(),
            command.end.bits(),
            command.cycles,
        )
    }
}

/// Arithmetic sum of the covered bytes. Overflowing bits are omitted.
fn checksum(bytes: &[u8]) -> u16 {
    bytes
        .iter()
        .fold(0u16, |sum, &byte| sum.wrapping_add(u16::from(byte)))
}
