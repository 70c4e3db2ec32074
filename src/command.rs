//! Native LED instructions.
//!
//! The sensor understands a single "set LED" command carrying an animation
//! mode, two color endpoints and a repeat count. All animation pacing for
//! these modes happens inside the device.

use crate::color::Color;

const MODE_NAME_BREATHING: &str = "breathing";
const MODE_NAME_FLASH: &str = "flash";
const MODE_NAME_ON: &str = "on";
const MODE_NAME_OFF: &str = "off";
const MODE_NAME_FADE_IN: &str = "fade_in";
const MODE_NAME_FADE_OUT: &str = "fade_out";

const MODE_BREATHING: u8 = 0x01;
const MODE_FLASH: u8 = 0x02;
const MODE_ON: u8 = 0x03;
const MODE_OFF: u8 = 0x04;
const MODE_FADE_IN: u8 = 0x05;
const MODE_FADE_OUT: u8 = 0x06;

/// Device-native animation behavior selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Breathing = MODE_BREATHING,
    Flash = MODE_FLASH,
    On = MODE_ON,
    Off = MODE_OFF,
    FadeIn = MODE_FADE_IN,
    FadeOut = MODE_FADE_OUT,
}

impl Mode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_BREATHING => Self::Breathing,
            MODE_FLASH => Self::Flash,
            MODE_ON => Self::On,
            MODE_OFF => Self::Off,
            MODE_FADE_IN => Self::FadeIn,
            MODE_FADE_OUT => Self::FadeOut,
            _ => return None,
        })
    }

    /// The wire byte.
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breathing => MODE_NAME_BREATHING,
            Self::Flash => MODE_NAME_FLASH,
            Self::On => MODE_NAME_ON,
            Self::Off => MODE_NAME_OFF,
            Self::FadeIn => MODE_NAME_FADE_IN,
            Self::FadeOut => MODE_NAME_FADE_OUT,
        }
    }
}

/// One native "set LED" instruction.
///
/// `cycles` of 0 means run indefinitely for modes that repeat. No field
/// is validated here; the device defines the valid ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedCommand {
    pub mode: Mode,
    pub start: Color,
    pub end: Color,
    pub cycles: u8,
}

impl LedCommand {
    pub const fn new(mode: Mode, start: Color, end: Color, cycles: u8) -> Self {
        Self {
            mode,
            start,
            end,
            cycles,
        }
    }

    /// Hold `color` steadily.
    pub const fn solid(color: Color) -> Self {
        Self::new(Mode::On, color, color, 0)
    }

    /// Turn the LED off.
    pub const fn off() -> Self {
        Self::new(Mode::Off, Color::OFF, Color::OFF, 0)
    }

    /// Breathe between dark and `color` at the device's own pace.
    pub const fn breathing(color: Color, cycles: u8) -> Self {
        Self::new(Mode::Breathing, Color::OFF, color, cycles)
    }

    /// Flash `color` at the device's fixed speed.
    pub const fn flash(color: Color, cycles: u8) -> Self {
        Self::new(Mode::Flash, color, color, cycles)
    }

    /// Ramp up to `color` once.
    pub const fn fade_in(color: Color) -> Self {
        Self::new(Mode::FadeIn, color, color, 0)
    }

    /// Ramp down from `color` once.
    pub const fn fade_out(color: Color) -> Self {
        Self::new(Mode::FadeOut, color, color, 0)
    }
}
