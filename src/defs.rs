/******************************************************************************
 * Refer to the TTY6955 / TTY6945 datasheet for more information.             *
 * ========================================================================== *
 *                     TTY6955 - Commands & Frame Layout                      *
*******************************************************************************/

/// Factory I²C address of the TTY6955.
pub const DEFAULT_ADDRESS: u8 = 0x50;

/// Physical touch pads on the TTY6955.
pub(crate) const PAD_COUNT: u16 = 16;

/// Sliders the IC can be split into.
pub(crate) const MAX_SLIDERS: u8 = 3;

// Frame lengths
pub(crate) const INIT_LEN: usize = 4;
pub(crate) const THRESHOLD_LEN: usize = 3;
pub(crate) const STATUS_LEN: usize = 6;

/// Command nibbles carried in the high half of the first byte of a
/// threshold frame.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Opcode {
  /// Custom touch thresholds for one pad, pad number in the low nibble.
  CustomThreshold = 0xC,
  /// Sleep-mode (TPSLP) thresholds, low nibble unused.
  SleepThreshold = 0xD,
}

impl Opcode {
  pub(crate) const fn into_bits(self) -> u8 {
    self as _
  }

  pub(crate) const fn from_bits(bits: u8) -> Self {
    match bits {
      0xD => Self::SleepThreshold,
      _ => Self::CustomThreshold,
    }
  }
}
