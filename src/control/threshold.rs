use bitfield_struct::bitfield;

use crate::defs::{Opcode, THRESHOLD_LEN};

/// Low, medium and high detection thresholds, 4 bits each.
///
/// Larger values need a stronger touch. Raise them when keys fire before the
/// finger reaches the surface; lower them when a firm press is needed. Values
/// above 15 keep only their low 4 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thresholds {
  pub low: u8,
  pub medium: u8,
  pub high: u8,
}

impl Thresholds {
  pub const fn new(low: u8, medium: u8, high: u8) -> Self {
    Self { low, medium, high }
  }

  /// Custom threshold command for `pad`. Only the low 4 bits of `pad` are sent.
  pub const fn pad_frame(&self, pad: u8) -> [u8; THRESHOLD_LEN] {
    self.frame(Command::new().with_opcode(Opcode::CustomThreshold).with_pad(pad & 0x0F))
  }

  /// Sleep (TPSLP) threshold command.
  pub const fn sleep_frame(&self) -> [u8; THRESHOLD_LEN] {
    self.frame(Command::new().with_opcode(Opcode::SleepThreshold))
  }

  const fn frame(&self, command: Command) -> [u8; THRESHOLD_LEN] {
    let levels = Levels::new().with_low(self.low & 0x0F).with_medium(self.medium & 0x0F);
    let high = Levels::new().with_low(self.high & 0x0F);
    [command.into_bits(), levels.into_bits(), high.into_bits()]
  }
}

/// First byte of a threshold frame.
#[bitfield(u8)]
struct Command {
  #[bits(4)]
  pad: u8,
  #[bits(4)]
  opcode: Opcode,
}

/// Two 4-bit levels sharing a byte.
#[bitfield(u8)]
struct Levels {
  #[bits(4)]
  low: u8,
  #[bits(4)]
  medium: u8,
}
