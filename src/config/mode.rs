use bitfield_struct::bitfield;

/// Period after which the IC recalibrates its baseline on its own (ART).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AutoReset {
  Disabled = 0b00,
  #[default]
  Seconds15 = 0b01,
  Seconds30 = 0b10,
  Minute1 = 0b11,
}

impl AutoReset {
  pub const fn into_bits(self) -> u8 {
    self as _
  }

  pub const fn from_bits(bits: u8) -> Self {
    match bits & 0b11 {
      0b00 => Self::Disabled,
      0b01 => Self::Seconds15,
      0b10 => Self::Seconds30,
      _ => Self::Minute1,
    }
  }
}

impl From<AutoReset> for u8 {
  fn from(v: AutoReset) -> Self {
    v as u8
  }
}

/// Byte 0 of the initialization frame.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeSettings {
  /// Auto reset time (ART).
  #[bits(2)]
  pub auto_reset: AutoReset,
  /// Dynamic threshold (DT).
  pub dynamic_threshold: bool,
  /// Power save mode (PSM).
  pub power_save_mode: bool,
  /// Auto-adjust (AA), later overridden by custom threshold commands.
  #[bits(default = true)]
  pub auto_adjust: bool,
  /// Only the strongest key is reported (KOM).
  pub single_key_mode: bool,
  #[bits(1)]
  __: u8,
  /// I²C interface and calibration marker (IICM + CT), always set.
  #[bits(default = true)]
  pub interface_marker: bool,
}

/// Byte 1 of the initialization frame.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySettings {
  /// Key acknowledge times (KAT) minus one.
  #[bits(3)]
  pub acknowledge: u8,
  /// Number of keys scanned.
  #[bits(5)]
  pub keys: u8,
}

/// Byte 2 of the initialization frame.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliderPads {
  #[bits(4)]
  pub slider1: u8,
  #[bits(4)]
  pub slider2: u8,
}

/// Byte 3 of the initialization frame.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExtraSettings {
  #[bits(4)]
  pub slider3: u8,
  /// Key-off count, left at zero.
  #[bits(4)]
  pub key_off: u8,
}
