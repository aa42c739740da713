use core::fmt;

use crate::defs::{INIT_LEN, PAD_COUNT};

mod mode;
mod pads;

pub use mode::*;
pub use pads::*;

/// Reasons a [`Config`] cannot be sent to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
  /// Sliders claim more pads than the chip has.
  TooManySliderPads { total: u16 },
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::TooManySliderPads { total } => write!(f, "too many slider pads ({total} of {PAD_COUNT})"),
    }
  }
}

/// Device configuration carried by the initialization frame.
///
/// Built from [`Config::default`] with the fluent helpers. Field widths on the
/// wire are narrow: slider pad counts keep 4 bits, the key count 5 bits and
/// the acknowledge count 3 bits (after subtracting one). Higher bits are
/// dropped rather than rejected; only the slider pad total is validated.
///
/// # Example
/// ```no_run
/// use tty6955::{AutoReset, Config, PadAllocation};
///
/// let config = Config::default()
///   .with_pads(PadAllocation::new(4, 4, 0))
///   .with_auto_reset(AutoReset::Seconds30)
///   .with_key_acknowledge_times(3);
/// assert_eq!(config.keys(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
  pub pads: PadAllocation,
  /// Report only the key with the strongest touch.
  pub single_key_mode: bool,
  pub power_save_mode: bool,
  pub dynamic_threshold: bool,
  pub auto_reset: AutoReset,
  /// Consecutive detections required before a touch is reported (1–8).
  pub key_acknowledge_times: u8,
  /// Keys to scan; derived from the pad allocation when `None`. Scanning
  /// fewer keys speeds up reading.
  pub key_count: Option<u8>,
}

impl Config {
  /// Create a configuration seeded with the datasheet defaults.
  pub const fn new() -> Self {
    Self {
      pads: PadAllocation::none(),
      single_key_mode: false,
      power_save_mode: false,
      dynamic_threshold: true,
      auto_reset: AutoReset::Seconds15,
      key_acknowledge_times: 4,
      key_count: None,
    }
  }

  pub const fn with_pads(mut self, pads: PadAllocation) -> Self {
    self.pads = pads;
    self
  }

  pub const fn with_single_key_mode(mut self, enabled: bool) -> Self {
    self.single_key_mode = enabled;
    self
  }

  pub const fn with_power_save_mode(mut self, enabled: bool) -> Self {
    self.power_save_mode = enabled;
    self
  }

  pub const fn with_dynamic_threshold(mut self, enabled: bool) -> Self {
    self.dynamic_threshold = enabled;
    self
  }

  pub const fn with_auto_reset(mut self, auto_reset: AutoReset) -> Self {
    self.auto_reset = auto_reset;
    self
  }

  /// 3 or 4 is recommended; lower reacts faster, higher rejects more noise.
  pub const fn with_key_acknowledge_times(mut self, times: u8) -> Self {
    self.key_acknowledge_times = times;
    self
  }

  /// Override the number of scanned keys.
  pub const fn with_key_count(mut self, keys: u8) -> Self {
    self.key_count = Some(keys);
    self
  }

  /// Number of keys the device will scan.
  pub const fn keys(&self) -> u8 {
    match self.key_count {
      Some(keys) => keys,
      None => self.pads.keys(),
    }
  }

  pub const fn validate(&self) -> Result<(), ConfigError> {
    if self.pads.fits() {
      Ok(())
    } else {
      Err(ConfigError::TooManySliderPads { total: self.pads.total() })
    }
  }

  /// Mode byte of the initialization frame.
  pub const fn mode(&self) -> ModeSettings {
    ModeSettings::new()
      .with_single_key_mode(self.single_key_mode)
      .with_power_save_mode(self.power_save_mode)
      .with_dynamic_threshold(self.dynamic_threshold)
      .with_auto_reset(self.auto_reset)
  }

  /// Encode the 4-byte initialization frame.
  pub const fn frame(&self) -> Result<[u8; INIT_LEN], ConfigError> {
    if let Err(err) = self.validate() {
      return Err(err);
    }

    let keys = KeySettings::new()
      .with_keys(self.keys() & 0x1F)
      .with_acknowledge(self.key_acknowledge_times.wrapping_sub(1) & 0x07);
    let sliders = SliderPads::new()
      .with_slider1(self.pads.slider1 & 0x0F)
      .with_slider2(self.pads.slider2 & 0x0F);
    let extra = ExtraSettings::new().with_slider3(self.pads.slider3 & 0x0F);

    Ok([self.mode().into_bits(), keys.into_bits(), sliders.into_bits(), extra.into_bits()])
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new()
  }
}
