use core::fmt;

use bitfield_struct::bitfield;

use crate::defs::{MAX_SLIDERS, STATUS_LEN};

/// The device reports that its baseline calibration is not valid; every other
/// status field is noise.
///
/// Seen right after power-up while the IC is still calibrating, which can
/// take a couple of seconds. Retrying later is the usual answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationError;

impl CalibrationError {
  pub(crate) const fn message(&self) -> &'static str {
    "the touch IC reports invalid calibration"
  }
}

impl fmt::Display for CalibrationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.message())
  }
}

/// Byte 0 of the status frame.
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFlags {
  pub slider1_touched: bool,
  pub slider2_touched: bool,
  pub slider3_touched: bool,
  #[bits(3)]
  __: u8,
  /// Set by a power-on reset, cleared by the first configuration write.
  pub reset: bool,
  pub calibration_valid: bool,
}

impl StatusFlags {
  /// Touch flag of slider `index` (0-based).
  const fn slider_touched(&self, index: u8) -> bool {
    (self.into_bits() >> index) & 1 != 0
  }
}

/// Reading of one slider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slider {
  pub touched: bool,
  /// Finger position along the slider, 0–255.
  pub position: u8,
}

impl Slider {
  pub const fn new(touched: bool, position: u8) -> Self {
    Self { touched, position }
  }
}

impl From<Slider> for (bool, u8) {
  fn from(s: Slider) -> Self {
    (s.touched, s.position)
  }
}

/// Decoded 6-byte status frame.
///
/// Keys are numbered from 0 over the pads not used by sliders, so with a
/// 3-pad slider on TP0–TP2, pad TP3 is key 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
  flags: StatusFlags,
  buttons: u16,
  positions: [u8; MAX_SLIDERS as usize],
}

impl Status {
  /// Decode a raw status frame, rejecting it when the calibration flag is clear.
  pub const fn decode(raw: [u8; STATUS_LEN]) -> Result<Self, CalibrationError> {
    let flags = StatusFlags::from_bits(raw[0]);
    if !flags.calibration_valid() {
      return Err(CalibrationError);
    }

    Ok(Self {
      flags,
      buttons: u16::from_le_bytes([raw[1], raw[2]]),
      positions: [raw[3], raw[4], raw[5]],
    })
  }

  pub const fn flags(&self) -> StatusFlags {
    self.flags
  }

  /// Whether the device still carries its power-on reset flag, meaning it has
  /// not taken a configuration since it last reset.
  pub const fn reset_flag(&self) -> bool {
    self.flags.reset()
  }

  /// Raw key bitmask, bit `n` is key `n`.
  pub const fn buttons(&self) -> u16 {
    self.buttons
  }

  /// Whether key `num` is touched. Keys past the 16th are never touched.
  pub const fn button(&self, num: u8) -> bool {
    match self.buttons.checked_shr(num as u32) {
      Some(bits) => bits & 1 != 0,
      None => false,
    }
  }

  /// Indices of all touched keys, lowest first.
  pub fn pressed(&self) -> impl Iterator<Item = u8> {
    let buttons = self.buttons;
    (0..u16::BITS as u8).filter(move |n| buttons & (1 << n) != 0)
  }

  /// Slider `num`, counted from 1.
  pub const fn slider(&self, num: u8) -> Option<Slider> {
    if num == 0 || num > MAX_SLIDERS {
      return None;
    }
    let index = num - 1;
    Some(Slider::new(self.flags.slider_touched(index), self.positions[index as usize]))
  }

  /// First touched slider and its reading. The IC cannot tell apart touches
  /// on two sliders at once.
  pub fn touched_slider(&self) -> Option<(u8, Slider)> {
    (1..=MAX_SLIDERS).filter_map(|num| self.slider(num).map(|s| (num, s))).find(|(_, s)| s.touched)
  }
}

impl TryFrom<[u8; STATUS_LEN]> for Status {
  type Error = CalibrationError;

  fn try_from(raw: [u8; STATUS_LEN]) -> Result<Self, Self::Error> {
    Self::decode(raw)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const FRAME: [u8; 6] = [0b1000_0101, 0x34, 0x12, 10, 20, 30];

  #[test]
  fn decodes_reference_frame() {
    let status = Status::decode(FRAME).expect("valid frame");
    assert!(status.flags().calibration_valid());
    assert!(!status.reset_flag());
    assert_eq!(status.buttons(), 0x1234);
    assert!(status.button(4));
    assert!(!status.button(0));
    assert_eq!(status.slider(1), Some(Slider::new(true, 10)));
    assert_eq!(status.slider(2), Some(Slider::new(false, 20)));
    assert_eq!(status.slider(3), Some(Slider::new(true, 30)));
    assert_eq!(status.slider(3).map(<(bool, u8)>::from), Some((true, 30)));
  }

  #[test]
  fn slider_touch_flags_follow_low_bits() {
    let flags = StatusFlags::from_bits(0b1000_0101);
    assert!(flags.slider1_touched());
    assert!(!flags.slider2_touched());
    assert!(flags.slider3_touched());
  }

  #[test]
  fn missing_calibration_bit_is_an_error() {
    assert_eq!(Status::decode([0x05, 0x34, 0x12, 10, 20, 30]), Err(CalibrationError));
    assert_eq!(Status::try_from([0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]), Err(CalibrationError));
  }

  #[test]
  fn reset_flag_is_bit_six() {
    let status = Status::decode([0xC0, 0, 0, 0, 0, 0]).expect("valid frame");
    assert!(status.reset_flag());
  }

  #[test]
  fn slider_numbers_outside_range() {
    let status = Status::decode(FRAME).expect("valid frame");
    assert_eq!(status.slider(0), None);
    assert_eq!(status.slider(4), None);
  }

  #[test]
  fn high_button_numbers_are_never_touched() {
    let status = Status::decode([0x80, 0xFF, 0xFF, 0, 0, 0]).expect("valid frame");
    assert!(status.button(15));
    assert!(!status.button(16));
    assert!(!status.button(255));
  }

  #[test]
  fn pressed_lists_set_bits() {
    let status = Status::decode(FRAME).expect("valid frame");
    let pressed: Vec<u8> = status.pressed().collect();
    assert_eq!(pressed, vec![2, 4, 5, 9, 12]);
  }

  #[test]
  fn touched_slider_picks_the_first() {
    let status = Status::decode(FRAME).expect("valid frame");
    assert_eq!(status.touched_slider(), Some((1, Slider::new(true, 10))));
    let status = Status::decode([0x82, 0, 0, 1, 2, 3]).expect("valid frame");
    assert_eq!(status.touched_slider(), Some((2, Slider::new(true, 2))));
    let status = Status::decode([0x80, 0, 0, 1, 2, 3]).expect("valid frame");
    assert_eq!(status.touched_slider(), None);
  }
}
