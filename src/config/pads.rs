use crate::defs::PAD_COUNT;

/// How many of the 16 physical pads are grouped into each slider.
///
/// Sliders take pads from TP0 upwards in order: slider 1 first, then slider 2,
/// then slider 3. Remaining pads become keys, numbered from 0.
///
/// A slider needs 2 to 8 pads to give a usable position; the IC only enforces
/// that the total fits on the chip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PadAllocation {
  pub slider1: u8,
  pub slider2: u8,
  pub slider3: u8,
}

impl PadAllocation {
  pub const fn new(slider1: u8, slider2: u8, slider3: u8) -> Self {
    Self { slider1, slider2, slider3 }
  }

  /// All pads used as keys.
  pub const fn none() -> Self {
    Self::new(0, 0, 0)
  }

  /// Pads claimed by sliders.
  pub const fn total(&self) -> u16 {
    self.slider1 as u16 + self.slider2 as u16 + self.slider3 as u16
  }

  /// Whether the allocation fits on the chip.
  pub const fn fits(&self) -> bool {
    self.total() <= PAD_COUNT
  }

  /// Number of sliders with at least one pad.
  pub const fn sliders(&self) -> u8 {
    (self.slider1 != 0) as u8 + (self.slider2 != 0) as u8 + (self.slider3 != 0) as u8
  }

  /// Pads left over for keys.
  pub const fn keys(&self) -> u8 {
    PAD_COUNT.saturating_sub(self.total()) as u8
  }

  /// Pad count of slider `num` (1-based).
  pub const fn slider(&self, num: u8) -> Option<u8> {
    match num {
      1 => Some(self.slider1),
      2 => Some(self.slider2),
      3 => Some(self.slider3),
      _ => None,
    }
  }
}
