use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Tty6955};

mod threshold;

pub use threshold::*;

impl<I, E> Tty6955<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Replace the automatic thresholds of one pad.
  ///
  /// `pad` is the physical pad number (TP0–TP15), not a key number.
  pub fn set_custom_threshold(&mut self, pad: u8, thresholds: Thresholds) -> Result<(), Error<E>> {
    self.write_frame(&thresholds.pad_frame(pad))
  }

  /// Set the thresholds used to wake from power save mode.
  pub fn set_sleep_threshold(&mut self, thresholds: Thresholds) -> Result<(), Error<E>> {
    self.write_frame(&thresholds.sleep_frame())
  }
}
