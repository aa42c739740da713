use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::defs::STATUS_LEN;
use crate::{Error, Tty6955};

impl<I, E> Tty6955<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Send a complete command frame in one write transaction.
  ///
  /// The TTY6955 has no register pointer: every write is a self-describing
  /// command whose first byte selects what is being configured.
  pub(crate) fn write_frame(&mut self, frame: &[u8]) -> Result<(), Error<E>> {
    #[cfg(feature = "defmt")]
    defmt::debug!("TTY6955 @ {=u8:#x}: write {=[u8]:#x}", self.state.address, frame);
    self.i2c.write(self.state.address, frame).map_err(Error::I2c)
  }

  /// Read the raw 6-byte status frame.
  pub(crate) fn read_frame(&mut self) -> Result<[u8; STATUS_LEN], Error<E>> {
    let mut buf = [0u8; STATUS_LEN];
    self.i2c.read(self.state.address, &mut buf).map_err(Error::I2c)?;
    Ok(buf)
  }
}
