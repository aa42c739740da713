//! Async flavour of the driver for `embedded-hal-async` buses.
//!
//! Mirrors the blocking [`crate::Tty6955`] operation for operation; only the
//! bus calls are awaited.
//!
//! ```no_run
//! use embedded_hal_async::i2c::{I2c, SevenBitAddress};
//! use tty6955::{asynch::Tty6955, Config};
//!
//! async fn example<I2C, E>(i2c: I2C) -> Result<(), tty6955::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//! {
//!   let mut touch = Tty6955::configure(i2c, Config::default()).await?;
//!   let status = touch.read().await?;
//!   let _ = status.pressed();
//!   Ok(())
//! }
//! ```

use embedded_hal_async::i2c::{I2c, SevenBitAddress};

use crate::defs::{DEFAULT_ADDRESS, STATUS_LEN};
use crate::{Config, Error, Slider, State, Status, Thresholds};

/// Async driver for the TTY6955.
pub struct Tty6955<I> {
  i2c: I,
  state: State,
}

impl<I, E> Tty6955<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Validate `config` and send the initialization frame to the device at
  /// [`DEFAULT_ADDRESS`].
  pub async fn configure(i2c: I, config: Config) -> Result<Self, Error<E>> {
    Self::configure_at(i2c, DEFAULT_ADDRESS, config).await
  }

  pub async fn configure_at(i2c: I, address: u8, config: Config) -> Result<Self, Error<E>> {
    let frame = config.frame()?;
    let mut dev = Self { i2c, state: State::new(address, config) };
    dev.write_frame(&frame).await?;
    Ok(dev)
  }

  /// Replace the automatic thresholds of physical pad `pad`.
  pub async fn set_custom_threshold(&mut self, pad: u8, thresholds: Thresholds) -> Result<(), Error<E>> {
    self.write_frame(&thresholds.pad_frame(pad)).await
  }

  pub async fn set_sleep_threshold(&mut self, thresholds: Thresholds) -> Result<(), Error<E>> {
    self.write_frame(&thresholds.sleep_frame()).await
  }

  /// Read and decode the status frame, caching it on success.
  pub async fn read(&mut self) -> Result<Status, Error<E>> {
    let raw = self.read_frame().await?;
    Ok(self.state.update(raw)?)
  }

  async fn write_frame(&mut self, frame: &[u8]) -> Result<(), Error<E>> {
    #[cfg(feature = "defmt")]
    defmt::debug!("TTY6955 @ {=u8:#x}: write {=[u8]:#x}", self.state.address, frame);
    self.i2c.write(self.state.address, frame).await.map_err(Error::I2c)
  }

  async fn read_frame(&mut self) -> Result<[u8; STATUS_LEN], Error<E>> {
    let mut buf = [0u8; STATUS_LEN];
    self.i2c.read(self.state.address, &mut buf).await.map_err(Error::I2c)?;
    Ok(buf)
  }
}

impl<I> Tty6955<I> {
  pub fn release(self) -> I {
    self.i2c
  }

  pub fn address(&self) -> u8 {
    self.state.address
  }

  pub fn config(&self) -> &Config {
    &self.state.config
  }

  pub fn keys(&self) -> u8 {
    self.state.config.keys()
  }

  pub fn sliders(&self) -> u8 {
    self.state.config.pads.sliders()
  }

  pub fn status(&self) -> Option<&Status> {
    self.state.status.as_ref()
  }

  /// See [`crate::Tty6955::button`].
  pub fn button(&self, num: u8) -> bool {
    self.state.button(num)
  }

  /// See [`crate::Tty6955::slider`].
  pub fn slider(&self, num: u8) -> Option<Slider> {
    self.state.slider(num)
  }
}
