#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `no_std` driver for the Tontek TTY6955 / TTY6945 capacitive touch key and
//! slider controller.
//!
//! The TTY6955 drives up to 16 touch pads (the TTY6945 fewer, with the same
//! protocol). Pads can be grouped into up to three sliders; every pad not
//! claimed by a slider is reported as a plain key. The device is configured
//! with a single 4-byte initialization frame and reports its state in a
//! 6-byte status frame. This crate provides:
//!
//! - A typed [`Config`] that encodes into the initialization frame
//! - Per-pad and sleep [`Thresholds`] commands
//! - A decoded [`Status`] snapshot with button and slider accessors
//! - A blocking driver over `embedded-hal` 1.0 and an async twin in [`asynch`]
//!
//! ```no_run
//! use embedded_hal::i2c::{I2c, SevenBitAddress};
//! use tty6955::{Config, PadAllocation, Tty6955};
//!
//! fn example<I2C, E>(i2c: I2C) -> Result<(), tty6955::Error<E>>
//! where
//!   I2C: I2c<SevenBitAddress, Error = E>,
//! {
//!   let config = Config::default().with_pads(PadAllocation::new(3, 0, 0));
//!   let mut touch = Tty6955::configure(i2c, config)?;
//!
//!   touch.read()?;
//!   let slider = touch.slider(1);
//!   let key = touch.button(0);
//!   Ok(())
//! }
//! ```
//!
//! The IC is limited to a 100 kHz bus clock and needs some time after power-up
//! to calibrate; until then [`Tty6955::read`] returns [`Error::Calibration`].
mod config;
mod control;
mod defs;
mod event;
mod rw;

pub mod asynch;

#[cfg(test)]
mod mock;

use core::fmt;

use embedded_hal::i2c::{I2c, SevenBitAddress};

pub use config::*;
pub use control::*;
pub use defs::DEFAULT_ADDRESS;
pub use event::*;

/// Errors that can occur while interacting with the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// I²C bus transaction failed with the underlying driver error.
  I2c(E),
  /// The requested configuration cannot be represented on the device.
  Config(ConfigError),
  /// The device reported that its baseline calibration is not valid yet.
  Calibration,
}

impl<E> From<ConfigError> for Error<E> {
  fn from(err: ConfigError) -> Self {
    Self::Config(err)
  }
}

impl<E> From<CalibrationError> for Error<E> {
  fn from(_: CalibrationError) -> Self {
    Self::Calibration
  }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::I2c(err) => write!(f, "I2C error: {err:?}"),
      Self::Config(err) => write!(f, "invalid configuration: {err}"),
      Self::Calibration => f.write_str(CalibrationError.message()),
    }
  }
}

/// Blocking driver for the TTY6955.
///
/// The driver owns the I²C peripheral (pass `&mut bus` to keep using the bus
/// elsewhere) and the configuration it was set up with. It is created in the
/// configured state by [`Tty6955::configure`]; to change the configuration,
/// [`release`](Tty6955::release) the bus and configure again.
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
  pub fn configure(i2c: I, config: Config) -> Result<Self, Error<E>> {
    Self::configure_at(i2c, DEFAULT_ADDRESS, config)
  }

  /// Same as [`Tty6955::configure`] for a device at a non-default address.
  pub fn configure_at(i2c: I, address: u8, config: Config) -> Result<Self, Error<E>> {
    let frame = config.frame()?;
    let mut dev = Self { i2c, state: State::new(address, config) };
    dev.write_frame(&frame)?;
    Ok(dev)
  }
}

impl<I> Tty6955<I> {
  /// Consume the driver and hand back the bus.
  pub fn release(self) -> I {
    self.i2c
  }

  /// The 7-bit address this driver talks to.
  pub fn address(&self) -> u8 {
    self.state.address
  }

  /// Configuration sent to the device.
  pub fn config(&self) -> &Config {
    &self.state.config
  }

  /// Number of keys the device scans.
  pub fn keys(&self) -> u8 {
    self.state.config.keys()
  }

  /// Number of sliders in use (0–3).
  pub fn sliders(&self) -> u8 {
    self.state.config.pads.sliders()
  }

  /// Last successfully decoded status, `None` until the first good [`read`](Tty6955::read).
  pub fn status(&self) -> Option<&Status> {
    self.state.status.as_ref()
  }

  /// State of key `num` in the last status read. Keys are counted from 0 and
  /// skip pads used by sliders.
  ///
  /// Reports `false` if no status has been read yet.
  pub fn button(&self, num: u8) -> bool {
    self.state.button(num)
  }

  /// Slider `num` (1, 2 or 3) from the last status read.
  ///
  /// Returns `None` for other numbers or if no status has been read yet.
  pub fn slider(&self, num: u8) -> Option<Slider> {
    self.state.slider(num)
  }
}

/// Addressing and cached data shared by the blocking and async drivers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct State {
  pub(crate) address: u8,
  pub(crate) config: Config,
  pub(crate) status: Option<Status>,
}

impl State {
  pub(crate) const fn new(address: u8, config: Config) -> Self {
    Self { address, config, status: None }
  }

  /// Decode a raw status frame; the cache is only replaced on success.
  pub(crate) fn update(&mut self, raw: [u8; defs::STATUS_LEN]) -> Result<Status, CalibrationError> {
    match Status::decode(raw) {
      Ok(status) => {
        #[cfg(feature = "defmt")]
        defmt::debug!("TTY6955: status {}", status);
        self.status = Some(status);
        Ok(status)
      }
      Err(err) => {
        #[cfg(feature = "defmt")]
        defmt::warn!("TTY6955: invalid calibration reported, status byte {=u8:#b}", raw[0]);
        Err(err)
      }
    }
  }

  pub(crate) fn button(&self, num: u8) -> bool {
    self.status.is_some_and(|s| s.button(num))
  }

  pub(crate) fn slider(&self, num: u8) -> Option<Slider> {
    self.status.and_then(|s| s.slider(num))
  }
}
