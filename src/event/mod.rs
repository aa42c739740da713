use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Error, Tty6955};

mod status;

pub use status::*;

impl<I, E> Tty6955<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read and decode the status frame.
  ///
  /// On success the snapshot is cached for [`Tty6955::button`] and
  /// [`Tty6955::slider`]. On failure, including [`Error::Calibration`], the
  /// previous snapshot is kept.
  pub fn read(&mut self) -> Result<Status, Error<E>> {
    let raw = self.read_frame()?;
    Ok(self.state.update(raw)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::mock::{FakeBus, FakeError};
  use crate::{Config, Slider};

  #[test]
  fn read_uses_configured_address() {
    let mut bus = FakeBus::new();
    bus.queue_read([0x80, 0x01, 0x00, 0, 0, 0]);
    let mut dev = Tty6955::configure_at(&mut bus, 0x2A, Config::default()).expect("configure");
    let status = dev.read().expect("read");
    assert!(status.button(0));
    drop(dev);
    assert_eq!(bus.read_addresses, vec![0x2A]);
  }

  #[test]
  fn bus_failure_keeps_previous_status() {
    let mut bus = FakeBus::new();
    bus.queue_read([0x81, 0, 0, 99, 0, 0]);
    let mut dev = Tty6955::configure(&mut bus, Config::default()).expect("configure");
    dev.read().expect("read");
    dev.i2c.fail_next_read();
    assert_eq!(dev.read(), Err(Error::I2c(FakeError)));
    assert_eq!(dev.slider(1), Some(Slider::new(true, 99)));
  }

  #[test]
  fn later_reads_replace_the_snapshot() {
    let mut bus = FakeBus::new();
    bus.queue_read([0x80, 0b0001, 0, 0, 0, 0]);
    bus.queue_read([0x80, 0b0010, 0, 0, 0, 0]);
    let mut dev = Tty6955::configure(&mut bus, Config::default()).expect("configure");
    dev.read().expect("first");
    assert!(dev.button(0) && !dev.button(1));
    dev.read().expect("second");
    assert!(!dev.button(0) && dev.button(1));
  }
}
