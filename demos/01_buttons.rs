//! Poll all 16 pads as keys.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};
use tty6955::{Config, Error, Tty6955};

#[allow(dead_code)]
fn run<I2C, D, E>(i2c: I2C, mut delay: D) -> Result<(), Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  let mut touch = Tty6955::configure(i2c, Config::default())?;

  loop {
    delay.delay_ms(200);
    match touch.read() {
      // Calibration can take a couple of seconds after power-up
      Err(Error::Calibration) => continue,
      Err(err) => return Err(err),
      Ok(status) => {
        for key in status.pressed() {
          let _ = key;
          // handle key press
        }
      }
    }
  }
}

fn main() {}
