//! One 3-pad slider on TP0–TP2, remaining pads as keys.
#![allow(unused)]
use embedded_hal::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};
use tty6955::{Config, Error, PadAllocation, Thresholds, Tty6955};

#[allow(dead_code)]
fn run<I2C, D, E>(i2c: I2C, mut delay: D) -> Result<(), Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  let config = Config::default()
    .with_pads(PadAllocation::new(3, 0, 0))
    .with_key_acknowledge_times(3);
  let mut touch = Tty6955::configure(i2c, config)?;
  // TP15 sits under a thicker overlay
  touch.set_custom_threshold(15, Thresholds::new(2, 4, 6))?;

  delay.delay_ms(2000);
  loop {
    touch.read()?;
    let slider = touch.slider(1);
    let key = touch.button(0); // TP3
    let _ = (slider, key);
    delay.delay_ms(200);
  }
}

fn main() {}
