//! Async polling with power save mode and custom wake-up thresholds.
#![allow(unused)]
use embedded_hal_async::{
  delay::DelayNs,
  i2c::{I2c, SevenBitAddress},
};
use tty6955::{asynch::Tty6955, AutoReset, Config, Error, Thresholds};

#[allow(dead_code)]
async fn run<I2C, D, E>(i2c: I2C, mut delay: D) -> Result<(), Error<E>>
where
  I2C: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  let config = Config::default().with_power_save_mode(true).with_auto_reset(AutoReset::Minute1);
  let mut touch = Tty6955::configure(i2c, config).await?;
  touch.set_sleep_threshold(Thresholds::new(1, 3, 5)).await?;

  loop {
    delay.delay_ms(100).await;
    let Ok(status) = touch.read().await else { continue };
    if let Some((num, slider)) = status.touched_slider() {
      let _ = (num, slider.position);
    }
  }
}

fn main() {}
