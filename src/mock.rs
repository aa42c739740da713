//! In-memory I²C bus used by the unit tests.

use core::future::Future;
use core::pin::pin;
use core::ptr;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::collections::VecDeque;

use embedded_hal::i2c::{self, ErrorKind, ErrorType, Operation, SevenBitAddress};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FakeError;

impl i2c::Error for FakeError {
  fn kind(&self) -> ErrorKind {
    ErrorKind::Other
  }
}

/// Records every write and serves queued status frames to reads. Reads with
/// nothing queued return all zeroes.
#[derive(Debug, Default)]
pub(crate) struct FakeBus {
  pub(crate) writes: Vec<(u8, Vec<u8>)>,
  pub(crate) read_addresses: Vec<u8>,
  reads: VecDeque<[u8; 6]>,
  fail_write: bool,
  fail_read: bool,
}

impl FakeBus {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn queue_read(&mut self, frame: [u8; 6]) {
    self.reads.push_back(frame);
  }

  pub(crate) fn fail_next_write(&mut self) {
    self.fail_write = true;
  }

  pub(crate) fn fail_next_read(&mut self) {
    self.fail_read = true;
  }

  fn run(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), FakeError> {
    for op in operations {
      match op {
        Operation::Write(bytes) => {
          if core::mem::take(&mut self.fail_write) {
            return Err(FakeError);
          }
          self.writes.push((address, bytes.to_vec()));
        }
        Operation::Read(buf) => {
          if core::mem::take(&mut self.fail_read) {
            return Err(FakeError);
          }
          self.read_addresses.push(address);
          let frame = self.reads.pop_front().unwrap_or_default();
          let len = buf.len().min(frame.len());
          buf[..len].copy_from_slice(&frame[..len]);
        }
      }
    }
    Ok(())
  }
}

impl ErrorType for FakeBus {
  type Error = FakeError;
}

impl i2c::I2c<SevenBitAddress> for FakeBus {
  fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    self.run(address, operations)
  }
}

impl embedded_hal_async::i2c::I2c<SevenBitAddress> for FakeBus {
  async fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    self.run(address, operations)
  }
}

/// Drive a future to completion by polling it in a loop.
pub(crate) fn block_on<F: Future>(fut: F) -> F::Output {
  let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
  let mut cx = Context::from_waker(&waker);
  let mut fut = pin!(fut);
  loop {
    if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
      return out;
    }
  }
}

const NOOP_VTABLE: RawWakerVTable = RawWakerVTable::new(noop_clone, noop, noop, noop);

fn noop_raw_waker() -> RawWaker {
  RawWaker::new(ptr::null(), &NOOP_VTABLE)
}

unsafe fn noop_clone(_: *const ()) -> RawWaker {
  noop_raw_waker()
}

unsafe fn noop(_: *const ()) {}
