//! Shared fixtures for the driver tests.
extern crate std;

use crate::hw_def::PAYLOAD_LEN;

use embedded_hal::i2c::{self, Operation};
use std::vec::Vec;

/// serial number 0xdeadbeef
pub(crate) const SERIAL_PAYLOAD: [u8; PAYLOAD_LEN] = [0xde, 0xad, 0x98, 0xbe, 0xef, 0x92];
/// 20.001144 °C, 40.000229 %RH
pub(crate) const SAMPLE_PAYLOAD: [u8; PAYLOAD_LEN] = [0x5f, 0x16, 0x1a, 0x5e, 0x35, 0x3b];
pub(crate) const BAD_CRC_PAYLOAD: [u8; PAYLOAD_LEN] = [0x5f, 0x16, 0xff, 0x5e, 0x35, 0xff];

/// Delay that returns at once and remembers every requested wait in milliseconds
#[derive(Debug, Default)]
pub(crate) struct RecordingDelay(pub Vec<u32>);

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(ns / 1_000_000);
    }
    fn delay_ms(&mut self, ms: u32) {
        self.0.push(ms);
    }
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.push(ns / 1_000_000);
    }
    async fn delay_ms(&mut self, ms: u32) {
        self.0.push(ms);
    }
}

/// Async front for a blocking bus mock, each operation forwarded on its own
pub(crate) struct AsyncBus<T>(pub T);

impl<T: i2c::I2c> i2c::ErrorType for AsyncBus<T> {
    type Error = T::Error;
}

impl<T: i2c::I2c> embedded_hal_async::i2c::I2c for AsyncBus<T> {
    async fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Read(buffer) => self.0.read(address, buffer)?,
                Operation::Write(bytes) => self.0.write(address, bytes)?,
            }
        }
        Ok(())
    }
}
