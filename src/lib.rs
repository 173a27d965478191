//! This is a platform-agnostic Rust driver for the Sensirion SHT40, SHT41, SHT43 and SHT45
//! relative humidity and temperature sensors using the [`embedded-hal`] or
//! [`embedded-hal-async`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//! [`embedded-hal-async`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal-async
//!
//! This driver allows you to:
//! - Confirm the sensor is present and read its serial number.
//! - Measure temperature and relative humidity with high repeatability.
//! - Run one of the six heater pulses before a measurement.
//! - Get raw (unconverted) samples.
//! - Trigger a software reset.
//! - blocking API support.
//! - async API support.
//!
//! Every response is checked against its CRC. A response failing the check is requested again,
//! up to [`Config::attempts`] times in total, after which [`Error::Timeout`] is returned. Bus
//! errors are never retried.
//!
//! This driver does not support the medium and low repeatability measurement commands.
//!
//! ## Features
//!
//! - `async`: Enables async API ([`Sht4xAsync`]).
//! - `blocking`: Enables blocking API ([`Sht4x`]).
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## Supported devices: SHT40, SHT41, SHT43, SHT45
//!
//! Datasheet:
//!   [SHT4x](https://sensirion.com/media/documents/33FD6951/67EB9032/HT_DS_Datasheet_SHT4x_5.pdf)
//!
//! To use this driver, import this crate and an `embedded_hal` or `embedded_hal_async`
//! implementation, then initialize the device. Initialization reads the serial number, so it
//! fails if no sensor answers.
//!
//! ## Blocking Example:
//!
//! ```ignore
//! use sht4x::{Config, HeaterOption, Sht4x};
//!
//! // Platform-specific
//! let mut i2c = /* embedded_hal::i2c::I2c instance */;
//! let delay = /* embedded_hal::delay::DelayNs instance */;
//!
//! // Borrow the bus so it can be shared with other drivers
//! let mut sht4x = Sht4x::init(&mut i2c, delay, Config::default()).unwrap();
//! println!("serial number {}", sht4x.serial_number());
//!
//! let mut n = 0;
//! loop {
//!     // drive off condensation every now and then
//!     let heater = if n % 100 == 3 { HeaterOption::Power20mW100ms } else { HeaterOption::None };
//!     let datum = sht4x.measure_with_heater(heater).unwrap();
//!     println!("{:0.1} °C, {:0.1} %RH", datum.centigrade, datum.humidity_percent);
//!     n += 1;
//!
//!     // Platform-specific: sleep a while
//!     sleep_secs(5);
//! }
//! ```
//!
//! ## Async Example:
//!
//! ```ignore
//! use sht4x::{Config, I2cAddr, Sht4xAsync};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal_async::i2c::I2c instance */;
//! let delay = /* embedded_hal_async::delay::DelayNs instance */;
//!
//! let config = Config::default().with_address(I2cAddr::B);
//! let mut sht4x = Sht4xAsync::init(i2c, delay, config).await.unwrap();
//!
//! let raw = sht4x.measure_raw().await.unwrap();
//! println!("raw t={:#06x} rh={:#06x}", raw.temperature, raw.humidity);
//! println!("{:0.1} °F", raw.fahrenheit());
//!
//! let (i2c, delay) = sht4x.release();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![no_std]

#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("At least one of \"async\" and \"blocking\" features must be enabled");

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

#[cfg(feature = "blocking")]
mod device_impl;
#[cfg(feature = "async")]
mod device_impl_async;
mod hw_def;
#[cfg(test)]
mod test_support;
mod types;

pub use crate::{hw_def::*, types::*};
