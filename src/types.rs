use crate::hw_def::*;

use core::fmt;

#[cfg(feature="defmt")]
use defmt::Format;

/// SHT4x blocking device driver
///
/// One instance owns one transaction at a time: every operation takes `&mut self`, so
/// overlapping commands against the same sensor cannot be expressed. To keep the bus usable by
/// other drivers, pass `&mut I2C` or a shared-bus device instead of the bus itself.
#[cfg(feature = "blocking")]
#[derive(Debug)]
pub struct Sht4x<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) config: Config,
    pub(crate) serial: u32,
}

/// SHT4x async device driver, same operations as [`Sht4x`]
#[cfg(feature = "async")]
#[derive(Debug)]
pub struct Sht4xAsync<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) config: Config,
    pub(crate) serial: u32,
}

/// Driver configuration, handed over at initialization
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// bus address of the sensor
    pub address: I2cAddr,
    /// transaction attempts before a checksum mismatch is reported as [`Error::Timeout`]
    pub attempts: u8,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            address: I2cAddr::default(),
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}
impl Config {
    /// Use another bus address
    pub fn with_address(mut self, address: I2cAddr) -> Self {
        self.address = address;
        self
    }
    /// Use another attempt budget, must be at least 1
    pub fn with_attempts(mut self, attempts: u8) -> Self {
        self.attempts = attempts;
        self
    }
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug)]
pub enum Error<E> {
    /// I²C communication error, returned as soon as the bus reports it
    I2c(E),
    /// Invalid input data provided
    InvalidInputData,
    /// Every attempt returned a payload failing its checksum
    Timeout,
}
impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {e:?}"),
            Error::InvalidInputData => write!(f, "invalid input data"),
            Error::Timeout => write!(f, "no valid response from sensor: checksum mismatch"),
        }
    }
}
impl<E: fmt::Debug> core::error::Error for Error<E> {}

/// Raw (still in u16 format) temperature and relative humidity from the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawTempAndRelHumid {
    /// unprocessed temperature
    pub temperature: u16,
    /// unprocessed relative humidity
    pub humidity: u16,
}
impl RawTempAndRelHumid {
    /// Get temperature in Fahrenheit
    pub fn fahrenheit(&self) -> f32 {
        raw_temp_to_fahrenheit(self.temperature)
    }
    /// Get temperature in Centigrade
    pub fn centigrade(&self) -> f32 {
        raw_temp_to_centigrade(self.temperature)
    }
    /// Get relative humidity in percent
    pub fn humidity_percent(&self) -> f32 {
        raw_rel_humid_to_percent(self.humidity)
    }
}
impl From<&[u8; PAYLOAD_LEN]> for RawTempAndRelHumid {
    fn from(payload: &[u8; PAYLOAD_LEN]) -> Self {
        let [temperature, humidity] = payload_words(payload);
        Self { temperature, humidity }
    }
}

/// Temp and relative humidity from the device after conversion
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TempAndRelHumid {
    /// degrees centigrade
    pub centigrade: f32,
    /// degrees fahrenheit
    pub fahrenheit: f32,
    /// relative humidity in percent, within `[0, 100]`
    pub humidity_percent: f32,
}
impl From<&RawTempAndRelHumid> for TempAndRelHumid {
    fn from(raw: &RawTempAndRelHumid) -> Self {
        Self {
            centigrade: raw.centigrade(),
            fahrenheit: raw.fahrenheit(),
            humidity_percent: raw.humidity_percent(),
        }
    }
}

/// Serial number of the device, first word read in the upper half
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SerialNumber(pub u32);
impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}
impl From<SerialNumber> for u32 {
    fn from(serial: SerialNumber) -> u32 {
        serial.0
    }
}
