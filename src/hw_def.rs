use crate::types::Error;

use crc::{Crc, CRC_8_NRSC_5};

#[cfg(feature = "defmt")]
use defmt::Format;

/// Sensirion CRC-8: polynomial 0x31, init 0xFF, not reflected, no final xor
const CRC: Crc<u8> = Crc::<u8>::new(&CRC_8_NRSC_5);

/// Number of bytes the device returns for every read command: `[MSB, LSB, CRC] x 2`
pub const PAYLOAD_LEN: usize = 6;

/// Transaction attempts made before giving up on a checksum mismatch
pub const DEFAULT_ATTEMPTS: u8 = 3;

/// Wait between two attempts after a checksum mismatch
pub const RETRY_DELAY_MS: u32 = 10;

/// Power-on time and soft reset time (datasheet Table 5 gives 1 ms max)
pub const POWER_UP_DELAY_MS: u32 = 1;

/// Conversion time of a high repeatability measurement, rounded up
pub const MEASURE_DELAY_MS: u32 = 10;

/// The serial number is ready after the same delay as a plain measurement
pub const SERIAL_DELAY_MS: u32 = 10;

/// I²C device address
///
/// The address is fixed in silicon and selected by the part number: SHT4x-Axxx parts answer on
/// 0x44, SHT4x-Bxxx on 0x45 and SHT4x-Cxxx on 0x46.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum I2cAddr {
    /// 0x44
    #[default]
    A,
    /// 0x45
    B,
    /// 0x46
    C,
}
impl I2cAddr {
    /// 7-bit bus address
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::A => 0x44,
            Self::B => 0x45,
            Self::C => 0x46,
        }
    }
}

/// Single byte command codes (datasheet Table 7)
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Command {
    /// measure T & RH with high repeatability
    MeasureHighRepeatability = 0xFD,
    /// activate heater with 200mW for 1s, then measure
    Heat200mW1s = 0x39,
    /// activate heater with 200mW for 0.1s, then measure
    Heat200mW100ms = 0x32,
    /// activate heater with 110mW for 1s, then measure
    Heat110mW1s = 0x2F,
    /// activate heater with 110mW for 0.1s, then measure
    Heat110mW100ms = 0x24,
    /// activate heater with 20mW for 1s, then measure
    Heat20mW1s = 0x1E,
    /// activate heater with 20mW for 0.1s, then measure
    Heat20mW100ms = 0x15,
    /// read serial number
    SerialNumber = 0x89,
    /// soft reset
    SoftReset = 0x94,
}
impl Command {
    /// Command byte as sent on the bus
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Heater activation applied before a measurement (datasheet Table 7)
///
/// The heater is meant to drive off condensation or creep. It is switched off by the device
/// itself once the pulse ends and the measurement is taken.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HeaterOption {
    /// no heater
    #[default]
    None,
    /// 200mW for 1.0s
    Power200mW1s,
    /// 200mW for 0.1s
    Power200mW100ms,
    /// 110mW for 1.0s
    Power110mW1s,
    /// 110mW for 0.1s
    Power110mW100ms,
    /// 20mW for 1.0s
    Power20mW1s,
    /// 20mW for 0.1s
    Power20mW100ms,
}
impl HeaterOption {
    /// Every option, in datasheet order
    pub const ALL: [HeaterOption; 7] = [
        Self::None,
        Self::Power200mW1s,
        Self::Power200mW100ms,
        Self::Power110mW1s,
        Self::Power110mW100ms,
        Self::Power20mW1s,
        Self::Power20mW100ms,
    ];

    /// Measurement command implied by this heater option
    pub const fn command(self) -> Command {
        match self {
            Self::None => Command::MeasureHighRepeatability,
            Self::Power200mW1s => Command::Heat200mW1s,
            Self::Power200mW100ms => Command::Heat200mW100ms,
            Self::Power110mW1s => Command::Heat110mW1s,
            Self::Power110mW100ms => Command::Heat110mW100ms,
            Self::Power20mW1s => Command::Heat20mW1s,
            Self::Power20mW100ms => Command::Heat20mW100ms,
        }
    }

    /// Minimum wait between sending the command and reading the result
    pub const fn delay_ms(self) -> u32 {
        self.duration_ms() + MEASURE_DELAY_MS
    }

    /// Heating power in milliwatts, 0 without heater
    pub const fn power_mw(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Power200mW1s | Self::Power200mW100ms => 200,
            Self::Power110mW1s | Self::Power110mW100ms => 110,
            Self::Power20mW1s | Self::Power20mW100ms => 20,
        }
    }

    /// Heating pulse length in milliseconds, 0 without heater
    pub const fn duration_ms(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Power200mW1s | Self::Power110mW1s | Self::Power20mW1s => 1000,
            Self::Power200mW100ms | Self::Power110mW100ms | Self::Power20mW100ms => 100,
        }
    }
}

/// A heater ordinal outside of `0..=6`
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InvalidHeaterOption(pub u8);

impl<E> From<InvalidHeaterOption> for Error<E> {
    fn from(_: InvalidHeaterOption) -> Self {
        Error::InvalidInputData
    }
}

/// Datasheet ordinal, `0` (no heater) to `6` (20mW for 0.1s)
impl TryFrom<u8> for HeaterOption {
    type Error = InvalidHeaterOption;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(ordinal as usize).copied().ok_or(InvalidHeaterOption(ordinal))
    }
}

/// CRC-8 of `bytes` as computed by the sensor
pub fn crc8(bytes: &[u8]) -> u8 {
    CRC.checksum(bytes)
}

/// Whether both words of a `[MSB, LSB, CRC, MSB, LSB, CRC]` payload match their checksum
pub fn valid_crc(payload: &[u8; PAYLOAD_LEN]) -> bool {
    crc8(&payload[0..2]) == payload[2] && crc8(&payload[3..5]) == payload[5]
}

/// The two data words of a payload, checksum bytes dropped
pub fn payload_words(payload: &[u8; PAYLOAD_LEN]) -> [u16; 2] {
    [
        u16::from_be_bytes([payload[0], payload[1]]),
        u16::from_be_bytes([payload[3], payload[4]]),
    ]
}

/// Serial number from a serial read payload, first word in the upper half
pub fn serial_from_payload(payload: &[u8; PAYLOAD_LEN]) -> u32 {
    let [high, low] = payload_words(payload);
    (high as u32) << 16 | low as u32
}

/// Convert raw temperature to degrees Centigrade
pub fn raw_temp_to_centigrade(raw: u16) -> f32 {
    (-45.0 + 175.0 * raw as f64 / 65535.0) as f32
}

/// Convert raw temperature to degrees Fahrenheit
pub fn raw_temp_to_fahrenheit(raw: u16) -> f32 {
    (-49.0 + 315.0 * raw as f64 / 65535.0) as f32
}

/// Convert raw relative humidity to percent
///
/// The linear formula leaves `[0, 100]` near both ends of the raw range; the datasheet (4.5)
/// asks for the result to be cropped.
pub fn raw_rel_humid_to_percent(raw: u16) -> f32 {
    (-6.0 + 125.0 * raw as f64 / 65535.0).clamp(0.0, 100.0) as f32
}
