use crate::hw_def::*;
use crate::types::*;

use embedded_hal_async::{delay::DelayNs, i2c::I2c};

#[cfg(feature = "defmt")]
use defmt::{debug, error, info, trace, warn};
#[cfg(feature = "log")]
use log::{debug, error, info, trace, warn};
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! info {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}
#[cfg(not(any(feature = "defmt", feature = "log")))]
macro_rules! error {
    ($($arg:tt)*) => {};
}

impl<I2C, Delay, E> Sht4xAsync<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    /// Wait for the sensor to power up and read its serial number
    ///
    /// No driver is returned unless the serial number was read with a valid checksum.
    pub async fn init(i2c: I2C, delay: Delay, config: Config) -> Result<Self, Error<E>> {
        if config.attempts == 0 {
            return Err(Error::InvalidInputData);
        }
        let mut sht4x = Self { i2c, delay, config, serial: 0 };
        sht4x.delay.delay_ms(POWER_UP_DELAY_MS).await;

        match sht4x.cmd_and_read(Command::SerialNumber, SERIAL_DELAY_MS).await {
            Ok(payload) => {
                sht4x.serial = serial_from_payload(&payload);
                info!("sht4x: found device {:#x}", sht4x.serial);
                Ok(sht4x)
            }
            Err(Error::Timeout) => {
                error!("sht4x: timeout reading serial number: address={:#x}", config.address.as_u8());
                Err(Error::Timeout)
            }
            Err(err) => Err(err),
        }
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I2C, Delay) {
        (self.i2c, self.delay)
    }

    /// Configuration this driver was initialized with
    pub fn config(&self) -> Config {
        self.config
    }

    async fn cmd_and_read(&mut self, cmd: Command, delay_ms: u32) -> Result<[u8; PAYLOAD_LEN], Error<E>> {
        let address = self.config.address.as_u8();
        let mut payload = [0u8; PAYLOAD_LEN];

        for attempt in 1..=self.config.attempts {
            trace!("sht4x::cmd_and_read(): cmd={:#x} delay={}ms attempt={}", cmd.as_u8(), delay_ms, attempt);
            self.i2c.write(address, &[cmd.as_u8()]).await.map_err(Error::I2c)?;
            self.delay.delay_ms(delay_ms).await;
            self.i2c.read(address, &mut payload).await.map_err(Error::I2c)?;

            if valid_crc(&payload) {
                return Ok(payload);
            }
            warn!("sht4x::cmd_and_read(): crc mismatch, attempt {}/{}: payload={:?}", attempt, self.config.attempts, payload);
            if attempt < self.config.attempts {
                self.delay.delay_ms(RETRY_DELAY_MS).await;
            }
        }
        Err(Error::Timeout)
    }

    /// Soft reset, the sensor is usable again once this returns
    pub async fn reset(&mut self) -> Result<(), Error<E>> {
        let result = self
            .i2c
            .write(self.config.address.as_u8(), &[Command::SoftReset.as_u8()])
            .await
            .map_err(Error::I2c);
        self.delay.delay_ms(POWER_UP_DELAY_MS).await;
        result
    }

    /// Serial number cached by [`init`](Self::init), as a plain integer
    ///
    /// Never touches the bus and cannot fail: a driver only exists once the serial number was
    /// read with a valid checksum.
    pub fn get_serial(&self) -> u32 {
        self.serial
    }

    /// Same serial number as [`get_serial`](Self::get_serial), wrapped for hex display
    pub fn serial_number(&self) -> SerialNumber {
        SerialNumber(self.serial)
    }

    /// High repeatability measurement, heater off
    pub async fn measure(&mut self) -> Result<TempAndRelHumid, Error<E>> {
        self.measure_with_heater(HeaterOption::None).await
    }

    /// Run the heater, then measure
    pub async fn measure_with_heater(&mut self, heater: HeaterOption) -> Result<TempAndRelHumid, Error<E>> {
        let raw = self.measure_raw_with_heater(heater).await?;
        Ok(TempAndRelHumid::from(&raw))
    }

    /// High repeatability measurement without conversion, heater off
    pub async fn measure_raw(&mut self) -> Result<RawTempAndRelHumid, Error<E>> {
        self.measure_raw_with_heater(HeaterOption::None).await
    }

    /// Run the heater, then measure, without conversion
    pub async fn measure_raw_with_heater(&mut self, heater: HeaterOption) -> Result<RawTempAndRelHumid, Error<E>> {
        let payload = self.cmd_and_read(heater.command(), heater.delay_ms()).await?;
        let raw = RawTempAndRelHumid::from(&payload);
        debug!("sht4x: measurement {:?}: t={} rh={}", payload, raw.temperature, raw.humidity);
        Ok(raw)
    }
}
