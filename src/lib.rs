//! Driver for the MAX31856 precision thermocouple-to-digital converter.
//!
//! Written against the `embedded-hal` 1.0 [`SpiDevice`] trait. The chip
//! talks SPI mode 1 or 3, see [`MODE`].
//!
//! ```
//! use max31856::{Config, Error, Max31856, ThermocoupleType};
//!
//! fn poll<SPI>(spi: SPI) -> Result<(), Error<SPI::Error>>
//! where
//!     SPI: embedded_hal::spi::SpiDevice,
//! {
//!     let config = Config::new(0, 0, ThermocoupleType::K);
//!     let mut sensor = Max31856::new(spi, config)?;
//!     println!("{} °C", sensor.temperature()?);
//!     for name in sensor.fault_status()?.names() {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Enable the `defmt` feature for logging and `defmt::Format` impls.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

mod config;
pub mod decode;
mod error;
mod registers;

use embedded_hal::spi::{Mode, SpiDevice, MODE_3};

pub use config::{AveragingMode, Config, ConversionMode, ThermocoupleType};
pub use decode::{Fault, FaultStatus, Faults, FAULT_NAMES};
pub use error::{Error, InvalidThermocoupleType};
pub use registers::{Register, CR0_CONTINUOUS, CR0_ONE_SHOT, WRITE_BIT};

/// SPI mode (CPOL = 1, CPHA = 1)
pub const MODE: Mode = MODE_3;

/// MAX31856 precision thermocouple-to-digital converter with linearization
pub struct Max31856<SPI> {
    spi: SPI,
    config: Config,
}

impl<SPI> Max31856<SPI>
where
    SPI: SpiDevice,
{
    /// Takes ownership of the SPI device and puts the chip in continuous
    /// conversion mode with the configured thermocouple type and four
    /// sample averaging.
    ///
    /// If either write fails the chip is left half configured and the SPI
    /// device is dropped along with the error.
    pub fn new(spi: SPI, config: Config) -> Result<Self, Error<SPI::Error>> {
        let mut sensor = Self { spi, config };

        sensor.write_register(Register::Cr0.read_address(), CR0_CONTINUOUS)?;
        sensor.write_register(Register::Cr1.read_address(), config.cr1())?;

        info!(
            "max31856 on bus {} device {}: type {}, {} samples",
            config.bus(),
            config.device(),
            config.thermocouple_type(),
            config.averaging().samples()
        );
        Ok(sensor)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives the SPI device back. The chip keeps converting.
    pub fn release(self) -> SPI {
        self.spi
    }

    /// Single register read. Bit 7 of `address` is cleared.
    pub fn read_register(&mut self, address: u8) -> Result<u8, Error<SPI::Error>> {
        let mut buffer = [address & !WRITE_BIT, 0x00];
        self.spi.transfer_in_place(&mut buffer).map_err(Error::Spi)?;
        Ok(buffer[1])
    }

    /// Single register write. Bit 7 of `address` is set.
    pub fn write_register(&mut self, address: u8, value: u8) -> Result<(), Error<SPI::Error>> {
        self.spi
            .write(&[address | WRITE_BIT, value])
            .map_err(Error::Spi)
    }

    fn read(&mut self, register: Register) -> Result<u8, Error<SPI::Error>> {
        self.read_register(register.read_address())
    }

    /// Signed linearized temperature in counts of 2^-7 °C.
    ///
    /// The three bytes are separate transactions; a conversion finishing
    /// between them can tear the sample.
    pub fn raw_temperature(&mut self) -> Result<i32, Error<SPI::Error>> {
        let lsb = self.read(Register::Ltcbl)?;
        let msb = self.read(Register::Ltcbm)?;
        let hsb = self.read(Register::Ltcbh)?;
        trace!("LTCB {} {} {}", hsb, msb, lsb);

        Ok(decode::raw_temperature(lsb, msb, hsb))
    }

    /// Linearized, cold-junction compensated thermocouple temperature in °C.
    pub fn temperature(&mut self) -> Result<f32, Error<SPI::Error>> {
        Ok(self.raw_temperature()? as f32 * decode::THERMOCOUPLE_LSB)
    }

    pub fn fault_register(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.read(Register::Sr)
    }

    /// Active faults. These are data, not errors.
    pub fn fault_status(&mut self) -> Result<FaultStatus, Error<SPI::Error>> {
        let status = FaultStatus::from_register(self.fault_register()?);
        if status.has_fault() {
            warn!(
                "max31856 on bus {} device {}: fault status {}",
                self.config.bus(),
                self.config.device(),
                status.bits()
            );
        }
        Ok(status)
    }

    pub fn cr0(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.read(Register::Cr0)
    }

    pub fn cr1(&mut self) -> Result<u8, Error<SPI::Error>> {
        self.read(Register::Cr1)
    }

    pub fn conversion_mode(&mut self) -> Result<ConversionMode, Error<SPI::Error>> {
        Ok(ConversionMode::from_cr0(self.cr0()?))
    }

    /// Type the chip is currently linearizing for, `None` if CR1 selects
    /// one of the voltage modes.
    pub fn thermocouple_type(&mut self) -> Result<Option<ThermocoupleType>, Error<SPI::Error>> {
        Ok(ThermocoupleType::from_cr1(self.cr1()?))
    }

    pub fn averaging_mode(&mut self) -> Result<AveragingMode, Error<SPI::Error>> {
        Ok(AveragingMode::from_cr1(self.cr1()?))
    }

    /// Reads registers 0x00 through 0x0F, for debugging
    pub fn read_all_registers(&mut self) -> Result<[u8; 16], Error<SPI::Error>> {
        let mut result = [0u8; 16];
        for register in Register::ALL {
            result[register.read_address() as usize] = self.read(register)?;
        }
        debug!("registers {}", result);
        Ok(result)
    }
}
