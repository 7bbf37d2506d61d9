use crate::error::InvalidThermocoupleType;
use crate::registers::{CR0_CONTINUOUS, CR1_AVG_MASK, CR1_AVG_SHIFT, CR1_TC_TYPE_MASK};

/// Thermocouple type, CR1 bits 3:0
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThermocoupleType {
    B,
    E,
    J,
    K,
    N,
    R,
    S,
    T,
}

impl ThermocoupleType {
    pub fn value(&self) -> u8 {
        match *self {
            ThermocoupleType::B => 0x0,
            ThermocoupleType::E => 0x1,
            ThermocoupleType::J => 0x2,
            ThermocoupleType::K => 0x3,
            ThermocoupleType::N => 0x4,
            ThermocoupleType::R => 0x5,
            ThermocoupleType::S => 0x6,
            ThermocoupleType::T => 0x7,
        }
    }

    /// Decodes the type field of a CR1 read-back. Codes 8-15 select the
    /// chip's voltage modes and have no thermocouple type.
    pub fn from_cr1(cr1: u8) -> Option<Self> {
        Self::try_from(cr1 & CR1_TC_TYPE_MASK).ok()
    }
}

impl TryFrom<u8> for ThermocoupleType {
    type Error = InvalidThermocoupleType;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x0 => Ok(ThermocoupleType::B),
            0x1 => Ok(ThermocoupleType::E),
            0x2 => Ok(ThermocoupleType::J),
            0x3 => Ok(ThermocoupleType::K),
            0x4 => Ok(ThermocoupleType::N),
            0x5 => Ok(ThermocoupleType::R),
            0x6 => Ok(ThermocoupleType::S),
            0x7 => Ok(ThermocoupleType::T),
            _ => Err(InvalidThermocoupleType(code)),
        }
    }
}

/// Samples averaged per conversion, CR1 bits 6:4
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AveragingMode {
    OneSample,
    TwoSamples,
    FourSamples,
    EightSamples,
    SixteenSamples,
}

impl AveragingMode {
    /// Selector already shifted into CR1 position.
    pub fn value(&self) -> u8 {
        match *self {
            AveragingMode::OneSample => 0x0 << CR1_AVG_SHIFT,
            AveragingMode::TwoSamples => 0x1 << CR1_AVG_SHIFT,
            AveragingMode::FourSamples => 0x2 << CR1_AVG_SHIFT,
            AveragingMode::EightSamples => 0x3 << CR1_AVG_SHIFT,
            AveragingMode::SixteenSamples => 0x4 << CR1_AVG_SHIFT,
        }
    }

    pub fn samples(&self) -> u8 {
        match *self {
            AveragingMode::OneSample => 1,
            AveragingMode::TwoSamples => 2,
            AveragingMode::FourSamples => 4,
            AveragingMode::EightSamples => 8,
            AveragingMode::SixteenSamples => 16,
        }
    }

    /// Selectors 0b1xx all average sixteen samples.
    pub fn from_cr1(cr1: u8) -> Self {
        match (cr1 & CR1_AVG_MASK) >> CR1_AVG_SHIFT {
            0x0 => AveragingMode::OneSample,
            0x1 => AveragingMode::TwoSamples,
            0x2 => AveragingMode::FourSamples,
            0x3 => AveragingMode::EightSamples,
            _ => AveragingMode::SixteenSamples,
        }
    }
}

/// Conversion mode, CR0 bit 7
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionMode {
    NormallyOff,
    Continuous,
}

impl ConversionMode {
    pub fn from_cr0(cr0: u8) -> Self {
        if cr0 & CR0_CONTINUOUS != 0 {
            ConversionMode::Continuous
        } else {
            ConversionMode::NormallyOff
        }
    }
}

/// Device configuration, fixed for the lifetime of a driver instance.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    bus: u8,
    device: u8,
    thermocouple_type: ThermocoupleType,
    averaging: AveragingMode,
}

impl Config {
    /// `bus` and `device` name the SPI bus and chip select the driver's
    /// `SpiDevice` is bound to. Averaging is always four samples.
    pub fn new(bus: u8, device: u8, thermocouple_type: ThermocoupleType) -> Self {
        Self {
            bus,
            device,
            thermocouple_type,
            averaging: AveragingMode::FourSamples,
        }
    }

    /// Like [`Config::new`] but takes a raw type code, rejecting anything
    /// outside 0-7.
    pub fn from_code(bus: u8, device: u8, code: u8) -> Result<Self, InvalidThermocoupleType> {
        Ok(Self::new(bus, device, ThermocoupleType::try_from(code)?))
    }

    pub fn bus(&self) -> u8 {
        self.bus
    }

    pub fn device(&self) -> u8 {
        self.device
    }

    pub fn thermocouple_type(&self) -> ThermocoupleType {
        self.thermocouple_type
    }

    pub fn averaging(&self) -> AveragingMode {
        self.averaging
    }

    /// CR1 value written during initialization.
    pub fn cr1(&self) -> u8 {
        self.averaging.value() | self.thermocouple_type.value()
    }
}
