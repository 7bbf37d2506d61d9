use core::fmt;

/// Driver errors, generic over the SPI transport error.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The SPI transaction could not complete
    Spi(E),
    /// Thermocouple type code outside 0-7
    InvalidThermocoupleType(u8),
}

impl<E> From<InvalidThermocoupleType> for Error<E> {
    fn from(err: InvalidThermocoupleType) -> Self {
        Error::InvalidThermocoupleType(err.0)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spi(e) => write!(f, "SPI transfer failed: {:?}", e),
            Error::InvalidThermocoupleType(code) => {
                write!(f, "invalid thermocouple type code {}", code)
            }
        }
    }
}

/// A raw thermocouple type code that does not name a type.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidThermocoupleType(pub u8);

impl fmt::Display for InvalidThermocoupleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid thermocouple type code {}", self.0)
    }
}
