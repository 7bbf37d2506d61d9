/// Bit 7 of the address byte selects a write transaction.
pub const WRITE_BIT: u8 = 0x80;

/// CR0 one-shot conversion trigger
pub const CR0_ONE_SHOT: u8 = 0x40;
/// CR0 automatic (continuous) conversion mode, one conversion every ~100ms
pub const CR0_CONTINUOUS: u8 = 0x80;

pub(crate) const CR1_TC_TYPE_MASK: u8 = 0x0F;
pub(crate) const CR1_AVG_MASK: u8 = 0x70;
pub(crate) const CR1_AVG_SHIFT: u8 = 4;

/// MAX31856 register map, see datasheet Table 6.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    /// Configuration 0
    Cr0,
    /// Configuration 1
    Cr1,
    /// Fault mask
    Mask,
    /// Cold-junction high fault threshold
    Cjhf,
    /// Cold-junction low fault threshold
    Cjlf,
    /// Linearized temperature high fault threshold, MSB
    Lthfth,
    /// Linearized temperature high fault threshold, LSB
    Lthftl,
    /// Linearized temperature low fault threshold, MSB
    Ltlfth,
    /// Linearized temperature low fault threshold, LSB
    Ltlftl,
    /// Cold-junction temperature offset
    Cjto,
    /// Cold-junction temperature, MSB
    Cjth,
    /// Cold-junction temperature, LSB
    Cjtl,
    /// Linearized TC temperature, byte 2
    Ltcbh,
    /// Linearized TC temperature, byte 1
    Ltcbm,
    /// Linearized TC temperature, byte 0
    Ltcbl,
    /// Fault status
    Sr,
}

impl Register {
    /// Every register in address order.
    pub const ALL: [Register; 16] = [
        Register::Cr0,
        Register::Cr1,
        Register::Mask,
        Register::Cjhf,
        Register::Cjlf,
        Register::Lthfth,
        Register::Lthftl,
        Register::Ltlfth,
        Register::Ltlftl,
        Register::Cjto,
        Register::Cjth,
        Register::Cjtl,
        Register::Ltcbh,
        Register::Ltcbm,
        Register::Ltcbl,
        Register::Sr,
    ];

    pub fn read_address(&self) -> u8 {
        match *self {
            Register::Cr0 => 0x00,
            Register::Cr1 => 0x01,
            Register::Mask => 0x02,
            Register::Cjhf => 0x03,
            Register::Cjlf => 0x04,
            Register::Lthfth => 0x05,
            Register::Lthftl => 0x06,
            Register::Ltlfth => 0x07,
            Register::Ltlftl => 0x08,
            Register::Cjto => 0x09,
            Register::Cjth => 0x0A,
            Register::Cjtl => 0x0B,
            Register::Ltcbh => 0x0C,
            Register::Ltcbm => 0x0D,
            Register::Ltcbl => 0x0E,
            Register::Sr => 0x0F,
        }
    }

    /// `None` for the linearized temperature and fault status registers,
    /// which the chip only exposes for reading.
    pub fn write_address(&self) -> Option<u8> {
        match *self {
            Register::Ltcbh | Register::Ltcbm | Register::Ltcbl | Register::Sr => None,
            _ => Some(self.read_address() | WRITE_BIT),
        }
    }
}
