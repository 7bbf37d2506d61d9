//! Conversion of raw register bytes into physical values.
//!
//! Everything here is pure: any byte combination decodes, nothing fails.

/// Weight of one count of the linearized temperature field, 2^-7 °C
pub const THERMOCOUPLE_LSB: f32 = 1.0 / 128.0;
/// Width of the signed linearized temperature field
pub const THERMOCOUPLE_BITS: u32 = 19;

const SIGN_BIT: u8 = 0x80;
// bits 4:0 of LTCBL are unused
const UNUSED_BITS: u32 = 5;

/// Composes LTCBL, LTCBM and LTCBH into the signed 19-bit count.
pub fn raw_temperature(lsb: u8, msb: u8, hsb: u8) -> i32 {
    let mut value = (((hsb & 0x7F) as i32) << 16) | ((msb as i32) << 8) | lsb as i32;
    value >>= UNUSED_BITS;

    if hsb & SIGN_BIT != 0 {
        value -= 1 << (THERMOCOUPLE_BITS - 1);
    }
    value
}

/// Linearized, cold-junction compensated temperature in degrees Celsius.
pub fn temperature_celsius(lsb: u8, msb: u8, hsb: u8) -> f32 {
    raw_temperature(lsb, msb, hsb) as f32 * THERMOCOUPLE_LSB
}

/// Fault names indexed by their bit position in the fault status register.
pub const FAULT_NAMES: [&str; 8] = [
    "Thermocouple Open-Circuit Fault",
    "Overvoltage or Undervoltage Input Fault",
    "Thermocouple Temperature Low Fault",
    "Thermocouple Temperature High Fault",
    "Cold-Junction Low Fault",
    "Cold-Junction High Fault",
    "Thermocouple Out-of-Range",
    "Cold Junction Out-of-Range",
];

/// One condition flagged in the fault status register
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    OpenCircuit,
    OverUnderVoltage,
    ThermocoupleLow,
    ThermocoupleHigh,
    ColdJunctionLow,
    ColdJunctionHigh,
    ThermocoupleOutOfRange,
    ColdJunctionOutOfRange,
}

impl Fault {
    /// Every fault in bit order.
    pub const ALL: [Fault; 8] = [
        Fault::OpenCircuit,
        Fault::OverUnderVoltage,
        Fault::ThermocoupleLow,
        Fault::ThermocoupleHigh,
        Fault::ColdJunctionLow,
        Fault::ColdJunctionHigh,
        Fault::ThermocoupleOutOfRange,
        Fault::ColdJunctionOutOfRange,
    ];

    pub fn bit(&self) -> u8 {
        1 << (*self as u8)
    }

    pub fn name(&self) -> &'static str {
        FAULT_NAMES[*self as usize]
    }
}

/// Fault status register (SR) contents.
///
/// A set bit is reported, never treated as a read failure.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaultStatus(u8);

impl FaultStatus {
    pub fn from_register(reg: u8) -> Self {
        Self(reg)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn has_fault(&self) -> bool {
        self.0 != 0
    }

    pub fn contains(&self, fault: Fault) -> bool {
        self.0 & fault.bit() != 0
    }

    /// Active faults, lowest bit first.
    pub fn faults(&self) -> Faults {
        Faults {
            status: self.0,
            index: 0,
        }
    }

    /// Names of the active faults, lowest bit first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.faults().map(|fault| fault.name())
    }
}

/// Iterator over the faults set in a [`FaultStatus`].
#[derive(Clone, Debug)]
pub struct Faults {
    status: u8,
    index: usize,
}

impl Iterator for Faults {
    type Item = Fault;

    fn next(&mut self) -> Option<Fault> {
        while self.index < Fault::ALL.len() {
            let fault = Fault::ALL[self.index];
            self.index += 1;
            if self.status & fault.bit() != 0 {
                return Some(fault);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Inverse of raw_temperature, for counts in -2^18..2^18.
    fn encode(counts: i32) -> (u8, u8, u8) {
        let field = ((counts as u32) & 0x7FFFF) << UNUSED_BITS;
        ((field & 0xFF) as u8, (field >> 8) as u8, (field >> 16) as u8)
    }

    #[test]
    fn check_zero() {
        assert_eq!(raw_temperature(0x00, 0x00, 0x00), 0);
        assert_eq!(temperature_celsius(0x00, 0x00, 0x00), 0.0);
    }

    #[test]
    fn check_datasheet_positive() {
        // 0x19 0x00 0x00 is +400 °C
        assert_eq!(raw_temperature(0x00, 0x00, 0x19), 51200);
        assert_eq!(temperature_celsius(0x00, 0x00, 0x19), 400.0);
        // 0x00 0x01 0x00 is +0.0625 °C
        assert_eq!(temperature_celsius(0x00, 0x01, 0x00), 0.0625);
        // 0x64 0x00 0x00 is +1600 °C
        assert_eq!(temperature_celsius(0x00, 0x00, 0x64), 1600.0);
    }

    #[test]
    fn check_datasheet_negative() {
        // 0xF0 0x60 0x00 is -250 °C
        assert_eq!(temperature_celsius(0x00, 0x60, 0xF0), -250.0);
        // 0xFF 0xFF 0x00 is -0.0625 °C
        assert_eq!(temperature_celsius(0x00, 0xFF, 0xFF), -0.0625);
        assert_eq!(temperature_celsius(0xE0, 0xFF, 0xFF), -THERMOCOUPLE_LSB);
    }

    #[test]
    fn check_extremes() {
        assert_eq!(raw_temperature(0x00, 0x00, 0x80), -(1 << 18));
        assert_eq!(temperature_celsius(0x00, 0x00, 0x80), -2048.0);
        assert_eq!(raw_temperature(0xFF, 0xFF, 0x7F), (1 << 18) - 1);
        assert_eq!(temperature_celsius(0xE0, 0xFF, 0x7F), 2047.9921875);
    }

    #[test]
    fn check_unused_bits_ignored() {
        assert_eq!(raw_temperature(0x1F, 0x00, 0x00), 0);
        assert_eq!(raw_temperature(0x3F, 0x00, 0x00), 1);
        assert_eq!(temperature_celsius(0x20, 0x00, 0x00), THERMOCOUPLE_LSB);
    }

    #[test]
    fn check_decode_is_deterministic() {
        let first = temperature_celsius(0x40, 0x12, 0x9A);
        temperature_celsius(0x00, 0x00, 0x19);
        assert_eq!(temperature_celsius(0x40, 0x12, 0x9A), first);
    }

    #[test]
    fn check_round_trip() {
        let mut counts = -(1 << 18);
        while counts < (1 << 18) {
            let celsius = counts as f32 * THERMOCOUPLE_LSB;
            let (lsb, msb, hsb) = encode(counts);
            assert_eq!(raw_temperature(lsb, msb, hsb), counts);
            assert!((temperature_celsius(lsb, msb, hsb) - celsius).abs() < THERMOCOUPLE_LSB);
            counts += 97;
        }
    }

    #[test]
    fn check_fault_names() {
        let status = FaultStatus::from_register(0b0000_0101);
        let names: Vec<_> = status.names().collect();
        assert_eq!(
            names,
            ["Thermocouple Open-Circuit Fault", "Thermocouple Temperature Low Fault"]
        );
        let faults: Vec<_> = status.faults().collect();
        assert_eq!(faults, [Fault::OpenCircuit, Fault::ThermocoupleLow]);
    }

    #[test]
    fn check_no_faults() {
        let status = FaultStatus::from_register(0x00);
        assert!(!status.has_fault());
        assert_eq!(status.faults().count(), 0);
    }

    #[test]
    fn check_all_faults_in_bit_order() {
        let names: Vec<_> = FaultStatus::from_register(0xFF).names().collect();
        assert_eq!(names, FAULT_NAMES);
        for (i, fault) in Fault::ALL.iter().enumerate() {
            assert_eq!(fault.bit(), 1 << i);
            assert!(FaultStatus::from_register(1 << i).contains(*fault));
        }
    }

    #[test]
    fn check_fault_superset_monotonic() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                if a & b != b {
                    continue;
                }
                let superset: Vec<_> = FaultStatus::from_register(a).faults().collect();
                for fault in FaultStatus::from_register(b).faults() {
                    assert!(superset.contains(&fault));
                }
            }
        }
    }
}
