//! Analog input abstraction
//!
//! The keypad is a resistor ladder on a single ADC pin, so one blocking
//! sample per poll cycle is all the controller needs.

/// Full-scale value of a 10-bit reading
pub const ADC_MAX_10BIT: u16 = 1023;

/// Single analog channel
pub trait AnalogInput {
    /// Error type for conversions
    type Error;

    /// Take one blocking sample, scaled to 10 bits (0..=1023)
    fn read(&mut self) -> Result<u16, Self::Error>;
}

/// Rescale a raw reading of `bits` resolution to 10 bits
///
/// Chips with 12-bit converters use this so keypad thresholds stay
/// board-independent.
pub fn to_10bit(raw: u16, bits: u8) -> u16 {
    let scaled = if bits <= 10 {
        raw.checked_shl(u32::from(10 - bits)).unwrap_or(0)
    } else {
        raw.checked_shr(u32::from(bits - 10)).unwrap_or(0)
    };
    scaled.min(ADC_MAX_10BIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_12bit_rescale() {
        assert_eq!(to_10bit(4095, 12), 1023);
        assert_eq!(to_10bit(0, 12), 0);
        assert_eq!(to_10bit(2048, 12), 512);
    }

    #[test]
    fn test_10bit_passthrough() {
        assert_eq!(to_10bit(700, 10), 700);
    }

    #[test]
    fn test_8bit_upscale() {
        assert_eq!(to_10bit(255, 8), 1020);
    }

    #[test]
    fn test_wide_resolutions_do_not_overflow() {
        assert_eq!(to_10bit(u16::MAX, 16), 1023);
        assert_eq!(to_10bit(u16::MAX, 26), 0);
        assert_eq!(to_10bit(u16::MAX, u8::MAX), 0);
        assert_eq!(to_10bit(u16::MAX, 10), 1023);
    }
}
