//! Resistor-ladder keypad on one ADC channel

use deckhand_core::config::KeyBands;
use deckhand_core::input::{Key, KeyDecoder};
use deckhand_core::traits::KeySource;
use deckhand_hal::adc::AnalogInput;

/// Five-key analog keypad
pub struct AnalogKeypad<A> {
    adc: A,
    decoder: KeyDecoder,
}

impl<A: AnalogInput> AnalogKeypad<A> {
    /// Create a keypad decoding with `bands`
    pub fn new(adc: A, bands: KeyBands) -> Self {
        Self {
            adc,
            decoder: KeyDecoder::new(bands),
        }
    }
}

impl<A: AnalogInput> KeySource for AnalogKeypad<A> {
    fn sample(&mut self) -> Key {
        match self.adc.read() {
            Ok(raw) => self.decoder.decode(raw),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("keypad conversion failed");

                Key::None
            }
        }
    }
}
