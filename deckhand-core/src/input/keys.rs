//! Analog keypad band decoding

use crate::config::KeyBands;

/// Front-panel keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    Select,
}

impl Key {
    /// Returns true if any key is down
    pub fn is_pressed(&self) -> bool {
        !matches!(self, Key::None)
    }
}

/// Maps a 10-bit keypad reading to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDecoder {
    bands: KeyBands,
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new(KeyBands::default())
    }
}

impl KeyDecoder {
    /// Create a decoder for the given bands
    pub fn new(bands: KeyBands) -> Self {
        Self { bands }
    }

    /// Decode one sample
    ///
    /// Bands are tested lowest first; a sample on a bound belongs to the
    /// band below it.
    pub fn decode(&self, sample: u16) -> Key {
        let b = &self.bands;
        if sample <= b.right {
            Key::Right
        } else if sample <= b.up {
            Key::Up
        } else if sample <= b.down {
            Key::Down
        } else if sample <= b.left {
            Key::Left
        } else if sample <= b.select {
            Key::Select
        } else {
            Key::None
        }
    }

    /// Bands in use
    pub fn bands(&self) -> &KeyBands {
        &self.bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_band_boundaries_resolve_low() {
        let decoder = KeyDecoder::default();
        assert_eq!(decoder.decode(0), Key::Right);
        assert_eq!(decoder.decode(50), Key::Right);
        assert_eq!(decoder.decode(51), Key::Up);
        assert_eq!(decoder.decode(195), Key::Up);
        assert_eq!(decoder.decode(196), Key::Down);
        assert_eq!(decoder.decode(380), Key::Down);
        assert_eq!(decoder.decode(381), Key::Left);
        assert_eq!(decoder.decode(555), Key::Left);
        assert_eq!(decoder.decode(556), Key::Select);
        assert_eq!(decoder.decode(790), Key::Select);
        assert_eq!(decoder.decode(791), Key::None);
        assert_eq!(decoder.decode(1023), Key::None);
    }

    #[test]
    fn test_custom_bands() {
        let decoder = KeyDecoder::new(KeyBands {
            right: 10,
            up: 20,
            down: 30,
            left: 40,
            select: 50,
        });
        assert_eq!(decoder.decode(25), Key::Down);
        assert_eq!(decoder.decode(60), Key::None);
    }

    #[test]
    fn test_is_pressed() {
        assert!(!Key::None.is_pressed());
        assert!(Key::Select.is_pressed());
    }

    fn expected(sample: u16) -> Key {
        match sample {
            0..=50 => Key::Right,
            51..=195 => Key::Up,
            196..=380 => Key::Down,
            381..=555 => Key::Left,
            556..=790 => Key::Select,
            _ => Key::None,
        }
    }

    proptest! {
        #[test]
        fn every_sample_lands_in_its_band(sample in 0u16..=1023) {
            prop_assert_eq!(KeyDecoder::default().decode(sample), expected(sample));
        }

        #[test]
        fn decoding_is_monotonic(a in 0u16..=1023, b in 0u16..=1023) {
            let decoder = KeyDecoder::default();
            let rank = |k: Key| match k {
                Key::Right => 0,
                Key::Up => 1,
                Key::Down => 2,
                Key::Left => 3,
                Key::Select => 4,
                Key::None => 5,
            };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(decoder.decode(lo)) <= rank(decoder.decode(hi)));
        }
    }
}
