//! Keypad trait

use crate::input::Key;

/// Something that can be sampled once per poll cycle for the key held down
pub trait KeySource {
    /// Sample the keypad
    ///
    /// Read failures sample as [`Key::None`].
    fn sample(&mut self) -> Key;
}
