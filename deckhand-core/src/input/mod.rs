//! Keypad input
//!
//! The five keys share one analog pin through a resistor ladder. Decoding
//! a sample is stateless; press and hold detection compares successive
//! decoded keys across poll cycles.

pub mod keys;
pub mod tracker;

pub use keys::{Key, KeyDecoder};
pub use tracker::{KeyActivity, KeyTracker};
