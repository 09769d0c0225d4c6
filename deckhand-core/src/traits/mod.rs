//! Hardware abstraction traits
//!
//! These traits define the interface between the playback logic and the
//! hardware-specific implementations in `deckhand-drivers` and the firmware.

pub mod display;
pub mod keypad;
pub mod transport;

pub use display::{CharDisplay, DisplayError, DisplayExt};
pub use keypad::KeySource;
pub use transport::{Transport, TransportError};
