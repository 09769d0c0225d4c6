//! Front-panel keypad drivers

pub mod analog;

pub use analog::AnalogKeypad;
