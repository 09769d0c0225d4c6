//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in deckhand-core on top of the deckhand-hal peripheral traits:
//!
//! - Serial command client for the transport link
//! - Resistor-ladder analog keypad

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod keypad;
pub mod serial;

pub use keypad::AnalogKeypad;
pub use serial::SerialCommandClient;
