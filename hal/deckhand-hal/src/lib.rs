//! Deckhand Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the transport controller needs
//! from a board: a serial link to the transport and one analog input for
//! the resistor-ladder keypad. Chip-specific firmware implements them,
//! host tests implement them with scripted fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  deckhand-firmware (board bootstrap)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  deckhand-drivers (client, keypad)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  deckhand-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication
//! - [`adc::AnalogInput`] - Single-channel analog sampling

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod uart;

pub use adc::AnalogInput;
pub use uart::{Uart, UartConfig, UartRx, UartTx};
