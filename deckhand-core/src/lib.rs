//! Board-agnostic core logic for the transport front panel
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (transport link, keypad, character display)
//! - Keypad band decoding and press/hold tracking
//! - Playback state machine
//! - Two-line status formatting
//! - The per-cycle polling controller
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod state;
pub mod traits;

pub use controller::{Cycle, PlaybackController};
