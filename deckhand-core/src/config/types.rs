//! Configuration type definitions
//!
//! Every wait in the controller is a configured value. The transport gives
//! no acknowledgement, so these delays are what keeps commands from being
//! lost or reordered on the device side.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Consecutive held cycles of Select that trigger shutdown
///
/// Counts repeats after the cycle the press was first seen, not total
/// cycles: the default fires on the sixth consecutive Select sample.
pub const DEFAULT_LONG_PRESS_CYCLES: u8 = 5;

/// Wait between sending an info request and draining the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SettleTime {
    /// Fixed part of the wait (µs)
    pub base_us: u32,
    /// Additional wait per expected reply byte (µs)
    pub per_byte_us: u32,
}

impl Default for SettleTime {
    fn default() -> Self {
        Self {
            base_us: 5_000,
            // two character times at 9600 baud
            per_byte_us: 2_100,
        }
    }
}

impl SettleTime {
    /// Total wait for a reply of up to `max_len` bytes (µs)
    pub fn for_reply(&self, max_len: usize) -> u32 {
        let bytes = u32::try_from(max_len).unwrap_or(u32::MAX);
        self.base_us
            .saturating_add(self.per_byte_us.saturating_mul(bytes))
    }

    /// No waiting at all, for simulated links
    pub const fn none() -> Self {
        Self {
            base_us: 0,
            per_byte_us: 0,
        }
    }
}

/// Controller timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timing {
    /// Reply settle time used by the serial client
    pub settle: SettleTime,
    /// Pause after every action command (ms)
    pub command_gap_ms: u32,
    /// Pause after the transport first answers the version probe (ms)
    pub connect_settle_ms: u32,
    /// Pause between selecting the stream and starting it on cold start (ms)
    ///
    /// Must be well above `command_gap_ms`: a shorter wait makes the
    /// transport start the stream playing backwards.
    pub stream_warmup_ms: u32,
    /// How long the transport needs to power off after Quit (ms)
    pub shutdown_hold_ms: u32,
    /// Pause between poll cycles (ms)
    pub poll_interval_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle: SettleTime::default(),
            command_gap_ms: 100,
            connect_settle_ms: 2_000,
            stream_warmup_ms: 3_000,
            shutdown_hold_ms: 20_000,
            poll_interval_ms: 100,
        }
    }
}

/// Inclusive upper bounds of each keypad band on a 10-bit reading
///
/// Bands are checked in ascending order, so a reading equal to a bound
/// belongs to the lower band. Anything above `select` is no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyBands {
    pub right: u16,
    pub up: u16,
    pub down: u16,
    pub left: u16,
    pub select: u16,
}

impl Default for KeyBands {
    fn default() -> Self {
        Self {
            right: 50,
            up: 195,
            down: 380,
            left: 555,
            select: 790,
        }
    }
}

impl KeyBands {
    /// Check that the bands are strictly ascending
    pub fn is_ascending(&self) -> bool {
        self.right < self.up && self.up < self.down && self.down < self.left && self.left < self.select
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    pub timing: Timing,
    pub keys: KeyBands,
    /// Held cycles of Select before shutdown
    pub long_press_cycles: u8,
    /// Consecutive silent mode polls before dropping back to disconnected
    ///
    /// `None` keeps polling a silent transport forever.
    pub silent_limit: Option<u8>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            keys: KeyBands::default(),
            long_press_cycles: DEFAULT_LONG_PRESS_CYCLES,
            silent_limit: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Keypad bands overlap or are out of order
    BandsNotAscending,
    /// A long press of zero cycles would fire on the first press
    ZeroLongPress,
    /// A silent limit of zero would disconnect immediately
    ZeroSilentLimit,
}

impl ControllerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.keys.is_ascending() {
            return Err(ConfigError::BandsNotAscending);
        }
        if self.long_press_cycles == 0 {
            return Err(ConfigError::ZeroLongPress);
        }
        if self.silent_limit == Some(0) {
            return Err(ConfigError::ZeroSilentLimit);
        }
        Ok(())
    }
}
