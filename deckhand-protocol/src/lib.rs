//! Transport Command Protocol
//!
//! The transport is driven over a 9600 8N1 serial link with a half-duplex
//! request/response protocol. Every request is a single ASCII byte; there is
//! no framing, checksum or acknowledgement.
//!
//! # Protocol Overview
//!
//! ```text
//!  controller                    transport
//!      │  'M'                        │
//!      │ ──────────────────────────▶ │
//!      │         (settle time)       │
//!      │  "play\r\n"                 │
//!      │ ◀────────────────────────── │
//! ```
//!
//! Action commands (`p`, `s`, `>` ...) produce no meaningful reply. Info
//! commands (`M`, `V`, `R` ...) reply with a short ASCII line terminated by
//! CR and/or LF. A reply of zero bytes means the transport is absent or not
//! ready yet.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod commands;
pub mod response;

pub use commands::{ActionCommand, InfoCommand};
pub use response::{
    ModeResponse, RateResponse, Response, SourceResponse, TrackResponse, VersionResponse,
};
