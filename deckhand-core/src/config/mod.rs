//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware stores them as
//! postcard binary data generated from a TOML file at build time.

pub mod types;

pub use types::*;
