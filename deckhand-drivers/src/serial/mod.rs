//! Transport serial link

pub mod client;

pub use client::SerialCommandClient;
