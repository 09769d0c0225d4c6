//! Playback state machine
//!
//! Tracks what the controller believes about the transport. The state is
//! explicit, finite, and deterministic; all I/O lives in the controller.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{Link, PlaybackState, Source};
