//! Reply buffers for info commands
//!
//! Replies are raw ASCII. CR and LF end a logical line but do not end the
//! reply: the reader keeps draining whatever the transport sent, so bytes
//! after the first terminator are appended to the same buffer. The
//! transport never sends more than one line per request, so this only
//! matters for line noise.

use heapless::Vec;

use crate::commands::InfoCommand;

const CR: u8 = 0x0D;
const LF: u8 = 0x0A;

/// Reply to an info command, holding at most `N` payload bytes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response<const N: usize> {
    payload: Vec<u8, N>,
    /// Every byte drained, terminators and overflow included
    drained: usize,
    terminators: usize,
}

/// Reply buffer sized for [`InfoCommand::Version`]
pub type VersionResponse = Response<{ InfoCommand::Version.max_len() }>;
/// Reply buffer sized for [`InfoCommand::Mode`]
pub type ModeResponse = Response<{ InfoCommand::Mode.max_len() }>;
/// Reply buffer sized for [`InfoCommand::Source`]
pub type SourceResponse = Response<{ InfoCommand::Source.max_len() }>;
/// Reply buffer sized for [`InfoCommand::Track`]
pub type TrackResponse = Response<{ InfoCommand::Track.max_len() }>;
/// Reply buffer sized for [`InfoCommand::Rate`]
pub type RateResponse = Response<{ InfoCommand::Rate.max_len() }>;

impl<const N: usize> Response<N> {
    /// Create an empty reply (nothing received)
    pub const fn new() -> Self {
        Self {
            payload: Vec::new(),
            drained: 0,
            terminators: 0,
        }
    }

    /// Build a reply from a complete byte sequence
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut response = Self::new();
        response.extend(bytes);
        response
    }

    /// Account for one received byte
    ///
    /// Terminators are counted and skipped. Payload bytes past capacity are
    /// counted and dropped.
    pub fn push(&mut self, byte: u8) {
        self.drained += 1;
        if byte == CR || byte == LF {
            self.terminators += 1;
            return;
        }
        let _ = self.payload.push(byte);
    }

    /// Account for a run of received bytes
    pub fn extend(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }

    /// Total bytes drained for this reply, terminators included
    ///
    /// Zero means the transport did not answer.
    pub fn byte_count(&self) -> usize {
        self.drained
    }

    /// Number of CR/LF bytes that were stripped
    pub fn terminators(&self) -> usize {
        self.terminators
    }

    /// True when nothing at all came back
    pub fn is_silent(&self) -> bool {
        self.drained == 0
    }

    /// True when the reply is long enough to carry a value for `cmd`
    pub fn is_informative(&self, cmd: InfoCommand) -> bool {
        self.drained >= cmd.informative_len()
    }

    /// True when payload bytes were dropped for lack of room
    pub fn is_truncated(&self) -> bool {
        self.drained - self.terminators > self.payload.len()
    }

    /// Stored payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.payload
    }

    /// Stored payload as text, or `None` if it is not valid UTF-8
    pub fn as_text(&self) -> Option<&str> {
        core::str::from_utf8(&self.payload).ok()
    }

    /// Stored payload as text
    ///
    /// Returns an empty string if the transport sent non-UTF-8 bytes.
    pub fn as_str(&self) -> &str {
        self.as_text().unwrap_or("")
    }

    /// Text worth showing for `cmd`
    ///
    /// `None` for replies that are too short or carry line noise; callers
    /// keep whatever they showed before.
    pub fn informative_text(&self, cmd: InfoCommand) -> Option<&str> {
        if self.is_informative(cmd) {
            self.as_text()
        } else {
            None
        }
    }

    /// First payload byte, if any
    pub fn first(&self) -> Option<u8> {
        self.payload.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminators_stripped_and_counted() {
        let r = ModeResponse::from_bytes(b"play\r\n");
        assert_eq!(r.as_str(), "play");
        assert_eq!(r.byte_count(), 6);
        assert_eq!(r.terminators(), 2);
        assert!(!r.is_truncated());
    }

    #[test]
    fn test_terminator_does_not_stop_drain() {
        let r = TrackResponse::from_bytes(b"01:23\r\nxx");
        assert_eq!(r.as_str(), "01:23xx");
        assert_eq!(r.byte_count(), 9);
    }

    #[test]
    fn test_overflow_dropped_but_counted() {
        let r = ModeResponse::from_bytes(b"abcdefgh\n");
        assert_eq!(r.as_str(), "abcdef");
        assert_eq!(r.byte_count(), 9);
        assert!(r.is_truncated());
    }

    #[test]
    fn test_silent() {
        let r = VersionResponse::new();
        assert!(r.is_silent());
        assert_eq!(r.as_str(), "");
        assert!(!r.is_informative(InfoCommand::Version));
    }

    #[test]
    fn test_informative_thresholds() {
        assert!(VersionResponse::from_bytes(b"\n").is_informative(InfoCommand::Version));
        assert!(!ModeResponse::from_bytes(b"\r\n").is_informative(InfoCommand::Mode));
        assert!(ModeResponse::from_bytes(b"p\r\n").is_informative(InfoCommand::Mode));
    }

    #[test]
    fn test_non_utf8_reads_empty() {
        let r = SourceResponse::from_bytes(&[0xFF, 0xFE]);
        assert_eq!(r.as_str(), "");
        assert_eq!(r.as_bytes(), &[0xFF, 0xFE]);
    }

    #[test]
    fn test_informative_text() {
        let r = SourceResponse::from_bytes(b"CD\r\n");
        assert_eq!(r.informative_text(InfoCommand::Source), Some("CD"));

        let noisy = SourceResponse::from_bytes(b"C\xFFD\r\n");
        assert!(noisy.is_informative(InfoCommand::Source));
        assert_eq!(noisy.as_text(), None);
        assert_eq!(noisy.informative_text(InfoCommand::Source), None);

        let short = RateResponse::from_bytes(b"\r\n");
        assert_eq!(short.informative_text(InfoCommand::Rate), None);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn payload_never_holds_terminators(bytes in proptest::collection::vec(any::<u8>(), 0..40)) {
                let r = TrackResponse::from_bytes(&bytes);
                prop_assert_eq!(r.byte_count(), bytes.len());
                prop_assert!(!r.as_bytes().contains(&CR));
                prop_assert!(!r.as_bytes().contains(&LF));
                prop_assert!(r.as_bytes().len() <= InfoCommand::Track.max_len());
            }
        }
    }
}
