//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Link events
    /// Version probe answered
    VersionReceived,
    /// Mode polls have gone unanswered for too long
    LinkSilent,

    // Status events
    /// Mode poll answered with an informative reply
    ModeReported {
        /// First mode character was 'p'
        playing: bool,
    },

    // Command events
    /// Cold-start stream selection and play were sent
    StreamBootstrapped,
    /// Select pressed; the other source was selected
    SourceToggled,
    /// Select long-pressed; Quit was sent
    ShutdownRequested,
}
