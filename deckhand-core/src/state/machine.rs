//! State machine definition
//!
//! Which commands a key produces is a function of the current state and
//! the key; the controller applies an [`Event`] after issuing them.

use super::events::Event;

/// Serial link status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Link {
    /// Waiting for the transport to answer the version probe
    Disconnected,
    /// Transport answered; status polling and key commands active
    Connected,
    /// Quit sent; nothing further is polled or sent
    ShutDown,
}

/// Transport input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Source {
    /// Optical disc
    Cd,
    /// Network stream
    Stream,
}

impl Source {
    /// The other source
    pub fn toggled(self) -> Self {
        match self {
            Source::Cd => Source::Stream,
            Source::Stream => Source::Cd,
        }
    }
}

/// Everything the controller knows about the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackState {
    pub link: Link,
    pub source: Source,
    /// Last informative mode reply did not start with 'p'
    pub stopped: bool,
    /// Cold-start stream bootstrap still owed
    ///
    /// Set on the first connection, cleared by the bootstrap, never set
    /// again.
    pub ready_to_stream: bool,
    /// Bootstrap has been armed at some point
    armed: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackState {
    /// Power-on state
    pub const fn new() -> Self {
        Self {
            link: Link::Disconnected,
            source: Source::Stream,
            stopped: true,
            ready_to_stream: false,
            armed: false,
        }
    }

    /// Check if the transport is answering
    pub fn is_connected(&self) -> bool {
        self.link == Link::Connected
    }

    /// Check if Quit has been sent
    pub fn is_shut_down(&self) -> bool {
        self.link == Link::ShutDown
    }

    /// Check if the cold-start stream bootstrap should run now
    pub fn bootstrap_due(&self) -> bool {
        self.is_connected() && self.ready_to_stream && self.stopped
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;

        match (self.link, event) {
            // Shutdown is terminal
            (Link::ShutDown, _) => self,

            (Link::Disconnected, VersionReceived) => Self {
                link: Link::Connected,
                // a reconnect after LinkSilent does not owe a second bootstrap
                ready_to_stream: self.ready_to_stream || !self.armed,
                armed: true,
                ..self
            },

            (Link::Connected, ModeReported { playing }) => Self {
                stopped: !playing,
                ..self
            },
            (Link::Connected, StreamBootstrapped) => Self {
                source: Source::Stream,
                ready_to_stream: false,
                ..self
            },
            (Link::Connected, SourceToggled) => Self {
                source: self.source.toggled(),
                ..self
            },
            (Link::Connected, ShutdownRequested) => Self {
                link: Link::ShutDown,
                ..self
            },
            (Link::Connected, LinkSilent) => Self {
                link: Link::Disconnected,
                ..self
            },

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected() -> PlaybackState {
        PlaybackState::new().transition(Event::VersionReceived)
    }

    #[test]
    fn test_power_on() {
        let state = PlaybackState::new();
        assert_eq!(state.link, Link::Disconnected);
        assert_eq!(state.source, Source::Stream);
        assert!(state.stopped);
        assert!(!state.ready_to_stream);
        assert!(!state.bootstrap_due());
    }

    #[test]
    fn test_connect_arms_bootstrap() {
        let state = connected();
        assert!(state.is_connected());
        assert!(state.ready_to_stream);
        assert!(state.bootstrap_due());
    }

    #[test]
    fn test_bootstrap_consumed_once() {
        let state = connected().transition(Event::StreamBootstrapped);
        assert!(!state.ready_to_stream);
        assert!(!state.bootstrap_due());

        // Dropping and regaining the link does not re-arm it
        let state = state
            .transition(Event::LinkSilent)
            .transition(Event::VersionReceived);
        assert!(state.is_connected());
        assert!(!state.ready_to_stream);
    }

    #[test]
    fn test_bootstrap_waits_for_stopped() {
        let state = connected().transition(Event::ModeReported { playing: true });
        assert!(!state.stopped);
        assert!(!state.bootstrap_due());
        let state = state.transition(Event::ModeReported { playing: false });
        assert!(state.bootstrap_due());
    }

    #[test]
    fn test_source_toggle_is_two_cycle() {
        let state = connected();
        let cd = state.transition(Event::SourceToggled);
        assert_eq!(cd.source, Source::Cd);
        let stream = cd.transition(Event::SourceToggled);
        assert_eq!(stream.source, Source::Stream);
    }

    #[test]
    fn test_disconnected_ignores_commands() {
        let state = PlaybackState::new();
        assert_eq!(state.transition(Event::SourceToggled), state);
        assert_eq!(state.transition(Event::ModeReported { playing: true }), state);
        assert_eq!(state.transition(Event::ShutdownRequested), state);
    }

    #[test]
    fn test_shutdown_is_terminal() {
        let state = connected().transition(Event::ShutdownRequested);
        assert!(state.is_shut_down());
        for event in [
            Event::VersionReceived,
            Event::LinkSilent,
            Event::SourceToggled,
            Event::ModeReported { playing: true },
        ] {
            assert_eq!(state.transition(event), state);
        }
    }
}
