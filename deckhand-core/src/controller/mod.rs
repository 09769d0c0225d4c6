//! Polling controller
//!
//! One call to [`PlaybackController::poll`] is one cycle of the front panel:
//!
//! 1. status queries to the transport
//! 2. one keypad sample, turned into transport commands
//! 3. a full refresh of both LCD rows
//!
//! Commands issued in step 2 are only visible in the next cycle's queries.
//! Every action command is followed by the configured command gap; the
//! transport drops commands that arrive while it is still busy with the
//! previous one.

use embedded_hal::delay::DelayNs;

use deckhand_protocol::{ActionCommand, InfoCommand, Response};

use crate::config::ControllerConfig;
use crate::display::{pad_line, DisplayFields, Line};
use crate::input::{Key, KeyActivity, KeyTracker};
use crate::state::{Event, Link, PlaybackState, Source};
use crate::traits::{CharDisplay, DisplayExt, KeySource, Transport};


/// Shown while the version probe goes unanswered
pub const WAITING_BANNER: &str = "Waiting for";
/// Second row of the waiting banner
pub const WAITING_DETAIL: &str = "transport...";
/// Shown once Quit has been sent
pub const SHUTDOWN_BANNER: &str = "Shutting down";

const VERSION_LEN: usize = InfoCommand::Version.max_len();
const MODE_LEN: usize = InfoCommand::Mode.max_len();
const SOURCE_LEN: usize = InfoCommand::Source.max_len();
const RATE_LEN: usize = InfoCommand::Rate.max_len();
const TRACK_LEN: usize = InfoCommand::Track.max_len();

/// Outcome of one poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cycle {
    /// Transport has not answered yet
    Waiting,
    /// Connected cycle completed
    Polled,
    /// Quit was sent; the caller should hold for `hold_ms` and stop polling
    Halted { hold_ms: u32 },
}

/// Front-panel controller
///
/// Owns the transport link, keypad, display and delay source, plus all
/// state that persists between cycles.
pub struct PlaybackController<T, K, D, W> {
    link: T,
    keys: K,
    display: D,
    delay: W,
    config: ControllerConfig,
    state: PlaybackState,
    tracker: KeyTracker,
    fields: DisplayFields,
    /// Consecutive mode polls with no reply at all
    silent_polls: u8,
}

impl<T, K, D, W> PlaybackController<T, K, D, W>
where
    T: Transport,
    K: KeySource,
    D: CharDisplay,
    W: DelayNs,
{
    /// Create a controller in the power-on state
    pub fn new(link: T, keys: K, display: D, delay: W, config: ControllerConfig) -> Self {
        Self {
            link,
            keys,
            display,
            delay,
            config,
            state: PlaybackState::new(),
            tracker: KeyTracker::new(),
            fields: DisplayFields::new(),
            silent_polls: 0,
        }
    }

    /// Run one poll cycle
    pub fn poll(&mut self) -> Cycle {
        match self.state.link {
            Link::ShutDown => Cycle::Halted {
                hold_ms: self.config.timing.shutdown_hold_ms,
            },
            Link::Disconnected => self.poll_disconnected(),
            Link::Connected => self.poll_connected(),
        }
    }

    /// Probe for the transport
    ///
    /// Keys are still tracked so a key held across the connection is not
    /// seen as a fresh press, but nothing is sent.
    fn poll_disconnected(&mut self) -> Cycle {
        let version: Response<VERSION_LEN> = self.query(InfoCommand::Version);

        let cycle = if version.is_informative(InfoCommand::Version) {
            #[cfg(feature = "defmt")]
            defmt::info!("transport answered: {=str}", version.as_str());

            self.show(&[pad_line(version.as_str()), pad_line("")]);
            self.delay.delay_ms(self.config.timing.connect_settle_ms);
            self.apply(Event::VersionReceived);
            self.silent_polls = 0;
            Cycle::Polled
        } else {
            self.show_waiting();
            Cycle::Waiting
        };

        let _ = self.tracker.update(self.keys.sample());
        if cycle == Cycle::Polled {
            // Holds only count from the first connected cycle
            self.tracker.restart_hold();
        }
        cycle
    }

    fn show_waiting(&mut self) {
        self.show(&[pad_line(WAITING_BANNER), pad_line(WAITING_DETAIL)]);
    }

    fn poll_connected(&mut self) -> Cycle {
        let mode: Response<MODE_LEN> = self.query(InfoCommand::Mode);
        if let Some(text) = mode.informative_text(InfoCommand::Mode) {
            self.silent_polls = 0;
            self.fields.set(InfoCommand::Mode, text);
            self.apply(Event::ModeReported {
                playing: mode.first() == Some(b'p'),
            });
        } else if mode.is_silent() {
            self.silent_polls = self.silent_polls.saturating_add(1);
            if self
                .config
                .silent_limit
                .is_some_and(|limit| self.silent_polls >= limit)
            {
                #[cfg(feature = "defmt")]
                defmt::warn!("transport silent for {=u8} polls", self.silent_polls);

                self.apply(Event::LinkSilent);
                self.silent_polls = 0;
                self.show_waiting();
                let _ = self.tracker.update(self.keys.sample());
                return Cycle::Waiting;
            }
        }

        if self.state.bootstrap_due() {
            self.bootstrap_stream();
        }

        self.refresh::<SOURCE_LEN>(InfoCommand::Source);
        self.refresh::<RATE_LEN>(InfoCommand::Rate);
        self.refresh::<TRACK_LEN>(InfoCommand::Track);

        let activity = self.tracker.update(self.keys.sample());
        if let Some(cycle) = self.handle_keys(activity) {
            return cycle;
        }

        let lines = self.fields.format_lines();
        self.show(&lines);
        Cycle::Polled
    }

    /// Put the stream source into a known playing state on cold start
    ///
    /// The warm-up between selecting the stream and Play is far longer
    /// than the usual command gap; the transport plays the stream in
    /// reverse if Play arrives too soon after a cold select.
    fn bootstrap_stream(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("bootstrapping stream playback");

        self.delay.delay_ms(self.config.timing.command_gap_ms);
        self.issue(ActionCommand::SelectStream);
        self.delay.delay_ms(self.config.timing.stream_warmup_ms);
        self.issue(ActionCommand::Play);
        self.apply(Event::StreamBootstrapped);
    }

    /// Turn keypad activity into commands
    ///
    /// Returns a cycle outcome when the keys ended the cycle early.
    fn handle_keys(&mut self, activity: KeyActivity) -> Option<Cycle> {
        if activity.is_press() {
            #[cfg(feature = "defmt")]
            defmt::debug!("key pressed: {}", activity.key);

            match activity.key {
                Key::Up => self.issue(ActionCommand::NextTrack),
                Key::Down => self.issue(ActionCommand::PrevTrack),
                Key::Left => self.issue(ActionCommand::Stop),
                Key::Right => self.issue(if self.state.stopped {
                    ActionCommand::Play
                } else {
                    ActionCommand::Pause
                }),
                Key::Select => self.toggle_source(),
                Key::None => {}
            }
            return None;
        }

        if activity.is_long_press(self.config.long_press_cycles) {
            return Some(self.shut_down());
        }

        if activity.is_held() && activity.key == Key::Left && self.state.source == Source::Cd {
            self.issue(ActionCommand::Eject);
        }
        None
    }

    /// Switch to the other source
    ///
    /// Disc is left stopped; the stream is restarted.
    fn toggle_source(&mut self) {
        match self.state.source {
            Source::Stream => {
                self.issue(ActionCommand::SelectDisc);
                self.issue(ActionCommand::Stop);
            }
            Source::Cd => {
                self.issue(ActionCommand::SelectStream);
                self.issue(ActionCommand::Stop);
                self.issue(ActionCommand::Play);
            }
        }
        self.apply(Event::SourceToggled);

        #[cfg(feature = "defmt")]
        defmt::info!("source now {}", self.state.source);
    }

    /// Power the transport off
    ///
    /// Terminal: after this the controller does no further I/O.
    fn shut_down(&mut self) -> Cycle {
        #[cfg(feature = "defmt")]
        defmt::warn!("shutdown requested");

        if let Err(_e) = self.display.clear() {
            #[cfg(feature = "defmt")]
            defmt::warn!("display clear failed: {}", _e);
        }
        self.show(&[pad_line(SHUTDOWN_BANNER), pad_line("")]);
        self.issue(ActionCommand::Quit);
        self.apply(Event::ShutdownRequested);

        Cycle::Halted {
            hold_ms: self.config.timing.shutdown_hold_ms,
        }
    }

    /// Send one action command and wait out the command gap
    fn issue(&mut self, cmd: ActionCommand) {
        if let Err(_e) = self.link.send(cmd) {
            #[cfg(feature = "defmt")]
            defmt::warn!("send {} failed: {}", cmd, _e);
        }
        self.delay.delay_ms(self.config.timing.command_gap_ms);
    }

    /// Query the transport, folding link errors into a silent reply
    fn query<const N: usize>(&mut self, cmd: InfoCommand) -> Response<N> {
        match self.link.query::<N>(cmd) {
            Ok(response) => response,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("query {} failed: {}", cmd, _e);
                Response::new()
            }
        }
    }

    /// Query a display field, keeping the old value on a stale or noisy reply
    fn refresh<const N: usize>(&mut self, cmd: InfoCommand) {
        let response: Response<N> = self.query(cmd);
        if let Some(text) = response.informative_text(cmd) {
            self.fields.set(cmd, text);
        }
    }

    fn show(&mut self, lines: &[Line; 2]) {
        if let Err(_e) = self.display.show_lines(lines) {
            #[cfg(feature = "defmt")]
            defmt::warn!("display write failed: {}", _e);
        }
    }

    fn apply(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Last informative display fields
    pub fn fields(&self) -> &DisplayFields {
        &self.fields
    }

    /// Borrow the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Borrow the keypad
    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }
}
