//! Command bytes understood by the transport

/// Commands that change what the transport is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionCommand {
    /// Bipolar output
    Bipolar,
    /// Alternate output mode
    AltMode,
    /// Switch to USB input
    Usb,
    /// Select the network stream source
    SelectStream,
    /// Select the disc source
    SelectDisc,
    /// Test tone
    Tone,
    /// Noise generator
    Noise,
    Play,
    Stop,
    Eject,
    CloseTray,
    NextTrack,
    PrevTrack,
    FastForward,
    Rewind,
    Pause,
    /// Power the transport down
    Quit,
    /// Jump straight to track 1..=10 (`0` on the wire is track 10)
    Track(u8),
}

// Wire format values
const CMD_BIPOLAR: u8 = b'b';
const CMD_ALT_MODE: u8 = b'o';
const CMD_USB: u8 = b'w';
const CMD_STREAM: u8 = b'z';
const CMD_DISC: u8 = b'd';
const CMD_TONE: u8 = b't';
const CMD_NOISE: u8 = b'n';
const CMD_PLAY: u8 = b'p';
const CMD_STOP: u8 = b's';
const CMD_EJECT: u8 = b'e';
const CMD_CLOSE: u8 = b'c';
const CMD_NEXT: u8 = b'>';
const CMD_PREV: u8 = b'<';
const CMD_FFWD: u8 = b'.';
const CMD_REWIND: u8 = b',';
const CMD_PAUSE: u8 = b'/';
const CMD_QUIT: u8 = b'q';

/// Highest track reachable with a direct-select command
pub const MAX_DIRECT_TRACK: u8 = 10;

impl ActionCommand {
    /// Parse a command from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        let cmd = match byte {
            CMD_BIPOLAR => ActionCommand::Bipolar,
            CMD_ALT_MODE => ActionCommand::AltMode,
            CMD_USB => ActionCommand::Usb,
            CMD_STREAM => ActionCommand::SelectStream,
            CMD_DISC => ActionCommand::SelectDisc,
            CMD_TONE => ActionCommand::Tone,
            CMD_NOISE => ActionCommand::Noise,
            CMD_PLAY => ActionCommand::Play,
            CMD_STOP => ActionCommand::Stop,
            CMD_EJECT => ActionCommand::Eject,
            CMD_CLOSE => ActionCommand::CloseTray,
            CMD_NEXT => ActionCommand::NextTrack,
            CMD_PREV => ActionCommand::PrevTrack,
            CMD_FFWD => ActionCommand::FastForward,
            CMD_REWIND => ActionCommand::Rewind,
            CMD_PAUSE => ActionCommand::Pause,
            CMD_QUIT => ActionCommand::Quit,
            b'0' => ActionCommand::Track(10),
            b'1'..=b'9' => ActionCommand::Track(byte - b'0'),
            _ => return None,
        };
        Some(cmd)
    }

    /// Convert to wire format byte
    ///
    /// Out-of-range track numbers are clamped into 1..=10.
    pub fn to_byte(self) -> u8 {
        match self {
            ActionCommand::Bipolar => CMD_BIPOLAR,
            ActionCommand::AltMode => CMD_ALT_MODE,
            ActionCommand::Usb => CMD_USB,
            ActionCommand::SelectStream => CMD_STREAM,
            ActionCommand::SelectDisc => CMD_DISC,
            ActionCommand::Tone => CMD_TONE,
            ActionCommand::Noise => CMD_NOISE,
            ActionCommand::Play => CMD_PLAY,
            ActionCommand::Stop => CMD_STOP,
            ActionCommand::Eject => CMD_EJECT,
            ActionCommand::CloseTray => CMD_CLOSE,
            ActionCommand::NextTrack => CMD_NEXT,
            ActionCommand::PrevTrack => CMD_PREV,
            ActionCommand::FastForward => CMD_FFWD,
            ActionCommand::Rewind => CMD_REWIND,
            ActionCommand::Pause => CMD_PAUSE,
            ActionCommand::Quit => CMD_QUIT,
            ActionCommand::Track(n) => match n.clamp(1, MAX_DIRECT_TRACK) {
                MAX_DIRECT_TRACK => b'0',
                n => b'0' + n,
            },
        }
    }
}

/// Status requests; each replies with one line of ASCII text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InfoCommand {
    /// Elapsed time / track number
    Track,
    /// Transport mode ("play", "stop", ...)
    Mode,
    /// Active source name
    Source,
    /// Firmware version banner
    Version,
    /// Output mode
    Output,
    /// Current file name (stream source)
    Filename,
    /// Sample rate with a units suffix, e.g. "44100Hz"
    Rate,
}

const INFO_TRACK: u8 = b'T';
const INFO_MODE: u8 = b'M';
const INFO_SOURCE: u8 = b'S';
const INFO_VERSION: u8 = b'V';
const INFO_OUTPUT: u8 = b'O';
const INFO_FILENAME: u8 = b'F';
const INFO_RATE: u8 = b'R';

impl InfoCommand {
    /// Parse a request from its wire byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            INFO_TRACK => Some(InfoCommand::Track),
            INFO_MODE => Some(InfoCommand::Mode),
            INFO_SOURCE => Some(InfoCommand::Source),
            INFO_VERSION => Some(InfoCommand::Version),
            INFO_OUTPUT => Some(InfoCommand::Output),
            INFO_FILENAME => Some(InfoCommand::Filename),
            INFO_RATE => Some(InfoCommand::Rate),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            InfoCommand::Track => INFO_TRACK,
            InfoCommand::Mode => INFO_MODE,
            InfoCommand::Source => INFO_SOURCE,
            InfoCommand::Version => INFO_VERSION,
            InfoCommand::Output => INFO_OUTPUT,
            InfoCommand::Filename => INFO_FILENAME,
            InfoCommand::Rate => INFO_RATE,
        }
    }

    /// Maximum useful reply length for this field, terminators excluded
    pub const fn max_len(self) -> usize {
        match self {
            InfoCommand::Version | InfoCommand::Track | InfoCommand::Rate => 14,
            InfoCommand::Mode | InfoCommand::Source | InfoCommand::Output => 6,
            InfoCommand::Filename => 20,
        }
    }

    /// Smallest drained byte count that carries information
    ///
    /// Counts terminators, so a bare CR LF is below the bar for every field
    /// except the version probe, where any byte proves the transport is up.
    pub const fn informative_len(self) -> usize {
        match self {
            InfoCommand::Version => 1,
            _ => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_bytes() {
        assert_eq!(ActionCommand::Play.to_byte(), b'p');
        assert_eq!(ActionCommand::Stop.to_byte(), b's');
        assert_eq!(ActionCommand::SelectStream.to_byte(), b'z');
        assert_eq!(ActionCommand::SelectDisc.to_byte(), b'd');
        assert_eq!(ActionCommand::Pause.to_byte(), b'/');
        assert_eq!(ActionCommand::NextTrack.to_byte(), b'>');
        assert_eq!(ActionCommand::PrevTrack.to_byte(), b'<');
        assert_eq!(ActionCommand::Quit.to_byte(), b'q');
        assert_eq!(ActionCommand::Eject.to_byte(), b'e');
    }

    #[test]
    fn test_track_select() {
        assert_eq!(ActionCommand::Track(1).to_byte(), b'1');
        assert_eq!(ActionCommand::Track(9).to_byte(), b'9');
        assert_eq!(ActionCommand::Track(10).to_byte(), b'0');
        assert_eq!(ActionCommand::from_byte(b'0'), Some(ActionCommand::Track(10)));
        assert_eq!(ActionCommand::from_byte(b'4'), Some(ActionCommand::Track(4)));
    }

    #[test]
    fn test_track_clamped_on_wire() {
        assert_eq!(ActionCommand::Track(0).to_byte(), b'1');
        assert_eq!(ActionCommand::Track(42).to_byte(), b'0');
    }

    #[test]
    fn test_info_and_action_bytes_disjoint() {
        for byte in 0u8..=127 {
            let action = ActionCommand::from_byte(byte).is_some();
            let info = InfoCommand::from_byte(byte).is_some();
            assert!(!(action && info), "byte {byte} is both");
        }
    }

    #[test]
    fn test_info_limits() {
        assert_eq!(InfoCommand::Version.max_len(), 14);
        assert_eq!(InfoCommand::Mode.max_len(), 6);
        assert_eq!(InfoCommand::Source.max_len(), 6);
        assert_eq!(InfoCommand::Track.max_len(), 14);
        assert_eq!(InfoCommand::Rate.max_len(), 14);
        assert_eq!(InfoCommand::Filename.max_len(), 20);
        assert_eq!(InfoCommand::Version.informative_len(), 1);
        assert_eq!(InfoCommand::Mode.informative_len(), 3);
    }

    #[test]
    fn test_unknown_bytes() {
        assert!(ActionCommand::from_byte(b'X').is_none());
        assert!(InfoCommand::from_byte(b'x').is_none());
        assert_eq!(InfoCommand::from_byte(b'R'), Some(InfoCommand::Rate));
    }
}
