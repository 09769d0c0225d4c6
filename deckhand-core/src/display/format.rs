//! Two-line status formatting

use heapless::String;

use deckhand_protocol::InfoCommand;

/// Characters per LCD row
pub const LCD_COLS: usize = 16;
/// LCD rows
pub const LCD_ROWS: u8 = 2;

/// One full LCD row
pub type Line = String<LCD_COLS>;

const SOURCE_LEN: usize = InfoCommand::Source.max_len();
const MODE_LEN: usize = InfoCommand::Mode.max_len();
const RATE_LEN: usize = InfoCommand::Rate.max_len();
const TIME_LEN: usize = InfoCommand::Track.max_len();

/// Pad or cut `text` to exactly one row
///
/// Non-ASCII characters are shown as `?`; the LCD character ROM has no
/// use for them.
pub fn pad_line(text: &str) -> Line {
    let mut line = Line::new();
    for c in text.chars().take(LCD_COLS) {
        let c = if c.is_ascii() && !c.is_ascii_control() {
            c
        } else {
            '?'
        };
        let _ = line.push(c);
    }
    while line.len() < LCD_COLS {
        let _ = line.push(' ');
    }
    line
}

/// Strip the units suffix from a sample-rate reply
///
/// The transport reports five- or six-digit rates followed by a units
/// letter ("44100Hz", "192000Hz"). Anything without a letter at offset 5
/// or 6 is not a rate and reads as blank.
pub fn normalize_rate(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    let letter_at = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_alphabetic);
    if letter_at(5) {
        &raw[..5]
    } else if letter_at(6) {
        &raw[..6]
    } else {
        ""
    }
}

/// Last informative value of each polled field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayFields {
    pub source: String<SOURCE_LEN>,
    pub mode: String<MODE_LEN>,
    pub rate: String<RATE_LEN>,
    pub time: String<TIME_LEN>,
}

impl DisplayFields {
    /// Create empty fields
    pub const fn new() -> Self {
        Self {
            source: String::new(),
            mode: String::new(),
            rate: String::new(),
            time: String::new(),
        }
    }

    /// Replace the field backing `cmd`
    ///
    /// Returns false for info commands that are not shown.
    pub fn set(&mut self, cmd: InfoCommand, text: &str) -> bool {
        match cmd {
            InfoCommand::Source => replace(&mut self.source, text),
            InfoCommand::Mode => replace(&mut self.mode, text),
            InfoCommand::Rate => replace(&mut self.rate, text),
            InfoCommand::Track => replace(&mut self.time, text),
            _ => return false,
        }
        true
    }

    /// Compose the two rows
    ///
    /// Row 0 is `source mode rate`, row 1 is the time/track field.
    pub fn format_lines(&self) -> [Line; 2] {
        let mut top: String<{ SOURCE_LEN + MODE_LEN + RATE_LEN + 2 }> = String::new();
        let _ = top.push_str(&self.source);
        let _ = top.push(' ');
        let _ = top.push_str(&self.mode);
        let _ = top.push(' ');
        let _ = top.push_str(normalize_rate(&self.rate));

        [pad_line(&top), pad_line(&self.time)]
    }
}

fn replace<const N: usize>(field: &mut String<N>, text: &str) {
    field.clear();
    for c in text.chars() {
        if field.push(c).is_err() {
            break;
        }
    }
}
