//! Status display formatting
//!
//! The front panel is a 16×2 character LCD. Everything shown on it goes
//! through [`format`], so every write is exactly one full row.

pub mod format;

pub use format::{normalize_rate, pad_line, DisplayFields, Line, LCD_COLS, LCD_ROWS};
