//! Character display trait for the 16×2 LCD

use crate::display::Line;

/// Errors that can occur driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or pin failure
    Communication,
    /// Cursor outside the character grid
    InvalidPosition,
}

/// Trait for a character-cell display
///
/// The controller only ever moves the cursor and writes text.
pub trait CharDisplay {
    /// Clear the entire screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor
    ///
    /// - `col`: Column (0-15)
    /// - `row`: Row (0-1)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError>;

    /// Write ASCII text at the cursor
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;
}

/// Helper trait for whole-screen writes
pub trait DisplayExt: CharDisplay {
    /// Overwrite both rows
    fn show_lines(&mut self, lines: &[Line; 2]) -> Result<(), DisplayError> {
        for (row, line) in (0u8..).zip(lines.iter()) {
            self.set_cursor(0, row)?;
            self.write_text(line)?;
        }
        Ok(())
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay> DisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::pad_line;

    #[derive(Default)]
    struct Grid {
        rows: [std::string::String; 2],
        cursor: (u8, u8),
    }

    impl CharDisplay for Grid {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.rows = Default::default();
            self.cursor = (0, 0);
            Ok(())
        }

        fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
            self.cursor = (col, row);
            Ok(())
        }

        fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
            let row = &mut self.rows[self.cursor.1 as usize];
            row.truncate(self.cursor.0 as usize);
            row.push_str(text);
            Ok(())
        }
    }

    #[test]
    fn test_show_lines() {
        let mut grid = Grid::default();
        grid.show_lines(&[pad_line("top"), pad_line("bottom")]).unwrap();
        assert_eq!(grid.rows[0].trim_end(), "top");
        assert_eq!(grid.rows[1].trim_end(), "bottom");
        assert_eq!(grid.rows[0].len(), 16);
    }
}
