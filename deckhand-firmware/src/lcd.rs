//! HD44780 16×2 character LCD in 4-bit mode
//!
//! Write-only: R/W is tied to ground, so every command is followed by a
//! fixed wait instead of polling the busy flag.

use embassy_rp::gpio::{Level, Output};
use embedded_hal::delay::DelayNs;

use deckhand_core::display::{LCD_COLS, LCD_ROWS};
use deckhand_core::traits::{CharDisplay, DisplayError};

// Instructions
const CLEAR: u8 = 0x01;
const ENTRY_MODE_INCREMENT: u8 = 0x06;
const DISPLAY_ON: u8 = 0x0C;
const FUNCTION_4BIT_2LINE: u8 = 0x28;
const SET_DDRAM: u8 = 0x80;

/// DDRAM address of the first column of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Execution time of ordinary instructions (µs)
const EXEC_US: u32 = 50;
/// Execution time of clear and home (µs)
const CLEAR_US: u32 = 2_000;

/// Four-bit parallel HD44780 driver
pub struct Hd44780<D> {
    rs: Output<'static>,
    en: Output<'static>,
    data: [Output<'static>; 4],
    delay: D,
}

impl<D: DelayNs> Hd44780<D> {
    /// Create the driver and run the power-on init sequence
    ///
    /// `data` is D4..D7 in order.
    pub fn new(
        rs: Output<'static>,
        en: Output<'static>,
        data: [Output<'static>; 4],
        delay: D,
    ) -> Self {
        let mut lcd = Self {
            rs,
            en,
            data,
            delay,
        };
        lcd.init();
        lcd
    }

    fn init(&mut self) {
        self.delay.delay_ms(50);
        self.rs.set_low();

        // Force 8-bit mode three times, then drop to 4-bit
        self.write_nibble(0x03);
        self.delay.delay_us(4_500);
        self.write_nibble(0x03);
        self.delay.delay_us(150);
        self.write_nibble(0x03);
        self.delay.delay_us(EXEC_US);
        self.write_nibble(0x02);
        self.delay.delay_us(EXEC_US);

        self.command(FUNCTION_4BIT_2LINE);
        self.command(DISPLAY_ON);
        self.command(CLEAR);
        self.delay.delay_us(CLEAR_US);
        self.command(ENTRY_MODE_INCREMENT);
    }

    fn command(&mut self, byte: u8) {
        self.rs.set_low();
        self.write_byte(byte);
    }

    fn data_byte(&mut self, byte: u8) {
        self.rs.set_high();
        self.write_byte(byte);
    }

    fn write_byte(&mut self, byte: u8) {
        self.write_nibble(byte >> 4);
        self.write_nibble(byte & 0x0F);
        self.delay.delay_us(EXEC_US);
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_level(Level::from(nibble & (1 << bit) != 0));
        }
        self.en.set_high();
        self.delay.delay_us(1);
        self.en.set_low();
        self.delay.delay_us(1);
    }
}

impl<D: DelayNs> CharDisplay for Hd44780<D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CLEAR);
        self.delay.delay_us(CLEAR_US);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), DisplayError> {
        if usize::from(col) >= LCD_COLS || row >= LCD_ROWS {
            return Err(DisplayError::InvalidPosition);
        }
        self.command(SET_DDRAM | (ROW_OFFSETS[usize::from(row)] + col));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        for byte in text.bytes() {
            self.data_byte(if byte.is_ascii() { byte } else { b'?' });
        }
        Ok(())
    }
}
