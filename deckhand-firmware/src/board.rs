//! RP2040 peripheral adapters
//!
//! Bridges the Embassy drivers to the deckhand-hal traits the
//! board-agnostic crates are written against. Pin assignments live in
//! `main.rs`.

use embassy_rp::adc::{self, Adc, Blocking, Channel};
use embedded_io::{Read, ReadReady, Write};

use deckhand_hal::adc::{to_10bit, AnalogInput};
use deckhand_hal::uart::{UartRx, UartTx};

/// Resolution of the RP2040 ADC
const ADC_BITS: u8 = 12;

/// Byte-level serial port over any blocking `embedded-io` UART
///
/// Used with the Embassy buffered UART, whose interrupt-driven ring buffer
/// collects the reply while the controller waits out the settle time.
pub struct SerialPort<P> {
    port: P,
}

impl<P> SerialPort<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }
}

impl<P: Write> UartTx for SerialPort<P> {
    type Error = P::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.port.write_all(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.port.flush()
    }
}

impl<P: Read + ReadReady> UartRx for SerialPort<P> {
    type Error = P::Error;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.port.read_ready()? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        match self.port.read(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

/// Keypad ladder on one ADC channel
pub struct KeypadAdc {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl KeypadAdc {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for KeypadAdc {
    type Error = adc::Error;

    fn read(&mut self) -> Result<u16, Self::Error> {
        let raw = self.adc.blocking_read(&mut self.channel)?;
        Ok(to_10bit(raw, ADC_BITS))
    }
}
