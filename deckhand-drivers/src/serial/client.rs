//! Serial command client
//!
//! Sends one command byte, waits for the transport to answer, then drains
//! whatever arrived. The transport never acknowledges anything, so the
//! settle wait is the only thing standing between a request and an empty
//! read.

use embedded_hal::delay::DelayNs;

use deckhand_core::config::SettleTime;
use deckhand_core::traits::{Transport, TransportError};
use deckhand_hal::uart::{UartRx, UartTx};
use deckhand_protocol::{ActionCommand, InfoCommand, Response};

/// Bytes pulled from the UART per read
const CHUNK: usize = 16;

/// Request/response client over a UART
pub struct SerialCommandClient<U, D> {
    uart: U,
    delay: D,
    settle: SettleTime,
}

impl<U, D> SerialCommandClient<U, D>
where
    U: UartTx + UartRx,
    D: DelayNs,
{
    /// Create a client
    pub fn new(uart: U, delay: D, settle: SettleTime) -> Self {
        Self {
            uart,
            delay,
            settle,
        }
    }

    /// Discard anything already waiting on the line
    ///
    /// Returns the number of bytes thrown away.
    pub fn drain(&mut self) -> Result<usize, TransportError> {
        let mut discarded = 0;
        let mut chunk = [0u8; CHUNK];
        loop {
            let n = self
                .uart
                .read_available(&mut chunk)
                .map_err(|_| TransportError::Read)?;
            if n == 0 {
                return Ok(discarded);
            }
            discarded += n;
        }
    }

    /// Give back the UART and delay
    pub fn release(self) -> (U, D) {
        (self.uart, self.delay)
    }

    /// Write one command byte and wait for a reply of up to `max_len` bytes
    fn request(&mut self, byte: u8, max_len: usize) -> Result<(), TransportError> {
        self.uart
            .write_blocking(&[byte])
            .map_err(|_| TransportError::Write)?;
        self.uart.flush().map_err(|_| TransportError::Write)?;
        self.delay.delay_us(self.settle.for_reply(max_len));
        Ok(())
    }

    /// Drain everything available into a reply buffer
    ///
    /// CR/LF do not end the drain; the buffer strips them.
    fn collect<const N: usize>(&mut self) -> Result<Response<N>, TransportError> {
        let mut response = Response::new();
        let mut chunk = [0u8; CHUNK];
        loop {
            let n = self
                .uart
                .read_available(&mut chunk)
                .map_err(|_| TransportError::Read)?;
            if n == 0 {
                return Ok(response);
            }
            response.extend(&chunk[..n]);
        }
    }
}

impl<U, D> Transport for SerialCommandClient<U, D>
where
    U: UartTx + UartRx,
    D: DelayNs,
{
    fn send(&mut self, cmd: ActionCommand) -> Result<(), TransportError> {
        self.request(cmd.to_byte(), 0)?;
        // Actions have no reply worth keeping; clear any echo so it cannot
        // leak into the next query.
        let _discarded = self.drain()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("sent {} ({=usize} stray bytes)", cmd, _discarded);
        Ok(())
    }

    fn query<const N: usize>(&mut self, cmd: InfoCommand) -> Result<Response<N>, TransportError> {
        self.request(cmd.to_byte(), cmd.max_len())?;
        let response = self.collect::<N>()?;

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "query {} -> {=usize} bytes: {=str}",
            cmd,
            response.byte_count(),
            response.as_str()
        );
        Ok(response)
    }
}
