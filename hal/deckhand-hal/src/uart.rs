//! UART serial communication abstractions
//!
//! The transport link is half-duplex request/response with no framing, so
//! the receive side needs a non-blocking drain in addition to blocking reads.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Read a byte if one is already buffered
    ///
    /// Returns `Ok(None)` immediately when the receive buffer is empty.
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Read whatever is currently buffered into `buf`
    ///
    /// Never waits for more data. Returns the number of bytes written.
    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut count = 0;
        while count < buf.len() {
            match self.try_read_byte()? {
                Some(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                None => break,
            }
        }
        Ok(count)
    }
}

/// Combined UART interface
///
/// For UARTs that provide both TX and RX on a single peripheral.
pub trait Uart: UartTx + UartRx {}

// Blanket implementation
impl<T: UartTx + UartRx> Uart for T {}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    /// 9600 8N1, the only framing the transport speaks
    fn default() -> Self {
        Self {
            baudrate: 9600,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted<'a> {
        bytes: &'a [u8],
        pos: usize,
    }

    impl UartRx for Scripted<'_> {
        type Error = ();

        fn try_read_byte(&mut self) -> Result<Option<u8>, ()> {
            let byte = self.bytes.get(self.pos).copied();
            if byte.is_some() {
                self.pos += 1;
            }
            Ok(byte)
        }
    }

    #[test]
    fn test_default_is_9600_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 9600);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[test]
    fn test_read_available_stops_when_empty() {
        let mut rx = Scripted {
            bytes: b"abc",
            pos: 0,
        };
        let mut buf = [0u8; 8];
        assert_eq!(rx.read_available(&mut buf), Ok(3));
        assert_eq!(&buf[..3], b"abc");
        assert_eq!(rx.read_available(&mut buf), Ok(0));
    }

    #[test]
    fn test_read_available_respects_buffer() {
        let mut rx = Scripted {
            bytes: b"abcdef",
            pos: 0,
        };
        let mut buf = [0u8; 4];
        assert_eq!(rx.read_available(&mut buf), Ok(4));
        assert_eq!(rx.read_available(&mut buf), Ok(2));
        assert_eq!(&buf[..2], b"ef");
    }
}
