//! Transport link trait

use deckhand_protocol::{ActionCommand, InfoCommand, Response};

/// Errors raised by the serial link itself
///
/// A transport that simply does not answer is not an error; it shows up as
/// a silent [`Response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The command byte could not be written
    Write,
    /// The receive side reported a fault (overrun, framing, ...)
    Read,
}

/// Request/response access to the transport
///
/// Calls are strictly sequential; each one owns the link until its reply
/// has been drained.
pub trait Transport {
    /// Send an action command
    fn send(&mut self, cmd: ActionCommand) -> Result<(), TransportError>;

    /// Send an info command and collect the reply
    fn query<const N: usize>(&mut self, cmd: InfoCommand) -> Result<Response<N>, TransportError>;
}
