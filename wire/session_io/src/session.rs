//! Session transport contracts.

use std::time::Duration;

use crate::error::SessionError;

/// Completion state of a session transfer.
///
/// Asynchronous sessions may report `Pending` for a transfer still in
/// flight. The typed adapters only stop on the error channel and treat both
/// states as acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Complete,
    Pending,
}

/// Receiving side of a byte-oriented session.
pub trait Inbound {
    /// Bytes currently queued for reading.
    fn input_bytes_available(&self) -> usize;

    /// Fills `rx` from the session, blocking for at most `timeout`. A zero
    /// timeout means do not block. Returns `Transfer::Complete` only when
    /// the whole span was populated.
    fn request(&mut self, rx: &mut [u8], timeout: Duration) -> Result<Transfer, SessionError>;
}

/// Transmitting side of a byte-oriented session.
pub trait Outbound {
    /// Bytes of space currently available for writing.
    fn output_bytes_available(&self) -> usize;

    /// Posts `tx` to the session, blocking for at most `timeout`. A zero
    /// timeout means do not block.
    fn post(&mut self, tx: &[u8], timeout: Duration) -> Result<Transfer, SessionError>;
}

impl<S: Inbound + ?Sized> Inbound for &mut S {
    fn input_bytes_available(&self) -> usize {
        (**self).input_bytes_available()
    }

    fn request(&mut self, rx: &mut [u8], timeout: Duration) -> Result<Transfer, SessionError> {
        (**self).request(rx, timeout)
    }
}

impl<S: Outbound + ?Sized> Outbound for &mut S {
    fn output_bytes_available(&self) -> usize {
        (**self).output_bytes_available()
    }

    fn post(&mut self, tx: &[u8], timeout: Duration) -> Result<Transfer, SessionError> {
        (**self).post(tx, timeout)
    }
}
