//! Typed read adapter.

use std::marker::PhantomData;
use std::time::Duration;

use packet_codec::{Decode, Footprint};

use crate::error::SessionError;
use crate::session::Inbound;

/// Reads whole values of `T` from an [`Inbound`] session.
///
/// Each [`get`](Ingress::get) is one transfer: the adapter fails up front if
/// the session holds fewer than `T::SIZE_BYTES` bytes, then zeroes a scratch
/// buffer, issues a single request, and decodes the result in place.
#[derive(Debug)]
pub struct Ingress<T, S> {
    session: S,
    _value: PhantomData<fn() -> T>,
}

impl<T, S> Ingress<T, S>
where
    T: Decode + Footprint,
    S: Inbound,
{
    /// Binds the adapter to an inbound session.
    pub fn new(session: S) -> Self {
        Self {
            session,
            _value: PhantomData,
        }
    }

    /// Releases the underlying session.
    pub fn into_session(self) -> S {
        self.session
    }

    /// Reads one `T` from the session, blocking for at most `timeout`.
    ///
    /// `value` is decoded in place so write-once fields keep the contents
    /// they were constructed with. On failure `value` is unspecified.
    pub fn get(&mut self, value: &mut T, timeout: Duration) -> Result<(), SessionError> {
        let needed = T::SIZE_BYTES;
        let available = self.session.input_bytes_available();
        if available < needed {
            return Err(SessionError::Unavailable { needed, available });
        }

        let mut scratch = vec![0u8; needed];
        self.session.request(&mut scratch, timeout)?;

        let mut cursor = 0;
        value.decode(&scratch, &mut cursor)?;
        Ok(())
    }
}
