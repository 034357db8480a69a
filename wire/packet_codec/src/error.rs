#[cfg(feature = "std")]
use thiserror::Error;

/// Codec errors.
///
/// Running out of buffer is the only way an encode or decode can fail; the
/// cursor handed in by the caller is never advanced on failure.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[cfg_attr(
        feature = "std",
        error("buffer capacity exceeded: {required} bit(s) required, {capacity} available")
    )]
    CapacityExceeded { required: usize, capacity: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::CapacityExceeded { required, capacity } => write!(
                f,
                "buffer capacity exceeded: {} bit(s) required, {} available",
                required, capacity
            ),
        }
    }
}
