//! Error types reported by the generators.

use std::{error, fmt, sync::Arc};

/// Error reported by a [`RandSource`](crate::RandSource) that failed to fill a buffer.
///
/// The underlying error is shared, so cloning this type is cheap and every clone reports the same
/// source.
#[derive(Clone, Debug)]
pub struct EntropyError(Arc<dyn error::Error + Send + Sync>);

impl EntropyError {
    /// Creates an error from an arbitrary error payload.
    pub fn new<E: Into<Box<dyn error::Error + Send + Sync>>>(err: E) -> Self {
        Self(Arc::from(err.into()))
    }
}

impl From<rand::Error> for EntropyError {
    fn from(src: rand::Error) -> Self {
        Self::new(src)
    }
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "random number source failed: {}", self.0)
    }
}

impl error::Error for EntropyError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&*self.0)
    }
}

/// Error generating a UUID.
///
/// An error return means no UUID was produced by the call.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum GenerateError {
    /// The random number source could not fill a requested buffer.
    EntropyUnavailable(EntropyError),

    /// No usable network interface was found and the random node fallback failed.
    NodeResolution(EntropyError),

    /// The shared generator could not be constructed. This outcome is cached, so every call
    /// through the same shared generator reports the same error.
    Initialization(Box<GenerateError>),

    /// The clock did not advance within the configured number of wait iterations after the clock
    /// sequence was exhausted.
    ClockStalled {
        /// The number of iterations waited.
        attempts: u32,
    },
}

impl From<EntropyError> for GenerateError {
    fn from(src: EntropyError) -> Self {
        Self::EntropyUnavailable(src)
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntropyUnavailable(err) => write!(f, "entropy unavailable: {}", err),
            Self::NodeResolution(err) => write!(f, "could not resolve node identifier: {}", err),
            Self::Initialization(err) => write!(f, "could not initialize generator: {}", err),
            Self::ClockStalled { attempts } => write!(
                f,
                "clock did not advance after {} wait iterations",
                attempts
            ),
        }
    }
}

impl error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::EntropyUnavailable(err) | Self::NodeResolution(err) => Some(err),
            Self::Initialization(err) => Some(&**err),
            Self::ClockStalled { .. } => None,
        }
    }
}
