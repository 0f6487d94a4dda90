//! UUID generators and the sources of randomness and time they draw from.

use std::time;

use crate::{EntropyError, GenerateError, Uuid};

pub mod node;
pub mod v1;
pub mod v4;
pub mod v7;
pub mod with_rand08;


/// A trait that defines the random number generator interface for the UUID generators.
///
/// Implementations must be cryptographically secure. A failure is reported to the caller of the
/// generator as [`GenerateError::EntropyUnavailable`] and is never retried.
pub trait RandSource {
    /// Fills `dest` entirely with random data.
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<T: RandSource + ?Sized> RandSource for &mut T {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).try_fill_bytes(dest)
    }
}

/// A trait that defines the clock interface for the UUID generators.
pub trait TimeSource {
    /// Returns the time elapsed since the Unix epoch.
    fn unix_time(&mut self) -> time::Duration;
}

/// The default [`TimeSource`] that reads [`SystemTime`](time::SystemTime).
///
/// A system clock set before the Unix epoch reads as the epoch itself.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_time(&mut self) -> time::Duration {
        time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)
            .unwrap_or_default()
    }
}

/// A stateful UUID generator that can be shared through [`SharedGenerator`](crate::SharedGenerator).
pub trait Generate {
    /// Generates a new UUID.
    fn generate(&mut self) -> Result<Uuid, GenerateError>;
}

/// Draws a random 16-bit integer from `rng`.
pub(crate) fn random_u16<R: RandSource + ?Sized>(rng: &mut R) -> Result<u16, EntropyError> {
    let mut buffer = [0u8; 2];
    rng.try_fill_bytes(&mut buffer)?;
    Ok(u16::from_be_bytes(buffer))
}
