//! UUIDv4 generation.

use super::RandSource;
use crate::{GenerateError, Uuid};

/// Generates a UUIDv4 object from 128 bits drawn from `rng`.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{generate_v4, OsRandSource};
///
/// let uuid = generate_v4(&mut OsRandSource::default())?;
/// assert_eq!(uuid.version(), Some(4));
/// # Ok::<(), uuidkit::GenerateError>(())
/// ```
pub fn generate_v4<R: RandSource + ?Sized>(rng: &mut R) -> Result<Uuid, GenerateError> {
    let mut bytes = [0u8; 16];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(Uuid::from_random_v4(bytes))
}
