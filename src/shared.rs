//! Thread-safe wrapper with exactly-once lazy construction.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::generator::Generate;
use crate::{GenerateError, Uuid};

/// A generator shared among threads that is constructed on first use.
///
/// The first call runs the constructor; its outcome, success or failure, is kept for the lifetime
/// of this object and construction is never retried. Every generation call holds the lock for its
/// whole duration, so calls are linearized and see a single timestamp and counter state.
///
/// This type is meant to be owned by the composition root of an application (or placed in a
/// `static`) and handed to callers by reference.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{SharedGenerator, V1Generator};
///
/// static V1: SharedGenerator<V1Generator> = SharedGenerator::new(V1Generator::try_default);
///
/// let uuid = V1.generate()?;
/// assert_eq!(uuid.version(), Some(1));
/// # Ok::<(), uuidkit::GenerateError>(())
/// ```
#[derive(Debug)]
pub struct SharedGenerator<G> {
    cell: OnceLock<Result<Mutex<G>, GenerateError>>,
    init: fn() -> Result<G, GenerateError>,
}

impl<G: Generate> SharedGenerator<G> {
    /// Creates an uninitialized shared generator that runs `init` upon first use.
    pub const fn new(init: fn() -> Result<G, GenerateError>) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Generates a new UUID, constructing the generator if this is the first call.
    ///
    /// Returns [`GenerateError::Initialization`] wrapping the cached construction error if the
    /// generator could not be constructed.
    pub fn generate(&self) -> Result<Uuid, GenerateError> {
        self.lock()?.generate()
    }

    /// Returns an exclusive handle to the inner generator, constructing it if necessary.
    pub fn lock(&self) -> Result<MutexGuard<'_, G>, GenerateError> {
        let inner = self
            .cell
            .get_or_init(|| (self.init)().map(Mutex::new))
            .as_ref()
            .map_err(|err| GenerateError::Initialization(Box::new(err.clone())))?;
        // a panic cannot leave the generator state half-written
        Ok(inner.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
