//! Integration with `rand` (v0.8) crate.

use rand::rngs::OsRng;
use rand::RngCore;

use super::RandSource;
use crate::EntropyError;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// Failures are taken from [`RngCore::try_fill_bytes`], so only generators that can actually fail,
/// such as [`OsRng`], ever report [`EntropyError`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.0.try_fill_bytes(dest).map_err(EntropyError::from)
    }
}

/// The random number source used by default: the operating system's secure generator.
pub type OsRandSource = Adapter<OsRng>;
