//! UUIDv7 generator.

use super::with_rand08::OsRandSource;
use super::{random_u16, Generate, RandSource, StdSystemTime, TimeSource};
use crate::{GenerateError, Uuid};

const MAX_COUNTER: u16 = (1 << 12) - 1;
const MAX_UINT62: u64 = (1 << 62) - 1;

/// Represents a UUIDv7 generator that encapsulates a 12-bit counter and guarantees the monotonic
/// order of UUIDs generated within the same millisecond.
///
/// The counter starts at zero every millisecond and is incremented by one for each UUID. When all
/// 4095 counter values of a millisecond have been used, the remaining UUIDs of that millisecond
/// carry a random 12-bit value instead, so their order is no longer guaranteed.
///
/// The generator is not synchronized by itself. Share it through
/// [`SharedGenerator`](crate::SharedGenerator) or a [`Mutex`](std::sync::Mutex) to guarantee the
/// process-wide order.
///
/// # Examples
///
/// ```rust
/// use std::{sync, thread};
/// use uuidkit::V7Generator;
///
/// let g: sync::Mutex<V7Generator> = Default::default();
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = &g;
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate().unwrap(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Generator<R = OsRandSource, T = StdSystemTime> {
    last_millis: u64,
    counter: u16,
    rng: R,
    time: T,
}

impl<R: RandSource, T: TimeSource> V7Generator<R, T> {
    /// Creates a generator instance.
    pub const fn new(rng: R, time: T) -> Self {
        Self {
            last_millis: 0,
            counter: 0,
            rng,
            time,
        }
    }

    /// Generates a new UUIDv7 object from the current timestamp.
    pub fn generate(&mut self) -> Result<Uuid, GenerateError> {
        let unix_ts_ms = self.time.unix_time().as_millis() as u64;
        self.generate_core(unix_ts_ms)
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// The counter is advanced before any random bits are drawn, so a call that fails with
    /// [`GenerateError::EntropyUnavailable`] may still have consumed a counter value.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit integer.
    pub fn generate_core(&mut self, unix_ts_ms: u64) -> Result<Uuid, GenerateError> {
        assert!(
            unix_ts_ms < 1 << 48,
            "`unix_ts_ms` must be a 48-bit integer"
        );

        if unix_ts_ms != self.last_millis {
            self.last_millis = unix_ts_ms;
            self.counter = 0;
        }

        let rand_a = if self.counter < MAX_COUNTER {
            self.counter += 1;
            self.counter - 1
        } else {
            log::trace!("counter exhausted at {}; using random bits", unix_ts_ms);
            random_u16(&mut self.rng)? & MAX_COUNTER
        };

        let mut tail = [0u8; 8];
        self.rng.try_fill_bytes(&mut tail)?;
        let rand_b = u64::from_be_bytes(tail) & MAX_UINT62;

        Ok(Uuid::from_fields_v7(unix_ts_ms, rand_a, rand_b))
    }
}

impl<R: RandSource, T: TimeSource> Generate for V7Generator<R, T> {
    fn generate(&mut self) -> Result<Uuid, GenerateError> {
        V7Generator::generate(self)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv7 result for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuidkit::V7Generator;
///
/// <V7Generator>::default()
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e.unwrap()));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for V7Generator<R, T> {
    type Item = Result<Uuid, GenerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> std::iter::FusedIterator for V7Generator<R, T> {}
