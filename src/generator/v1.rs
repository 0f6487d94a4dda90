//! UUIDv1 generator.

use std::{thread, time};

use super::node::{self, InterfaceSource, NodeId, SystemInterfaces};
use super::with_rand08::OsRandSource;
use super::{random_u16, Generate, RandSource, StdSystemTime, TimeSource};
use crate::{GenerateError, Uuid};

/// The number of 100-nanosecond intervals between 1582-10-15 and 1970-01-01.
pub const GREGORIAN_OFFSET: u64 = 122_192_928_000_000_000;

const CLOCK_SEQ_MASK: u16 = 0x3fff;

/// The pause between clock readings while waiting for a new tick.
const WAIT_INTERVAL: time::Duration = time::Duration::from_micros(1);

/// Represents a UUIDv1 generator that combines a Gregorian-epoch timestamp, a clock sequence, and
/// a node identifier.
///
/// The clock sequence is randomized whenever the timestamp moves forward, incremented when the
/// clock moves backward or repeats a tick, and, once 2^14 UUIDs have been generated within a single
/// tick, the generator waits for the clock to advance. The default generator never gives up
/// waiting; use [`set_wait_limit`](Self::set_wait_limit) to bound the wait.
///
/// The generator is not synchronized by itself. Share it through
/// [`SharedGenerator`](crate::SharedGenerator) or a [`Mutex`](std::sync::Mutex) to serialize
/// calls from multiple threads.
///
/// # Examples
///
/// ```rust
/// use uuidkit::V1Generator;
///
/// let mut g = V1Generator::try_default()?;
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), Some(1));
/// # Ok::<(), uuidkit::GenerateError>(())
/// ```
#[derive(Clone, Debug)]
pub struct V1Generator<R = OsRandSource, T = StdSystemTime> {
    last_timestamp: u64,
    clock_seq: u16,
    node: NodeId,
    wait_limit: Option<u32>,
    rng: R,
    time: T,
}

impl V1Generator {
    /// Creates a generator with the operating system's random source, the system clock, and a node
    /// identifier resolved from the host's network interfaces.
    pub fn try_default() -> Result<Self, GenerateError> {
        Self::try_new(OsRandSource::default(), StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> V1Generator<R, T> {
    /// Creates a generator, resolving the node identifier from the host's network interfaces.
    pub fn try_new(rng: R, time: T) -> Result<Self, GenerateError> {
        Self::try_with_interfaces(&SystemInterfaces, rng, time)
    }

    /// Creates a generator, resolving the node identifier from the interfaces `source` reports.
    pub fn try_with_interfaces<I>(source: &I, mut rng: R, time: T) -> Result<Self, GenerateError>
    where
        I: InterfaceSource + ?Sized,
    {
        let node = node::resolve(source, &mut rng)?;
        Self::with_node(node, rng, time)
    }

    /// Creates a generator with a fixed node identifier.
    ///
    /// This seeds the clock sequence, so a failing random source is reported here rather than on
    /// the first call.
    pub fn with_node(node: NodeId, mut rng: R, time: T) -> Result<Self, GenerateError> {
        let clock_seq = random_u16(&mut rng)? & CLOCK_SEQ_MASK;
        Ok(Self {
            last_timestamp: 0,
            clock_seq,
            node,
            wait_limit: None,
            rng,
            time,
        })
    }

    /// Returns the node identifier embedded in every UUID from this generator.
    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// Bounds the number of clock readings taken while waiting for a new tick after the clock
    /// sequence is exhausted. `None`, the default, waits as long as it takes.
    pub fn set_wait_limit(&mut self, limit: Option<u32>) {
        self.wait_limit = limit;
    }

    /// Generates a new UUIDv1 object.
    ///
    /// This is the only place where a call may block for longer than a single clock reading: if
    /// the clock sequence wraps around within one tick, it sleeps in microsecond steps until the
    /// clock advances.
    pub fn generate(&mut self) -> Result<Uuid, GenerateError> {
        let mut timestamp = self.timestamp();

        let clock_seq = if self.last_timestamp == 0 || timestamp > self.last_timestamp {
            self.random_clock_seq()?
        } else if timestamp < self.last_timestamp {
            log::trace!(
                "clock moved backward by {} ticks; incrementing clock sequence",
                self.last_timestamp - timestamp
            );
            (self.clock_seq + 1) & CLOCK_SEQ_MASK
        } else {
            let next = (self.clock_seq + 1) & CLOCK_SEQ_MASK;
            if next != 0 {
                next
            } else {
                log::trace!("clock sequence exhausted; waiting for next tick");
                timestamp = self.wait_for_next_tick()?;
                self.random_clock_seq()?
            }
        };

        self.last_timestamp = timestamp;
        self.clock_seq = clock_seq;
        Ok(Uuid::from_fields_v1(timestamp, clock_seq, self.node))
    }

    /// Returns the current time as 100-nanosecond intervals since 1582-10-15.
    fn timestamp(&mut self) -> u64 {
        let ticks = (self.time.unix_time().as_nanos() / 100) as u64;
        (ticks + GREGORIAN_OFFSET) & ((1 << 60) - 1)
    }

    fn random_clock_seq(&mut self) -> Result<u16, GenerateError> {
        Ok(random_u16(&mut self.rng)? & CLOCK_SEQ_MASK)
    }

    fn wait_for_next_tick(&mut self) -> Result<u64, GenerateError> {
        let mut attempts = 0u32;
        loop {
            if self.wait_limit.is_some_and(|limit| attempts >= limit) {
                return Err(GenerateError::ClockStalled { attempts });
            }
            thread::sleep(WAIT_INTERVAL);
            attempts += 1;
            let timestamp = self.timestamp();
            if timestamp != self.last_timestamp {
                return Ok(timestamp);
            }
        }
    }
}

impl<R: RandSource, T: TimeSource> Generate for V1Generator<R, T> {
    fn generate(&mut self) -> Result<Uuid, GenerateError> {
        V1Generator::generate(self)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv1 result for each call of
/// `next()`.
impl<R: RandSource, T: TimeSource> Iterator for V1Generator<R, T> {
    type Item = Result<Uuid, GenerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> std::iter::FusedIterator for V1Generator<R, T> {}
