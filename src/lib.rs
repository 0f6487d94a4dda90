//! Generators and a parser for RFC 4122 / RFC 9562 UUIDs of version 1, 4, and 7
//!
//! ```rust
//! use uuidkit::{uuid1, uuid4, uuid7};
//!
//! let uuid = uuid7()?;
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! println!("{}", uuid1()?); // e.g. "73330f87-d1ff-11ec-bfff-001b638445e6"
//! println!("{}", uuid4()?); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! # Ok::<(), uuidkit::GenerateError>(())
//! ```
//!
//! Every generator reports failures as [`GenerateError`] values instead of panicking: the
//! operating system's random source may be unavailable, and the node identifier of UUIDv1 may not
//! be resolvable.
//!
//! # Field and bit layout
//!
//! UUIDv7 identifiers have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        counter        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              rand                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `counter` field starts at zero every millisecond and is incremented
//!   by one for each new ID generated within the same millisecond. Once 4095 IDs
//!   have been generated in a millisecond, the field is filled with random bits.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 62 `rand` bits are filled with a cryptographically strong random
//!   number.
//!
//! UUIDv1 identifiers carry a 60-bit count of 100-nanosecond intervals since
//! 1582-10-15, split into `time_low`, `time_mid`, and `time_hi` fields, followed by
//! a 14-bit clock sequence and the 48-bit node identifier:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |        time_hi        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! The node identifier is the hardware address of the first eligible network
//! interface, or a random value with the multicast bit set if there is none.
//!
//! # Parsing
//!
//! [`Uuid::parse_str`] accepts the 32-digit simple form, the 36-character hyphenated
//! form, the 38-character braced form, and the 45-character URN form, with hex
//! digits of either case:
//!
//! ```rust
//! let a: uuidkit::Uuid = "017f22e2-79b0-7cc3-98c4-dc0c0c07398f".parse()?;
//! let b: uuidkit::Uuid = "{017F22E2-79B0-7CC3-98C4-DC0C0C07398F}".parse()?;
//! let c: uuidkit::Uuid = "urn:uuid:017f22e2-79b0-7cc3-98c4-dc0c0c07398f".parse()?;
//! assert_eq!(a, b);
//! assert_eq!(a, c);
//! # Ok::<(), uuidkit::ParseError>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default generators behind [`uuid1()`],
//!   [`uuid4()`], and [`uuid7()`].
//! - `mac_address`: enables hardware address discovery for UUIDv1. Without this
//!   feature, UUIDv1 generators always use a random node identifier.
//!
//! Optional features:
//!
//! - `serde`: enables serialization/deserialization of [`Uuid`] via serde.
//! - `uuid`: enables conversion from/to the [uuid] crate's `Uuid` type.
//!
//! [uuid]: https://crates.io/crates/uuid

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod hex;
mod id;
mod parse;
mod shared;

pub use error::{EntropyError, GenerateError};
pub use id::{Uuid, Variant};
pub use parse::ParseError;
pub use shared::SharedGenerator;

pub mod generator;
pub use generator::v1::V1Generator;
pub use generator::v4::generate_v4;
pub use generator::v7::V7Generator;
pub use generator::with_rand08::OsRandSource;
pub use generator::{Generate, RandSource, StdSystemTime, TimeSource};

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid1, uuid4, uuid7};
