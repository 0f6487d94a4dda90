//! Default generators and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use crate::generator::v4::generate_v4;
use crate::generator::with_rand08::OsRandSource;
use crate::{GenerateError, SharedGenerator, Uuid, V1Generator, V7Generator};

static V1: SharedGenerator<V1Generator> = SharedGenerator::new(V1Generator::try_default);

static V7: SharedGenerator<V7Generator> = SharedGenerator::new(|| Ok(Default::default()));

/// Generates a UUIDv1 object.
///
/// This function employs a process-wide generator that is constructed on the first call. The node
/// identifier is resolved once at that time; if construction fails, the same error is returned by
/// every subsequent call, wrapped in [`GenerateError::Initialization`].
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid1()?;
/// println!("{}", uuid); // e.g., "73330f87-d1ff-11ec-bfff-001b638445e6"
/// # Ok::<(), uuidkit::GenerateError>(())
/// ```
pub fn uuid1() -> Result<Uuid, GenerateError> {
    V1.generate()
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid4()?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// # Ok::<(), uuidkit::GenerateError>(())
/// ```
pub fn uuid4() -> Result<Uuid, GenerateError> {
    generate_v4(&mut OsRandSource::default())
}

/// Generates a UUIDv7 object.
///
/// This function employs a process-wide generator and guarantees the monotonic order of up to 4095
/// UUIDs generated within the same millisecond.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid7()?;
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuidkit::uuid7()?.to_string();
/// # Ok::<(), uuidkit::GenerateError>(())
/// ```
pub fn uuid7() -> Result<Uuid, GenerateError> {
    V7.generate()
}

#[cfg(test)]
mod tests_v1 {
    use super::uuid1;
    use crate::Variant;

    const N_SAMPLES: usize = 20_000;
    thread_local!(static SAMPLES: Vec<String> =
        (0..N_SAMPLES).map(|_| uuid1().unwrap().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-1[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 20k identifiers without collision
    #[test]
    fn generates_20k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Keeps node identifier across calls
    #[test]
    fn keeps_node_identifier_across_calls() {
        SAMPLES.with(|samples| {
            for e in samples {
                assert_eq!(e[24..], samples[0][24..]);
            }
        });
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = uuid1().unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(1));
        }
    }
}
