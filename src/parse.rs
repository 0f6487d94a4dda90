//! Parser for the textual representations of UUID.

use std::{fmt, str};

use crate::hex::decode_pair;
use crate::Uuid;

/// Byte offsets of the hyphens in the 8-4-4-4-12 form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Byte offsets of the hexadecimal digit pairs in the 8-4-4-4-12 form.
const PAIRS: [usize; 16] = [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

const URN_PREFIX: &[u8; 9] = b"urn:uuid:";

impl Uuid {
    /// Creates an object from one of the following textual representations:
    ///
    /// - 32 hexadecimal digits: `0189dcd553117d408db09496a2eef37b`
    /// - 8-4-4-4-12 form: `0189dcd5-5311-7d40-8db0-9496a2eef37b`
    /// - braced 8-4-4-4-12 form: `{0189dcd5-5311-7d40-8db0-9496a2eef37b}`
    /// - URN form: `urn:uuid:0189dcd5-5311-7d40-8db0-9496a2eef37b`
    ///
    /// Hexadecimal digits and the `urn:uuid:` prefix are case-insensitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidkit::Uuid;
    ///
    /// let x = Uuid::parse_str("urn:uuid:0189DCD5-5311-7D40-8DB0-9496A2EEF37B")?;
    /// assert_eq!(x.to_string(), "0189dcd5-5311-7d40-8db0-9496a2eef37b");
    /// # Ok::<(), uuidkit::ParseError>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        Self::parse_ascii(src.as_bytes())
    }

    /// Creates an object from a byte slice containing one of the textual representations accepted
    /// by [`Uuid::parse_str`].
    pub fn parse_ascii(src: &[u8]) -> Result<Self, ParseError> {
        let offset = match src.len() {
            32 => return decode_simple(src),
            36 => 0,
            38 => {
                if src[0] != b'{' || src[37] != b'}' {
                    return Err(ParseError::InvalidBraces);
                }
                1
            }
            45 => {
                if !src[..9].eq_ignore_ascii_case(URN_PREFIX) {
                    return Err(ParseError::InvalidUrnPrefix);
                }
                9
            }
            len => return Err(ParseError::InvalidLength { len }),
        };

        let body = &src[offset..offset + 36];
        if let Some(i) = HYPHENS.into_iter().find(|&i| body[i] != b'-') {
            return Err(ParseError::MisplacedHyphen { index: offset + i });
        }

        let mut dst = [0u8; 16];
        for (e, i) in dst.iter_mut().zip(PAIRS) {
            *e = decode_pair(body[i], body[i + 1])
                .ok_or(ParseError::InvalidHex { index: offset + i })?;
        }
        Ok(Self::from(dst))
    }
}

fn decode_simple(src: &[u8]) -> Result<Uuid, ParseError> {
    let mut dst = [0u8; 16];
    for (i, (e, pair)) in dst.iter_mut().zip(src.chunks_exact(2)).enumerate() {
        *e = decode_pair(pair[0], pair[1]).ok_or(ParseError::InvalidHex { index: i * 2 })?;
    }
    Ok(Uuid::from(dst))
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from a textual representation accepted by [`Uuid::parse_str`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse_str(src)
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::parse_str(&src)
    }
}

/// Error parsing an invalid string representation of UUID.
///
/// Positions are byte offsets into the original input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// The input length matches none of the accepted forms (32, 36, 38, or 45 bytes).
    InvalidLength {
        /// The length of the input in bytes.
        len: usize,
    },
    /// A 45-byte input does not start with `urn:uuid:`.
    InvalidUrnPrefix,
    /// A 38-byte input is not enclosed in `{` and `}`.
    InvalidBraces,
    /// A hyphen is missing from its expected position.
    MisplacedHyphen {
        /// The position where a hyphen is expected.
        index: usize,
    },
    /// A pair of characters is not a valid hexadecimal byte.
    InvalidHex {
        /// The position of the first character of the pair.
        index: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { len } => write!(
                f,
                "invalid string representation: expected length of 32, 36, 38, or 45, found {}",
                len
            ),
            Self::InvalidUrnPrefix => {
                write!(f, "invalid string representation: expected prefix `urn:uuid:`")
            }
            Self::InvalidBraces => write!(
                f,
                "invalid string representation: expected enclosing `{{` and `}}`"
            ),
            Self::MisplacedHyphen { index } => write!(
                f,
                "invalid string representation: expected `-` at position {}",
                index
            ),
            Self::InvalidHex { index } => write!(
                f,
                "invalid string representation: invalid hexadecimal digit at position {}",
                index
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::{ParseError, Uuid};

    /// Parses the minimal UUIDv1 pattern
    #[test]
    fn parses_the_minimal_uuidv1_pattern() {
        let e = Uuid::parse_str("00000000-0000-1000-8000-000000000000").unwrap();
        assert_eq!(
            e.as_bytes(),
            &[0, 0, 0, 0, 0, 0, 0x10, 0, 0x80, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    /// Parses all accepted forms of prepared cases
    #[test]
    fn parses_all_accepted_forms_of_prepared_cases() {
        let cases = [
            "00000000-0000-0000-0000-000000000000",
            "ffffffff-ffff-ffff-ffff-ffffffffffff",
            "0180a8f0-5b84-7438-ab50-f06ac2e5e082",
            "89abcdef-4567-1123-abcd-0123456789ab",
            "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
        ];

        for text in cases {
            let e = Uuid::parse_str(text).unwrap();
            assert_eq!(&e.encode() as &str, text);

            let forms = [
                text.to_owned(),
                text.to_uppercase(),
                text.replace('-', ""),
                text.replace('-', "").to_uppercase(),
                format!("{{{}}}", text),
                format!("urn:uuid:{}", text),
                format!("URN:UUID:{}", text.to_uppercase()),
                format!("Urn:Uuid:{}", text),
            ];
            for form in forms {
                assert_eq!(form.parse(), Ok(e), "{}", form);
                assert_eq!(Uuid::parse_ascii(form.as_bytes()), Ok(e), "{}", form);
                assert_eq!(Uuid::try_from(form.as_str()), Ok(e), "{}", form);
            }
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            " 0180a8f0-5b82-75b4-9fef-ecad657c30bb",
            "0180a8f0-5b84-7438-ab50-f0626f78002b ",
            " 0180a8f0-5b84-7438-ab50-f063bd5331af ",
            "+0180a8f0-5b84-7438-ab50-f06405d35edb",
            "-0180a8f0-5b84-7438-ab50-f06508df4c2d",
            "+180a8f0-5b84-7438-ab50-f066aa10a367",
            "-180a8f0-5b84-7438-ab50-f067cdce1d69",
            "0180a8f0-5b847438-ab50-f06991838802",
            "0180a8f0-5b84-74 8-ab50-f06bed27bdc7",
            "0180a8g0-5b84-7438-ab50-f06c91175b8a",
            "0180a8f0-5b84-7438-ab50_f06d3ea24429",
            "0180a8f05b847438ab50f068decfbfdx",
            "(0180a8f0-5b84-7438-ab50-f06ac2e5e082)",
            "{0180a8f0-5b84-7438-ab50-f06ac2e5e082 ",
            "urn:uudi:0180a8f0-5b84-7438-ab50-f06ac2e5e082",
            "urn:uuid:0180a8f05b847438ab50f06ac2e5e082",
            "0180a8f0-+b84-7438-ab50-f06ac2e5e082",
            "0180a8f0-5b84-7438-ab50-f06ac2e5e08é",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err(), "{}", e);
        }
    }

    /// Reports context of parse errors
    #[test]
    fn reports_context_of_parse_errors() {
        assert_eq!(
            Uuid::parse_str("0180a8f0-5b84-7438-ab50-f06ac2e5e08"),
            Err(ParseError::InvalidLength { len: 35 })
        );
        assert_eq!(
            Uuid::parse_str("0180a8f05-b84-7438-ab50-f06ac2e5e082"),
            Err(ParseError::MisplacedHyphen { index: 8 })
        );
        assert_eq!(
            Uuid::parse_str("{0180a8f0-5b84-7438-ab50f-06ac2e5e082}"),
            Err(ParseError::MisplacedHyphen { index: 24 })
        );
        assert_eq!(
            Uuid::parse_str("0180a8f0-5b84-7438-ab50-f06ac2e5z082"),
            Err(ParseError::InvalidHex { index: 32 })
        );
        assert_eq!(
            Uuid::parse_str("urn:uuid:0180a8f0-5b84-7438-ab50-f06ac2e5z082"),
            Err(ParseError::InvalidHex { index: 41 })
        );
        assert_eq!(
            Uuid::parse_str("0180a8f05b847438ab50f06ac2e5e0:2"),
            Err(ParseError::InvalidHex { index: 30 })
        );
        assert_eq!(
            Uuid::parse_str("urn:uudi:0180a8f0-5b84-7438-ab50-f06ac2e5e082"),
            Err(ParseError::InvalidUrnPrefix)
        );
        assert_eq!(
            Uuid::parse_str("[0180a8f0-5b84-7438-ab50-f06ac2e5e082]"),
            Err(ParseError::InvalidBraces)
        );
    }

    /// Describes errors with their positions
    #[test]
    fn describes_errors_with_their_positions() {
        let err = Uuid::parse_str("0180a8f0").unwrap_err();
        assert!(err.to_string().contains("found 8"));
        let err = Uuid::parse_str("0180a8f0-5b84-7438-ab50-f06ac2e5z082").unwrap_err();
        assert!(err.to_string().contains("position 32"));
    }
}
