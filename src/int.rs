//! BER encoded integers.
//!
//! This module contains the [`Integer`] type that checks and interprets the
//! content octets of an INTEGER value. The type is also re-exported at the
//! top-level.

use std::mem;
use crate::decode::{ContentError, Pos};


//------------ Integer -------------------------------------------------------

/// The content of a BER encoded integer.
///
/// As integers are variable length in BER, this type is just a simple
/// wrapper atop the content octets. Creating a value checks that the
/// content is a correctly encoded integer. The value can then be converted
/// into a native integer if it is small enough.
///
/// # BER Encoding
///
/// In BER, an INTEGER is encoded as a primitive value with the content octets
/// providing a variable-length, big-endian, two‘s complement byte sequence of
/// that integer. Thus, the most-significant bit of the first octet serves as
/// the sign bit.
///
/// The content must not be empty and must use the smallest possible number
/// of octets. That is, the first nine bits of a multi-octet integer must
/// not all be the same.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Integer<'a>(&'a [u8]);

impl<'a> Integer<'a> {
    /// Checks the content octets of an integer.
    pub fn from_content(content: &'a [u8]) -> Result<Self, ContentError> {
        match (content.first(), content.get(1).map(|x| x & 0x80 != 0)) {
            (None, _) => {
                Err(ContentError::new("empty integer", Pos::default()))
            }
            (Some(0), Some(false)) | (Some(0xFF), Some(true)) => {
                Err(ContentError::new(
                    "integer not in minimal encoding", Pos::default()
                ))
            }
            _ => Ok(Integer(content))
        }
    }

    /// Decodes the content octets of an integer into an `i64`.
    ///
    /// Returns an error if the content isn’t a correctly encoded integer or
    /// if its value doesn’t fit.
    pub fn i64_from_content(content: &[u8]) -> Result<i64, ContentError> {
        Integer::from_content(content)?.to_i64().ok_or_else(|| {
            ContentError::new("integer exceeds 64 bits", Pos::default())
        })
    }

    /// Returns whether the integer is negative.
    pub fn is_negative(&self) -> bool {
        self.0.first().is_some_and(|first| first & 0x80 != 0)
    }

    /// Converts the integer into an `i64` if its value fits.
    pub fn to_i64(&self) -> Option<i64> {
        if self.0.len() > mem::size_of::<i64>() {
            return None
        }
        let start: i64 = if self.is_negative() { -1 } else { 0 };
        Some(self.0.iter().fold(start, |res, &octet| {
            res << 8 | i64::from(octet)
        }))
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_i64() {
        assert_eq!(Integer::i64_from_content(b"\x00").unwrap(), 0);
        assert_eq!(Integer::i64_from_content(b"\x05").unwrap(), 5);
        assert_eq!(Integer::i64_from_content(b"\x7f").unwrap(), 127);
        assert_eq!(Integer::i64_from_content(b"\x00\x80").unwrap(), 128);
        assert_eq!(Integer::i64_from_content(b"\x80").unwrap(), -128);
        assert_eq!(Integer::i64_from_content(b"\xff").unwrap(), -1);
        assert_eq!(Integer::i64_from_content(b"\xff\x7f").unwrap(), -129);
        assert_eq!(
            Integer::i64_from_content(b"\x01\x86\xa0").unwrap(), 100_000
        );
        assert_eq!(
            Integer::i64_from_content(b"\xfe\x79\x60").unwrap(), -100_000
        );
        assert_eq!(
            Integer::i64_from_content(
                b"\x7f\xff\xff\xff\xff\xff\xff\xff"
            ).unwrap(),
            i64::MAX
        );
        assert_eq!(
            Integer::i64_from_content(
                b"\x80\x00\x00\x00\x00\x00\x00\x00"
            ).unwrap(),
            i64::MIN
        );
    }

    #[test]
    fn decode_failures() {
        assert!(Integer::i64_from_content(b"").is_err());
        assert!(Integer::i64_from_content(b"\x00\x05").is_err());
        assert!(Integer::i64_from_content(b"\xff\x80").is_err());
        assert!(
            Integer::i64_from_content(
                b"\x00\x80\x00\x00\x00\x00\x00\x00\x00"
            ).is_err()
        );
        // Correctly encoded, just too big.
        let big = Integer::from_content(
            b"\x01\x00\x00\x00\x00\x00\x00\x00\x00"
        ).unwrap();
        assert_eq!(big.to_i64(), None);
    }

    #[test]
    fn sign() {
        assert!(Integer::from_content(b"\x80").unwrap().is_negative());
        assert!(!Integer::from_content(b"\x00\x80").unwrap().is_negative());
    }
}
