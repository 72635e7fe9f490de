//! The length octets.
//!
//! This is a private module. The [`Length`] defined herein is not
//! publicly exposed.

use std::mem;
use crate::decode::{ContentError, SliceSource};


//------------ Length -------------------------------------------------------

/// The length octets of an encoded value.
///
/// A length value can either be definite, meaning it provides the actual
/// number of content octets in the value, or indefinite, in which case the
/// content is delimited by a special end-of-contents marker.
///
/// # BER Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used is
/// determined by the most significant bit of the first octet. If it is not
/// set, the length octets is one octet long and the remaining bits of this
/// first octet provide the definite length. Thus, if the first octet is
/// less than 128, it provides the definite length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length. If they specify that there are zero more octets, i.e., the
/// value of the first octet is 128, the length is indefinite. Otherwise,
/// those following octets give the big-endian encoding of the definite
/// length of the content octets.
///
/// The textual rendering of a value doesn’t retain the length octets, so
/// only encodings that can be reproduced are accepted: a definite length
/// must be encoded in the minimum number of octets, as in DER.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Length {
    /// A definite length with the given number of content octets.
    Definite(usize),

    /// The content is terminated by an end-of-contents marker.
    Indefinite,
}

impl Length {
    /// Parses a length from a source.
    pub fn take_from(
        source: &mut SliceSource
    ) -> Result<Self, ContentError> {
        let pos = source.pos();
        let len = match source.take_u8()? {
            // Bit 7 clear: single.
            n if (n & 0x80) == 0 => return Ok(Length::Definite(n.into())),

            // 0x80: indefinite.
            0x80 => return Ok(Length::Indefinite),

            // 0xFF: illegal.
            0xFF => {
                return Err(ContentError::new("illegal length octets", pos))
            }

            // anything else: clear left bit, number of octets.
            n => usize::from(n & 0x7F),
        };
        if len > mem::size_of::<usize>() {
            return Err(ContentError::new("excessive length", pos))
        }
        let octets = source.take_slice(len)?;

        // A leading zero means there is a shorter encoding.
        if octets.first() == Some(&0) {
            return Err(ContentError::new("illegal length in DER", pos))
        }
        let res = octets.iter().fold(0usize, |res, &octet| {
            res << 8 | usize::from(octet)
        });

        // So does a length that would have fit into the first octet.
        if res < 0x80 {
            return Err(ContentError::new("illegal length in DER", pos))
        }
        Ok(Length::Definite(res))
    }
}


//============ Tests =========================================================
