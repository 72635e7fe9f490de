//! Splitting encoded data into values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::ident::Ident;
use crate::length::Length;
use super::error::ContentError;
use super::source::SliceSource;


//------------ Element -------------------------------------------------------

/// A single encoded value.
///
/// An element consists of the identifier octets, which provide the tag and
/// whether the value is primitive or constructed, and the content octets.
/// The content is borrowed from the data the element was parsed from.
///
/// For a value of indefinite length, the content isn’t known until the
/// end-of-contents marker has been found. The element therefore only covers
/// the identifier and length octets and its body is empty. The values that
/// make up its content follow in the remaining data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Element<'a> {
    /// The identifier octets.
    ident: Ident,

    /// The content octets of a definite length value.
    body: &'a [u8],

    /// Whether the value uses the indefinite length form.
    indefinite: bool,

    /// The number of octets taken from the source.
    consumed: usize,
}

impl<'a> Element<'a> {
    /// Takes an element from the beginning of a source.
    ///
    /// Returns an error if the identifier or length octets are malformed,
    /// if a primitive value uses the indefinite length form, or if the
    /// source ends before the content of a definite length value does.
    /// In this case, the position of the source is unspecified.
    pub fn take_from(
        source: &mut SliceSource<'a>
    ) -> Result<Self, ContentError> {
        let available = source.remaining().len();
        let ident = Ident::take_from(source)?;
        let pos = source.pos();
        let (body, indefinite) = match Length::take_from(source)? {
            Length::Definite(len) => {
                if len > source.remaining().len() {
                    return Err(ContentError::new(
                        "content exceeds available data", pos
                    ))
                }
                (source.take_slice(len)?, false)
            }
            Length::Indefinite => {
                if !ident.is_constructed() {
                    return Err(ContentError::new(
                        "indefinite length for primitive value", pos
                    ))
                }
                (&[] as &[u8], true)
            }
        };
        Ok(Element {
            ident, body, indefinite,
            consumed: available - source.remaining().len(),
        })
    }

    /// Returns the identifier octets of the element.
    pub fn ident(&self) -> Ident {
        self.ident
    }

    /// Returns the content octets of the element.
    ///
    /// This is always empty for an indefinite length element.
    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    /// Returns whether the element uses the indefinite length form.
    pub fn is_indefinite(&self) -> bool {
        self.indefinite
    }

    /// Returns the number of octets the element occupied in the input.
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}


//------------ parse_element -------------------------------------------------

/// Parses exactly one element from the front of `data`.
///
/// Upon success, returns the element and the data following it.
pub fn parse_element(
    data: &[u8]
) -> Result<(Element<'_>, &[u8]), ContentError> {
    let mut source = SliceSource::new(data);
    let element = Element::take_from(&mut source)?;
    Ok((element, source.remaining()))
}


//============ Tests =========================================================
