//! ASN.1 Object Identifiers.
//!
//! This module contains the [`Oid`] type that implements object identifiers,
//! a construct used by ANS.1 to uniquely identify all sorts of things. The
//! type is also re-exported at the top-level.
//!
//! The [`names`] submodule knows the human readable names of a selection of
//! well-known object identifiers.

use std::{fmt, hash};
use bytes::Bytes;
use smallvec::SmallVec;
use crate::decode::{ContentError, Pos};

pub mod names;


//------------ Oid -----------------------------------------------------------

/// An object identifer.
///
/// Object identifiers are globally unique, hierarchical values that are used
/// to identify objects or their type. When written, they are presented as a
/// sequence of integers separated by dots such as ‘1.3.6.1.5.5.7.1’.
///
/// Values of this type keep a single object identifer in its BER encoding,
/// i.e., in some form of byte sequence. Because different representations
/// may be useful, the type is generic over something that can become a
/// reference to a bytes slice. The default is `Bytes` for owned values
/// while constants use `Oid<&'static [u8]>` or its type alias [`ConstOid`].
///
/// The content is not checked when a value is created. Use [`Oid::arcs`]
/// to decode the components which fails if the content is malformed.
#[derive(Clone, Debug)]
pub struct Oid<T: AsRef<[u8]> = Bytes>(pub T);

/// A type alias for `Oid<&'static [u8]>.
///
/// This is useful when defining object identifier constants.
pub type ConstOid = Oid<&'static [u8]>;

/// The decoded components of an object identifier.
///
/// Most object identifiers in the wild are short enough to stay on the
/// stack.
pub type Arcs = SmallVec<[u32; 16]>;

impl<T: AsRef<[u8]>> Oid<T> {
    /// Decodes the components of the object identifier.
    ///
    /// The first encoded subidentifier provides the first two components.
    /// It is 0 if the value is 0..39, 1 for 40..79, and 2 for anything else
    /// with the second component being the remainder.
    ///
    /// Returns an error if the content is empty, if a subidentifier isn’t
    /// encoded in the minimal number of octets, if the last octet is
    /// missing, or if a subidentifier doesn’t fit into a `u32`. The position
    /// of the error is relative to the start of the content.
    pub fn arcs(&self) -> Result<Arcs, ContentError> {
        let content = self.0.as_ref();
        if content.is_empty() {
            return Err(ContentError::new(
                "empty object identifier", Pos::default()
            ))
        }

        let mut res = Arcs::new();
        let mut value = 0u32;
        let mut start = 0;
        for (idx, &octet) in content.iter().enumerate() {
            if idx == start && octet == 0x80 {
                return Err(ContentError::new(
                    "subidentifier with leading zero octet", idx.into()
                ))
            }
            if value > u32::MAX >> 7 {
                return Err(ContentError::new(
                    "subidentifier exceeds 32 bits", idx.into()
                ))
            }
            value = value << 7 | u32::from(octet & 0x7F);
            if octet & 0x80 != 0 {
                continue
            }
            if res.is_empty() {
                let first = match value {
                    0..=39 => 0,
                    40..=79 => 1,
                    _ => 2,
                };
                res.push(first);
                res.push(value - first * 40);
            }
            else {
                res.push(value);
            }
            value = 0;
            start = idx + 1;
        }
        if start != content.len() {
            return Err(ContentError::new(
                "incomplete subidentifier", start.into()
            ))
        }
        Ok(res)
    }

    /// Returns the human readable name of the object identifier, if known.
    pub fn name(&self) -> Option<&'static str> {
        names::lookup(self.0.as_ref())
    }
}


//--- AsRef

impl<T: AsRef<[u8]>> AsRef<[u8]> for Oid<T> {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}


//--- PartialEq and Eq

impl<T: AsRef<[u8]>, U: AsRef<[u8]>> PartialEq<Oid<U>> for Oid<T> {
    fn eq(&self, other: &Oid<U>) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}

impl<T: AsRef<[u8]>> Eq for Oid<T> { }


//--- Hash

impl<T: AsRef<[u8]>> hash::Hash for Oid<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.as_ref().hash(state)
    }
}


//--- Display

impl<T: AsRef<[u8]>> fmt::Display for Oid<T> {
    /// Formats the object identifier in ‘dot integer’ notation.
    ///
    /// If the content is malformed, the content octets are shown in hex
    /// instead.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let arcs = match self.arcs() {
            Ok(arcs) => arcs,
            Err(_) => {
                f.write_str("(malformed")?;
                for octet in self.0.as_ref() {
                    write!(f, " {:02x}", octet)?;
                }
                return f.write_str(")")
            }
        };
        let mut arcs = arcs.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{}", first)?;
        }
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}


//============ Tests =========================================================
