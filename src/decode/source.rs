//! A source of encoded octets.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use super::error::ContentError;


//------------ SliceSource ---------------------------------------------------

/// A cursor over a slice of encoded data.
///
/// The source hands out octets from the front of the slice and keeps track
/// of how far it has advanced so errors can name the offending position.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'s> {
    data: &'s [u8],
    pos: usize,
}

impl<'s> SliceSource<'s> {
    pub fn new(data: &'s [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position of the source.
    pub fn pos(&self) -> Pos {
        self.pos.into()
    }

    /// Returns the data not yet taken from the source.
    pub fn remaining(&self) -> &'s [u8] {
        self.data
    }

    pub fn is_exhausted(&self) -> bool {
        self.data.is_empty()
    }

    /// Takes a single octet from the source.
    ///
    /// If there aren’t any more octets available from the source, returns
    /// a content error.
    pub fn take_u8(&mut self) -> Result<u8, ContentError> {
        let Some((&first, tail)) = self.data.split_first() else {
            return Err(self.content_err("unexpected end of data"))
        };
        self.data = tail;
        self.pos += 1;
        Ok(first)
    }

    /// Takes exactly `len` octets from the source.
    ///
    /// If fewer octets are available, nothing is taken and a content error
    /// is returned.
    pub fn take_slice(&mut self, len: usize) -> Result<&'s [u8], ContentError> {
        let Some((head, tail)) = self.data.split_at_checked(len) else {
            return Err(self.content_err("unexpected end of data"))
        };
        self.data = tail;
        self.pos += len;
        Ok(head)
    }

    /// Returns a content error at the current position of the source.
    pub fn content_err(&self, msg: &'static str) -> ContentError {
        ContentError::new(msg, self.pos())
    }
}


//------------ Pos -----------------------------------------------------------

/// The logical position within a source.
///
/// Values of this type can only be used for diagnostics. They can not be used
/// to determine how far a source has been advanced since it was created. This
/// is why we used a newtype.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Pos(usize);

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn take_advances_position() {
        let mut source = SliceSource::new(b"\x01\x02\x03\x04");
        assert_eq!(source.take_u8().unwrap(), 1);
        assert_eq!(source.pos(), Pos::from(1));
        assert_eq!(source.take_slice(2).unwrap(), b"\x02\x03");
        assert_eq!(source.pos(), Pos::from(3));
        assert_eq!(source.remaining(), b"\x04");
        assert!(!source.is_exhausted());
    }

    #[test]
    fn short_reads() {
        let mut source = SliceSource::new(b"\x01\x02");
        let err = source.take_slice(3).unwrap_err();
        assert_eq!(err.pos(), Pos::from(0));
        // A failed read leaves the source alone.
        assert_eq!(source.remaining(), b"\x01\x02");

        source.take_slice(2).unwrap();
        assert!(source.is_exhausted());
        assert_eq!(source.take_u8().unwrap_err().pos(), Pos::from(2));
    }
}
