//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use super::source::Pos;


//------------ ContentError --------------------------------------------------

/// An error happened while interpreting encoded data.
///
/// The error carries a short description of what went wrong and the
/// position of the problem. For values taken from a source, the position
/// is relative to the start of the source. For the content decoders of
/// integers and object identifiers, it is relative to the start of the
/// content octets.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message} at position {pos}")]
pub struct ContentError {
    message: &'static str,
    pos: Pos,
}

impl ContentError {
    /// Creates a new error from a static message and position.
    pub fn new(message: &'static str, pos: Pos) -> Self {
        ContentError { message, pos }
    }

    /// Returns the description of the error.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Returns the position where the error happened.
    pub fn pos(&self) -> Pos {
        self.pos
    }
}
