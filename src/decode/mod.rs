//! Parsing BER encoded values.
//!
//! The central item of this module is [`Element`], a single value split
//! into its identifier, length, and content octets. Elements are parsed
//! leniently enough to cover indefinite length values but strict enough
//! that their textual rendering reassembles into the very same octets.

pub use self::element::{parse_element, Element};
pub use self::error::ContentError;
pub use self::source::{Pos, SliceSource};

mod element;
mod error;
mod source;
