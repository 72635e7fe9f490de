//! Disassembling data encoded in BER and DER into readable text.
//!
//! The crate turns a buffer of encoded data into a textual rendering that
//! shows the structure of the data, one value per line, with well-known
//! types given by name and content decoded where sensible. The rendering
//! is lossless: every octet of the input is accounted for, so the text can
//! be edited and assembled back into encoded data by a matching assembler.
//!
//! The main entry point is [`disassemble`] which uses the default
//! [`Options`]. Use a [`Disassembler`] to change those.
//!
//! ```
//! let text = derascii::disassemble(
//!     b"\x30\x08\x02\x01\x05\x04\x03abc"
//! );
//! assert_eq!(
//!     text,
//!     "SEQUENCE {\n  INTEGER { 5 }\n  OCTET_STRING { \"abc\" }\n}\n"
//! );
//! ```
//!
//! The building blocks of the rendering are available, too. The
//! [`decode`] module splits data into values, [`int`] and [`oid`] decode
//! the content of INTEGER and OBJECT IDENTIFIER values, [`format`] renders
//! content octets, and [`structure`] checks whether content consists of
//! encoded values.

pub use self::disasm::{disassemble, Disassembler};
pub use self::ident::{Alias, Class, Ident, Tag, Universal};
pub use self::int::Integer;
pub use self::oid::{ConstOid, Oid};
pub use self::options::Options;

pub mod decode;
pub mod disasm;
pub mod format;
pub mod int;
pub mod oid;
pub mod structure;

mod ident;
mod length;
mod options;
