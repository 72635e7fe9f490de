//! Rendering content octets as text.
//!
//! The functions in this module produce the scalar part of a line in the
//! textual rendering, i.e., whatever goes between the braces of a
//! primitive value. Arbitrary octets become either a quoted string or a
//! hex literal, integers and object identifiers are decoded if possible
//! and fall back to a hex literal otherwise.

use std::fmt;
use crate::int::Integer;
use crate::oid::Oid;


//------------ Hex -----------------------------------------------------------

/// Displays octets as a hex literal.
///
/// The literal consists of the octets as lowercase hex digits enclosed in
/// backticks, e.g., `` `0a1b` ``.
#[derive(Clone, Copy, Debug)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("`")?;
        for octet in self.0 {
            write!(f, "{:02x}", octet)?;
        }
        f.write_str("`")
    }
}


//------------ Quoted --------------------------------------------------------

/// Displays octets as a quoted string.
///
/// Printable ASCII characters appear as is, except for the backslash and
/// double quote which are escaped with a backslash. A newline is shown as
/// `\n`, all other octets as `\x` followed by two lowercase hex digits.
#[derive(Clone, Copy, Debug)]
pub struct Quoted<'a>(pub &'a [u8]);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        for &octet in self.0 {
            match octet {
                b'\n' => f.write_str("\\n")?,
                b'"' => f.write_str("\\\"")?,
                b'\\' => f.write_str("\\\\")?,
                octet if is_printable(octet) => {
                    write!(f, "{}", char::from(octet))?
                }
                octet => write!(f, "\\x{:02x}", octet)?,
            }
        }
        f.write_str("\"")
    }
}


//------------ Helper Functions ----------------------------------------------

/// Returns whether an octet is a printable ASCII character.
///
/// The space counts as printable, control characters don’t.
pub fn is_printable(octet: u8) -> bool {
    octet.is_ascii_graphic() || octet == b' '
}

/// Returns the share of octets that can appear as text in a quoted string.
///
/// These are the printable ASCII characters plus the newline. Returns
/// zero for empty data.
pub fn text_ratio(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.
    }
    let count = data.iter().filter(|&&octet| {
        octet == b'\n' || is_printable(octet)
    }).count();
    count as f64 / data.len() as f64
}

/// Renders arbitrary octets.
///
/// If the share of text characters strictly exceeds `threshold`, the octets
/// are rendered as a quoted string, otherwise as a hex literal. Empty data
/// results in an empty string.
pub fn format_bytes(data: &[u8], threshold: f64) -> String {
    if data.is_empty() {
        String::new()
    }
    else if text_ratio(data) > threshold {
        Quoted(data).to_string()
    }
    else {
        Hex(data).to_string()
    }
}

/// Renders the content of an INTEGER value.
///
/// Correctly encoded integers within `-cutoff..=cutoff` are rendered in
/// decimal. Everything else results in a hex literal of the content.
pub fn format_integer(content: &[u8], cutoff: i64) -> String {
    match Integer::i64_from_content(content) {
        Ok(value) if (-cutoff..=cutoff).contains(&value) => value.to_string(),
        _ => Hex(content).to_string(),
    }
}

/// Renders the content of an OBJECT IDENTIFIER value.
///
/// Correctly encoded object identifiers are rendered in ‘dot integer’
/// notation, anything else as a hex literal of the content.
pub fn format_oid(content: &[u8]) -> String {
    let oid = Oid(content);
    match oid.arcs() {
        Ok(_) => oid.to_string(),
        Err(_) => Hex(content).to_string(),
    }
}


//============ Tests =========================================================
