//! Disassembling encoded data into text.
//!
//! The [`Disassembler`] turns a buffer of BER encoded data into a textual
//! rendering with one value per line. Constructed values open a block that
//! contains their nested values, one level of indentation deeper:
//!
//! ```text
//! SEQUENCE {
//!   INTEGER { 5 }
//!   OCTET_STRING { "hello" }
//! }
//! ```
//!
//! The rendering never fails. Any part of the input that can’t be parsed is
//! shown as a literal, so the text always describes the exact octets of the
//! input. Values of indefinite length open with `` `80` `` instead of a
//! brace and are closed by a `` `0000` `` literal for their end-of-contents
//! marker.
//!
//! Primitive values whose content happens to be encoded data are shown as
//! nested blocks, too. This covers OCTET STRINGs and BIT STRINGs wrapping
//! further structures, as are common in certificates.

use std::fmt;
use std::fmt::Write as _;
use tracing::{debug, trace, warn};
use crate::decode::{parse_element, Element};
use crate::format::{format_bytes, format_integer, format_oid, Hex};
use crate::ident::{Ident, Universal};
use crate::oid::Oid;
use crate::options::Options;
use crate::structure::Rendering;

mod test;


//------------ Disassembler --------------------------------------------------

/// Renders encoded data as text.
///
/// A value of this type only holds the [`Options`] for the rendering and
/// can be used for any number of buffers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Disassembler {
    options: Options,
}

impl Disassembler {
    /// Creates a disassembler using the given options.
    pub const fn new(options: Options) -> Self {
        Disassembler { options }
    }

    /// Returns the options of the disassembler.
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Renders `data` as text.
    ///
    /// Every line of the result, including the last one, is terminated by
    /// a newline. Empty data results in an empty string.
    pub fn disassemble(&self, data: &[u8]) -> String {
        let mut out = String::new();
        self.write_elements(&mut out, data, 0, false);
        out
    }

    /// Writes the values contained in `data` at the given depth.
    ///
    /// If `stop_at_eoc` is set, the values are the content of an indefinite
    /// length value. Writing stops after its end-of-contents marker and the
    /// data following the marker is returned. Otherwise, all of `data` is
    /// written and an empty slice is returned.
    fn write_elements<'a>(
        &self,
        out: &mut String,
        mut data: &'a [u8],
        depth: usize,
        stop_at_eoc: bool,
    ) -> &'a [u8] {
        if depth > self.options.max_depth() {
            if !data.is_empty() {
                warn!(
                    depth, max_depth = self.options.max_depth(),
                    remaining = data.len(),
                    "maximum depth exceeded, writing remaining data as literal"
                );
                add_line(out, depth, format_args!("{}", self.bytes(data)));
            }
            return &[]
        }

        while !data.is_empty() {
            if stop_at_eoc {
                if let Some(rest) = data.strip_prefix(&[0, 0]) {
                    add_line(out, depth.saturating_sub(1), format_args!(
                        "`0000`"
                    ));
                    return rest
                }
            }

            let (element, rest) = match parse_element(data) {
                Ok(res) => res,
                Err(err) => {
                    trace!(
                        depth, remaining = data.len(), error = %err,
                        "writing unparsable data as literal"
                    );
                    add_line(out, depth, format_args!("{}", self.bytes(data)));
                    return &[]
                }
            };
            data = rest;
            let ident = element.ident();

            if element.is_indefinite() {
                add_line(out, depth, format_args!("{} `80`", ident));
                data = self.write_elements(out, data, depth + 1, true);
            }
            else if element.body().is_empty() {
                add_line(out, depth, format_args!("{} {{}}", ident));
            }
            else if ident.is_constructed() {
                self.write_block(out, ident, element.body(), depth);
            }
            else {
                self.write_primitive(out, &element, depth);
            }
        }
        data
    }

    /// Writes a primitive value with non-empty content.
    fn write_primitive(
        &self, out: &mut String, element: &Element, depth: usize
    ) {
        let ident = element.ident();
        let body = element.body();
        match ident.tag().universal() {
            Some(Universal::Integer) => {
                add_line(out, depth, format_args!(
                    "{} {{ {} }}",
                    ident, format_integer(body, self.options.integer_cutoff())
                ));
            }
            Some(Universal::ObjectIdentifier) => {
                if let Some(name) = Oid(body).name() {
                    add_line(out, depth, format_args!("# {}", name));
                }
                add_line(out, depth, format_args!(
                    "{} {{ {} }}", ident, format_oid(body)
                ));
            }
            Some(Universal::Boolean) => {
                match body {
                    [0x00] => {
                        add_line(out, depth, format_args!(
                            "{} {{ FALSE }}", ident
                        ))
                    }
                    [0xff] => {
                        add_line(out, depth, format_args!(
                            "{} {{ TRUE }}", ident
                        ))
                    }
                    _ => {
                        add_line(out, depth, format_args!(
                            "{} {{ {} }}", ident, Hex(body)
                        ))
                    }
                }
            }
            Some(Universal::BitString) => {
                // A leading zero octet for the number of unused bits may be
                // followed by encoded data, e.g., for keys and signatures.
                match body.split_first() {
                    Some((&0, rest)) if !rest.is_empty()
                        && self.rendering(rest, depth) == Rendering::Structured
                    => {
                        debug!(
                            depth, len = rest.len(),
                            "writing bit string content as nested values"
                        );
                        add_line(out, depth, format_args!("{} {{", ident));
                        add_line(out, depth + 1, format_args!("`00`"));
                        self.write_elements(out, rest, depth + 1, false);
                        add_line(out, depth, format_args!("}}"));
                    }
                    _ => self.write_scalar(out, ident, body, depth),
                }
            }
            _ => {
                match self.rendering(body, depth) {
                    Rendering::Structured => {
                        debug!(
                            depth, len = body.len(),
                            "writing primitive content as nested values"
                        );
                        self.write_block(out, ident, body, depth)
                    }
                    Rendering::Scalar => {
                        self.write_scalar(out, ident, body, depth)
                    }
                }
            }
        }
    }

    /// Writes a value as a block of nested values.
    fn write_block(
        &self, out: &mut String, ident: Ident, body: &[u8], depth: usize
    ) {
        add_line(out, depth, format_args!("{} {{", ident));
        self.write_elements(out, body, depth + 1, false);
        add_line(out, depth, format_args!("}}"));
    }

    /// Writes a value with its content as a single scalar.
    fn write_scalar(
        &self, out: &mut String, ident: Ident, body: &[u8], depth: usize
    ) {
        add_line(out, depth, format_args!(
            "{} {{ {} }}", ident, self.bytes(body)
        ));
    }

    /// Decides how to render primitive content at the given depth.
    ///
    /// Content is never nested beyond the maximum depth.
    fn rendering(&self, data: &[u8], depth: usize) -> Rendering {
        if depth >= self.options.max_depth() {
            Rendering::Scalar
        }
        else {
            Rendering::of(data)
        }
    }

    fn bytes(&self, data: &[u8]) -> String {
        format_bytes(data, self.options.printable_threshold())
    }
}


//------------ disassemble ---------------------------------------------------

/// Renders `data` as text using the default options.
///
/// This is a shortcut for `Disassembler::default().disassemble(data)`.
///
/// ```
/// assert_eq!(
///     derascii::disassemble(b"\x30\x03\x02\x01\x05"),
///     "SEQUENCE {\n  INTEGER { 5 }\n}\n"
/// );
/// ```
pub fn disassemble(data: &[u8]) -> String {
    Disassembler::default().disassemble(data)
}


//------------ Helper Functions ----------------------------------------------

/// Appends a line at the given depth.
fn add_line(out: &mut String, depth: usize, line: fmt::Arguments) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    // Writing to a string never fails.
    let _ = out.write_fmt(line);
    out.push('\n');
}
