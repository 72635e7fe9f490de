//! Probing whether octets consist of encoded values.
//!
//! Many primitive values, OCTET STRINGs and BIT STRINGs in particular,
//! quite often carry encoded data themselves. This module provides the
//! check used to decide whether such content is shown as nested values or
//! as a scalar.

use crate::decode::parse_element;


//------------ Rendering -----------------------------------------------------

/// How the content of a primitive value should be shown.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rendering {
    /// The content is a sequence of complete values and is shown nested.
    Structured,

    /// The content is shown as a single scalar.
    Scalar,
}

impl Rendering {
    /// Decides how to show the given content.
    pub fn of(data: &[u8]) -> Self {
        if is_fully_structured(data) {
            Rendering::Structured
        }
        else {
            Rendering::Scalar
        }
    }
}


//------------ is_fully_structured -------------------------------------------

/// Returns whether `data` consists entirely of encoded values.
///
/// The data has to be a sequence of zero or more values without any
/// trailing octets. Values of indefinite length have to be closed by an
/// end-of-contents marker. An empty slice is considered fully structured.
pub fn is_fully_structured(mut data: &[u8]) -> bool {
    let mut open = 0usize;
    while !data.is_empty() {
        if open > 0 {
            if let Some(rest) = data.strip_prefix(&[0, 0]) {
                open -= 1;
                data = rest;
                continue
            }
        }
        let Ok((element, rest)) = parse_element(data) else {
            return false
        };
        if element.is_indefinite() {
            open += 1;
        }
        data = rest;
    }
    open == 0
}


//============ Tests =========================================================
