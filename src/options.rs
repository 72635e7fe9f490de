//! Configuration of the disassembler.
//!
//! This is a private module. Its public items are re-exported by the parent.


//------------ Options -------------------------------------------------------

/// Tunable parameters of the textual rendering.
///
/// The defaults produce the conventional output. Values can be changed via
/// the builder-style `with_*` methods:
///
/// ```
/// use derascii::Options;
///
/// let options = Options::new().with_max_depth(16);
/// assert_eq!(options.max_depth(), 16);
/// assert_eq!(options.integer_cutoff(), 100_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    printable_threshold: f64,
    integer_cutoff: i64,
    max_depth: usize,
}

impl Options {
    /// The default share of text characters needed for a quoted string.
    pub const DEFAULT_PRINTABLE_THRESHOLD: f64 = 0.85;

    /// The default largest magnitude of integers shown in decimal.
    pub const DEFAULT_INTEGER_CUTOFF: i64 = 100_000;

    /// The default maximum nesting depth.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Creates options with the default values.
    pub const fn new() -> Self {
        Options {
            printable_threshold: Self::DEFAULT_PRINTABLE_THRESHOLD,
            integer_cutoff: Self::DEFAULT_INTEGER_CUTOFF,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the share of text characters needed for a quoted string.
    ///
    /// Octets are rendered as a quoted string only if the share of
    /// printable characters strictly exceeds this value.
    pub const fn with_printable_threshold(mut self, threshold: f64) -> Self {
        self.printable_threshold = threshold;
        self
    }

    /// Sets the largest magnitude of integers shown in decimal.
    ///
    /// Negative values are treated as their magnitude.
    pub const fn with_integer_cutoff(mut self, cutoff: i64) -> Self {
        self.integer_cutoff = cutoff.saturating_abs();
        self
    }

    /// Sets the maximum nesting depth.
    ///
    /// Content nested deeper than this is rendered as a single literal.
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Returns the share of text characters needed for a quoted string.
    pub const fn printable_threshold(&self) -> f64 {
        self.printable_threshold
    }

    /// Returns the largest magnitude of integers shown in decimal.
    pub const fn integer_cutoff(&self) -> i64 {
        self.integer_cutoff
    }

    /// Returns the maximum nesting depth.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}


//--- Default

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}


//============ Tests =========================================================
