//! Configuration options for dumping.
//!
//! [`DumpOptions`] holds the single knob the dumper exposes: the indent width
//! added per nesting level. Options are fixed when a
//! [`Dumper`](crate::Dumper) is constructed.
//!
//! ## Examples
//!
//! ```rust
//! use var_dumper::{dump_with_options, value, DumpOptions};
//!
//! let data = value!([1]);
//! let dumped = dump_with_options(&data, DumpOptions::new().with_indent(2));
//! assert_eq!(dumped, "sequence (size=1) [\n  [0] => int 1,\n]");
//! ```

/// Default number of spaces added per nesting level.
pub const DEFAULT_INDENT: usize = 4;

/// Configuration options for a [`Dumper`](crate::Dumper).
///
/// # Examples
///
/// ```rust
/// use var_dumper::DumpOptions;
///
/// let options = DumpOptions::new();
/// assert_eq!(options.indent, 4);
///
/// let options = DumpOptions::new().with_indent(2);
/// assert_eq!(options.indent_unit(), "  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpOptions {
    pub indent: usize,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            indent: DEFAULT_INDENT,
        }
    }
}

impl DumpOptions {
    /// Creates default options (4-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use var_dumper::DumpOptions;
    ///
    /// let options = DumpOptions::new().with_indent(8);
    /// assert_eq!(options.indent, 8);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// The whitespace appended to the indent context at each level.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent)
    }
}
