//! # var_dumper
//!
//! Type-annotated, indented debug dumps of dynamic values, in the spirit of
//! the `var_dump` helpers found in scripting environments.
//!
//! ## What does a dump look like?
//!
//! ```text
//! mapping (size=3) {
//!     'id' => int 1,
//!     'name' => string "a" (length=1),
//!     'scores' => sequence (size=2) [
//!         [0] => float 9.5,
//!         [1] =>  null,
//!     ],
//! }
//! ```
//!
//! Every line names the value's type and its content. Sequence indices read
//! `[i]`, mapping members read `'name'`, and numeric-looking member names
//! read `[k]` like an index.
//!
//! ## Key Features
//!
//! - **Cycle-safe**: a composite that contains itself, directly or through
//!   descendants, renders a `cycle -> <path>` marker instead of recursing
//! - **Deterministic**: members print in insertion order, elements in index order
//! - **Pluggable styling**: plain text by default, ANSI colors with [`Ansi`]
//! - **Serde bridge**: any `T: Serialize` can be dumped via [`dump_serialize`]
//!
//! ## Quick Start
//!
//! ```rust
//! use var_dumper::{dump, value};
//!
//! let user = value!({ "id": 1, "name": "a" });
//! assert_eq!(
//!     dump(&user),
//!     "mapping (size=2) {\n    'id' => int 1,\n    'name' => string \"a\" (length=1),\n}"
//! );
//! ```
//!
//! ### Cyclic graphs
//!
//! ```rust
//! use var_dumper::{dump, Mapping, Value};
//!
//! let a = Mapping::new();
//! a.insert("self", a.clone());
//! assert_eq!(dump(&Value::from(a.clone())), "mapping (size=1) {\n    'self' => cycle -> $,\n}");
//! a.clear();
//! ```
//!
//! ### Dumping Rust types
//!
//! ```rust
//! use serde::Serialize;
//! use var_dumper::dump_serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: f64 }
//!
//! let dumped = dump_serialize(&Point { x: 1, y: 0.5 }).unwrap();
//! assert_eq!(dumped, "mapping (size=2) {\n    'x' => int 1,\n    'y' => float 0.5,\n}");
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - dumping a derived struct
//! - **`dynamic_values.rs`** - building value graphs by hand, cycles included
//!
//! Run any example with: `cargo run --example <name>`

pub mod dumper;
pub mod error;
pub mod kind;
pub mod macros;
pub mod map;
pub mod options;
pub mod render;
pub mod ser;
pub mod style;
pub mod value;

pub use dumper::Dumper;
pub use error::{Error, Result};
pub use kind::{classify, Kind};
pub use map::Map;
pub use options::DumpOptions;
pub use render::{render_key, render_leaf, Key, Leaf};
pub use ser::{to_value, ValueSerializer};
pub use style::{Ansi, Plain, Role, Style};
pub use value::{Function, Mapping, Number, Pattern, Sequence, Value};

use serde::Serialize;

/// Dumps a value with the default 4-space indent and no styling.
///
/// # Examples
///
/// ```rust
/// use var_dumper::{dump, value};
///
/// assert_eq!(
///     dump(&value!([1, 2, 3])),
///     "sequence (size=3) [\n    [0] => int 1,\n    [1] => int 2,\n    [2] => int 3,\n]"
/// );
/// ```
#[must_use]
pub fn dump(value: &Value) -> String {
    dump_with_options(value, DumpOptions::default())
}

/// Dumps a value with custom options.
///
/// # Examples
///
/// ```rust
/// use var_dumper::{dump_with_options, value, DumpOptions};
///
/// let dumped = dump_with_options(&value!({ "a": [] }), DumpOptions::new().with_indent(1));
/// assert_eq!(dumped, "mapping (size=1) {\n 'a' => sequence (size=0) [\n ],\n}");
/// ```
#[must_use]
pub fn dump_with_options(value: &Value, options: DumpOptions) -> String {
    Dumper::new(options).dump(value)
}

/// Converts any `T: Serialize` to a [`Value`] and dumps it.
///
/// # Errors
///
/// Returns an error if the conversion fails, see [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn dump_serialize<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(dump(&to_value(value)?))
}
