//! The recursive dump traversal.
//!
//! A [`Dumper`] walks a [`Value`] depth-first and produces a type-annotated,
//! indented transcript:
//!
//! ```text
//! mapping (size=2) {
//!     'id' => int 1,
//!     'tags' => sequence (size=1) [
//!         [0] => string "a" (length=1),
//!     ],
//! }
//! ```
//!
//! ## Cycles
//!
//! While a composite is being rendered its identity sits in a visiting set.
//! Meeting the same composite again below itself renders a back-reference
//! marker, `cycle -> <path>`, where the path locates the ancestor from the
//! root (`$`, then `[0]` for an index or `["key"]` for a member). A composite
//! that is merely shared, not an ancestor, is rendered in full each time.
//!
//! ## Examples
//!
//! ```rust
//! use var_dumper::{Dumper, DumpOptions, Sequence, Value};
//!
//! let list = Sequence::new();
//! list.push(1);
//! list.push(list.clone());
//!
//! let dumper = Dumper::new(DumpOptions::default());
//! assert_eq!(
//!     dumper.dump(&Value::from(list.clone())),
//!     "sequence (size=2) [\n    [0] => int 1,\n    [1] => cycle -> $,\n]"
//! );
//! list.clear();
//! ```

use crate::render::{render_key, render_leaf, Key, Leaf};
use crate::{classify, DumpOptions, Kind, Plain, Role, Style, Value};
use indexmap::IndexMap;

/// Path of the value handed to a traversal.
const ROOT_PATH: &str = "$";

/// Label of the marker emitted for a back-reference.
const CYCLE_LABEL: &str = "cycle";

/// Renders values into dump transcripts.
///
/// A `Dumper` holds its options and style and nothing else; every call starts
/// from a clean traversal state.
#[derive(Clone, Debug)]
pub struct Dumper<S = Plain> {
    options: DumpOptions,
    unit: String,
    style: S,
}

impl Dumper<Plain> {
    /// Creates a dumper with unstyled output.
    #[must_use]
    pub fn new(options: DumpOptions) -> Self {
        Dumper::with_style(options, Plain)
    }
}

impl Default for Dumper<Plain> {
    fn default() -> Self {
        Dumper::new(DumpOptions::default())
    }
}

impl<S: Style> Dumper<S> {
    /// Creates a dumper that decorates fragments with `style`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use var_dumper::{Ansi, DumpOptions, Dumper, Value};
    ///
    /// colored::control::set_override(false);
    /// let dumper = Dumper::with_style(DumpOptions::default(), Ansi);
    /// assert_eq!(dumper.dump(&Value::from(true)), "boolean true");
    /// ```
    #[must_use]
    pub fn with_style(options: DumpOptions, style: S) -> Self {
        Dumper {
            unit: options.indent_unit(),
            options,
            style,
        }
    }

    #[must_use]
    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    /// Dumps `value` starting at column zero.
    #[must_use]
    pub fn dump(&self, value: &Value) -> String {
        self.generate_dump(value, "")
    }

    /// Dumps `value` as if it were nested at `indent`.
    ///
    /// Composite values return a block whose entries sit one unit deeper than
    /// `indent` and whose closing bracket sits at `indent`; the header itself
    /// carries no indent. Leaves return a single inline fragment.
    #[must_use]
    pub fn generate_dump(&self, value: &Value, indent: &str) -> String {
        Traversal::new(self).generate_dump(value, indent)
    }

    /// Renders the right-hand side of an entry nested under `indent`.
    ///
    /// Composites are dumped one unit deeper; leaves become
    /// `"<label> <text>"`, keeping the space even when the label is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use var_dumper::{DumpOptions, Dumper, Value};
    ///
    /// let dumper = Dumper::new(DumpOptions::default());
    /// assert_eq!(dumper.prepare_value_dump("", &Value::from(1)), "int 1");
    /// assert_eq!(dumper.prepare_value_dump("", &Value::Null), " null");
    /// ```
    #[must_use]
    pub fn prepare_value_dump(&self, indent: &str, value: &Value) -> String {
        Traversal::new(self).prepare_value_dump(indent, value)
    }
}

/// One step from a composite to one of its entries.
#[derive(Clone, Debug)]
enum Segment {
    Index(usize),
    Member(String),
}

/// State for one top-level dump call.
struct Traversal<'d, S> {
    dumper: &'d Dumper<S>,
    /// Composites on the current path, by identity, with their depth in `segments`.
    visiting: IndexMap<usize, usize>,
    /// Steps from the root down to the composite being rendered.
    ///
    /// Only steps into composites are recorded, since a leaf is never an ancestor.
    segments: Vec<Segment>,
}

impl<'d, S: Style> Traversal<'d, S> {
    fn new(dumper: &'d Dumper<S>) -> Self {
        Traversal {
            dumper,
            visiting: IndexMap::new(),
            segments: Vec::new(),
        }
    }

    fn generate_dump(&mut self, value: &Value, indent: &str) -> String {
        let kind = classify(value);
        let (identity, size) = match value {
            Value::Sequence(seq) => (seq.identity(), seq.len()),
            Value::Mapping(map) => (map.identity(), map.len()),
            _ => return self.prepare_value_dump(indent, value),
        };

        if let Some(&depth) = self.visiting.get(&identity) {
            let ancestor = self.path(depth);
            tracing::debug!(
                at = %self.path(self.segments.len()),
                ancestor = %ancestor,
                "back-reference to ancestor"
            );
            return self.back_reference(&ancestor);
        }

        tracing::trace!(%kind, size, depth = self.visiting.len(), "entering composite");
        self.visiting.insert(identity, self.segments.len());

        let (open, close) = match kind {
            Kind::Sequence => ('[', ']'),
            _ => ('{', '}'),
        };
        let header = format!(
            "{} (size={}) {}\n",
            self.dumper.style.paint(Role::Header, kind.as_str()),
            size,
            open
        );
        let entry_indent = format!("{}{}", indent, self.dumper.unit);

        let mut body = String::new();
        match value {
            Value::Sequence(seq) => {
                for (index, entry) in seq.borrow().iter().enumerate() {
                    body.push_str(&self.entry_line(
                        kind,
                        indent,
                        &entry_indent,
                        Key::Index(index),
                        entry,
                    ));
                }
            }
            Value::Mapping(map) => {
                for (name, entry) in map.borrow().iter() {
                    body.push_str(&self.entry_line(
                        kind,
                        indent,
                        &entry_indent,
                        Key::Name(name.as_str()),
                        entry,
                    ));
                }
            }
            _ => {}
        }

        self.visiting.pop();
        format!("{}{}{}{}", header, body, indent, close)
    }

    fn prepare_value_dump(&mut self, indent: &str, value: &Value) -> String {
        if classify(value).is_composite() {
            let deeper = format!("{}{}", indent, self.dumper.unit);
            return self.generate_dump(value, &deeper);
        }

        let Leaf { label, text } = render_leaf(value, &self.dumper.style);
        format!("{} {}", self.dumper.style.paint(Role::TypeLabel, label), text)
    }

    fn entry_line(
        &mut self,
        parent: Kind,
        indent: &str,
        entry_indent: &str,
        key: Key<'_>,
        entry: &Value,
    ) -> String {
        let entry_kind = classify(entry);
        let value_dump = if entry_kind.is_composite() {
            self.segments.push(match key {
                Key::Index(index) => Segment::Index(index),
                Key::Name(name) => Segment::Member(name.to_owned()),
            });
            let dumped = self.prepare_value_dump(indent, entry);
            self.segments.pop();
            dumped
        } else {
            self.prepare_value_dump(indent, entry)
        };
        let lhs = render_key(parent, entry_kind, entry_indent, key);
        format!("{} => {},\n", lhs, value_dump)
    }

    /// JSONPath-style location of the first `depth` steps.
    fn path(&self, depth: usize) -> String {
        let mut path = String::from(ROOT_PATH);
        for segment in &self.segments[..depth] {
            match segment {
                Segment::Index(index) => path.push_str(&format!("[{}]", index)),
                Segment::Member(name) => {
                    path.push('[');
                    path.push_str(&quote_member(name));
                    path.push(']');
                }
            }
        }
        path
    }

    fn back_reference(&self, ancestor: &str) -> String {
        format!(
            "{} -> {}",
            self.dumper.style.paint(Role::TypeLabel, CYCLE_LABEL),
            ancestor
        )
    }
}

/// JSON string literal for a member name, as used in back-reference paths.
fn quote_member(name: &str) -> String {
    serde_json::Value::String(name.to_owned()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mapping, Sequence};

    #[test]
    fn test_leaf_at_top_level() {
        let dumper = Dumper::new(DumpOptions::default());
        assert_eq!(dumper.dump(&Value::from(5)), "int 5");
        assert_eq!(dumper.dump(&Value::Null), " null");
        assert_eq!(dumper.dump(&Value::from("a")), "string \"a\" (length=1)");
    }

    #[test]
    fn test_generate_dump_with_outer_indent() {
        let dumper = Dumper::new(DumpOptions::new().with_indent(2));
        let value = Value::from(vec![Value::from(1)]);
        assert_eq!(
            dumper.generate_dump(&value, "--"),
            "sequence (size=1) [\n--  [0] => int 1,\n--]"
        );
    }

    #[test]
    fn test_prepare_value_dump_goes_one_level_deeper() {
        let dumper = Dumper::new(DumpOptions::new().with_indent(2));
        let value = Value::from(vec![Value::from(true)]);
        assert_eq!(
            dumper.prepare_value_dump("", &value),
            "sequence (size=1) [\n    [0] => boolean true,\n  ]"
        );
    }

    #[test]
    fn test_self_referencing_mapping() {
        let a = Mapping::new();
        a.insert("self", a.clone());

        let dumped = Dumper::new(DumpOptions::default()).dump(&Value::from(a.clone()));
        assert_eq!(dumped, "mapping (size=1) {\n    'self' => cycle -> $,\n}");
        a.clear();
    }

    #[test]
    fn test_back_reference_path_to_nested_ancestor() {
        let root = Mapping::new();
        let child = Sequence::new();
        let grandchild = Mapping::new();
        grandchild.insert("up", child.clone());
        child.push(grandchild.clone());
        root.insert("my \"list\"", child.clone());

        let dumped = Dumper::new(DumpOptions::default()).dump(&Value::from(root));
        assert!(dumped.contains(r#"'up' => cycle -> $["my \"list\""],"#));
        child.clear();
    }

    #[test]
    fn test_shared_sibling_is_not_a_cycle() {
        let shared = Sequence::from(vec![Value::from(1)]);
        let outer = Sequence::from(vec![Value::from(shared.clone()), Value::from(shared)]);

        let dumped = Dumper::new(DumpOptions::default()).dump(&Value::from(outer));
        assert!(!dumped.contains("cycle"));
        assert_eq!(dumped.matches("[0] => int 1,").count(), 2);
    }

    #[test]
    fn test_visiting_set_is_empty_after_dump() {
        let dumper = Dumper::new(DumpOptions::default());
        let value = Value::from(vec![Value::from(vec![Value::Null])]);
        let mut traversal = Traversal::new(&dumper);
        let _ = traversal.generate_dump(&value, "");
        assert!(traversal.visiting.is_empty());
        assert!(traversal.segments.is_empty());
    }

    #[test]
    fn test_path_records_only_composite_steps() {
        let dumper = Dumper::new(DumpOptions::default());
        let root = Mapping::new();
        let inner = Sequence::new();
        root.insert("a", 1);
        root.insert("b", "x");
        root.insert("list", inner.clone());
        inner.push(true);
        inner.push(root.clone());

        let mut traversal = Traversal::new(&dumper);
        let dumped = traversal.generate_dump(&Value::from(root.clone()), "");
        assert!(dumped.contains("[1] => cycle -> $,"));
        assert!(traversal.segments.is_empty());

        traversal.segments.push(Segment::Member("list".to_string()));
        traversal.segments.push(Segment::Index(1));
        assert_eq!(traversal.path(2), r#"$["list"][1]"#);
        assert_eq!(traversal.path(0), "$");
        root.clear();
    }
}
