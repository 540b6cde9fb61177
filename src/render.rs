//! Leaf and key rendering.
//!
//! [`render_leaf`] turns a non-composite value into its type label and
//! formatted text, and [`render_key`] produces the left-hand side of an entry
//! line. Both are pure; the [`Dumper`](crate::Dumper) assembles their output
//! into lines.

use crate::{Kind, Role, Style, Value};
use std::fmt;

/// Fixed text shown in place of any callable.
pub const FUNCTION_PLACEHOLDER: &str = "function () {}";

/// Date layout used for textual coercion, in UTC.
const DATE_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT+0000";

/// A rendered leaf: type label plus formatted text.
///
/// The label is empty for kinds that carry no annotation (`null`,
/// functions, patterns and everything in [`Kind::Other`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaf {
    pub label: &'static str,
    pub text: String,
}

/// Renders a leaf value.
///
/// Strings are quoted verbatim, without escaping, and report their length in
/// Unicode scalar values of the original text. This differs from a UTF-16
/// `length`: `"😀"` reports `length=1`, not 2.
///
/// # Examples
///
/// ```rust
/// use var_dumper::{render_leaf, Plain, Value};
///
/// let leaf = render_leaf(&Value::from("héllo"), &Plain);
/// assert_eq!(leaf.label, "string");
/// assert_eq!(leaf.text, "\"héllo\" (length=5)");
///
/// let leaf = render_leaf(&Value::Null, &Plain);
/// assert_eq!((leaf.label, leaf.text.as_str()), ("", "null"));
/// ```
pub fn render_leaf<S: Style + ?Sized>(value: &Value, style: &S) -> Leaf {
    match value {
        Value::Bool(b) => Leaf {
            label: "boolean",
            text: style.paint(Role::Boolean, if *b { "true" } else { "false" }),
        },
        Value::String(s) => Leaf {
            label: "string",
            text: format!(
                "{} (length={})",
                style.paint(Role::String, &format!("\"{}\"", s)),
                s.chars().count()
            ),
        },
        Value::Null => Leaf {
            label: "",
            text: style.paint(Role::NullOrPattern, "null"),
        },
        Value::Number(n) => Leaf {
            label: if n.is_whole() { "int" } else { "float" },
            text: style.paint(Role::Number, &n.to_string()),
        },
        Value::Function(_) => Leaf {
            label: "",
            text: FUNCTION_PLACEHOLDER.to_string(),
        },
        Value::Pattern(p) => Leaf {
            label: "",
            text: style.paint(Role::NullOrPattern, &p.to_string()),
        },
        other => Leaf {
            label: "",
            text: Coerce(other).to_string(),
        },
    }
}

/// Default textual coercion for values without a dedicated rendering.
struct Coerce<'a>(&'a Value);

impl fmt::Display for Coerce<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Undefined => f.write_str("undefined"),
            Value::Symbol(desc) => write!(f, "Symbol({})", desc.as_deref().unwrap_or("")),
            Value::Date(dt) => write!(f, "{}", dt.format(DATE_FORMAT)),
            Value::BigInt(bi) => write!(f, "{}", bi),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Function(_) => f.write_str(FUNCTION_PLACEHOLDER),
            Value::Pattern(p) => write!(f, "{}", p),
            Value::Sequence(seq) => write!(f, "sequence (size={})", seq.len()),
            Value::Mapping(map) => write!(f, "mapping (size={})", map.len()),
        }
    }
}

/// The key of one composite entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

/// Renders the left-hand side of an entry line, indent included.
///
/// Sequence indices render as `[i]`. Mapping keys render as `[k]` when the key
/// text is an integer literal and as `'k'` otherwise, so numeric-looking keys
/// read like index access. A named key under a sequence renders as `'k'`.
///
/// The entry's own kind is accepted alongside the parent's but does not
/// affect the result.
///
/// # Examples
///
/// ```rust
/// use var_dumper::{render_key, Key, Kind};
///
/// assert_eq!(render_key(Kind::Sequence, Kind::Integer, "  ", Key::Index(2)), "  [2]");
/// assert_eq!(render_key(Kind::Mapping, Kind::Integer, "", Key::Name("2")), "[2]");
/// assert_eq!(render_key(Kind::Mapping, Kind::String, "", Key::Name("id")), "'id'");
/// ```
#[must_use]
pub fn render_key(parent: Kind, _entry: Kind, indent: &str, key: Key<'_>) -> String {
    match (parent, key) {
        (_, Key::Index(i)) => format!("{}[{}]", indent, i),
        (Kind::Sequence, Key::Name(name)) => format!("{}'{}'", indent, name),
        (_, Key::Name(name)) if is_integer_literal(name) => format!("{}[{}]", indent, name),
        (_, Key::Name(name)) => format!("{}'{}'", indent, name),
    }
}

/// An optional minus sign followed by one or more ASCII digits.
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Function, Number, Pattern, Plain};
    use chrono::{TimeZone, Utc};
    use num_bigint::BigInt;

    fn leaf(value: Value) -> (&'static str, String) {
        let Leaf { label, text } = render_leaf(&value, &Plain);
        (label, text)
    }

    #[test]
    fn test_scalars() {
        assert_eq!(leaf(Value::from(true)), ("boolean", "true".to_string()));
        assert_eq!(leaf(Value::from(false)), ("boolean", "false".to_string()));
        assert_eq!(leaf(Value::Null), ("", "null".to_string()));
        assert_eq!(leaf(Value::from(42)), ("int", "42".to_string()));
        assert_eq!(leaf(Value::from(-1.5)), ("float", "-1.5".to_string()));
        assert_eq!(
            leaf(Value::Number(Number::Float(f64::NAN))),
            ("float", "NaN".to_string())
        );
    }

    #[test]
    fn test_string_length_ignores_quotes_and_escapes() {
        assert_eq!(
            leaf(Value::from("say \"hi\"\n")),
            ("string", "\"say \"hi\"\n\" (length=9)".to_string())
        );
        assert_eq!(leaf(Value::from("")), ("string", "\"\" (length=0)".to_string()));
        assert_eq!(leaf(Value::from("日本")), ("string", "\"日本\" (length=2)".to_string()));
        assert_eq!(leaf(Value::from("😀")), ("string", "\"😀\" (length=1)".to_string()));
    }

    #[test]
    fn test_opaque_values() {
        assert_eq!(
            leaf(Value::from(Function::new("handler", 3))),
            ("", "function () {}".to_string())
        );
        assert_eq!(
            leaf(Value::from(Pattern::new("abc", "gi"))),
            ("", "/abc/gi".to_string())
        );
    }

    #[test]
    fn test_other_coercion() {
        let date = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(
            leaf(Value::from(date)),
            ("", "Sat Mar 09 2024 14:05:00 GMT+0000".to_string())
        );
        assert_eq!(leaf(Value::Undefined), ("", "undefined".to_string()));
        assert_eq!(
            leaf(Value::Symbol(Some("id".to_string()))),
            ("", "Symbol(id)".to_string())
        );
        assert_eq!(leaf(Value::Symbol(None)), ("", "Symbol()".to_string()));
        assert_eq!(
            leaf(Value::from(BigInt::from(u64::MAX) * 2u32)),
            ("", "36893488147419103230".to_string())
        );
    }

    #[test]
    fn test_sequence_keys() {
        assert_eq!(
            render_key(Kind::Sequence, Kind::Null, "    ", Key::Index(0)),
            "    [0]"
        );
        assert_eq!(
            render_key(Kind::Sequence, Kind::Null, "", Key::Name("extra")),
            "'extra'"
        );
    }

    #[test]
    fn test_mapping_keys() {
        assert_eq!(render_key(Kind::Mapping, Kind::Null, "", Key::Name("2")), "[2]");
        assert_eq!(render_key(Kind::Mapping, Kind::Null, "", Key::Name("-17")), "[-17]");
        assert_eq!(render_key(Kind::Mapping, Kind::Null, "", Key::Name("2a")), "'2a'");
        assert_eq!(render_key(Kind::Mapping, Kind::Null, "", Key::Name("1.5")), "'1.5'");
        assert_eq!(render_key(Kind::Mapping, Kind::Null, "", Key::Name("-")), "'-'");
        assert_eq!(render_key(Kind::Mapping, Kind::Null, "", Key::Name("")), "''");
        assert_eq!(render_key(Kind::Mapping, Kind::Null, "", Key::Name("+1")), "'+1'");
    }

    #[test]
    fn test_numeric_key_same_under_both_parents() {
        assert_eq!(
            render_key(Kind::Mapping, Kind::Integer, "", Key::Name("2")),
            render_key(Kind::Sequence, Kind::Integer, "", Key::Index(2))
        );
    }
}
