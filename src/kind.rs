//! Value classification.
//!
//! [`classify`] maps every [`Value`] onto exactly one [`Kind`]. The mapping is
//! total: anything without a dedicated kind falls into [`Kind::Other`].

use crate::Value;
use std::fmt;

/// The closed set of kinds a dump distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Sequence,
    Mapping,
    String,
    Integer,
    Float,
    Boolean,
    Null,
    Function,
    Pattern,
    Other,
}

impl Kind {
    /// Returns `true` for kinds whose values contain nested entries.
    #[inline]
    #[must_use]
    pub const fn is_composite(self) -> bool {
        matches!(self, Kind::Sequence | Kind::Mapping)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::String => "string",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::Function => "function",
            Kind::Pattern => "pattern",
            Kind::Other => "other",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a value.
///
/// Checks run in a fixed priority order: sequence, function, null, pattern,
/// mapping, then the primitives. Numbers are split by value, so a whole
/// `Float` is an [`Kind::Integer`].
///
/// # Examples
///
/// ```rust
/// use var_dumper::{classify, Kind, Value};
///
/// assert_eq!(classify(&Value::from(vec![])), Kind::Sequence);
/// assert_eq!(classify(&Value::from(2.0)), Kind::Integer);
/// assert_eq!(classify(&Value::from(2.5)), Kind::Float);
/// assert_eq!(classify(&Value::Undefined), Kind::Other);
/// ```
#[must_use]
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Sequence(_) => Kind::Sequence,
        Value::Function(_) => Kind::Function,
        Value::Null => Kind::Null,
        Value::Pattern(_) => Kind::Pattern,
        Value::Mapping(_) => Kind::Mapping,
        Value::Bool(_) => Kind::Boolean,
        Value::String(_) => Kind::String,
        Value::Number(n) if n.is_whole() => Kind::Integer,
        Value::Number(_) => Kind::Float,
        Value::Undefined | Value::Symbol(_) | Value::Date(_) | Value::BigInt(_) => Kind::Other,
    }
}
