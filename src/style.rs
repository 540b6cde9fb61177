//! Output styling.
//!
//! The dumper never decides how a fragment looks on screen. It tags each
//! styled fragment with a [`Role`] and hands it to a [`Style`], which returns
//! the text to emit. [`Plain`] returns fragments untouched and is the default;
//! [`Ansi`] adds terminal colors through the `colored` crate.
//!
//! ## Examples
//!
//! ```rust
//! use var_dumper::{DumpOptions, Dumper, Plain, Role, Style, Value};
//!
//! struct Brackets;
//!
//! impl Style for Brackets {
//!     fn paint(&self, role: Role, fragment: &str) -> String {
//!         match role {
//!             Role::Number => format!("<{}>", fragment),
//!             _ => Plain.paint(role, fragment),
//!         }
//!     }
//! }
//!
//! let dumper = Dumper::with_style(DumpOptions::default(), Brackets);
//! assert_eq!(dumper.dump(&Value::from(7)), "int <7>");
//! ```

use colored::Colorize;

/// The part a fragment plays in a dump line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The kind word opening a composite block.
    Header,
    TypeLabel,
    Boolean,
    /// A quoted string, without its length suffix.
    String,
    NullOrPattern,
    Number,
}

/// Decorates rendered fragments.
///
/// Implementations must return `fragment` itself plus, optionally, markup
/// around it; the dumper's layout assumes the visible text is unchanged.
pub trait Style {
    fn paint(&self, role: Role, fragment: &str) -> String;
}

/// Identity styling for logs, files and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plain;

impl Style for Plain {
    #[inline]
    fn paint(&self, _role: Role, fragment: &str) -> String {
        fragment.to_string()
    }
}

/// Terminal colors.
///
/// Whether escape codes are actually emitted follows `colored`'s global
/// switch, which honors `NO_COLOR`, `CLICOLOR_FORCE` and
/// `colored::control::set_override`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ansi;

impl Style for Ansi {
    fn paint(&self, role: Role, fragment: &str) -> String {
        if fragment.is_empty() {
            return String::new();
        }
        let painted = match role {
            Role::Header => fragment.black().bold(),
            Role::TypeLabel => fragment.cyan(),
            Role::Boolean => fragment.magenta(),
            Role::String => fragment.red(),
            Role::NullOrPattern => fragment.blue(),
            Role::Number => fragment.green(),
        };
        painted.to_string()
    }
}

impl<S: Style + ?Sized> Style for &S {
    fn paint(&self, role: Role, fragment: &str) -> String {
        (**self).paint(role, fragment)
    }
}

impl<S: Style + ?Sized> Style for Box<S> {
    fn paint(&self, role: Role, fragment: &str) -> String {
        (**self).paint(role, fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_identity() {
        for role in [
            Role::Header,
            Role::TypeLabel,
            Role::Boolean,
            Role::String,
            Role::NullOrPattern,
            Role::Number,
        ] {
            assert_eq!(Plain.paint(role, "x y"), "x y");
        }
    }

    #[test]
    fn test_ansi_wraps_fragment() {
        colored::control::set_override(true);
        let painted = Ansi.paint(Role::Number, "42");
        colored::control::unset_override();

        assert!(painted.contains("42"));
        assert!(painted.starts_with("\u{1b}["));
        assert_eq!(Ansi.paint(Role::TypeLabel, ""), "");
    }

    #[test]
    fn test_boxed_style() {
        let style: Box<dyn Style> = Box::new(Plain);
        assert_eq!(style.paint(Role::String, "\"a\""), "\"a\"");
    }
}
