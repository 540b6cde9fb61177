//! Error types for the serde bridge.
//!
//! Dumping itself never fails: every [`Value`](crate::Value) classifies into
//! some [`Kind`](crate::Kind) and every leaf renders to some text. Errors only
//! arise when converting a Rust value into a [`Value`](crate::Value) through
//! [`to_value`](crate::to_value) or [`dump_serialize`](crate::dump_serialize),
//! or when deserializing a [`Value`](crate::Value) from another serde format.
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use var_dumper::{to_value, Error};
//!
//! let mut map = BTreeMap::new();
//! map.insert(vec![1, 2], "tuple-ish key");
//!
//! let result = to_value(&map);
//! assert!(matches!(result, Err(Error::KeyMustBeString(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors raised while bridging serde data into a dumpable [`Value`](crate::Value).
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A map key could not be turned into mapping key text
    #[error("Map key must be a string, integer, char or bool, found {0}")]
    KeyMustBeString(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a key error naming the offending key shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use var_dumper::Error;
    ///
    /// let err = Error::key_must_be_string("sequence");
    /// assert!(err.to_string().contains("found sequence"));
    /// ```
    pub fn key_must_be_string(found: &str) -> Self {
        Error::KeyMustBeString(found.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use var_dumper::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
