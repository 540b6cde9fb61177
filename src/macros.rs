/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Nested `[...]` and `{...}` become fresh sequences and mappings. Any other
/// token is converted with [`to_value`](crate::to_value).
///
/// A token that fails to serialize, such as a map with sequence keys, becomes
/// [`Value::Null`](crate::Value::Null) and the error is discarded. Call
/// [`to_value`](crate::to_value) directly to see the error.
///
/// # Examples
///
/// ```rust
/// use var_dumper::{dump, value};
///
/// let data = value!({ "id": 1, "tags": ["a", null], "gone": undefined });
/// assert!(dump(&data).starts_with("mapping (size=3) {"));
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    (undefined) => {
        $crate::Value::Undefined
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::from(::std::vec::Vec::<$crate::Value>::new())
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::from(vec![$($crate::value!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::from($crate::Map::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::from(object)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
