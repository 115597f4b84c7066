//! # jsontext
//!
//! A self-contained JSON text engine: a tagged [`Value`] model with typed
//! accessors, a recursive-descent parser with byte-precise errors, and a
//! compact/pretty serializer.
//!
//! Objects iterate — and therefore serialize — in ascending lexicographic
//! key order, integers and floating-point numbers are distinct
//! alternatives, and duplicate keys in parsed input keep their first
//! occurrence.
//!
//! ```
//! let config = jsontext::parse(r#"{"name": "jsontext", "features": ["ordered", "typed"]}"#)?;
//!
//! assert_eq!(config.at("name")?.as_string()?, "jsontext");
//! assert_eq!(config.at("features")?.len()?, 2);
//!
//! let compact = jsontext::to_string(&config);
//! assert_eq!(compact, r#"{"features":["ordered","typed"],"name":"jsontext"}"#);
//! # Ok::<(), jsontext::Error>(())
//! ```
//!
//! Parse failures carry the zero-based byte offset of the first grammar
//! violation:
//!
//! ```
//! let error = jsontext::parse("[1, 2,]").unwrap_err();
//! assert_eq!(error.position(), Some(6));
//! assert_eq!(error.to_string(), "trailing comma at position 6");
//! ```

mod error;
mod parser;
mod ser;
#[cfg(feature = "serde")]
mod serde_impl;
mod types;
mod value;

pub use error::{Error, ParseError, ParseErrorKind};
pub use parser::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use ser::{to_string, to_string_pretty, to_string_with, WriteOptions};
pub use types::{JsonType, JsonTypeSet};
pub use value::{Array, Object, Value};

/// Parses JSON text into a [`Value`] under the default options.
///
/// The whole input must be one JSON value: after the value and any
/// trailing whitespace, leftover input is an error.
///
/// ```
/// let value = jsontext::parse("[1, 2.5, null]")?;
/// assert!(value.is_array());
/// assert_eq!(value.get(0).unwrap().as_integer()?, 1);
/// # Ok::<(), jsontext::Error>(())
/// ```
///
/// # Errors
///
/// [`Error::Parse`] carrying the byte offset of the first grammar
/// violation.
pub fn parse(text: &str) -> Result<Value, Error> {
    ParseOptions::default().parse(text)
}

/// Creates a [`ParseOptions`] builder for parsing with non-default
/// settings, such as a different nesting limit.
#[must_use]
pub fn options() -> ParseOptions {
    ParseOptions::default()
}
