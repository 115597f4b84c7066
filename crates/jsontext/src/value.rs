use core::cmp::Ordering;
use core::fmt;
use std::collections::BTreeMap;

use crate::error::Error;
use crate::types::{JsonType, JsonTypeSet};

/// Backing storage for the array alternative.
pub type Array = Vec<Value>;

/// Backing storage for the object alternative.
///
/// A `BTreeMap` is load-bearing here: object iteration, and therefore
/// serialization, is always in ascending lexicographic key order,
/// independent of insertion order.
pub type Object = BTreeMap<String, Value>;

/// An in-memory JSON value.
///
/// A `Value` holds exactly one of seven alternatives. Values are plain
/// owned trees: cloning duplicates the whole subtree, moving transfers it,
/// and nothing is shared between two values.
///
/// The integer and number alternatives are distinct: a literal without a
/// fraction or exponent parses to [`Value::Integer`], everything else to
/// [`Value::Number`]. The only bridge between them is the explicit
/// coercion in [`as_integer`](Value::as_integer) and
/// [`as_number`](Value::as_number).
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

const ARRAY_OR_OBJECT: JsonTypeSet = JsonTypeSet::new()
    .insert(JsonType::Array)
    .insert(JsonType::Object);
const INTEGER_OR_NUMBER: JsonTypeSet = JsonTypeSet::new()
    .insert(JsonType::Integer)
    .insert(JsonType::Number);

impl Value {
    /// The type tag of the alternative this value currently holds.
    #[must_use]
    pub const fn json_type(&self) -> JsonType {
        match self {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Integer(_) => JsonType::Integer,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean payload.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is not a boolean.
    pub fn as_boolean(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(boolean) => Ok(*boolean),
            other => Err(Error::type_mismatch(JsonType::Boolean, other.json_type())),
        }
    }

    /// The integer payload; a number is truncated toward zero.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value holds neither alternative.
    pub fn as_integer(&self) -> Result<i64, Error> {
        match self {
            Value::Integer(integer) => Ok(*integer),
            #[allow(clippy::cast_possible_truncation)]
            Value::Number(number) => Ok(*number as i64),
            other => Err(Error::type_mismatch(INTEGER_OR_NUMBER, other.json_type())),
        }
    }

    /// The number payload; an integer is widened exactly.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value holds neither alternative.
    pub fn as_number(&self) -> Result<f64, Error> {
        match self {
            Value::Number(number) => Ok(*number),
            #[allow(clippy::cast_precision_loss)]
            Value::Integer(integer) => Ok(*integer as f64),
            other => Err(Error::type_mismatch(INTEGER_OR_NUMBER, other.json_type())),
        }
    }

    /// The string payload.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is not a string.
    pub fn as_string(&self) -> Result<&str, Error> {
        match self {
            Value::String(string) => Ok(string),
            other => Err(Error::type_mismatch(JsonType::String, other.json_type())),
        }
    }

    /// The array payload.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is not an array.
    pub fn as_array(&self) -> Result<&Array, Error> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::type_mismatch(JsonType::Array, other.json_type())),
        }
    }

    /// Mutable access to the array payload.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is not an array.
    pub fn as_array_mut(&mut self) -> Result<&mut Array, Error> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::type_mismatch(JsonType::Array, other.json_type())),
        }
    }

    /// The object payload.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is not an object.
    pub fn as_object(&self) -> Result<&Object, Error> {
        match self {
            Value::Object(members) => Ok(members),
            other => Err(Error::type_mismatch(JsonType::Object, other.json_type())),
        }
    }

    /// Mutable access to the object payload.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is not an object.
    pub fn as_object_mut(&mut self) -> Result<&mut Object, Error> {
        match self {
            Value::Object(members) => Ok(members),
            other => Err(Error::type_mismatch(JsonType::Object, other.json_type())),
        }
    }

    /// Number of elements or members.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is neither an array nor an object.
    pub fn len(&self) -> Result<usize, Error> {
        match self {
            Value::Array(items) => Ok(items.len()),
            Value::Object(members) => Ok(members.len()),
            other => Err(Error::type_mismatch(ARRAY_OR_OBJECT, other.json_type())),
        }
    }

    /// Whether the container has no elements or members.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is neither an array nor an object.
    pub fn is_empty(&self) -> Result<bool, Error> {
        match self {
            Value::Array(items) => Ok(items.is_empty()),
            Value::Object(members) => Ok(members.is_empty()),
            other => Err(Error::type_mismatch(ARRAY_OR_OBJECT, other.json_type())),
        }
    }

    /// Appends an element to the array alternative.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is not an array.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<(), Error> {
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Bounds-checked element access; `None` when the value is not an
    /// array or the index is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Mutable counterpart of [`get`](Value::get).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    /// Whether the object has a member with this key; `false` (not an
    /// error) when the value is not an object.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        match self {
            Value::Object(members) => members.contains_key(key),
            _ => false,
        }
    }

    /// The member stored under `key`.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is not an object; a missing-key error,
    /// distinguishable from the former, if the key is absent.
    pub fn at(&self, key: &str) -> Result<&Value, Error> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| Error::missing_key(key))
    }

    /// Mutable counterpart of [`at`](Value::at).
    ///
    /// # Errors
    ///
    /// Same as [`at`](Value::at).
    pub fn at_mut(&mut self, key: &str) -> Result<&mut Value, Error> {
        self.as_object_mut()?
            .get_mut(key)
            .ok_or_else(|| Error::missing_key(key))
    }

    /// Inserts or updates a member of the object alternative, returning
    /// the previous value if the key was already present.
    ///
    /// # Errors
    ///
    /// Type mismatch if the value is not an object.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, Error> {
        Ok(self.as_object_mut()?.insert(key.into(), value.into()))
    }
}

// Structural equality: same alternative, recursively equal payload.
// Numbers compare through `total_cmp` so that `Eq` stays lawful for NaN.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b) == Ordering::Equal,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Total order: type ordinal first, then payload. Hosts can sort and
// deduplicate heterogeneous values deterministically.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Object(a), Value::Object(b)) => a.cmp(b),
            _ => self.json_type().cmp(&other.json_type()),
        }
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Value::Bool(boolean)
    }
}

impl From<i64> for Value {
    fn from(integer: i64) -> Self {
        Value::Integer(integer)
    }
}

impl From<i32> for Value {
    fn from(integer: i32) -> Self {
        Value::Integer(i64::from(integer))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Value::String(string.to_owned())
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Value::String(string)
    }
}

impl From<Array> for Value {
    fn from(items: Array) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(members: Object) -> Self {
        Value::Object(members)
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

/// Renders the value as compact JSON text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::to_string(self))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Object, Value};
    use crate::error::Error;
    use crate::types::JsonType;

    fn sample_object() -> Value {
        let mut value = Value::Object(Object::new());
        value.insert("name", "jsontext").expect("object");
        value.insert("count", 3).expect("object");
        value
    }

    #[test_case(Value::Null, JsonType::Null)]
    #[test_case(Value::Bool(true), JsonType::Boolean)]
    #[test_case(Value::Integer(-4), JsonType::Integer)]
    #[test_case(Value::Number(0.5), JsonType::Number)]
    #[test_case(Value::String(String::new()), JsonType::String)]
    #[test_case(Value::Array(Vec::new()), JsonType::Array)]
    #[test_case(Value::Object(Object::new()), JsonType::Object)]
    fn json_type_reports_the_held_alternative(value: Value, expected: JsonType) {
        assert_eq!(value.json_type(), expected);
    }

    #[test]
    fn default_value_is_null() {
        assert!(Value::default().is_null());
    }

    #[test_case(Value::Number(2.9), 2; "positive truncates toward zero")]
    #[test_case(Value::Number(-2.9), -2; "negative truncates toward zero")]
    #[test_case(Value::Integer(7), 7; "integer passes through")]
    fn as_integer_coerces_numbers(value: Value, expected: i64) {
        assert_eq!(value.as_integer().expect("numeric"), expected);
    }

    #[test]
    fn as_number_widens_integers_exactly() {
        assert_eq!(Value::Integer(3).as_number().expect("numeric"), 3.0);
        assert_eq!(Value::Number(0.25).as_number().expect("numeric"), 0.25);
    }

    #[test]
    fn accessors_report_expected_and_found_alternatives() {
        let error = Value::Integer(1).as_boolean().expect_err("mismatch");
        assert_eq!(error.to_string(), "expected boolean, found integer");

        let error = Value::Null.as_integer().expect_err("mismatch");
        assert_eq!(error.to_string(), "expected integer or number, found null");

        let error = Value::Bool(false).len().expect_err("mismatch");
        assert_eq!(error.to_string(), "expected array or object, found boolean");
    }

    #[test]
    fn at_distinguishes_missing_key_from_type_mismatch() {
        let object = sample_object();
        assert_eq!(
            object.at("name").expect("present").as_string().expect("string"),
            "jsontext"
        );
        assert!(matches!(
            object.at("missing"),
            Err(Error::MissingKey(ref key)) if &**key == "missing"
        ));
        assert!(matches!(
            Value::Array(Vec::new()).at("name"),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn contains_is_false_rather_than_an_error_on_non_objects() {
        assert!(sample_object().contains("name"));
        assert!(!sample_object().contains("missing"));
        assert!(!Value::Integer(3).contains("name"));
    }

    #[test]
    fn insert_updates_in_place_and_returns_the_previous_value() {
        let mut object = sample_object();
        assert_eq!(object.insert("count", 4).expect("object"), Some(Value::Integer(3)));
        assert_eq!(object.insert("extra", true).expect("object"), None);
        assert_eq!(object.at("count").expect("present"), &Value::Integer(4));
        assert!(matches!(
            Value::Integer(3).insert("key", 1),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn push_and_get_operate_on_arrays_only() {
        let mut items = Value::Array(Vec::new());
        items.push(1).expect("array");
        items.push("two").expect("array");
        assert_eq!(items.len().expect("array"), 2);
        assert_eq!(items.get(1), Some(&Value::from("two")));
        assert_eq!(items.get(2), None);
        assert_eq!(Value::Null.get(0), None);
        assert!(matches!(
            Value::Null.push(1),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn integer_and_number_are_distinct_alternatives() {
        assert_ne!(Value::Integer(3), Value::Number(3.0));
        assert_eq!(Value::Number(3.0), Value::Number(3.0));
    }

    #[test]
    fn total_order_sorts_by_type_ordinal_first() {
        let mut values = vec![
            Value::from("text"),
            Value::Null,
            Value::Integer(5),
            Value::Bool(true),
            Value::Number(0.5),
        ];
        values.sort();
        let types: Vec<_> = values.iter().map(Value::json_type).collect();
        assert_eq!(
            types,
            [
                JsonType::Null,
                JsonType::Boolean,
                JsonType::Integer,
                JsonType::Number,
                JsonType::String,
            ]
        );
    }

    #[test]
    fn clones_are_independent_subtrees() {
        let original = sample_object();
        let mut copy = original.clone();
        copy.insert("count", 99).expect("object");
        assert_eq!(original.at("count").expect("present"), &Value::Integer(3));
        assert_eq!(copy.at("count").expect("present"), &Value::Integer(99));
    }

    #[test]
    fn collecting_an_iterator_builds_an_array() {
        let value: Value = (1..=3).collect();
        assert_eq!(value.len().expect("array"), 3);
        assert_eq!(value.get(0), Some(&Value::Integer(1)));
    }
}
