//! Typed values
//!
//! The set of value types a store can hold. A key is not bound to a type:
//! overwriting a key may change its type, and a typed read of a mismatching
//! entry behaves like a miss.

use serde::{Deserialize, Serialize};

/// A single typed value stored under a key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 32-bit signed integer
    Int(i32),

    /// 32-bit float
    Float(f32),

    /// 64-bit signed integer
    Long(i64),

    /// UTF-8 string
    Str(String),
}

impl Value {
    /// Returns the boolean if this is a `Bool`, otherwise `None`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int`, otherwise `None`
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a `Float`, otherwise `None`
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the long if this is a `Long`, otherwise `None`
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// Returns the string if this is a `Str`, otherwise `None`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Value::Long(-3).as_long(), Some(-3));
        assert_eq!(Value::Str("hi".into()).as_str(), Some("hi"));
    }

    #[test]
    fn accessors_miss_on_other_variants() {
        assert_eq!(Value::Int(7).as_bool(), None);
        assert_eq!(Value::Bool(true).as_str(), None);
        assert_eq!(Value::Str("42".into()).as_long(), None);
    }

    #[test]
    fn from_impls_pick_expected_variant() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(5i32), Value::Int(5));
        assert_eq!(Value::from(5i64), Value::Long(5));
        assert_eq!(Value::from("x"), Value::Str("x".into()));
    }
}
