//! # Dynamic Values
//!
//! The closed set of item kinds that geometry code hands to the list
//! operations when it works with untyped data (vertex lists, anchor lists,
//! parameter vectors).

use config::constants::approx_equal;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Items that may themselves hold a list of items.
///
/// Shape inspection, flattening and column access only need to know whether
/// an item can be descended into; everything else stays generic.
pub trait Nested: Sized {
    /// The items one level down, or `None` for a flat value.
    fn children(&self) -> Option<&[Self]>;
}

/// Represents a dynamic OpenSCAD value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// The explicit "no value" marker.
    Undef,
    Boolean(bool),
    Number(f64),
    String(String),
    Vector(Vec<Value>),
    Range { start: f64, step: f64, end: f64 },
}

impl Value {
    /// Converts the value to a float (f64).
    /// - Number -> n
    /// - Boolean -> 1.0 / 0.0
    /// - Anything else -> None
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    /// Returns the number as an integer when it has no fractional part.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Number(n)
                if n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64 =>
            {
                Some(*n as i64)
            }
            _ => None,
        }
    }

    /// Returns the items of a vector value.
    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(items) => Some(items),
            _ => None,
        }
    }

    /// Converts a numeric vector to DVec3, padding missing axes with zero.
    pub fn as_dvec3(&self) -> Option<DVec3> {
        match self {
            Value::Vector(items) if items.len() <= 3 => {
                let mut axes = [0.0; 3];
                for (axis, item) in axes.iter_mut().zip(items) {
                    *axis = item.as_f64()?;
                }
                Some(DVec3::from_array(axes))
            }
            _ => None,
        }
    }

    /// Short name of the value's kind, used in diagnostics and
    /// homogeneity checks.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undef => "undef",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Vector(_) => "vector",
            Value::Range { .. } => "range",
        }
    }

    /// Equality that tolerates floating-point noise in numbers, recursing
    /// into vectors.
    pub fn approx_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => approx_equal(*a, *b),
            (Value::Vector(a), Value::Vector(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.approx_eq(y))
            }
            _ => self == other,
        }
    }
}

impl Nested for Value {
    fn children(&self) -> Option<&[Self]> {
        self.as_vector()
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Vector(v)
    }
}

impl From<DVec3> for Value {
    fn from(p: DVec3) -> Self {
        Value::Vector(p.to_array().iter().map(|&c| Value::Number(c)).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undef, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Vector(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Range { start, step, end } => write!(f, "[{}:{}:{}]", start, step, end),
        }
    }
}

/// Builds a `Value::Vector` from anything convertible to `Value`.
///
/// ```rust
/// use openscad_lists::{vector, Value};
/// assert_eq!(vector([1, 2]), Value::Vector(vec![Value::Number(1.0), Value::Number(2.0)]));
/// ```
pub fn vector<I, V>(items: I) -> Value
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Value::Vector(items.into_iter().map(Into::into).collect())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested() {
        let v = vector([vector([1, 2]), Value::from("a"), Value::Undef]);
        assert_eq!(v.to_string(), "[[1, 2], \"a\", undef]");
    }

    #[test]
    fn test_as_integer_rejects_fractions() {
        assert_eq!(Value::Number(3.0).as_integer(), Some(3));
        assert_eq!(Value::Number(-2.0).as_integer(), Some(-2));
        assert_eq!(Value::Number(2.5).as_integer(), None);
        assert_eq!(Value::Number(f64::INFINITY).as_integer(), None);
        assert_eq!(Value::Boolean(true).as_integer(), None);
    }

    #[test]
    fn test_as_integer_rejects_out_of_range() {
        assert_eq!(Value::Number(1e20).as_integer(), None);
        assert_eq!(Value::Number(-1e20).as_integer(), None);
        assert_eq!(Value::Number(i64::MAX as f64).as_integer(), None);
        assert_eq!(Value::Number(i64::MIN as f64).as_integer(), Some(i64::MIN));
    }

    #[test]
    fn test_dvec3_round_trip() {
        let p = DVec3::new(1.0, -2.0, 3.5);
        assert_eq!(Value::from(p).as_dvec3(), Some(p));
        assert_eq!(vector([4, 5]).as_dvec3(), Some(DVec3::new(4.0, 5.0, 0.0)));
        assert_eq!(vector([Value::from("x")]).as_dvec3(), None);
    }

    #[test]
    fn test_approx_eq_recurses() {
        let a = vector([0.1 + 0.2, 1.0]);
        let b = vector([0.3, 1.0]);
        assert_ne!(a, b);
        assert!(a.approx_eq(&b));
        assert!(!a.approx_eq(&vector([0.3])));
    }

    #[test]
    fn test_option_maps_to_undef() {
        assert_eq!(Value::from(None::<f64>), Value::Undef);
        assert_eq!(Value::from(Some(2.0)), Value::Number(2.0));
    }

    #[test]
    fn test_nested_children() {
        assert_eq!(vector([1]).children().map(<[Value]>::len), Some(1));
        assert!(Value::Number(1.0).children().is_none());
    }
}
