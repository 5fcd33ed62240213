use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

use sequin_kind::Kind;

use crate::element::Element;
use crate::number::Number;

/// A dynamically typed element, as produced by parsing JSON.
///
/// Equality is strict: values of different kinds are never equal, and
/// neither are `Integer(1)` and `Float(1.0)`. Objects compare by their
/// entries regardless of key order.
///
/// Values are totally ordered: numbers numerically, with an integer before a
/// float of the same value, other values by kind (null, boolean, number,
/// string, array, object) and then by content.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(OrderedFloat<f64>),
    String(String),
    Array(Vec<Value>),
    /// Object entries in document order.
    Object(Vec<(String, Value)>),
}

impl Value {
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Integer(i) => Some(Number::Integer(*i)),
            Value::Float(f) => Some(Number::Float(f.0)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Look up an object entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries
                .iter()
                .find(|(entry_key, _)| entry_key == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    // JSON text for this value. Integral floats keep a decimal point so that
    // they parse back as floats.
    fn write_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => {
                let v = v.0;
                if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
                    write!(f, "{:.1}", v)
                } else {
                    f.write_str(&json::JsonValue::from(v).dump())
                }
            }
            Value::String(s) => f.write_str(&json::JsonValue::from(s.as_str()).dump()),
            Value::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    value.write_json(f)?;
                }
                f.write_str("]")
            }
            Value::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(&json::JsonValue::from(key.as_str()).dump())?;
                    f.write_str(":")?;
                    value.write_json(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

// object entries in key order, so that key order does not affect equality
fn sorted_entries(entries: &[(String, Value)]) -> Vec<&(String, Value)> {
    let mut sorted = entries.iter().collect::<Vec<_>>();
    sorted.sort_by(|(a, _), (b, _)| a.cmp(b));
    sorted
}

impl Element for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) | Value::Float(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    fn number(&self) -> Option<Number> {
        self.as_number()
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Object(a), Value::Object(b)) => sorted_entries(a).cmp(&sorted_entries(b)),
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x
                    .compare(&y)
                    .then_with(|| a.is_float().cmp(&b.is_float())),
                _ => a.kind().rank().cmp(&b.kind().rank()),
            },
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().rank().hash(state);
        match self {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(i) => {
                false.hash(state);
                i.hash(state)
            }
            Value::Float(f) => {
                true.hash(state);
                f.hash(state)
            }
            Value::String(s) => s.hash(state),
            Value::Array(values) => values.hash(state),
            Value::Object(entries) => sorted_entries(entries).hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_json(f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(f.0),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(values) => serializer.collect_seq(values),
            Value::Object(entries) => {
                serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
            }
        }
    }
}

impl From<&json::JsonValue> for Value {
    fn from(value: &json::JsonValue) -> Self {
        match value {
            json::JsonValue::Null => Value::Null,
            json::JsonValue::Short(s) => Value::String(s.to_string()),
            json::JsonValue::String(s) => Value::String(s.clone()),
            json::JsonValue::Number(n) => from_json_number(*n),
            json::JsonValue::Boolean(b) => Value::Boolean(*b),
            json::JsonValue::Array(values) => Value::Array(values.iter().map(Value::from).collect()),
            json::JsonValue::Object(o) => Value::Object(
                o.iter()
                    .map(|(key, value)| (key.to_string(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

// Literals without a fraction or a negative exponent that fit an i64 are
// integers; everything else is a float.
fn from_json_number(n: json::number::Number) -> Value {
    let (positive, mantissa, exponent) = n.as_parts();
    if exponent >= 0 {
        let integer = 10_i128
            .checked_pow(exponent as u32)
            .and_then(|scale| i128::from(mantissa).checked_mul(scale))
            .map(|magnitude| if positive { magnitude } else { -magnitude })
            .and_then(|value| i64::try_from(value).ok());
        if let Some(i) = integer {
            return Value::Integer(i);
        }
    }
    Value::Float(OrderedFloat(n.into()))
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(OrderedFloat(f))
    }
}

impl From<OrderedFloat<f64>> for Value {
    fn from(f: OrderedFloat<f64>) -> Self {
        Value::Float(f)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => Value::Integer(i),
            Number::Float(f) => Value::Float(OrderedFloat(f)),
        }
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

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use ahash::HashSet;

    use super::*;

    #[test]
    fn test_equality_is_strict() {
        assert_ne!(Value::Integer(1), Value::from(1.0));
        assert_ne!(Value::Integer(1), Value::from("1"));
        assert_eq!(Value::from(1.0), Value::from(1.0));
        assert_eq!(Value::from(0.0), Value::from(-0.0));
    }

    #[test]
    fn test_hash_follows_equality() {
        let mut set = HashSet::default();
        set.insert(Value::Integer(2));
        assert!(set.contains(&Value::Integer(2)));
        assert!(!set.contains(&Value::from(2.0)));
        assert!(!set.contains(&Value::from("2")));
    }

    #[test]
    fn test_integer_orders_before_equal_float() {
        assert!(Value::Integer(1) < Value::from(1.0));
        assert!(Value::from(1.0) < Value::Integer(2));
    }

    #[test]
    fn test_order_at_i64_edge_is_consistent() {
        let two_pow_63 = Value::from(9_223_372_036_854_775_808.0);
        let mut values = vec![
            two_pow_63.clone(),
            Value::Integer(i64::MAX),
            Value::Integer(i64::MAX - 1),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![Value::Integer(i64::MAX - 1), Value::Integer(i64::MAX), two_pow_63]
        );
    }

    #[test]
    fn test_objects_ignore_key_order() {
        let first = Value::from(&json::parse(r#"{"a": 1, "b": 2}"#).unwrap());
        let second = Value::from(&json::parse(r#"{"b": 2, "a": 1}"#).unwrap());
        assert_eq!(first, second);
        let mut set = HashSet::default();
        set.insert(first);
        assert!(set.contains(&second));
        let third = Value::from(&json::parse(r#"{"a": 1, "b": 3}"#).unwrap());
        assert_ne!(second, third);
    }

    #[test]
    fn test_order_numbers_across_kinds() {
        let mut values = vec![Value::from(2.5), Value::Integer(1), Value::Integer(3)];
        values.sort();
        assert_eq!(
            values,
            vec![Value::Integer(1), Value::from(2.5), Value::Integer(3)]
        );
    }

    #[test]
    fn test_order_by_kind_rank() {
        assert!(Value::Null < Value::Boolean(false));
        assert!(Value::Boolean(true) < Value::Integer(0));
        assert!(Value::Integer(100) < Value::from("a"));
    }

    #[test]
    fn test_from_json_value() {
        let parsed = json::parse(r#"{"a": [1, 2.5, "x", null, true]}"#).unwrap();
        let value = Value::from(&parsed);
        assert_eq!(
            value.get("a"),
            Some(&Value::Array(vec![
                Value::Integer(1),
                Value::from(2.5),
                Value::from("x"),
                Value::Null,
                Value::Boolean(true),
            ]))
        );
        assert_eq!(value.kind(), Kind::Object);
    }

    #[test]
    fn test_from_json_keeps_large_integers() {
        let parsed = json::parse("[9007199254740993, -9223372036854775808]").unwrap();
        assert_eq!(
            Value::from(&parsed),
            Value::Array(vec![Value::Integer(9_007_199_254_740_993), Value::Integer(i64::MIN)])
        );
    }

    #[test]
    fn test_from_json_keeps_float_literals() {
        let parsed = json::parse("[1.0, 1e2, 2.5e-1, 1e30]").unwrap();
        let Value::Array(values) = Value::from(&parsed) else {
            panic!("expected an array");
        };
        assert!(values[0].is_float());
        assert_eq!(values[0], Value::from(1.0));
        assert_eq!(values[1], Value::Integer(100));
        assert_eq!(values[2], Value::from(0.25));
        assert!(values[3].is_float());
    }

    #[test]
    fn test_display_is_json() {
        let value = Value::Object(vec![
            ("name".to_string(), Value::from("Ann")),
            ("age".to_string(), Value::Integer(30)),
        ]);
        assert_eq!(value.to_string(), r#"{"name":"Ann","age":30}"#);
    }

    #[test]
    fn test_display_keeps_float_point() {
        let value = Value::from(vec![Value::from(1.0), Value::from(-2.5), Value::from("a\"b")]);
        assert_eq!(value.to_string(), r#"[1.0,-2.5,"a\"b"]"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_object_as_map() {
        let value = Value::from(&json::parse(r#"{"name": "Ann", "tags": [1, 2.5]}"#).unwrap());
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"name":"Ann","tags":[1,2.5]}"#
        );
    }
}
