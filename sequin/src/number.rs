use std::cmp::Ordering;
use std::fmt;

/// A numeric element, as seen by the aggregation operations.
///
/// Integers stay integers as long as everything they are combined with is an
/// integer. As soon as a float takes part the result is a float.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// The integer value, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(_) => None,
        }
    }

    pub(crate) fn to_float(self) -> Number {
        Number::Float(self.as_f64())
    }

    /// Add two numbers, promoting to float when needed.
    ///
    /// Integer overflow promotes to float rather than failing.
    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => match a.checked_add(b) {
                Some(sum) => Number::Integer(sum),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }

    /// Numeric comparison across integers and floats.
    ///
    /// NaN compares as less than anything else, so it never wins a `max`.
    pub fn compare(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(b),
            (Number::Integer(a), Number::Float(b)) => compare_integer_float(*a, *b),
            (Number::Float(a), Number::Integer(b)) => compare_integer_float(*b, *a).reverse(),
            (Number::Float(a), Number::Float(b)) => match a.partial_cmp(b) {
                Some(ordering) => ordering,
                None => a.is_nan().cmp(&b.is_nan()).reverse(),
            },
        }
    }
}

// 2^63, the first float above every i64
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

// compare an integer and a float without rounding the integer
fn compare_integer_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return Ordering::Greater;
    }
    // i64::MAX as f64 rounds up to 2^63, so out of range floats never get cast
    if f >= I64_BOUND {
        return Ordering::Less;
    }
    if f < -I64_BOUND {
        return Ordering::Greater;
    }
    let floor = f.floor();
    match i.cmp(&(floor as i64)) {
        Ordering::Equal if f != floor => Ordering::Less,
        ordering => ordering,
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => self.compare(other) == Ordering::Equal,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b),
            _ => Some(self.compare(other)),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Integer(i)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_add_stays_integer() {
        assert_eq!(Number::Integer(2).add(Number::Integer(3)), Number::Integer(5));
        assert!(Number::Integer(2).add(Number::Integer(3)).is_integer());
    }

    #[test]
    fn test_float_promotes() {
        let sum = Number::Integer(2).add(Number::Float(0.5));
        assert!(sum.is_float());
        assert_eq!(sum.as_f64(), 2.5);
    }

    #[test]
    fn test_overflow_promotes() {
        let sum = Number::Integer(i64::MAX).add(Number::Integer(1));
        assert!(sum.is_float());
    }

    #[test]
    fn test_compare_across_kinds() {
        assert_eq!(Number::Integer(1).compare(&Number::Float(1.0)), Ordering::Equal);
        assert_eq!(Number::Integer(1).compare(&Number::Float(1.5)), Ordering::Less);
        assert_eq!(Number::Float(2.5).compare(&Number::Integer(2)), Ordering::Greater);
        assert_eq!(Number::Float(f64::NAN).compare(&Number::Integer(2)), Ordering::Less);
    }

    #[test]
    fn test_compare_at_i64_edge() {
        let two_pow_63 = Number::Float(I64_BOUND);
        assert_eq!(Number::Integer(i64::MAX).compare(&two_pow_63), Ordering::Less);
        assert_eq!(Number::Integer(i64::MAX - 1).compare(&two_pow_63), Ordering::Less);
        assert_ne!(Number::Integer(i64::MAX), two_pow_63);
        assert_eq!(Number::Integer(i64::MIN), Number::Float(-I64_BOUND));
        assert_eq!(Number::Integer(i64::MIN).compare(&Number::Float(f64::NEG_INFINITY)), Ordering::Greater);
    }

    #[test]
    fn test_compare_fractions() {
        assert_eq!(Number::Integer(2).compare(&Number::Float(2.5)), Ordering::Less);
        assert_eq!(Number::Integer(3).compare(&Number::Float(2.5)), Ordering::Greater);
        assert_eq!(Number::Integer(-3).compare(&Number::Float(-2.5)), Ordering::Less);
        assert_eq!(Number::Integer(-2).compare(&Number::Float(-2.5)), Ordering::Greater);
    }
}
