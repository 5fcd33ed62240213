use crate::element::Element;
use crate::error::{Error, Result};
use crate::value::Value;

use super::core::Sequence;

// the longest sequence a factory is willing to materialize
const MAXIMUM_GENERATED_SIZE: usize = 1 << 25;

fn generated_size(length: i128) -> Result<usize> {
    match usize::try_from(length) {
        Ok(length) if length <= MAXIMUM_GENERATED_SIZE => Ok(length),
        _ => Err(Error::invalid_argument(format!(
            "Sequence of {} elements exceeds the maximum of {}",
            length, MAXIMUM_GENERATED_SIZE
        ))),
    }
}

impl<T: Element> Sequence<T> {
    /// Construct a sequence from anything that yields elements.
    ///
    /// This is the same as [`Sequence::new`].
    pub fn from_array<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(items.into_iter().collect())
    }

    /// A sequence of `count` copies of `element`.
    ///
    /// A negative count, or one above 2^25, is an [`Error::InvalidArgument`].
    pub fn repeat(element: T, count: i64) -> Result<Self> {
        if count < 0 {
            return Err(Error::invalid_argument(format!(
                "Count must not be negative, got {}",
                count
            )));
        }
        let count = generated_size(count.into())?;
        let kind = element.kind();
        Ok(Self::trusted(vec![element; count], Some(kind)))
    }
}

impl<T: Element + Into<Value>> Sequence<T> {
    /// Serialize the sequence as a JSON array.
    pub fn to_json(&self) -> String {
        Value::from(self.to_array()).to_string()
    }
}

impl<T: Element + Into<Value>> From<Sequence<T>> for Value {
    fn from(sequence: Sequence<T>) -> Self {
        Value::from(sequence.to_array())
    }
}

impl Sequence<Value> {
    /// Parse a JSON array into a sequence.
    ///
    /// Text that is not JSON, or JSON that is not an array, fails with
    /// [`Error::ParseError`]. An array whose entries are of different kinds
    /// fails with [`Error::TypeInconsistency`].
    pub fn from_json(json_text: &str) -> Result<Self> {
        let parsed = json::parse(json_text).map_err(|e| {
            tracing::debug!(error = %e, "cannot parse JSON text");
            Error::from(e)
        })?;
        match parsed {
            json::JsonValue::Array(values) => Self::new(values.iter().map(Value::from).collect()),
            _ => Err(Error::ParseError("expected a JSON array".to_string())),
        }
    }
}

impl Sequence<i64> {
    /// The integers from `from` to `to`, both inclusive.
    ///
    /// If `to` is smaller than `from` the range counts down.
    pub fn from_range(from: i64, to: i64) -> Result<Self> {
        let step = if to < from { -1 } else { 1 };
        Self::from_range_step(from, to, step)
    }

    /// The integers from `from` towards `to` (inclusive) in increments of
    /// `step`.
    ///
    /// A negative step produces a descending range. If the step points away
    /// from `to` the range is empty. A zero step, or a range that would be
    /// longer than 2^25 elements, is an [`Error::InvalidArgument`].
    pub fn from_range_step(from: i64, to: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(Error::invalid_argument("Step must not be 0"));
        }
        if (step > 0 && from > to) || (step < 0 && from < to) {
            return Ok(Self::empty());
        }
        // i128 so that neither the span nor the intermediate values overflow
        let (from, step) = (from as i128, step as i128);
        let length = generated_size((to as i128 - from).abs() / step.abs() + 1)?;
        // every value lies between from and to, so it fits in an i64
        let items = (0..length as i128)
            .map(|i| (from + i * step) as i64)
            .collect::<Vec<_>>();
        Self::new(items)
    }
}

impl Sequence<f64> {
    /// The numbers from `from` towards `to` (inclusive) in increments of
    /// `step`, which may be fractional.
    ///
    /// Follows the rules of [`Sequence::from_range_step`]. `to` is included
    /// when it lies within rounding error of a step, and bounds and step must
    /// be finite.
    pub fn from_float_range(from: f64, to: f64, step: f64) -> Result<Self> {
        if !(from.is_finite() && to.is_finite() && step.is_finite()) {
            return Err(Error::invalid_argument(
                "Range bounds and step must be finite",
            ));
        }
        if step == 0.0 {
            return Err(Error::invalid_argument("Step must not be 0"));
        }
        if (step > 0.0 && from > to) || (step < 0.0 && from < to) {
            return Ok(Self::empty());
        }
        let steps = ((to - from) / step + 1e-9).floor();
        if steps >= MAXIMUM_GENERATED_SIZE as f64 {
            return Err(Error::invalid_argument(format!(
                "Sequence of {} elements exceeds the maximum of {}",
                steps + 1.0,
                MAXIMUM_GENERATED_SIZE
            )));
        }
        let items = (0..=steps as usize)
            .map(|i| from + i as f64 * step)
            .collect::<Vec<_>>();
        Self::new(items)
    }
}
