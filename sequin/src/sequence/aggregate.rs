use std::cmp::Ordering;

use crate::element::Element;
use crate::error::{Error, Operation, Result};
use crate::number::Number;

use super::core::Sequence;

impl<T: Element> Sequence<T> {
    /// The arithmetic mean of the elements, always as a float.
    pub fn average(&self) -> Result<f64> {
        let numbers = self.numbers(Operation::Average)?;
        let total = sum_numbers(&numbers);
        Ok(total.as_f64() / numbers.len() as f64)
    }

    /// The sum of the elements.
    ///
    /// The result is an integer if all elements are integers, and a float
    /// otherwise.
    pub fn sum(&self) -> Result<Number> {
        let numbers = self.numbers(Operation::Sum)?;
        Ok(sum_numbers(&numbers))
    }

    /// The largest element.
    ///
    /// The result is a float as soon as any element is a float.
    pub fn max(&self) -> Result<Number> {
        self.extreme(Operation::Max, Ordering::Greater)
    }

    /// The smallest element.
    ///
    /// The result is a float as soon as any element is a float.
    pub fn min(&self) -> Result<Number> {
        self.extreme(Operation::Min, Ordering::Less)
    }

    fn extreme(&self, operation: Operation, wanted: Ordering) -> Result<Number> {
        let numbers = self.numbers(operation)?;
        let Some((first, rest)) = numbers.split_first() else {
            return Err(Error::EmptyCollection(operation));
        };
        let mut float_seen = first.is_float();
        let mut extreme = *first;
        for number in rest {
            float_seen |= number.is_float();
            // once NaN has been found it sticks
            if is_nan(&extreme) {
                continue;
            }
            if is_nan(number) || number.compare(&extreme) == wanted {
                extreme = *number;
            }
        }
        if float_seen {
            Ok(extreme.to_float())
        } else {
            Ok(extreme)
        }
    }

    // The elements as numbers. Emptiness is checked before the kind, and the
    // kind is checked once for the whole sequence.
    fn numbers(&self, operation: Operation) -> Result<Vec<Number>> {
        let kind = self.kind().ok_or(Error::EmptyCollection(operation))?;
        if !kind.is_numeric() {
            return Err(Error::NonNumeric(operation));
        }
        self.iter()
            .map(|item| item.number().ok_or(Error::NonNumeric(operation)))
            .collect()
    }
}

fn sum_numbers(numbers: &[Number]) -> Number {
    numbers
        .iter()
        .fold(Number::Integer(0), |total, number| total.add(*number))
}

fn is_nan(number: &Number) -> bool {
    matches!(number, Number::Float(f) if f.is_nan())
}
