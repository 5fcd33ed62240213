use crate::element::Element;
use crate::error::{Error, Operation, Result};

use super::core::Sequence;

impl<T: Element> Sequence<T> {
    /// Whether every element matches. True for the empty sequence.
    ///
    /// Stops at the first element that does not match.
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Whether any element matches. False for the empty sequence.
    ///
    /// Stops at the first element that matches.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Whether the sequence contains a value equal to `value`.
    ///
    /// See [`Sequence::contains_where`] to test with a predicate instead.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Whether any element matches the predicate.
    pub fn contains_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.any(predicate)
    }

    /// The number of elements that match.
    pub fn count_by<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|item| predicate(item)).count()
    }

    /// The position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Whether both sequences have equal elements in the same order.
    pub fn equal(&self, other: &Sequence<T>) -> bool
    where
        T: PartialEq,
    {
        self.as_slice() == other.as_slice()
    }

    /// Whether both sequences have the same length and `comparator` holds
    /// for each pair of elements at the same position.
    pub fn equal_by<U, F>(&self, other: &Sequence<U>, mut comparator: F) -> bool
    where
        U: Element,
        F: FnMut(&T, &U) -> bool,
    {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| comparator(a, b))
    }

    /// The element at `index`.
    pub fn item_at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            size: self.len(),
        })
    }

    /// The element at `index`, or `default` if there is none.
    pub fn item_at_or_default(&self, index: usize, default: Option<T>) -> Option<T> {
        self.get(index).cloned().or(default)
    }

    pub fn first(&self) -> Result<&T> {
        self.as_slice()
            .first()
            .ok_or(Error::EmptyCollection(Operation::First))
    }

    pub fn last(&self) -> Result<&T> {
        self.as_slice()
            .last()
            .ok_or(Error::EmptyCollection(Operation::Last))
    }

    pub fn first_or_default(&self, default: Option<T>) -> Option<T> {
        self.as_slice().first().cloned().or(default)
    }

    pub fn last_or_default(&self, default: Option<T>) -> Option<T> {
        self.as_slice().last().cloned().or(default)
    }

    /// The only element that matches.
    ///
    /// Fails with [`Error::NoMatch`] if nothing matches, and with
    /// [`Error::MultipleMatches`] if more than one element matches.
    pub fn single<F>(&self, predicate: F) -> Result<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.single_option(predicate)?.ok_or(Error::NoMatch)
    }

    /// Like [`Sequence::single`], but returns `default` if nothing matches.
    ///
    /// More than one match is still an error.
    pub fn single_or_default<F>(&self, predicate: F, default: Option<T>) -> Result<Option<T>>
    where
        F: FnMut(&T) -> bool,
    {
        Ok(self.single_option(predicate)?.cloned().or(default))
    }

    fn single_option<F>(&self, mut predicate: F) -> Result<Option<&T>>
    where
        F: FnMut(&T) -> bool,
    {
        let matches = self
            .iter()
            .filter(|item| predicate(item))
            .collect::<Vec<_>>();
        match matches.as_slice() {
            [] => Ok(None),
            [item] => Ok(Some(*item)),
            _ => Err(Error::MultipleMatches(matches.len())),
        }
    }
}
