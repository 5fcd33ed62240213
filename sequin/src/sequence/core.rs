// creation.rs contains the factory functions
// query.rs contains predicates, equality and element access
// aggregate.rs, order.rs, transform.rs and set.rs contain the operators

use std::fmt;
use std::sync::Arc;

use sequin_kind::Kind;

use crate::element::Element;
use crate::error::{Error, Result};

/// An immutable, ordered sequence of elements of a single kind.
///
/// Every operation that produces a sequence returns a new one; the elements
/// of an existing sequence are never changed. Clones share their elements.
///
/// All elements have the same [`Kind`], which is captured from the first
/// element when the sequence is constructed.
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    items: Arc<[T]>,
    kind: Option<Kind>,
}

// sequences are shared between threads by sharing the buffer
static_assertions::assert_impl_all!(Sequence<i64>: Send, Sync);

impl<T: Element> Sequence<T> {
    /// Construct a sequence from elements.
    ///
    /// Fails with [`Error::TypeInconsistency`] if not all elements have the
    /// kind of the first element.
    pub fn new(items: Vec<T>) -> Result<Self> {
        let kind = validate(&items)?;
        Ok(Self {
            items: items.into(),
            kind,
        })
    }

    /// Construct the empty sequence.
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            kind: None,
        }
    }

    // Construct a sequence from elements already known to be of one kind,
    // such as a subset of another sequence.
    pub(crate) fn trusted(items: Vec<T>, kind: Option<Kind>) -> Self {
        let kind = if items.is_empty() { None } else { kind };
        Self {
            items: items.into(),
            kind,
        }
    }

    // A sequence holding some of our own elements.
    pub(crate) fn derived(&self, items: Vec<T>) -> Self {
        Self::trusted(items, self.kind)
    }

    /// The kind shared by all elements, or `None` for the empty sequence.
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// The number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the elements in order.
    ///
    /// The sequence can be iterated any number of times.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// A copy of the elements. Changing it does not affect the sequence.
    pub fn to_array(&self) -> Vec<T> {
        self.items.to_vec()
    }
}

// Check that all items have the kind of the first. Returns that kind.
pub(crate) fn validate<T: Element>(items: &[T]) -> Result<Option<Kind>> {
    let Some(first) = items.first() else {
        return Ok(None);
    };
    let expected = first.kind();
    for (index, item) in items.iter().enumerate().skip(1) {
        let actual = item.kind();
        if actual != expected {
            tracing::debug!(%expected, %actual, index, "sequence items differ in kind");
            return Err(Error::TypeInconsistency {
                expected,
                actual,
                index,
            });
        }
    }
    Ok(Some(expected))
}

impl<T: Element> Element for Sequence<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T: Element> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items[..] == other.items[..]
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: std::hash::Hash> std::hash::Hash for Sequence<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.items[..].hash(state)
    }
}

impl<T: Element> TryFrom<Vec<T>> for Sequence<T> {
    type Error = Error;

    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::new(items)
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.to_vec().into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("()");
        }
        f.write_str("(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str(")")
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    use super::*;

    #[test]
    fn test_new_captures_kind() {
        let sequence = Sequence::new(vec![1, 2, 3]).unwrap();
        assert_eq!(sequence.kind(), Some(Kind::Number));
        assert_eq!(sequence.count(), 3);
    }

    #[test]
    fn test_empty_has_no_kind() {
        let sequence = Sequence::<i64>::empty();
        assert_eq!(sequence.kind(), None);
        assert!(sequence.is_empty());
        assert_eq!(sequence, Sequence::default());
    }

    #[test]
    fn test_mixed_kinds_rejected() {
        let result = Sequence::new(vec![Value::Integer(1), Value::from("a")]);
        assert_eq!(
            result,
            Err(Error::TypeInconsistency {
                expected: Kind::Number,
                actual: Kind::String,
                index: 1,
            })
        );
    }

    #[test]
    fn test_to_array_is_a_copy() {
        let sequence = Sequence::new(vec![1, 2, 3]).unwrap();
        let mut array = sequence.to_array();
        array.push(4);
        assert_eq!(sequence.count(), 3);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let sequence = Sequence::new(vec![1, 2, 3]).unwrap();
        let iter = sequence.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(sequence.iter().sum::<i32>(), 6);
        assert_eq!(sequence.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Sequence::<i64>::empty().to_string(), "()");
        assert_eq!(Sequence::new(vec![1, 2]).unwrap().to_string(), "(1, 2)");
    }

    #[test]
    fn test_derived_empty_loses_kind() {
        let sequence = Sequence::new(vec![1, 2]).unwrap();
        assert_eq!(sequence.derived(Vec::new()).kind(), None);
    }
}
