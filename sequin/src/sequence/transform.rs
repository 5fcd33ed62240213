use sequin_kind::Kind;

use crate::element::Element;
use crate::error::{Error, Result};

use super::core::Sequence;

impl<T: Element> Sequence<T> {
    /// A new sequence with `item` added at the end.
    ///
    /// The item is always added as a single element, even if it is itself a
    /// collection; use [`Sequence::concat`] to add several elements.
    pub fn append(&self, item: T) -> Result<Self> {
        let mut items = Vec::with_capacity(self.len() + 1);
        items.extend(self.iter().cloned());
        items.push(item);
        Self::new(items)
    }

    /// A new sequence with `item` added at the front.
    pub fn prepend(&self, item: T) -> Result<Self> {
        let mut items = Vec::with_capacity(self.len() + 1);
        items.push(item);
        items.extend(self.iter().cloned());
        Self::new(items)
    }

    /// Concatenate two sequences producing a new sequence.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.is_empty() {
            return Ok(other.clone());
        }
        let mut items = Vec::with_capacity(self.len() + other.len());
        items.extend(self.iter().cloned());
        items.extend(other.iter().cloned());
        Self::new(items)
    }

    /// Split into consecutive chunks of `length` elements. The last chunk
    /// may be shorter.
    pub fn chunk(&self, length: usize) -> Result<Sequence<Sequence<T>>> {
        if length == 0 {
            return Err(Error::invalid_argument(
                "Chunk length must be greater than 0",
            ));
        }
        let chunks = self
            .as_slice()
            .chunks(length)
            .map(|chunk| self.derived(chunk.to_vec()))
            .collect::<Vec<_>>();
        Ok(Sequence::trusted(chunks, Some(Kind::Sequence)))
    }

    /// Map each element and its index to a new value.
    ///
    /// The mapped values must again all be of one kind.
    pub fn select<U, F>(&self, mut map: F) -> Result<Sequence<U>>
    where
        U: Element,
        F: FnMut(&T, usize) -> U,
    {
        Sequence::new(
            self.iter()
                .enumerate()
                .map(|(index, item)| map(item, index))
                .collect(),
        )
    }

    /// The elements for which the predicate holds, given the element and its
    /// index.
    ///
    /// This is the `where` operator.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        let items = self
            .iter()
            .enumerate()
            .filter(|(index, item)| predicate(*item, *index))
            .map(|(_, item)| item.clone())
            .collect();
        self.derived(items)
    }

    /// Combine elements pairwise. Stops at the end of the shorter sequence.
    pub fn zip<U, V, F>(&self, second: &Sequence<U>, mut combiner: F) -> Result<Sequence<V>>
    where
        U: Element,
        V: Element,
        F: FnMut(&T, &U) -> V,
    {
        Sequence::new(
            self.iter()
                .zip(second.iter())
                .map(|(a, b)| combiner(a, b))
                .collect(),
        )
    }

    /// All but the first `n` elements.
    pub fn skip(&self, n: usize) -> Self {
        let n = n.min(self.len());
        self.derived(self.as_slice()[n..].to_vec())
    }

    /// The first `n` elements.
    pub fn take(&self, n: usize) -> Self {
        let n = n.min(self.len());
        self.derived(self.as_slice()[..n].to_vec())
    }

    /// All but the last `n` elements.
    pub fn skip_last(&self, n: usize) -> Self {
        let end = self.len() - n.min(self.len());
        self.derived(self.as_slice()[..end].to_vec())
    }

    /// The last `n` elements.
    pub fn take_last(&self, n: usize) -> Self {
        let start = self.len() - n.min(self.len());
        self.derived(self.as_slice()[start..].to_vec())
    }

    /// Skip elements while the predicate holds; once it fails, keep
    /// everything from there on.
    pub fn skip_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        let start = self
            .iter()
            .enumerate()
            .position(|(index, item)| !predicate(item, index))
            .unwrap_or(self.len());
        self.derived(self.as_slice()[start..].to_vec())
    }

    /// Take elements while the predicate holds; stop at the first failure.
    pub fn take_while<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, usize) -> bool,
    {
        let end = self
            .iter()
            .enumerate()
            .position(|(index, item)| !predicate(item, index))
            .unwrap_or(self.len());
        self.derived(self.as_slice()[..end].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::value::Value;

    use super::*;

    fn numbers() -> Sequence<i64> {
        Sequence::from_array([1, 2, 3]).unwrap()
    }

    #[test]
    fn test_append_rejects_other_kind() {
        let sequence = Sequence::from_json("[1, 2]").unwrap();
        let err = sequence.append(Value::from("x")).unwrap_err();
        assert_eq!(
            err,
            Error::TypeInconsistency {
                expected: Kind::Number,
                actual: Kind::String,
                index: 2,
            }
        );
    }

    #[test]
    fn test_append_array_is_one_element() {
        let sequence = Sequence::from_json("[[1], [2]]").unwrap();
        let appended = sequence
            .append(Value::Array(vec![Value::Integer(3), Value::Integer(4)]))
            .unwrap();
        assert_eq!(appended.count(), 3);
    }

    #[test]
    fn test_prepend_reports_old_first_element() {
        let sequence = Sequence::from_json("[1, 2]").unwrap();
        let err = sequence.prepend(Value::from("x")).unwrap_err();
        assert_eq!(
            err,
            Error::TypeInconsistency {
                expected: Kind::String,
                actual: Kind::Number,
                index: 1,
            }
        );
    }

    #[test]
    fn test_concat_keeps_duplicates() {
        let sequence = numbers().concat(&numbers()).unwrap();
        assert_eq!(sequence.to_array(), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_chunk_zero_fails() {
        assert_eq!(numbers().chunk(0).unwrap_err().code(), "InvalidArgument");
    }

    #[test]
    fn test_select_passes_index() {
        let selected = numbers().select(|item, index| item * 10 + index as i64).unwrap();
        assert_eq!(selected.to_array(), vec![10, 21, 32]);
    }

    #[test]
    fn test_select_revalidates() {
        let sequence = Sequence::from_json("[1, 2]").unwrap();
        let result = sequence.select(|item, _| {
            if item == &Value::Integer(1) {
                Value::Integer(1)
            } else {
                Value::from("two")
            }
        });
        assert_eq!(result.unwrap_err().code(), "TypeInconsistency");
    }

    #[test]
    fn test_filter_passes_index() {
        let sequence = Sequence::from_array([10, 20, 30, 40]).unwrap();
        let filtered = sequence.filter(|_, index| index % 2 == 0);
        assert_eq!(filtered.to_array(), vec![10, 30]);
    }

    #[rstest]
    #[case(0, vec![1, 2, 3], vec![], vec![1, 2, 3], vec![])]
    #[case(1, vec![2, 3], vec![1], vec![1, 2], vec![3])]
    #[case(3, vec![], vec![1, 2, 3], vec![], vec![1, 2, 3])]
    #[case(5, vec![], vec![1, 2, 3], vec![], vec![1, 2, 3])]
    fn test_slices_clamp(
        #[case] n: usize,
        #[case] skipped: Vec<i64>,
        #[case] taken: Vec<i64>,
        #[case] skipped_last: Vec<i64>,
        #[case] taken_last: Vec<i64>,
    ) {
        let sequence = numbers();
        assert_eq!(sequence.skip(n).to_array(), skipped);
        assert_eq!(sequence.take(n).to_array(), taken);
        assert_eq!(sequence.skip_last(n).to_array(), skipped_last);
        assert_eq!(sequence.take_last(n).to_array(), taken_last);
    }

    #[test]
    fn test_skip_while_does_not_reenter() {
        let sequence = Sequence::from_array([1, 2, 5, 1, 2]).unwrap();
        let skipped = sequence.skip_while(|item, _| *item < 3);
        assert_eq!(skipped.to_array(), vec![5, 1, 2]);
    }

    #[test]
    fn test_take_while_does_not_reenter() {
        let sequence = Sequence::from_array([1, 2, 5, 1, 2]).unwrap();
        let taken = sequence.take_while(|item, _| *item < 3);
        assert_eq!(taken.to_array(), vec![1, 2]);
    }

    #[test]
    fn test_while_predicates_get_index() {
        let sequence = Sequence::from_array([9, 9, 9, 9]).unwrap();
        assert_eq!(sequence.take_while(|_, index| index < 2).count(), 2);
        assert_eq!(sequence.skip_while(|_, index| index < 3).count(), 1);
    }
}
