use std::hash::Hash;

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use sequin_kind::Kind;

use crate::element::Element;
use crate::error::Result;

use super::core::Sequence;

// The set operations all follow one policy: every value appears at most once
// in the result, at the position where it was first encountered.

impl<T: Element> Sequence<T> {
    /// Remove duplicate elements, keeping the first occurrence.
    pub fn distinct(&self) -> Self
    where
        T: Eq + Hash,
    {
        let mut seen = HashSet::new();
        let items = self
            .iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect();
        self.derived(items)
    }

    /// Remove elements whose key was already seen, keeping the first
    /// element for each key.
    pub fn distinct_by<K, F>(&self, mut key: F) -> Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = HashSet::new();
        let items = self
            .iter()
            .filter(|item| seen.insert(key(*item)))
            .cloned()
            .collect();
        self.derived(items)
    }

    /// The distinct elements of this sequence that do not occur in `other`.
    pub fn except(&self, other: &Self) -> Self
    where
        T: Eq + Hash,
    {
        let mut seen = other.iter().collect::<HashSet<_>>();
        let items = self
            .iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect();
        self.derived(items)
    }

    /// The distinct elements of this sequence that also occur in `other`.
    pub fn intersect(&self, other: &Self) -> Self
    where
        T: Eq + Hash,
    {
        let mut in_other = other.iter().collect::<HashSet<_>>();
        // removing on first hit keeps later duplicates out
        let items = self
            .iter()
            .filter(|item| in_other.remove(*item))
            .cloned()
            .collect();
        self.derived(items)
    }

    /// The distinct elements of both sequences, those of this sequence first.
    ///
    /// The elements of `second` must be of the same kind as those of this
    /// sequence; a mismatch is reported at its index in the concatenation of
    /// both sequences.
    pub fn union(&self, second: &Self) -> Result<Self>
    where
        T: Eq + Hash,
    {
        Ok(self.concat(second)?.distinct())
    }

    /// Group elements by key.
    ///
    /// Groups appear in the order their key was first seen, and the elements
    /// in a group keep their order.
    pub fn group_by<K, F>(&self, mut key: F) -> Sequence<Sequence<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut positions = HashMap::new();
        let mut groups: Vec<Vec<T>> = Vec::new();
        for item in self.iter() {
            let position = *positions.entry(key(item)).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[position].push(item.clone());
        }
        let groups = groups
            .into_iter()
            .map(|group| self.derived(group))
            .collect::<Vec<_>>();
        Sequence::trusted(groups, Some(Kind::Sequence))
    }
}
