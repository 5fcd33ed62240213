use crate::element::Element;

use super::core::Sequence;

// All sorts here go through slice::sort_by, which is stable: elements that
// compare equal keep their relative order.

impl<T: Element> Sequence<T> {
    /// Sort the elements in ascending natural order.
    pub fn order(&self) -> Self
    where
        T: Ord,
    {
        let mut items = self.to_array();
        items.sort();
        self.derived(items)
    }

    /// Sort the elements in descending natural order.
    pub fn order_descending(&self) -> Self
    where
        T: Ord,
    {
        let mut items = self.to_array();
        items.sort_by(|a, b| b.cmp(a));
        self.derived(items)
    }

    /// Sort the elements in ascending order of `key`.
    pub fn order_by<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sorted_by_key(key, false)
    }

    /// Sort the elements in descending order of `key`.
    ///
    /// Elements with equal keys stay in their original order.
    pub fn order_descending_by<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sorted_by_key(key, true)
    }

    /// The elements in reverse order.
    pub fn reverse(&self) -> Self {
        let mut items = self.to_array();
        items.reverse();
        self.derived(items)
    }

    fn sorted_by_key<K, F>(&self, key: F, descending: bool) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        // the key function runs once per element, not once per comparison
        let keys = self.iter().map(key).collect::<Vec<_>>();
        let mut keys_and_items = keys.into_iter().zip(self.iter().cloned()).collect::<Vec<_>>();
        if descending {
            keys_and_items.sort_by(|(a_key, _), (b_key, _)| b_key.cmp(a_key));
        } else {
            keys_and_items.sort_by(|(a_key, _), (b_key, _)| a_key.cmp(b_key));
        }
        let items = keys_and_items
            .into_iter()
            .map(|(_, item)| item)
            .collect::<Vec<_>>();
        self.derived(items)
    }
}
