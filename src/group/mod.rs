//! Indices grouped by equal elements or by a derived key

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

/// Index lists keyed by element, in order of first appearance
///
/// Every consumed index lands in exactly one group and each group's indices
/// are strictly increasing.
#[derive(Debug, Clone)]
pub struct ArgGroups<K> {
    slots: HashMap<K, usize>,
    groups: Vec<(K, Vec<usize>)>,
}

impl<K> Default for ArgGroups<K> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> ArgGroups<K> {
    /// Create an empty grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` was seen at `index`
    pub fn push(&mut self, key: K, index: usize) {
        match self.slots.get(&key) {
            Some(&slot) => self.groups[slot].1.push(index),
            None => {
                self.slots.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![index]));
            }
        }
    }

    /// Indices recorded for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&[usize]>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots
            .get(key)
            .map(|&slot| self.groups[slot].1.as_slice())
    }

    /// Whether `key` was seen
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(key)
    }
}

impl<K> ArgGroups<K> {
    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no element was consumed
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[usize])> + '_ {
        self.groups.iter().map(|(key, idx)| (key, idx.as_slice()))
    }

    /// Distinct keys in order of first appearance
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Only the groups holding more than one index
    pub fn duplicates(&self) -> impl Iterator<Item = (&K, &[usize])> + '_ {
        self.iter().filter(|(_, idx)| idx.len() > 1)
    }

    /// Consume into `(key, indices)` pairs in order of first appearance
    pub fn into_vec(self) -> Vec<(K, Vec<usize>)> {
        self.groups
    }
}

/// Group the indices of equal elements
pub fn argsequal<I>(iterable: I) -> ArgGroups<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
{
    arggroup_by_key(iterable, |item| item)
}

/// Group indices by a key derived from each element
pub fn arggroup_by_key<I, K, F>(iterable: I, mut key: F) -> ArgGroups<K>
where
    I: IntoIterator,
    K: Hash + Eq + Clone,
    F: FnMut(I::Item) -> K,
{
    let mut groups = ArgGroups::new();
    let mut consumed = 0;
    for (idx, item) in iterable.into_iter().enumerate() {
        groups.push(key(item), idx);
        consumed = idx + 1;
    }
    debug!(len = consumed, keys = groups.len(), "grouped indices");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argsequal_keeps_first_appearance_order() {
        let groups = argsequal(["b", "a", "b", "c", "a", "b"]);
        let collected: Vec<_> = groups.iter().map(|(k, idx)| (*k, idx.to_vec())).collect();
        assert_eq!(
            collected,
            vec![("b", vec![0, 2, 5]), ("a", vec![1, 4]), ("c", vec![3])]
        );
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_group_by_key_lookup() {
        let words = vec!["apple".to_string(), "avocado".into(), "cherry".into()];
        let groups = arggroup_by_key(&words, |w| w.chars().next());
        assert_eq!(groups.get(&Some('a')), Some(&[0, 1][..]));
        assert!(groups.contains_key(&Some('c')));
        assert_eq!(groups.get(&Some('z')), None);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_duplicates_only() {
        let groups = argsequal([1, 2, 1, 3, 3]);
        let dups: Vec<_> = groups.duplicates().map(|(k, idx)| (*k, idx.to_vec())).collect();
        assert_eq!(dups, vec![(1, vec![0, 2]), (3, vec![3, 4])]);
    }

    #[test]
    fn test_borrowed_lookup_and_empty() {
        let groups = argsequal(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(groups.get("y"), Some(&[1][..]));

        let empty = argsequal(Vec::<u32>::new());
        assert!(empty.is_empty());
        assert!(empty.into_vec().is_empty());
    }
}
