//! Indices in sorted order
//!
//! All sorts are stable: equal elements keep the order in which they were
//! consumed, in both directions. The output is always a permutation of
//! `0..n`.

use std::cmp::Ordering;

use tracing::debug;

use crate::{ArgError, Result};

/// Direction of an index sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest element first
    #[default]
    Ascending,
    /// Largest element first
    Descending,
}

impl SortOrder {
    /// Orient an ascending comparison result
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

fn sort_indices<T, F>(items: &[T], mut compare: F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_by(|&a, &b| compare(&items[a], &items[b]));
    debug!(len = items.len(), "sorted indices");
    indices
}

/// Indices that would sort the input ascending
pub fn argsort<I>(iterable: I) -> Vec<usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    argsort_ordered(iterable, SortOrder::Ascending)
}

/// Indices that would sort the input largest first
pub fn argsort_descending<I>(iterable: I) -> Vec<usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    argsort_ordered(iterable, SortOrder::Descending)
}

/// Indices that would sort the input in the given direction
pub fn argsort_ordered<I>(iterable: I, order: SortOrder) -> Vec<usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let items: Vec<_> = iterable.into_iter().collect();
    sort_indices(&items, |a, b| order.apply(a.cmp(b)))
}

/// Indices that would sort the input by a derived key
///
/// Keys are computed once per element.
pub fn argsort_by_key<I, K, F>(iterable: I, key: F) -> Vec<usize>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(I::Item) -> K,
{
    let keys: Vec<K> = iterable.into_iter().map(key).collect();
    sort_indices(&keys, K::cmp)
}

/// Indices that would sort the input according to `compare`
pub fn argsort_by<I, F>(iterable: I, compare: F) -> Vec<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let items: Vec<_> = iterable.into_iter().collect();
    sort_indices(&items, compare)
}

/// Indices that would sort a partially ordered input ascending
///
/// Fails with [`ArgError::Incomparable`] naming the first pair the sort
/// could not order, lower index first.
pub fn argsort_partial<I>(iterable: I) -> Result<Vec<usize>>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let items: Vec<_> = iterable.into_iter().collect();
    let mut indices: Vec<usize> = (0..items.len()).collect();
    let mut failure: Option<ArgError> = None;

    indices.sort_by(|&a, &b| {
        if failure.is_some() {
            return Ordering::Equal;
        }
        match items[a].partial_cmp(&items[b]) {
            Some(ordering) => ordering,
            None => {
                failure = Some(ArgError::Incomparable {
                    left: a.min(b),
                    right: a.max(b),
                });
                Ordering::Equal
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(indices),
    }
}

/// Rank of every element: position it would take after an ascending sort
///
/// This is the inverse permutation of [`argsort`].
pub fn argrank<I>(iterable: I) -> Vec<usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let order = argsort(iterable);
    let mut ranks = vec![0; order.len()];
    for (rank, idx) in order.into_iter().enumerate() {
        ranks[idx] = rank;
    }
    ranks
}
