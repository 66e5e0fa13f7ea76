//! Method-call syntax for the index helpers

use std::hash::Hash;

use crate::group::ArgGroups;
use crate::matching::{ArgsMatch, MatchMode};
use crate::select::ArgWhere;
use crate::Result;

/// Extension trait implemented for every [`Iterator`]
///
/// ```
/// use argitertools::ArgIterTools;
///
/// let temps = [12.5, 17.0, 9.25];
/// assert_eq!(temps.iter().arg_min_by_key(|t| (*t * 100.0) as i64).unwrap(), 2);
/// assert_eq!("banana".chars().arg_where(|c| *c == 'a').collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
pub trait ArgIterTools: Iterator + Sized {
    /// See [`argmax`](crate::argmax)
    fn arg_max(self) -> Result<usize>
    where
        Self::Item: Ord,
    {
        crate::extremum::argmax(self)
    }

    /// See [`argmin`](crate::argmin)
    fn arg_min(self) -> Result<usize>
    where
        Self::Item: Ord,
    {
        crate::extremum::argmin(self)
    }

    /// See [`argmax_by_key`](crate::argmax_by_key)
    fn arg_max_by_key<K, F>(self, key: F) -> Result<usize>
    where
        K: Ord,
        F: FnMut(Self::Item) -> K,
    {
        crate::extremum::argmax_by_key(self, key)
    }

    /// See [`argmin_by_key`](crate::argmin_by_key)
    fn arg_min_by_key<K, F>(self, key: F) -> Result<usize>
    where
        K: Ord,
        F: FnMut(Self::Item) -> K,
    {
        crate::extremum::argmin_by_key(self, key)
    }

    /// See [`argminmax`](crate::argminmax)
    fn arg_min_max(self) -> Result<(usize, usize)>
    where
        Self::Item: Ord + Clone,
    {
        crate::extremum::argminmax(self)
    }

    /// See [`argwhere`](crate::argwhere)
    fn arg_where<P>(self, predicate: P) -> ArgWhere<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        crate::select::argwhere(self, predicate)
    }

    /// See [`argsort`](crate::argsort)
    fn arg_sort(self) -> Vec<usize>
    where
        Self::Item: Ord,
    {
        crate::order::argsort(self)
    }

    /// See [`argsort_by_key`](crate::argsort_by_key)
    fn arg_sort_by_key<K, F>(self, key: F) -> Vec<usize>
    where
        K: Ord,
        F: FnMut(Self::Item) -> K,
    {
        crate::order::argsort_by_key(self, key)
    }

    /// See [`argsequal`](crate::argsequal)
    fn arg_groups(self) -> ArgGroups<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
    {
        crate::group::argsequal(self)
    }

    /// See [`args_match`](crate::args_match)
    fn args_match<F>(self, mapper: F, mode: MatchMode) -> ArgsMatch<Self::Item>
    where
        Self::Item: Hash + Eq + Clone,
        F: FnMut(&Self::Item) -> Self::Item,
    {
        crate::matching::args_match(self, mapper, mode)
    }
}

impl<I: Iterator> ArgIterTools for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_methods_delegate() {
        let queue: VecDeque<i32> = VecDeque::from(vec![5, -2, 8, -2]);

        assert_eq!(queue.iter().arg_max().unwrap(), 2);
        assert_eq!(queue.iter().arg_min().unwrap(), 1);
        assert_eq!(queue.iter().arg_min_max().unwrap(), (1, 2));
        assert_eq!(queue.iter().arg_max_by_key(|v| v.abs()).unwrap(), 2);
        assert_eq!(queue.iter().arg_sort(), vec![1, 3, 0, 2]);
        assert_eq!(queue.iter().arg_sort_by_key(|v| v.abs()), vec![1, 3, 0, 2]);
        assert_eq!(queue.iter().arg_groups().get(&-2), Some(&[1, 3][..]));

        let matched = queue.into_iter().args_match(|v| -v, MatchMode::All);
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn test_empty_iterator_errors() {
        assert!(std::iter::empty::<u8>().arg_max().is_err());
    }
}
