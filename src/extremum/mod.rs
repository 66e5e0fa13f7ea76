//! Index of the largest or smallest element
//!
//! Ties always resolve to the first occurrence, for maxima and minima alike.
//! Each function consumes its input exactly once.

use std::cmp::Ordering;

use crate::{ArgError, Result};

/// Walk `iterable` keeping the index of the current best element.
///
/// `replaces(best, candidate)` decides whether the candidate takes over;
/// it only sees elements in consumption order.
fn scan_best<I, F>(iterable: I, operation: &'static str, mut replaces: F) -> Result<usize>
where
    I: IntoIterator,
    F: FnMut((usize, &I::Item), (usize, &I::Item)) -> Result<bool>,
{
    let mut iter = iterable.into_iter().enumerate();
    let (mut best_idx, mut best) = iter.next().ok_or(ArgError::Empty { operation })?;

    for (idx, item) in iter {
        if replaces((best_idx, &best), (idx, &item))? {
            best_idx = idx;
            best = item;
        }
    }

    Ok(best_idx)
}

/// Index of the first maximum
pub fn argmax<I>(iterable: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    scan_best(iterable, "argmax", |(_, best), (_, item)| Ok(item > best))
}

/// Index of the first minimum
pub fn argmin<I>(iterable: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    scan_best(iterable, "argmin", |(_, best), (_, item)| Ok(item < best))
}

/// Index of the first element whose key is maximal
///
/// The key is computed once per element.
pub fn argmax_by_key<I, K, F>(iterable: I, key: F) -> Result<usize>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(I::Item) -> K,
{
    scan_best(iterable.into_iter().map(key), "argmax_by_key", |(_, best), (_, item)| {
        Ok(item > best)
    })
}

/// Index of the first element whose key is minimal
pub fn argmin_by_key<I, K, F>(iterable: I, key: F) -> Result<usize>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(I::Item) -> K,
{
    scan_best(iterable.into_iter().map(key), "argmin_by_key", |(_, best), (_, item)| {
        Ok(item < best)
    })
}

/// Index of the first maximum according to `compare`
pub fn argmax_by<I, F>(iterable: I, mut compare: F) -> Result<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    scan_best(iterable, "argmax_by", |(_, best), (_, item)| {
        Ok(compare(item, best) == Ordering::Greater)
    })
}

/// Index of the first minimum according to `compare`
pub fn argmin_by<I, F>(iterable: I, mut compare: F) -> Result<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    scan_best(iterable, "argmin_by", |(_, best), (_, item)| {
        Ok(compare(item, best) == Ordering::Less)
    })
}

/// Index of the first maximum of a partially ordered input
///
/// Fails with [`ArgError::Incomparable`] on the first pair that has no
/// ordering, e.g. a float `NaN`.
pub fn argmax_partial<I>(iterable: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    scan_best(iterable, "argmax_partial", |(left, best), (right, item)| {
        partial(left, best, right, item).map(|ord| ord == Ordering::Greater)
    })
}

/// Index of the first minimum of a partially ordered input
pub fn argmin_partial<I>(iterable: I) -> Result<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    scan_best(iterable, "argmin_partial", |(left, best), (right, item)| {
        partial(left, best, right, item).map(|ord| ord == Ordering::Less)
    })
}

/// Indices of the first minimum and the first maximum, in one pass
pub fn argminmax<I>(iterable: I) -> Result<(usize, usize)>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    let mut iter = iterable.into_iter().enumerate();
    let (_, first) = iter.next().ok_or(ArgError::Empty {
        operation: "argminmax",
    })?;

    let (mut min_idx, mut min) = (0, first.clone());
    let (mut max_idx, mut max) = (0, first);

    for (idx, item) in iter {
        if item < min {
            min_idx = idx;
            min = item;
        } else if item > max {
            max_idx = idx;
            max = item;
        }
    }

    Ok((min_idx, max_idx))
}

fn partial<T: PartialOrd>(left: usize, a: &T, right: usize, b: &T) -> Result<Ordering> {
    b.partial_cmp(a)
        .ok_or(ArgError::Incomparable { left, right })
}
