//! Indices of elements that satisfy a predicate
//!
//! These are the enumerate variants of the crate: instead of filtering the
//! elements themselves they report where the survivors sit.

use std::borrow::Borrow;
use std::fmt;
use std::iter::{Enumerate, FusedIterator};

/// Lazy iterator over the indices whose element satisfies a predicate
///
/// Created by [`argwhere`] and [`argwhere_not`]. Indices are strictly
/// increasing.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct ArgWhere<I, P> {
    iter: Enumerate<I>,
    predicate: P,
    keep: bool,
}

impl<I: Iterator, P> ArgWhere<I, P> {
    fn new(iter: I, predicate: P, keep: bool) -> Self {
        Self {
            iter: iter.enumerate(),
            predicate,
            keep,
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for ArgWhere<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgWhere")
            .field("iter", &self.iter)
            .field("keep", &self.keep)
            .finish()
    }
}

impl<I, P> Iterator for ArgWhere<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let keep = self.keep;
        let predicate = &mut self.predicate;
        self.iter
            .find(|(_, item)| predicate(item) == keep)
            .map(|(idx, _)| idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, P> FusedIterator for ArgWhere<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Indices whose element satisfies `predicate`
pub fn argwhere<I, P>(iterable: I, predicate: P) -> ArgWhere<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    ArgWhere::new(iterable.into_iter(), predicate, true)
}

/// Indices whose element does not satisfy `predicate`
pub fn argwhere_not<I, P>(iterable: I, predicate: P) -> ArgWhere<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    ArgWhere::new(iterable.into_iter(), predicate, false)
}

/// Indices whose element differs from the type's default ("truthy" slots)
pub fn argnonzero<I>(iterable: I) -> ArgWhere<I::IntoIter, fn(&I::Item) -> bool>
where
    I: IntoIterator,
    I::Item: Default + PartialEq,
{
    ArgWhere::new(
        iterable.into_iter(),
        is_default::<I::Item> as fn(&I::Item) -> bool,
        false,
    )
}

fn is_default<T: Default + PartialEq>(item: &T) -> bool {
    *item == T::default()
}

/// Every index holding an element equal to `value`
pub fn positions_of<I, T>(iterable: I, value: &T) -> Vec<usize>
where
    I: IntoIterator,
    I::Item: Borrow<T>,
    T: PartialEq + ?Sized,
{
    argwhere(iterable, |item| <I::Item as Borrow<T>>::borrow(item) == value).collect()
}

/// Index of the first element satisfying `predicate`
pub fn first_where<I, P>(iterable: I, predicate: P) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    argwhere(iterable, predicate).next()
}

/// Index of the last element satisfying `predicate`
///
/// Consumes the whole input; no double-ended iterator is required.
pub fn last_where<I, P>(iterable: I, predicate: P) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    argwhere(iterable, predicate).last()
}
