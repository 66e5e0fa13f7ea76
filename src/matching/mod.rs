//! Indices grouped by a mapping relation between elements
//!
//! For every distinct element `x` this records where `x` occurs
//! (`args_equal`) and where `mapper(x)` occurs (`args_match`). The match
//! list of a key is a live view of another key's `args_equal`: once `m`
//! has been linked to `x`, later occurrences of `x` also show up as
//! matches of `m`.
//!
//! The relation is recorded at consumption time. Item `x` links itself as
//! the match of `mapper(x)` only when `mapper(x)` has already been seen, so
//! with input `[1, -1]` and a negating mapper, `1` matches `[1]` while `-1`
//! has no match.
//!
//! ```
//! use argitertools::{args_match, MatchMode};
//!
//! let all = args_match([1, -1, 2, -1, 1], |n: &i32| -n, MatchMode::All);
//! assert_eq!(all.get(&-1).unwrap().args_match, Some(&[0, 4][..]));
//! assert_eq!(all.get(&2).unwrap().args_match, None);
//!
//! let only = args_match([1, -1, 2, -1, 1], |n: &i32| -n, MatchMode::OnlyMatches);
//! assert_eq!(only.len(), 1);
//! ```

mod result;

pub use result::{ArgMatchGroup, ArgsMatch};

use std::fmt::Display;
use std::hash::Hash;

use tracing::debug;

use crate::{ArgError, Result};

/// Which keys an [`ArgsMatch`] publishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Only keys that gained a match through a newly seen element
    ///
    /// A key whose counterpart is already published is left out; its data
    /// is still reachable as the counterpart's `args_match`.
    #[default]
    OnlyMatches,
    /// Every distinct element, matched or not
    All,
}

impl MatchMode {
    /// Mode selected by an `only_matches` switch
    pub fn from_only_matches(only_matches: bool) -> Self {
        if only_matches {
            MatchMode::OnlyMatches
        } else {
            MatchMode::All
        }
    }
}

/// Group indices of elements that are equal once mapped
///
/// See the [module documentation](self) for the exact linking rules.
pub fn args_match<I, F>(iterable: I, mut mapper: F, mode: MatchMode) -> ArgsMatch<I::Item>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
    F: FnMut(&I::Item) -> I::Item,
{
    let mut matches = ArgsMatch::new(mode);
    let mut consumed = 0;
    for (index, item) in iterable.into_iter().enumerate() {
        let mapped = mapper(&item);
        matches.record(item, mapped, index);
        consumed = index + 1;
    }
    debug!(len = consumed, keys = matches.len(), ?mode, "matched indices");
    matches
}

/// [`args_match`] with a fallible mapper
///
/// Stops at the first element the mapper rejects and reports its index.
pub fn try_args_match<I, F, E>(
    iterable: I,
    mapper: F,
    mode: MatchMode,
) -> Result<ArgsMatch<I::Item>>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
    F: FnMut(&I::Item) -> std::result::Result<I::Item, E>,
    E: Display,
{
    try_args_match_raw(iterable, mapper, mode).map_err(|(index, err)| ArgError::Mapper {
        index,
        message: err.to_string(),
    })
}

/// [`try_args_match`] handing back the mapper's own error untouched
///
/// The error comes paired with the index of the rejected element.
pub fn try_args_match_raw<I, F, E>(
    iterable: I,
    mut mapper: F,
    mode: MatchMode,
) -> std::result::Result<ArgsMatch<I::Item>, (usize, E)>
where
    I: IntoIterator,
    I::Item: Hash + Eq + Clone,
    F: FnMut(&I::Item) -> std::result::Result<I::Item, E>,
{
    let mut matches = ArgsMatch::new(mode);
    let mut consumed = 0;
    for (index, item) in iterable.into_iter().enumerate() {
        let mapped = mapper(&item).map_err(|err| (index, err))?;
        matches.record(item, mapped, index);
        consumed = index + 1;
    }
    debug!(len = consumed, keys = matches.len(), ?mode, "matched indices");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negate(n: &i32) -> i32 {
        -n
    }

    fn owned(group: ArgMatchGroup<'_>) -> (Vec<usize>, Option<Vec<usize>>) {
        (
            group.args_equal.to_vec(),
            group.args_match.map(|m| m.to_vec()),
        )
    }

    #[test]
    fn test_all_mode_publishes_every_element() {
        let matches = args_match([1, -1, 2, -1, 1], negate, MatchMode::All);

        let keys: Vec<_> = matches.keys().copied().collect();
        assert_eq!(keys, vec![1, -1, 2]);
        assert_eq!(owned(matches.get(&1).unwrap()), (vec![0, 4], Some(vec![1, 3])));
        assert_eq!(owned(matches.get(&-1).unwrap()), (vec![1, 3], Some(vec![0, 4])));
        assert_eq!(owned(matches.get(&2).unwrap()), (vec![2], None));
    }

    #[test]
    fn test_only_matches_skips_counterparts() {
        let matches = args_match([1, -1, 2, -1, 1], negate, MatchMode::OnlyMatches);

        assert_eq!(matches.len(), 1);
        assert!(!matches.contains_key(&-1));
        assert!(matches.get(&2).is_none());
        assert_eq!(owned(matches.get(&1).unwrap()), (vec![0, 4], Some(vec![1, 3])));
    }

    #[test]
    fn test_match_is_recorded_at_consumption_time() {
        let matches = args_match([1, -1], negate, MatchMode::All);
        assert_eq!(owned(matches.get(&1).unwrap()), (vec![0], Some(vec![1])));
        assert_eq!(owned(matches.get(&-1).unwrap()), (vec![1], None));
    }

    #[test]
    fn test_identity_matches_itself() {
        let matches = args_match(["a", "b", "a"], |s| *s, MatchMode::OnlyMatches);
        assert_eq!(matches.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(owned(matches.get("a").unwrap()), (vec![0, 2], Some(vec![0, 2])));
    }

    #[test]
    fn test_latest_linker_owns_the_match() {
        // 1 and 4 both map onto 1; whichever was linked last provides the view
        let matches = args_match([1, 4, 1], |n: &i32| n % 3, MatchMode::All);
        assert_eq!(owned(matches.get(&1).unwrap()), (vec![0, 2], Some(vec![0, 2])));
        assert_eq!(owned(matches.get(&4).unwrap()), (vec![1], None));
    }

    #[test]
    fn test_fallible_mapper_reports_index() {
        let result = try_args_match(
            ["1", "x", "2"],
            |s| s.parse::<i32>().map(|_| *s),
            MatchMode::All,
        );
        assert!(matches!(result, Err(ArgError::Mapper { index: 1, .. })));

        let ok = try_args_match([3, -3], |n: &i32| Ok::<_, String>(-n), MatchMode::default())
            .unwrap();
        assert_eq!(owned(ok.get(&3).unwrap()), (vec![0], Some(vec![1])));
    }

    #[derive(Debug, PartialEq)]
    struct Rejected(i32);

    #[test]
    fn test_raw_variant_keeps_mapper_error() {
        let err = try_args_match_raw(
            [5, 6, 7],
            |n: &i32| if *n == 6 { Err(Rejected(*n)) } else { Ok(-n) },
            MatchMode::All,
        )
        .unwrap_err();
        assert_eq!(err, (1, Rejected(6)));

        let ok = try_args_match_raw([2, -2], |n: &i32| Ok::<_, Rejected>(-n), MatchMode::OnlyMatches)
            .unwrap();
        assert_eq!(owned(ok.get(&2).unwrap()), (vec![0], Some(vec![1])));
    }

    #[test]
    fn test_mode_from_switch() {
        assert_eq!(MatchMode::from_only_matches(true), MatchMode::OnlyMatches);
        assert_eq!(MatchMode::from_only_matches(false), MatchMode::All);
        assert_eq!(MatchMode::default(), MatchMode::OnlyMatches);
    }
}
