//! # Index-based iteration tools
//!
//! Variants of the usual iteration helpers that answer with *positions*
//! instead of values: where is the maximum, which slots satisfy a predicate,
//! in which order would the elements sort, which slots hold equal items.
//!
//! Every operation accepts any [`IntoIterator`], so slices, arrays, `Vec`,
//! `VecDeque` and drained queues all work the same way. An element's index is
//! the zero-based position at which it was consumed.
//!
//! ## Modules
//!
//! 1. **extremum**: `argmax`, `argmin` and friends
//! 2. **select**: lazy `argwhere` and other enumerate variants
//! 3. **order**: stable `argsort` and `argrank`
//! 4. **group**: indices grouped by equal elements or derived keys
//! 5. **matching**: `args_match`, indices grouped by a mapping relation
//!
//! ## Usage Example
//!
//! ```
//! use argitertools::{argmax, args_match, argsort, MatchMode};
//!
//! let scores = [3, 9, 4, 9];
//! assert_eq!(argmax(scores).unwrap(), 1);
//! assert_eq!(argsort(scores), vec![0, 2, 1, 3]);
//!
//! let groups = args_match([1, -1, 2, -1, 1], |n: &i32| -n, MatchMode::OnlyMatches);
//! let one = groups.get(&1).unwrap();
//! assert_eq!(one.args_equal, &[0, 4]);
//! assert_eq!(one.args_match, Some(&[1, 3][..]));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod extremum; // Index of max/min
pub mod select;   // Indices matching a predicate
pub mod order;    // Indices in sorted order
pub mod group;    // Indices grouped by key
pub mod matching; // Indices grouped by a mapping relation
pub mod iter_ext; // Method-call syntax for all of the above
/// Python bindings exposing the index helpers to Python callers.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use extremum::{
    argmax, argmax_by, argmax_by_key, argmax_partial, argmin, argmin_by, argmin_by_key,
    argmin_partial, argminmax,
};
pub use group::{arggroup_by_key, argsequal, ArgGroups};
pub use iter_ext::ArgIterTools;
pub use matching::{
    args_match, try_args_match, try_args_match_raw, ArgMatchGroup, ArgsMatch, MatchMode,
};
pub use order::{
    argrank, argsort, argsort_by, argsort_by_key, argsort_descending, argsort_ordered,
    argsort_partial, SortOrder,
};
pub use select::{argnonzero, argwhere, argwhere_not, first_where, last_where, positions_of, ArgWhere};

use thiserror::Error;

/// Errors raised by the index helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// The input had no elements to pick an index from
    #[error("{operation} of an empty iterable")]
    Empty {
        /// Name of the operation that needed at least one element
        operation: &'static str,
    },

    /// Two elements could not be ordered against each other
    #[error("elements at indices {left} and {right} are not comparable")]
    Incomparable {
        /// Index of the element already retained
        left: usize,
        /// Index of the element being compared
        right: usize,
    },

    /// A fallible mapper rejected an element
    #[error("mapper failed on element {index}: {message}")]
    Mapper {
        /// Index of the element the mapper was applied to
        index: usize,
        /// Rendered error returned by the mapper
        message: String,
    },
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ArgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ArgError::Empty { operation: "argmax" };
        assert_eq!(err.to_string(), "argmax of an empty iterable");

        let err = ArgError::Incomparable { left: 0, right: 3 };
        assert_eq!(err.to_string(), "elements at indices 0 and 3 are not comparable");

        let err = ArgError::Mapper {
            index: 2,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "mapper failed on element 2: boom");
    }
}
