//! Python bindings that expose the index helpers via PyO3.
use pyo3::{
    exceptions::PyValueError,
    prelude::*,
    types::{PyDict, PyModule},
};

use crate::{ArgError, MatchMode};

fn to_py_err(err: ArgError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Index of the first maximum of a list of numbers.
#[pyfunction]
pub fn argmax(values: Vec<f64>) -> PyResult<usize> {
    crate::argmax_partial(values).map_err(to_py_err)
}

/// Index of the first minimum of a list of numbers.
#[pyfunction]
pub fn argmin(values: Vec<f64>) -> PyResult<usize> {
    crate::argmin_partial(values).map_err(to_py_err)
}

/// Indices that would sort a list of numbers ascending (stable).
#[pyfunction]
pub fn argsort(values: Vec<f64>) -> PyResult<Vec<usize>> {
    crate::argsort_partial(values).map_err(to_py_err)
}

/// Group indices of integers that are equal once mapped by `mapfunc`.
///
/// Errors raised by `mapfunc` (or a non-int return) are re-raised as is.
///
/// Returns:
///     Dict of `item -> {"argsequal": [...], "argsmatch": [...] | None}`.
#[pyfunction]
#[pyo3(signature = (iterable, mapfunc, only_matches = true))]
pub fn argsmatch<'py>(
    py: Python<'py>,
    iterable: Vec<i64>,
    mapfunc: Bound<'py, PyAny>,
    only_matches: bool,
) -> PyResult<Bound<'py, PyDict>> {
    // Exceptions raised by `mapfunc` propagate unchanged
    let matches = crate::try_args_match_raw(
        iterable,
        |item| mapfunc.call1((*item,))?.extract::<i64>(),
        MatchMode::from_only_matches(only_matches),
    )
    .map_err(|(_, err)| err)?;

    let result = PyDict::new(py);
    for (key, group) in matches.iter() {
        let entry = PyDict::new(py);
        entry.set_item("argsequal", group.args_equal.to_vec())?;
        entry.set_item("argsmatch", group.args_match.map(<[usize]>::to_vec))?;
        result.set_item(*key, entry)?;
    }
    Ok(result)
}

/// Create Python module.
#[pymodule]
pub fn argitertools_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(argmax, m)?)?;
    m.add_function(wrap_pyfunction!(argmin, m)?)?;
    m.add_function(wrap_pyfunction!(argsort, m)?)?;
    m.add_function(wrap_pyfunction!(argsmatch, m)?)?;
    Ok(())
}
