//! Python bindings for the catalog generator.

use numpy::PyReadwriteArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::catalog;
use crate::parameters::ProcessParameters;

/// Simulate a temporal ETAS catalog into pre-allocated numpy arrays.
///
/// The `magnitudes` and `times` arrays must have equal length `N`; they are
/// overwritten in place with `N` events in increasing time order, after
/// `n_skip` warm-up events have been generated and discarded. Rates and
/// times have to be passed in mutually consistent units; unit conversion is
/// the caller's concern.
#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn generate_catalog(
    mu0: f64,
    mmin: f64,
    mmax: f64,
    beta: f64,
    p: f64,
    c: f64,
    mr: f64,
    offspring_fraction: f64,
    n_skip: usize,
    seed: u64,
    mut magnitudes: PyReadwriteArray1<f64>,
    mut times: PyReadwriteArray1<f64>,
) -> PyResult<()> {
    let process = ProcessParameters::new(mu0, mmin, mmax, beta, p, c, mr, offspring_fraction)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    catalog::generate_catalog(
        &process,
        n_skip,
        seed,
        magnitudes.as_array_mut(),
        times.as_array_mut(),
    )
    .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
pub fn core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_catalog, m)?)?;
    Ok(())
}
