use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::errors::EngineError;

// Python-grensen er et tynt lag over JSON-API-et i lib.rs: strenger inn,
// strenger ut, all parsing/validering skjer ett sted.

fn to_py_err(e: EngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

/// Full trendanalyse. `series_json` = liste av målinger.
#[pyfunction]
fn analyze_trend_json(series_json: &str) -> PyResult<String> {
    crate::analyze_trend_json(series_json).map_err(to_py_err)
}

/// Eksponentiell glatting med gitt alpha.
#[pyfunction]
fn smooth_json(series_json: &str, alpha: f64) -> PyResult<String> {
    crate::smooth_json(series_json, alpha).map_err(to_py_err)
}

/// Mål-pace + ankomstprojeksjon. `now_iso` = "YYYY-MM-DD".
#[pyfunction]
fn project_pace_json(series_json: &str, goal_json: &str, now_iso: &str) -> PyResult<String> {
    crate::project_pace_json(series_json, goal_json, now_iso).map_err(to_py_err)
}

#[pymodule]
fn trendgraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_trend_json, m)?)?;
    m.add_function(wrap_pyfunction!(smooth_json, m)?)?;
    m.add_function(wrap_pyfunction!(project_pace_json, m)?)?;
    Ok(())
}
