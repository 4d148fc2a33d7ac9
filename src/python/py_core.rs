//! Core type bindings for Python.

use numpy::{PyArray1, PyArrayMethods, PyArray2};
use pyo3::prelude::*;

use crate::core::{Board, GameState, PlayerId, Winner, CELLS, COLUMNS, ROWS};

/// Python wrapper for GameState.
///
/// Immutable: every engine call returns a new object.
#[pyclass(name = "GameState", frozen)]
#[derive(Clone, Debug)]
pub struct PyGameState(pub GameState);

#[pymethods]
impl PyGameState {
    /// Build a position from 81 row-major cells (-1 empty, 0, 1).
    #[new]
    #[pyo3(signature = (cells, color = 0, round = 0))]
    fn new(cells: Vec<i8>, color: u8, round: u32) -> PyResult<Self> {
        let cells: [i8; CELLS] = cells.try_into().map_err(|v: Vec<i8>| {
            pyo3::exceptions::PyValueError::new_err(format!(
                "expected {} cells, got {}",
                CELLS,
                v.len()
            ))
        })?;
        if cells.iter().any(|c| !(-1..=1).contains(c)) {
            return Err(pyo3::exceptions::PyValueError::new_err(
                "cells must be -1, 0 or 1",
            ));
        }
        if color > 1 {
            return Err(pyo3::exceptions::PyValueError::new_err("color must be 0 or 1"));
        }
        Ok(Self(GameState::from_board(
            Board::from_cells(cells),
            PlayerId::new(color),
            round,
        )))
    }

    /// Player to move (0 or 1).
    #[getter]
    fn color(&self) -> u8 {
        self.0.color.0
    }

    /// -1 none, 0 or 1 for a single winner, 2 for both.
    #[getter]
    fn winner(&self) -> i8 {
        self.0.winner.as_i8()
    }

    /// Plies played.
    #[getter]
    fn round(&self) -> u32 {
        self.0.round
    }

    /// Board as a flat int8 array of 81 cells.
    #[getter]
    fn board<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i8>> {
        PyArray1::from_slice_bound(py, self.0.board.cells())
    }

    /// Board as a 9x9 int8 array.
    fn board_2d<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<i8>>> {
        PyArray1::from_slice_bound(py, self.0.board.cells())
            .reshape([ROWS, COLUMNS])
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __str__(&self) -> String {
        self.0.board.to_string()
    }

    fn __repr__(&self) -> String {
        let winner = match self.0.winner {
            Winner::None => "none".to_string(),
            Winner::Player(p) => format!("P{}", p.0),
            Winner::Both => "both".to_string(),
        };
        format!(
            "GameState(round={}, color={}, winner={})",
            self.0.round, self.0.color.0, winner
        )
    }
}
