//! Game bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, GameConfig, PlayerId, Rotation};
use crate::games::ConnectFive;
use crate::nn::{ConnectFiveEncoder, StateEncoder};
use crate::rules::{Observation, RulesEngine};

use super::py_core::PyGameState;

/// Python wrapper for the ConnectFive rule engine.
///
/// Stateless apart from its rules; states are passed in and returned.
#[pyclass(name = "ConnectFive", frozen)]
pub struct PyConnectFive {
    rules: ConnectFive,
}

fn player(color: Option<u8>) -> PyResult<Option<PlayerId>> {
    match color {
        None => Ok(None),
        Some(c @ 0..=1) => Ok(Some(PlayerId::new(c))),
        Some(c) => Err(PyValueError::new_err(format!("color must be 0 or 1, got {}", c))),
    }
}

#[pymethods]
impl PyConnectFive {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - rotation_period: Rotate after every ply whose round is a multiple of this
    /// - clockwise: Direction of the quarter-turn
    #[new]
    #[pyo3(signature = (rotation_period = 3, clockwise = true))]
    fn new(rotation_period: u32, clockwise: bool) -> PyResult<Self> {
        let rotation = if clockwise {
            Rotation::Clockwise
        } else {
            Rotation::CounterClockwise
        };
        let config = GameConfig::default()
            .with_rotation_period(rotation_period)
            .with_rotation(rotation);
        let rules =
            ConnectFive::with_config(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { rules })
    }

    /// Fresh game.
    fn init(&self) -> PyGameState {
        PyGameState(self.rules.init())
    }

    /// Apply a column action. The caller must mask illegal columns.
    fn step(&self, state: &PyGameState, action: u8) -> PyGameState {
        PyGameState(self.rules.step(&state.0, Action::new(action)))
    }

    /// Apply a column action, raising ValueError if it is not legal.
    fn checked_step(&self, state: &PyGameState, action: u8) -> PyResult<PyGameState> {
        self.rules
            .checked_step(&state.0, Action::new(action))
            .map(PyGameState)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// bool[9, 9, 2]: own pieces in channel 0, opponent's in channel 1.
    #[pyo3(signature = (state, color = None))]
    fn observe<'py>(
        &self,
        py: Python<'py>,
        state: &PyGameState,
        color: Option<u8>,
    ) -> PyResult<Bound<'py, PyArray3<bool>>> {
        let obs = self.rules.observe(&state.0, player(color)?);
        PyArray1::from_vec_bound(py, obs.to_channels_last())
            .reshape(Observation::SHAPE)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// float32[2, 9, 9]: network input, own pieces in plane 0.
    #[pyo3(signature = (state, color = None))]
    fn encode<'py>(
        &self,
        py: Python<'py>,
        state: &PyGameState,
        color: Option<u8>,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let perspective = player(color)?.unwrap_or(state.0.color);
        let encoded = ConnectFiveEncoder::new().encode(&state.0, perspective);
        PyArray1::from_vec_bound(py, encoded.tensor)
            .reshape(encoded.shape)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// bool[9]: columns that can still take a piece.
    fn legal_action_mask<'py>(&self, py: Python<'py>, state: &PyGameState) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_slice_bound(py, &self.rules.legal_action_mask(&state.0))
    }

    /// Whether the game is over.
    fn is_terminal(&self, state: &PyGameState) -> bool {
        self.rules.is_terminal(&state.0)
    }

    /// float32[2]: rewards indexed by colour.
    fn rewards<'py>(&self, py: Python<'py>, state: &PyGameState) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.rules.rewards(&state.0))
    }

    #[getter]
    fn rotation_period(&self) -> u32 {
        self.rules.config().rotation_period
    }

    fn __repr__(&self) -> String {
        let config = self.rules.config();
        format!(
            "ConnectFive(rotation_period={}, rotation={:?})",
            config.rotation_period, config.rotation
        )
    }
}
