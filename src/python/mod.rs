//! Python bindings for the connect-five rule engine.
//!
//! Exposes the engine's six operations to Python training loops. Observations,
//! masks and rewards come back as numpy arrays.
//!
//! # Quick Start
//!
//! ```python
//! import connect_five as c5
//!
//! game = c5.ConnectFive()
//! state = game.init()
//!
//! while not game.is_terminal(state):
//!     mask = game.legal_action_mask(state)
//!     state = game.step(state, int(mask.nonzero()[0][0]))
//!
//! print(game.rewards(state))
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// connect_five: rotating 9x9 connect-five for reinforcement learning.
#[pymodule]
fn connect_five(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameState>()?;
    m.add_class::<PyConnectFive>()?;

    Ok(())
}
