//! Python bindings for the backgammon engine.
//!
//! Built with the `python` feature. Exposes the board to a Python training
//! loop, with the point array as a numpy array.
//!
//! # Quick Start
//!
//! ```python
//! import rust_backgammon as bg
//!
//! board = bg.Board()
//! board.turn = "black"
//!
//! moves = board.legal_moves(1)     # [(5, 1), (7, 1), ...]
//! board.apply_move(*moves[0])
//! obs = board.points()             # numpy int8 array of length 24
//! ```

use pyo3::prelude::*;

mod py_board;

pub use py_board::*;

/// rust_backgammon: single-die backgammon rules for Python callers.
#[pymodule]
fn rust_backgammon(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PyMoveRecord>()?;
    Ok(())
}
