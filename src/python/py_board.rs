//! Board bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineError, MoveKind, MoveRecord, Side, Turn};
use crate::rules::Board;

impl From<EngineError> for PyErr {
    fn from(err: EngineError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn parse_side(name: &str) -> PyResult<Side> {
    match name {
        "white" => Ok(Side::White),
        "black" => Ok(Side::Black),
        other => Err(PyValueError::new_err(format!(
            "unknown side {other:?}, expected \"white\" or \"black\""
        ))),
    }
}

fn side_name(side: Side) -> &'static str {
    match side {
        Side::White => "white",
        Side::Black => "black",
    }
}

/// Python wrapper for MoveRecord.
#[pyclass(name = "MoveRecord")]
#[derive(Clone, Debug)]
pub struct PyMoveRecord(pub MoveRecord);

#[pymethods]
impl PyMoveRecord {
    /// Side that moved ("white" or "black").
    #[getter]
    fn side(&self) -> &'static str {
        side_name(self.0.side)
    }

    #[getter]
    fn origin(&self) -> usize {
        self.0.mv.origin
    }

    #[getter]
    fn die(&self) -> u8 {
        self.0.mv.die.value()
    }

    /// "step", "hit" or "bear_off".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0.kind {
            MoveKind::Step => "step",
            MoveKind::Hit => "hit",
            MoveKind::BearOff => "bear_off",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveRecord(side={}, origin={}, die={}, kind={})",
            self.side(),
            self.origin(),
            self.die(),
            self.kind()
        )
    }
}

/// Python wrapper for Board.
///
/// Starts in the standard opening position with no side on turn.
#[pyclass(name = "Board")]
#[derive(Clone, Debug)]
pub struct PyBoard(pub Board);

#[pymethods]
impl PyBoard {
    #[new]
    fn new() -> Self {
        Self(Board::new())
    }

    /// Side on turn: "white", "black" or None.
    #[getter]
    fn turn(&self) -> Option<&'static str> {
        self.0.turn().side().map(side_name)
    }

    #[setter]
    fn set_turn(&mut self, side: Option<&str>) -> PyResult<()> {
        let turn = match side {
            Some(name) => Turn::from(parse_side(name)?),
            None => Turn::Undetermined,
        };
        self.0.set_turn(turn);
        Ok(())
    }

    /// Pass the turn to the other side.
    fn switch_turn(&mut self) -> PyResult<&'static str> {
        Ok(side_name(self.0.switch_turn()?))
    }

    /// Legal (origin, die) pairs for the side on turn.
    fn legal_moves(&self, die: u8) -> PyResult<Vec<(usize, u8)>> {
        Ok(self
            .0
            .legal_moves(die)?
            .iter()
            .map(|m| (m.origin, m.die.value()))
            .collect())
    }

    /// Check one move. Eligibility defaults to the current position's.
    #[pyo3(signature = (origin, die, bear_off_eligible = None))]
    fn is_legal_move(
        &self,
        origin: usize,
        die: u8,
        bear_off_eligible: Option<bool>,
    ) -> PyResult<bool> {
        let eligible = match bear_off_eligible {
            Some(e) => e,
            None => match self.0.turn().side() {
                Some(side) => self.0.is_bear_off_eligible(side)?,
                None => false,
            },
        };
        Ok(self.0.is_legal_move(origin, die, eligible))
    }

    /// Apply a move. Raises ValueError and leaves the board unchanged if illegal.
    fn apply_move(&mut self, origin: usize, die: u8) -> PyResult<PyMoveRecord> {
        Ok(PyMoveRecord(self.0.apply_move(origin, die)?))
    }

    fn is_bear_off_eligible(&self, side: &str) -> PyResult<bool> {
        Ok(self.0.is_bear_off_eligible(parse_side(side)?)?)
    }

    /// Signed point counts as a numpy int8 array.
    fn points<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i8>> {
        PyArray1::from_slice_bound(py, &self.0.points()[..])
    }

    fn bar(&self, side: &str) -> PyResult<u8> {
        Ok(self.0.bar(parse_side(side)?))
    }

    fn collected(&self, side: &str) -> PyResult<u8> {
        Ok(self.0.collected(parse_side(side)?))
    }

    /// The side that has borne off everything, or None.
    #[getter]
    fn winner(&self) -> Option<&'static str> {
        self.0.winner().map(side_name)
    }

    /// Copy the board for lookahead.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Board(turn={}, bar=({}, {}), collected=({}, {}))",
            self.0.turn(),
            self.0.bar(Side::White),
            self.0.bar(Side::Black),
            self.0.collected(Side::White),
            self.0.collected(Side::Black)
        )
    }
}
