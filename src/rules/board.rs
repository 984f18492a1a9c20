//! Board state: the point array, bars, borne-off counts and the turn.
//!
//! ## Representation
//!
//! Each of the 24 points holds a signed count. Positive counts are White
//! pieces, negative counts are Black pieces, zero is empty, so a point can
//! never hold both sides at once.
//!
//! ## Conservation
//!
//! For each side, pieces on points + pieces on the bar + pieces borne off is
//! constant for the lifetime of a board. `Board::pieces` reports that total.
//!
//! The board is `Copy`; callers that want to look ahead copy it and apply
//! moves to the copy.
//!
//! Boards serialize as their `Layout` and deserialize through
//! `Board::try_from_layout`, so a stored board over the piece limit is
//! rejected rather than loaded.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Layout, Result, Side, SideMap, Turn, POINT_COUNT};

/// Most pieces a side may have, so every counter fits its storage.
pub const MAX_PIECES_PER_SIDE: u32 = i8::MAX as u32;

/// A backgammon position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Layout", into = "Layout")]
pub struct Board {
    pub(crate) points: [i8; POINT_COUNT],
    pub(crate) bar: SideMap<u8>,
    pub(crate) collected: SideMap<u8>,
    pub(crate) turn: Turn,
}

impl Board {
    /// The standard opening position with an undetermined turn.
    #[must_use]
    pub fn new() -> Self {
        Self::from_layout(&Layout::standard())
    }

    /// Build a board from a layout.
    ///
    /// # Panics
    ///
    /// If a side has more than `MAX_PIECES_PER_SIDE` pieces.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        match Self::try_from_layout(layout) {
            Ok(board) => board,
            Err(err) => panic!("At most 127 pieces per side: {}", err),
        }
    }

    /// Build a board from a layout, rejecting one over the piece limit.
    pub fn try_from_layout(layout: &Layout) -> Result<Self> {
        let totals = SideMap::from_fn(|side| layout.total(side));
        if let Some((side, &total)) = totals
            .iter()
            .find(|&(_, &total)| total > MAX_PIECES_PER_SIDE)
        {
            return Err(EngineError::TooManyPieces { side, total });
        }

        Ok(Self {
            points: layout.points,
            bar: layout.bar,
            collected: layout.collected,
            turn: layout.turn,
        })
    }

    /// The layout that reproduces this board.
    #[must_use]
    pub fn to_layout(&self) -> Layout {
        Layout {
            points: self.points,
            bar: self.bar,
            collected: self.collected,
            turn: self.turn,
        }
    }

    // === Turn ===

    /// Whose move it is.
    #[must_use]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Set the side on turn.
    pub fn set_turn(&mut self, turn: impl Into<Turn>) {
        self.turn = turn.into();
    }

    /// Pass the turn to the other side and return the new side on turn.
    ///
    /// Alternation is the caller's decision; `apply_move` never flips the turn.
    pub fn switch_turn(&mut self) -> Result<Side> {
        let next = EngineError::require_side(self.turn)?.opponent();
        self.turn = next.into();
        Ok(next)
    }

    // === Read-only snapshot ===

    /// The signed point counts.
    #[must_use]
    pub fn points(&self) -> &[i8; POINT_COUNT] {
        &self.points
    }

    /// Signed count at one point, `None` off the board.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<i8> {
        self.points.get(index).copied()
    }

    /// Pieces of `side` on one point (zero if the opponent holds it).
    #[must_use]
    pub fn count_at(&self, index: usize, side: Side) -> u8 {
        match self.point(index) {
            Some(c) if side.owns(c) => c.unsigned_abs(),
            _ => 0,
        }
    }

    /// Pieces of `side` waiting on the bar.
    #[must_use]
    pub fn bar(&self, side: Side) -> u8 {
        self.bar[side]
    }

    /// Does `side` have pieces on the bar?
    ///
    /// Move enumeration does not gate on this; a caller that enforces
    /// re-entry checks it first.
    #[must_use]
    pub fn has_bar_pieces(&self, side: Side) -> bool {
        self.bar[side] > 0
    }

    /// Pieces of `side` borne off.
    #[must_use]
    pub fn collected(&self, side: Side) -> u8 {
        self.collected[side]
    }

    // === Aggregates ===

    /// Pieces of `side` standing on points.
    #[must_use]
    pub fn pieces_on_board(&self, side: Side) -> u32 {
        self.points
            .iter()
            .filter(|&&c| side.owns(c))
            .map(|&c| c.unsigned_abs() as u32)
            .sum()
    }

    /// All pieces of `side`: on points, on the bar and borne off.
    ///
    /// Constant across every applied move.
    #[must_use]
    pub fn pieces(&self, side: Side) -> u32 {
        self.pieces_on_board(side) + self.bar[side] as u32 + self.collected[side] as u32
    }

    /// Indices of the points holding pieces of `side`, ascending.
    pub fn occupied_by(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(move |(_, &c)| Side::of_count(c) == Some(side))
            .map(|(i, _)| i)
    }

    /// The side that has borne off all its pieces, if any.
    ///
    /// Piece totals are not fixed, so a side has won when nothing of it
    /// remains on the points or the bar and at least one piece was borne off.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        Side::ALL.into_iter().find(|&side| {
            self.collected[side] > 0 && self.bar[side] == 0 && self.pieces_on_board(side) == 0
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Layout> for Board {
    fn from(layout: &Layout) -> Self {
        Self::from_layout(layout)
    }
}

impl TryFrom<Layout> for Board {
    type Error = EngineError;

    fn try_from(layout: Layout) -> Result<Self> {
        Self::try_from_layout(&layout)
    }
}

impl From<Board> for Layout {
    fn from(board: Board) -> Self {
        board.to_layout()
    }
}
