//! Move legality, enumeration and application.
//!
//! `Board::check_move` is the single legality predicate. Enumeration filters
//! candidate origins through it and `apply_move` re-validates through it
//! before touching any state, so a rejected move never mutates the board.
//!
//! ## Bear-off windows
//!
//! White may bear off once none of its pieces stand in points `0..18`;
//! Black once none stand in `7..24`. Either side also needs an empty bar.
//!
//! ## Board edge
//!
//! Point 23 is White's last point and point 0 is Black's. A side that is not
//! eligible to bear off may not reach its last point. While eligible it may
//! land on its last point or exactly one step past it (a bear-off).
//! Overshooting the exit is never legal.

use smallvec::SmallVec;
use std::ops::Range;
use tracing::{debug, instrument, trace};

use super::board::Board;
use crate::core::{
    Destination, Die, EngineError, IllegalReason, Move, MoveKind, MoveRecord, Result, Side,
    POINT_COUNT,
};

/// Legal moves for one die. At most one per occupied point.
pub type MoveList = SmallVec<[Move; 15]>;

/// Points that must be clear of a side's pieces before it may bear off.
fn outer_points(side: Side) -> Range<usize> {
    match side {
        Side::White => 0..18,
        Side::Black => 7..POINT_COUNT,
    }
}

/// A side's last point, reachable only while eligible to bear off.
fn last_point(side: Side) -> usize {
    match side {
        Side::White => POINT_COUNT - 1,
        Side::Black => 0,
    }
}

/// Where a validated move lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Landing {
    Point(usize),
    Off,
}

impl Board {
    /// Can the side on turn bear off?
    ///
    /// True iff `side` is on turn, has no pieces on the bar, and has no
    /// pieces outside its home window.
    ///
    /// # Errors
    ///
    /// - `TurnUndetermined` before a turn is set.
    /// - `SideNotOnTurn` when asked about the other side.
    pub fn is_bear_off_eligible(&self, side: Side) -> Result<bool> {
        let on_turn = EngineError::require_side(self.turn)?;
        if side != on_turn {
            return Err(EngineError::SideNotOnTurn {
                requested: side,
                on_turn,
            });
        }
        Ok(self.home_consolidated(side))
    }

    fn home_consolidated(&self, side: Side) -> bool {
        self.bar[side] == 0 && !self.points[outer_points(side)].iter().any(|&c| side.owns(c))
    }

    /// Validate a move for the side on turn without applying it.
    ///
    /// `bear_off_eligible` is passed in so enumeration computes it once.
    ///
    /// # Errors
    ///
    /// - `DieOutOfRange`, `OriginOutOfRange` for bad arguments.
    /// - `TurnUndetermined` before a turn is set.
    /// - `IllegalMove` with the rule that rejected it.
    pub fn check_move(&self, origin: usize, die: u8, bear_off_eligible: bool) -> Result<Move> {
        let die = Die::new(die)?;
        let side = EngineError::require_side(self.turn)?;
        self.validate(side, Move::new(origin, die), bear_off_eligible)
            .map(|_| Move::new(origin, die))
    }

    /// Non-failing form of `check_move`.
    #[must_use]
    pub fn is_legal_move(&self, origin: usize, die: u8, bear_off_eligible: bool) -> bool {
        self.check_move(origin, die, bear_off_eligible).is_ok()
    }

    fn validate(&self, side: Side, mv: Move, bear_off_eligible: bool) -> Result<Landing> {
        let illegal = |reason| EngineError::IllegalMove {
            origin: mv.origin,
            die: mv.die.value(),
            reason,
        };

        if mv.origin >= POINT_COUNT {
            return Err(EngineError::OriginOutOfRange(mv.origin));
        }

        let landing = match mv.destination(side) {
            Destination::Point(to) if to == last_point(side) && !bear_off_eligible => {
                return Err(illegal(IllegalReason::PastBoardEdge))
            }
            Destination::Point(to) => Landing::Point(to),
            Destination::Off if bear_off_eligible => Landing::Off,
            Destination::Off | Destination::Beyond => {
                return Err(illegal(IllegalReason::PastBoardEdge))
            }
        };

        if !side.owns(self.points[mv.origin]) {
            return Err(illegal(IllegalReason::NoPieceAtOrigin));
        }

        if let Landing::Point(to) = landing {
            let there = self.points[to];
            if side.opponent().owns(there) && there.unsigned_abs() >= 2 {
                return Err(illegal(IllegalReason::Blocked));
            }
        }

        Ok(landing)
    }

    /// Every legal move for the side on turn with one die, by ascending origin.
    ///
    /// Pure: calling it twice without an intervening move gives the same list.
    /// An empty list means the die cannot be played. Pieces on the bar do not
    /// restrict the result.
    ///
    /// # Errors
    ///
    /// `DieOutOfRange` or `TurnUndetermined`.
    pub fn legal_moves(&self, die: u8) -> Result<MoveList> {
        let die = Die::new(die)?;
        let side = EngineError::require_side(self.turn)?;
        let eligible = self.home_consolidated(side);

        let moves: MoveList = self
            .occupied_by(side)
            .map(|origin| Move::new(origin, die))
            .filter(|&mv| self.validate(side, mv, eligible).is_ok())
            .collect();

        trace!(%side, %die, eligible, count = moves.len(), "enumerated legal moves");
        Ok(moves)
    }

    /// Move one piece of the side on turn from `origin` by `die` points.
    ///
    /// Landing on a single opposing piece hits it to the opponent's bar.
    /// Landing exactly past the last point while eligible bears the piece
    /// off. The turn is left unchanged.
    ///
    /// # Errors
    ///
    /// Same as `check_move`. The board is untouched on error.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, origin: usize, die: u8) -> Result<MoveRecord> {
        let die = Die::new(die)?;
        let side = EngineError::require_side(self.turn)?;
        let mv = Move::new(origin, die);

        let landing = match self.validate(side, mv, self.home_consolidated(side)) {
            Ok(landing) => landing,
            Err(err) => {
                debug!(%err, "rejected move");
                return Err(err);
            }
        };

        let sign = side.sign();
        self.points[origin] -= sign;

        let kind = match landing {
            Landing::Off => {
                self.collected[side] += 1;
                MoveKind::BearOff
            }
            Landing::Point(to) if self.points[to] == -sign => {
                self.points[to] = sign;
                self.bar[side.opponent()] += 1;
                MoveKind::Hit
            }
            Landing::Point(to) => {
                self.points[to] += sign;
                MoveKind::Step
            }
        };

        let record = MoveRecord::new(side, mv, kind);
        debug!(?kind, %mv, "applied move");
        Ok(record)
    }
}
