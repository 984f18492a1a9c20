//! Engine error types.
//!
//! Every failure is local and recoverable: an operation that returns an
//! error has not mutated the board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::side::{Side, Turn};

/// Broad category of an engine error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argument outside its domain (die value, origin index, wrong side,
    /// oversized layout).
    InvalidInput,
    /// Move rejected by the legality rules.
    IllegalMove,
    /// Operation needs a side on turn.
    InvalidState,
}

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IllegalReason {
    /// The origin point holds no piece of the side on turn.
    #[display("no piece of the moving side at origin")]
    NoPieceAtOrigin,
    /// The destination is held by two or more opposing pieces.
    #[display("destination is blocked")]
    Blocked,
    /// The destination lies past the board edge for the current eligibility.
    #[display("destination is past the board edge")]
    PastBoardEdge,
}

/// Error returned by board operations.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Die value outside 1..=6.
    #[display("die value {_0} is outside 1..=6")]
    DieOutOfRange(#[error(not(source))] u8),

    /// Origin index outside the 24 points.
    #[display("origin index {_0} is off the board")]
    OriginOutOfRange(#[error(not(source))] usize),

    /// A per-side query was made for the side not on turn.
    #[display("{requested} is not on turn ({on_turn} is)")]
    SideNotOnTurn {
        /// Side the caller asked about.
        requested: Side,
        /// Side actually on turn.
        on_turn: Side,
    },

    /// The move violates the movement rules.
    #[display("illegal move from {origin} with die {die}: {reason}")]
    IllegalMove {
        /// Origin point index.
        origin: usize,
        /// Die value.
        die: u8,
        /// Rule that rejected the move.
        reason: IllegalReason,
    },

    /// The turn has not been set yet.
    #[display("turn is undetermined")]
    TurnUndetermined,

    /// A layout gives a side more pieces than the counters can hold.
    #[display("{side} has {total} pieces, more than 127")]
    TooManyPieces {
        /// Side over the limit.
        side: Side,
        /// Its piece total.
        total: u32,
    },
}

impl EngineError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::DieOutOfRange(_)
            | EngineError::OriginOutOfRange(_)
            | EngineError::SideNotOnTurn { .. }
            | EngineError::TooManyPieces { .. } => ErrorKind::InvalidInput,
            EngineError::IllegalMove { .. } => ErrorKind::IllegalMove,
            EngineError::TurnUndetermined => ErrorKind::InvalidState,
        }
    }

    /// Side on turn, or `TurnUndetermined`.
    pub(crate) fn require_side(turn: Turn) -> Result<Side> {
        turn.side().ok_or(EngineError::TurnUndetermined)
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(EngineError::DieOutOfRange(7).kind(), ErrorKind::InvalidInput);
        assert_eq!(EngineError::OriginOutOfRange(30).kind(), ErrorKind::InvalidInput);
        assert_eq!(
            EngineError::SideNotOnTurn {
                requested: Side::Black,
                on_turn: Side::White,
            }
            .kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            EngineError::IllegalMove {
                origin: 0,
                die: 1,
                reason: IllegalReason::Blocked,
            }
            .kind(),
            ErrorKind::IllegalMove
        );
        assert_eq!(EngineError::TurnUndetermined.kind(), ErrorKind::InvalidState);
        assert_eq!(
            EngineError::TooManyPieces {
                side: Side::White,
                total: 128,
            }
            .kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_error_display() {
        let err = EngineError::IllegalMove {
            origin: 5,
            die: 3,
            reason: IllegalReason::Blocked,
        };
        assert_eq!(
            err.to_string(),
            "illegal move from 5 with die 3: destination is blocked"
        );
        assert_eq!(
            EngineError::DieOutOfRange(0).to_string(),
            "die value 0 is outside 1..=6"
        );
        assert_eq!(
            EngineError::SideNotOnTurn {
                requested: Side::Black,
                on_turn: Side::White,
            }
            .to_string(),
            "Black is not on turn (White is)"
        );
        assert_eq!(
            EngineError::TooManyPieces {
                side: Side::Black,
                total: 130,
            }
            .to_string(),
            "Black has 130 pieces, more than 127"
        );
    }

    #[test]
    fn test_require_side() {
        assert_eq!(EngineError::require_side(Turn::Black), Ok(Side::Black));
        assert_eq!(
            EngineError::require_side(Turn::Undetermined),
            Err(EngineError::TurnUndetermined)
        );
    }
}
