//! Move representation: an origin point plus a die value.
//!
//! The engine moves one piece per die. A `Move` names the point the piece
//! leaves and the die that carries it; the destination follows from the
//! moving side's direction.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::side::Side;

/// Number of points on the board.
pub const POINT_COUNT: usize = 24;

/// A validated die value in 1..=6.
///
/// ```
/// use rust_backgammon::core::Die;
///
/// assert_eq!(Die::new(4).unwrap().value(), 4);
/// assert!(Die::new(0).is_err());
/// assert!(Die::new(7).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Die(u8);

impl Die {
    /// Smallest die face.
    pub const MIN: u8 = 1;
    /// Largest die face.
    pub const MAX: u8 = 6;

    /// Validate a die value.
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EngineError::DieOutOfRange(value))
        }
    }

    /// Face value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Die {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        Die::new(value)
    }
}

impl From<Die> for u8 {
    fn from(die: Die) -> u8 {
        die.0
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a moving piece ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// A point on the board.
    Point(usize),
    /// Exactly one step past the side's last point: the piece is borne off.
    Off,
    /// Further past the edge than a bear-off. Never legal.
    Beyond,
}

/// A single-die move: one piece leaves `origin` and travels `die` points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the point the piece leaves.
    pub origin: usize,
    /// Distance travelled.
    pub die: Die,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(origin: usize, die: Die) -> Self {
        Self { origin, die }
    }

    /// Destination of this move for the given side.
    ///
    /// ```
    /// use rust_backgammon::core::{Destination, Die, Move, Side};
    ///
    /// let mv = Move::new(20, Die::new(4).unwrap());
    /// assert_eq!(mv.destination(Side::White), Destination::Off);
    /// assert_eq!(mv.destination(Side::Black), Destination::Point(16));
    /// ```
    #[must_use]
    pub fn destination(&self, side: Side) -> Destination {
        if self.origin >= POINT_COUNT {
            return Destination::Beyond;
        }
        let target = self.origin as isize + side.direction() * self.die.value() as isize;
        if (0..POINT_COUNT as isize).contains(&target) {
            return Destination::Point(target as usize);
        }
        let exit = match side {
            Side::White => POINT_COUNT as isize,
            Side::Black => -1,
        };
        if target == exit {
            Destination::Off
        } else {
            Destination::Beyond
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.origin, self.die)
    }
}

/// What an applied move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Landed on an empty or friendly point.
    Step,
    /// Landed on a single opposing piece and sent it to the bar.
    Hit,
    /// Removed the piece from the board.
    BearOff,
}

/// A recorded move with its effect, returned by `Board::apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that moved.
    pub side: Side,
    /// The move taken.
    pub mv: Move,
    /// What happened at the destination.
    pub kind: MoveKind,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(side: Side, mv: Move, kind: MoveKind) -> Self {
        Self { side, mv, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die(n: u8) -> Die {
        Die::new(n).unwrap()
    }

    #[test]
    fn test_die_range() {
        for n in 1..=6 {
            assert_eq!(Die::new(n).unwrap().value(), n);
        }
        assert_eq!(Die::new(0), Err(EngineError::DieOutOfRange(0)));
        assert_eq!(Die::new(7), Err(EngineError::DieOutOfRange(7)));
    }

    #[test]
    fn test_die_deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Die>("3").unwrap(), die(3));
        assert!(serde_json::from_str::<Die>("9").is_err());
    }

    #[test]
    fn test_white_destinations() {
        assert_eq!(Move::new(0, die(6)).destination(Side::White), Destination::Point(6));
        assert_eq!(Move::new(23, die(1)).destination(Side::White), Destination::Off);
        assert_eq!(Move::new(22, die(3)).destination(Side::White), Destination::Beyond);
    }

    #[test]
    fn test_black_destinations() {
        assert_eq!(Move::new(5, die(1)).destination(Side::Black), Destination::Point(4));
        assert_eq!(Move::new(0, die(1)).destination(Side::Black), Destination::Off);
        assert_eq!(Move::new(2, die(5)).destination(Side::Black), Destination::Beyond);
    }

    #[test]
    fn test_off_board_origin_is_beyond() {
        let far = Move::new(usize::MAX >> 1, die(6));
        assert_eq!(far.destination(Side::White), Destination::Beyond);
        assert_eq!(far.destination(Side::Black), Destination::Beyond);
        assert_eq!(Move::new(24, die(1)).destination(Side::Black), Destination::Beyond);
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Side::White, Move::new(0, die(6)), MoveKind::Step);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
        assert_eq!(format!("{}", record.mv), "0/6");
    }
}
