//! Sides, turn state, and per-side data storage.
//!
//! ## Side
//!
//! The two players. `White` owns positive point counts and moves toward
//! higher indices; `Black` owns negative counts and moves toward index 0.
//!
//! ## Turn
//!
//! Closed three-valued turn marker. `Undetermined` only exists before the
//! first move; every move operation requires a side on turn.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Positive counts, moves toward index 23 and bears off past it.
    White,
    /// Negative counts, moves toward index 0 and bears off below it.
    Black,
}

impl Side {
    /// Both sides, White first.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Storage index (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Sign of this side's counts on the point array.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Direction of travel along the point array.
    #[must_use]
    pub const fn direction(self) -> isize {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Does a signed point count belong to this side?
    #[must_use]
    pub const fn owns(self, count: i8) -> bool {
        match self {
            Side::White => count > 0,
            Side::Black => count < 0,
        }
    }

    /// Owner of a signed point count, `None` for an empty point.
    #[must_use]
    pub const fn of_count(count: i8) -> Option<Side> {
        if count > 0 {
            Some(Side::White)
        } else if count < 0 {
            Some(Side::Black)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Whose move it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Pre-game placeholder. No move operation accepts it.
    #[default]
    Undetermined,
    /// White to move.
    White,
    /// Black to move.
    Black,
}

impl Turn {
    /// The side on turn, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Turn::Undetermined => None,
            Turn::White => Some(Side::White),
            Turn::Black => Some(Side::Black),
        }
    }
}

impl From<Side> for Turn {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Turn::White,
            Side::Black => Turn::Black,
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Undetermined => write!(f, "Undetermined"),
            Turn::White => write!(f, "White"),
            Turn::Black => write!(f, "Black"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_backgammon::core::{Side, SideMap};
///
/// let mut bar: SideMap<u8> = SideMap::default();
/// bar[Side::Black] += 1;
///
/// assert_eq!(bar[Side::White], 0);
/// assert_eq!(bar[Side::Black], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map from explicit White and Black values.
    #[must_use]
    pub const fn new(white: T, black: T) -> Self {
        Self {
            data: [white, black],
        }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(factory: impl Fn(Side) -> T) -> Self {
        Self::new(factory(Side::White), factory(Side::Black))
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::White.index(), 0);
        assert_eq!(Side::Black.index(), 1);
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::White);
        assert_eq!(format!("{}", Side::Black), "Black");
    }

    #[test]
    fn test_side_ownership() {
        assert!(Side::White.owns(3));
        assert!(!Side::White.owns(-3));
        assert!(!Side::White.owns(0));
        assert!(Side::Black.owns(-1));
        assert!(!Side::Black.owns(1));

        assert_eq!(Side::of_count(2), Some(Side::White));
        assert_eq!(Side::of_count(-5), Some(Side::Black));
        assert_eq!(Side::of_count(0), None);
    }

    #[test]
    fn test_turn_side() {
        assert_eq!(Turn::default(), Turn::Undetermined);
        assert_eq!(Turn::Undetermined.side(), None);
        assert_eq!(Turn::White.side(), Some(Side::White));
        assert_eq!(Turn::Black.side(), Some(Side::Black));
        assert_eq!(Turn::from(Side::Black), Turn::Black);
    }

    #[test]
    fn test_side_map_indexing() {
        let mut map: SideMap<i32> = SideMap::from_fn(|s| s.index() as i32 * 10);
        assert_eq!(map[Side::White], 0);
        assert_eq!(map[Side::Black], 10);

        map[Side::White] = 7;
        assert_eq!(map[Side::White], 7);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::White, &7), (Side::Black, &10)]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(1u8, 2u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
