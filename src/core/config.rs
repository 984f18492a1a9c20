//! Board layout configuration.
//!
//! A `Layout` describes where every piece starts: the 24 points, both bars,
//! both borne-off counts and the side on turn. `Layout::standard()` is the
//! opening position; `Layout::empty()` plus the `with_*` builders sets up
//! arbitrary positions.

use serde::{Deserialize, Serialize};

use super::action::POINT_COUNT;
use super::side::{Side, SideMap, Turn};

/// Starting configuration for a `Board`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Signed point counts (positive = White, negative = Black).
    pub points: [i8; POINT_COUNT],

    /// Pieces waiting on the bar.
    pub bar: SideMap<u8>,

    /// Pieces already borne off.
    pub collected: SideMap<u8>,

    /// Side on turn.
    pub turn: Turn,
}

impl Layout {
    /// A layout with no pieces and an undetermined turn.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: [0; POINT_COUNT],
            bar: SideMap::default(),
            collected: SideMap::default(),
            turn: Turn::Undetermined,
        }
    }

    /// The standard opening position, fifteen pieces a side.
    ///
    /// ```
    /// use rust_backgammon::core::{Layout, Side};
    ///
    /// let layout = Layout::standard();
    /// assert_eq!(layout.points[0], 2);
    /// assert_eq!(layout.points[23], -2);
    /// assert_eq!(layout.total(Side::White), 15);
    /// assert_eq!(layout.total(Side::Black), 15);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with_point(0, Side::White, 2)
            .with_point(5, Side::Black, 5)
            .with_point(7, Side::Black, 3)
            .with_point(11, Side::White, 5)
            .with_point(12, Side::Black, 5)
            .with_point(16, Side::White, 3)
            .with_point(18, Side::White, 5)
            .with_point(23, Side::Black, 2)
    }

    /// Place `count` pieces of `side` on a point, replacing what was there.
    ///
    /// A count of zero empties the point.
    #[must_use]
    pub fn with_point(mut self, index: usize, side: Side, count: u8) -> Self {
        assert!(index < POINT_COUNT, "Point index must be below 24");
        assert!(count <= i8::MAX as u8, "At most 127 pieces per point");
        self.points[index] = side.sign() * count as i8;
        self
    }

    /// Set a side's bar count.
    #[must_use]
    pub fn with_bar(mut self, side: Side, count: u8) -> Self {
        self.bar[side] = count;
        self
    }

    /// Set a side's borne-off count.
    #[must_use]
    pub fn with_collected(mut self, side: Side, count: u8) -> Self {
        self.collected[side] = count;
        self
    }

    /// Set the side on turn.
    #[must_use]
    pub fn with_turn(mut self, turn: impl Into<Turn>) -> Self {
        self.turn = turn.into();
        self
    }

    /// Total pieces of a side: on points, on the bar and borne off.
    #[must_use]
    pub fn total(&self, side: Side) -> u32 {
        let on_points: u32 = self
            .points
            .iter()
            .filter(|&&c| side.owns(c))
            .map(|&c| c.unsigned_abs() as u32)
            .sum();
        on_points + self.bar[side] as u32 + self.collected[side] as u32
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}
