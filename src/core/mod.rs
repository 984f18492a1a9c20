//! Core value types: sides, turns, dice, moves, layout configuration, errors.
//!
//! These carry no rules. The board and its legality checks live in `rules`.

pub mod side;
pub mod action;
pub mod config;
pub mod error;

pub use side::{Side, SideMap, Turn};
pub use action::{Destination, Die, Move, MoveKind, MoveRecord, POINT_COUNT};
pub use config::Layout;
pub use error::{EngineError, ErrorKind, IllegalReason, Result};
