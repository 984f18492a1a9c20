//! # rust-backgammon
//!
//! A backgammon rules engine: the legal-move and state-transition core.
//!
//! ## Board
//!
//! 24 points in a line. White pieces are positive counts and travel toward
//! point 23; Black pieces are negative counts and travel toward point 0.
//! A single exposed piece can be hit to its owner's bar. A side whose pieces
//! have all reached home may bear them off.
//!
//! ## Usage
//!
//! ```
//! use rust_backgammon::{Board, MoveKind, Side};
//!
//! let mut board = Board::new();
//! board.set_turn(Side::White);
//!
//! let moves = board.legal_moves(6).unwrap();
//! assert!(moves.iter().any(|m| m.origin == 0));
//!
//! let record = board.apply_move(0, 6).unwrap();
//! assert_eq!(record.kind, MoveKind::Step);
//! assert_eq!(board.point(6), Some(1));
//! ```
//!
//! Dice are supplied by the caller. The engine moves one piece per die and
//! never changes whose turn it is on its own.
//!
//! ## Modules
//!
//! - `core`: Sides, turns, dice, moves, layouts, errors
//! - `rules`: The `Board` and its legality rules
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Destination, Die, EngineError, ErrorKind, IllegalReason, Layout, Move, MoveKind, MoveRecord,
    Result, Side, SideMap, Turn, POINT_COUNT,
};

pub use crate::rules::{Board, MoveList, MAX_PIECES_PER_SIDE};
