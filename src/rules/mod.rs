//! The board engine.
//!
//! `Board` owns the position and exposes the rules:
//! - Bear-off eligibility for the side on turn
//! - Legal moves for a single die
//! - Applying one move, with hits and bear-offs
//!
//! Dice, multi-die turn sequencing and turn alternation belong to the
//! caller.

pub mod board;
pub mod engine;

pub use board::{Board, MAX_PIECES_PER_SIDE};
pub use engine::MoveList;
