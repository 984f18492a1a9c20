//! Seeded random playouts.
//!
//! Dice come from a seeded ChaCha8 stream so every run replays the same games.
//! Each turn rolls two dice and plays them one at a time, which is the
//! caller-side sequencing the engine leaves out.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_backgammon::{Board, Layout, MoveKind, Side};

struct Tally {
    moves: usize,
    hits: usize,
    bear_offs: usize,
}

fn playout(seed: u64, start: Board, turns: usize) -> (Board, Tally) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = start;
    let mut tally = Tally {
        moves: 0,
        hits: 0,
        bear_offs: 0,
    };

    for _ in 0..turns {
        if board.winner().is_some() {
            break;
        }
        for _ in 0..2 {
            let die: u8 = rng.gen_range(1..=6);
            let moves = board.legal_moves(die).unwrap();
            if moves.is_empty() {
                continue;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let record = board.apply_move(mv.origin, die).unwrap();
            tally.moves += 1;
            match record.kind {
                MoveKind::Hit => tally.hits += 1,
                MoveKind::BearOff => tally.bear_offs += 1,
                MoveKind::Step => {}
            }
        }
        board.switch_turn().unwrap();
    }

    (board, tally)
}

/// Conservation and single-owner points hold through whole playouts.
#[test]
fn test_playout_invariants() {
    for seed in 0..32 {
        let start = Board::from_layout(&Layout::standard().with_turn(Side::White));
        let (board, tally) = playout(seed, start, 200);

        assert!(tally.moves > 0, "seed {} made no moves", seed);
        for side in Side::ALL {
            assert_eq!(board.pieces(side), 15, "seed {} side {}", seed, side);
        }
        let collected =
            board.collected(Side::White) as usize + board.collected(Side::Black) as usize;
        assert_eq!(collected, tally.bear_offs);
        let on_bar = board.bar(Side::White) as usize + board.bar(Side::Black) as usize;
        assert_eq!(on_bar, tally.hits);
    }
}

/// Same seed, same game.
#[test]
fn test_playout_deterministic() {
    let start = Board::from_layout(&Layout::standard().with_turn(Side::Black));
    let (a, _) = playout(7, start, 100);
    let (b, _) = playout(7, start, 100);
    assert_eq!(a, b);
}

/// A race with every piece home ends with a winner.
#[test]
fn test_race_reaches_winner() {
    let start = Board::from_layout(
        &Layout::empty()
            .with_point(18, Side::White, 3)
            .with_point(21, Side::White, 3)
            .with_point(23, Side::White, 3)
            .with_point(0, Side::Black, 3)
            .with_point(2, Side::Black, 3)
            .with_point(5, Side::Black, 3)
            .with_turn(Side::White),
    );

    let (board, tally) = playout(11, start, 500);
    let winner = board.winner().expect("race should finish");
    assert_eq!(board.collected(winner), 9);
    assert!(tally.bear_offs >= 9);
    assert_eq!(tally.hits, 0);
}
