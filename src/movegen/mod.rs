//! Move generation.
//!
//! Enumerates the moves available on a node and picks random nodes and
//! moves, for player strategies built on top of the board.

pub mod moves;

use rand::Rng;

use crate::board::{Board, NodeId};

pub use moves::{Move, ALL_MOVES, NON_SMASH_MOVES};

/// Whether a smash on `id` would succeed.
pub fn can_smash(board: &Board, id: NodeId) -> bool {
    board
        .get(id)
        .map(|node| node.level() != 0 && node.level() < board.max_depth())
        .unwrap_or(false)
}

/// Lists the moves that would change the board at `id`.
///
/// Rotations and swaps need children to act on; a smash needs a node that
/// is neither the root nor at max depth. Stale ids have no moves.
pub fn legal_moves(board: &Board, id: NodeId) -> Vec<Move> {
    let mut moves = Vec::with_capacity(ALL_MOVES.len());
    if board.can_descend(id) {
        moves.extend(NON_SMASH_MOVES);
    }
    if can_smash(board, id) {
        moves.push(Move::Smash);
    }
    moves
}

/// Picks a random node below the root.
///
/// Starting from the root, picks one of the four children and either
/// stops there or, with even odds, keeps descending from it. Descent always
/// stops at a leaf, and a board that is a single leaf yields its root.
pub fn random_node(board: &Board, rng: &mut impl Rng) -> NodeId {
    let mut current = board.root();
    loop {
        let Some(children) = board.children_of(current) else {
            return current;
        };
        let child = children[rng.gen_range(0..children.len())];
        if rng.gen_bool(0.5) {
            current = child;
        } else {
            return child;
        }
    }
}

/// Picks a random move, optionally including smash.
pub fn random_move(rng: &mut impl Rng, allow_smash: bool) -> Move {
    if allow_smash {
        ALL_MOVES[rng.gen_range(0..ALL_MOVES.len())]
    } else {
        NON_SMASH_MOVES[rng.gen_range(0..NON_SMASH_MOVES.len())]
    }
}
