//! The moves a player can make on a selected node.

use rand::Rng;

use crate::board::{Axis, Board, BoardError, Direction, NodeId};

/// A single move applied to one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    RotateClockwise,
    RotateCounterClockwise,
    SwapHorizontal,
    SwapVertical,
    Smash,
}

/// Every move, smash included.
pub const ALL_MOVES: [Move; 5] = [
    Move::RotateClockwise,
    Move::RotateCounterClockwise,
    Move::SwapHorizontal,
    Move::SwapVertical,
    Move::Smash,
];

/// Moves that only rearrange existing blocks and can be undone.
pub const NON_SMASH_MOVES: [Move; 4] = [
    Move::RotateClockwise,
    Move::RotateCounterClockwise,
    Move::SwapHorizontal,
    Move::SwapVertical,
];

impl Move {
    /// Applies this move to `id`.
    ///
    /// Returns whether the board changed: rotations and swaps change
    /// nothing on a leaf, and a smash is refused on the root or at max
    /// depth. `rng` is only drawn from by a smash.
    pub fn apply(
        self,
        board: &mut Board,
        id: NodeId,
        rng: &mut impl Rng,
    ) -> Result<bool, BoardError> {
        let has_children = board.get(id)?.children().is_some();
        match self {
            Move::RotateClockwise => board.rotate(id, Direction::Clockwise)?,
            Move::RotateCounterClockwise => board.rotate(id, Direction::CounterClockwise)?,
            Move::SwapHorizontal => board.swap(id, Axis::Horizontal)?,
            Move::SwapVertical => board.swap(id, Axis::Vertical)?,
            Move::Smash => return board.smash(id, rng),
        }
        Ok(has_children)
    }

    /// The move that undoes this one, if any.
    pub fn inverse(self) -> Option<Move> {
        match self {
            Move::RotateClockwise => Some(Move::RotateCounterClockwise),
            Move::RotateCounterClockwise => Some(Move::RotateClockwise),
            Move::SwapHorizontal => Some(Move::SwapHorizontal),
            Move::SwapVertical => Some(Move::SwapVertical),
            Move::Smash => None,
        }
    }
}
