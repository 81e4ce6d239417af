//! Blocky board library.
//!
//! A square canvas recursively split into quadrants, the moves that reshape
//! it (smash, swap, rotate), and the goals that score it. Rendering, input
//! handling, and turn orchestration are left to callers.

pub mod board;
pub mod config;
pub mod eval;
pub mod movegen;

pub use board::{Board, BoardError};
pub use config::BoardConfig;
pub use eval::Goal;
