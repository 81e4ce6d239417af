//! Goal scoring.
//!
//! Scores a rasterized board against a player's goal: the largest connected
//! blob of a colour, or how much of a colour lines the perimeter. Scoring
//! only reads the board; it never mutates the tree.

pub(crate) mod blob;
pub mod goal;
pub(crate) mod perimeter;

pub use blob::largest_blob;
pub use goal::{random_goals, Goal};
pub use perimeter::perimeter_count;
