//! Board representation.
//!
//! Contains the quadtree itself, its node and geometry types, the colour
//! palette, rasterized grids, and drawing descriptors for a renderer.

pub mod colour;
pub mod draw;
pub mod error;
pub mod grid;
pub mod node;
pub mod tree;

pub use colour::{colour_name, Colour, COLOUR_LIST, FRAME_COLOUR, HIGHLIGHT_COLOUR};
pub use draw::{primitives_to_json, DrawPrimitive};
pub use error::BoardError;
pub use grid::Grid;
pub use node::{Axis, Direction, Layout, Node, NodeId, Point, Quadrant};
pub use tree::Board;
