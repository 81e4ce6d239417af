//! Errors raised by board construction, lookup, and mutation.

use super::node::NodeId;

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("node {0:?} is no longer part of the board")]
    StaleNode(NodeId),

    #[error("cell ({x}, {y}) is outside a {side}x{side} grid")]
    OutOfBounds { x: usize, y: usize, side: usize },

    #[error("layout has depth {depth}, deeper than max depth {max_depth}")]
    LayoutTooDeep { depth: u8, max_depth: u8 },

    #[error("max depth {depth} exceeds the supported limit of {limit}")]
    DepthTooLarge { depth: u8, limit: u8 },

    #[error("canvas size must be positive and finite, got {0}")]
    InvalidCanvas(f64),

    #[error("subdivision decay must be non-negative and finite, got {0}")]
    InvalidDecay(f64),

    #[error("grid column has {found} cells, expected {expected}")]
    RaggedGrid { expected: usize, found: usize },

    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("invalid config: {0}")]
    Config(String),
}
