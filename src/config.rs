//! Board generation settings.
//!
//! A [`BoardConfig`] fixes the tree's maximum depth, the canvas it is laid
//! out on, how quickly subdivision odds fall off with depth, and the seed for
//! reproducible generation. It can be built in code or read from JSON.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;

use crate::board::BoardError;

/// Deepest tree the board will generate or accept. A depth-10 board
/// rasterizes to 1024x1024 cells.
pub const MAX_SUPPORTED_DEPTH: u8 = 10;

/// Configuration for generating a random board.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Deepest level a node may occupy; the root is level 0.
    pub max_depth: u8,
    /// Side length of the root block in canvas units.
    pub canvas_size: f64,
    /// A node at level `l` subdivides with probability `exp(-decay * l)`.
    pub subdivide_decay: f64,
    /// Random seed (0 = use entropy).
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            max_depth: 4,
            canvas_size: 750.0,
            subdivide_decay: 0.25,
            seed: 0,
        }
    }
}

impl BoardConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let config: BoardConfig = serde_json::from_str(json)
            .map_err(|e| BoardError::Config(format!("failed to parse board config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the config describes a board that can be built.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(BoardError::DepthTooLarge {
                depth: self.max_depth,
                limit: MAX_SUPPORTED_DEPTH,
            });
        }
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(BoardError::InvalidCanvas(self.canvas_size));
        }
        if !(self.subdivide_decay.is_finite() && self.subdivide_decay >= 0.0) {
            return Err(BoardError::InvalidDecay(self.subdivide_decay));
        }
        Ok(())
    }

    /// Creates the random source for this config.
    pub fn rng(&self) -> SmallRng {
        if self.seed != 0 {
            SmallRng::seed_from_u64(self.seed)
        } else {
            SmallRng::from_entropy()
        }
    }
}
