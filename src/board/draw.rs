//! Drawing descriptors for an external renderer.
//!
//! The board does no rendering itself. It describes what to draw as a flat
//! list of rectangles that a renderer can consume directly or as JSON.

use serde::Serialize;

use super::colour::{Colour, FRAME_COLOUR, HIGHLIGHT_COLOUR};
use super::node::{Content, NodeId, Point};
use super::tree::Board;

/// Outline thickness of the frame drawn around every leaf.
pub const FRAME_THICKNESS: u32 = 3;
/// Outline thickness of the highlight drawn around a selected node.
pub const HIGHLIGHT_THICKNESS: u32 = 5;

/// One rectangle to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawPrimitive {
    pub colour: Colour,
    /// Top-left corner in canvas units.
    pub position: Point,
    /// Side length; every rectangle is square.
    pub size: f64,
    /// 0 for a filled rectangle, otherwise the outline width.
    pub thickness: u32,
}

impl DrawPrimitive {
    pub fn is_filled(&self) -> bool {
        self.thickness == 0
    }
}

impl Board {
    /// Lists the rectangles that render this board.
    ///
    /// Each leaf contributes a filled rectangle in its colour followed by a
    /// frame. A highlighted node contributes an outline after everything
    /// inside it, so it is drawn on top.
    pub fn draw_primitives(&self) -> Vec<DrawPrimitive> {
        let mut out = Vec::with_capacity(self.len() * 2);
        self.collect_primitives(self.root(), &mut out);
        out
    }

    fn collect_primitives(&self, id: NodeId, out: &mut Vec<DrawPrimitive>) {
        let node = self.node(id);
        match node.content {
            Content::Leaf(colour) => {
                out.push(DrawPrimitive {
                    colour,
                    position: node.position,
                    size: node.size,
                    thickness: 0,
                });
                out.push(DrawPrimitive {
                    colour: FRAME_COLOUR,
                    position: node.position,
                    size: node.size,
                    thickness: FRAME_THICKNESS,
                });
            }
            Content::Split(children) => {
                for child in children {
                    self.collect_primitives(child, out);
                }
            }
        }
        if node.highlighted {
            out.push(DrawPrimitive {
                colour: HIGHLIGHT_COLOUR,
                position: node.position,
                size: node.size,
                thickness: HIGHLIGHT_THICKNESS,
            });
        }
    }
}

/// Serializes primitives as a JSON array for a renderer process.
pub fn primitives_to_json(primitives: &[DrawPrimitive]) -> serde_json::Result<String> {
    serde_json::to_string(primitives)
}
