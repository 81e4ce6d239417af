//! Node identifiers, node records, and the quadrant vocabulary.
//!
//! Children are always stored in the canonical order upper-right, upper-left,
//! lower-left, lower-right. [`Quadrant`] names those slots and carries the
//! layout arithmetic shared by geometry refresh, cell lookup, and selection.

use std::ops::Sub;

use serde::Serialize;

use super::colour::Colour;

/// Identifier for a node on a [`Board`](super::Board) (generational).
///
/// Once a node's subtree is discarded by a smash, every id into it becomes
/// stale, even if the underlying slot is later reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

/// A point in canvas units. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A child slot, in canonical storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    /// Index of this quadrant in a node's children array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Offset of this quadrant's top-left corner, in half-sizes.
    pub const fn offset(self) -> (u8, u8) {
        match self {
            Quadrant::UpperRight => (1, 0),
            Quadrant::UpperLeft => (0, 0),
            Quadrant::LowerLeft => (0, 1),
            Quadrant::LowerRight => (1, 1),
        }
    }

    /// Picks the quadrant holding `(x, y)` in a frame whose top-left is the
    /// origin and whose halves meet at `halfway`.
    ///
    /// Coordinates on the split line belong to the right/lower half.
    pub fn containing<T: PartialOrd>(x: T, y: T, halfway: T) -> Quadrant {
        let right = x >= halfway;
        let lower = y >= halfway;
        match (right, lower) {
            (true, false) => Quadrant::UpperRight,
            (false, false) => Quadrant::UpperLeft,
            (false, true) => Quadrant::LowerLeft,
            (true, true) => Quadrant::LowerRight,
        }
    }

    /// Top-left corner of this child given the parent's corner and the
    /// child's size.
    pub fn child_origin(self, parent: Point, half: f64) -> Point {
        let (dx, dy) = self.offset();
        Point::new(
            parent.x + f64::from(dx) * half,
            parent.y + f64::from(dy) * half,
        )
    }
}

/// Mirror axis for [`Board::swap`](super::Board::swap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

impl Axis {
    /// New slot `i` receives old child `permutation()[i]`.
    pub const fn permutation(self) -> [usize; 4] {
        match self {
            Axis::Horizontal => [1, 0, 3, 2],
            Axis::Vertical => [3, 2, 1, 0],
        }
    }
}

/// Rotation direction for [`Board::rotate`](super::Board::rotate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// New slot `i` receives old child `permutation()[i]`.
    pub const fn permutation(self) -> [usize; 4] {
        match self {
            Direction::Clockwise => [1, 2, 3, 0],
            Direction::CounterClockwise => [3, 0, 1, 2],
        }
    }
}

/// What a node holds: a flat colour, or exactly four children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Content {
    Leaf(Colour),
    Split([NodeId; 4]),
}

/// A node record stored in the board's arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) generation: u32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) content: Content,
    pub(crate) level: u8,
    pub(crate) max_depth: u8,
    pub(crate) position: Point,
    pub(crate) size: f64,
    pub(crate) highlighted: bool,
}

impl Node {
    pub(crate) fn new(
        generation: u32,
        level: u8,
        max_depth: u8,
        parent: Option<NodeId>,
        content: Content,
    ) -> Self {
        Node {
            generation,
            parent,
            content,
            level,
            max_depth,
            position: Point::ORIGIN,
            size: 0.0,
            highlighted: false,
        }
    }

    /// Top-left corner in canvas units.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// The leaf colour; `None` for internal nodes.
    pub fn colour(&self) -> Option<Colour> {
        match self.content {
            Content::Leaf(colour) => Some(colour),
            Content::Split(_) => None,
        }
    }

    /// The four children in canonical order; `None` for leaves.
    pub fn children(&self) -> Option<[NodeId; 4]> {
        match self.content {
            Content::Leaf(_) => None,
            Content::Split(children) => Some(children),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Leaf(_))
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }
}

/// An explicit tree shape, used to build boards deterministically and to
/// snapshot subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Leaf(Colour),
    /// Children in canonical order.
    Split(Box<[Layout; 4]>),
}

impl Layout {
    pub fn split(children: [Layout; 4]) -> Self {
        Layout::Split(Box::new(children))
    }

    /// Number of levels below this node; a leaf has depth 0.
    pub fn depth(&self) -> u8 {
        match self {
            Layout::Leaf(_) => 0,
            Layout::Split(children) => 1 + children.iter().map(Layout::depth).max().unwrap_or(0),
        }
    }
}
