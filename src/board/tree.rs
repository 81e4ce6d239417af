//! The quadtree board: structure, generation, mutation, and lookup.
//!
//! Nodes live in an arena of slots addressed by generational [`NodeId`]s.
//! A node's children are owned through its slot's content; the `parent`
//! field is a plain back-reference used only for upward navigation.
//!
//! Every mutation leaves the tree satisfying [`Board::check_invariants`]:
//! each node is a coloured leaf or has exactly four children one level
//! deeper, half as large, and positioned by the quadrant layout.

use rand::Rng;
use tracing::{debug, trace};

use super::colour::{Colour, BLACK, COLOUR_LIST};
use super::error::BoardError;
use super::grid::Grid;
use super::node::{Axis, Content, Direction, Layout, Node, NodeId, Point, Quadrant};
use crate::config::{BoardConfig, MAX_SUPPORTED_DEPTH};

/// A square canvas recursively subdivided into quadrants.
#[derive(Debug, Clone)]
pub struct Board {
    slots: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    /// freed slots whose generation is exhausted; never reused
    retired: usize,
    root: NodeId,
    max_depth: u8,
    subdivide_decay: f64,
}

impl Board {
    fn empty(max_depth: u8, subdivide_decay: f64) -> Self {
        Board {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            retired: 0,
            // Generations start at 1, so this id is never alive.
            root: NodeId::new(0, 0),
            max_depth,
            subdivide_decay,
        }
    }

    /// Generates a random board from a config, with geometry applied.
    pub fn random(config: &BoardConfig, rng: &mut impl Rng) -> Result<Self, BoardError> {
        config.validate()?;
        let mut board = Board::empty(config.max_depth, config.subdivide_decay);
        board.root = board.generate(0, None, rng);
        board.apply_geometry(board.root, Point::ORIGIN, config.canvas_size);
        debug!(
            max_depth = config.max_depth,
            nodes = board.len(),
            "generated random board"
        );
        debug_assert!(board.check_invariants().is_ok());
        Ok(board)
    }

    /// Generates a random board with the default subdivision decay.
    pub fn new_random_tree(
        max_depth: u8,
        canvas_size: f64,
        rng: &mut impl Rng,
    ) -> Result<Self, BoardError> {
        let config = BoardConfig {
            max_depth,
            canvas_size,
            ..BoardConfig::default()
        };
        Board::random(&config, rng)
    }

    /// Builds a board with exactly the given shape.
    pub fn from_layout(
        layout: &Layout,
        max_depth: u8,
        canvas_size: f64,
    ) -> Result<Self, BoardError> {
        let config = BoardConfig {
            max_depth,
            canvas_size,
            ..BoardConfig::default()
        };
        config.validate()?;
        let depth = layout.depth();
        if depth > max_depth {
            return Err(BoardError::LayoutTooDeep { depth, max_depth });
        }
        let mut board = Board::empty(max_depth, config.subdivide_decay);
        board.root = board.build(layout, 0, None);
        board.apply_geometry(board.root, Point::ORIGIN, canvas_size);
        Ok(board)
    }

    /// Snapshots the shape and colours of the subtree at `id`.
    pub fn layout(&self, id: NodeId) -> Result<Layout, BoardError> {
        self.ensure_alive(id)?;
        Ok(self.snapshot(id))
    }

    fn snapshot(&self, id: NodeId) -> Layout {
        match self.node(id).content {
            Content::Leaf(colour) => Layout::Leaf(colour),
            Content::Split(children) => Layout::split(children.map(|c| self.snapshot(c))),
        }
    }

    fn build(&mut self, layout: &Layout, level: u8, parent: Option<NodeId>) -> NodeId {
        match layout {
            Layout::Leaf(colour) => self.alloc(level, parent, Content::Leaf(*colour)),
            Layout::Split(children) => {
                let id = self.alloc(level, parent, Content::Leaf(BLACK));
                let mut ids = [id; 4];
                for (slot, child) in ids.iter_mut().zip(children.iter()) {
                    *slot = self.build(child, level + 1, Some(id));
                }
                self.node_mut(id).content = Content::Split(ids);
                id
            }
        }
    }

    /// Randomly generates a subtree rooted at `level`.
    ///
    /// Below `max_depth` a node subdivides with probability
    /// `exp(-decay * level)`; otherwise it becomes a leaf with a palette
    /// colour. Geometry is left for the caller to apply.
    fn generate(&mut self, level: u8, parent: Option<NodeId>, rng: &mut impl Rng) -> NodeId {
        let subdivide = level < self.max_depth
            && rng.gen::<f64>() < (-self.subdivide_decay * f64::from(level)).exp();
        if subdivide {
            let id = self.alloc(level, parent, Content::Leaf(BLACK));
            let mut children = [id; 4];
            for slot in children.iter_mut() {
                *slot = self.generate(level + 1, Some(id), rng);
            }
            self.node_mut(id).content = Content::Split(children);
            id
        } else {
            let colour = COLOUR_LIST[rng.gen_range(0..COLOUR_LIST.len())];
            self.alloc(level, parent, Content::Leaf(colour))
        }
    }

    fn alloc(&mut self, level: u8, parent: Option<NodeId>, content: Content) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            self.slots[idx] = Some(Node::new(generation, level, self.max_depth, parent, content));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots
                .push(Some(Node::new(generation, level, self.max_depth, parent, content)));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(clippy::cast_possible_truncation)] // depth <= 10 keeps the arena far below u32::MAX
        let idx = idx as u32;
        NodeId::new(idx, generation)
    }

    /// Frees the subtree at `id`, making every id into it stale.
    fn release(&mut self, id: NodeId) {
        if let Some(node) = self.slots[id.idx()].take() {
            if let Content::Split(children) = node.content {
                for child in children {
                    self.release(child);
                }
            }
            if self.generations[id.idx()] == u32::MAX {
                self.retired += 1;
            } else {
                self.free_list.push(id.idx());
            }
        }
    }

    // --- accessors ---

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len() - self.retired
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `id` still refers to a node on this board.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.slots
            .get(id.idx())
            .and_then(|slot| slot.as_ref())
            .map(|node| node.generation == id.generation())
            .unwrap_or(false)
    }

    fn ensure_alive(&self, id: NodeId) -> Result<(), BoardError> {
        if self.is_alive(id) {
            Ok(())
        } else {
            Err(BoardError::StaleNode(id))
        }
    }

    /// Returns the node at `id`.
    pub fn get(&self, id: NodeId) -> Result<&Node, BoardError> {
        self.ensure_alive(id)?;
        Ok(self.node(id))
    }

    /// Access a node known to be live; panics if `id` is stale.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.slots[id.idx()].as_ref().expect("dangling NodeId")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.idx()].as_mut().expect("dangling NodeId")
    }

    /// Returns the parent of a node, or `None` for the root or stale ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).parent
    }

    /// Returns the children of a node, or `None` for leaves or stale ids.
    pub fn children_of(&self, id: NodeId) -> Option<[NodeId; 4]> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).children()
    }

    /// Whether selection can move from `id` up to its parent.
    pub fn can_ascend(&self, id: NodeId) -> bool {
        self.parent_of(id).is_some()
    }

    /// Whether selection can move from `id` down into its children.
    pub fn can_descend(&self, id: NodeId) -> bool {
        self.children_of(id).is_some()
    }

    pub fn set_highlighted(&mut self, id: NodeId, highlighted: bool) -> Result<(), BoardError> {
        self.ensure_alive(id)?;
        self.node_mut(id).highlighted = highlighted;
        Ok(())
    }

    // --- geometry ---

    /// Sets the position and size of `id` and recomputes them for every
    /// descendant from the quadrant layout.
    ///
    /// The root may be placed anywhere. A non-root node's geometry is fixed
    /// by its parent, so any other placement is rejected with
    /// [`BoardError::Invariant`] and the board is left unchanged.
    pub fn update_geometry(
        &mut self,
        id: NodeId,
        top_left: Point,
        size: f64,
    ) -> Result<(), BoardError> {
        self.ensure_alive(id)?;
        if let Some((expected_position, expected_size)) = self.derived_geometry(id) {
            if top_left != expected_position || size != expected_size {
                return Err(invariant(format!(
                    "{:?} must sit at {:?} with size {}, not {:?} with size {}",
                    id, expected_position, expected_size, top_left, size
                )));
            }
        }
        self.apply_geometry(id, top_left, size);
        Ok(())
    }

    /// Position and size of a non-root node as laid out by its parent.
    fn derived_geometry(&self, id: NodeId) -> Option<(Point, f64)> {
        let parent = self.node(self.node(id).parent?);
        let Content::Split(siblings) = parent.content else {
            return None;
        };
        let slot = siblings.iter().position(|&child| child == id)?;
        let half = parent.size / 2.0;
        Some((Quadrant::ALL[slot].child_origin(parent.position, half), half))
    }

    fn apply_geometry(&mut self, id: NodeId, top_left: Point, size: f64) {
        let node = self.node_mut(id);
        node.position = top_left;
        node.size = size;
        if let Content::Split(children) = node.content {
            let half = size / 2.0;
            for (quadrant, child) in Quadrant::ALL.into_iter().zip(children) {
                self.apply_geometry(child, quadrant.child_origin(top_left, half), half);
            }
        }
    }

    fn refresh_geometry(&mut self, id: NodeId) {
        let node = self.node(id);
        let (position, size) = (node.position, node.size);
        self.apply_geometry(id, position, size);
    }

    // --- mutation ---

    /// Mirrors the four direct children of `id` across `axis`.
    ///
    /// Grandchildren keep their internal order. A leaf is left untouched.
    pub fn swap(&mut self, id: NodeId, axis: Axis) -> Result<(), BoardError> {
        self.ensure_alive(id)?;
        let Content::Split(children) = self.node(id).content else {
            return Ok(());
        };
        let reordered = axis.permutation().map(|i| children[i]);
        self.node_mut(id).content = Content::Split(reordered);
        self.refresh_geometry(id);
        trace!(?id, ?axis, "swapped children");
        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    /// Rotates the whole subtree at `id` a quarter turn.
    ///
    /// The children are cycled and then each child is rotated the same way,
    /// all the way down. A leaf is left untouched.
    pub fn rotate(&mut self, id: NodeId, direction: Direction) -> Result<(), BoardError> {
        self.ensure_alive(id)?;
        if self.node(id).is_leaf() {
            return Ok(());
        }
        self.rotate_children(id, direction);
        self.refresh_geometry(id);
        trace!(?id, ?direction, "rotated subtree");
        debug_assert!(self.check_invariants().is_ok());
        Ok(())
    }

    fn rotate_children(&mut self, id: NodeId, direction: Direction) {
        let Content::Split(children) = self.node(id).content else {
            return;
        };
        let reordered = direction.permutation().map(|i| children[i]);
        self.node_mut(id).content = Content::Split(reordered);
        for child in reordered {
            self.rotate_children(child, direction);
        }
    }

    /// Replaces the subtree at `id` with four freshly generated children.
    ///
    /// Returns `Ok(false)` without touching the board when `id` is the root
    /// or already sits at the maximum depth. Ids into the discarded subtree
    /// become stale.
    pub fn smash(&mut self, id: NodeId, rng: &mut impl Rng) -> Result<bool, BoardError> {
        self.ensure_alive(id)?;
        let node = self.node(id);
        let level = node.level;
        if level == 0 || level >= self.max_depth {
            debug!(?id, level, max_depth = self.max_depth, "smash rejected");
            return Ok(false);
        }
        if let Content::Split(old) = node.content {
            for child in old {
                self.release(child);
            }
            trace!(?id, "released previous children");
        }
        let mut children = [id; 4];
        for slot in children.iter_mut() {
            *slot = self.generate(level + 1, Some(id), rng);
        }
        self.node_mut(id).content = Content::Split(children);
        self.refresh_geometry(id);
        debug!(?id, level, nodes = self.len(), "smashed node");
        debug_assert!(self.check_invariants().is_ok());
        Ok(true)
    }

    // --- lookup ---

    /// Cells per side at the finest resolution.
    pub fn side(&self) -> usize {
        1 << self.max_depth
    }

    /// Returns the colour of the unit cell at column `x`, row `y`.
    pub fn locate(&self, x: usize, y: usize) -> Result<Colour, BoardError> {
        let side = self.side();
        if x >= side || y >= side {
            return Err(BoardError::OutOfBounds { x, y, side });
        }
        Ok(self.colour_at(self.root, x, y))
    }

    /// Colour of the cell at `(x, y)` in the unit-cell frame of `id`.
    fn colour_at(&self, id: NodeId, mut x: usize, mut y: usize) -> Colour {
        let mut current = id;
        loop {
            let node = self.node(current);
            match node.content {
                Content::Leaf(colour) => return colour,
                Content::Split(children) => {
                    let halfway = 1_usize << (node.max_depth - node.level - 1);
                    let quadrant = Quadrant::containing(x, y, halfway);
                    let (dx, dy) = quadrant.offset();
                    x -= usize::from(dx) * halfway;
                    y -= usize::from(dy) * halfway;
                    current = children[quadrant.index()];
                }
            }
        }
    }

    /// Returns the node containing `location` at `level`, or the leaf
    /// reached first where the tree is shallower than `level`.
    ///
    /// Locations outside the canvas resolve to the nearest edge quadrant.
    pub fn select(&self, location: Point, level: u8) -> NodeId {
        let mut current = self.root;
        let mut local = location - self.node(current).position;
        loop {
            let node = self.node(current);
            let Content::Split(children) = node.content else {
                return current;
            };
            if node.level >= level {
                return current;
            }
            let halfway = node.size / 2.0;
            let quadrant = Quadrant::containing(local.x, local.y, halfway);
            let (dx, dy) = quadrant.offset();
            local = Point::new(
                local.x - f64::from(dx) * halfway,
                local.y - f64::from(dy) * halfway,
            );
            current = children[quadrant.index()];
        }
    }

    /// Rasterizes the whole board into a `side() x side()` grid.
    pub fn rasterize(&self) -> Grid {
        Grid::from_fn(self.side(), |x, y| self.colour_at(self.root, x, y))
    }

    /// Rasterizes the subtree at `id` at the board's finest resolution.
    pub fn rasterize_node(&self, id: NodeId) -> Result<Grid, BoardError> {
        self.ensure_alive(id)?;
        let side = 1_usize << (self.max_depth - self.node(id).level);
        Ok(Grid::from_fn(side, |x, y| self.colour_at(id, x, y)))
    }

    // --- validation ---

    /// Verifies every structural and geometric invariant of the tree.
    pub fn check_invariants(&self) -> Result<(), BoardError> {
        self.ensure_alive(self.root)?;
        let root = self.node(self.root);
        if root.level != 0 {
            return Err(invariant(format!("root has level {}", root.level)));
        }
        if root.parent.is_some() {
            return Err(invariant("root has a parent".to_string()));
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(invariant(format!("max depth {} too large", self.max_depth)));
        }
        let reached = self.check_subtree(self.root)?;
        if reached != self.len() {
            return Err(invariant(format!(
                "{} live nodes but only {} reachable from the root",
                self.len(),
                reached
            )));
        }
        Ok(())
    }

    /// Checks the subtree at `id`, returning how many nodes it holds.
    fn check_subtree(&self, id: NodeId) -> Result<usize, BoardError> {
        let node = self.node(id);
        if node.max_depth != self.max_depth {
            return Err(invariant(format!("{:?} has max depth {}", id, node.max_depth)));
        }
        if node.level > node.max_depth {
            return Err(invariant(format!("{:?} has level {} past max depth", id, node.level)));
        }
        let Content::Split(children) = node.content else {
            return Ok(1);
        };
        if node.level + 1 > node.max_depth {
            return Err(invariant(format!("{:?} at max depth has children", id)));
        }
        let half = node.size / 2.0;
        let mut count = 1;
        for (quadrant, child_id) in Quadrant::ALL.into_iter().zip(children) {
            if !self.is_alive(child_id) {
                return Err(invariant(format!("{:?} has stale child {:?}", id, child_id)));
            }
            let child = self.node(child_id);
            if child.parent != Some(id) {
                return Err(invariant(format!("{:?} does not point back to {:?}", child_id, id)));
            }
            if child.level != node.level + 1 {
                return Err(invariant(format!("{:?} has level {}", child_id, child.level)));
            }
            if child.size != half {
                return Err(invariant(format!(
                    "{:?} has size {}, expected {}",
                    child_id, child.size, half
                )));
            }
            let expected = quadrant.child_origin(node.position, half);
            if child.position != expected {
                return Err(invariant(format!(
                    "{:?} at {:?}, expected {:?}",
                    child_id, child.position, expected
                )));
            }
            count += self.check_subtree(child_id)?;
        }
        Ok(count)
    }
}

fn invariant(message: String) -> BoardError {
    BoardError::Invariant(message)
}
