use super::{classify, Config, Quadrant};
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Rectangle, Shape};
use std::fmt;
use tracing::{debug, trace};

/// Counters gathered by a full walk of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadTreeStats {
    pub node_count: usize,
    pub leaf_count: usize,
    pub object_count: usize,
    /// Deepest level reached. The root is level 0.
    pub max_depth: usize,
}

/// One region of a region quadtree, and the root of the subtree below it.
///
/// A node keeps the items that do not fit a single child quadrant and, once
/// it has overflowed `max_objects` for the first time, four children in
/// [`Quadrant`] index order. Nodes never merge back.
///
/// Items must have a valid bounding box (finite, non-negative extents).
/// That is not checked on insert; a malformed box is placed wherever
/// [`classify`] happens to send it.
pub struct QuadNode<T> {
    bounds: Rectangle,
    config: Config,
    level: usize,
    objects: Vec<T>,
    children: Option<Box<[QuadNode<T>; 4]>>,
}

impl<T> QuadNode<T> {
    /// Root node with the default limits (10 objects, 8 levels).
    pub fn new(bounds: Rectangle) -> QuadtreeResult<Self> {
        Self::with_config(bounds, Config::default())
    }

    pub fn with_limits(
        bounds: Rectangle,
        max_objects: usize,
        max_levels: usize,
    ) -> QuadtreeResult<Self> {
        Self::with_config(
            bounds,
            Config {
                max_objects,
                max_levels,
                ..Config::default()
            },
        )
    }

    pub fn with_config(bounds: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_config(&config)?;
        validate_bounds(&bounds)?;
        Ok(Self::new_child(bounds, config, 0))
    }

    fn new_child(bounds: Rectangle, config: Config, level: usize) -> Self {
        Self {
            bounds,
            config,
            level,
            objects: Vec::new(),
            children: None,
        }
    }

    pub fn bounds(&self) -> &Rectangle {
        &self.bounds
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn max_objects(&self) -> usize {
        self.config.max_objects
    }

    pub fn max_levels(&self) -> usize {
        self.config.max_levels
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Items stored at this node only, in insertion order.
    pub fn objects(&self) -> &[T] {
        &self.objects
    }

    pub fn children(&self) -> Option<&[QuadNode<T>; 4]> {
        self.children.as_deref()
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadNode<T>> {
        self.children
            .as_ref()
            .map(|children| &children[quadrant.index()])
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Number of items in this node and all of its descendants.
    pub fn len(&self) -> usize {
        let below = self
            .children
            .as_ref()
            .map_or(0, |children| children.iter().map(QuadNode::len).sum::<usize>());
        self.objects.len() + below
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
            && self
                .children
                .as_ref()
                .map_or(true, |children| children.iter().all(QuadNode::is_empty))
    }

    /// Appends the region of every node in the subtree, parents before
    /// children.
    pub fn node_bounds(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.push(self.bounds);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.node_bounds(bounding_boxes);
            }
        }
    }

    pub fn stats(&self) -> QuadTreeStats {
        let mut stats = QuadTreeStats::default();
        self.collect_stats(&mut stats);
        stats
    }

    fn collect_stats(&self, stats: &mut QuadTreeStats) {
        stats.node_count += 1;
        stats.object_count += self.objects.len();
        stats.max_depth = stats.max_depth.max(self.level);

        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.collect_stats(stats);
                }
            }
            None => stats.leaf_count += 1,
        }
    }

    /// Calls `callback` on every stored item, this node's items before its
    /// children's.
    pub fn visit_all<F>(&self, mut callback: F)
    where
        F: FnMut(&T),
    {
        self.visit_all_with(&mut callback);
    }

    fn visit_all_with<F>(&self, callback: &mut F)
    where
        F: FnMut(&T),
    {
        for item in &self.objects {
            callback(item);
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.visit_all_with(&mut *callback);
            }
        }
    }

    /// Empties the subtree and drops every child. Limits and bounds are kept.
    pub fn clear(&mut self) {
        if self.level == 0 {
            debug!(
                objects = self.objects.len(),
                split = self.children.is_some(),
                "clearing quadtree"
            );
        }
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                child.clear();
            }
        }
        self.objects.clear();
        self.children = None;
    }

    fn subdivide(&mut self) {
        let sub_width = round_half_up(self.bounds.width / 2.0);
        let sub_height = round_half_up(self.bounds.height / 2.0);
        let x = round_half_up(self.bounds.x);
        let y = round_half_up(self.bounds.y);
        let config = self.config;
        let next_level = self.level + 1;

        trace!(depth = self.level, bounds = ?self.bounds, "subdividing quad node");

        let quadrant =
            |x, y| Self::new_child(Rectangle::new(x, y, sub_width, sub_height), config, next_level);
        self.children = Some(Box::new([
            quadrant(x + sub_width, y),
            quadrant(x, y),
            quadrant(x, y + sub_height),
            quadrant(x + sub_width, y + sub_height),
        ]));
    }
}

impl<T: Shape> QuadNode<T> {
    /// Adds `item` to the subtree. Never fails; a node at `max_levels` just
    /// keeps growing.
    pub fn insert(&mut self, item: T) {
        if let Some(children) = self.children.as_mut() {
            let rect = item.bounding_box();
            if let Some(quadrant) = classify(&self.bounds, &rect, self.config.classification) {
                children[quadrant.index()].insert(item);
                return;
            }
        }

        self.objects.push(item);

        // Only the first overflow splits. Whatever stays here afterwards
        // straddles a midpoint, so a rescan would move nothing.
        if self.children.is_none()
            && self.objects.len() > self.config.max_objects
            && self.level < self.config.max_levels
        {
            self.subdivide();
            self.redistribute();
        }
    }

    /// Pushes every object that fits a single quadrant down one level, in a
    /// single front-to-back pass. Straddling objects keep their order.
    fn redistribute(&mut self) {
        let Some(children) = self.children.as_mut() else {
            return;
        };

        let before = self.objects.len();
        for item in std::mem::take(&mut self.objects) {
            let rect = item.bounding_box();
            match classify(&self.bounds, &rect, self.config.classification) {
                Some(quadrant) => children[quadrant.index()].insert(item),
                None => self.objects.push(item),
            }
        }

        debug!(
            depth = self.level,
            moved = before - self.objects.len(),
            kept = self.objects.len(),
            "redistributed objects after split"
        );
    }

    /// Items that may overlap `rect`.
    ///
    /// This is a candidate set: it contains every stored item that overlaps
    /// `rect` and usually some that do not, so callers run their own exact
    /// test. Order follows [`QuadNode::visit`].
    pub fn retrieve(&self, rect: &Rectangle) -> Vec<&T> {
        let mut candidates = Vec::new();
        self.retrieve_into(rect, &mut candidates);
        candidates
    }

    /// Same as [`QuadNode::retrieve`] but appends to a caller-owned buffer.
    pub fn retrieve_into<'a>(&'a self, rect: &Rectangle, candidates: &mut Vec<&'a T>) {
        candidates.extend(self.objects.iter());

        let Some(children) = &self.children else {
            return;
        };
        match classify(&self.bounds, rect, self.config.classification) {
            Some(quadrant) => children[quadrant.index()].retrieve_into(rect, candidates),
            None => {
                for child in children.iter() {
                    child.retrieve_into(rect, candidates);
                }
            }
        }
    }

    /// Walks the candidates for `rect` and stops at the first one for which
    /// `predicate` returns `true`.
    ///
    /// Each node offers its own items first, in insertion order, then the
    /// matching child or all four children in [`Quadrant`] order. Returns
    /// whether the walk was stopped early.
    pub fn visit<F>(&self, rect: &Rectangle, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.visit_with(rect, &mut predicate)
    }

    fn visit_with<F>(&self, rect: &Rectangle, predicate: &mut F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        if self.objects.iter().any(|item| predicate(item)) {
            return true;
        }

        let Some(children) = &self.children else {
            return false;
        };
        match classify(&self.bounds, rect, self.config.classification) {
            Some(quadrant) => children[quadrant.index()].visit_with(rect, &mut *predicate),
            None => children
                .iter()
                .any(|child| child.visit_with(rect, &mut *predicate)),
        }
    }
}

impl<T> fmt::Debug for QuadNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadNode")
            .field("bounds", &self.bounds)
            .field("level", &self.level)
            .field("objects", &self.objects.len())
            .field("children", &self.children.is_some())
            .finish_non_exhaustive()
    }
}

// Ties go towards +inf so that negative origins split the same way positive
// ones do. `value + 0.5` is not exact in f32, so compare the fraction instead.
#[inline]
fn round_half_up(value: f32) -> f32 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn validate_config(config: &Config) -> QuadtreeResult<()> {
    if config.max_objects == 0 {
        return Err(QuadtreeError::InvalidMaxObjects {
            max_objects: config.max_objects,
        });
    }
    Ok(())
}

fn validate_bounds(bounds: &Rectangle) -> QuadtreeResult<()> {
    if !bounds.x.is_finite() || !bounds.y.is_finite() {
        return Err(QuadtreeError::InvalidRectangleOrigin {
            x: bounds.x,
            y: bounds.y,
        });
    }
    if !bounds.width.is_finite()
        || !bounds.height.is_finite()
        || bounds.width < 0.0
        || bounds.height < 0.0
    {
        return Err(QuadtreeError::InvalidRectangleDims {
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok(())
}
