mod config;
mod insert;
mod query;
mod remove;
mod traverse;
mod types;

pub use config::Config;
pub use types::{ElementHandle, Id};

use crate::error::{QuadtreeError, QuadtreeResult};
use crate::free_list::FreeList;
use common::shapes::Rect;
use tracing::debug;
use types::*;

/// Loose quadtree over a fixed area.
///
/// A rectangle that straddles a split is attached to every leaf it overlaps rather
/// than being kept at a common ancestor, so queries only ever inspect leaves. Each
/// element is stored once; leaves hold lightweight attachments pointing at it.
///
/// Nodes, attachments and elements live in three [`FreeList`] arenas and refer to
/// each other by index. The root is always node 0.
pub struct Quadtree {
    elements: FreeList<Element>,
    attachments: FreeList<Attachment>,
    nodes: FreeList<QuadNode>,
    // last generation handed out per element slot; survives removal and clear
    generations: Vec<u32>,
    bounds: Rect,
    max_elements_per_node: u32,
    max_depth: u32,
}

impl Quadtree {
    pub fn new(bounds: Rect) -> Self {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn new_with_config(bounds: Rect, config: Config) -> Self {
        let mut nodes = FreeList::new();
        nodes.insert(QuadNode::EMPTY_LEAF);
        let mut tree = Self {
            elements: FreeList::new(),
            attachments: FreeList::new(),
            nodes,
            generations: Vec::new(),
            bounds,
            max_elements_per_node: config.max_elements_per_node,
            max_depth: config.max_depth,
        };
        if config.initial_capacity > 0 {
            tree.reserve(config.initial_capacity);
        }
        tree
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn config(&self) -> Config {
        Config {
            max_elements_per_node: self.max_elements_per_node,
            max_depth: self.max_depth,
            initial_capacity: 0,
        }
    }

    /// Capacity hint for the expected number of elements.
    pub fn reserve(&mut self, capacity: usize) {
        self.elements.reserve(capacity);
        self.attachments.reserve(capacity.saturating_mul(2));
    }

    /// Drops every element and collapses the tree back to a single empty root leaf.
    ///
    /// Rebuilding from scratch after a clear is the intended way to track objects
    /// that move every step.
    pub fn clear(&mut self) {
        debug!(
            elements = self.elements.len(),
            nodes = self.nodes.len(),
            "clearing quadtree"
        );
        self.elements.clear();
        self.attachments.clear();
        self.nodes.clear();
        self.nodes.insert(QuadNode::EMPTY_LEAF);
    }

    /// Live `(nodes, attachments, elements)` counts.
    pub fn storage_counts(&self) -> (usize, usize, usize) {
        (
            self.nodes.len(),
            self.attachments.len(),
            self.elements.len(),
        )
    }

    /// The identifier and rectangle stored under `handle`.
    pub fn get(&self, handle: ElementHandle) -> QuadtreeResult<(Id, Rect)> {
        let stale = QuadtreeError::StaleHandle {
            handle: handle.index,
        };
        if self.generations.get(handle.index as usize) != Some(&handle.generation) {
            return Err(stale);
        }
        self.elements
            .get(handle.index)
            .map(|element| (element.id, element.rect))
            .map_err(|_| stale)
    }

    /// Stores `element` and stamps its slot with a fresh generation.
    pub(crate) fn store_element(&mut self, element: Element) -> ElementHandle {
        let index = self.elements.insert(element);
        let generation = match self.generations.get_mut(index as usize) {
            Some(generation) => {
                *generation = generation.wrapping_add(1);
                *generation
            }
            None => {
                self.generations.push(1);
                1
            }
        };
        ElementHandle::new(index, generation)
    }

    pub(crate) fn handle_for(&self, index: u32) -> ElementHandle {
        ElementHandle::new(index, self.generations[index as usize])
    }

    pub(crate) fn validate_rect(&self, rect: &Rect) -> QuadtreeResult<()> {
        if !rect.is_well_formed() {
            return Err(QuadtreeError::InvalidRect {
                min_x: rect.bottom_left.x,
                min_y: rect.bottom_left.y,
                max_x: rect.top_right.x,
                max_y: rect.top_right.y,
            });
        }
        if !rect.touches_area(&self.bounds) {
            return Err(QuadtreeError::OutOfBounds {
                min_x: rect.bottom_left.x,
                min_y: rect.bottom_left.y,
                max_x: rect.top_right.x,
                max_y: rect.top_right.y,
                bounds_min_x: self.bounds.bottom_left.x,
                bounds_min_y: self.bounds.bottom_left.y,
                bounds_max_x: self.bounds.top_right.x,
                bounds_max_y: self.bounds.top_right.y,
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for Quadtree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Quadtree")
            .field("bounds", &self.bounds)
            .field("elements", &self.elements.len())
            .field("attachments", &self.attachments.len())
            .field("nodes", &self.nodes.len())
            .field("max_elements_per_node", &self.max_elements_per_node)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
