use crate::free_list::FreeList;
use crate::work_stack::WorkStack;
use common::shapes::{Quadrant, Rect};

pub(crate) const ROOT: u32 = 0;

/// Caller-supplied identifier stored alongside each rectangle.
pub type Id = u32;

/// Reference to a stored element, returned by
/// [`Quadtree::try_insert`](super::Quadtree::try_insert).
///
/// A slot index plus the generation the slot had when the element was stored. Every
/// reuse of a slot, including reuse after [`Quadtree::clear`](super::Quadtree::clear),
/// bumps its generation, so an old handle never reaches the new occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl ElementHandle {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Element {
    pub(crate) id: Id,
    pub(crate) rect: Rect,
}

/// Link from a leaf to one element. A leaf's attachments form a singly linked list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Attachment {
    pub(crate) element: u32,
    pub(crate) next: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuadNode {
    Leaf { count: u32, head: Option<u32> },
    // children live at first_child + Quadrant::offset()
    Branch { first_child: u32 },
}

impl QuadNode {
    pub(crate) const EMPTY_LEAF: QuadNode = QuadNode::Leaf {
        count: 0,
        head: None,
    };
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct InsertTask {
    pub(crate) element: u32,
    pub(crate) node: u32,
    pub(crate) depth: u32,
    pub(crate) area: Rect,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeTask {
    pub(crate) node: u32,
    pub(crate) area: Rect,
}

pub(crate) type InsertStack = WorkStack<InsertTask>;
pub(crate) type NodeStack = WorkStack<NodeTask>;

/// Writes the quadrants of `area` that `rect` must descend into and returns how many.
///
/// Strictly straddling rectangles pick every side they cross. A rectangle lying
/// exactly on a split line still gets one side, so nothing is left unattached.
#[inline(always)]
pub(crate) fn child_targets(area: &Rect, rect: &Rect, targets: &mut [Quadrant; 4]) -> usize {
    let center = area.center();
    let left = rect.bottom_left.x < center.x;
    let right = rect.top_right.x > center.x || !left;
    let bottom = rect.bottom_left.y < center.y;
    let top = rect.top_right.y > center.y || !bottom;

    let mut len = 0usize;
    if top {
        if left {
            targets[len] = Quadrant::TopLeft;
            len += 1;
        }
        if right {
            targets[len] = Quadrant::TopRight;
            len += 1;
        }
    }
    if bottom {
        if left {
            targets[len] = Quadrant::BottomLeft;
            len += 1;
        }
        if right {
            targets[len] = Quadrant::BottomRight;
            len += 1;
        }
    }
    len
}

/// Walks one leaf's attachment list, yielding `(attachment, element)` index pairs.
pub(crate) struct Attachments<'a> {
    attachments: &'a FreeList<Attachment>,
    cursor: Option<u32>,
}

impl<'a> Attachments<'a> {
    pub(crate) fn new(attachments: &'a FreeList<Attachment>, head: Option<u32>) -> Self {
        Self {
            attachments,
            cursor: head,
        }
    }
}

impl Iterator for Attachments<'_> {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let attachment = &self.attachments[index];
        self.cursor = attachment.next;
        Some((index, attachment.element))
    }
}
