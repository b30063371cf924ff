//! Loose quadtree for axis-aligned rectangles, built on index-stable arenas.
//!
//! Callers go through [`Quadtree`]; [`FreeList`] and [`WorkStack`] are the storage
//! and traversal building blocks it is made of.

pub mod error;
pub mod free_list;
pub mod quadtree;
pub mod work_stack;

pub use common::shapes::{self, Point, Quadrant, Rect};
pub use error::{FreeListError, QuadtreeError, QuadtreeResult, WorkStackError};
pub use free_list::FreeList;
pub use quadtree::{Config, ElementHandle, Id, Quadtree};
pub use work_stack::WorkStack;
