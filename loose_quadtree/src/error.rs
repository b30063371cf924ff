use std::fmt;

/// Misuse of a [`FreeList`](crate::free_list::FreeList) slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeListError {
    OutOfRange { index: u32, range: usize },
    Vacant { index: u32 },
}

impl fmt::Display for FreeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreeListError::OutOfRange { index, range } => {
                write!(
                    f,
                    "free list index out of range (index: {}, range: {})",
                    index, range
                )
            }
            FreeListError::Vacant { index } => {
                write!(f, "free list slot is vacant (index: {})", index)
            }
        }
    }
}

impl std::error::Error for FreeListError {}

/// Misuse of a [`WorkStack`](crate::work_stack::WorkStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkStackError {
    Empty,
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for WorkStackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkStackError::Empty => write!(f, "work stack is empty"),
            WorkStackError::OutOfRange { index, len } => {
                write!(
                    f,
                    "work stack index out of range (index: {}, len: {})",
                    index, len
                )
            }
        }
    }
}

impl std::error::Error for WorkStackError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRect {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    },
    OutOfBounds {
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        bounds_min_x: f32,
        bounds_min_y: f32,
        bounds_max_x: f32,
        bounds_max_y: f32,
    },
    StaleHandle {
        handle: u32,
    },
    Arena(FreeListError),
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl From<FreeListError> for QuadtreeError {
    fn from(err: FreeListError) -> Self {
        QuadtreeError::Arena(err)
    }
}

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRect {
                min_x,
                min_y,
                max_x,
                max_y,
            } => {
                write!(
                    f,
                    "rectangle corners must be finite with bottom-left <= top-right (min_x: {}, min_y: {}, max_x: {}, max_y: {})",
                    min_x, min_y, max_x, max_y
                )
            }
            QuadtreeError::OutOfBounds {
                min_x,
                min_y,
                max_x,
                max_y,
                bounds_min_x,
                bounds_min_y,
                bounds_max_x,
                bounds_max_y,
            } => {
                write!(
                    f,
                    "rectangle lies entirely outside quadtree bounds (min_x: {}, min_y: {}, max_x: {}, max_y: {}, bounds_min_x: {}, bounds_min_y: {}, bounds_max_x: {}, bounds_max_y: {})",
                    min_x,
                    min_y,
                    max_x,
                    max_y,
                    bounds_min_x,
                    bounds_min_y,
                    bounds_max_x,
                    bounds_max_y
                )
            }
            QuadtreeError::StaleHandle { handle } => {
                write!(f, "element handle does not refer to a stored element (handle: {})", handle)
            }
            QuadtreeError::Arena(err) => write!(f, "quadtree storage corrupted: {}", err),
        }
    }
}

impl std::error::Error for QuadtreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuadtreeError::Arena(err) => Some(err),
            _ => None,
        }
    }
}
