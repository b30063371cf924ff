use crate::error::WorkStackError;
use smallvec::SmallVec;

/// Entries kept inline before a [`WorkStack`] spills to the heap.
pub const INLINE_CAPACITY: usize = 64;

/// LIFO worklist with inline storage for the first `N` entries.
///
/// Tree descents push their pending nodes here instead of recursing. The fan-out of
/// a descent is small, so most traversals never allocate.
#[derive(Debug, Clone)]
pub struct WorkStack<T, const N: usize = INLINE_CAPACITY> {
    items: SmallVec<[T; N]>,
}

impl<T, const N: usize> WorkStack<T, N> {
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Result<T, WorkStackError> {
        self.items.pop().ok_or(WorkStackError::Empty)
    }

    pub fn peek(&self) -> Result<&T, WorkStackError> {
        self.items.last().ok_or(WorkStackError::Empty)
    }

    /// Direct slot access across the whole stack, bottom entry first.
    pub fn get(&self, index: usize) -> Result<&T, WorkStackError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(WorkStackError::OutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, WorkStackError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(WorkStackError::OutOfRange { index, len })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True once the stack has outgrown its inline storage.
    pub fn spilled(&self) -> bool {
        self.items.spilled()
    }

    pub const fn inline_capacity() -> usize {
        N
    }
}

impl<T, const N: usize> Default for WorkStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Extend<T> for WorkStack<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
