use crate::error::FreeListError;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    Free { next: Option<u32> },
}

/// Arena with O(1) insertion and removal that never moves live values.
///
/// Indices returned by [`FreeList::insert`] stay valid until that index is removed
/// or the list is cleared. Vacated slots are chained together and handed out again
/// before the backing storage grows.
///
/// Slots are addressed by `u32`, so a list holds at most `u32::MAX + 1` slots;
/// growing past that panics, the same way `Vec` does on capacity overflow.
#[derive(Clone)]
pub struct FreeList<T> {
    slots: Vec<Slot<T>>,
    first_free: Option<u32>,
    len: usize,
}

impl<T> FreeList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            first_free: None,
            len: 0,
        }
    }

    pub fn insert(&mut self, value: T) -> u32 {
        self.len += 1;
        match self.first_free {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                if let Slot::Free { next } = *slot {
                    self.first_free = next;
                }
                *slot = Slot::Occupied(value);
                index
            }
            None => {
                let index = slot_index(self.slots.len());
                self.slots.push(Slot::Occupied(value));
                index
            }
        }
    }

    /// Appends `values` to contiguous fresh slots at the end of the arena, bypassing
    /// the free chain. Returns the index of the first one.
    pub fn append_block<const N: usize>(&mut self, values: [T; N]) -> u32 {
        let first = slot_index(self.slots.len());
        // the last slot of the block must be addressable too
        slot_index(self.slots.len() + N.saturating_sub(1));
        self.slots.extend(values.into_iter().map(Slot::Occupied));
        self.len += N;
        first
    }

    pub fn remove(&mut self, index: u32) -> Result<T, FreeListError> {
        let range = self.slots.len();
        let slot = self
            .slots
            .get_mut(index as usize)
            .ok_or(FreeListError::OutOfRange { index, range })?;
        if let Slot::Free { .. } = slot {
            return Err(FreeListError::Vacant { index });
        }
        let old = std::mem::replace(
            slot,
            Slot::Free {
                next: self.first_free,
            },
        );
        self.first_free = Some(index);
        self.len -= 1;
        match old {
            Slot::Occupied(value) => Ok(value),
            Slot::Free { .. } => Err(FreeListError::Vacant { index }),
        }
    }

    pub fn get(&self, index: u32) -> Result<&T, FreeListError> {
        match self.slots.get(index as usize) {
            Some(Slot::Occupied(value)) => Ok(value),
            Some(Slot::Free { .. }) => Err(FreeListError::Vacant { index }),
            None => Err(FreeListError::OutOfRange {
                index,
                range: self.slots.len(),
            }),
        }
    }

    pub fn get_mut(&mut self, index: u32) -> Result<&mut T, FreeListError> {
        let range = self.slots.len();
        match self.slots.get_mut(index as usize) {
            Some(Slot::Occupied(value)) => Ok(value),
            Some(Slot::Free { .. }) => Err(FreeListError::Vacant { index }),
            None => Err(FreeListError::OutOfRange { index, range }),
        }
    }

    /// Drops every slot, live or free. Unlike removing each value, this also resets
    /// [`FreeList::range`] to zero.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.first_free = None;
        self.len = 0;
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever handed out since the last clear, live or free.
    pub fn range(&self) -> usize {
        self.slots.len()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Slot::Occupied(value) => Some((i as u32, value)),
                Slot::Free { .. } => None,
            })
    }
}

// Slots past the u32 index space cannot be addressed.
fn slot_index(position: usize) -> u32 {
    match u32::try_from(position) {
        Ok(index) => index,
        Err(_) => panic!("free list is full (slot {} exceeds u32 indices)", position),
    }
}

impl<T> Default for FreeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Indexing is for owners that maintain the liveness invariant themselves; misuse
// panics with the same error `get` would return.
impl<T> Index<u32> for FreeList<T> {
    type Output = T;

    fn index(&self, index: u32) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<u32> for FreeList<T> {
    fn index_mut(&mut self, index: u32) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FreeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
