//! The calculator stack: a fixed arena of entry slots.
//!
//! Slots below `active` are committed numbers, the slot at `active` is the
//! one being typed into, and slots above it are untouched defaults. The
//! arena never grows; once every slot is committed the stack is full and
//! further growth is rejected instead of writing out of bounds.

use crate::consts::STACK_DEPTH;
use crate::entry::EntryBuffer;
use crate::error::InputError;

#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    slots: [EntryBuffer; STACK_DEPTH],
    active: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self {
            slots: [EntryBuffer::new(); STACK_DEPTH],
            active: 0,
        }
    }

    /// Index of the slot currently receiving keystrokes. Equals
    /// `STACK_DEPTH` once the stack is full.
    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.active >= STACK_DEPTH
    }

    /// The slot being typed into, or `OutOfCapacity` when every slot is
    /// already committed.
    pub fn current(&mut self) -> Result<&mut EntryBuffer, InputError> {
        self.slots
            .get_mut(self.active)
            .ok_or(InputError::OutOfCapacity)
    }

    /// Read-only view of the active slot.
    pub fn current_ref(&self) -> Result<&EntryBuffer, InputError> {
        self.slots.get(self.active).ok_or(InputError::OutOfCapacity)
    }

    /// Commit the active slot and advance to the next one.
    ///
    /// Returns the committed value. Committing the last slot succeeds and
    /// leaves the stack full; any commit after that is rejected without
    /// touching a slot.
    pub fn push_commit(&mut self) -> Result<f64, InputError> {
        let slot = self
            .slots
            .get_mut(self.active)
            .ok_or(InputError::OutOfCapacity)?;
        slot.commit();
        let value = slot.value();
        self.active += 1;
        Ok(value)
    }

    /// A committed or in-progress slot by level, `None` past the arena.
    pub fn get(&self, level: usize) -> Option<&EntryBuffer> {
        self.slots.get(level)
    }

    /// Iterate the committed slots, bottom (level 0) first.
    pub fn committed(&self) -> impl Iterator<Item = &EntryBuffer> {
        self.slots[..self.active].iter()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}
