//! Slot availability grid
//!
//! A [`Grid`] holds one availability flag per slot. A flag starts `true` and
//! can only ever be cleared, by [`Grid::dispense`].

use super::constants::{COLS, ROWS};
use super::slot::SlotRef;

/// Result of trying to take an item from a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispense {
    /// The item was there and has been handed out
    Dispensed,
    /// The slot was already empty; the grid is unchanged
    NotAvailable,
}

/// The 3x3 grid of slot availability flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    slots: [[bool; COLS]; ROWS],
}

impl Grid {
    /// Create a fully stocked grid
    pub fn new() -> Self {
        Grid {
            slots: [[true; COLS]; ROWS],
        }
    }

    /// Whether the slot still holds an item
    pub fn is_available(&self, slot: SlotRef) -> bool {
        self.slots[slot.row()][slot.col()]
    }

    /// Take the item from a slot if there is one
    pub fn dispense(&mut self, slot: SlotRef) -> Dispense {
        let flag = &mut self.slots[slot.row()][slot.col()];
        if *flag {
            *flag = false;
            Dispense::Dispensed
        } else {
            Dispense::NotAvailable
        }
    }

    /// True once every slot has been emptied
    pub fn is_empty(&self) -> bool {
        self.slots.iter().flatten().all(|&available| !available)
    }

    /// Number of slots still holding an item
    pub fn remaining(&self) -> usize {
        self.slots.iter().flatten().filter(|&&available| available).count()
    }

    /// Iterate over grid rows as flag arrays
    pub fn rows(&self) -> impl Iterator<Item = &[bool; COLS]> {
        self.slots.iter()
    }

    /// Iterate over every slot reference in row-major order
    pub fn slot_refs() -> impl Iterator<Item = SlotRef> {
        (0..ROWS).flat_map(|row| (0..COLS).filter_map(move |col| SlotRef::new(row, col)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
