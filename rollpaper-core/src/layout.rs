//! Initial two-column placement of notes and the transient position map.

use crate::constants::{
    GRID_COLUMN_WIDTH, GRID_COLUMNS, GRID_OFFSET_X, GRID_OFFSET_Y, GRID_ROW_HEIGHT,
};
use crate::model::{Note, NoteId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Add, Sub};

/// Screen coordinates in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when either axis differs from `other` by more than `threshold`.
    #[must_use]
    pub const fn exceeds(self, other: Self, threshold: i32) -> bool {
        (self.x - other.x).abs() > threshold || (self.y - other.y).abs() > threshold
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Grid slot for the note at `index` in fetch order.
#[must_use]
pub fn grid_position(index: usize) -> Position {
    let row = i32::try_from(index / GRID_COLUMNS).unwrap_or(i32::MAX);
    let col = i32::try_from(index % GRID_COLUMNS).unwrap_or_default();
    Position::new(
        col * GRID_COLUMN_WIDTH + GRID_OFFSET_X,
        row.saturating_mul(GRID_ROW_HEIGHT)
            .saturating_add(GRID_OFFSET_Y),
    )
}

/// Note id to on-screen position. Owned by the board view; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionMap {
    positions: BTreeMap<NoteId, Position>,
}

impl PositionMap {
    /// Lay out `notes` on the grid in the order they were fetched.
    #[must_use]
    pub fn from_notes(notes: &[Note]) -> Self {
        let positions = notes
            .iter()
            .enumerate()
            .map(|(index, note)| (note.id, grid_position(index)))
            .collect();
        Self { positions }
    }

    #[must_use]
    pub fn get(&self, id: NoteId) -> Option<Position> {
        self.positions.get(&id).copied()
    }

    /// Move a known note. Unknown ids are ignored so the key set never grows.
    pub fn set(&mut self, id: NoteId, position: Position) -> bool {
        match self.positions.get_mut(&id) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NoteId, Position)> + '_ {
        self.positions.iter().map(|(id, pos)| (*id, *pos))
    }

    /// True when the key set equals the ids of `notes`.
    #[must_use]
    pub fn covers_exactly(&self, notes: &[Note]) -> bool {
        let ids: BTreeSet<NoteId> = notes.iter().map(|n| n.id).collect();
        self.positions.keys().copied().eq(ids)
    }
}
