//! Click-versus-drag disambiguation for notes on the board.
//!
//! One pointer stream drives both behaviours. A press arms the note. With
//! relocation mode on, travelling more than [`DRAG_THRESHOLD_PX`] on either
//! axis turns the press into a drag, and every later move translates the note
//! by the pointer delta. With relocation mode off, releasing an armed note is
//! a click and asks for navigation.

use crate::constants::DRAG_THRESHOLD_PX;
use crate::layout::{Position, PositionMap};
use crate::model::NoteId;

/// Where the press started and where the note was at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOrigin {
    pub pointer: Position,
    pub note: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Armed { id: NoteId, origin: DragOrigin },
    Dragging { id: NoteId, origin: DragOrigin },
}

impl DragState {
    #[must_use]
    pub const fn note_id(&self) -> Option<NoteId> {
        match self {
            Self::Idle => None,
            Self::Armed { id, .. } | Self::Dragging { id, .. } => Some(*id),
        }
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// What a pointer-up resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No note was pressed.
    Ignored,
    /// Press and release without a drag while navigation is allowed.
    Click(NoteId),
    /// A press that ended without moving the note.
    Cancelled(NoteId),
    /// A drag ended; the note stays where it was last moved.
    Committed { id: NoteId, position: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragMachine {
    state: DragState,
}

impl DragMachine {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Arm `id`. Presses on notes missing from `positions` are ignored.
    pub fn pointer_down(&mut self, id: NoteId, pointer: Position, positions: &PositionMap) {
        let Some(note) = positions.get(id) else {
            log::debug!("pointer down on unknown note {id}");
            return;
        };
        self.state = DragState::Armed {
            id,
            origin: DragOrigin { pointer, note },
        };
    }

    /// Track the pointer. Returns the note's new position when it moved.
    pub fn pointer_move(
        &mut self,
        pointer: Position,
        relocating: bool,
        positions: &mut PositionMap,
    ) -> Option<(NoteId, Position)> {
        if !relocating {
            return None;
        }
        let (id, origin) = match self.state {
            DragState::Idle => return None,
            DragState::Armed { id, origin } => {
                if !pointer.exceeds(origin.pointer, DRAG_THRESHOLD_PX) {
                    return None;
                }
                self.state = DragState::Dragging { id, origin };
                (id, origin)
            }
            DragState::Dragging { id, origin } => (id, origin),
        };
        let moved = origin.note + (pointer - origin.pointer);
        positions.set(id, moved).then_some((id, moved))
    }

    /// Finish the gesture and return to idle.
    pub fn pointer_up(&mut self, relocating: bool, positions: &PositionMap) -> Release {
        let previous = std::mem::take(&mut self.state);
        match previous {
            DragState::Idle => Release::Ignored,
            DragState::Armed { id, .. } if relocating => Release::Cancelled(id),
            DragState::Armed { id, .. } => Release::Click(id),
            DragState::Dragging { id, origin } => Release::Committed {
                id,
                position: positions.get(id).unwrap_or(origin.note),
            },
        }
    }

    /// Drop any in-flight gesture without resolving it.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;

    fn notes(ids: &[NoteId]) -> Vec<Note> {
        ids.iter()
            .map(|&id| Note {
                id,
                club_id: "c".into(),
                nickname: "n".into(),
                category: String::new(),
                color: "white".into(),
                content: String::new(),
            })
            .collect()
    }

    #[test]
    fn small_wiggle_while_relocating_keeps_position() {
        let mut positions = PositionMap::from_notes(&notes(&[1]));
        let before = positions.get(1);
        let mut drag = DragMachine::new();
        drag.pointer_down(1, Position::new(100, 100), &positions);
        assert_eq!(
            drag.pointer_move(Position::new(105, 95), true, &mut positions),
            None
        );
        assert_eq!(drag.pointer_up(true, &positions), Release::Cancelled(1));
        assert_eq!(positions.get(1), before);
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn crossing_threshold_translates_by_total_delta() {
        let mut positions = PositionMap::from_notes(&notes(&[1, 2]));
        let mut drag = DragMachine::new();
        drag.pointer_down(2, Position::new(300, 50), &positions);
        let moved = drag.pointer_move(Position::new(306, 50), true, &mut positions);
        assert_eq!(moved, Some((2, Position::new(216, 20))));
        assert!(drag.state().is_dragging());
        drag.pointer_move(Position::new(250, 10), true, &mut positions);
        assert_eq!(
            drag.pointer_up(true, &positions),
            Release::Committed {
                id: 2,
                position: Position::new(160, -20)
            }
        );
        assert_eq!(positions.get(2), Some(Position::new(160, -20)));
        assert_eq!(positions.get(1), Some(Position::new(40, 20)));
    }

    #[test]
    fn press_release_without_relocation_is_a_click() {
        let mut positions = PositionMap::from_notes(&notes(&[7]));
        let mut drag = DragMachine::new();
        drag.pointer_down(7, Position::new(0, 0), &positions);
        assert_eq!(
            drag.pointer_move(Position::new(50, 50), false, &mut positions),
            None
        );
        assert_eq!(drag.pointer_up(false, &positions), Release::Click(7));
        assert_eq!(drag.pointer_up(false, &positions), Release::Ignored);
        assert_eq!(positions.get(7), Some(Position::new(40, 20)));
    }

    #[test]
    fn disabling_relocation_mid_drag_commits_without_click() {
        let mut positions = PositionMap::from_notes(&notes(&[1, 2]));
        let mut drag = DragMachine::new();
        drag.pointer_down(1, Position::new(10, 10), &positions);
        drag.pointer_move(Position::new(30, 10), true, &mut positions);
        assert_eq!(
            drag.pointer_move(Position::new(90, 90), false, &mut positions),
            None
        );
        assert_eq!(
            drag.pointer_up(false, &positions),
            Release::Committed {
                id: 1,
                position: Position::new(60, 20)
            }
        );
        assert_eq!(positions.get(2), Some(Position::new(210, 20)));
    }

    #[test]
    fn press_on_unknown_note_stays_idle() {
        let positions = PositionMap::from_notes(&notes(&[1]));
        let mut drag = DragMachine::new();
        drag.pointer_down(42, Position::new(0, 0), &positions);
        assert_eq!(drag.state(), DragState::Idle);
    }
}
