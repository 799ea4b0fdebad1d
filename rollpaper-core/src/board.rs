//! State behind a club's board page: the fetched notes, their positions, the
//! view toggles and the drag machine.

use crate::drag::{DragMachine, Release};
use crate::error::BackendError;
use crate::layout::{Position, PositionMap};
use crate::model::{ClubId, Note, NoteId};
use crate::routes::AppPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    /// The fetch failed or returned no notes.
    NotFound,
}

/// Identifies one fetch so late answers for an older club can be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub club_id: ClubId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardController {
    club_id: ClubId,
    notes: Vec<Note>,
    positions: PositionMap,
    view_mode: ViewMode,
    relocating: bool,
    drag: DragMachine,
    load_state: LoadState,
    generation: u64,
}

impl BoardController {
    #[must_use]
    pub fn new(club_id: impl Into<ClubId>) -> Self {
        Self {
            club_id: club_id.into(),
            ..Self::default()
        }
    }

    /// Start a fetch for `club_id`, superseding any fetch still in flight.
    pub fn begin_load(&mut self, club_id: impl Into<ClubId>) -> LoadTicket {
        self.club_id = club_id.into();
        self.generation += 1;
        self.load_state = LoadState::Loading;
        self.drag.reset();
        LoadTicket {
            generation: self.generation,
            club_id: self.club_id.clone(),
        }
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale.
    ///
    /// Errors collapse into an empty board; there is no separate error state.
    pub fn apply_load(&mut self, ticket: &LoadTicket, result: Result<Vec<Note>, BackendError>) -> bool {
        if ticket.generation != self.generation || ticket.club_id != self.club_id {
            log::warn!(
                "dropping stale board load {} for club {}",
                ticket.generation,
                ticket.club_id
            );
            return false;
        }
        let notes = result.unwrap_or_else(|err| {
            log::warn!("failed to load notes for club {}: {err}", ticket.club_id);
            Vec::new()
        });
        self.positions = PositionMap::from_notes(&notes);
        self.load_state = if notes.is_empty() {
            LoadState::NotFound
        } else {
            LoadState::Loaded
        };
        self.notes = notes;
        true
    }

    #[must_use]
    pub fn club_id(&self) -> &str {
        &self.club_id
    }

    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub const fn positions(&self) -> &PositionMap {
        &self.positions
    }

    #[must_use]
    pub fn position_of(&self, id: NoteId) -> Option<Position> {
        self.positions.get(id)
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[must_use]
    pub const fn is_relocating(&self) -> bool {
        self.relocating
    }

    #[must_use]
    pub const fn drag(&self) -> &DragMachine {
        &self.drag
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn toggle_relocation(&mut self) {
        self.relocating = !self.relocating;
    }

    /// Relocation is only offered in grid view with something on the board.
    #[must_use]
    pub fn can_relocate(&self) -> bool {
        self.view_mode == ViewMode::Grid && !self.notes.is_empty()
    }

    pub fn pointer_down(&mut self, id: NoteId, pointer: Position) {
        self.drag.pointer_down(id, pointer, &self.positions);
    }

    pub fn pointer_move(&mut self, pointer: Position) -> Option<(NoteId, Position)> {
        self.drag
            .pointer_move(pointer, self.relocating, &mut self.positions)
    }

    /// Finish a gesture. Returns a navigation target when it was a click.
    pub fn pointer_up(&mut self) -> Option<AppPath> {
        match self.drag.pointer_up(self.relocating, &self.positions) {
            Release::Click(id) => self.detail_route(id),
            Release::Ignored | Release::Cancelled(_) | Release::Committed { .. } => None,
        }
    }

    /// The pointer left the board mid-gesture. A drag keeps its last
    /// position and a pending press is dropped; this never navigates.
    pub fn pointer_leave(&mut self) -> Release {
        match self.drag.pointer_up(true, &self.positions) {
            Release::Click(id) => Release::Cancelled(id),
            other => other,
        }
    }

    /// Click in list view. Suppressed while relocating.
    #[must_use]
    pub fn list_click(&self, id: NoteId) -> Option<AppPath> {
        if self.relocating {
            return None;
        }
        self.detail_route(id)
    }

    #[must_use]
    pub fn detail_route(&self, id: NoteId) -> Option<AppPath> {
        self.notes
            .iter()
            .any(|n| n.id == id)
            .then(|| AppPath::PostDetail {
                club_id: self.club_id.clone(),
                post_id: id,
            })
    }

    /// Absolute link to this board, used by the share dialog.
    ///
    /// `app_root` is the origin plus any deployment base path.
    #[must_use]
    pub fn share_url(&self, app_root: &str) -> String {
        format!(
            "{}{}",
            app_root.trim_end_matches('/'),
            AppPath::ClubBoard(self.club_id.clone()).to_path()
        )
    }
}
