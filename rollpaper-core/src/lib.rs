//! Rolling paper core
//!
//! Platform-agnostic logic for the rolling paper guestbook: note layout, the
//! drag state machine, board/composer/registry controllers and the auth
//! bridge. Backend access goes through the traits in [`backend`].

pub mod auth;
pub mod backend;
pub mod board;
pub mod composer;
pub mod config;
pub mod constants;
pub mod context;
pub mod drag;
pub mod error;
pub mod layout;
pub mod memory;
pub mod model;
pub mod registry;
pub mod routes;

// Re-export commonly used types
pub use auth::{
    AuthOutcome, NicknameError, RedirectTokens, complete_onboarding, login_url,
    parse_redirect_fragment, resolve_redirect, resolve_session,
};
pub use backend::{BackendResult, ClubStore, IdentityProvider, NoteStore, ObjectStore, ProfileStore};
pub use board::{BoardController, LoadState, LoadTicket, ViewMode};
pub use composer::{ClubHeading, ComposeError, PostDraft, submit_post};
pub use config::{BackendConfig, ConfigError};
pub use context::UserContext;
pub use drag::{DragMachine, DragState, Release};
pub use error::BackendError;
pub use layout::{Position, PositionMap, grid_position};
pub use memory::{Fault, InMemoryBackend};
pub use model::{
    Category, Club, ClubId, NewClub, NewNote, NewUserProfile, Note, NoteColor, NoteId, Session,
    SessionUser, User, UserProfile,
};
pub use registry::{
    ClubFormError, ClubListCache, Notice, club_page, create_club, load_clubs, page_count,
    page_slice,
};
pub use routes::AppPath;
