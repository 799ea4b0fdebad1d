//! Seams to the hosted backend.
//!
//! Each trait covers one collaborator. The browser client implements all of
//! them over HTTP; [`crate::memory::InMemoryBackend`] implements them for tests
//! and the tester. Futures are `?Send` because the browser implementation
//! holds JS values across awaits.

use crate::error::BackendError;
use crate::model::{Club, NewClub, NewNote, NewUserProfile, Note, SessionUser, UserProfile};
use async_trait::async_trait;

pub type BackendResult<T> = Result<T, BackendError>;

#[async_trait(?Send)]
pub trait ClubStore {
    /// Every club, newest last.
    async fn list_clubs(&self) -> BackendResult<Vec<Club>>;

    /// Single-row read from the `Clubs` table.
    async fn fetch_club(&self, club_id: &str) -> BackendResult<Club>;

    /// The guest payload for one club (`GET /api/guests/{id}`).
    async fn fetch_guests(&self, club_id: &str) -> BackendResult<Vec<Club>>;

    async fn insert_club(&self, club: &NewClub) -> BackendResult<()>;
}

#[async_trait(?Send)]
pub trait NoteStore {
    /// Notes of one club in display order.
    async fn list_notes(&self, club_id: &str) -> BackendResult<Vec<Note>>;

    async fn insert_note(&self, note: &NewNote) -> BackendResult<()>;
}

#[async_trait(?Send)]
pub trait ObjectStore {
    /// What the platform hands over for an upload (a browser `File`, raw bytes).
    type Payload;

    /// Store `payload` under `key` and return its public URL.
    async fn upload(&self, key: &str, payload: &Self::Payload) -> BackendResult<String>;
}

#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Resolve the account behind an access token.
    async fn session_user(&self, access_token: &str) -> BackendResult<SessionUser>;
}

#[async_trait(?Send)]
pub trait ProfileStore {
    /// Single-row read by user id. Zero rows is reported as
    /// [`BackendError::no_rows`].
    async fn fetch_profile(&self, user_id: &str) -> BackendResult<UserProfile>;

    async fn insert_profile(&self, profile: &NewUserProfile) -> BackendResult<()>;
}
