//! In-memory backend used by tests and the tester CLI.

use crate::backend::{
    BackendResult, ClubStore, IdentityProvider, NoteStore, ObjectStore, ProfileStore,
};
use crate::error::BackendError;
use crate::model::{Club, NewClub, NewNote, NewUserProfile, Note, NoteId, SessionUser, UserProfile};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

/// Operations that can be made to fail on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Fault {
    ListClubs,
    FetchClub,
    FetchGuests,
    InsertClub,
    ListNotes,
    InsertNote,
    Upload,
    SessionUser,
    FetchProfile,
    InsertProfile,
}

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    base_url: String,
    clubs: RefCell<Vec<Club>>,
    notes: RefCell<Vec<Note>>,
    objects: RefCell<BTreeMap<String, Vec<u8>>>,
    profiles: RefCell<BTreeMap<String, UserProfile>>,
    sessions: RefCell<BTreeMap<String, SessionUser>>,
    faults: RefCell<BTreeSet<Fault>>,
    next_club_id: Cell<u64>,
    next_note_id: Cell<NoteId>,
    writes: Cell<usize>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url("memory://objects")
    }

    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            next_club_id: Cell::new(1),
            next_note_id: Cell::new(1),
            ..Self::default()
        }
    }

    pub fn fail(&self, fault: Fault) {
        self.faults.borrow_mut().insert(fault);
    }

    pub fn heal(&self, fault: Fault) {
        self.faults.borrow_mut().remove(&fault);
    }

    /// Seed a club and return its id.
    pub fn add_club(&self, title: &str, owner_id: Option<&str>) -> String {
        let id = self.next_club_id.get();
        self.next_club_id.set(id + 1);
        let club = Club {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail: None,
            owner_id: owner_id.map(str::to_string),
        };
        self.clubs.borrow_mut().push(club);
        id.to_string()
    }

    /// Seed a note and return its id.
    pub fn add_note(&self, club_id: &str, nickname: &str, content: &str) -> NoteId {
        let id = self.next_note_id.get();
        self.next_note_id.set(id + 1);
        self.notes.borrow_mut().push(Note {
            id,
            club_id: club_id.to_string(),
            nickname: nickname.to_string(),
            category: crate::model::Category::default().label().to_string(),
            color: crate::model::NoteColor::default().as_str().to_string(),
            content: content.to_string(),
        });
        id
    }

    pub fn add_session(&self, access_token: &str, user: SessionUser) {
        self.sessions
            .borrow_mut()
            .insert(access_token.to_string(), user);
    }

    pub fn add_profile(&self, profile: UserProfile) {
        self.profiles
            .borrow_mut()
            .insert(profile.id.clone(), profile);
    }

    #[must_use]
    pub fn clubs(&self) -> Vec<Club> {
        self.clubs.borrow().clone()
    }

    #[must_use]
    pub fn notes_for(&self, club_id: &str) -> Vec<Note> {
        self.notes
            .borrow()
            .iter()
            .filter(|n| n.club_id == club_id)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn object_keys(&self) -> Vec<String> {
        self.objects.borrow().keys().cloned().collect()
    }

    #[must_use]
    pub fn profile(&self, user_id: &str) -> Option<UserProfile> {
        self.profiles.borrow().get(user_id).cloned()
    }

    /// Number of successful inserts and uploads so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn check(&self, fault: Fault) -> BackendResult<()> {
        if self.faults.borrow().contains(&fault) {
            return Err(BackendError::Network(format!("injected failure: {fault:?}")));
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

#[async_trait(?Send)]
impl ClubStore for InMemoryBackend {
    async fn list_clubs(&self) -> BackendResult<Vec<Club>> {
        self.check(Fault::ListClubs)?;
        Ok(self.clubs())
    }

    async fn fetch_club(&self, club_id: &str) -> BackendResult<Club> {
        self.check(Fault::FetchClub)?;
        self.clubs
            .borrow()
            .iter()
            .find(|c| c.id == club_id)
            .cloned()
            .ok_or_else(BackendError::no_rows)
    }

    async fn fetch_guests(&self, club_id: &str) -> BackendResult<Vec<Club>> {
        self.check(Fault::FetchGuests)?;
        Ok(self
            .clubs
            .borrow()
            .iter()
            .filter(|c| c.id == club_id)
            .cloned()
            .collect())
    }

    async fn insert_club(&self, club: &NewClub) -> BackendResult<()> {
        self.check(Fault::InsertClub)?;
        let id = self.add_club(&club.title, club.owner_id.as_deref());
        if let Some(row) = self.clubs.borrow_mut().iter_mut().find(|c| c.id == id) {
            row.thumbnail = Some(club.thumbnail.clone());
        }
        self.record_write();
        Ok(())
    }
}

#[async_trait(?Send)]
impl NoteStore for InMemoryBackend {
    async fn list_notes(&self, club_id: &str) -> BackendResult<Vec<Note>> {
        self.check(Fault::ListNotes)?;
        Ok(self.notes_for(club_id))
    }

    async fn insert_note(&self, note: &NewNote) -> BackendResult<()> {
        self.check(Fault::InsertNote)?;
        let id = self.next_note_id.get();
        self.next_note_id.set(id + 1);
        self.notes.borrow_mut().push(Note {
            id,
            club_id: note.club_id.clone(),
            nickname: note.nickname.clone(),
            category: note.category.clone(),
            color: note.color.clone(),
            content: note.content.clone(),
        });
        self.record_write();
        Ok(())
    }
}

#[async_trait(?Send)]
impl ObjectStore for InMemoryBackend {
    type Payload = Vec<u8>;

    async fn upload(&self, key: &str, payload: &Vec<u8>) -> BackendResult<String> {
        self.check(Fault::Upload)?;
        if self.objects.borrow().contains_key(key) {
            return Err(BackendError::Storage(format!("The resource already exists: {key}")));
        }
        self.objects
            .borrow_mut()
            .insert(key.to_string(), payload.clone());
        self.record_write();
        Ok(format!("{}/{key}", self.base_url))
    }
}

#[async_trait(?Send)]
impl IdentityProvider for InMemoryBackend {
    async fn session_user(&self, access_token: &str) -> BackendResult<SessionUser> {
        self.check(Fault::SessionUser)?;
        self.sessions
            .borrow()
            .get(access_token)
            .cloned()
            .ok_or_else(|| BackendError::Status {
                status: 401,
                code: None,
                message: "invalid JWT".to_string(),
            })
    }
}

#[async_trait(?Send)]
impl ProfileStore for InMemoryBackend {
    async fn fetch_profile(&self, user_id: &str) -> BackendResult<UserProfile> {
        self.check(Fault::FetchProfile)?;
        self.profile(user_id).ok_or_else(BackendError::no_rows)
    }

    async fn insert_profile(&self, profile: &NewUserProfile) -> BackendResult<()> {
        self.check(Fault::InsertProfile)?;
        self.add_profile(UserProfile {
            id: profile.id.clone(),
            email: profile.email.clone(),
            nickname: profile.nickname.clone(),
            profile_img: Some(profile.profile_img.clone()),
        });
        self.record_write();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notes_are_scoped_to_their_club() {
        let backend = InMemoryBackend::new();
        let a = backend.add_club("a", None);
        let b = backend.add_club("b", None);
        backend.add_note(&a, "x", "one");
        backend.add_note(&b, "y", "two");
        backend.add_note(&a, "z", "three");
        let notes = backend.list_notes(&a).await.unwrap();
        assert_eq!(notes.len(), 2);
        assert!(notes.iter().all(|n| n.club_id == a));
        assert_eq!(notes[1].content, "three");
    }

    #[tokio::test]
    async fn missing_profile_reports_no_rows() {
        let backend = InMemoryBackend::new();
        let err = backend.fetch_profile("ghost").await.unwrap_err();
        assert!(err.is_no_rows());
    }

    #[tokio::test]
    async fn faults_fail_until_healed() {
        let backend = InMemoryBackend::new();
        backend.fail(Fault::ListClubs);
        assert!(backend.list_clubs().await.is_err());
        backend.heal(Fault::ListClubs);
        assert!(backend.list_clubs().await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_upload_key_is_rejected() {
        let backend = InMemoryBackend::with_base_url("https://cdn.test/");
        let url = backend.upload("1.jpg", &vec![1, 2]).await.unwrap();
        assert_eq!(url, "https://cdn.test/1.jpg");
        assert!(matches!(
            backend.upload("1.jpg", &vec![3]).await,
            Err(BackendError::Storage(_))
        ));
        assert_eq!(backend.write_count(), 1);
    }
}
