//! Club creation, the cached club list and client-side pagination.

use crate::backend::{ClubStore, ObjectStore};
use crate::constants::{
    CLUBS_PER_PAGE, DEFAULT_CLUB_IMAGE_URL, MSG_CLUB_CREATE_FAILED, MSG_CLUB_CREATED,
    MSG_CLUB_TITLE_REQUIRED, MSG_NOTICE_TITLE, THUMBNAIL_EXTENSION,
};
use crate::error::BackendError;
use crate::model::{Club, NewClub};
use crate::routes::AppPath;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ClubFormError {
    #[error("모임명을 입력 해주세요.")]
    EmptyTitle,
}

impl ClubFormError {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyTitle => MSG_CLUB_TITLE_REQUIRED,
        }
    }
}

/// Outcome dialog shown after a create attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    /// Where the confirm button goes.
    pub confirm: AppPath,
}

impl Notice {
    #[must_use]
    pub fn club_created() -> Self {
        Self {
            title: MSG_NOTICE_TITLE.to_string(),
            message: MSG_CLUB_CREATED.to_string(),
            confirm: AppPath::Clubs,
        }
    }

    #[must_use]
    pub fn club_failed() -> Self {
        Self {
            title: MSG_NOTICE_TITLE.to_string(),
            message: MSG_CLUB_CREATE_FAILED.to_string(),
            confirm: AppPath::CreateClub,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.confirm == AppPath::Clubs
    }
}

/// Storage key for a thumbnail uploaded at `now_ms`.
#[must_use]
pub fn thumbnail_key(now_ms: u64) -> String {
    format!("{now_ms}.{THUMBNAIL_EXTENSION}")
}

/// Create a club, uploading `thumbnail` first when one was picked.
///
/// The club list cache is invalidated whatever the backend answered.
///
/// # Errors
///
/// Returns [`ClubFormError::EmptyTitle`] without touching the backend when the
/// title is blank. Backend failures are not errors here; they come back as
/// the failure [`Notice`].
pub async fn create_club<B>(
    backend: &B,
    cache: &mut ClubListCache,
    owner_id: Option<&str>,
    title: &str,
    thumbnail: Option<&B::Payload>,
    now_ms: u64,
) -> Result<Notice, ClubFormError>
where
    B: ClubStore + ObjectStore + ?Sized,
{
    let title = title.trim();
    if title.is_empty() {
        return Err(ClubFormError::EmptyTitle);
    }

    let notice = match upload_and_insert(backend, owner_id, title, thumbnail, now_ms).await {
        Ok(()) => Notice::club_created(),
        Err(err) => {
            log::warn!("club creation failed: {err}");
            Notice::club_failed()
        }
    };
    cache.invalidate();
    Ok(notice)
}

async fn upload_and_insert<B>(
    backend: &B,
    owner_id: Option<&str>,
    title: &str,
    thumbnail: Option<&B::Payload>,
    now_ms: u64,
) -> Result<(), BackendError>
where
    B: ClubStore + ObjectStore + ?Sized,
{
    let thumbnail = match thumbnail {
        Some(payload) => backend.upload(&thumbnail_key(now_ms), payload).await?,
        None => DEFAULT_CLUB_IMAGE_URL.to_string(),
    };
    backend
        .insert_club(&NewClub {
            title: title.to_string(),
            thumbnail,
            owner_id: owner_id.map(str::to_string),
        })
        .await
}

/// Generation-stamped copy of the club list.
///
/// A stored list is served only while its generation matches; invalidation
/// bumps the generation so the next read refetches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClubListCache {
    generation: u64,
    entry: Option<(u64, Vec<Club>)>,
}

impl ClubListCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn get(&self) -> Option<&[Club]> {
        match &self.entry {
            Some((generation, clubs)) if *generation == self.generation => Some(clubs),
            _ => None,
        }
    }

    /// Store a list fetched while the cache was at `generation`.
    pub fn store(&mut self, generation: u64, clubs: Vec<Club>) {
        if generation == self.generation {
            self.entry = Some((generation, clubs));
        }
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.entry = None;
    }
}

/// Load through the cache.
///
/// # Errors
///
/// Propagates the backend failure when the cache is cold.
pub async fn load_clubs<S: ClubStore + ?Sized>(
    store: &S,
    cache: &mut ClubListCache,
) -> Result<Vec<Club>, BackendError> {
    if let Some(clubs) = cache.get() {
        return Ok(clubs.to_vec());
    }
    let generation = cache.generation();
    let clubs = store.list_clubs().await?;
    cache.store(generation, clubs.clone());
    Ok(clubs)
}

#[must_use]
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Zero-based page of `items`; out-of-range pages are empty.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[must_use]
pub fn club_page(clubs: &[Club], page: usize) -> &[Club] {
    page_slice(clubs, page, CLUBS_PER_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Fault, InMemoryBackend};

    #[tokio::test]
    async fn blank_title_never_writes() {
        let backend = InMemoryBackend::new();
        let mut cache = ClubListCache::new();
        let err = create_club(&backend, &mut cache, None, "   ", Some(&vec![1]), 5)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "모임명을 입력 해주세요.");
        assert_eq!(err.to_string(), "모임명을 입력 해주세요.");
        assert_eq!(backend.write_count(), 0);
        assert_eq!(cache.generation(), 0);
    }

    #[tokio::test]
    async fn without_file_uses_default_image() {
        let backend = InMemoryBackend::new();
        let mut cache = ClubListCache::new();
        let notice = create_club(&backend, &mut cache, Some("u1"), "졸업식", None, 1)
            .await
            .unwrap();
        assert_eq!(notice, Notice::club_created());
        assert_eq!(notice.title, "알림");
        let clubs = backend.clubs();
        assert_eq!(clubs[0].thumbnail.as_deref(), Some(DEFAULT_CLUB_IMAGE_URL));
        assert_eq!(clubs[0].owner_id.as_deref(), Some("u1"));
        assert!(backend.object_keys().is_empty());
    }

    #[tokio::test]
    async fn upload_key_is_millis_jpg_and_url_becomes_thumbnail() {
        let backend = InMemoryBackend::with_base_url("https://cdn.test");
        let mut cache = ClubListCache::new();
        create_club(&backend, &mut cache, None, "t", Some(&vec![9]), 1_700_000_000_123)
            .await
            .unwrap();
        assert_eq!(backend.object_keys(), vec!["1700000000123.jpg".to_string()]);
        assert_eq!(
            backend.clubs()[0].thumbnail.as_deref(),
            Some("https://cdn.test/1700000000123.jpg")
        );
    }

    #[tokio::test]
    async fn failed_insert_shows_failure_and_still_invalidates() {
        let backend = InMemoryBackend::new();
        backend.fail(Fault::InsertClub);
        let mut cache = ClubListCache::new();
        cache.store(0, Vec::new());
        let notice = create_club(&backend, &mut cache, None, "t", None, 1)
            .await
            .unwrap();
        assert_eq!(notice.message, "모임 등록에 실패하였습니다.");
        assert_eq!(notice.confirm, AppPath::CreateClub);
        assert!(!notice.is_success());
        assert!(cache.get().is_none());
    }

    #[tokio::test]
    async fn failed_upload_skips_insert() {
        let backend = InMemoryBackend::new();
        backend.fail(Fault::Upload);
        let mut cache = ClubListCache::new();
        let notice = create_club(&backend, &mut cache, None, "t", Some(&vec![1]), 1)
            .await
            .unwrap();
        assert_eq!(notice, Notice::club_failed());
        assert!(backend.clubs().is_empty());
    }

    #[tokio::test]
    async fn cache_serves_until_invalidated() {
        let backend = InMemoryBackend::new();
        backend.add_club("a", None);
        let mut cache = ClubListCache::new();
        assert_eq!(load_clubs(&backend, &mut cache).await.unwrap().len(), 1);
        backend.add_club("b", None);
        assert_eq!(load_clubs(&backend, &mut cache).await.unwrap().len(), 1);
        cache.invalidate();
        assert_eq!(load_clubs(&backend, &mut cache).await.unwrap().len(), 2);
    }

    #[test]
    fn late_store_for_old_generation_is_dropped() {
        let mut cache = ClubListCache::new();
        cache.invalidate();
        cache.store(0, Vec::new());
        assert!(cache.get().is_none());
    }

    #[test]
    fn pagination_splits_by_six() {
        let items: Vec<u32> = (0..14).collect();
        assert_eq!(page_count(items.len(), CLUBS_PER_PAGE), 3);
        assert_eq!(page_slice(&items, 1, CLUBS_PER_PAGE), &[6, 7, 8, 9, 10, 11]);
        assert_eq!(page_slice(&items, 2, CLUBS_PER_PAGE), &[12, 13]);
        assert!(page_slice(&items, 9, CLUBS_PER_PAGE).is_empty());
        assert_eq!(page_count(0, CLUBS_PER_PAGE), 0);
    }
}
