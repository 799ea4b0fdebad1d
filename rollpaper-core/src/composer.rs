//! Draft and submission of a new note.

use crate::backend::NoteStore;
use crate::constants::{MSG_CLUB_DATA_MISSING, MSG_ERROR_PREFIX};
use crate::error::BackendError;
use crate::model::{Category, Club, NewNote, NoteColor};
use crate::routes::AppPath;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("nickname is required")]
    MissingNickname,
    #[error("category is required")]
    MissingCategory,
    #[error("color is required")]
    MissingColor,
    #[error("content is required")]
    MissingContent,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub nickname: String,
    pub category: String,
    pub color: String,
    pub content: String,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            nickname: String::new(),
            category: Category::default().label().to_string(),
            color: NoteColor::default().as_str().to_string(),
            content: String::new(),
        }
    }
}

impl PostDraft {
    /// Check that every field is present. Whitespace does not count.
    ///
    /// # Errors
    ///
    /// Returns the first missing field in form order.
    pub fn validate(&self) -> Result<(), ComposeError> {
        let checks = [
            (&self.nickname, ComposeError::MissingNickname),
            (&self.category, ComposeError::MissingCategory),
            (&self.color, ComposeError::MissingColor),
            (&self.content, ComposeError::MissingContent),
        ];
        for (value, err) in checks {
            if value.trim().is_empty() {
                return Err(err);
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    fn to_new_note(&self, club_id: &str) -> NewNote {
        NewNote {
            club_id: club_id.to_string(),
            nickname: self.nickname.trim().to_string(),
            category: self.category.trim().to_string(),
            color: self.color.trim().to_string(),
            content: self.content.trim().to_string(),
        }
    }
}

/// Validate and insert, then return the board to go back to.
///
/// # Errors
///
/// Validation failures return before any backend call; insert failures are
/// wrapped in [`ComposeError::Backend`].
pub async fn submit_post<S: NoteStore + ?Sized>(
    store: &S,
    club_id: &str,
    draft: &PostDraft,
) -> Result<AppPath, ComposeError> {
    draft.validate()?;
    store.insert_note(&draft.to_new_note(club_id)).await?;
    log::info!("posted note to club {club_id}");
    Ok(AppPath::ClubBoard(club_id.to_string()))
}

/// Header line for the create-post page once the club is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClubHeading {
    Title(String),
    Missing,
    Failed(String),
}

impl ClubHeading {
    #[must_use]
    pub fn from_result(result: &Result<Vec<Club>, BackendError>) -> Self {
        match result {
            Ok(clubs) => clubs
                .first()
                .map_or(Self::Missing, |club| Self::Title(club.title.clone())),
            Err(err) => Self::Failed(err.message().to_string()),
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Title(title) => format!("{title}님의 모임"),
            Self::Missing => MSG_CLUB_DATA_MISSING.to_string(),
            Self::Failed(message) => format!("{MSG_ERROR_PREFIX}: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Fault, InMemoryBackend};

    fn filled() -> PostDraft {
        PostDraft {
            nickname: "지수".into(),
            content: "졸업 축하해!".into(),
            ..PostDraft::default()
        }
    }

    #[test]
    fn defaults_are_cheer_on_white() {
        let draft = PostDraft::default();
        assert_eq!(draft.category, "응원글");
        assert_eq!(draft.color, "white");
        assert_eq!(draft.validate(), Err(ComposeError::MissingNickname));
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let mut draft = filled();
        draft.content = "  \n".into();
        assert_eq!(draft.validate(), Err(ComposeError::MissingContent));
        draft.content = "hi".into();
        draft.color = " ".into();
        assert_eq!(draft.validate(), Err(ComposeError::MissingColor));
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_backend() {
        let backend = InMemoryBackend::new();
        let club = backend.add_club("c", None);
        let draft = PostDraft::default();
        assert!(submit_post(&backend, &club, &draft).await.is_err());
        assert_eq!(backend.write_count(), 0);
    }

    #[tokio::test]
    async fn submit_inserts_and_returns_board() {
        let backend = InMemoryBackend::new();
        let club = backend.add_club("c", None);
        let path = submit_post(&backend, &club, &filled()).await.unwrap();
        assert_eq!(path, AppPath::ClubBoard(club.clone()));
        let notes = backend.notes_for(&club);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].category, "응원글");
        assert_eq!(notes[0].nickname, "지수");
    }

    #[tokio::test]
    async fn insert_failure_is_reported() {
        let backend = InMemoryBackend::new();
        backend.fail(Fault::InsertNote);
        let err = submit_post(&backend, "1", &filled()).await.unwrap_err();
        assert!(matches!(err, ComposeError::Backend(_)));
    }

    #[test]
    fn heading_covers_all_branches() {
        let club = Club {
            id: "1".into(),
            title: "민지".into(),
            thumbnail: None,
            owner_id: None,
        };
        assert_eq!(
            ClubHeading::from_result(&Ok(vec![club])).text(),
            "민지님의 모임"
        );
        assert_eq!(
            ClubHeading::from_result(&Ok(Vec::new())).text(),
            "클럽 데이터를 불러올 수 없습니다"
        );
        let failed = ClubHeading::from_result(&Err(BackendError::Network(
            "데이터를 불러올 수 없습니다".into(),
        )));
        assert_eq!(
            failed.text(),
            "에러가 발생했습니다: 데이터를 불러올 수 없습니다"
        );
    }
}
