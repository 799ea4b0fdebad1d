//! Navigation targets shared by the controllers and the web router.

use crate::model::{ClubId, NoteId};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppPath {
    Clubs,
    CreateClub,
    ClubBoard(ClubId),
    CreatePost(ClubId),
    PostDetail { club_id: ClubId, post_id: NoteId },
    Login,
    KakaoRedirect,
    SocialNickname,
}

impl AppPath {
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Clubs => "/clubs".to_string(),
            Self::CreateClub => "/clubs/create".to_string(),
            Self::ClubBoard(club_id) => format!("/clubs/{club_id}/comments"),
            Self::CreatePost(club_id) => format!("/guests/{club_id}/createPost"),
            Self::PostDetail { club_id, post_id } => {
                format!("/guests/{club_id}/postDetail/{post_id}")
            }
            Self::Login => "/auth/login".to_string(),
            Self::KakaoRedirect => "/auth/kakao-redirect".to_string(),
            Self::SocialNickname => "/auth/socialNickname".to_string(),
        }
    }

    /// Parse an absolute path produced by [`AppPath::to_path`].
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["clubs"] => Some(Self::Clubs),
            ["clubs", "create"] => Some(Self::CreateClub),
            ["clubs", club_id, "comments"] => Some(Self::ClubBoard((*club_id).to_string())),
            ["guests", club_id, "createPost"] => Some(Self::CreatePost((*club_id).to_string())),
            ["guests", club_id, "postDetail", post_id] => {
                post_id.parse().ok().map(|post_id| Self::PostDetail {
                    club_id: (*club_id).to_string(),
                    post_id,
                })
            }
            ["auth", "login"] => Some(Self::Login),
            ["auth", "kakao-redirect"] => Some(Self::KakaoRedirect),
            ["auth", "socialNickname"] => Some(Self::SocialNickname),
            _ => None,
        }
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}
