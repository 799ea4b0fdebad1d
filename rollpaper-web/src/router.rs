use rollpaper_core::{AppPath, ClubId, NoteId};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/clubs")]
    Clubs,
    #[at("/clubs/create")]
    CreateClub,
    #[at("/clubs/:club_id/comments")]
    ClubBoard { club_id: ClubId },
    #[at("/guests/:club_id/createPost")]
    CreatePost { club_id: ClubId },
    #[at("/guests/:club_id/postDetail/:post_id")]
    PostDetail { club_id: ClubId, post_id: NoteId },
    #[at("/auth/login")]
    Login,
    #[at("/auth/kakao-redirect")]
    KakaoRedirect,
    #[at("/auth/socialNickname")]
    SocialNickname,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl From<AppPath> for Route {
    fn from(path: AppPath) -> Self {
        match path {
            AppPath::Clubs => Self::Clubs,
            AppPath::CreateClub => Self::CreateClub,
            AppPath::ClubBoard(club_id) => Self::ClubBoard { club_id },
            AppPath::CreatePost(club_id) => Self::CreatePost { club_id },
            AppPath::PostDetail { club_id, post_id } => Self::PostDetail { club_id, post_id },
            AppPath::Login => Self::Login,
            AppPath::KakaoRedirect => Self::KakaoRedirect,
            AppPath::SocialNickname => Self::SocialNickname,
        }
    }
}

impl Route {
    /// The core navigation target, `None` for the root and not-found routes.
    #[must_use]
    pub fn to_app_path(&self) -> Option<AppPath> {
        match self {
            Self::Home | Self::NotFound => None,
            Self::Clubs => Some(AppPath::Clubs),
            Self::CreateClub => Some(AppPath::CreateClub),
            Self::ClubBoard { club_id } => Some(AppPath::ClubBoard(club_id.clone())),
            Self::CreatePost { club_id } => Some(AppPath::CreatePost(club_id.clone())),
            Self::PostDetail { club_id, post_id } => Some(AppPath::PostDetail {
                club_id: club_id.clone(),
                post_id: *post_id,
            }),
            Self::Login => Some(AppPath::Login),
            Self::KakaoRedirect => Some(AppPath::KakaoRedirect),
            Self::SocialNickname => Some(AppPath::SocialNickname),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_agree_with_core_paths() {
        let paths = [
            AppPath::Clubs,
            AppPath::CreateClub,
            AppPath::ClubBoard("3".into()),
            AppPath::CreatePost("3".into()),
            AppPath::PostDetail {
                club_id: "3".into(),
                post_id: 8,
            },
            AppPath::Login,
            AppPath::KakaoRedirect,
            AppPath::SocialNickname,
        ];
        for path in paths {
            let route = Route::from(path.clone());
            assert_eq!(route.to_path(), path.to_path());
            assert_eq!(Route::recognize(&path.to_path()), Some(route.clone()));
            assert_eq!(route.to_app_path(), Some(path));
        }
    }

    #[test]
    fn create_is_not_mistaken_for_a_board() {
        assert_eq!(Route::recognize("/clubs/create"), Some(Route::CreateClub));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
