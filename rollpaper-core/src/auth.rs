//! Social-login bridge: turns the provider redirect into a signed-in user or
//! an onboarding step.

use crate::backend::{IdentityProvider, ProfileStore};
use crate::config::BackendConfig;
use crate::constants::{DEFAULT_PROFILE_IMAGE_URL, MSG_NICKNAME_REQUIRED};
use crate::context::UserContext;
use crate::error::BackendError;
use crate::model::{NewUserProfile, Session, SessionUser, User};
use crate::routes::AppPath;
use thiserror::Error;

pub const SOCIAL_PROVIDER: &str = "kakao";

/// Tokens carried in the redirect URL fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u64>,
}

impl RedirectTokens {
    #[must_use]
    pub fn into_session(self, user: SessionUser) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_in: self.expires_in,
            user,
        }
    }
}

/// Parse `#access_token=..&refresh_token=..&expires_in=..&token_type=bearer`.
///
/// Returns `None` when the provider reported an error or no token is present.
#[must_use]
pub fn parse_redirect_fragment(fragment: &str) -> Option<RedirectTokens> {
    let fragment = fragment.trim_start_matches('#');
    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;
    for pair in fragment.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "error" | "error_code" => return None,
            "access_token" if !value.is_empty() => access_token = Some(value.to_string()),
            "refresh_token" if !value.is_empty() => refresh_token = Some(value.to_string()),
            "expires_in" => expires_in = value.parse().ok(),
            _ => {}
        }
    }
    Some(RedirectTokens {
        access_token: access_token?,
        refresh_token,
        expires_in,
    })
}

/// Where the sign-in button sends the browser.
#[must_use]
pub fn login_url(config: &BackendConfig, origin: &str) -> String {
    let redirect = format!(
        "{}{}",
        origin.trim_end_matches('/'),
        AppPath::KakaoRedirect.to_path()
    );
    config.authorize_url(SOCIAL_PROVIDER, &redirect)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Move on to `path`.
    Navigate(AppPath),
    /// Unexpected profile lookup failure. Already logged; the page stays put.
    Halt(BackendError),
}

/// Consume the redirect fragment and decide where the user goes next.
pub async fn resolve_redirect<B>(backend: &B, fragment: &str, ctx: &mut UserContext) -> AuthOutcome
where
    B: IdentityProvider + ProfileStore + ?Sized,
{
    let Some(tokens) = parse_redirect_fragment(fragment) else {
        log::info!("no session in redirect, back to login");
        return AuthOutcome::Navigate(AppPath::Login);
    };
    let account = match backend.session_user(&tokens.access_token).await {
        Ok(account) => account,
        Err(err) => {
            log::warn!("session lookup failed: {err}");
            return AuthOutcome::Navigate(AppPath::Login);
        }
    };
    resolve_session(backend, tokens.into_session(account), ctx).await
}

/// Look up the profile for an established session.
pub async fn resolve_session<P>(profiles: &P, session: Session, ctx: &mut UserContext) -> AuthOutcome
where
    P: ProfileStore + ?Sized,
{
    match profiles.fetch_profile(&session.user.id).await {
        Ok(profile) => {
            let user = profile.into_user(session.user.email.as_deref());
            log::info!("signed in as {}", user.nickname);
            ctx.init(session, user);
            AuthOutcome::Navigate(AppPath::Clubs)
        }
        Err(err) if err.is_no_rows() => {
            ctx.begin_onboarding(session);
            AuthOutcome::Navigate(AppPath::SocialNickname)
        }
        Err(err) => {
            log::error!("profile lookup failed: {err}");
            AuthOutcome::Halt(err)
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NicknameError {
    #[error("닉네임을 입력 해주세요.")]
    Empty,
    #[error("no pending session")]
    NoSession,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl NicknameError {
    /// Inline text shown under the nickname field.
    #[must_use]
    pub fn inline_message(&self) -> Option<&'static str> {
        matches!(self, Self::Empty).then_some(MSG_NICKNAME_REQUIRED)
    }
}

/// Provision the `Users` row for a pending session and sign the user in.
///
/// # Errors
///
/// Blank nicknames and missing sessions fail before any write; insert
/// failures come back as [`NicknameError::Backend`].
pub async fn complete_onboarding<P>(
    profiles: &P,
    ctx: &mut UserContext,
    nickname: &str,
) -> Result<AppPath, NicknameError>
where
    P: ProfileStore + ?Sized,
{
    let nickname = nickname.trim();
    if nickname.is_empty() {
        return Err(NicknameError::Empty);
    }
    let session = ctx.session().cloned().ok_or(NicknameError::NoSession)?;
    let row = NewUserProfile {
        id: session.user.id.clone(),
        email: session.user.email.clone(),
        nickname: nickname.to_string(),
        profile_img: DEFAULT_PROFILE_IMAGE_URL.to_string(),
    };
    profiles.insert_profile(&row).await?;
    let user = User {
        id: row.id,
        email: row.email.unwrap_or_default(),
        nickname: row.nickname,
        profile_img: Some(row.profile_img),
    };
    ctx.init(session, user);
    Ok(AppPath::Clubs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{Fault, InMemoryBackend};
    use crate::model::UserProfile;

    const FRAGMENT: &str =
        "#access_token=abc&refresh_token=ref&expires_in=3600&token_type=bearer";

    fn backend_with_account() -> InMemoryBackend {
        let backend = InMemoryBackend::new();
        backend.add_session(
            "abc",
            SessionUser {
                id: "u-1".into(),
                email: Some("me@kakao.test".into()),
            },
        );
        backend
    }

    #[test]
    fn fragment_parsing() {
        let tokens = parse_redirect_fragment(FRAGMENT).unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert_eq!(tokens.refresh_token.as_deref(), Some("ref"));
        assert_eq!(tokens.expires_in, Some(3600));
        assert_eq!(parse_redirect_fragment(""), None);
        assert_eq!(
            parse_redirect_fragment("#error=access_denied&access_token=x"),
            None
        );
    }

    #[test]
    fn login_url_points_back_to_redirect_page() {
        let cfg = BackendConfig::new("https://b.test", "k", None, "").unwrap();
        assert_eq!(
            login_url(&cfg, "https://app.test/"),
            "https://b.test/auth/v1/authorize?provider=kakao&redirect_to=https%3A%2F%2Fapp.test%2Fauth%2Fkakao-redirect"
        );
    }

    #[tokio::test]
    async fn missing_session_goes_to_login() {
        let backend = backend_with_account();
        let mut ctx = UserContext::new();
        assert_eq!(
            resolve_redirect(&backend, "", &mut ctx).await,
            AuthOutcome::Navigate(AppPath::Login)
        );
        assert_eq!(
            resolve_redirect(&backend, "#access_token=unknown", &mut ctx).await,
            AuthOutcome::Navigate(AppPath::Login)
        );
        assert_eq!(ctx, UserContext::default());
    }

    #[tokio::test]
    async fn known_profile_signs_in() {
        let backend = backend_with_account();
        backend.add_profile(UserProfile {
            id: "u-1".into(),
            email: None,
            nickname: "하늘".into(),
            profile_img: None,
        });
        let mut ctx = UserContext::new();
        let outcome = resolve_redirect(&backend, FRAGMENT, &mut ctx).await;
        assert_eq!(outcome, AuthOutcome::Navigate(AppPath::Clubs));
        let user = ctx.user().unwrap();
        assert_eq!(user.nickname, "하늘");
        assert_eq!(user.email, "me@kakao.test");
    }

    #[tokio::test]
    async fn no_rows_routes_to_onboarding_then_clubs() {
        let backend = backend_with_account();
        let mut ctx = UserContext::new();
        let outcome = resolve_redirect(&backend, FRAGMENT, &mut ctx).await;
        assert_eq!(outcome, AuthOutcome::Navigate(AppPath::SocialNickname));
        assert!(ctx.needs_onboarding());

        let err = complete_onboarding(&backend, &mut ctx, " ").await.unwrap_err();
        assert_eq!(err.inline_message(), Some("닉네임을 입력 해주세요."));
        assert_eq!(backend.write_count(), 0);

        let path = complete_onboarding(&backend, &mut ctx, "바다").await.unwrap();
        assert_eq!(path, AppPath::Clubs);
        assert!(ctx.is_signed_in());
        let row = backend.profile("u-1").unwrap();
        assert_eq!(row.nickname, "바다");
        assert_eq!(row.profile_img.as_deref(), Some(DEFAULT_PROFILE_IMAGE_URL));
    }

    #[tokio::test]
    async fn other_profile_errors_halt() {
        let backend = backend_with_account();
        backend.fail(Fault::FetchProfile);
        let mut ctx = UserContext::new();
        let outcome = resolve_redirect(&backend, FRAGMENT, &mut ctx).await;
        assert!(matches!(outcome, AuthOutcome::Halt(BackendError::Network(_))));
        assert!(!ctx.is_signed_in());
    }

    #[tokio::test]
    async fn onboarding_without_session_is_rejected() {
        let backend = InMemoryBackend::new();
        let mut ctx = UserContext::new();
        assert_eq!(
            complete_onboarding(&backend, &mut ctx, "x").await,
            Err(NicknameError::NoSession)
        );
    }
}
