//! The current user, owned by the app root.

use crate::model::{Session, User};
use serde::{Deserialize, Serialize};

/// Who is signed in.
///
/// `session` is set as soon as the redirect is consumed; `user` only once the
/// profile row exists. A session without a user means onboarding is pending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserContext {
    session: Option<Session>,
    user: Option<User>,
}

impl UserContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session restored or login completed.
    pub fn init(&mut self, session: Session, user: User) {
        self.session = Some(session);
        self.user = Some(user);
    }

    /// Remember a session whose profile has not been provisioned yet.
    pub fn begin_onboarding(&mut self, session: Session) {
        self.session = Some(session);
        self.user = None;
    }

    /// Logout.
    pub fn teardown(&mut self) {
        self.session = None;
        self.user = None;
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn needs_onboarding(&self) -> bool {
        self.session.is_some() && self.user.is_none()
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SessionUser;

    fn session() -> Session {
        Session {
            access_token: "tok".into(),
            refresh_token: None,
            expires_in: Some(3600),
            user: SessionUser {
                id: "u1".into(),
                email: Some("a@b.c".into()),
            },
        }
    }

    #[test]
    fn lifecycle_init_onboarding_teardown() {
        let mut ctx = UserContext::new();
        assert!(!ctx.is_signed_in());
        ctx.begin_onboarding(session());
        assert!(ctx.needs_onboarding());
        assert_eq!(ctx.access_token(), Some("tok"));
        ctx.init(
            session(),
            User {
                id: "u1".into(),
                email: "a@b.c".into(),
                nickname: "민수".into(),
                profile_img: None,
            },
        );
        assert!(ctx.is_signed_in());
        assert!(!ctx.needs_onboarding());
        ctx.teardown();
        assert_eq!(ctx, UserContext::default());
    }

    #[test]
    fn persists_through_json() {
        let mut ctx = UserContext::new();
        ctx.begin_onboarding(session());
        let json = serde_json::to_string(&ctx).unwrap();
        let back: UserContext = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ctx);
    }
}
