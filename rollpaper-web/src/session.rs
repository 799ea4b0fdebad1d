//! App-wide state shared through context: the signed-in user and the club
//! list cache. The user survives reloads through `localStorage`.

use crate::api::SupabaseClient;
use rollpaper_core::{BackendConfig, ClubListCache, ConfigError, UserContext};
use yew::prelude::*;

pub const USER_STORAGE_KEY: &str = "rollpaper.user";

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub user: UseStateHandle<UserContext>,
    pub clubs: UseStateHandle<ClubListCache>,
}

impl SessionContext {
    /// Replace the user context and persist it.
    pub fn set_user(&self, ctx: UserContext) {
        save_user_context(&ctx);
        self.user.set(ctx);
    }

    pub fn logout(&self) {
        let mut ctx = (*self.user).clone();
        ctx.teardown();
        self.set_user(ctx);
    }

    pub fn set_clubs(&self, cache: ClubListCache) {
        self.clubs.set(cache);
    }

    /// Client acting as the current user, or anonymously when signed out.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend settings baked into the build are
    /// missing or invalid.
    pub fn client(&self) -> Result<SupabaseClient, ConfigError> {
        let config = BackendConfig::from_build_env()?;
        Ok(SupabaseClient::new(config).with_access_token(self.user.access_token()))
    }
}

#[hook]
pub fn use_session_state() -> SessionContext {
    SessionContext {
        user: use_state(load_user_context),
        clubs: use_state(ClubListCache::new),
    }
}

/// The session provided by [`SessionProvider`].
///
/// # Panics
/// Panics when used outside a [`SessionProvider`].
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider should wrap the app")
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_session_state();
    html! {
        <ContextProvider<SessionContext> context={session}>
            { for props.children.iter() }
        </ContextProvider<SessionContext>>
    }
}

#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn load_user_context() -> UserContext {
    use gloo::storage::{LocalStorage, Storage};
    LocalStorage::get(USER_STORAGE_KEY).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn load_user_context() -> UserContext {
    UserContext::default()
}

#[cfg(target_arch = "wasm32")]
pub fn save_user_context(ctx: &UserContext) {
    use gloo::storage::{LocalStorage, Storage};
    if *ctx == UserContext::default() {
        LocalStorage::delete(USER_STORAGE_KEY);
        return;
    }
    if let Err(err) = LocalStorage::set(USER_STORAGE_KEY, ctx) {
        log::warn!("could not persist user: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_user_context(_ctx: &UserContext) {}
