//! HTTP client for the hosted backend and the app's own `/api` routes.
//!
//! Table reads and inserts follow PostgREST conventions, uploads go to the
//! storage API and the session user comes from the auth API. Every request
//! carries the `apikey` and `Authorization` headers.

use rollpaper_core::constants::MSG_GUEST_FETCH_FAILED;
use rollpaper_core::{BackendConfig, BackendError};

/// `Accept` value that makes PostgREST return one object instead of an array.
pub const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseClient {
    config: BackendConfig,
    access_token: Option<String>,
}

impl SupabaseClient {
    #[must_use]
    pub const fn new(config: BackendConfig) -> Self {
        Self {
            config,
            access_token: None,
        }
    }

    /// Act as the signed-in user instead of the anonymous role.
    #[must_use]
    pub fn with_access_token(mut self, token: Option<&str>) -> Self {
        self.access_token = token.map(str::to_string);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Header pairs sent with every request.
    #[must_use]
    pub fn auth_headers(&self) -> [(&'static str, String); 2] {
        let bearer = self
            .access_token
            .as_deref()
            .unwrap_or(&self.config.anon_key);
        [
            ("apikey", self.config.anon_key.clone()),
            ("Authorization", format!("Bearer {bearer}")),
        ]
    }
}

/// Map a non-2xx answer to a [`BackendError`].
///
/// PostgREST, storage and auth each shape their error bodies differently;
/// this picks out a code and a message from whichever fields are present.
#[must_use]
pub fn status_error(status: u16, body: &str) -> BackendError {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let field = |names: &[&str]| {
        parsed.as_ref().and_then(|value| {
            names
                .iter()
                .find_map(|name| value.get(*name).and_then(serde_json::Value::as_str))
                .map(str::to_string)
        })
    };
    let code = field(&["code", "error_code"]);
    let message = field(&["message", "msg", "error_description", "error"])
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| format!("request failed with status {status}"));
    BackendError::Status {
        status,
        code,
        message,
    }
}

/// Failure of the guest payload route, shown verbatim on the create-post page.
#[must_use]
pub fn guest_fetch_error(status: u16) -> BackendError {
    BackendError::Status {
        status,
        code: None,
        message: MSG_GUEST_FETCH_FAILED.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
mod http {
    use super::{SINGLE_OBJECT, SupabaseClient, guest_fetch_error, status_error};
    use async_trait::async_trait;
    use gloo::net::http::{Request, RequestBuilder, Response};
    use rollpaper_core::constants::{TABLE_CLUBS, TABLE_USERS};
    use rollpaper_core::{
        BackendError, BackendResult, Club, ClubStore, IdentityProvider, NewClub, NewNote,
        NewUserProfile, Note, NoteStore, ObjectStore, ProfileStore, SessionUser, UserProfile,
    };
    use serde::de::DeserializeOwned;

    impl SupabaseClient {
        fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
            self.auth_headers()
                .iter()
                .fold(builder, |builder, (name, value)| builder.header(name, value))
        }

        async fn insert<T: serde::Serialize>(&self, url: &str, row: &T) -> BackendResult<()> {
            let request = self
                .authorized(Request::post(url))
                .header("Prefer", "return=minimal")
                .json(row)
                .map_err(|e| BackendError::Decode(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;
            expect_ok(response).await.map(|_| ())
        }

        async fn get_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> BackendResult<T> {
            let response = self
                .authorized(builder)
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;
            read_json(expect_ok(response).await?).await
        }
    }

    async fn expect_ok(response: Response) -> BackendResult<Response> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
        response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    #[async_trait(?Send)]
    impl ClubStore for SupabaseClient {
        async fn list_clubs(&self) -> BackendResult<Vec<Club>> {
            let url = format!("{}?select=*", self.config().table_url(TABLE_CLUBS));
            self.get_json(Request::get(&url)).await
        }

        async fn fetch_club(&self, club_id: &str) -> BackendResult<Club> {
            let url = self.config().select_eq_url(TABLE_CLUBS, "id", club_id);
            self.get_json(Request::get(&url).header("Accept", SINGLE_OBJECT))
                .await
        }

        async fn fetch_guests(&self, club_id: &str) -> BackendResult<Vec<Club>> {
            let url = self.config().guests_url(club_id);
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;
            if !response.ok() {
                return Err(guest_fetch_error(response.status()));
            }
            read_json(response).await
        }

        async fn insert_club(&self, club: &NewClub) -> BackendResult<()> {
            self.insert(&self.config().table_url(TABLE_CLUBS), club).await
        }
    }

    #[async_trait(?Send)]
    impl NoteStore for SupabaseClient {
        async fn list_notes(&self, club_id: &str) -> BackendResult<Vec<Note>> {
            let url = self.config().comments_url(club_id);
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;
            read_json(expect_ok(response).await?).await
        }

        async fn insert_note(&self, note: &NewNote) -> BackendResult<()> {
            let url = self.config().comments_url(&note.club_id);
            let response = Request::post(&url)
                .json(note)
                .map_err(|e| BackendError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;
            expect_ok(response).await.map(|_| ())
        }
    }

    #[async_trait(?Send)]
    impl ObjectStore for SupabaseClient {
        type Payload = web_sys::File;

        async fn upload(&self, key: &str, payload: &web_sys::File) -> BackendResult<String> {
            let content_type = payload.type_();
            let request = self
                .authorized(Request::post(&self.config().upload_url(key)))
                .header(
                    "Content-Type",
                    if content_type.is_empty() {
                        "application/octet-stream"
                    } else {
                        content_type.as_str()
                    },
                )
                .body(payload.clone())
                .map_err(|e| BackendError::Storage(e.to_string()))?;
            let response = request
                .send()
                .await
                .map_err(|e| BackendError::Network(e.to_string()))?;
            expect_ok(response).await.map_err(|err| match err {
                BackendError::Status { message, .. } => BackendError::Storage(message),
                other => other,
            })?;
            Ok(self.config().public_object_url(key))
        }
    }

    #[async_trait(?Send)]
    impl IdentityProvider for SupabaseClient {
        async fn session_user(&self, access_token: &str) -> BackendResult<SessionUser> {
            let scoped = self.clone().with_access_token(Some(access_token));
            scoped
                .get_json(Request::get(&scoped.config().auth_user_url()))
                .await
        }
    }

    #[async_trait(?Send)]
    impl ProfileStore for SupabaseClient {
        async fn fetch_profile(&self, user_id: &str) -> BackendResult<UserProfile> {
            let url = self.config().select_eq_url(TABLE_USERS, "id", user_id);
            self.get_json(Request::get(&url).header("Accept", SINGLE_OBJECT))
                .await
        }

        async fn insert_profile(&self, profile: &NewUserProfile) -> BackendResult<()> {
            self.insert(&self.config().table_url(TABLE_USERS), profile)
                .await
        }
    }
}
