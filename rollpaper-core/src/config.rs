//! Backend endpoint configuration and the URL shapes built from it.

use crate::constants::STORAGE_BUCKET;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("backend url is empty")]
    MissingUrl,
    #[error("backend url must start with http:// or https:// (got {0})")]
    InvalidScheme(String),
    #[error("backend anon key is empty")]
    MissingKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    #[serde(default = "BackendConfig::default_bucket")]
    pub bucket: String,
    /// Prefix for the app's own JSON routes (`/api/...`), usually empty.
    #[serde(default)]
    pub api_base: String,
}

impl BackendConfig {
    fn default_bucket() -> String {
        STORAGE_BUCKET.to_string()
    }

    /// Validate and normalise a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the url is empty or not http(s), or the key is empty.
    pub fn new(
        url: &str,
        anon_key: &str,
        bucket: Option<&str>,
        api_base: &str,
    ) -> Result<Self, ConfigError> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidScheme(url.to_string()));
        }
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(ConfigError::MissingKey);
        }
        Ok(Self {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
            bucket: bucket
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map_or_else(Self::default_bucket, ToString::to_string),
            api_base: api_base.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Read the configuration baked in at compile time.
    ///
    /// # Errors
    ///
    /// Propagates validation failures from [`BackendConfig::new`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("ROLLPAPER_BACKEND_URL").unwrap_or(""),
            option_env!("ROLLPAPER_BACKEND_ANON_KEY").unwrap_or(""),
            option_env!("ROLLPAPER_BACKEND_BUCKET"),
            option_env!("ROLLPAPER_API_BASE").unwrap_or(""),
        )
    }

    #[must_use]
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }

    /// Single-row filter on one column, as used by `select().eq().single()`.
    #[must_use]
    pub fn select_eq_url(&self, table: &str, column: &str, value: &str) -> String {
        format!(
            "{}?select=*&{column}=eq.{}",
            self.table_url(table),
            urlencoding::encode(value)
        )
    }

    #[must_use]
    pub fn upload_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{key}", self.url, self.bucket)
    }

    #[must_use]
    pub fn public_object_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{key}", self.url, self.bucket)
    }

    #[must_use]
    pub fn auth_user_url(&self) -> String {
        format!("{}/auth/v1/user", self.url)
    }

    #[must_use]
    pub fn authorize_url(&self, provider: &str, redirect_to: &str) -> String {
        format!(
            "{}/auth/v1/authorize?provider={provider}&redirect_to={}",
            self.url,
            urlencoding::encode(redirect_to)
        )
    }

    #[must_use]
    pub fn guests_url(&self, club_id: &str) -> String {
        format!(
            "{}/api/guests/{}",
            self.api_base,
            urlencoding::encode(club_id)
        )
    }

    #[must_use]
    pub fn comments_url(&self, club_id: &str) -> String {
        format!(
            "{}/api/clubs/{}/comments",
            self.api_base,
            urlencoding::encode(club_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BackendConfig {
        BackendConfig::new("https://demo.supabase.co/", "anon", None, "").unwrap()
    }

    #[test]
    fn rejects_missing_or_invalid_values() {
        assert_eq!(
            BackendConfig::new(" ", "k", None, ""),
            Err(ConfigError::MissingUrl)
        );
        assert!(matches!(
            BackendConfig::new("ftp://x", "k", None, ""),
            Err(ConfigError::InvalidScheme(_))
        ));
        assert_eq!(
            BackendConfig::new("https://x", "", None, ""),
            Err(ConfigError::MissingKey)
        );
    }

    #[test]
    fn builds_rest_and_storage_urls() {
        let cfg = config();
        assert_eq!(cfg.bucket, STORAGE_BUCKET);
        assert_eq!(
            cfg.select_eq_url("Users", "id", "abc-1"),
            "https://demo.supabase.co/rest/v1/Users?select=*&id=eq.abc-1"
        );
        assert_eq!(
            cfg.upload_url("1700000000000.jpg"),
            "https://demo.supabase.co/storage/v1/object/DeepeningProject/1700000000000.jpg"
        );
        assert_eq!(
            cfg.public_object_url("a.jpg"),
            "https://demo.supabase.co/storage/v1/object/public/DeepeningProject/a.jpg"
        );
    }

    #[test]
    fn api_routes_respect_base_prefix() {
        let cfg = BackendConfig::new("https://x", "k", Some("bucket"), "/app/").unwrap();
        assert_eq!(cfg.bucket, "bucket");
        assert_eq!(cfg.guests_url("3"), "/app/api/guests/3");
        assert_eq!(cfg.comments_url("3"), "/app/api/clubs/3/comments");
        assert_eq!(config().comments_url("3"), "/api/clubs/3/comments");
    }

    #[test]
    fn authorize_url_encodes_redirect() {
        let url = config().authorize_url("kakao", "https://app.test/auth/kakao-redirect");
        assert_eq!(
            url,
            "https://demo.supabase.co/auth/v1/authorize?provider=kakao&redirect_to=https%3A%2F%2Fapp.test%2Fauth%2Fkakao-redirect"
        );
    }

    #[test]
    fn ids_are_percent_encoded_in_paths_and_filters() {
        let cfg = config();
        assert_eq!(cfg.guests_url("a b"), "/api/guests/a%20b");
        assert_eq!(cfg.comments_url("모"), "/api/clubs/%EB%AA%A8/comments");
        assert_eq!(
            cfg.select_eq_url("Clubs", "id", "x&y=z"),
            "https://demo.supabase.co/rest/v1/Clubs?select=*&id=eq.x%26y%3Dz"
        );
        assert_eq!(cfg.guests_url("a-b_c.d~e"), "/api/guests/a-b_c.d~e");
    }
}
