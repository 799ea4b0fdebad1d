//! Helpers for URLs that respect the deployment base path.
///
/// When `ROLLPAPER_PUBLIC_URL` is set at compile time (e.g. `/paper` when
/// hosted under a subdirectory), generated URLs are prefixed accordingly.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// Base path for the router, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

/// Origin plus base path, used as the social login return address.
#[must_use]
pub fn app_origin(origin: &str) -> String {
    format!(
        "{}{}",
        origin.trim_end_matches('/'),
        router_base().unwrap_or_default()
    )
}

fn public_url() -> &'static str {
    option_env!("ROLLPAPER_PUBLIC_URL").unwrap_or("")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
