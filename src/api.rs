//! Favorites API
//!
//! Client interface to the shop's favorites endpoints.

use async_trait::async_trait;

use crate::config::FavoritesConfig;
use crate::error::{FavoritesError, FavoritesResult};
use crate::models::{FavoriteForm, FavoritesCount, ToggleResponse};

#[async_trait(?Send)]
pub trait FavoritesApi {
    /// `GET` the favorites count
    async fn favorites_count(&self) -> FavoritesResult<FavoritesCount>;

    /// `POST` a toggle for the form's product, CSRF token in a header
    async fn toggle_favorite(&self, form: &FavoriteForm) -> FavoritesResult<ToggleResponse>;
}

/// Classify a fetch response before its body is read.
///
/// Anonymous visitors are redirected to the login page, which answers 200,
/// so the redirect is checked before the status.
pub fn check_response(config: &FavoritesConfig, status: u16, redirected: bool, url: &str) -> FavoritesResult<()> {
    if redirected && config.is_login_url(url) {
        return Err(FavoritesError::NotAuthenticated);
    }
    if !(200..300).contains(&status) {
        return Err(FavoritesError::Status(status));
    }
    Ok(())
}

/// Fetch the favorites count, falling back to 0 on any failure.
pub async fn fetch_favorites_count<A: FavoritesApi + ?Sized>(api: &A) -> u64 {
    match api.favorites_count().await {
        Ok(body) => body.count(),
        Err(e) => {
            log::error!("Error fetching favorites count: {}", e);
            0
        }
    }
}
