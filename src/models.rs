//! Favorites Models
//!
//! Wire shapes of the shop's favorites endpoints and the data read off a
//! product card's form.

use serde::{Deserialize, Serialize};

/// Body of `GET /shop/api/favorites/count/`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FavoritesCount {
    #[serde(default)]
    pub favorites_count: Option<u64>,
}

impl FavoritesCount {
    /// Count with a missing or null field read as zero
    pub fn count(&self) -> u64 {
        self.favorites_count.unwrap_or(0)
    }
}

/// Body of `POST /shop/favorite/{slug}/`
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ToggleResponse {
    #[serde(default)]
    pub is_favorited: bool,
}

/// Request body of the toggle endpoint, always `{}`
#[derive(Debug, Serialize)]
pub struct EmptyBody {}

/// What a submit handler reads from a `.favorite-form`
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteForm {
    pub product_slug: String,
    pub csrf_token: String,
}
