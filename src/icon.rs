//! Icon Rendering
//!
//! Header fill color derived from the favorites count, and the loading
//! visual applied to a product's icon while its toggle is in flight.

use crate::config::FavoritesConfig;
use crate::page::{FavoriteIcon, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFill {
    /// At least one favorite
    Active,
    Inactive,
}

impl HeaderFill {
    /// An absent count renders like zero
    pub fn for_count(count: Option<u64>) -> Self {
        match count {
            Some(n) if n > 0 => Self::Active,
            _ => Self::Inactive,
        }
    }

    pub fn color<'a>(&self, config: &'a FavoritesConfig) -> &'a str {
        match self {
            Self::Active => &config.active_fill,
            Self::Inactive => &config.inactive_fill,
        }
    }
}

/// Paint the header icon for `count`. Logs a warning when the icon is missing.
pub fn render_header_icon<P: Page + ?Sized>(page: &P, config: &FavoritesConfig, count: Option<u64>) {
    let fill = HeaderFill::for_count(count);
    if page.set_header_fill(fill.color(config)) {
        log::info!("Header favorite icon updated. Favorites count: {}", count.unwrap_or(0));
    } else {
        log::warn!("Header favorite icon not found");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVisual {
    Loading,
    Idle,
}

impl IconVisual {
    pub fn apply<I: FavoriteIcon + ?Sized>(self, icon: &I, config: &FavoritesConfig) {
        match self {
            Self::Loading => icon.set_visual(&config.loading_opacity, &config.loading_transform),
            Self::Idle => icon.set_visual("1", ""),
        }
    }
}
