//! Favorites Configuration
//!
//! Endpoints, selectors and cosmetic constants used by the controller.
//! Every field has a default matching the shop templates, so a page only
//! needs to embed the values it wants to change.

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Deserialize;
use url::Url;

use crate::error::{FavoritesError, FavoritesResult};

/// Characters escaped when a slug is placed in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Id of the optional `<script type="application/json">` override block
pub const CONFIG_ELEMENT_ID: &str = "favorites-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    pub count_url: String,
    /// Toggle URL is `{toggle_url_prefix}{slug}/`
    pub toggle_url_prefix: String,
    pub favorites_page_path: String,
    /// Where the shop sends anonymous visitors
    pub login_path: String,

    pub form_selector: String,
    pub icon_selector: String,
    pub slug_attribute: String,
    pub csrf_field_name: String,
    pub csrf_header: String,
    pub header_icon_selector: String,
    pub favorited_class: String,

    pub active_fill: String,
    pub inactive_fill: String,
    pub loading_opacity: String,
    pub loading_transform: String,
    pub reset_delay_ms: u32,

    pub error_message: String,
    pub log_level: String,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            count_url: "/shop/api/favorites/count/".to_string(),
            toggle_url_prefix: "/shop/favorite/".to_string(),
            favorites_page_path: "/shop/favorites/".to_string(),
            login_path: "/accounts/login/".to_string(),
            form_selector: ".favorite-form".to_string(),
            icon_selector: ".favorite-icon".to_string(),
            slug_attribute: "data-product-slug".to_string(),
            csrf_field_name: "csrfmiddlewaretoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            header_icon_selector: ".u-header-icons .u-favorite-icon .u-svg-content path"
                .to_string(),
            favorited_class: "favorited".to_string(),
            active_fill: "#ff4444".to_string(),
            inactive_fill: "#d47a17".to_string(),
            loading_opacity: "0.7".to_string(),
            loading_transform: "scale(0.9)".to_string(),
            reset_delay_ms: 300,
            error_message: "Ошибка при обновлении избранного. Пожалуйста, попробуйте позже."
                .to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FavoritesConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> FavoritesResult<Self> {
        serde_json::from_str(json).map_err(|e| FavoritesError::Config(e.to_string()))
    }

    /// URL of the toggle endpoint for one product
    pub fn toggle_url(&self, product_slug: &str) -> String {
        format!(
            "{}{}/",
            self.toggle_url_prefix,
            utf8_percent_encode(product_slug, PATH_SEGMENT)
        )
    }

    /// Selector for the hidden CSRF input inside a favorite form
    pub fn csrf_selector(&self) -> String {
        format!("[name={}]", self.csrf_field_name)
    }

    pub fn is_favorites_page(&self, pathname: &str) -> bool {
        pathname == self.favorites_page_path
    }

    /// Whether a redirected response URL points at the login page
    pub fn is_login_url(&self, url: &str) -> bool {
        Url::parse(url)
            .map(|parsed| parsed.path().starts_with(&self.login_path))
            .unwrap_or(false)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
