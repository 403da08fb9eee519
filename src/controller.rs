//! Favorites Controller
//!
//! Owns one page's favorites behavior: painting the header icon from the
//! server count and running a product's toggle from submit to settle.
//!
//! A toggle moves its icon idle → loading → settled. The header refresh after
//! a successful toggle runs independently of the reload and reset. Nothing stops a second
//! submit while the first is in flight; overlapping toggles settle in the
//! order their responses arrive.

use crate::api::{fetch_favorites_count, FavoritesApi};
use crate::config::FavoritesConfig;
use crate::error::FavoritesError;
use crate::icon::{render_header_icon, IconVisual};
use crate::models::FavoriteForm;
use crate::page::{FavoriteIcon, Page};

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Settled {
        favorited: bool,
        /// The favorites page was reloaded
        reloaded: bool,
    },
    Failed(FavoritesError),
}

pub struct FavoritesController<A, P> {
    api: A,
    page: P,
    config: FavoritesConfig,
}

impl<A: FavoritesApi, P: Page> FavoritesController<A, P> {
    pub fn new(api: A, page: P, config: FavoritesConfig) -> Self {
        Self { api, page, config }
    }

    pub fn config(&self) -> &FavoritesConfig {
        &self.config
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Fetch the count and repaint the header icon. Never fails.
    pub async fn refresh_header(&self) -> u64 {
        let count = fetch_favorites_count(&self.api).await;
        render_header_icon(&self.page, &self.config, Some(count));
        count
    }

    /// Run one toggle for `form`, updating `icon` and the header.
    pub async fn toggle<I: FavoriteIcon + ?Sized>(&self, form: &FavoriteForm, icon: &I) -> ToggleOutcome {
        IconVisual::Loading.apply(icon, &self.config);

        let response = match self.api.toggle_favorite(form).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Error toggling favorite {}: {}", form.product_slug, e);
                IconVisual::Idle.apply(icon, &self.config);
                self.page.alert(&self.config.error_message);
                return ToggleOutcome::Failed(e);
            }
        };

        log::debug!("Toggle response for {}: {:?}", form.product_slug, response);
        icon.set_class(&self.config.favorited_class, response.is_favorited);

        // The header refresh runs alongside the settle path: a slow count
        // endpoint must not hold the reload or the reset.
        let settle = async {
            // The favorites list is server-rendered; a reload drops the removed card
            let reloaded = self.config.is_favorites_page(&self.page.pathname());
            if reloaded {
                self.page.reload();
            }
            self.page.sleep(self.config.reset_delay_ms).await;
            IconVisual::Idle.apply(icon, &self.config);
            reloaded
        };
        let (reloaded, _) = futures::join!(settle, self.refresh_header());

        ToggleOutcome::Settled {
            favorited: response.is_favorited,
            reloaded,
        }
    }
}
