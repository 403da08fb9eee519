//! Page Seam
//!
//! What the favorites controller needs from the page it runs on. The
//! browser implementation lives in `crate::browser`; tests use in-memory
//! fakes.

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Page {
    /// Set the header icon's fill color.
    ///
    /// Returns `false` when the header icon is not on the page.
    fn set_header_fill(&self, color: &str) -> bool;

    /// Path of the current location, e.g. `/shop/favorites/`
    fn pathname(&self) -> String;

    /// Full reload of the current location
    fn reload(&self);

    /// Blocking user-facing message
    fn alert(&self, message: &str);

    async fn sleep(&self, millis: u32);
}

/// The `.favorite-icon` inside one product card's form
pub trait FavoriteIcon {
    /// Add `class` when `present`, remove it otherwise
    fn set_class(&self, class: &str, present: bool);

    /// Set inline `opacity` and `transform`; an empty transform clears it
    fn set_visual(&self, opacity: &str, transform: &str);
}
