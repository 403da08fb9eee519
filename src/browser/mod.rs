//! Browser Bindings
//!
//! wasm32-only glue: fetch client, DOM page, and the page-lifetime binding.

mod binding;
mod dom;
mod fetch;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::config::{FavoritesConfig, CONFIG_ELEMENT_ID};
use crate::controller::FavoritesController;
use crate::error::{FavoritesError, FavoritesResult};

use binding::FavoritesBinding;
use dom::DomPage;
use fetch::HttpFavoritesApi;

thread_local! {
    static BINDING: RefCell<Option<Rc<FavoritesBinding>>> = const { RefCell::new(None) };
}

pub(crate) fn js_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{:?}", err)
}

pub(crate) fn js_error(err: JsValue) -> FavoritesError {
    FavoritesError::Network(js_message(&err))
}

/// Read the optional JSON override embedded in the page
fn load_config(document: &Document) -> FavoritesConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return FavoritesConfig::default();
    };
    FavoritesConfig::from_json(&json).unwrap_or_else(|e| {
        log::error!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
        FavoritesConfig::default()
    })
}

/// Wire the fetch client and DOM page into a binding for `document`
fn dom_binding(window: Window, document: Document, config: FavoritesConfig) -> FavoritesBinding {
    let page = DomPage::new(window, document, &config.header_icon_selector);
    let api = HttpFavoritesApi::new(config.clone());
    FavoritesBinding::new(FavoritesController::new(api, page, config))
}

/// Whether `binding` is still the page's live binding
fn is_live(binding: &Rc<FavoritesBinding>) -> bool {
    BINDING.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|live| Rc::ptr_eq(live, binding))
    })
}

/// `DOMContentLoaded` handler: skipped when disposed before the DOM was ready
fn on_document_ready(binding: &Rc<FavoritesBinding>) -> FavoritesResult<()> {
    if !is_live(binding) {
        log::debug!("Favorites binding disposed before the document was ready");
        return Ok(());
    }
    binding.initialize()
}

/// Build the controller for this page and bind it once the DOM is parsed
pub fn start() -> FavoritesResult<()> {
    let window = web_sys::window().ok_or_else(|| FavoritesError::Network("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| FavoritesError::Network("no document".to_string()))?;

    let config = load_config(&document);
    console_logger::init(config.level_filter());

    let binding = Rc::new(dom_binding(window, document.clone(), config));
    BINDING.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&binding)));

    if document.ready_state() != "loading" {
        return binding.initialize();
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = on_document_ready(&binding) {
            log::error!("Favorites binding failed: {}", e);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(js_error)
}

/// Detach the favorites listeners from the page
#[wasm_bindgen(js_name = disposeFavorites)]
pub fn dispose_favorites() {
    BINDING.with(|slot| {
        if let Some(binding) = slot.borrow_mut().take() {
            binding.dispose();
        }
    });
}
