//! Favorite Form Binding
//!
//! Attaches the controller to every `.favorite-form` on the page and
//! detaches it again on `dispose()`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::config::FavoritesConfig;
use crate::controller::FavoritesController;
use crate::error::{FavoritesError, FavoritesResult};
use crate::models::FavoriteForm;

use super::dom::{DomFavoriteIcon, DomPage};
use super::fetch::HttpFavoritesApi;
use super::js_error;

pub type DomController = FavoritesController<HttpFavoritesApi, DomPage>;

type SubmitListener = Closure<dyn FnMut(Event)>;

pub struct FavoritesBinding {
    controller: Rc<DomController>,
    initialized: Cell<bool>,
    listeners: RefCell<Vec<(Element, SubmitListener)>>,
}

impl FavoritesBinding {
    pub fn new(controller: DomController) -> Self {
        Self {
            controller: Rc::new(controller),
            initialized: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Paint the header icon and bind submit listeners. Runs once.
    pub fn initialize(&self) -> FavoritesResult<()> {
        if self.initialized.replace(true) {
            return Ok(());
        }

        let controller = Rc::clone(&self.controller);
        wasm_bindgen_futures::spawn_local(async move {
            controller.refresh_header().await;
        });

        let config = self.controller.config();
        let forms = self
            .controller
            .page()
            .document()
            .query_selector_all(&config.form_selector)
            .map_err(js_error)?;

        let mut listeners = self.listeners.borrow_mut();
        for i in 0..forms.length() {
            let Some(form) = forms.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let listener = make_submit_listener(Rc::clone(&self.controller), form.clone());
            form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())
                .map_err(js_error)?;
            listeners.push((form, listener));
        }

        log::info!("Bound {} favorite forms", listeners.len());
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    pub fn bound_forms(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Detach every submit listener bound by `initialize`
    pub fn dispose(&self) {
        for (form, listener) in self.listeners.borrow_mut().drain(..) {
            let _ = form.remove_event_listener_with_callback("submit", listener.as_ref().unchecked_ref());
        }
        self.initialized.set(false);
    }
}

fn make_submit_listener(controller: Rc<DomController>, form: Element) -> SubmitListener {
    Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        ev.prevent_default();
        ev.stop_propagation();

        let (fields, icon) = match read_form(&form, controller.config()) {
            Ok(read) => read,
            Err(e) => {
                log::error!("Cannot toggle favorite: {}", e);
                return;
            }
        };

        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            controller.toggle(&fields, &icon).await;
        });
    })
}

fn read_form(form: &Element, config: &FavoritesConfig) -> FavoritesResult<(FavoriteForm, DomFavoriteIcon)> {
    let product_slug = form
        .get_attribute(&config.slug_attribute)
        .ok_or(FavoritesError::MissingField("product slug"))?;

    let csrf_token = form
        .query_selector(&config.csrf_selector())
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .ok_or(FavoritesError::MissingField("CSRF token"))?;

    let icon = form
        .query_selector(&config.icon_selector)
        .ok()
        .flatten()
        .ok_or(FavoritesError::MissingField("favorite icon"))?;

    Ok((
        FavoriteForm { product_slug, csrf_token },
        DomFavoriteIcon::new(icon),
    ))
}
