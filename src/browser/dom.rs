//! DOM Page
//!
//! `Page` and `FavoriteIcon` over live DOM nodes.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement, Window};

use crate::page::{FavoriteIcon, Page};

/// Inline style of an HTML or SVG element
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(|svg| svg.style())
}

pub struct DomPage {
    window: Window,
    document: Document,
    header_icon_selector: String,
}

impl DomPage {
    pub fn new(window: Window, document: Document, header_icon_selector: &str) -> Self {
        Self {
            window,
            document,
            header_icon_selector: header_icon_selector.to_string(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[async_trait(?Send)]
impl Page for DomPage {
    fn set_header_fill(&self, color: &str) -> bool {
        // Looked up on every render: the header may be re-rendered
        let node = self.document.query_selector(&self.header_icon_selector).ok().flatten();
        match node.as_ref().and_then(inline_style) {
            Some(style) => {
                let _ = style.set_property("fill", color);
                true
            }
            None => false,
        }
    }

    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn reload(&self) {
        if let Err(e) = self.window.location().reload() {
            log::error!("Page reload failed: {}", super::js_message(&e));
        }
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}

pub struct DomFavoriteIcon {
    element: Element,
}

impl DomFavoriteIcon {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl FavoriteIcon for DomFavoriteIcon {
    fn set_class(&self, class: &str, present: bool) {
        let classes = self.element.class_list();
        let _ = if present {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }

    fn set_visual(&self, opacity: &str, transform: &str) {
        let Some(style) = inline_style(&self.element) else {
            return;
        };
        let _ = style.set_property("opacity", opacity);
        if transform.is_empty() {
            let _ = style.remove_property("transform");
        } else {
            let _ = style.set_property("transform", transform);
        }
    }
}
