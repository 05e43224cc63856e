//! `web-sys` side of the handler traits, plus the handful of helpers used to
//! find elements and register page-lifetime listeners.

use common::dom::{StrengthDisplay, SubmitControl, ValidatableForm, ValidityField};
use eyre::eyre;
use tracing::error;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, Event, EventTarget, HtmlFormElement, HtmlInputElement};

pub trait JsResultExt<T> {
    fn wrap_js(self, msg: &str) -> eyre::Result<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn wrap_js(self, msg: &str) -> eyre::Result<T> {
        self.map_err(|e| eyre!("{}: {:?}", msg, e))
    }
}

pub fn document() -> eyre::Result<Document> {
    web_sys::window()
        .ok_or_else(|| eyre!("no global window"))?
        .document()
        .ok_or_else(|| eyre!("window has no document"))
}

/// First element matching `selector`, if it is a `T`.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> eyre::Result<Option<T>> {
    let element = document
        .query_selector(selector)
        .wrap_js("querySelector failed")?;
    Ok(element.and_then(|e| e.dyn_into::<T>().ok()))
}

/// Every element matching `selector` that is a `T`.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> eyre::Result<Vec<T>> {
    let nodes = document
        .query_selector_all(selector)
        .wrap_js("querySelectorAll failed")?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<T>().ok())
        .collect())
}

/// Registers `handler` for the rest of the page lifetime.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> eyre::Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .wrap_js("addEventListener failed")?;
    closure.forget();
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Input(pub HtmlInputElement);

impl ValidityField for Input {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_custom_validity(&self, message: &str) {
        self.0.set_custom_validity(message);
    }
}

#[derive(Debug, Clone)]
pub struct Form(pub HtmlFormElement);

impl ValidatableForm for Form {
    fn check_validity(&self) -> bool {
        self.0.check_validity()
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.0.class_list().add_1(class) {
            error!("failed to add class {:?}: {:?}", class, e);
        }
    }
}

pub struct Submit(pub Event);

impl SubmitControl for Submit {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }
}

#[derive(Debug, Clone)]
pub struct Meter(pub Element);

impl StrengthDisplay for Meter {
    fn show(&self, score: u8, label: &str) {
        if let Err(e) = self.0.set_attribute("data-score", &score.to_string()) {
            error!("failed to set strength score: {:?}", e);
        }
        self.0.set_text_content(Some(label));
    }

    fn clear(&self) {
        if let Err(e) = self.0.remove_attribute("data-score") {
            error!("failed to clear strength score: {:?}", e);
        }
        self.0.set_text_content(None);
    }
}
