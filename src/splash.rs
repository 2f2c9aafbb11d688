use crate::constants::{HIDDEN_CLASS, SPLASH_ID};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(SPLASH_ID) {
        dom::set_class(&el, HIDDEN_CLASS, true);
        // fallback for environments without the stylesheet
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(SPLASH_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(true)
}

/// Pending splash timeout; cleared if dropped before it fires.
pub struct SplashTimer {
    window: web::Window,
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

pub fn hide_after(window: &web::Window, document: &web::Document, delay_ms: i32) -> SplashTimer {
    let document = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !is_hidden(&document) {
            hide(&document);
            log::info!("[splash] hidden");
        }
    }) as Box<dyn FnMut()>);
    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        )
        .ok();
    SplashTimer {
        window: window.clone(),
        id,
        _closure: closure,
    }
}
