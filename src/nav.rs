use crate::constants::{
    ACTIVE_CLASS, HEADER_ID, NAV_BUTTON_SELECTOR, NAV_HIGHLIGHT_SELECTOR, NAV_SECTION_ATTR,
    SCROLLED_CLASS,
};
use crate::dom::{self, DomProbe, Listener};
use folio_core::{scroll_to_section, SectionId, ViewportChange};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Patch header and nav for a tracker change.
pub fn apply_change(document: &web::Document, change: &ViewportChange) {
    if let Some(scrolled) = change.scrolled {
        if let Some(header) = document.get_element_by_id(HEADER_ID) {
            dom::set_class(&header, SCROLLED_CLASS, scrolled);
        }
    }
    if let Some(active) = change.active_section {
        highlight(document, active);
    }
}

/// Mark the nav button for `active` and clear the rest.
pub fn highlight(document: &web::Document, active: SectionId) {
    let Ok(buttons) = document.query_selector_all(NAV_HIGHLIGHT_SELECTOR) else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(el) = buttons.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let is_active = el.get_attribute(NAV_SECTION_ATTR).as_deref() == Some(active.as_str());
        dom::set_class(&el, ACTIVE_CLASS, is_active);
    }
}

/// Smooth-scroll to the section named by a button's `data-section`.
pub fn go_to(probe: &DomProbe, id: &str) {
    match scroll_to_section(probe, id) {
        Ok(Some(top)) => {
            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            probe.window().scroll_to_with_scroll_to_options(&opts);
        }
        Ok(None) => log::warn!("[nav] section `{}` not mounted", id),
        Err(e) => log::warn!("[nav] {}", e),
    }
}

/// One click listener per `[data-section]` element.
pub fn wire_nav_clicks(probe: &DomProbe) -> Vec<Listener> {
    let Ok(buttons) = probe.document().query_selector_all(NAV_BUTTON_SELECTOR) else {
        return Vec::new();
    };
    let mut listeners = Vec::new();
    for i in 0..buttons.length() {
        let Some(el) = buttons.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(id) = el.get_attribute(NAV_SECTION_ATTR) else {
            continue;
        };
        let probe = probe.clone();
        listeners.push(Listener::new(&el, "click", move |ev: web::Event| {
            ev.prevent_default();
            go_to(&probe, &id);
        }));
    }
    listeners
}
