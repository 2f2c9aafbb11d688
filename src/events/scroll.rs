use crate::constants::{CURSOR_ID, REVEALED_CLASS};
use crate::dom::{self, DomProbe, Listener};
use crate::nav;
use folio_core::{CursorFollower, RevealTracker, ViewportProbe, ViewportSectionTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct SpyWiring {
    pub probe: DomProbe,
    pub tracker: Rc<RefCell<ViewportSectionTracker>>,
    pub reveal: Rc<RefCell<RevealTracker>>,
    pub cursor: Rc<RefCell<CursorFollower>>,
}

impl SpyWiring {
    /// One scroll tick: spy, header, reveals.
    pub fn handle_scroll(&self) {
        let change = self.tracker.borrow_mut().on_scroll(&self.probe);
        let document = self.probe.document();
        if let Some(change) = change {
            nav::apply_change(document, &change);
            if let Some(scrolled) = change.scrolled {
                restyle_cursor(document, &self.cursor.borrow(), scrolled);
            }
        }
        self.reveal_visible();
    }

    pub fn reveal_visible(&self) {
        let fresh = self.reveal.borrow_mut().update(&self.probe);
        for id in fresh {
            if let Some(el) = self.probe.document().get_element_by_id(id.as_str()) {
                dom::set_class(&el, REVEALED_CLASS, true);
            }
        }
    }
}

pub fn restyle_cursor(document: &web::Document, cursor: &CursorFollower, scrolled: bool) {
    if let Some(el) = document.get_element_by_id(CURSOR_ID) {
        _ = el.set_attribute("style", &format!("transform: {}", cursor.transform(scrolled)));
    }
}

/// Passive scroll listener plus a resize listener so reveals and the mobile
/// threshold follow viewport changes. Runs one pass immediately.
pub fn wire_scroll_spy(w: &SpyWiring) -> Vec<Listener> {
    w.handle_scroll();
    let active = w.tracker.borrow().active_section();
    nav::highlight(w.probe.document(), active);
    log::info!(
        "[spy] wired; viewport width {:.0}, active {}",
        w.probe.viewport_width(),
        active
    );

    let on_scroll = w.clone();
    let on_resize = w.clone();
    let window = w.probe.window();
    vec![
        Listener::passive(window, "scroll", move |_ev: web::Event| {
            on_scroll.handle_scroll();
        }),
        Listener::new(window, "resize", move |_ev: web::Event| {
            on_resize.handle_scroll();
        }),
    ]
}
