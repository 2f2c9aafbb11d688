use crate::constants::{CURSOR_ID, HERO_PARALLAX_ID, HIDDEN_CLASS, PARALLAX_X_VAR, PARALLAX_Y_VAR};
use crate::dom::{self, DomProbe, Listener};
use crate::events::scroll::restyle_cursor;
use folio_core::{
    default_parallax_offset, parallax_enabled_for, CursorFollower, ViewportProbe,
    ViewportSectionTracker,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub probe: DomProbe,
    pub tracker: Rc<RefCell<ViewportSectionTracker>>,
    pub cursor: Rc<RefCell<CursorFollower>>,
}

pub fn wire_pointer_effects(w: &PointerWiring) -> Vec<Listener> {
    sync_cursor_visibility(&w.probe);

    let w_move = w.clone();
    let w_resize = w.clone();
    let window = w.probe.window();
    vec![
        Listener::new(window, "pointermove", move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                on_pointer_move(&w_move, ev.client_x() as f64, ev.client_y() as f64);
            }
        }),
        Listener::new(window, "resize", move |_ev: web::Event| {
            sync_cursor_visibility(&w_resize.probe);
        }),
    ]
}

fn on_pointer_move(w: &PointerWiring, x: f64, y: f64) {
    let width = w.probe.viewport_width();
    let document = w.probe.document();

    if CursorFollower::enabled_for(width) {
        let scrolled = w.tracker.borrow().state().scrolled_past_threshold;
        let mut cursor = w.cursor.borrow_mut();
        cursor.move_to(x, y);
        restyle_cursor(document, &cursor, scrolled);
    }

    if parallax_enabled_for(width) {
        let viewport = Vec2::new(width as f32, w.probe.viewport_height() as f32);
        let offset = default_parallax_offset(Vec2::new(x as f32, y as f32), viewport);
        if let Some(el) = document
            .get_element_by_id(HERO_PARALLAX_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            let style = el.style();
            _ = style.set_property(PARALLAX_X_VAR, &format!("{:.1}px", offset.x));
            _ = style.set_property(PARALLAX_Y_VAR, &format!("{:.1}px", offset.y));
        }
    }
}

/// Hide the follower dot on mobile-width viewports.
fn sync_cursor_visibility(probe: &DomProbe) {
    if let Some(el) = probe.document().get_element_by_id(CURSOR_ID) {
        let enabled = CursorFollower::enabled_for(probe.viewport_width());
        dom::set_class(&el, HIDDEN_CLASS, !enabled);
    }
}
