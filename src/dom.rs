use crate::constants::HEADER_ID;
use folio_core::{SectionId, SectionRect, ViewportProbe};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Live DOM geometry for the scroll-spy. Nothing is cached between calls.
#[derive(Clone)]
pub struct DomProbe {
    window: web::Window,
    document: web::Document,
}

impl DomProbe {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    #[inline]
    pub fn window(&self) -> &web::Window {
        &self.window
    }

    #[inline]
    pub fn document(&self) -> &web::Document {
        &self.document
    }
}

impl ViewportProbe for DomProbe {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        viewport_size(&self.window).0
    }

    fn viewport_height(&self) -> f64 {
        viewport_size(&self.window).1
    }

    fn section_rect(&self, id: SectionId) -> Option<SectionRect> {
        let el = self.document.get_element_by_id(id.as_str())?;
        let rect = el.get_bounding_client_rect();
        Some(SectionRect::new(rect.top(), rect.bottom()))
    }

    fn header_height(&self) -> f64 {
        self.document
            .get_element_by_id(HEADER_ID)
            .map(|el| el.get_bounding_client_rect().height())
            .unwrap_or(0.0)
    }
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    /// Same as [`Listener::new`] but registered as passive, for scroll.
    pub fn passive(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the CSS size and the ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (f64, f64, f64) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    (rect.width(), rect.height(), dpr)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}
