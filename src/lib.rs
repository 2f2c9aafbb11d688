#![cfg(target_arch = "wasm32")]
use folio_core::{CursorFollower, RevealTracker, TrackerConfig, ViewportSectionTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod nav;
mod splash;

use constants::{FIELD_CANVAS_ID, SPLASH_MS};

/// Scroll-spy, pointer and nav listeners. Dropping removes all of them.
struct SpyMount {
    listeners: Vec<dom::Listener>,
}

impl Drop for SpyMount {
    fn drop(&mut self) {
        log::info!("[spy] unmounting {} listeners", self.listeners.len());
        self.listeners.clear();
    }
}

/// Background field loop and its resize listener.
struct FieldMount {
    _resize: dom::Listener,
    _handle: frame::FieldHandle,
}

/// Everything registered against the page. The two subsystems tear down
/// independently; dropping the whole thing tears down both and the splash timer.
struct Mounted {
    spy: Option<SpyMount>,
    field: Option<FieldMount>,
    _splash: splash::SplashTimer,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    match mount() {
        Ok(m) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(m)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Tear down listeners and the background loop. Safe to call twice.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
    drop(mounted);
}

/// Remove the scroll-spy, pointer and nav listeners, leaving the field running.
#[wasm_bindgen]
pub fn unmount_spy() {
    let spy = MOUNTED.with(|slot| slot.borrow_mut().as_mut().and_then(|m| m.spy.take()));
    drop(spy);
}

/// Stop the background field, leaving navigation tracking in place.
#[wasm_bindgen]
pub fn unmount_field() {
    let field = MOUNTED.with(|slot| slot.borrow_mut().as_mut().and_then(|m| m.field.take()));
    drop(field);
}

fn mount() -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(FIELD_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", FIELD_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let probe = dom::DomProbe::new(window.clone(), document.clone());
    let tracker = Rc::new(RefCell::new(ViewportSectionTracker::new(
        TrackerConfig::default(),
    )));
    let cursor = Rc::new(RefCell::new(CursorFollower::default()));

    let mut listeners = Vec::new();
    listeners.extend(events::wire_scroll_spy(&events::SpyWiring {
        probe: probe.clone(),
        tracker: tracker.clone(),
        reveal: Rc::new(RefCell::new(RevealTracker::default())),
        cursor: cursor.clone(),
    }));
    listeners.extend(events::wire_pointer_effects(&events::PointerWiring {
        probe: probe.clone(),
        tracker,
        cursor,
    }));
    listeners.extend(nav::wire_nav_clicks(&probe));

    let handle = frame::start_loop(&window, canvas, ctx2d, rand::random());
    let field_resize = handle.clone_ctx();
    let resize = dom::Listener::new(&window, "resize", move |_ev: web::Event| {
        if let Ok(mut ctx) = field_resize.try_borrow_mut() {
            ctx.resize();
        }
    });

    let splash = splash::hide_after(&window, &document, SPLASH_MS);

    Ok(Mounted {
        spy: Some(SpyMount { listeners }),
        field: Some(FieldMount {
            _resize: resize,
            _handle: handle,
        }),
        _splash: splash,
    })
}
