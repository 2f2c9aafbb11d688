use crate::canvas::CanvasSurface;
use crate::dom;
use folio_core::{AmbientField, AnimationLoop, FieldConfig, FrameHandle, FrameScheduler};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler. The callback slot is filled once
/// the loop's closure exists and emptied on teardown.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    fn request(&mut self) -> FrameHandle {
        let id = self
            .callback
            .borrow()
            .as_ref()
            .and_then(|cb| {
                self.window
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok()
            })
            .unwrap_or(0);
        FrameHandle(id)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Everything one animation frame needs, passed explicitly into the callback.
pub struct FieldLoop {
    pub canvas: web::HtmlCanvasElement,
    pub field: AmbientField,
    pub surface: CanvasSurface,
    pub anim: AnimationLoop<RafScheduler>,
    pub origin: Instant,
}

impl FieldLoop {
    pub fn frame(&mut self) {
        let ts = self.origin.elapsed().as_secs_f64() * 1000.0;
        let Self {
            field,
            surface,
            anim,
            ..
        } = self;
        anim.on_frame(ts, |ts| {
            if field.tick(ts) {
                field.render(surface);
            }
        });
    }

    /// Re-measure the canvas and regenerate the field for the new size.
    pub fn resize(&mut self) {
        let (w, h, dpr) = dom::sync_canvas_backing_size(&self.canvas);
        self.surface.set_pixel_ratio(dpr);
        self.field.resize(w as f32, h as f32);
        self.field.render(&mut self.surface);
    }
}

/// Owns the running loop. Dropping it stops the loop and releases the
/// frame closure.
pub struct FieldHandle {
    ctx: Rc<RefCell<FieldLoop>>,
    callback: FrameCallback,
}

impl FieldHandle {
    /// Shared handle for listeners that need to reach the loop (resize).
    pub fn clone_ctx(&self) -> Rc<RefCell<FieldLoop>> {
        self.ctx.clone()
    }
}

impl Drop for FieldHandle {
    fn drop(&mut self) {
        if let Ok(mut ctx) = self.ctx.try_borrow_mut() {
            ctx.anim.stop();
        }
        // breaks the ctx <-> closure cycle
        self.callback.borrow_mut().take();
        log::info!("[field] stopped");
    }
}

pub fn start_loop(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    ctx2d: web::CanvasRenderingContext2d,
    seed: u64,
) -> FieldHandle {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        window: window.clone(),
        callback: callback.clone(),
    };
    let ctx = Rc::new(RefCell::new(FieldLoop {
        canvas,
        field: AmbientField::new(FieldConfig::default(), seed),
        surface: CanvasSurface::new(ctx2d),
        anim: AnimationLoop::new(scheduler),
        origin: Instant::now(),
    }));

    let ctx_tick = ctx.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Ok(mut c) = ctx_tick.try_borrow_mut() {
            c.frame();
        }
    }) as Box<dyn FnMut()>));

    {
        let mut c = ctx.borrow_mut();
        c.resize();
        c.anim.start();
        log::info!("[field] started with {} points", c.field.points().len());
    }

    FieldHandle { ctx, callback }
}
