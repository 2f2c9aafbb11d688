//! Self-rescheduling frame loop with a liveness guard.
//!
//! Each frame asks the scheduler for the next one. Stopping cancels the
//! outstanding request, and any callback that still fires afterwards does
//! nothing.

/// Opaque id of a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Source of frame callbacks (`requestAnimationFrame` in the browser).
pub trait FrameScheduler {
    fn request(&mut self) -> FrameHandle;
    fn cancel(&mut self, handle: FrameHandle);
}

pub struct AnimationLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<FrameHandle>,
    alive: bool,
}

impl<S: FrameScheduler> AnimationLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            alive: false,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Request the first frame. No-op when already running.
    pub fn start(&mut self) {
        if self.alive {
            return;
        }
        self.alive = true;
        self.pending = Some(self.scheduler.request());
    }

    /// Run `body` for a delivered frame and queue the next one. Returns
    /// whether `body` ran.
    pub fn on_frame(&mut self, timestamp_ms: f64, body: impl FnOnce(f64)) -> bool {
        self.pending = None;
        if !self.alive {
            return false;
        }
        body(timestamp_ms);
        self.pending = Some(self.scheduler.request());
        true
    }

    /// Cancel the pending frame and refuse all later ones.
    pub fn stop(&mut self) {
        self.alive = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for AnimationLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
