/// Opaque id returned by the host when a frame callback is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Host primitive behind the frame loop (`requestAnimationFrame` on the web).
pub trait FrameScheduler {
    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Start/stop wrapper around a self-rescheduling frame callback.
///
/// The host calls [`FrameDriver::on_frame`] from its callback; the driver runs
/// the tick and asks for the next frame until stopped. The tick itself never
/// depends on the driver, so it can be called directly in tests.
pub struct FrameDriver<S: FrameScheduler> {
    scheduler: S,
    pending: Option<FrameHandle>,
    running: bool,
    frames: u64,
}

impl<S: FrameScheduler> FrameDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.schedule_next();
    }

    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    /// Run one frame and request the next. Does nothing once stopped.
    pub fn on_frame(&mut self, tick: impl FnOnce()) {
        self.pending = None;
        if !self.running {
            return;
        }
        tick();
        self.frames += 1;
        self.schedule_next();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Number of ticks executed since creation.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn schedule_next(&mut self) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("frame request refused; motion loop idle");
            self.running = false;
        }
    }
}
