use crate::clock::{FrameDriver, FrameHandle, FrameScheduler};
use crate::dom::ElementSink;
use crate::motion::MotionEngine;
use crate::sink;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the [`FrameScheduler`] seam.
pub struct RafScheduler {
    window: web::Window,
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let slot = self.callback.borrow();
        let callback = slot.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

pub struct FrameContext {
    pub engine: Rc<RefCell<MotionEngine>>,
    pub sink: ElementSink,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut engine = self.engine.borrow_mut();
        engine.tick();
        sink::project(&engine, &mut self.sink);
    }
}

/// Handle to the running animation loop.
#[derive(Clone)]
pub struct MotionLoop {
    driver: Rc<RefCell<FrameDriver<RafScheduler>>>,
}

impl MotionLoop {
    pub fn stop(&self) {
        let mut driver = self.driver.borrow_mut();
        if driver.is_running() {
            driver.stop();
            log::info!("[loop] stopped after {} frames", driver.frames());
        }
    }

    pub fn is_running(&self) -> bool {
        self.driver.borrow().is_running()
    }
}

pub fn start_loop(window: web::Window, mut frame_ctx: FrameContext) -> MotionLoop {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let driver = Rc::new(RefCell::new(FrameDriver::new(RafScheduler {
        window,
        callback: callback.clone(),
    })));
    let driver_tick = driver.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        driver_tick.borrow_mut().on_frame(|| frame_ctx.frame());
    }) as Box<dyn FnMut()>));
    driver.borrow_mut().start();
    MotionLoop { driver }
}
