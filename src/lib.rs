#![cfg(target_arch = "wasm32")]
use crate::motion::MotionEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod clock;
pub mod constants;
mod dom;
mod events;
mod frame;
pub mod input;
pub mod motion;
pub mod sink;

thread_local! {
    static MOTION_LOOP: RefCell<Option<frame::MotionLoop>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-motion starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Cancel the animation loop. Positions stay where they were last written.
#[wasm_bindgen]
pub fn stop_motion() {
    MOTION_LOOP.with(|slot| {
        if let Some(motion_loop) = slot.borrow_mut().take() {
            motion_loop.stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let already_running = MOTION_LOOP.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|l| l.is_running())
            .unwrap_or(false)
    });
    if already_running {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let cursor_enabled = dom::has_fine_pointer(&window);
    let viewport = dom::viewport_of(&window);
    let engine = Rc::new(RefCell::new(MotionEngine::new(viewport, cursor_enabled)));
    let sink = dom::ElementSink::lookup(&document);
    log::info!(
        "[motion] viewport={:.0}x{:.0} cursor={} elements={}/5",
        viewport.width,
        viewport.height,
        if cursor_enabled { "on" } else { "off (no fine pointer)" },
        sink.found()
    );

    // Touch-only devices never sample: the blobs orbit the viewport center.
    if cursor_enabled {
        events::wire_pointer_sampler(engine.clone());
    }
    events::wire_viewport_resize(engine.clone());

    let motion_loop = frame::start_loop(window, frame::FrameContext { engine, sink });
    log::info!("[loop] started");
    MOTION_LOOP.with(|slot| *slot.borrow_mut() = Some(motion_loop));
    Ok(())
}
