use crate::dom;
use crate::motion::MotionEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Record every `pointermove` into the engine's pointer state.
pub fn wire_pointer_sampler(engine: Rc<RefCell<MotionEngine>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        engine
            .borrow_mut()
            .pointer
            .record(ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the engine's reference frame in step with the window size.
pub fn wire_viewport_resize(engine: Rc<RefCell<MotionEngine>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(wnd) = web::window() {
            let viewport = dom::viewport_of(&wnd);
            engine.borrow_mut().set_viewport(viewport);
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
