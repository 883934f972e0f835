use crate::constants::FINE_POINTER_QUERY;
use crate::input::Viewport;
use crate::motion::Role;
use crate::sink::{css_px, PositionSink};
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// True when a hover-capable fine pointer (mouse, trackpad) is present.
pub fn has_fine_pointer(window: &web::Window) -> bool {
    match window.match_media(FINE_POINTER_QUERY) {
        Ok(Some(mql)) => mql.matches(),
        _ => false,
    }
}

/// Inner size of the window in CSS pixels, or the fallback size.
pub fn viewport_of(window: &web::Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(w), Some(h)) => Viewport::new(w, h),
        _ => Viewport::default(),
    }
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Positions page elements through their inline `left`/`top` style.
///
/// Elements are looked up once; a missing element stays missing and its
/// writes are skipped.
pub struct ElementSink {
    elements: [Option<web::HtmlElement>; 5],
}

impl ElementSink {
    pub fn lookup(document: &web::Document) -> Self {
        let elements = Role::ALL.map(|role| {
            let el = html_element_by_id(document, role.element_id());
            if el.is_none() {
                log::debug!("[sink] #{} not found; skipping {:?}", role.element_id(), role);
            }
            el
        });
        Self { elements }
    }

    pub fn found(&self) -> usize {
        self.elements.iter().filter(|el| el.is_some()).count()
    }
}

impl PositionSink for ElementSink {
    fn apply(&mut self, role: Role, position: DVec2) -> bool {
        let Some(el) = &self.elements[role.index()] else {
            return false;
        };
        let style = el.style();
        _ = style.set_property("left", &css_px(position.x));
        _ = style.set_property("top", &css_px(position.y));
        true
    }
}
