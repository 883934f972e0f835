use crate::motion::{MotionEngine, Role};
use glam::DVec2;

/// Receives eased positions at the end of each frame.
pub trait PositionSink {
    /// Place the visual for `role`. Returns `false` when it has no visual,
    /// which is an expected state, not an error.
    fn apply(&mut self, role: Role, position: DVec2) -> bool;
}

/// Copy every active entity's current position into `sink`, once each.
///
/// Returns how many positions were actually written.
pub fn project(engine: &MotionEngine, sink: &mut impl PositionSink) -> usize {
    engine
        .active_roles()
        .filter(|&role| sink.apply(role, engine.position(role)))
        .count()
}

/// CSS length for a pixel offset, e.g. `12.5px`.
#[inline]
pub fn css_px(value: f64) -> String {
    format!("{}px", value)
}
