// Host-side tests for the frame driver.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod clock {
    include!("../src/clock.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}
mod motion {
    include!("../src/motion.rs");
}

use clock::*;
use input::Viewport;
use motion::{MotionEngine, Role};

/// Hands out increasing ids and remembers what was asked of it.
#[derive(Default)]
struct FakeScheduler {
    next_id: i32,
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.requested.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

#[test]
fn start_requests_a_single_frame() {
    let mut driver = FrameDriver::new(FakeScheduler::default());
    assert!(!driver.is_running());
    driver.start();
    driver.start();
    assert!(driver.is_running());
    assert_eq!(driver.scheduler().requested, vec![FrameHandle(1)]);
    assert_eq!(driver.pending(), Some(FrameHandle(1)));
}

#[test]
fn each_frame_ticks_once_and_reschedules() {
    let mut driver = FrameDriver::new(FakeScheduler::default());
    driver.start();
    let mut ticks = 0;
    for _ in 0..3 {
        driver.on_frame(|| ticks += 1);
    }
    assert_eq!(ticks, 3);
    assert_eq!(driver.frames(), 3);
    assert_eq!(driver.scheduler().requested.len(), 4);
    assert_eq!(driver.pending(), Some(FrameHandle(4)));
}

#[test]
fn stop_cancels_pending_frame_and_silences_late_callbacks() {
    let mut driver = FrameDriver::new(FakeScheduler::default());
    driver.start();
    driver.on_frame(|| {});
    driver.stop();
    assert!(!driver.is_running());
    assert_eq!(driver.pending(), None);
    assert_eq!(driver.scheduler().cancelled, vec![FrameHandle(2)]);

    let mut ticked = false;
    driver.on_frame(|| ticked = true);
    assert!(!ticked);
    assert_eq!(driver.frames(), 1);
    assert_eq!(driver.scheduler().requested.len(), 2);
}

#[test]
fn stop_without_start_is_harmless() {
    let mut driver = FrameDriver::new(FakeScheduler::default());
    driver.stop();
    assert!(driver.scheduler().cancelled.is_empty());
    assert!(driver.scheduler().requested.is_empty());
}

#[test]
fn restart_after_stop_resumes_ticking() {
    let mut driver = FrameDriver::new(FakeScheduler::default());
    driver.start();
    driver.stop();
    driver.start();
    let mut ticks = 0;
    driver.on_frame(|| ticks += 1);
    assert_eq!(ticks, 1);
    assert!(driver.is_running());
}

#[test]
fn refused_request_leaves_driver_idle() {
    let mut driver = FrameDriver::new(FakeScheduler {
        refuse: true,
        ..Default::default()
    });
    driver.start();
    assert!(!driver.is_running());
    assert_eq!(driver.pending(), None);
}

#[test]
fn driven_engine_matches_direct_ticks() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut driven = MotionEngine::new(viewport, true);
    let mut direct = MotionEngine::new(viewport, true);
    driven.pointer.record(120.0, 40.0);
    direct.pointer.record(120.0, 40.0);

    let mut driver = FrameDriver::new(FakeScheduler::default());
    driver.start();
    for _ in 0..25 {
        driver.on_frame(|| driven.tick());
        direct.tick();
    }
    driver.stop();
    driver.on_frame(|| driven.tick());

    assert_eq!(driven.phase(), direct.phase());
    for role in Role::ALL {
        assert_eq!(driven.entity(role), direct.entity(role));
    }
}
