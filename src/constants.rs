/// Motion tuning constants.
///
/// All smoothing values are per-frame weights, not time constants: the loop
/// runs at whatever rate the browser drives `requestAnimationFrame`.
// Phase advance per frame (drives every oscillating term)
pub const PHASE_STEP: f64 = 0.005;

// Cursor markers
pub const RING_EASING: f64 = 0.1; // slow, trailing ring
pub const DOT_EASING: f64 = 0.3; // fast, tight dot

// Blob 1: follows the pointer on an orbit
pub const BLOB1_EASING: f64 = 0.02;
pub const BLOB1_ORBIT_RADIUS: f64 = 150.0;
pub const BLOB1_ORBIT_FREQUENCY: f64 = 2.0;

// Blob 2: chases blob 1 and wanders
pub const BLOB2_EASING: f64 = 0.015;
pub const BLOB2_CHASE_PULL: f64 = 0.01; // fraction of the gap closed by the target per frame
pub const BLOB2_WANDER_FREQUENCY: f64 = 1.5;
pub const BLOB2_WANDER_AMPLITUDE: f64 = 2.0;
pub const BLOB2_WANDER_BIAS: f64 = -1.0; // added to both axes after scaling

// Blob 3: Lissajous curve around the viewport center
pub const BLOB3_EASING: f64 = 0.01;
pub const BLOB3_AMPLITUDE: [f64; 2] = [400.0, 300.0];
pub const BLOB3_FREQUENCY: [f64; 2] = [1.0, 0.8];

// Initial blob placement as fractions of the viewport
pub const BLOB1_START: [f64; 2] = [0.3, 0.3];
pub const BLOB2_START: [f64; 2] = [0.7, 0.6];
pub const BLOB3_START: [f64; 2] = [0.5, 0.8];

// Used when the host cannot report a viewport size
pub const FALLBACK_VIEWPORT: [f64; 2] = [1280.0, 720.0];

// DOM
pub const RING_ELEMENT_ID: &str = "cursor-ring";
pub const DOT_ELEMENT_ID: &str = "cursor-dot";
pub const BLOB_ELEMENT_IDS: [&str; 3] = ["blob1", "blob2", "blob3"];
pub const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";
