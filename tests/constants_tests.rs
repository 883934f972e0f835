// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_valid_weights() {
    for factor in [
        RING_EASING,
        DOT_EASING,
        BLOB1_EASING,
        BLOB2_EASING,
        BLOB3_EASING,
        BLOB2_CHASE_PULL,
    ] {
        assert!(factor > 0.0 && factor <= 1.0, "bad factor {factor}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Ring trails, dot stays tight
    assert!(DOT_EASING > RING_EASING);

    // Blobs are slower than either cursor marker
    assert!(BLOB1_EASING < RING_EASING);
    assert!(BLOB2_EASING < BLOB1_EASING);
    assert!(BLOB3_EASING < BLOB2_EASING);

    // Phase step small enough that the fastest term stays smooth
    assert!(PHASE_STEP > 0.0);
    assert!(PHASE_STEP * BLOB1_ORBIT_FREQUENCY < 0.1);

    // Wander stays small against the orbit
    assert!(BLOB2_WANDER_AMPLITUDE + BLOB2_WANDER_BIAS.abs() < BLOB1_ORBIT_RADIUS);
}

#[test]
fn layout_fractions_stay_on_screen() {
    for [fx, fy] in [BLOB1_START, BLOB2_START, BLOB3_START] {
        assert!((0.0..=1.0).contains(&fx));
        assert!((0.0..=1.0).contains(&fy));
    }
    assert!(FALLBACK_VIEWPORT.iter().all(|v| *v > 0.0));
}

#[test]
fn element_ids_and_query_are_non_empty() {
    assert!(!RING_ELEMENT_ID.is_empty());
    assert!(!DOT_ELEMENT_ID.is_empty());
    assert!(BLOB_ELEMENT_IDS.iter().all(|id| !id.is_empty()));
    assert!(FINE_POINTER_QUERY.contains("pointer: fine"));
}
