// Host-side tests for scene constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use armory_core::constants::{INSPECTING_SCALE, PRESENTING_POSITION, PRESENTING_SCALE};
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_and_fog_ranges_are_ordered() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(FOG_NEAR < FOG_FAR);
    // the object at the origin sits before the fog starts thickening
    assert!(CAMERA_EYE.length() > FOG_NEAR);
    assert!(CAMERA_EYE.length() < FOG_FAR);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lights_reach_the_object() {
    for (pos, range) in [
        (RIM_LIGHT_RIGHT, RIM_LIGHT_RANGE),
        (RIM_LIGHT_LEFT, RIM_LIGHT_RANGE),
        (KEY_LIGHT, KEY_LIGHT_RANGE),
    ] {
        assert!(pos.length() < range, "light at {pos:?} cannot reach origin");
    }
    assert!(RIM_LIGHT_INTENSITY > 0.0 && KEY_LIGHT_INTENSITY > 0.0);
    // rim lights sit behind the object, mirrored left and right
    assert_eq!(RIM_LIGHT_LEFT.x, -RIM_LIGHT_RIGHT.x);
    assert!(RIM_LIGHT_LEFT.z < 0.0 && RIM_LIGHT_RIGHT.z < 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn post_parameters_in_range() {
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD < 1.0);
    assert!(BLOOM_STRENGTH > 0.0);
    assert!(NOISE_OPACITY > 0.0 && NOISE_OPACITY < 0.5);
    assert!(VIGNETTE_DARKNESS > 0.0);
    for c in BACKGROUND_RGB.iter().chain(&RIM_LIGHT_RGB).chain(&KEY_LIGHT_RGB) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
fn pick_sphere_stays_in_frame() {
    let half_height = CAMERA_EYE.z * (CAMERA_FOV_DEG.to_radians() * 0.5).tan();
    let presenting = PICK_RADIUS_LOCAL * PRESENTING_SCALE + PRESENTING_POSITION.length();
    assert!(presenting < half_height);
    // the close-up may fill the view but must not swallow the camera
    assert!(PICK_RADIUS_LOCAL * INSPECTING_SCALE < CAMERA_EYE.z);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        ROOT_ID,
        CANVAS_ID,
        UI_LAYER_ID,
        INSPECT_BUTTON_ID,
        EXIT_BUTTON_ID,
        AMBIENT_AUDIO_ID,
        CLICK_AUDIO_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(AMBIENT_AUDIO_SRC, CLICK_AUDIO_SRC);
}
