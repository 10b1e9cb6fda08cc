// Host-side tests for click picking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod picking {
    include!("../src/picking.rs");
}

use glam::Vec3;
use picking::*;

const SIZE: (f32, f32) = (800.0, 600.0);

fn camera() -> CameraRig {
    CameraRig {
        eye: Vec3::new(0.0, 0.0, 10.0),
        fovy_radians: 30f32.to_radians(),
        znear: 0.1,
        zfar: 1000.0,
    }
}

#[test]
fn ray_sphere_hits_ahead() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    let t = t.expect("ray along +z should hit");
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_misses_sideways_and_behind() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn center_pixel_ray_points_at_origin() {
    let (origin, dir) = camera().screen_ray(SIZE.0, SIZE.1, SIZE.0 / 2.0, SIZE.1 / 2.0);
    assert_eq!(origin, Vec3::new(0.0, 0.0, 10.0));
    assert!((dir - Vec3::NEG_Z).length() < 1e-4, "dir = {dir:?}");
}

#[test]
fn top_of_screen_ray_points_up() {
    let (_, dir) = camera().screen_ray(SIZE.0, SIZE.1, SIZE.0 / 2.0, 0.0);
    assert!(dir.y > 0.0);
    // half the vertical field of view above the axis
    let angle = dir.y.atan2(-dir.z);
    assert!((angle - 15f32.to_radians()).abs() < 1e-3, "angle = {angle}");
}

#[test]
fn origin_projects_to_screen_center() {
    let clip = camera().view_proj(SIZE.0 / SIZE.1) * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn presenting_object_is_hit_at_center_and_missed_in_corner() {
    let center = Vec3::new(0.0, -1.0, 0.0);
    let radius = 0.45 * 2.5;
    let cam = camera();
    assert!(hits_object(&cam, SIZE, (400.0, 300.0), center, radius));
    assert!(!hits_object(&cam, SIZE, (0.0, 0.0), center, radius));
    assert!(!hits_object(&cam, SIZE, (799.0, 599.0), center, radius));
}

#[test]
fn degenerate_surface_size_does_not_panic() {
    let (_, dir) = camera().screen_ray(0.0, 0.0, 0.0, 0.0);
    assert!(dir.is_finite());
}
