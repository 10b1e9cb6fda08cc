// Host-side tests for click/key routing and the showcase scenarios.

mod common;

use armory_core::*;
use common::*;
use glam::Vec2;

fn showcase() -> Showcase<RecordingChannel, RecordingChannel> {
    Showcase::new(
        &ShowcaseConfig::default(),
        RecordingChannel::default(),
        RecordingChannel::default(),
    )
}

#[test]
fn background_click_starts_ambience_only() {
    let mut s = showcase();
    let d = s.click(PointerTarget::Background);
    assert_eq!(d.handled(), &[Handler::Background]);
    assert_eq!(s.mode(), ViewMode::Presenting);
    assert!(s.ambient_state().is_playing);
    assert!((s.ambient_state().volume - 0.3).abs() < 1e-6);
    assert_eq!(s.audio().click().play_calls, 0);

    s.click(PointerTarget::Background);
    assert_eq!(s.audio().ambient().play_calls, 1);
    assert!(s.ambient_state().is_playing);
    assert!((s.ambient_state().volume - 0.3).abs() < 1e-6);
}

#[test]
fn inspect_button_stops_propagation() {
    let mut s = showcase();
    let d = s.click(PointerTarget::InspectButton);
    assert!(d.propagation_stopped());
    assert_eq!(d.handled(), &[Handler::InspectButton]);
    assert_eq!(s.mode(), ViewMode::Inspecting);
    assert_eq!(s.audio().ambient().play_calls, 0);
    assert!(!s.ambient_state().is_playing);
    assert_eq!(s.audio().click().play_calls, 1);
}

#[test]
fn exit_button_stops_propagation() {
    let mut s = showcase();
    s.click(PointerTarget::InspectButton);
    let d = s.click(PointerTarget::ExitButton);
    assert!(d.propagation_stopped());
    assert_eq!(s.mode(), ViewMode::Presenting);
    assert_eq!(s.audio().ambient().play_calls, 0);
    assert_eq!(s.audio().click().play_calls, 2);
}

#[test]
fn object_click_toggles_and_bubbles_to_background() {
    let mut s = showcase();
    let d = s.click(PointerTarget::Object);
    assert_eq!(d.handled(), &[Handler::Object, Handler::Background]);
    assert_eq!(s.mode(), ViewMode::Inspecting);
    assert!(s.ambient_state().is_playing);

    s.click(PointerTarget::Object);
    assert_eq!(s.mode(), ViewMode::Presenting);
    assert_eq!(s.audio().click().play_calls, 2);
    assert_eq!(s.audio().ambient().play_calls, 1);
}

#[test]
fn inactive_buttons_fall_through_to_background() {
    let mut s = showcase();
    let d = s.click(PointerTarget::ExitButton);
    assert!(!d.propagation_stopped());
    assert_eq!(d.handled(), &[Handler::Background]);
    assert_eq!(s.mode(), ViewMode::Presenting);

    s.click(PointerTarget::InspectButton);
    let d = s.click(PointerTarget::InspectButton);
    assert_eq!(d.handled(), &[Handler::Background]);
    assert_eq!(s.mode(), ViewMode::Inspecting);
}

#[test]
fn escape_exits_only_while_inspecting() {
    let mut s = showcase();
    let d = s.key("Escape");
    assert!(d.handled().is_empty());
    assert_eq!(s.audio().click().play_calls, 0);

    s.click(PointerTarget::Object);
    let d = s.key("Escape");
    assert_eq!(d.handled(), &[Handler::Escape]);
    assert_eq!(s.mode(), ViewMode::Presenting);

    s.click(PointerTarget::Object);
    s.key("x");
    assert_eq!(s.mode(), ViewMode::Inspecting);
}

#[test]
fn handlers_run_once_per_dispatch() {
    let mut router = InputRouter::new();
    let mut sm = ViewStateMachine::new();
    let mut audio = cues();
    let mut d = router.begin_dispatch();
    router.on_target(&mut d, PointerTarget::Object, &mut sm, &mut audio);
    router.on_target(&mut d, PointerTarget::Object, &mut sm, &mut audio);
    router.on_root(&mut d, &mut audio);
    router.on_root(&mut d, &mut audio);
    assert_eq!(sm.mode(), ViewMode::Inspecting);
    assert_eq!(audio.click().play_calls, 1);
    assert_eq!(audio.ambient().play_calls, 1);
    assert_eq!(d.handled(), &[Handler::Object, Handler::Background]);
}

#[test]
fn dispatch_ids_are_distinct() {
    let mut router = InputRouter::new();
    let a = router.begin_dispatch();
    let b = router.begin_dispatch();
    assert_ne!(a.id(), b.id());
}

#[test]
fn object_click_event_switches_on_mode() {
    assert_eq!(object_click_event(ViewMode::Presenting), ViewEvent::ToggleInspect);
    assert_eq!(object_click_event(ViewMode::Inspecting), ViewEvent::Exit);
    assert!(is_cancel_key("Escape"));
    assert!(!is_cancel_key("Enter"));
}

#[test]
fn inspect_then_escape_scenario() {
    let mut s = showcase();
    assert_eq!(s.mode(), ViewMode::Presenting);
    s.click(PointerTarget::Object);
    let f = s.frame(1.0 / 60.0);
    assert_eq!(f.mode, ViewMode::Inspecting);
    assert_eq!(f.params.object_scale, 4.5);
    assert_eq!(f.params.ui_opacity, 0.0);
    assert_eq!(s.animator().target().object_scale, 4.5);

    s.key("Escape");
    let f = s.frame(1.0 / 60.0);
    assert_eq!(f.mode, ViewMode::Presenting);
    assert_eq!(f.params.object_scale, 2.5);
    assert_eq!(f.revision, 2);
}

#[test]
fn frame_converges_to_inspecting_transform() {
    let mut s = showcase();
    s.click(PointerTarget::InspectButton);
    let mut f = s.frame(1.0 / 60.0);
    for _ in 0..600 {
        f = s.frame(1.0 / 60.0);
    }
    assert_eq!(f.transform.scale, 4.5);
    assert_eq!(f.transform.position, glam::Vec3::ZERO);
    assert!(!s.animator().is_snapping());
}

#[test]
fn click_ending_a_drag_is_not_an_object_click() {
    let mut s = showcase();
    s.pointer_down(Vec2::new(0.2, 0.5));
    s.pointer_move(Vec2::new(0.6, 0.5));
    assert_eq!(s.pointer_up(), Some(Gesture::Drag));
    let d = s.click(PointerTarget::Object);
    assert_eq!(d.handled(), &[Handler::Background]);
    assert_eq!(s.mode(), ViewMode::Presenting);

    // the next plain click counts again
    s.pointer_down(Vec2::new(0.5, 0.5));
    assert_eq!(s.pointer_up(), Some(Gesture::Click));
    s.click(PointerTarget::Object);
    assert_eq!(s.mode(), ViewMode::Inspecting);
}

#[test]
fn drag_rotation_shows_up_in_frames() {
    let mut s = showcase();
    let rest = s.frame(0.0).rotation;
    s.pointer_down(Vec2::new(0.5, 0.5));
    s.pointer_move(Vec2::new(0.7, 0.5));
    let mut f = s.frame(1.0 / 60.0);
    for _ in 0..60 {
        f = s.frame(1.0 / 60.0);
    }
    assert!(f.rotation.y > rest.y);
    s.pointer_up();
    for _ in 0..600 {
        f = s.frame(1.0 / 60.0);
    }
    assert_eq!(f.rotation, rest);
}

#[test]
fn model_matrix_places_and_scales_the_object() {
    let mut s = showcase();
    s.click(PointerTarget::InspectButton);
    let mut f = s.frame(0.0);
    for _ in 0..600 {
        f = s.frame(1.0 / 60.0);
    }
    // inspecting: no float, object at origin with scale 4.5
    let m = f.model_matrix();
    assert!(f.object_center().length() < 1e-5);
    let unit_x = m.transform_vector3(glam::Vec3::X);
    assert!((unit_x.length() - 4.5).abs() < 1e-4);
}
