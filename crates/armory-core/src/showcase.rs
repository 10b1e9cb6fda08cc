//! The showcase controller as one value: the DOM listeners feed it input, the
//! frame loop calls [`Showcase::frame`] and hands the result to the renderer
//! and the overlay.

use crate::animator::{AnimatedTransform, FloatMotion, FloatPose, TransitionAnimator};
use crate::audio::{AudioChannel, AudioCueController, MediaChannel};
use crate::config::ShowcaseConfig;
use crate::input::{EventDispatch, InputRouter, PointerTarget};
use crate::orbit::{Gesture, PresentationControls};
use crate::state::{PresentationParams, ViewMode, ViewStateMachine};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Everything a consumer needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub mode: ViewMode,
    pub revision: u64,
    pub params: PresentationParams,
    pub transform: AnimatedTransform,
    pub float_pose: FloatPose,
    /// Drag rotation as (pitch, yaw) radians.
    pub rotation: Vec2,
}

impl FrameState {
    /// Object-to-world matrix: drag rotation, then float bob, then the base
    /// transform (position and uniform scale).
    pub fn model_matrix(&self) -> Mat4 {
        let orbit = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0);
        let r = self.float_pose.rotation;
        let float = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        Mat4::from_quat(orbit)
            * Mat4::from_rotation_translation(float, self.float_pose.offset)
            * Mat4::from_scale_rotation_translation(
                Vec3::splat(self.transform.scale),
                Quat::IDENTITY,
                self.transform.position,
            )
    }

    /// World-space point the object's local origin maps to.
    #[inline]
    pub fn object_center(&self) -> Vec3 {
        self.model_matrix().transform_point3(Vec3::ZERO)
    }
}

pub struct Showcase<A: MediaChannel, C: MediaChannel> {
    machine: ViewStateMachine,
    animator: TransitionAnimator,
    controls: PresentationControls,
    router: InputRouter,
    audio: AudioCueController<A, C>,
    max_frame_dt: f32,
    drag_ended: bool,
}

impl<A: MediaChannel, C: MediaChannel> Showcase<A, C> {
    pub fn new(config: &ShowcaseConfig, ambient: A, click: C) -> Self {
        let machine = ViewStateMachine::new();
        let animator = TransitionAnimator::new(
            machine.current_params(),
            FloatMotion::seeded(config.float_seed, config.float_speed),
        )
        .with_max_dt(config.max_frame_dt);
        Self {
            machine,
            animator,
            controls: PresentationControls::new(config.rest_rotation),
            router: InputRouter::new(),
            audio: AudioCueController::with_ambient_volume(ambient, click, config.ambient_volume),
            max_frame_dt: config.max_frame_dt.max(0.0),
            drag_ended: false,
        }
    }

    /// One click event. A click that closes a drag never counts as an
    /// object click; it still reaches the background.
    pub fn click(&mut self, target: PointerTarget) -> EventDispatch {
        let target = if std::mem::take(&mut self.drag_ended) && target == PointerTarget::Object {
            PointerTarget::Background
        } else {
            target
        };
        self.router
            .dispatch_click(target, &mut self.machine, &mut self.audio)
    }

    pub fn key(&mut self, key: &str) -> EventDispatch {
        self.router.dispatch_key(key, &mut self.machine, &mut self.audio)
    }

    /// Pointer pressed at `pos` (viewport fraction).
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.drag_ended = false;
        self.controls.press(pos);
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.controls.move_to(pos);
    }

    pub fn pointer_up(&mut self) -> Option<Gesture> {
        let gesture = self.controls.release();
        self.drag_ended = gesture == Some(Gesture::Drag);
        gesture
    }

    /// Advance animation by `dt` seconds.
    pub fn frame(&mut self, dt: f32) -> FrameState {
        let params = self.machine.current_params();
        self.controls.set_enabled(params.orbit_enabled);
        self.animator.set_target(params);
        let transform = self.animator.tick(dt);
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.max_frame_dt)
        } else {
            0.0
        };
        let rotation = self.controls.tick(dt);
        FrameState {
            mode: self.machine.mode(),
            revision: self.machine.revision(),
            params,
            transform,
            float_pose: self.animator.float_pose(),
            rotation,
        }
    }

    #[inline]
    pub fn mode(&self) -> ViewMode {
        self.machine.mode()
    }

    #[inline]
    pub fn current_params(&self) -> PresentationParams {
        self.machine.current_params()
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.machine.revision()
    }

    pub fn ambient_state(&self) -> AudioChannel {
        self.audio.ambient_state()
    }

    pub fn audio(&self) -> &AudioCueController<A, C> {
        &self.audio
    }

    pub fn animator(&self) -> &TransitionAnimator {
        &self.animator
    }

    pub fn controls(&self) -> &PresentationControls {
        &self.controls
    }
}
