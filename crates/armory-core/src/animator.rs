use crate::constants::*;
use crate::spring::{SpringProfile, SpringState};
use crate::state::PresentationParams;
use glam::Vec3;
use rand::prelude::*;

/// Base transform of the showcased object, before float perturbation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedTransform {
    pub scale: f32,
    pub position: Vec3,
}

/// Idle float perturbation layered on top of [`AnimatedTransform`].
///
/// `rotation` is an XYZ euler offset in radians, `offset` a translation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FloatPose {
    pub rotation: Vec3,
    pub offset: Vec3,
}

/// Phase-offset sinusoidal bobbing.
///
/// The phase is kept in `f64` and wrapped to one period, so the motion keeps
/// its speed for the whole life of the view.
#[derive(Clone, Debug)]
pub struct FloatMotion {
    phase: f64,
    speed: f32,
}

impl FloatMotion {
    pub fn new(phase_offset: f32, speed: f32) -> Self {
        let mut motion = Self { phase: 0.0, speed };
        motion.phase = motion.wrap(phase_offset as f64);
        motion
    }

    /// Random phase so separate views do not bob in lockstep.
    pub fn seeded(seed: u64, speed: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(rng.gen_range(0.0..FLOAT_OFFSET_RANGE), speed)
    }

    /// Seconds of motion in one full bob cycle; infinite when still.
    #[inline]
    pub fn period(&self) -> f64 {
        if self.speed > 0.0 {
            8.0 * std::f64::consts::PI / self.speed as f64
        } else {
            f64::INFINITY
        }
    }

    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.phase = self.wrap(self.phase + dt.max(0.0) as f64);
    }

    pub fn pose(&self, rotation_intensity: f32, float_intensity: f32) -> FloatPose {
        let t = (self.phase / 4.0 * self.speed as f64) as f32;
        let (sin, cos) = t.sin_cos();
        let ri = rotation_intensity.max(0.0);
        FloatPose {
            rotation: Vec3::new(
                cos / FLOAT_ROT_X_DIVISOR * ri,
                sin / FLOAT_ROT_Y_DIVISOR * ri,
                sin / FLOAT_ROT_Z_DIVISOR * ri,
            ),
            offset: Vec3::new(0.0, sin / FLOAT_Y_DIVISOR * float_intensity.max(0.0), 0.0),
        }
    }

    #[inline]
    fn wrap(&self, phase: f64) -> f64 {
        let period = self.period();
        if period.is_finite() {
            phase.rem_euclid(period)
        } else {
            phase
        }
    }
}

/// Eases the object toward the current presentation params.
///
/// A change of target switches to the snap profile until every channel is
/// within [`SNAP_EPSILON`]; after that the free profile carries the idle
/// motion. Retargeting mid-flight keeps the current velocity so motion
/// redirects smoothly.
pub struct TransitionAnimator {
    scale: SpringState,
    position: [SpringState; 3],
    rotation_intensity: SpringState,
    float_intensity: SpringState,
    target: PresentationParams,
    snapping: bool,
    float: FloatMotion,
    max_dt: f32,
}

impl TransitionAnimator {
    /// Start at rest on `params`; the first frame does not animate.
    pub fn new(params: PresentationParams, float: FloatMotion) -> Self {
        let p = params.object_position;
        Self {
            scale: SpringState::at(params.object_scale),
            position: [SpringState::at(p.x), SpringState::at(p.y), SpringState::at(p.z)],
            rotation_intensity: SpringState::at(params.rotation_intensity),
            float_intensity: SpringState::at(params.float_intensity),
            target: params,
            snapping: false,
            float,
            max_dt: MAX_FRAME_DT_SEC,
        }
    }

    pub fn with_max_dt(mut self, max_dt: f32) -> Self {
        self.max_dt = max_dt.max(0.0);
        self
    }

    /// Publish a new target. Repeating the current target changes nothing.
    pub fn set_target(&mut self, params: PresentationParams) {
        if params == self.target {
            return;
        }
        self.target = params;
        self.snapping = true;
    }

    pub fn tick(&mut self, dt: f32) -> AnimatedTransform {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        let profile = self.profile();
        let target = self.target;
        let goal_pos = target.object_position;
        let [px, py, pz] = &mut self.position;

        let channels = [
            (&mut self.scale, target.object_scale),
            (px, goal_pos.x),
            (py, goal_pos.y),
            (pz, goal_pos.z),
            (&mut self.rotation_intensity, target.rotation_intensity),
            (&mut self.float_intensity, target.float_intensity),
        ];
        let mut settled = true;
        for (state, goal) in channels {
            if self.snapping {
                state.restrain_toward(&profile, goal);
            }
            state.step(&profile, goal, dt);
            settled &= state.distance(goal) < SNAP_EPSILON;
        }

        if self.snapping && settled {
            self.settle();
            log::debug!("[anim] snap settled at scale {:.2}", self.scale.value);
        }
        self.float.advance(dt);
        self.transform()
    }

    #[inline]
    pub fn transform(&self) -> AnimatedTransform {
        AnimatedTransform {
            scale: self.scale.value,
            position: Vec3::new(
                self.position[0].value,
                self.position[1].value,
                self.position[2].value,
            ),
        }
    }

    pub fn float_pose(&self) -> FloatPose {
        self.float
            .pose(self.rotation_intensity.value, self.float_intensity.value)
    }

    #[inline]
    pub fn is_snapping(&self) -> bool {
        self.snapping
    }

    #[inline]
    pub fn profile(&self) -> SpringProfile {
        if self.snapping {
            SpringProfile::SNAP
        } else {
            SpringProfile::FREE
        }
    }

    #[inline]
    pub fn target(&self) -> PresentationParams {
        self.target
    }

    fn settle(&mut self) {
        let t = self.target;
        self.scale.settle(t.object_scale);
        self.position[0].settle(t.object_position.x);
        self.position[1].settle(t.object_position.y);
        self.position[2].settle(t.object_position.z);
        self.rotation_intensity.settle(t.rotation_intensity);
        self.float_intensity.settle(t.float_intensity);
        self.snapping = false;
    }
}
