use crate::constants::{AMBIENT_VOLUME, FLOAT_SPEED, MAX_FRAME_DT_SEC, REST_ROTATION};
use glam::Vec2;

/// Start-up settings for a [`crate::Showcase`].
#[derive(Clone, Debug)]
pub struct ShowcaseConfig {
    /// Seed for the float phase offset.
    pub float_seed: u64,
    pub float_speed: f32,
    pub ambient_volume: f32,
    /// Longest frame step the animation will integrate, in seconds.
    pub max_frame_dt: f32,
    /// (pitch, yaw) the drag rotation returns to.
    pub rest_rotation: Vec2,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            float_seed: 42,
            float_speed: FLOAT_SPEED,
            ambient_volume: AMBIENT_VOLUME,
            max_frame_dt: MAX_FRAME_DT_SEC,
            rest_rotation: REST_ROTATION,
        }
    }
}
