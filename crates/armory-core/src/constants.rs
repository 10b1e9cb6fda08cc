use glam::{Vec2, Vec3};

// Shared tuning constants for the showcase controller. Values are plain
// numbers so the web front-end and the tests read the same source.

// Presenting (idle) presentation
pub const PRESENTING_SCALE: f32 = 2.5;
pub const PRESENTING_POSITION: Vec3 = Vec3::new(0.0, -1.0, 0.0);
pub const PRESENTING_ROTATION_INTENSITY: f32 = 0.2;
pub const PRESENTING_FLOAT_INTENSITY: f32 = 0.5;

// Inspecting (close-up) presentation
pub const INSPECTING_SCALE: f32 = 4.5;
pub const INSPECTING_POSITION: Vec3 = Vec3::ZERO;
pub const INSPECTING_ROTATION_INTENSITY: f32 = 0.0;
pub const INSPECTING_FLOAT_INTENSITY: f32 = 0.0;

// Spring presets (unit mass, critically damped: damping = 2 * sqrt(stiffness))
pub const FREE_STIFFNESS: f32 = 250.0; // idle drift / drag follow
pub const FREE_DAMPING: f32 = 31.622_776;
pub const SNAP_STIFFNESS: f32 = 375.0; // post-transition snap / return to rest
pub const SNAP_DAMPING: f32 = 38.729_835;

// Snap ends once every animated channel is this close to its target
pub const SNAP_EPSILON: f32 = 1e-3;

// Frame step clamp (seconds); guards against jumps after a stalled tab
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Float motion
pub const FLOAT_SPEED: f32 = 2.0;
pub const FLOAT_OFFSET_RANGE: f32 = 10_000.0; // random phase offset, seconds
pub const FLOAT_ROT_X_DIVISOR: f32 = 8.0;
pub const FLOAT_ROT_Y_DIVISOR: f32 = 8.0;
pub const FLOAT_ROT_Z_DIVISOR: f32 = 20.0;
pub const FLOAT_Y_DIVISOR: f32 = 10.0;

// Audio
pub const AMBIENT_VOLUME: f32 = 0.3; // fraction of max

// Presentation controls (drag rotation). Rotations are (pitch, yaw) radians.
pub const REST_ROTATION: Vec2 = Vec2::new(0.0, -std::f32::consts::FRAC_PI_4);
pub const POLAR_LIMIT: f32 = std::f32::consts::FRAC_PI_3;
pub const DRAG_ROTATION_SPAN: f32 = std::f32::consts::PI; // radians per full viewport of travel
pub const DRAG_CLICK_THRESHOLD: f32 = 0.01; // viewport fraction; above this a press is a drag
