use glam::Vec3;

// Scene, camera and DOM constants for the web front-end. Pure values only so
// host tests can include this file directly.

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const CAMERA_FOV_DEG: f32 = 30.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Background and fog (#050505)
pub const BACKGROUND_RGB: [f32; 3] = [0.0196, 0.0196, 0.0196];
pub const FOG_NEAR: f32 = 5.0;
pub const FOG_FAR: f32 = 20.0;

// Lights: position, range, color, intensity
pub const RIM_LIGHT_RIGHT: Vec3 = Vec3::new(5.0, 0.0, -5.0);
pub const RIM_LIGHT_LEFT: Vec3 = Vec3::new(-5.0, 0.0, -5.0);
pub const RIM_LIGHT_RANGE: f32 = 15.0;
pub const RIM_LIGHT_RGB: [f32; 3] = [1.0, 0.0, 0.0];
pub const RIM_LIGHT_INTENSITY: f32 = 30.0;
pub const KEY_LIGHT: Vec3 = Vec3::new(0.0, 5.0, 2.0);
pub const KEY_LIGHT_RANGE: f32 = 20.0;
pub const KEY_LIGHT_RGB: [f32; 3] = [0.8, 0.933, 1.0]; // #cceeff
pub const KEY_LIGHT_INTENSITY: f32 = 10.0;

// Post-processing
pub const BLOOM_THRESHOLD: f32 = 0.2;
pub const BLOOM_STRENGTH: f32 = 0.8;
pub const NOISE_OPACITY: f32 = 0.06;
pub const VIGNETTE_OFFSET: f32 = 0.1;
pub const VIGNETTE_DARKNESS: f32 = 1.1;

// Picking: bounding sphere radius in model units (scaled by the object scale)
pub const PICK_RADIUS_LOCAL: f32 = 0.45;

// DOM
pub const ROOT_ID: &str = "showcase-root";
pub const CANVAS_ID: &str = "app-canvas";
pub const UI_LAYER_ID: &str = "showcase-ui";
pub const INSPECT_BUTTON_ID: &str = "inspect-button";
pub const EXIT_BUTTON_ID: &str = "exit-button";
pub const INSPECTING_CLASS: &str = "inspecting";

// Audio assets
pub const AMBIENT_AUDIO_ID: &str = "ambient-audio";
pub const CLICK_AUDIO_ID: &str = "click-audio";
pub const AMBIENT_AUDIO_SRC: &str = "./bg.mp3";
pub const CLICK_AUDIO_SRC: &str = "./click.mp3";
