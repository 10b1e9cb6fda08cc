pub mod animator;
pub mod audio;
pub mod config;
pub mod constants;
pub mod input;
pub mod orbit;
pub mod showcase;
pub mod spring;
pub mod state;

pub use animator::*;
pub use audio::*;
pub use config::*;
pub use input::*;
pub use orbit::*;
pub use showcase::*;
pub use spring::*;
pub use state::*;
