//! Ambient and click audio cues.
//!
//! Playback itself belongs to the platform (an `<audio>` element on the web,
//! a recording mock in tests). The controller only decides *when* to play and
//! swallows every playback rejection: the view keeps working without sound.

use crate::constants::AMBIENT_VOLUME;

/// Failure reported by a media channel when the platform refuses playback,
/// typically an autoplay policy rejecting an unprompted `play()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AudioError {
    #[error("media playback blocked: {0}")]
    PlaybackBlocked(String),
}

/// Minimal surface of a platform media element.
pub trait MediaChannel {
    fn play(&mut self) -> Result<(), AudioError>;
    fn set_current_time(&mut self, seconds: f64);
    fn set_volume(&mut self, volume: f32);
    /// Whether the platform reports the channel as paused. Channels that
    /// cannot tell report `false` and leave tracking to the controller.
    fn paused(&self) -> bool {
        false
    }
}

/// Observable state of the ambient loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AudioChannel {
    pub is_playing: bool,
    pub volume: f32,
}

pub struct AudioCueController<A: MediaChannel, C: MediaChannel> {
    ambient: A,
    click: C,
    ambient_state: AudioChannel,
    ambient_volume: f32,
}

impl<A: MediaChannel, C: MediaChannel> AudioCueController<A, C> {
    pub fn new(ambient: A, click: C) -> Self {
        Self::with_ambient_volume(ambient, click, AMBIENT_VOLUME)
    }

    pub fn with_ambient_volume(ambient: A, click: C, ambient_volume: f32) -> Self {
        Self {
            ambient,
            click,
            ambient_state: AudioChannel::default(),
            ambient_volume: ambient_volume.clamp(0.0, 1.0),
        }
    }

    /// Start the looped ambient bed. No-op while it is already playing.
    pub fn start_ambience(&mut self) {
        if self.ambient_playing() {
            return;
        }
        self.ambient.set_volume(self.ambient_volume);
        self.ambient_state.volume = self.ambient_volume;
        // Rejections are dropped on purpose; the next interaction tries again.
        self.ambient_state.is_playing = self.ambient.play().is_ok();
    }

    /// Restart the click cue from the beginning, even mid-playback.
    pub fn play_click(&mut self) {
        self.click.set_current_time(0.0);
        _ = self.click.play();
    }

    pub fn ambient_state(&self) -> AudioChannel {
        AudioChannel {
            is_playing: self.ambient_playing(),
            volume: self.ambient_state.volume,
        }
    }

    pub fn ambient(&self) -> &A {
        &self.ambient
    }

    pub fn click(&self) -> &C {
        &self.click
    }

    #[inline]
    fn ambient_playing(&self) -> bool {
        self.ambient_state.is_playing && !self.ambient.paused()
    }
}
