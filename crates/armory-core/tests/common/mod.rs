// Recording stand-in for a platform media element.

#![allow(dead_code)]
use armory_core::{AudioCueController, AudioError, MediaChannel};

#[derive(Debug, Default)]
pub struct RecordingChannel {
    pub play_calls: u32,
    pub seeks: Vec<f64>,
    pub volume: Option<f32>,
    pub reject: bool,
    pub playing: bool,
}

impl RecordingChannel {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }
}

impl MediaChannel for RecordingChannel {
    fn play(&mut self) -> Result<(), AudioError> {
        self.play_calls += 1;
        if self.reject {
            return Err(AudioError::PlaybackBlocked("autoplay policy".into()));
        }
        self.playing = true;
        Ok(())
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.seeks.push(seconds);
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = Some(volume);
    }

    fn paused(&self) -> bool {
        !self.playing
    }
}

pub type Cues = AudioCueController<RecordingChannel, RecordingChannel>;

pub fn cues() -> Cues {
    AudioCueController::new(RecordingChannel::default(), RecordingChannel::default())
}
