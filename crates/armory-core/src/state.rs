//! View mode and the presentation values derived from it.
//!
//! `ViewStateMachine` is the only writer of the mode. Everything the renderer
//! and the UI need is a pure lookup on that mode (`PresentationParams`), so
//! consumers poll `current_params()` or watch `revision()` for changes.

use crate::audio::{AudioCueController, MediaChannel};
use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Presenting,
    Inspecting,
}

/// Transition requests understood by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewEvent {
    /// Object click or the Inspect button. Toggles in both directions.
    ToggleInspect,
    /// Exit button or Escape. Only meaningful while inspecting.
    Exit,
}

impl ViewEvent {
    pub fn label(self) -> &'static str {
        match self {
            ViewEvent::ToggleInspect => "toggle",
            ViewEvent::Exit => "exit",
        }
    }
}

impl ViewMode {
    /// Next mode for `event`, or `None` when the request is a no-op.
    #[inline]
    pub fn next(self, event: ViewEvent) -> Option<ViewMode> {
        match (self, event) {
            (ViewMode::Presenting, ViewEvent::ToggleInspect) => Some(ViewMode::Inspecting),
            (ViewMode::Inspecting, ViewEvent::ToggleInspect) => Some(ViewMode::Presenting),
            (ViewMode::Inspecting, ViewEvent::Exit) => Some(ViewMode::Presenting),
            (ViewMode::Presenting, ViewEvent::Exit) => None,
        }
    }

    #[inline]
    pub fn params(self) -> PresentationParams {
        match self {
            ViewMode::Presenting => PresentationParams::PRESENTING,
            ViewMode::Inspecting => PresentationParams::INSPECTING,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Presenting => "presenting",
            ViewMode::Inspecting => "inspecting",
        }
    }
}

/// Presentation values for one mode. UI opacity is either 0.0 or 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationParams {
    pub object_scale: f32,
    pub object_position: Vec3,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    pub ui_opacity: f32,
    pub ui_interactive: bool,
    pub orbit_enabled: bool,
}

impl PresentationParams {
    pub const PRESENTING: PresentationParams = PresentationParams {
        object_scale: PRESENTING_SCALE,
        object_position: PRESENTING_POSITION,
        rotation_intensity: PRESENTING_ROTATION_INTENSITY,
        float_intensity: PRESENTING_FLOAT_INTENSITY,
        ui_opacity: 1.0,
        ui_interactive: true,
        orbit_enabled: true,
    };

    pub const INSPECTING: PresentationParams = PresentationParams {
        object_scale: INSPECTING_SCALE,
        object_position: INSPECTING_POSITION,
        rotation_intensity: INSPECTING_ROTATION_INTENSITY,
        float_intensity: INSPECTING_FLOAT_INTENSITY,
        ui_opacity: 0.0,
        ui_interactive: false,
        orbit_enabled: true,
    };
}

#[derive(Clone, Debug, Default)]
pub struct ViewStateMachine {
    mode: ViewMode,
    revision: u64,
}

impl ViewStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `event`. Accepted transitions play the click cue and bump the
    /// revision; no-op requests leave everything untouched.
    pub fn transition<A: MediaChannel, C: MediaChannel>(
        &mut self,
        event: ViewEvent,
        audio: &mut AudioCueController<A, C>,
    ) -> ViewMode {
        match self.mode.next(event) {
            Some(next) => {
                log::info!(
                    "[view] {} -> {} ({})",
                    self.mode.label(),
                    next.label(),
                    event.label()
                );
                self.mode = next;
                self.revision = self.revision.wrapping_add(1);
                audio.play_click();
            }
            None => {
                log::debug!("[view] {} ignored while {}", event.label(), self.mode.label());
            }
        }
        self.mode
    }

    #[inline]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[inline]
    pub fn current_params(&self) -> PresentationParams {
        self.mode.params()
    }

    /// Number of accepted transitions so far.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
