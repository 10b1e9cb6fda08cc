//! Drag-to-rotate presentation controls.
//!
//! A global drag tilts/turns the object away from its rest rotation; on
//! release it springs back. Positions are viewport fractions in \[0, 1\].

use crate::constants::*;
use crate::spring::{SpringProfile, SpringState};
use glam::Vec2;

/// What a finished press turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Click,
    Drag,
}

#[derive(Clone, Copy, Debug)]
struct DragGesture {
    origin: Vec2,
    max_travel: f32,
}

pub struct PresentationControls {
    pitch: SpringState,
    yaw: SpringState,
    rest: Vec2,
    target: Vec2,
    drag: Option<DragGesture>,
    enabled: bool,
}

impl Default for PresentationControls {
    fn default() -> Self {
        Self::new(REST_ROTATION)
    }
}

impl PresentationControls {
    pub fn new(rest: Vec2) -> Self {
        Self {
            pitch: SpringState::at(rest.x),
            yaw: SpringState::at(rest.y),
            rest,
            target: rest,
            drag: None,
            enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.drag = None;
            self.target = self.rest;
        }
        self.enabled = enabled;
    }

    pub fn press(&mut self, pos: Vec2) {
        self.drag = Some(DragGesture {
            origin: pos,
            max_travel: 0.0,
        });
    }

    pub fn move_to(&mut self, pos: Vec2) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta = pos - drag.origin;
        drag.max_travel = drag.max_travel.max(delta.length());
        if !self.enabled || drag.max_travel <= DRAG_CLICK_THRESHOLD {
            return;
        }
        let pitch = (self.rest.x + delta.y * DRAG_ROTATION_SPAN).clamp(-POLAR_LIMIT, POLAR_LIMIT);
        let yaw = self.rest.y + delta.x * DRAG_ROTATION_SPAN;
        self.target = Vec2::new(pitch, yaw);
    }

    /// End the press. Returns `None` if no press was in progress.
    pub fn release(&mut self) -> Option<Gesture> {
        let drag = self.drag.take()?;
        self.target = self.rest;
        if drag.max_travel > DRAG_CLICK_THRESHOLD {
            Some(Gesture::Drag)
        } else {
            Some(Gesture::Click)
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Follow the drag loosely; snap back to rest once released.
    pub fn tick(&mut self, dt: f32) -> Vec2 {
        let profile = if self.drag.is_some() {
            SpringProfile::FREE
        } else {
            SpringProfile::SNAP
        };
        if self.drag.is_none() {
            self.pitch.restrain_toward(&profile, self.target.x);
            self.yaw.restrain_toward(&profile, self.target.y);
        }
        self.pitch.step(&profile, self.target.x, dt);
        self.yaw.step(&profile, self.target.y, dt);
        if self.drag.is_none()
            && self.pitch.distance(self.target.x) < SNAP_EPSILON
            && self.yaw.distance(self.target.y) < SNAP_EPSILON
        {
            self.pitch.settle(self.target.x);
            self.yaw.settle(self.target.y);
        }
        self.rotation()
    }

    /// Current (pitch, yaw) in radians.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        Vec2::new(self.pitch.value, self.yaw.value)
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }
}
