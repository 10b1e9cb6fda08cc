//! Damped spring integration used by the animator and the drag rotation.
//!
//! Steps use the closed-form solution of `x'' = -k x - c x'` (unit mass), so a
//! large frame delta never destabilises the motion the way explicit Euler does.

use crate::constants::{FREE_DAMPING, FREE_STIFFNESS, SNAP_DAMPING, SNAP_STIFFNESS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringProfile {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringProfile {
    /// Low-stiffness profile for idle drift and drag follow.
    pub const FREE: SpringProfile = SpringProfile {
        stiffness: FREE_STIFFNESS,
        damping: FREE_DAMPING,
    };
    /// High-stiffness profile used right after a transition or a drag release.
    pub const SNAP: SpringProfile = SpringProfile {
        stiffness: SNAP_STIFFNESS,
        damping: SNAP_DAMPING,
    };

    #[inline]
    pub fn omega(&self) -> f32 {
        self.stiffness.max(0.0).sqrt()
    }

    /// 1.0 is critical damping; below oscillates, above creeps.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        let omega = self.omega();
        if omega <= 0.0 {
            return f32::INFINITY;
        }
        self.damping / (2.0 * omega)
    }
}

/// One scalar channel driven by a spring.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub value: f32,
    pub velocity: f32,
}

impl SpringState {
    pub fn at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
        }
    }

    /// Advance toward `target` by `dt` seconds.
    pub fn step(&mut self, profile: &SpringProfile, target: f32, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let omega = profile.omega();
        if omega <= 0.0 {
            return;
        }
        let zeta = profile.damping_ratio();
        let x0 = self.value - target;
        let v0 = self.velocity;

        let (x, v) = if (zeta - 1.0).abs() < 1e-3 {
            // critical: x = (x0 + (v0 + w x0) t) e^{-w t}
            let b = v0 + omega * x0;
            let e = (-omega * dt).exp();
            let x = (x0 + b * dt) * e;
            let v = (b - omega * (x0 + b * dt)) * e;
            (x, v)
        } else if zeta > 1.0 {
            let s = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - s);
            let r2 = -omega * (zeta + s);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let e1 = (r1 * dt).exp();
            let e2 = (r2 * dt).exp();
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        } else {
            let wd = omega * (1.0 - zeta * zeta).sqrt();
            let a = zeta * omega;
            let b = (v0 + a * x0) / wd;
            let e = (-a * dt).exp();
            let (sin, cos) = (wd * dt).sin_cos();
            let x = e * (x0 * cos + b * sin);
            let v = e * ((b * wd - a * x0) * cos - (x0 * wd + a * b) * sin);
            (x, v)
        };
        self.value = target + x;
        self.velocity = v;
    }

    /// Drop any velocity that would carry the channel away from or past
    /// `target`. With a critically (or over) damped profile the following
    /// step then approaches the target without overshoot.
    pub fn restrain_toward(&mut self, profile: &SpringProfile, target: f32) {
        let x0 = self.value - target;
        if x0 == 0.0 {
            self.velocity = 0.0;
            return;
        }
        let max_speed = profile.omega() * x0.abs();
        // velocity toward the target has the opposite sign of x0
        let toward = (-self.velocity * x0.signum()).clamp(0.0, max_speed);
        self.velocity = -toward * x0.signum();
    }

    /// Jump to `target` and stop.
    #[inline]
    pub fn settle(&mut self, target: f32) {
        self.value = target;
        self.velocity = 0.0;
    }

    #[inline]
    pub fn distance(&self, target: f32) -> f32 {
        (self.value - target).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_critically_damped() {
        assert!((SpringProfile::FREE.damping_ratio() - 1.0).abs() < 1e-3);
        assert!((SpringProfile::SNAP.damping_ratio() - 1.0).abs() < 1e-3);
        assert!(SpringProfile::SNAP.stiffness > SpringProfile::FREE.stiffness);
    }

    #[test]
    fn critical_step_converges_without_overshoot() {
        let mut s = SpringState::at(0.0);
        let mut prev = s.distance(1.0);
        for _ in 0..240 {
            s.step(&SpringProfile::SNAP, 1.0, 1.0 / 60.0);
            let d = s.distance(1.0);
            assert!(d <= prev + 1e-6);
            assert!(s.value <= 1.0 + 1e-6);
            prev = d;
        }
        assert!(prev < 1e-4);
    }

    #[test]
    fn underdamped_step_oscillates_and_settles() {
        let bouncy = SpringProfile {
            stiffness: 100.0,
            damping: 4.0,
        };
        let mut s = SpringState::at(0.0);
        let mut overshot = false;
        for _ in 0..600 {
            s.step(&bouncy, 1.0, 1.0 / 60.0);
            overshot |= s.value > 1.0;
        }
        assert!(overshot);
        assert!(s.distance(1.0) < 1e-3);
    }

    #[test]
    fn overdamped_step_approaches_target() {
        let heavy = SpringProfile {
            stiffness: 25.0,
            damping: 30.0,
        };
        let mut s = SpringState::at(2.0);
        for _ in 0..1200 {
            s.step(&heavy, 0.0, 1.0 / 60.0);
        }
        assert!(s.distance(0.0) < 1e-2);
        assert!(s.value >= 0.0);
    }

    #[test]
    fn restrain_removes_outward_and_excess_velocity() {
        let p = SpringProfile::SNAP;
        let mut away = SpringState {
            value: 1.0,
            velocity: 5.0,
        };
        away.restrain_toward(&p, 0.0);
        assert_eq!(away.velocity, 0.0);

        let mut fast = SpringState {
            value: 1.0,
            velocity: -1000.0,
        };
        fast.restrain_toward(&p, 0.0);
        assert!((fast.velocity + p.omega()).abs() < 1e-4);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut s = SpringState {
            value: 0.3,
            velocity: 1.0,
        };
        s.step(&SpringProfile::FREE, 1.0, 0.0);
        assert_eq!(s.value, 0.3);
        assert_eq!(s.velocity, 1.0);
    }
}
