//! Damped spring used to make the hero glow trail the pointer.

use serde::Deserialize;

use crate::state::PointerOffset;

/// Largest integration step. Frames longer than this are split so the
/// spring stays stable on slow devices and after a backgrounded tab resumes.
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Distance and speed below which the spring snaps onto its target.
const REST_EPSILON: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
            mass: 0.6,
        }
    }
}

impl SpringConfig {
    /// `damping / (2 * sqrt(stiffness * mass))`; at or above 1 the spring
    /// reaches its target without overshooting.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, value) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("mass", self.mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{} must be a positive number, got {}", name, value));
            }
        }
        let ratio = self.damping_ratio();
        if ratio < 1.0 {
            return Err(format!(
                "damping ratio must be at least 1 so the glow cannot overshoot, got {:.3}",
                ratio
            ));
        }
        Ok(())
    }
}

/// One-dimensional spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            target: position,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Jump onto the target.
    pub fn snap(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds. Returns `true` while still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_at_rest() || dt <= 0.0 {
            return !self.is_at_rest();
        }

        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0);
        let h = dt / substeps;
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;

        for _ in 0..substeps as u32 {
            let accel = (-stiffness * (self.position - self.target) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }

        if (self.position - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON {
            self.position = self.target;
            self.velocity = 0.0;
        }
        !self.is_at_rest()
    }
}

/// Two springs moving a point toward a pointer target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring2D {
    x: Spring,
    y: Spring,
}

impl Spring2D {
    pub fn new(config: SpringConfig, origin: PointerOffset) -> Self {
        Self {
            x: Spring::new(config, origin.x),
            y: Spring::new(config, origin.y),
        }
    }

    pub fn aim(&mut self, target: PointerOffset) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn position(&self) -> PointerOffset {
        PointerOffset::new(self.x.position(), self.y.position())
    }

    pub fn snap(&mut self) {
        self.x.snap();
        self.y.snap();
    }

    /// Returns `true` while either axis is still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        moving_x || moving_y
    }
}
