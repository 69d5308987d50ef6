//! Movement components for dynamic entities
//!
//! Velocity and acceleration are integrated by the external physics step.
//! Collision resolution writes to them directly (zeroing, reflecting or
//! blending) as part of its response.

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// Linear motion state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Motion {
    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Linear acceleration in units per second squared
    pub acceleration: Vec2,
}

impl Component for Motion {}

impl Motion {
    /// Create a motion with an initial velocity
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            acceleration: Vec2::zeros(),
        }
    }

    /// Builder pattern: set acceleration
    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }
}

/// Mass of a body taking part in momentum-conserving collisions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    /// Mass in arbitrary units (must be positive)
    pub mass: f32,
}

impl Component for Mass {}

impl Mass {
    /// Create a mass component
    pub fn new(mass: f32) -> Self {
        Self { mass }
    }
}
