//! Position component for the ECS system
//!
//! Pure data component describing where an entity sits in the room. The
//! absolute scale doubles as the full width and height of the entity's
//! axis-aligned collision box; the sign of `scale.x` encodes which way the
//! entity faces.

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// World-space placement of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Centre of the entity in room coordinates (y-down)
    pub position: Vec2,

    /// Rotation in radians
    pub angle: f32,

    /// Signed size; `abs(scale)` is the box width/height
    pub scale: Vec2,
}

impl Component for Position {}

impl Default for Position {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            angle: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Position {
    /// Create a position with the given centre and size
    pub fn new(position: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            angle: 0.0,
            scale,
        }
    }

    /// Builder pattern: set rotation
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Half of the absolute box size on each axis
    pub fn half_extents(&self) -> Vec2 {
        self.scale.abs() * 0.5
    }

    /// Radius used by circle tests: half of the larger box side
    pub fn radius(&self) -> f32 {
        let size = self.scale.abs();
        size.x.max(size.y) * 0.5
    }
}
