//! Math utilities and types
//!
//! Provides the 2D math types used by the simulation core. Screen space is
//! y-down: larger `y` values are further toward the bottom of the room.

pub use nalgebra::{Rotation2, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D rotation type
pub type Rot2 = Rotation2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Pi / 4
    pub const QUARTER_PI: f32 = PI * 0.25;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Lengths below this are treated as zero when normalizing
    pub const NORMALIZE_EPSILON: f32 = 1.0e-6;

    /// Normalize a vector, returning `None` for (near) zero-length input
    pub fn try_normalize(v: Vec2) -> Option<Vec2> {
        v.try_normalize(NORMALIZE_EPSILON)
    }

    /// Normalize a vector, returning the zero vector for (near) zero-length input
    pub fn normalize_or_zero(v: Vec2) -> Vec2 {
        try_normalize(v).unwrap_or_else(Vec2::zeros)
    }

    /// Wrap an angle into `[0, 2π)`
    pub fn wrap_angle(radians: f32) -> f32 {
        let wrapped = radians.rem_euclid(constants::TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if wrapped >= constants::TAU {
            0.0
        } else {
            wrapped
        }
    }

    /// Signed difference `a - b` wrapped into `(-π, π]`
    pub fn angle_difference(a: f32, b: f32) -> f32 {
        let diff = wrap_angle(a - b);
        if diff > constants::PI {
            diff - constants::TAU
        } else {
            diff
        }
    }
}
