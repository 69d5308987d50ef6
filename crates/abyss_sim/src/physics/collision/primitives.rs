//! Primitive collision shapes and overlap tests
//!
//! Every entity with a [`Position`] has an implicit axis-aligned box: its
//! centre is the translation and its size is the absolute scale. Circle
//! tests use half of the larger box side as the radius. Room space is
//! y-down, so a box's `top` is its smallest `y`.

use crate::ecs::components::Position;
use crate::foundation::math::Vec2;

/// Axis-aligned box edges in room space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x
    pub left: f32,
    /// Largest x
    pub right: f32,
    /// Smallest y (y grows downward)
    pub top: f32,
    /// Largest y
    pub bottom: f32,
}

impl Bounds {
    /// Box centred on `center` with the given half extents
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            left: center.x - half_extents.x,
            right: center.x + half_extents.x,
            top: center.y - half_extents.y,
            bottom: center.y + half_extents.y,
        }
    }

    /// Box covered by an entity's position
    pub fn of(position: &Position) -> Self {
        Self::from_center(position.position, position.half_extents())
    }

    /// Centre of the box
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Whether two boxes overlap with positive area
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right && other.left < self.right && self.top < other.bottom && other.top < self.bottom
    }

    /// Whether a point lies inside the box (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.top..=self.bottom).contains(&point.y)
    }

    /// Closest point of the box to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x.clamp(self.left, self.right), point.y.clamp(self.top, self.bottom))
    }

    /// The four corners, clockwise from top-left
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left, self.top),
            Vec2::new(self.right, self.top),
            Vec2::new(self.right, self.bottom),
            Vec2::new(self.left, self.bottom),
        ]
    }
}

/// A 2D triangle in room space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex
    pub v0: Vec2,
    /// Second vertex
    pub v1: Vec2,
    /// Third vertex
    pub v2: Vec2,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        Self { v0, v1, v2 }
    }

    /// Whether `point` lies inside the triangle or on its edges
    ///
    /// Works for either winding: the point is inside when the three edge
    /// cross products do not disagree in sign.
    pub fn contains(&self, point: Vec2) -> bool {
        let d0 = edge_side(self.v0, self.v1, point);
        let d1 = edge_side(self.v1, self.v2, point);
        let d2 = edge_side(self.v2, self.v0, point);

        let has_negative = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_positive = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
        !(has_negative && has_positive)
    }

    /// Whether the triangle and a box share any point (edges inclusive)
    ///
    /// Separating axis test over the two box axes and the three edge
    /// normals. Catches edges crossing each other with no vertex of either
    /// shape inside the other, e.g. a thin wall passing through the triangle.
    pub fn overlaps_bounds(&self, bounds: &Bounds) -> bool {
        let vertices = [self.v0, self.v1, self.v2];
        let corners = bounds.corners();
        let edge_normal = |a: Vec2, b: Vec2| Vec2::new(a.y - b.y, b.x - a.x);
        let axes = [
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            edge_normal(self.v0, self.v1),
            edge_normal(self.v1, self.v2),
            edge_normal(self.v2, self.v0),
        ];

        axes.iter().all(|axis| {
            let (tri_min, tri_max) = project(&vertices, axis);
            let (box_min, box_max) = project(&corners, axis);
            tri_min <= box_max && box_min <= tri_max
        })
    }
}

fn edge_side(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b - a).perp(&(p - a))
}

/// Interval covered by `points` along `axis`
fn project(points: &[Vec2], axis: &Vec2) -> (f32, f32) {
    points
        .iter()
        .map(|p| p.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| (lo.min(d), hi.max(d)))
}

/// Whether the boxes of two entities overlap on both axes
pub fn box_collides(a: &Position, b: &Position) -> bool {
    Bounds::of(a).overlaps(&Bounds::of(b))
}

/// Whether the bounding circles of two entities overlap
pub fn circle_collides(a: &Position, b: &Position) -> bool {
    let radius_sum = a.radius() + b.radius();
    (a.position - b.position).norm_squared() < radius_sum * radius_sum
}

/// Whether a circle touches an entity's box
///
/// A circle whose centre is inside the box always collides.
pub fn circle_box_collides(center: Vec2, radius: f32, other: &Position) -> bool {
    let bounds = Bounds::of(other);
    if bounds.contains(center) {
        return true;
    }
    (bounds.closest_point(center) - center).norm_squared() < radius * radius
}
