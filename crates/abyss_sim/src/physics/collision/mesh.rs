//! Collision mesh representations
//!
//! The player's outline is too irregular for a box, so it carries a
//! triangle mesh stored in MODEL SPACE and transformed on demand by the
//! owning entity's [`Position`] (scale, then rotate, then translate).

use super::primitives::{Bounds, Triangle};
use crate::ecs::components::Position;
use crate::ecs::Component;
use crate::foundation::math::{Rot2, Vec2};

/// Triangle mesh in model space, attached to the player's mesh sub-entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollisionMesh {
    /// Model-space vertices
    pub vertices: Vec<Vec2>,
    /// Triangle list indices into `vertices`
    pub indices: Vec<u32>,
}

impl Component for CollisionMesh {}

impl CollisionMesh {
    /// Creates a mesh from model-space vertices and triangle indices
    pub fn new(vertices: Vec<Vec2>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Transform this mesh to world space using an entity's placement
    pub fn to_world_space(&self, position: &Position) -> WorldSpaceCollisionMesh {
        let rotation = Rot2::new(position.angle);
        let vertices: Vec<Vec2> = self
            .vertices
            .iter()
            .map(|v| rotation * v.component_mul(&position.scale) + position.position)
            .collect();

        let mut triangles = Vec::with_capacity(self.indices.len() / 3);
        for chunk in self.indices.chunks_exact(3) {
            let corner = |i: u32| vertices.get(i as usize).copied();
            match (corner(chunk[0]), corner(chunk[1]), corner(chunk[2])) {
                (Some(v0), Some(v1), Some(v2)) => triangles.push(Triangle::new(v0, v1, v2)),
                _ => log::warn!("collision mesh index out of range in {:?}", chunk),
            }
        }

        WorldSpaceCollisionMesh { vertices, triangles }
    }
}

/// World-space collision mesh, rebuilt for every test
#[derive(Debug)]
pub struct WorldSpaceCollisionMesh {
    /// Vertices in world space
    pub vertices: Vec<Vec2>,
    /// Triangles in world space
    pub triangles: Vec<Triangle>,
}

impl WorldSpaceCollisionMesh {
    /// Whether the mesh touches a box
    ///
    /// True if any mesh vertex lies inside the box or any triangle overlaps
    /// it. Vertices not referenced by a triangle still count.
    pub fn intersects_bounds(&self, bounds: &Bounds) -> bool {
        self.vertices.iter().any(|&v| bounds.contains(v))
            || self.triangles.iter().any(|tri| tri.overlaps_bounds(bounds))
    }
}

/// Fine test of a mesh entity against another entity's box
pub fn mesh_collides(mesh: &CollisionMesh, mesh_position: &Position, other: &Position) -> bool {
    mesh.to_world_space(mesh_position).intersects_bounds(&Bounds::of(other))
}
