//! Spatial predicates used by collision detection
//!
//! # Module Organization
//!
//! - [`primitives`] - Boxes, circles and triangles derived from [`Position`](crate::ecs::components::Position)
//! - [`mesh`] - Model-space triangle meshes transformed on demand
//!
//! Every predicate is pure; callers fetch the components and pass them in.

pub mod primitives;
pub mod mesh;

pub use primitives::{box_collides, circle_box_collides, circle_collides, Bounds, Triangle};
pub use mesh::{mesh_collides, CollisionMesh, WorldSpaceCollisionMesh};
