//! Physics module for collision detection and response
//!
//! The pipeline each frame is detection ([`CollisionDetector`]) into a
//! [`CollisionQueue`], then routing ([`CollisionRouter`]) of every record to
//! the resolvers in [`resolve`]. [`CollisionSystem`](crate::ecs::systems::CollisionSystem)
//! drives both.

pub mod categories;
pub mod collision;
pub mod collision_system;
pub mod hooks;
pub mod resolve;
pub mod router;

#[cfg(test)]
mod tests;

pub use categories::Category;
pub use collision::{
    box_collides,
    circle_box_collides,
    circle_collides,
    mesh_collides,
    Bounds,
    CollisionMesh,
    Triangle,
    WorldSpaceCollisionMesh,
};
pub use collision_system::{Collision, CollisionDetector, CollisionQueue};
pub use hooks::{CollisionHooks, NoopHooks, RecordingHooks};
pub use resolve::ResolveContext;
pub use router::{CollisionRouter, RoutedCollision};
