//! # Abyss Sim
//!
//! Simulation core of a 2D underwater action game: an entity-component
//! store and the per-frame collision pipeline that runs over it.
//!
//! ## Features
//!
//! - **ECS Store**: generational entity handles with one dense table per component kind
//! - **Collision Detection**: box, circle and triangle-mesh tests over fixed pair passes
//! - **Collision Routing**: category bitsets dispatched through a route table
//! - **Resolvers**: push-out, momentum exchange, damage, debuffs, splash damage, doors
//! - **Configuration**: gameplay tuning loaded from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use abyss_sim::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SimulationConfig::load_or_default("abyss.toml")?;
//!     config.validate()?;
//!     abyss_sim::foundation::logging::init_with_filter(&config.log_filter);
//!
//!     let mut world = World::new();
//!     let mut state = SimulationState::new();
//!     let mut collisions = CollisionSystem::new().with_config(config.collision);
//!     collisions.init(Box::new(NoopHooks));
//!
//!     loop {
//!         // Movement, AI and the other systems run here
//!         collisions.step(&mut world, &mut state, 16.0);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core simulation state and tuning
pub mod core;

pub mod config;
pub mod foundation;
pub mod ecs;
pub mod physics;

/// Common imports for simulation users
pub mod prelude {
    pub use crate::{
        core::{CollisionConfig, Config, ConfigError, FreezeFlags, Loadout, SimulationConfig, SimulationState},
        ecs::{components::*, Component, EcsError, Entity, System, World},
        ecs::systems::CollisionSystem,
        foundation::math::Vec2,
        physics::{Category, CollisionHooks, CollisionMesh, NoopHooks},
    };
}
