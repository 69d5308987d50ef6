//! Entity-Component-System implementation
//!
//! A handle-based store: [`Entity`] ids from a generational arena, one
//! [`ComponentTable`] per component kind, and a [`World`] owning them all.

pub mod world;
pub mod entity;
pub mod component;
pub mod storage;
pub mod system;
pub mod components;
pub mod systems;

pub use world::World;
pub use entity::{Entity, EntityAllocator, EntityKey};
pub use component::Component;
pub use storage::{ComponentTable, EcsError, ErasedTable};
pub use system::System;
