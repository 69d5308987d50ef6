//! ECS Components module
//!
//! Plain-data components for the simulation core. Most category components
//! are zero-sized markers; an entity's role is the set of tables it is in.

pub mod transform;
pub mod movement;
pub mod player;
pub mod enemy;
pub mod environment;
pub mod oxygen;
pub mod status;
pub mod audio;
pub mod renderable;

pub use transform::Position;
pub use movement::{Motion, Mass};
pub use player::{
    ConsumableKind, DeathTimer, Inventory, Player, PlayerProjectile, ProjectileKind,
};
pub use enemy::{ActsAsProjectile, Boss, BossKind, Deadly, EnemyProjectile, ModifyOxygenCd, TracksPlayer, Wander};
pub use environment::{ActiveDoor, ActiveWall, Breakable, Consumable, DoorConnection, Interactable, RoomTransition};
pub use oxygen::{AreaOfEffect, DamageIndicator, Oxygen, OxygenModifier};
pub use status::{Knockback, Stun, Stunned};
pub use audio::{Sound, SoundId};
pub use renderable::Renderable;
