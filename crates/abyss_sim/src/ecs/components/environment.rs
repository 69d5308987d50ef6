//! Level geometry and pickups
//!
//! Walls, doors and room transitions are placed by the level system; the
//! collision core only reads them, except for spawning transition triggers.

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// A solid wall that blocks movement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveWall;

impl Component for ActiveWall {}

/// A door leading to another room
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveDoor;

impl Component for ActiveDoor {}

/// Destination of a door
#[derive(Debug, Clone, PartialEq)]
pub struct DoorConnection {
    /// Identifier of the room behind the door
    pub target_room: u32,

    /// Where the player appears relative to the target room's entry door
    pub spawn_offset: Vec2,
}

impl Component for DoorConnection {}

/// A wall-like obstacle with an oxygen pool that can be smashed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakable;

impl Component for Breakable {}

/// One-shot trigger consumed by the level system to change rooms
#[derive(Debug, Clone, PartialEq)]
pub struct RoomTransition {
    /// Door the player walked through
    pub door_connection: DoorConnection,
}

impl Component for RoomTransition {}

/// Something the player can touch for an effect (e.g. an oxygen vent)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interactable;

impl Component for Interactable {}

/// A pickup lying in the room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumable {
    /// What the pickup refills
    pub kind: super::ConsumableKind,

    /// How much it refills
    pub amount: u32,
}

impl Component for Consumable {}
