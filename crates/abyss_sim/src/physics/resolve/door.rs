//! Room transitions

use super::{gated_component_missing, ResolveContext};
use crate::core::FreezeFlags;
use crate::ecs::components::{RoomTransition, SoundId};
use crate::ecs::Entity;

impl ResolveContext<'_> {
    /// The player walked into a door
    ///
    /// Spawns a one-shot [`RoomTransition`] for the level system, freezes
    /// the simulation until the new room is loaded and reloads the equipped
    /// projectile so it does not carry over mid-flight. Further door contacts
    /// while a transition is pending are ignored.
    pub fn resolve_door_player(&mut self, door: Entity, player: Entity) {
        if self.state.is_room_transitioning() {
            return;
        }
        let Some(door_connection) = self.world.door_connections.get(door).cloned() else {
            gated_component_missing(self.world, door, "DoorConnection");
            return;
        };

        let transition = self.world.create_entity();
        log::info!(
            "{:?} entered door {:?}, moving to room {}",
            player,
            door,
            door_connection.target_room
        );
        self.world.room_transitions.insert_or_replace(transition, RoomTransition { door_connection });
        self.state.freeze.insert(FreezeFlags::ROOM_TRANSITION);
        self.world.request_sound(transition, SoundId::Door);

        if let Some(projectile) = self.state.equipped_projectile() {
            self.reload(projectile);
        }
    }
}
