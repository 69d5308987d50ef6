//! Damage exchange between the player, enemies, projectiles and pickups

use super::ResolveContext;
use crate::ecs::components::{ProjectileKind, SoundId};
use crate::ecs::Entity;

impl ResolveContext<'_> {
    /// An enemy touched the player
    pub fn resolve_player_enemy(&mut self, player: Entity, enemy: Entity) {
        self.handle_debuffs(player, enemy);
        self.add_damage_indicator(player);
        self.modify_oxygen(player, enemy);
    }

    /// An enemy projectile hit the player and is used up
    pub fn resolve_player_enemy_projectile(&mut self, player: Entity, enemy_projectile: Entity) {
        if !self.world.enemy_projectiles.has(enemy_projectile) {
            return;
        }
        self.handle_debuffs(player, enemy_projectile);
        self.modify_oxygen(player, enemy_projectile);
        self.destroy(enemy_projectile);
    }

    /// The player walked over a pickup
    pub fn resolve_player_consumable(&mut self, player: Entity, consumable: Entity) {
        let Some(pickup) = self.world.consumables.get(consumable).copied() else {
            return;
        };
        let Some(inventory) = self.world.inventories.get_mut(player) else {
            return;
        };
        inventory.add(pickup.kind, pickup.amount);
        log::debug!("{:?} picked up {} x {:?}", player, pickup.amount, pickup.kind);

        self.world.request_sound(player, SoundId::Pickup);
        self.hooks.on_inventory_changed(player, pickup.kind);
        self.destroy(consumable);
    }

    /// The player touched an interactable such as an oxygen vent
    pub fn resolve_player_interactable(&mut self, player: Entity, interactable: Entity) {
        if self.world.death_timers.has(player) {
            return;
        }
        self.modify_oxygen(player, interactable);
    }

    /// A player projectile hit an enemy
    ///
    /// Loaded projectiles are spent and deal nothing, so the second record of
    /// a symmetric pair does not hit twice.
    pub fn resolve_enemy_player_projectile(&mut self, enemy: Entity, projectile: Entity) {
        let Some(component) = self.world.player_projectiles.get(projectile).copied() else {
            return;
        };
        if component.is_loaded || !self.world.motions.has(projectile) {
            return;
        }

        self.modify_oxygen(enemy, projectile);

        match component.kind {
            ProjectileKind::Harpoon => {}
            ProjectileKind::Net => self.handle_debuffs(enemy, projectile),
            ProjectileKind::Concussive => {
                // Crates and anchored enemies shrug off the shockwave
                if !self.world.active_walls.has(enemy) && self.world.motions.has(enemy) {
                    self.handle_debuffs(enemy, projectile);
                }
            }
            ProjectileKind::Torpedo => self.detect_and_resolve_explosion(projectile, enemy),
            ProjectileKind::Shrimp => {
                if self.config.shrimp_cone_aoe {
                    let half_angle = self.config.shrimp_cone_half_angle;
                    self.detect_and_resolve_cone_aoe(projectile, enemy, half_angle);
                }
            }
        }

        self.add_damage_indicator(enemy);

        if let Some(tracks) = self.world.tracks_player.get_mut(enemy) {
            tracks.active_track = true;
        }

        if !component.kind.lingers() {
            self.reload(projectile);
        }
    }

    /// A player projectile hit a breakable wall
    pub fn resolve_breakable_player_projectile(&mut self, breakable: Entity, projectile: Entity) {
        let Some(component) = self.world.player_projectiles.get(projectile).copied() else {
            return;
        };
        if component.is_loaded || !self.world.motions.has(projectile) {
            return;
        }

        self.modify_oxygen(breakable, projectile);

        if component.kind == ProjectileKind::Torpedo {
            self.detect_and_resolve_explosion(projectile, breakable);
        }
    }

    /// An enemy projectile hit a breakable wall and is used up
    pub fn resolve_breakable_enemy_projectile(&mut self, breakable: Entity, enemy_projectile: Entity) {
        if !self.world.motions.has(enemy_projectile) {
            return;
        }
        self.modify_oxygen(breakable, enemy_projectile);
        self.destroy(enemy_projectile);
    }

    /// Put a projectile back in its gun
    pub fn reload(&mut self, projectile: Entity) {
        if let Some(motion) = self.world.motions.get_mut(projectile) {
            motion.velocity.fill(0.0);
        }
        if let Some(component) = self.world.player_projectiles.get_mut(projectile) {
            component.is_loaded = true;
        }
    }
}
