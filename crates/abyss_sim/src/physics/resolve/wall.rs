//! Wall responses
//!
//! Walls push dynamic entities back out along the axis of least overlap,
//! exchange momentum with other bodies that have mass, stop player
//! projectiles, absorb enemy projectiles and bounce enemies.

use super::{gated_component_missing, ResolveContext};
use crate::ecs::components::{BossKind, ProjectileKind, TracksPlayer, Wander};
use crate::ecs::Entity;
use crate::foundation::math::utils::try_normalize;
use crate::foundation::math::Vec2;
use crate::physics::collision::{box_collides, Bounds};

impl ResolveContext<'_> {
    /// Push `entity` out of `wall` along the axis of least overlap
    ///
    /// Non-player entities also lose their velocity on that axis.
    pub fn resolve_stop_on_wall(&mut self, wall: Entity, entity: Entity) {
        let Some(wall_pos) = self.world.positions.get(wall) else {
            gated_component_missing(self.world, wall, "Position");
            return;
        };
        let wall_bounds = Bounds::of(wall_pos);
        let wall_center = wall_pos.position;

        let is_player = self.world.players.has(entity);
        let Some(entity_pos) = self.world.positions.get_mut(entity) else {
            gated_component_missing(self.world, entity, "Position");
            return;
        };
        let entity_bounds = Bounds::of(entity_pos);

        let overlap_x = (entity_bounds.right - wall_bounds.left).min(wall_bounds.right - entity_bounds.left);
        let overlap_y = (entity_bounds.bottom - wall_bounds.top).min(wall_bounds.bottom - entity_bounds.top);

        let horizontal = overlap_x < overlap_y;
        if horizontal {
            let push = if entity_pos.position.x < wall_center.x { -overlap_x } else { overlap_x };
            entity_pos.position.x += push;
        } else {
            let push = if entity_pos.position.y < wall_center.y { -overlap_y } else { overlap_y };
            entity_pos.position.y += push;
        }

        if is_player {
            return;
        }
        if let Some(motion) = self.world.motions.get_mut(entity) {
            if horizontal {
                motion.velocity.x = 0.0;
            } else {
                motion.velocity.y = 0.0;
            }
        }
    }

    /// Perfectly inelastic collision between two bodies with mass
    ///
    /// Both end up with the shared momentum-weighted velocity along the
    /// dominant axis of their separation. Bodies already moving apart are
    /// left alone.
    pub fn resolve_mass_collision(&mut self, wall: Entity, other: Entity) {
        let world = &mut *self.world;
        for body in [wall, other] {
            if !world.positions.has(body) {
                gated_component_missing(world, body, "Position");
                return;
            }
            if !world.masses.has(body) {
                gated_component_missing(world, body, "Mass");
                return;
            }
        }
        let (Some(wall_pos), Some(other_pos)) = (world.positions.get(wall), world.positions.get(other)) else {
            return;
        };
        let (Some(wall_mass), Some(other_mass)) = (world.masses.get(wall), world.masses.get(other)) else {
            return;
        };
        // Motion is only gated on `other`
        let (Some(wall_motion), Some(other_motion)) = (world.motions.get(wall), world.motions.get(other)) else {
            return;
        };

        let delta = wall_pos.position - other_pos.position;
        let axis = usize::from(delta.x.abs() <= delta.y.abs());

        let wall_p = wall_pos.position[axis];
        let other_p = other_pos.position[axis];
        let wall_v = wall_motion.velocity[axis];
        let other_v = other_motion.velocity[axis];
        if (other_p > wall_p && other_v > wall_v) || (other_p < wall_p && other_v < wall_v) {
            return;
        }

        let (m1, m2) = (wall_mass.mass, other_mass.mass);
        let total = m1 + m2;
        if total <= 0.0 {
            log::warn!("non-positive mass in collision between {:?} and {:?}", wall, other);
            return;
        }
        let v_final = (m1 * wall_v + m2 * other_v) / total;

        if let Some(motion) = world.motions.get_mut(wall) {
            motion.velocity[axis] = v_final;
        }
        if let Some(motion) = world.motions.get_mut(other) {
            motion.velocity[axis] = v_final;
        }
    }

    /// Stop-on-wall for the player and for the sub-entity carrying its mesh
    ///
    /// The mesh sub-entity is only pushed when its own box overlaps the wall.
    pub fn resolve_player_stop_on_wall(&mut self, wall: Entity, player: Entity) {
        self.resolve_stop_on_wall(wall, player);
        let Some(mesh) = self.world.players.get(player).map(|p| p.collision_mesh) else {
            return;
        };
        if mesh == player {
            return;
        }
        let overlaps = match (self.world.positions.get(mesh), self.world.positions.get(wall)) {
            (Some(mesh_pos), Some(wall_pos)) => box_collides(mesh_pos, wall_pos),
            _ => false,
        };
        if overlaps {
            self.resolve_stop_on_wall(wall, mesh);
        }
    }

    /// A player projectile hit a wall: stop it and reload it
    pub fn resolve_wall_player_projectile(&mut self, wall: Entity, projectile: Entity) {
        let Some(component) = self.world.player_projectiles.get_mut(projectile) else {
            return;
        };
        let Some(motion) = self.world.motions.get_mut(projectile) else {
            return;
        };
        motion.velocity.fill(0.0);
        let was_loaded = component.is_loaded;
        component.is_loaded = true;
        let kind = component.kind;

        // The other direction of this overlap already handled the hit
        if was_loaded {
            return;
        }

        if kind.lingers() {
            if !self.state.is_equipped_projectile(projectile) {
                self.destroy_render(projectile);
            }
            let out_of_ammo = self
                .state
                .player
                .and_then(|player| self.world.inventories.get(player))
                .is_some_and(|inventory| inventory.is_out_of(kind));
            if out_of_ammo && self.state.equip_harpoon() {
                log::debug!("out of {:?} ammo, swapping to harpoon", kind);
                self.hooks.on_weapon_swapped(ProjectileKind::Harpoon);
            }
        } else if kind == ProjectileKind::Torpedo {
            self.detect_and_resolve_explosion(projectile, wall);
        }
    }

    /// An enemy projectile hit a wall and is destroyed
    pub fn resolve_wall_enemy_projectile(&mut self, _wall: Entity, enemy_projectile: Entity) {
        self.destroy(enemy_projectile);
    }

    /// Bounce an enemy off a wall
    ///
    /// Tracking enemies are steered around the wall; others reverse. The
    /// sharkman smashes breakable walls while charging the player.
    pub fn resolve_wall_enemy(&mut self, wall: Entity, enemy: Entity) {
        for entity in [enemy, wall] {
            if !self.world.positions.has(entity) {
                gated_component_missing(self.world, entity, "Position");
                return;
            }
        }
        let (Some(enemy_pos), Some(wall_pos)) = (self.world.positions.get(enemy), self.world.positions.get(wall)) else {
            return;
        };
        let Some(motion) = self.world.motions.get(enemy) else {
            return;
        };
        let wall_dir = try_normalize(wall_pos.position - enemy_pos.position);
        let velocity = motion.velocity;
        let acceleration = motion.acceleration;

        self.resolve_stop_on_wall(wall, enemy);

        let tracking = self.is_tracking(enemy);
        if let Some(motion) = self.world.motions.get_mut(enemy) {
            if tracking {
                let wall_dir = wall_dir.unwrap_or_else(Vec2::zeros);
                // No usable heading leaves what stop-on-wall produced
                if let Some(new_dir) = try_normalize(velocity).and_then(|dir| try_normalize(dir - wall_dir)) {
                    motion.velocity = new_dir * velocity.norm();
                    motion.acceleration = new_dir * acceleration.norm();
                }
            } else {
                motion.velocity = -velocity;
                motion.acceleration = -motion.acceleration;
            }
        }

        let heading_right = self.world.motions.get(enemy).is_some_and(|m| m.velocity.x > 0.0);
        if let Some(position) = self.world.positions.get_mut(enemy) {
            position.scale.x = position.scale.x.abs();
            if heading_right {
                position.scale.x = -position.scale.x;
            }
        }

        if self.world.bosses.get(enemy).is_some_and(|boss| boss.kind == BossKind::Sharkman) {
            self.resolve_sharkman_wall(wall, enemy, tracking);
            self.hooks.choose_new_direction(self.world, enemy, wall);
        }
    }

    /// Sharkman charging into a crate: both take damage, the sharkman speeds
    /// up and falls back to wandering
    fn resolve_sharkman_wall(&mut self, wall: Entity, sharkman: Entity, tracking: bool) {
        if !tracking || !self.world.breakables.has(wall) {
            return;
        }

        let self_damage = self.config.sharkman_self_damage;
        self.modify_oxygen_amount(sharkman, self_damage);
        self.modify_oxygen_amount(wall, self_damage);

        let boost = self.config.sharkman_speed_increase;
        if let Some(motion) = self.world.motions.get_mut(sharkman) {
            if let Some(dir) = try_normalize(motion.velocity) {
                motion.velocity = dir * (motion.velocity.norm() + boost);
            }
        }

        log::info!("sharkman {:?} smashed crate {:?}, returning to wander", sharkman, wall);
        if let Some(boss) = self.world.bosses.get_mut(sharkman) {
            boss.curr_cd_ms = self.config.sharkman_ai_cooldown_ms;
        }
        self.world.tracks_player.insert_or_replace(sharkman, TracksPlayer::default());
        self.world.wanders.insert_or_replace(sharkman, Wander);
    }

    pub(crate) fn is_tracking(&self, enemy: Entity) -> bool {
        self.world.tracks_player.get(enemy).is_some_and(|t| t.active_track)
    }
}
