//! Splash damage
//!
//! Exploding projectiles damage every enemy and breakable whose box the
//! blast circle touches. The cone variant additionally requires the target
//! to lie within an angular window around the projectile's facing.

use super::{gated_component_missing, ResolveContext};
use crate::ecs::components::SoundId;
use crate::ecs::Entity;
use crate::foundation::math::constants::PI;
use crate::foundation::math::utils::{angle_difference, wrap_angle};
use crate::foundation::math::Vec2;
use crate::physics::collision::circle_box_collides;

impl ResolveContext<'_> {
    /// Blast centre and radius of a projectile, if it can explode
    fn blast(&self, projectile: Entity) -> Option<(Vec2, f32)> {
        let position = self.world.positions.get(projectile)?;
        let aoe = self.world.aoe.get(projectile)?;
        Some((position.position, aoe.radius))
    }

    /// Explode `projectile`, splashing everything in range except `hit_entity`
    pub fn detect_and_resolve_explosion(&mut self, projectile: Entity, hit_entity: Entity) {
        self.world.request_sound(projectile, SoundId::Explosion);

        let Some((center, radius)) = self.blast(projectile) else {
            let missing = if self.world.positions.has(projectile) { "AreaOfEffect" } else { "Position" };
            gated_component_missing(self.world, projectile, missing);
            return;
        };

        let enemies = self.world.deadlys.entities().to_vec();
        let breakables = self.world.breakables.entities().to_vec();
        let mut splashed = 0;
        for target in enemies.into_iter().chain(breakables) {
            if target == hit_entity {
                continue;
            }
            let Some(target_pos) = self.world.positions.get(target) else {
                continue;
            };
            if circle_box_collides(center, radius, target_pos) {
                self.modify_oxygen(target, projectile);
                self.add_damage_indicator(target);
                splashed += 1;
            }
        }
        log::debug!("{:?} exploded, splashing {} targets", projectile, splashed);
    }

    /// Splash enemies inside a cone in front of `projectile`
    ///
    /// The cone opens `half_angle` radians to either side of the
    /// projectile's facing (reversed when the sprite is flipped). A target
    /// is inside when the wrapped angle between the facing and the
    /// direction to the target is at most `half_angle`.
    pub fn detect_and_resolve_cone_aoe(&mut self, projectile: Entity, hit_enemy: Entity, half_angle: f32) {
        let Some((center, radius)) = self.blast(projectile) else {
            return;
        };
        let Some(angle) = self.world.positions.get(projectile).map(|p| p.angle) else {
            return;
        };
        let flipped = self.world.player_projectiles.get(projectile).is_some_and(|p| p.is_flipped);
        let facing = wrap_angle(if flipped { angle - PI } else { angle });

        for enemy in self.world.deadlys.entities().to_vec() {
            if enemy == hit_enemy {
                continue;
            }
            let Some(enemy_pos) = self.world.positions.get(enemy) else {
                continue;
            };
            let offset = enemy_pos.position - center;
            let direction = wrap_angle(offset.y.atan2(offset.x));
            let in_cone = angle_difference(facing, direction).abs() <= half_angle;

            if in_cone && circle_box_collides(center, radius, enemy_pos) {
                self.modify_oxygen(enemy, projectile);
                self.add_damage_indicator(enemy);
            }
        }
    }
}
