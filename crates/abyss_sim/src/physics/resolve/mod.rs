//! Collision resolvers
//!
//! Every resolver is a method on [`ResolveContext`], grouped by theme:
//!
//! - [`wall`] - positional correction, momentum exchange, bouncing enemies
//! - [`combat`] - damage between players, enemies and their projectiles
//! - [`aoe`] - explosion and cone splash damage
//! - [`door`] - room transitions
//!
//! Resolvers look components up by entity right before each use and never
//! keep references across mutations: an earlier resolver in the same frame
//! may already have destroyed either side.

pub mod aoe;
pub mod combat;
pub mod door;
pub mod wall;

use crate::core::{CollisionConfig, SimulationState};
use crate::ecs::components::{DamageIndicator, Stunned};
use crate::ecs::{Entity, World};
use crate::foundation::math::utils::try_normalize;
use crate::physics::hooks::CollisionHooks;

/// Everything a resolver may read or mutate
pub struct ResolveContext<'a> {
    /// Component store
    pub world: &'a mut World,
    /// Game-wide state
    pub state: &'a mut SimulationState,
    /// Gameplay tunables
    pub config: &'a CollisionConfig,
    /// Outside collaborators
    pub hooks: &'a mut dyn CollisionHooks,
}

impl<'a> ResolveContext<'a> {
    /// Bundle the resolver inputs
    pub fn new(
        world: &'a mut World,
        state: &'a mut SimulationState,
        config: &'a CollisionConfig,
        hooks: &'a mut dyn CollisionHooks,
    ) -> Self {
        Self {
            world,
            state,
            config,
            hooks,
        }
    }

    /// Apply `source`'s oxygen modifier to `target`
    ///
    /// Sources with an active cooldown are skipped; applying restarts it.
    /// Returns whether anything was applied.
    pub fn modify_oxygen(&mut self, target: Entity, source: Entity) -> bool {
        let Some(modifier) = self.world.oxygen_modifiers.get(source).copied() else {
            return false;
        };
        if !self.world.oxygen.has(target) {
            return false;
        }
        if let Some(cd) = self.world.modify_oxygen_cd.get_mut(source) {
            if cd.is_active() {
                return false;
            }
            cd.restart();
        }
        self.modify_oxygen_amount(target, modifier.amount);
        true
    }

    /// Add `amount` to `target`'s oxygen directly
    pub fn modify_oxygen_amount(&mut self, target: Entity, amount: f32) {
        if let Some(oxygen) = self.world.oxygen.get_mut(target) {
            oxygen.modify(amount);
            log::trace!("{:?} oxygen {:+} -> {}", target, amount, oxygen.level);
            if oxygen.is_depleted() {
                log::debug!("{:?} ran out of oxygen", target);
            }
        }
    }

    /// Start the hit flash on `entity`
    pub fn add_damage_indicator(&mut self, entity: Entity) {
        let timer_ms = self.config.damage_indicator_ms;
        self.world.damage_indicators.insert_or_replace(entity, DamageIndicator { timer_ms });
    }

    /// Apply `source`'s debuffs (stun, knockback) to `target`
    pub fn handle_debuffs(&mut self, target: Entity, source: Entity) {
        if let Some(stun) = self.world.stuns.get(source).copied() {
            let remaining_ms = match self.world.stunned.get(target) {
                Some(stunned) => stunned.remaining_ms.max(stun.duration_ms),
                None => stun.duration_ms,
            };
            self.world.stunned.insert_or_replace(target, Stunned { remaining_ms });
        }

        if let Some(knockback) = self.world.knockbacks.get(source).copied() {
            let (Some(target_pos), Some(source_pos)) =
                (self.world.positions.get(target), self.world.positions.get(source))
            else {
                return;
            };
            let Some(away) = try_normalize(target_pos.position - source_pos.position) else {
                return;
            };
            if let Some(motion) = self.world.motions.get_mut(target) {
                motion.velocity += away * knockback.strength;
            }
        }
    }

    /// Remove `entity`'s render representation
    pub fn destroy_render(&mut self, entity: Entity) {
        if self.world.renderables.remove(entity).is_some() {
            self.hooks.on_render_destroyed(entity);
        }
    }

    /// Destroy an entity outright
    pub fn destroy(&mut self, entity: Entity) {
        log::trace!("destroying {:?}", entity);
        self.world.destroy_entity(entity);
    }
}

/// Report `component` missing from `entity` although its route guarantees it
///
/// Entities destroyed earlier in the frame have lost every component and
/// are skipped quietly. A live entity without it is a routing bug and
/// fails fast in debug builds.
pub(crate) fn gated_component_missing(world: &World, entity: Entity, component: &str) {
    let alive = world.is_alive(entity);
    if alive {
        log::error!(
            "{:?} routed without {}, has {:?}",
            entity,
            component,
            world.components_of(entity)
        );
    }
    debug_assert!(!alive, "{entity:?} routed without {component}");
}
