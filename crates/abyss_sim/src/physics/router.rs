//! Collision routing
//!
//! Each queued record `(entity, other)` is matched against a fixed route
//! table keyed by [`Category`]. Every route whose category the primary
//! entity carries fires, in table order, and decides from the other
//! entity's categories which resolver applies. Both category sets are
//! computed once per record, so a resolver that strips a component mid
//! record does not change which routes run for it.

use crate::ecs::Entity;
use crate::physics::categories::Category;
use crate::physics::collision_system::CollisionQueue;
use crate::physics::resolve::ResolveContext;

/// One drained collision record with its categories resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutedCollision {
    /// Primary entity of the record
    pub entity: Entity,
    /// Entity it collided with
    pub other: Entity,
    /// Categories of `entity` when the record was routed
    pub entity_category: Category,
    /// Categories of `other` when the record was routed
    pub other_category: Category,
}

type Route = fn(&mut ResolveContext<'_>, &RoutedCollision);

/// Routes in firing order
const ROUTES: [(Category, Route); 7] = [
    (Category::PLAYER, route_player),
    (Category::ACTIVE_WALL, route_wall),
    (Category::ACTIVE_DOOR, route_door),
    (Category::ENEMY, route_enemy),
    (Category::PLAYER_PROJECTILE, route_player_projectile),
    (Category::CONSUMABLE, route_consumable),
    (Category::INTERACTABLE, route_interactable),
];

/// Dispatches collision records to resolvers
#[derive(Debug, Default, Clone, Copy)]
pub struct CollisionRouter;

impl CollisionRouter {
    /// Create a router
    pub fn new() -> Self {
        Self
    }

    /// Drain `queue` in insertion order and resolve every record
    ///
    /// Returns the number of records processed. The queue is empty afterwards.
    pub fn resolve_all(&self, ctx: &mut ResolveContext<'_>, queue: &mut CollisionQueue) -> usize {
        let records = queue.drain();
        for &(entity, other) in &records {
            self.route(ctx, entity, other);
        }
        records.len()
    }

    /// Resolve a single record
    pub fn route(&self, ctx: &mut ResolveContext<'_>, entity: Entity, other: Entity) {
        let record = RoutedCollision {
            entity,
            other,
            entity_category: Category::of(ctx.world, entity),
            other_category: Category::of(ctx.world, other),
        };
        log::trace!(
            "routing {:?} ({:?}) vs {:?} ({:?})",
            entity,
            record.entity_category,
            other,
            record.other_category
        );

        for (category, route) in ROUTES {
            if record.entity_category.contains(category) {
                route(ctx, &record);
            }
        }
    }
}

fn route_player(ctx: &mut ResolveContext<'_>, record: &RoutedCollision) {
    let (player, other) = (record.entity, record.other);
    let other_category = record.other_category;

    if other_category.contains(Category::ENEMY) {
        ctx.resolve_player_enemy(player, other);
    }
    if other_category.contains(Category::ENEMY_PROJECTILE) {
        ctx.resolve_player_enemy_projectile(player, other);
    }
    if other_category.contains(Category::CONSUMABLE) {
        ctx.resolve_player_consumable(player, other);
    }
    if other_category.contains(Category::ACTIVE_WALL) {
        ctx.resolve_player_stop_on_wall(other, player);
    }
    if other_category.contains(Category::ACTIVE_DOOR) {
        ctx.resolve_door_player(other, player);
    }
    if other_category.contains(Category::INTERACTABLE) {
        ctx.resolve_player_interactable(player, other);
    }
}

fn route_wall(ctx: &mut ResolveContext<'_>, record: &RoutedCollision) {
    let (wall, other) = (record.entity, record.other);
    let other_category = record.other_category;
    if !other_category.contains(Category::MOTION) {
        return;
    }
    let both_massive =
        record.entity_category.contains(Category::MASS) && other_category.contains(Category::MASS);

    if other_category.contains(Category::PLAYER) {
        if both_massive {
            ctx.resolve_mass_collision(wall, other);
        } else {
            ctx.resolve_player_stop_on_wall(wall, other);
        }
    }
    if other_category.contains(Category::ACTIVE_WALL) {
        if both_massive {
            ctx.resolve_mass_collision(wall, other);
        } else {
            ctx.resolve_stop_on_wall(wall, other);
        }
    }
    if other_category.contains(Category::PLAYER_PROJECTILE) {
        ctx.resolve_wall_player_projectile(wall, other);
        if record.entity_category.contains(Category::BREAKABLE) {
            ctx.resolve_breakable_player_projectile(wall, other);
        }
    }
    if other_category.contains(Category::ENEMY_PROJECTILE) {
        if record.entity_category.contains(Category::BREAKABLE) {
            ctx.resolve_breakable_enemy_projectile(wall, other);
        } else {
            ctx.resolve_wall_enemy_projectile(wall, other);
        }
    }
}

fn route_door(ctx: &mut ResolveContext<'_>, record: &RoutedCollision) {
    let (door, other) = (record.entity, record.other);
    let other_category = record.other_category;
    if !other_category.contains(Category::MOTION) {
        return;
    }

    if other_category.contains(Category::PLAYER) {
        ctx.resolve_door_player(door, other);
    }
    if other_category.contains(Category::PLAYER_PROJECTILE) {
        ctx.resolve_wall_player_projectile(door, other);
    }
    if other_category.contains(Category::ENEMY) {
        ctx.resolve_wall_enemy(door, other);
    }
}

fn route_enemy(ctx: &mut ResolveContext<'_>, record: &RoutedCollision) {
    let (enemy, other) = (record.entity, record.other);
    let other_category = record.other_category;
    let mut resolved = false;

    if other_category.contains(Category::PLAYER) {
        ctx.resolve_player_enemy(other, enemy);
        resolved = true;
    }
    if other_category.contains(Category::PLAYER_PROJECTILE) {
        ctx.resolve_enemy_player_projectile(enemy, other);
        resolved = true;
    }
    if other_category.contains(Category::ACTIVE_WALL) {
        ctx.resolve_wall_enemy(other, enemy);
        resolved = true;
    }

    // A thrown enemy is spent once it hits anything
    if resolved && ctx.world.acts_as_projectile.remove(enemy).is_some() {
        log::debug!("{:?} no longer acts as a projectile", enemy);
    }
}

fn route_player_projectile(ctx: &mut ResolveContext<'_>, record: &RoutedCollision) {
    let (projectile, other) = (record.entity, record.other);
    let other_category = record.other_category;

    if other_category.contains(Category::ENEMY) {
        ctx.resolve_enemy_player_projectile(other, projectile);
    }
    if other_category.contains(Category::ACTIVE_WALL) {
        ctx.resolve_wall_player_projectile(other, projectile);
    }
    if other_category.contains(Category::BREAKABLE) {
        ctx.modify_oxygen(other, projectile);
    }

    let Some(kind) = ctx.world.player_projectiles.get(projectile).map(|p| p.kind) else {
        return;
    };
    if !ctx.state.is_equipped_projectile(projectile) && !kind.lingers() {
        ctx.destroy_render(projectile);
    }
}

fn route_consumable(ctx: &mut ResolveContext<'_>, record: &RoutedCollision) {
    if record.other_category.contains(Category::PLAYER) {
        ctx.resolve_player_consumable(record.other, record.entity);
    }
}

fn route_interactable(ctx: &mut ResolveContext<'_>, record: &RoutedCollision) {
    if record.other_category.contains(Category::PLAYER) {
        ctx.resolve_player_interactable(record.other, record.entity);
    }
}
