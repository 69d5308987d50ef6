//! Core collision detection system
//!
//! Detection runs in a fixed order each frame and writes one record per
//! direction of every overlap it finds into a [`CollisionQueue`]. The queue
//! keeps duplicates: the same pair found by two different passes is
//! resolved twice, and resolvers are written to tolerate that.
//!
//! This module only reads the world. The ECS-facing frame driver lives in
//! `ecs/systems/collision_system.rs`.

use crate::ecs::storage::ComponentTable;
use crate::ecs::{Component, Entity, World};
use crate::physics::collision::{box_collides, circle_collides, mesh_collides};

/// One direction of a detected overlap, keyed by the primary entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    /// The entity the primary collided with
    pub other: Entity,
}

impl Component for Collision {}

/// Frame-scoped list of collision records
///
/// Filled by the detector, drained exactly once by the router.
#[derive(Default)]
pub struct CollisionQueue {
    records: ComponentTable<Collision>,
}

impl CollisionQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for `entity` colliding with `other`
    pub fn push(&mut self, entity: Entity, other: Entity) {
        self.records.insert_with_duplicates(entity, Collision { other });
    }

    /// Append both directions of an overlap, `(a, b)` first
    pub fn push_pair(&mut self, a: Entity, b: Entity) {
        self.push(a, b);
        self.push(b, a);
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a record `(entity, other)` exists
    pub fn contains(&self, entity: Entity, other: Entity) -> bool {
        self.iter().any(|pair| pair == (entity, other))
    }

    /// Number of records `(entity, other)`
    pub fn count(&self, entity: Entity, other: Entity) -> usize {
        self.iter().filter(|&pair| pair == (entity, other)).count()
    }

    /// Iterate `(entity, other)` records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Entity, Entity)> + '_ {
        self.records.iter().map(|(entity, record)| (entity, record.other))
    }

    /// Take every record out in insertion order, leaving the queue empty
    pub fn drain(&mut self) -> Vec<(Entity, Entity)> {
        self.records.drain().map(|(entity, record)| (entity, record.other)).collect()
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Per-frame collision detector
#[derive(Default)]
pub struct CollisionDetector {
    queue: CollisionQueue,
}

impl CollisionDetector {
    /// Create a detector with an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Records produced so far this frame
    pub fn queue(&self) -> &CollisionQueue {
        &self.queue
    }

    /// Mutable access to the queue for the router
    pub fn queue_mut(&mut self) -> &mut CollisionQueue {
        &mut self.queue
    }

    /// Run every detection pass in order
    ///
    /// Returns how many records were appended.
    pub fn detect(&mut self, world: &World) -> usize {
        let before = self.queue.len();

        self.detect_player_projectile_collisions(world);
        self.detect_player_collisions(world);
        self.detect_wall_collisions(world);
        self.detect_door_collisions(world);

        let added = self.queue.len() - before;
        log::trace!("collision detection recorded {} records", added);
        added
    }

    /// Active player projectiles against walls (box) and enemies (circle)
    fn detect_player_projectile_collisions(&mut self, world: &World) {
        for (projectile, component) in world.player_projectiles.iter() {
            if component.is_loaded || !world.positions.has(projectile) {
                continue;
            }

            for &wall in world.active_walls.entities() {
                self.check_box(world, projectile, wall);
            }

            for &enemy in world.deadlys.entities() {
                let collided = self.check_circle(world, projectile, enemy);
                if collided && component.kind.is_single_target() {
                    break;
                }
            }
        }
    }

    /// Players against enemies, enemy projectiles, consumables and interactables
    fn detect_player_collisions(&mut self, world: &World) {
        for (player, component) in world.players.iter() {
            if !world.positions.has(player) {
                continue;
            }
            let mesh = component.collision_mesh;

            for &enemy in world.deadlys.entities() {
                if is_on_cooldown(world, enemy) {
                    continue;
                }
                self.check_player_mesh(world, player, enemy, mesh);
            }

            for &enemy_projectile in world.enemy_projectiles.entities() {
                self.check_player_mesh(world, player, enemy_projectile, mesh);
            }

            for &consumable in world.consumables.entities() {
                self.check_player_mesh(world, player, consumable, mesh);
            }

            for &interactable in world.interactables.entities() {
                if is_on_cooldown(world, interactable) {
                    continue;
                }
                self.check_player_mesh(world, player, interactable, mesh);
            }
        }
    }

    /// Walls against enemies, enemy projectiles and other bodies with mass
    ///
    /// Each body is tested once per wall.
    fn detect_wall_collisions(&mut self, world: &World) {
        for &wall in world.active_walls.entities() {
            if !world.positions.has(wall) {
                continue;
            }

            for &enemy in world.deadlys.entities() {
                self.check_box(world, wall, enemy);
            }

            for &enemy_projectile in world.enemy_projectiles.entities() {
                self.check_box(world, wall, enemy_projectile);
            }

            for &body in world.masses.entities() {
                // Enemies and enemy projectiles already got their box test above
                if body == wall || world.deadlys.has(body) || world.enemy_projectiles.has(body) {
                    continue;
                }
                match world.players.get(body) {
                    Some(player) => {
                        self.check_player_mesh(world, body, wall, player.collision_mesh);
                    }
                    None => {
                        self.check_box(world, wall, body);
                    }
                }
            }
        }
    }

    /// Doors against enemies (box) and players (mesh)
    fn detect_door_collisions(&mut self, world: &World) {
        for &door in world.active_doors.entities() {
            for &enemy in world.deadlys.entities() {
                self.check_box(world, door, enemy);
            }

            for (player, component) in world.players.iter() {
                self.check_player_mesh(world, player, door, component.collision_mesh);
            }
        }
    }

    fn check_box(&mut self, world: &World, a: Entity, b: Entity) -> bool {
        let (Some(pos_a), Some(pos_b)) = (world.positions.get(a), world.positions.get(b)) else {
            return false;
        };
        let hit = box_collides(pos_a, pos_b);
        if hit {
            self.queue.push_pair(a, b);
        }
        hit
    }

    fn check_circle(&mut self, world: &World, a: Entity, b: Entity) -> bool {
        let (Some(pos_a), Some(pos_b)) = (world.positions.get(a), world.positions.get(b)) else {
            return false;
        };
        let hit = circle_collides(pos_a, pos_b);
        if hit {
            self.queue.push_pair(a, b);
        }
        hit
    }

    /// Coarse box test between the player and `other`, refined by the
    /// player's collision mesh
    fn check_player_mesh(&mut self, world: &World, player: Entity, other: Entity, mesh_entity: Entity) -> bool {
        let (Some(player_pos), Some(other_pos)) = (world.positions.get(player), world.positions.get(other)) else {
            return false;
        };
        if !box_collides(player_pos, other_pos) {
            return false;
        }

        let hit = match (world.collision_meshes.get(mesh_entity), world.positions.get(mesh_entity)) {
            (Some(mesh), Some(mesh_pos)) => mesh_collides(mesh, mesh_pos, other_pos),
            // No fine mesh to refine with; the box result stands
            _ => true,
        };
        if hit {
            self.queue.push_pair(player, other);
        }
        hit
    }
}

fn is_on_cooldown(world: &World, entity: Entity) -> bool {
    world.modify_oxygen_cd.get(entity).is_some_and(|cd| cd.is_active())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::*;
    use crate::foundation::math::Vec2;
    use crate::physics::collision::CollisionMesh;

    fn spawn_at(world: &mut World, x: f32, y: f32, size: f32) -> Entity {
        let entity = world.create_entity();
        world
            .positions
            .insert(entity, Position::new(Vec2::new(x, y), Vec2::new(size, size)))
            .unwrap();
        entity
    }

    fn spawn_enemy(world: &mut World, x: f32) -> Entity {
        let enemy = spawn_at(world, x, 0.0, 2.0);
        world.deadlys.insert(enemy, Deadly).unwrap();
        enemy
    }

    fn spawn_projectile(world: &mut World, kind: ProjectileKind, loaded: bool) -> Entity {
        let projectile = spawn_at(world, 0.0, 0.0, 2.0);
        let component = if loaded {
            PlayerProjectile::loaded(kind)
        } else {
            PlayerProjectile::flying(kind)
        };
        world.player_projectiles.insert(projectile, component).unwrap();
        world.motions.insert(projectile, Motion::default()).unwrap();
        projectile
    }

    #[test]
    fn test_records_are_symmetric() {
        let mut world = World::new();
        let wall = spawn_at(&mut world, 0.0, 0.0, 4.0);
        world.active_walls.insert(wall, ActiveWall).unwrap();
        let enemy = spawn_enemy(&mut world, 1.0);

        let mut detector = CollisionDetector::new();
        assert_eq!(detector.detect(&world), 2);
        assert!(detector.queue().contains(wall, enemy));
        assert!(detector.queue().contains(enemy, wall));
    }

    #[test]
    fn test_loaded_projectile_is_never_recorded() {
        let mut world = World::new();
        let projectile = spawn_projectile(&mut world, ProjectileKind::Harpoon, true);
        spawn_enemy(&mut world, 0.5);

        let mut detector = CollisionDetector::new();
        detector.detect(&world);
        assert!(detector.queue().iter().all(|(a, b)| a != projectile && b != projectile));
    }

    #[test]
    fn test_single_target_stops_after_first_enemy() {
        let mut world = World::new();
        let projectile = spawn_projectile(&mut world, ProjectileKind::Net, false);
        let first = spawn_enemy(&mut world, 0.5);
        let second = spawn_enemy(&mut world, -0.5);

        let mut detector = CollisionDetector::new();
        detector.detect(&world);
        assert_eq!(detector.queue().count(projectile, first), 1);
        assert_eq!(detector.queue().count(projectile, second), 0);
    }

    #[test]
    fn test_multi_hit_records_every_enemy() {
        let mut world = World::new();
        let projectile = spawn_projectile(&mut world, ProjectileKind::Concussive, false);
        let first = spawn_enemy(&mut world, 0.5);
        let second = spawn_enemy(&mut world, -0.5);

        let mut detector = CollisionDetector::new();
        detector.detect(&world);
        assert!(detector.queue().contains(projectile, first));
        assert!(detector.queue().contains(projectile, second));
    }

    #[test]
    fn test_entity_without_position_never_collides() {
        let mut world = World::new();
        let wall = spawn_at(&mut world, 0.0, 0.0, 4.0);
        world.active_walls.insert(wall, ActiveWall).unwrap();
        let ghost = world.create_entity();
        world.deadlys.insert(ghost, Deadly).unwrap();

        let mut detector = CollisionDetector::new();
        assert_eq!(detector.detect(&world), 0);
    }

    #[test]
    fn test_enemy_on_cooldown_skipped_for_player() {
        let mut world = World::new();
        let player = spawn_at(&mut world, 0.0, 0.0, 2.0);
        world.players.insert(player, Player { collision_mesh: player }).unwrap();
        let enemy = spawn_enemy(&mut world, 1.0);
        let mut cd = ModifyOxygenCd::new(500.0);
        cd.restart();
        world.modify_oxygen_cd.insert(enemy, cd).unwrap();

        let mut detector = CollisionDetector::new();
        detector.detect(&world);
        assert!(!detector.queue().contains(player, enemy));
    }

    #[test]
    fn test_player_mesh_refines_box_hit() {
        let mut world = World::new();
        let player = spawn_at(&mut world, 0.0, 0.0, 20.0);
        let mesh = spawn_at(&mut world, 0.0, 0.0, 20.0);
        world
            .collision_meshes
            .insert(
                mesh,
                CollisionMesh::new(
                    vec![Vec2::new(-0.5, -0.5), Vec2::new(0.5, 0.5), Vec2::new(-0.5, 0.5)],
                    vec![0, 1, 2],
                ),
            )
            .unwrap();
        world.players.insert(player, Player { collision_mesh: mesh }).unwrap();

        // Inside the player's box but in the empty half of the mesh
        let miss = world.create_entity();
        world
            .positions
            .insert(miss, Position::new(Vec2::new(6.0, -6.0), Vec2::new(1.0, 1.0)))
            .unwrap();
        world.consumables.insert(miss, Consumable { kind: ConsumableKind::Net, amount: 1 }).unwrap();
        let hit = spawn_at(&mut world, -5.0, 5.0, 1.0);
        world.consumables.insert(hit, Consumable { kind: ConsumableKind::Net, amount: 1 }).unwrap();

        let mut detector = CollisionDetector::new();
        detector.detect(&world);
        assert!(detector.queue().contains(player, hit));
        assert!(!detector.queue().contains(player, miss));
    }

    #[test]
    fn test_player_against_wall_recorded_player_first() {
        let mut world = World::new();
        let player = spawn_at(&mut world, 0.0, 0.0, 2.0);
        world.players.insert(player, Player { collision_mesh: player }).unwrap();
        world.masses.insert(player, Mass::new(1.0)).unwrap();
        let wall = spawn_at(&mut world, 1.5, 0.0, 2.0);
        world.active_walls.insert(wall, ActiveWall).unwrap();

        let mut detector = CollisionDetector::new();
        detector.detect(&world);
        let records: Vec<_> = detector.queue().iter().collect();
        assert_eq!(records, vec![(player, wall), (wall, player)]);
    }

    #[test]
    fn test_massive_enemy_recorded_once_per_wall() {
        let mut world = World::new();
        let wall = spawn_at(&mut world, 0.0, 0.0, 4.0);
        world.active_walls.insert(wall, ActiveWall).unwrap();
        let enemy = spawn_enemy(&mut world, 1.0);
        world.masses.insert(enemy, Mass::new(2.0)).unwrap();

        let mut detector = CollisionDetector::new();
        assert_eq!(detector.detect(&world), 2);
        assert_eq!(detector.queue().count(enemy, wall), 1);
    }

    #[test]
    fn test_interactable_on_cooldown_skipped_for_player() {
        let mut world = World::new();
        let player = spawn_at(&mut world, 0.0, 0.0, 2.0);
        world.players.insert(player, Player { collision_mesh: player }).unwrap();
        let lever = spawn_at(&mut world, 1.0, 0.0, 1.0);
        world.interactables.insert(lever, Interactable).unwrap();
        world.modify_oxygen_cd.insert(lever, ModifyOxygenCd::new(500.0)).unwrap();

        let mut detector = CollisionDetector::new();
        detector.detect(&world);
        assert!(detector.queue().contains(player, lever));
        assert!(detector.queue().contains(lever, player));

        world.modify_oxygen_cd.get_mut(lever).unwrap().restart();
        detector.queue_mut().clear();
        assert_eq!(detector.detect(&world), 0);
    }

    #[test]
    fn test_enemy_projectile_recorded_against_player_and_wall() {
        let mut world = World::new();
        let player = spawn_at(&mut world, 0.0, 0.0, 2.0);
        world.players.insert(player, Player { collision_mesh: player }).unwrap();
        let wall = spawn_at(&mut world, 3.0, 0.0, 2.0);
        world.active_walls.insert(wall, ActiveWall).unwrap();
        // Straddles the player and the wall
        let ink = spawn_at(&mut world, 1.5, 0.0, 1.5);
        world.enemy_projectiles.insert(ink, EnemyProjectile).unwrap();

        let mut detector = CollisionDetector::new();
        detector.detect(&world);
        let records: Vec<_> = detector.queue().iter().collect();
        assert_eq!(records, vec![(player, ink), (ink, player), (wall, ink), (ink, wall)]);
    }

    #[test]
    fn test_drain_empties_queue() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let mut queue = CollisionQueue::new();
        queue.push_pair(a, b);
        queue.push_pair(a, b);
        assert_eq!(queue.drain(), vec![(a, b), (b, a), (a, b), (b, a)]);
        assert!(queue.is_empty());
    }
}
