//! End-to-end collision scenarios driven through `CollisionSystem`

use approx::assert_relative_eq;

use crate::core::{FreezeFlags, Loadout, SimulationState};
use crate::ecs::components::*;
use crate::ecs::systems::CollisionSystem;
use crate::ecs::{Entity, World};
use crate::foundation::logging;
use crate::foundation::math::Vec2;
use crate::physics::collision::box_collides;
use crate::physics::collision_system::CollisionDetector;
use crate::physics::hooks::RecordingHooks;

fn spawn_at(world: &mut World, x: f32, y: f32, w: f32, h: f32) -> Entity {
    let entity = world.create_entity();
    world.positions.insert(entity, Position::new(Vec2::new(x, y), Vec2::new(w, h))).unwrap();
    entity
}

fn spawn_enemy(world: &mut World, x: f32, y: f32) -> Entity {
    let enemy = spawn_at(world, x, y, 1.0, 1.0);
    world.deadlys.insert(enemy, Deadly).unwrap();
    world.oxygen.insert(enemy, Oxygen::full(100.0)).unwrap();
    world.motions.insert(enemy, Motion::default()).unwrap();
    enemy
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    let player = spawn_at(world, x, y, 1.0, 1.0);
    world.players.insert(player, Player { collision_mesh: player }).unwrap();
    world.motions.insert(player, Motion::default()).unwrap();
    world.oxygen.insert(player, Oxygen::full(100.0)).unwrap();
    world.inventories.insert(player, Inventory::default()).unwrap();
    player
}

fn spawn_projectile(world: &mut World, kind: ProjectileKind, x: f32, y: f32) -> Entity {
    let projectile = spawn_at(world, x, y, 1.0, 1.0);
    world.player_projectiles.insert(projectile, PlayerProjectile::flying(kind)).unwrap();
    world.motions.insert(projectile, Motion::with_velocity(Vec2::new(6.0, 0.0))).unwrap();
    world.oxygen_modifiers.insert(projectile, OxygenModifier { amount: -20.0 }).unwrap();
    projectile
}

fn level(world: &World, entity: Entity) -> f32 {
    world.oxygen.get(entity).unwrap().level
}

#[test]
fn test_every_record_has_its_mirror() {
    logging::init_for_tests();
    let mut world = World::new();
    let player = spawn_player(&mut world, 0.0, 0.0);
    world.masses.insert(player, Mass::new(1.0)).unwrap();
    spawn_enemy(&mut world, 0.5, 0.0);
    let wall = spawn_at(&mut world, 0.0, 0.8, 4.0, 1.0);
    world.active_walls.insert(wall, ActiveWall).unwrap();
    spawn_enemy(&mut world, 1.0, 0.8);
    spawn_projectile(&mut world, ProjectileKind::Concussive, 1.2, 0.6);

    let mut detector = CollisionDetector::new();
    assert!(detector.detect(&world) > 0);

    let queue = detector.queue();
    assert_eq!(queue.len() % 2, 0);
    for (entity, other) in queue.iter() {
        assert_eq!(queue.count(entity, other), queue.count(other, entity));
    }
}

#[test]
fn test_harpoon_only_hits_first_enemy() {
    logging::init_for_tests();
    let mut world = World::new();
    let mut state = SimulationState::new();
    let first = spawn_enemy(&mut world, 0.3, 0.0);
    let second = spawn_enemy(&mut world, -0.3, 0.0);
    let harpoon = spawn_projectile(&mut world, ProjectileKind::Harpoon, 0.0, 0.0);
    let mut system = CollisionSystem::new();

    system.step(&mut world, &mut state, 16.0);

    assert_eq!(level(&world, first), 80.0);
    assert_eq!(level(&world, second), 100.0);
    assert!(world.player_projectiles.get(harpoon).unwrap().is_loaded);
    assert_eq!(world.motions.get(harpoon).unwrap().velocity, Vec2::zeros());

    // Loaded projectiles are no longer detected
    system.step(&mut world, &mut state, 16.0);
    assert_eq!(level(&world, first), 80.0);
    assert_eq!(level(&world, second), 100.0);
}

#[test]
fn test_door_starts_one_room_transition() {
    logging::init_for_tests();
    let mut world = World::new();
    let player = spawn_player(&mut world, 0.0, 0.0);
    let harpoon = Loadout {
        weapon: world.create_entity(),
        projectile: world.create_entity(),
        kind: ProjectileKind::Harpoon,
    };
    world
        .player_projectiles
        .insert(harpoon.projectile, PlayerProjectile::flying(ProjectileKind::Harpoon))
        .unwrap();
    world
        .motions
        .insert(harpoon.projectile, Motion::with_velocity(Vec2::new(4.0, 0.0)))
        .unwrap();
    let mut state = SimulationState::new().with_player(player, harpoon);

    let door = spawn_at(&mut world, 0.6, 0.0, 1.0, 2.0);
    world.active_doors.insert(door, ActiveDoor).unwrap();
    let connection = DoorConnection { target_room: 2, spawn_offset: Vec2::new(1.0, 0.0) };
    world.door_connections.insert(door, connection.clone()).unwrap();

    let mut system = CollisionSystem::new();
    system.step(&mut world, &mut state, 16.0);

    assert_eq!(world.room_transitions.len(), 1);
    let transition = world.room_transitions.entities()[0];
    assert_eq!(world.room_transitions.get(transition).unwrap().door_connection, connection);
    assert_eq!(world.sounds.get(transition), Some(&Sound::new(SoundId::Door)));
    assert!(state.freeze.contains(FreezeFlags::ROOM_TRANSITION));
    assert!(world.player_projectiles.get(harpoon.projectile).unwrap().is_loaded);
    assert_eq!(world.motions.get(harpoon.projectile).unwrap().velocity, Vec2::zeros());

    // Frozen until the level system finishes the transition
    system.step(&mut world, &mut state, 16.0);
    assert_eq!(world.room_transitions.len(), 1);
}

#[test]
fn test_enemy_pushed_out_of_wall() {
    logging::init_for_tests();
    let mut world = World::new();
    let mut state = SimulationState::new();
    let wall = spawn_at(&mut world, 0.0, 0.0, 2.0, 6.0);
    world.active_walls.insert(wall, ActiveWall).unwrap();
    let enemy = spawn_enemy(&mut world, 1.25, 0.5);
    world.motions.get_mut(enemy).unwrap().velocity = Vec2::new(-2.0, 0.0);

    CollisionSystem::new().step(&mut world, &mut state, 16.0);

    let enemy_pos = world.positions.get(enemy).unwrap();
    assert!(!box_collides(enemy_pos, world.positions.get(wall).unwrap()));
    assert_relative_eq!(enemy_pos.position.x, 1.5);
    assert_eq!(world.motions.get(enemy).unwrap().velocity, Vec2::new(2.0, 0.0));
}

#[test]
fn test_massive_bodies_conserve_momentum() {
    logging::init_for_tests();
    let mut world = World::new();
    let mut state = SimulationState::new();
    let heavy = spawn_at(&mut world, 0.0, 0.0, 2.0, 2.0);
    let light = spawn_at(&mut world, 1.5, 0.1, 2.0, 2.0);
    for (body, mass, vx) in [(heavy, 4.0, 1.0), (light, 1.0, -3.0)] {
        world.active_walls.insert(body, ActiveWall).unwrap();
        world.masses.insert(body, Mass::new(mass)).unwrap();
        world.motions.insert(body, Motion::with_velocity(Vec2::new(vx, 0.0))).unwrap();
    }
    let momentum = |world: &World| {
        4.0 * world.motions.get(heavy).unwrap().velocity.x + world.motions.get(light).unwrap().velocity.x
    };
    let before = momentum(&world);

    CollisionSystem::new().step(&mut world, &mut state, 16.0);

    assert_relative_eq!(momentum(&world), before, epsilon = 1e-5);
    assert_relative_eq!(world.motions.get(heavy).unwrap().velocity.x, 0.2, epsilon = 1e-5);
    assert_relative_eq!(world.motions.get(light).unwrap().velocity.x, 0.2, epsilon = 1e-5);
}

#[test]
fn test_torpedo_into_wall_explodes_once() {
    logging::init_for_tests();
    let mut world = World::new();
    let mut state = SimulationState::new();
    let wall = spawn_at(&mut world, 0.8, 0.0, 1.0, 4.0);
    world.active_walls.insert(wall, ActiveWall).unwrap();
    let bystander = spawn_enemy(&mut world, 3.0, 0.0);
    let torpedo = spawn_projectile(&mut world, ProjectileKind::Torpedo, 0.0, 0.0);
    world.aoe.insert(torpedo, AreaOfEffect { radius: 5.0 }).unwrap();
    world.renderables.insert(torpedo, Renderable::new(9)).unwrap();

    let mut system = CollisionSystem::new();
    system.init(Box::new(RecordingHooks::default()));
    system.step(&mut world, &mut state, 16.0);

    assert_eq!(level(&world, bystander), 80.0);
    assert!(world.damage_indicators.has(bystander));
    assert_eq!(world.sounds.get(torpedo), Some(&Sound::new(SoundId::Explosion)));
    assert!(world.player_projectiles.get(torpedo).unwrap().is_loaded);
    assert!(!world.renderables.has(torpedo));
}

#[test]
fn test_breakable_takes_one_hit_per_projectile_pair() {
    logging::init_for_tests();
    let mut world = World::new();
    let mut state = SimulationState::new();
    let crate_box = spawn_at(&mut world, 0.8, 0.0, 1.0, 1.0);
    world.active_walls.insert(crate_box, ActiveWall).unwrap();
    world.breakables.insert(crate_box, Breakable).unwrap();
    world.oxygen.insert(crate_box, Oxygen::full(50.0)).unwrap();
    let net = spawn_projectile(&mut world, ProjectileKind::Net, 0.0, 0.0);

    CollisionSystem::new().step(&mut world, &mut state, 16.0);

    assert_eq!(level(&world, crate_box), 30.0);
    assert!(world.player_projectiles.get(net).unwrap().is_loaded);
}

#[test]
fn test_frozen_world_is_untouched() {
    logging::init_for_tests();
    let mut world = World::new();
    let mut state = SimulationState::new();
    state.freeze.insert(FreezeFlags::DEATH);
    let enemy = spawn_enemy(&mut world, 0.3, 0.0);
    let harpoon = spawn_projectile(&mut world, ProjectileKind::Harpoon, 0.0, 0.0);

    let mut system = CollisionSystem::new();
    system.step(&mut world, &mut state, 16.0);

    assert_eq!(level(&world, enemy), 100.0);
    assert!(!world.player_projectiles.get(harpoon).unwrap().is_loaded);
    assert!(system.detector().queue().is_empty());
}

#[test]
fn test_resolving_twice_changes_nothing() {
    logging::init_for_tests();
    let mut world = World::new();
    let mut state = SimulationState::new();
    let enemy = spawn_enemy(&mut world, 0.3, 0.0);
    spawn_projectile(&mut world, ProjectileKind::Harpoon, 0.0, 0.0);

    let mut system = CollisionSystem::new();
    system.collision_detection(&world);
    system.collision_resolution(&mut world, &mut state);
    let after_first = level(&world, enemy);

    assert_eq!(system.collision_resolution(&mut world, &mut state), 0);
    assert_eq!(level(&world, enemy), after_first);
}
