//! ECS collision system
//!
//! Frame driver for the collision core: detect, route and resolve, with the
//! queue empty again at the end of every frame. The whole step is skipped
//! while any freeze flag is set.

use crate::core::{CollisionConfig, SimulationState};
use crate::ecs::system::System;
use crate::ecs::World;
use crate::physics::collision_system::CollisionDetector;
use crate::physics::hooks::{CollisionHooks, NoopHooks};
use crate::physics::resolve::ResolveContext;
use crate::physics::router::CollisionRouter;

/// Collision detection and resolution for one world
pub struct CollisionSystem {
    detector: CollisionDetector,
    router: CollisionRouter,
    config: CollisionConfig,
    hooks: Box<dyn CollisionHooks>,
}

impl CollisionSystem {
    /// Create a system with default tuning and no collaborators
    pub fn new() -> Self {
        Self {
            detector: CollisionDetector::new(),
            router: CollisionRouter::new(),
            config: CollisionConfig::default(),
            hooks: Box::new(NoopHooks),
        }
    }

    /// Connect the collaborators notified during resolution
    pub fn init(&mut self, hooks: Box<dyn CollisionHooks>) {
        self.hooks = hooks;
        self.detector.queue_mut().clear();
        log::debug!("collision system initialised");
    }

    /// Replace the gameplay tuning
    pub fn with_config(mut self, config: CollisionConfig) -> Self {
        self.config = config;
        self
    }

    /// Current gameplay tuning
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Detector holding this frame's records
    pub fn detector(&self) -> &CollisionDetector {
        &self.detector
    }

    /// Advance one frame
    ///
    /// `elapsed_ms` is accepted for symmetry with the other systems; the
    /// collision core is frame based.
    pub fn step(&mut self, world: &mut World, state: &mut SimulationState, _elapsed_ms: f32) {
        if state.is_frozen() {
            log::trace!("collision step skipped, frozen: {:?}", state.freeze);
            return;
        }
        self.collision_detection(world);
        self.collision_resolution(world, state);
    }

    /// Record every overlap in the world
    ///
    /// Returns the number of records added.
    pub fn collision_detection(&mut self, world: &World) -> usize {
        self.detector.detect(world)
    }

    /// Resolve and drain every pending record
    ///
    /// Returns the number of records resolved.
    pub fn collision_resolution(&mut self, world: &mut World, state: &mut SimulationState) -> usize {
        let mut ctx = ResolveContext::new(world, state, &self.config, self.hooks.as_mut());
        let resolved = self.router.resolve_all(&mut ctx, self.detector.queue_mut());
        if resolved > 0 {
            log::trace!("resolved {} collision records", resolved);
        }
        resolved
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for CollisionSystem {
    fn run(&mut self, world: &mut World, state: &mut SimulationState, elapsed_ms: f32) {
        self.step(world, state, elapsed_ms);
    }
}
