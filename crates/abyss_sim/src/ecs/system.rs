//! System trait

use crate::core::SimulationState;
use crate::ecs::World;

/// A per-frame simulation step over the world
pub trait System {
    /// Run the system once
    ///
    /// `elapsed_ms` is the time since the previous frame.
    fn run(&mut self, world: &mut World, state: &mut SimulationState, elapsed_ms: f32);
}
