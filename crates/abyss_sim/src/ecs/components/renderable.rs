//! Renderable component
//!
//! Handle to an entity's render representation. The renderer owns the
//! actual mesh and texture; removing this component tells it to stop
//! drawing the entity.

use crate::ecs::Component;

/// Render representation handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderable {
    /// Texture asset drawn for the entity
    pub texture_id: u32,
}

impl Component for Renderable {}

impl Renderable {
    /// Create a renderable for a texture
    pub fn new(texture_id: u32) -> Self {
        Self { texture_id }
    }
}
