//! # Core Simulation Module
//!
//! Configuration and game-wide state shared by every subsystem.
//!
//! ## Organization
//!
//! - **Config**: Gameplay tunables loaded from TOML or RON
//! - **State**: Freeze flags, player handle and equipped weapon

pub mod config;
pub mod state;

pub use config::{CollisionConfig, Config, ConfigError, ConfigFormat, SimulationConfig};
pub use state::{FreezeFlags, Loadout, SimulationState};
