//! # Simulation Configuration
//!
//! Gameplay constants used by collision resolution, plus the logging
//! settings of the host. Everything here has a sensible default so a
//! missing config file is never an error.
//!
//! ## Example
//!
//! ```toml
//! [collision]
//! damage_indicator_ms = 150.0
//! shrimp_cone_aoe = true
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::math::constants::QUARTER_PI;

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// # Collision Configuration
///
/// Tunables read by the collision resolvers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// How long the hit flash shows after taking damage
    pub damage_indicator_ms: f32,

    /// Oxygen change applied to both the sharkman and a crate it smashes
    pub sharkman_self_damage: f32,

    /// Speed added to the sharkman each time it smashes a crate
    pub sharkman_speed_increase: f32,

    /// Cooldown before the sharkman AI picks its next move after a smash
    pub sharkman_ai_cooldown_ms: f32,

    /// Half opening angle of the shrimp splash cone, in radians
    pub shrimp_cone_half_angle: f32,

    /// Whether shrimp hits splash onto enemies inside the cone
    pub shrimp_cone_aoe: bool,
}

impl CollisionConfig {
    /// Create a collision configuration with default values
    pub fn new() -> Self {
        Self {
            damage_indicator_ms: 100.0,
            sharkman_self_damage: -10.0,
            sharkman_speed_increase: 50.0,
            sharkman_ai_cooldown_ms: 1000.0,
            shrimp_cone_half_angle: QUARTER_PI,
            shrimp_cone_aoe: false,
        }
    }

    /// Set the damage indicator duration
    pub fn with_damage_indicator_ms(mut self, ms: f32) -> Self {
        self.damage_indicator_ms = ms;
        self
    }

    /// Enable or disable the shrimp cone splash
    pub fn with_shrimp_cone_aoe(mut self, enabled: bool) -> Self {
        self.shrimp_cone_aoe = enabled;
        self
    }

    /// Set the sharkman crate-smash tunables
    pub fn with_sharkman(mut self, self_damage: f32, speed_increase: f32, ai_cooldown_ms: f32) -> Self {
        self.sharkman_self_damage = self_damage;
        self.sharkman_speed_increase = speed_increase;
        self.sharkman_ai_cooldown_ms = ai_cooldown_ms;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.damage_indicator_ms < 0.0 {
            return Err(ConfigError::Invalid {
                field: "damage_indicator_ms",
                reason: "must not be negative".to_string(),
            });
        }
        if !(0.0..=std::f32::consts::PI).contains(&self.shrimp_cone_half_angle) {
            return Err(ConfigError::Invalid {
                field: "shrimp_cone_half_angle",
                reason: format!("{} is outside [0, π]", self.shrimp_cone_half_angle),
            });
        }
        if self.sharkman_ai_cooldown_ms < 0.0 {
            return Err(ConfigError::Invalid {
                field: "sharkman_ai_cooldown_ms",
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for CollisionConfig {}

/// # Simulation Configuration
///
/// Top-level configuration a host application loads at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub log_filter: String,

    /// Collision tunables
    pub collision: CollisionConfig,
}

impl SimulationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.collision.validate()
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            log_filter: "abyss_sim=info".to_string(),
            collision: CollisionConfig::default(),
        }
    }
}

impl Config for SimulationConfig {}
