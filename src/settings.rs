//! Startup configuration
//!
//! Fixed once a run starts; there is no runtime reconfiguration.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::{PlayerStats, UpgradeCosts, UpgradeKind};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    /// Play field width (spawn x range is 0..=width)
    pub field_width: u32,
    /// Play field height (spawn y range is 0..=height)
    pub field_height: u32,

    // === Spawning ===
    /// Milliseconds between enemy spawns
    pub spawn_interval_ms: u32,
    /// Enemy velocity range per axis is [-enemy_speed, enemy_speed]
    pub enemy_speed: i32,
    /// Run seed; `None` lets the host pick one (clock time on web)
    pub seed: Option<u64>,

    // === Player ===
    pub initial_stats: PlayerStats,
    pub initial_costs: UpgradeCosts,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            enemy_speed: ENEMY_SPEED,
            seed: None,
            initial_stats: PlayerStats::default(),
            initial_costs: UpgradeCosts::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width == 0 || self.field_height == 0 {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.enemy_speed < 0 {
            return Err(ConfigError::NegativeEnemySpeed(self.enemy_speed));
        }

        let stats = &self.initial_stats;
        // Also rejects NaN
        if !(stats.speed > 0.0) {
            return Err(ConfigError::NonPositiveStat { stat: "speed" });
        }
        if !(stats.size > 0.0) {
            return Err(ConfigError::NonPositiveStat { stat: "size" });
        }
        if stats.strength == 0 {
            return Err(ConfigError::NonPositiveStat { stat: "strength" });
        }
        if stats.max_health == 0 {
            return Err(ConfigError::NonPositiveStat { stat: "max_health" });
        }
        if stats.health == 0 || stats.health > stats.max_health {
            return Err(ConfigError::HealthOutOfRange {
                health: stats.health,
                max_health: stats.max_health,
            });
        }

        for kind in UpgradeKind::ALL {
            if self.initial_costs.get(kind) == 0 {
                return Err(ConfigError::ZeroCost { kind: kind.as_str() });
            }
        }
        Ok(())
    }

    /// Centre of the play field, where the player starts
    pub fn player_start(&self) -> glam::Vec2 {
        glam::Vec2::new(self.field_width as f32 / 2.0, self.field_height as f32 / 2.0)
    }

    /// LocalStorage key for a developer override (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dodge_upgrade_config";

    /// Load the config override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config override from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Load a config file from disk (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
