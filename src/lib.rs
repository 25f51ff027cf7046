//! Dodge Upgrade - arcade dodge-and-upgrade game core
//!
//! Core modules:
//! - `sim`: Game state, upgrades, combat and spawning (no rendering)
//! - `settings`: Startup configuration
//! - `hud`: Text and geometry helpers for the host's HUD
//! - `web`: wasm-bindgen host adapter (wasm32 only)

pub mod error;
pub mod hud;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::ConfigError;
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: u32 = 800;
    pub const FIELD_HEIGHT: u32 = 600;

    /// One enemy spawns per interval
    pub const SPAWN_INTERVAL_MS: u32 = 1000;
    /// Cap on spawns produced by a single tick (host stalls, tab switches)
    pub const MAX_SPAWNS_PER_TICK: u32 = 5;
    /// Enemy velocity range per axis is [-ENEMY_SPEED, ENEMY_SPEED]
    pub const ENEMY_SPEED: i32 = 100;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_SIZE: f32 = 1.0;
    pub const PLAYER_STRENGTH: u32 = 1;
    pub const PLAYER_MAX_HEALTH: u32 = 5;

    /// Damage taken per collider hit
    pub const COLLISION_DAMAGE: u32 = 1;

    /// Starting upgrade costs
    pub const SPEED_COST: u64 = 10;
    pub const SIZE_COST: u64 = 10;
    pub const STRENGTH_COST: u64 = 15;
    pub const HEALTH_COST: u64 = 20;

    /// Cost escalation per purchase
    pub const SPEED_COST_STEP: u64 = 5;
    pub const SIZE_COST_STEP: u64 = 5;
    pub const STRENGTH_COST_STEP: u64 = 10;
    pub const HEALTH_COST_STEP: u64 = 10;

    /// Stat gained per purchase
    pub const SPEED_GAIN: f32 = 20.0;
    pub const SIZE_GAIN: f32 = 0.1;
    pub const STRENGTH_GAIN: u32 = 1;
    pub const MAX_HEALTH_GAIN: u32 = 1;
}
