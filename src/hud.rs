//! HUD text and geometry
//!
//! Pure helpers so every host draws the same HUD. Drawing itself is the
//! host's job.

use serde::{Deserialize, Serialize};

use crate::sim::{UpgradeCosts, UpgradeKind};

/// Full health bar width in pixels
pub const HEALTH_BAR_WIDTH: f32 = 100.0;
pub const HEALTH_BAR_HEIGHT: f32 = 10.0;
pub const HEALTH_BAR_COLOR: u32 = 0xff0000;

/// Tint applied to the player on death
pub const DEATH_TINT: u32 = 0xff0000;
/// Banner shown centred on the field on death
pub const GAME_OVER_TEXT: &str = "Game Over";

/// Axis-aligned rectangle to fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthBar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: u32,
}

pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

/// Key help line with current prices
pub fn upgrade_prompt(costs: &UpgradeCosts) -> String {
    let parts: Vec<String> = UpgradeKind::ALL
        .iter()
        .map(|kind| format!("{}: {} ({})", kind.key(), kind.label(), costs.get(*kind)))
        .collect();
    format!("Press {}", parts.join(", "))
}

/// Health bar for `fraction` (health / max_health), below the HUD text
pub fn health_bar(fraction: f32) -> HealthBar {
    HealthBar {
        x: 10.0,
        y: 70.0,
        width: HEALTH_BAR_WIDTH * fraction.clamp(0.0, 1.0),
        height: HEALTH_BAR_HEIGHT,
        color: HEALTH_BAR_COLOR,
    }
}
