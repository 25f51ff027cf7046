//! Player stats and score
//!
//! `StatModel` is the only place player attributes change. Once health hits
//! zero every mutation becomes a no-op.

use serde::{Deserialize, Serialize};

use super::upgrade::UpgradeKind;
use crate::consts::*;

/// Player attributes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    /// Movement speed per axis (units/second)
    pub speed: f32,
    /// Visual/collision scale multiplier
    pub size: f32,
    /// Score gained per overlap kill
    pub strength: u32,
    pub max_health: u32,
    /// In [0, max_health]; 0 is dead
    pub health: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            size: PLAYER_SIZE,
            strength: PLAYER_STRENGTH,
            max_health: PLAYER_MAX_HEALTH,
            health: PLAYER_MAX_HEALTH,
        }
    }
}

/// Player stats plus the score they are bought with
#[derive(Debug, Clone, PartialEq)]
pub struct StatModel {
    stats: PlayerStats,
    score: u64,
}

impl StatModel {
    pub fn new(stats: PlayerStats) -> Self {
        Self::with_score(stats, 0)
    }

    pub fn with_score(stats: PlayerStats, score: u64) -> Self {
        Self { stats, score }
    }

    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn is_dead(&self) -> bool {
        self.stats.health == 0
    }

    /// Fraction of max health remaining, for the health bar
    pub fn health_fraction(&self) -> f32 {
        if self.stats.max_health == 0 {
            return 0.0;
        }
        self.stats.health as f32 / self.stats.max_health as f32
    }

    /// Remove health, flooring at zero.
    ///
    /// Returns true only for the call that takes health from above zero to
    /// zero, so a run reports its death exactly once.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.stats.health = self.stats.health.saturating_sub(amount);
        self.is_dead()
    }

    /// Credit an overlap kill
    pub fn apply_kill(&mut self, strength: u32) {
        if self.is_dead() {
            return;
        }
        self.score = self.score.saturating_add(u64::from(strength));
    }

    /// Apply the stat effect of one purchased upgrade
    pub fn apply_upgrade(&mut self, kind: UpgradeKind) {
        if self.is_dead() {
            return;
        }
        match kind {
            UpgradeKind::Speed => self.stats.speed += SPEED_GAIN,
            UpgradeKind::Size => self.stats.size += SIZE_GAIN,
            UpgradeKind::Strength => self.stats.strength += STRENGTH_GAIN,
            UpgradeKind::Health => {
                // Buying health is also a full heal
                self.stats.max_health += MAX_HEALTH_GAIN;
                self.stats.health = self.stats.max_health;
            }
        }
    }

    /// Deduct a purchase price. Fails without mutation if unaffordable.
    pub(crate) fn spend(&mut self, amount: u64) -> bool {
        if self.is_dead() || self.score < amount {
            return false;
        }
        self.score -= amount;
        true
    }
}
