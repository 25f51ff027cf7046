//! Contact resolution between the player and an enemy
//!
//! Two channels: an overlap is a kill (score), a collision is a hit
//! (damage). Neither touches the other's field.

use super::stats::StatModel;
use crate::consts::COLLISION_DAMAGE;

/// State delta from one contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactOutcome {
    /// Overlap kill; score after crediting strength
    Kill { score: u64 },
    /// Collider hit
    Damage {
        health: u32,
        /// health / max_health after the hit
        fraction: f32,
        /// This hit killed the player
        died: bool,
    },
    /// Player already dead
    Ignored,
}

/// Overlap channel: credit one kill at the player's strength
pub fn resolve_overlap(model: &mut StatModel) -> ContactOutcome {
    if model.is_dead() {
        return ContactOutcome::Ignored;
    }
    model.apply_kill(model.stats().strength);
    ContactOutcome::Kill {
        score: model.score(),
    }
}

/// Collision channel: take one hit of damage
pub fn resolve_collision(model: &mut StatModel) -> ContactOutcome {
    if model.is_dead() {
        return ContactOutcome::Ignored;
    }
    let died = model.apply_damage(COLLISION_DAMAGE);
    ContactOutcome::Damage {
        health: model.stats().health,
        fraction: model.health_fraction(),
        died,
    }
}
