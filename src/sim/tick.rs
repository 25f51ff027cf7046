//! Host-facing event handlers
//!
//! The host calls these one at a time, in frame order. Once the run is over
//! every handler is a no-op; the host may keep sending events.

use glam::Vec2;

use super::combat::{ContactOutcome, resolve_collision, resolve_overlap};
use super::spawn::EnemySpawn;
use super::state::{GamePhase, GameState, PresentationSink};
use super::upgrade::{PurchaseOutcome, UpgradeKind};

/// Direction keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Player velocity for this frame.
///
/// Each axis moves at full speed independently, so diagonals are faster by
/// sqrt(2). Left beats right and up beats down. Screen y grows downward.
pub fn player_velocity(state: &GameState, keys: &DirectionKeys) -> Vec2 {
    if state.is_over() {
        return Vec2::ZERO;
    }
    let speed = state.model.stats().speed;

    let x = if keys.left {
        -speed
    } else if keys.right {
        speed
    } else {
        0.0
    };
    let y = if keys.up {
        -speed
    } else if keys.down {
        speed
    } else {
        0.0
    };
    Vec2::new(x, y)
}

/// Advance the spawn timer, returning enemies for the host to create
pub fn on_tick(state: &mut GameState, elapsed_ms: f64) -> Vec<EnemySpawn> {
    if state.is_over() {
        return Vec::new();
    }

    let due = state.spawner.advance(elapsed_ms);
    let mut spawns = Vec::with_capacity(due as usize);
    for _ in 0..due {
        let id = state.next_entity_id();
        let spawn = state.spawner.roll(id);
        state.register_enemy(id);
        log::debug!("Spawned enemy {} at {:?} moving {:?}", id, spawn.pos, spawn.vel);
        spawns.push(spawn);
    }
    spawns
}

/// Handle a key press. Keys 1-4 buy upgrades; anything else is ignored.
///
/// Returns the purchase outcome for upgrade keys.
pub fn on_key_down(
    state: &mut GameState,
    key: char,
    sink: &mut impl PresentationSink,
) -> Option<PurchaseOutcome> {
    let kind = UpgradeKind::from_key(key)?;
    let outcome = state.catalog.try_purchase(kind, &mut state.model);

    match outcome {
        PurchaseOutcome::Purchased(receipt) => {
            log::info!(
                "Bought {} for {} (next {}), score {}",
                kind.as_str(),
                receipt.charged,
                receipt.new_cost,
                receipt.new_score
            );
            sink.on_upgrade_applied(kind, receipt.new_cost);
            match kind {
                UpgradeKind::Size => sink.on_player_resized(state.model.stats().size),
                UpgradeKind::Health => sink.on_health_changed(state.model.health_fraction()),
                UpgradeKind::Speed | UpgradeKind::Strength => {}
            }
            sink.on_score_changed(receipt.new_score);
        }
        PurchaseOutcome::Unaffordable { cost, score } => {
            log::trace!("Cannot afford {} ({} < {})", kind.as_str(), score, cost);
        }
        PurchaseOutcome::Terminal => {
            log::trace!("Ignoring purchase after game over");
        }
    }
    Some(outcome)
}

/// Overlap channel. Destroys the enemy and credits a kill.
///
/// Returns false if the contact was ignored (enemy not live, or run over).
pub fn on_overlap(state: &mut GameState, enemy_id: u32, sink: &mut impl PresentationSink) -> bool {
    // Checked before the enemy is consumed, so an ignored contact leaves it live
    if state.is_over() || state.model.is_dead() || !state.take_enemy(enemy_id) {
        log::trace!("Ignoring overlap with enemy {}", enemy_id);
        return false;
    }

    match resolve_overlap(&mut state.model) {
        ContactOutcome::Kill { score } => {
            log::debug!("Killed enemy {}, score {}", enemy_id, score);
            sink.on_score_changed(score);
            true
        }
        _ => false,
    }
}

/// Collision channel. Destroys the enemy and deals one point of damage;
/// the hit that empties health ends the run.
///
/// Returns false if the contact was ignored (enemy not live, or run over).
pub fn on_collision(
    state: &mut GameState,
    enemy_id: u32,
    sink: &mut impl PresentationSink,
) -> bool {
    if state.is_over() || state.model.is_dead() || !state.take_enemy(enemy_id) {
        log::trace!("Ignoring collision with enemy {}", enemy_id);
        return false;
    }

    match resolve_collision(&mut state.model) {
        ContactOutcome::Damage {
            health,
            fraction,
            died,
        } => {
            log::debug!("Hit by enemy {}, health {}", enemy_id, health);
            sink.on_health_changed(fraction);
            if died {
                state.phase = GamePhase::Dead;
                log::info!("Game over, final score {}", state.model.score());
                sink.on_player_death();
            }
            true
        }
        _ => false,
    }
}
