//! Game state and presentation notifications
//!
//! One `GameState` per run. Handlers in `tick` take it by `&mut` and report
//! what changed through a `PresentationSink`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::spawn::SpawnScheduler;
use super::stats::{PlayerStats, StatModel};
use super::upgrade::{UpgradeCatalog, UpgradeCosts, UpgradeKind};
use crate::error::ConfigError;
use crate::settings::GameConfig;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Health reached zero. Terminal.
    Dead,
}

/// State changes the host should present
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    ScoreChanged { score: u64 },
    /// Health bar fill, health / max_health
    HealthChanged { fraction: f32 },
    /// Pause physics, tint the player, show the game-over banner
    PlayerDeath,
    UpgradeApplied { kind: UpgradeKind, new_cost: u64 },
    /// Player sprite scale changed
    PlayerResized { size: f32 },
}

/// Receiver for state-change notifications. The core never renders.
pub trait PresentationSink {
    fn on_score_changed(&mut self, score: u64);
    fn on_health_changed(&mut self, fraction: f32);
    fn on_player_death(&mut self);
    fn on_upgrade_applied(&mut self, kind: UpgradeKind, new_cost: u64);
    fn on_player_resized(&mut self, _size: f32) {}
}

/// Collects notifications in order, for batching to the host
impl PresentationSink for Vec<GameEvent> {
    fn on_score_changed(&mut self, score: u64) {
        self.push(GameEvent::ScoreChanged { score });
    }

    fn on_health_changed(&mut self, fraction: f32) {
        self.push(GameEvent::HealthChanged { fraction });
    }

    fn on_player_death(&mut self) {
        self.push(GameEvent::PlayerDeath);
    }

    fn on_upgrade_applied(&mut self, kind: UpgradeKind, new_cost: u64) {
        self.push(GameEvent::UpgradeApplied { kind, new_cost });
    }

    fn on_player_resized(&mut self, size: f32) {
        self.push(GameEvent::PlayerResized { size });
    }
}

/// Read-only view of a run, for the host's HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Run seed, for replaying the spawn sequence
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub stats: PlayerStats,
    pub costs: UpgradeCosts,
    pub health_fraction: f32,
    pub live_enemies: usize,
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) phase: GamePhase,
    pub(crate) model: StatModel,
    pub(crate) catalog: UpgradeCatalog,
    pub(crate) spawner: SpawnScheduler,
    /// Ids of enemies not yet destroyed
    live_enemies: BTreeSet<u32>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Start a run from `config` with the given seed.
    ///
    /// The config is validated first, so a run always starts alive.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("Starting run (seed {})", seed);
        Ok(Self {
            seed,
            phase: GamePhase::Playing,
            model: StatModel::new(config.initial_stats),
            catalog: UpgradeCatalog::new(config.initial_costs),
            spawner: SpawnScheduler::new(config, seed),
            live_enemies: BTreeSet::new(),
            next_id: 1,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Dead
    }

    pub fn score(&self) -> u64 {
        self.model.score()
    }

    pub fn stats(&self) -> PlayerStats {
        self.model.stats()
    }

    pub fn costs(&self) -> UpgradeCosts {
        self.catalog.costs()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            seed: self.seed,
            phase: self.phase,
            score: self.model.score(),
            stats: self.model.stats(),
            costs: self.catalog.costs(),
            health_fraction: self.model.health_fraction(),
            live_enemies: self.live_enemies.len(),
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[cfg(test)]
    pub(crate) fn is_enemy_live(&self, id: u32) -> bool {
        self.live_enemies.contains(&id)
    }

    pub(crate) fn register_enemy(&mut self, id: u32) {
        self.live_enemies.insert(id);
    }

    /// Destroy an enemy. Returns false if it was not live.
    pub(crate) fn take_enemy(&mut self, id: u32) -> bool {
        self.live_enemies.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(&GameConfig::default(), 42).expect("default config is valid")
    }

    #[test]
    fn test_new_state_from_defaults() {
        let state = new_state();
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.snapshot().seed, 42);
        assert_eq!(state.score(), 0);
        assert_eq!(state.stats(), PlayerStats::default());
        assert_eq!(state.costs(), UpgradeCosts::default());
        assert_eq!(state.snapshot().health_fraction, 1.0);
    }

    #[test]
    fn test_enemy_registry() {
        let mut state = new_state();
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        state.register_enemy(a);
        state.register_enemy(b);

        assert!(state.take_enemy(a));
        assert!(!state.take_enemy(a));
        assert!(state.is_enemy_live(b));
        assert!(!state.take_enemy(99));
        assert_eq!(state.snapshot().live_enemies, 1);
    }

    #[test]
    fn test_dead_start_rejected() {
        let mut config = GameConfig::default();
        config.initial_stats.health = 0;
        assert!(matches!(
            GameState::new(&config, 42),
            Err(ConfigError::HealthOutOfRange { health: 0, max_health: 5 })
        ));

        let mut config = GameConfig::default();
        config.initial_stats.max_health = 0;
        config.initial_stats.health = 0;
        assert!(matches!(
            GameState::new(&config, 42),
            Err(ConfigError::NonPositiveStat { stat: "max_health" })
        ));

        let config = GameConfig {
            spawn_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(&config, 42),
            Err(ConfigError::ZeroSpawnInterval)
        ));
    }

    #[test]
    fn test_events_serialize_tagged() {
        let json = serde_json::to_string(&GameEvent::UpgradeApplied {
            kind: UpgradeKind::Size,
            new_cost: 15,
        })
        .expect("serialize");
        assert_eq!(json, r#"{"type":"upgrade_applied","kind":"size","new_cost":15}"#);

        let json = serde_json::to_string(&GameEvent::PlayerDeath).expect("serialize");
        assert_eq!(json, r#"{"type":"player_death"}"#);
    }
}
