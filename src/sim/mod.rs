//! Game simulation module
//!
//! All gameplay rules live here. This module must stay host-agnostic:
//! - No rendering, physics integration, or input polling
//! - Seeded RNG only
//! - Every change reported through a `PresentationSink`

pub mod combat;
pub mod spawn;
pub mod state;
pub mod stats;
pub mod tick;
pub mod upgrade;

pub use combat::{ContactOutcome, resolve_collision, resolve_overlap};
pub use spawn::{EnemySpawn, SpawnScheduler};
pub use state::{GameEvent, GamePhase, GameSnapshot, GameState, PresentationSink};
pub use stats::{PlayerStats, StatModel};
pub use tick::{DirectionKeys, on_collision, on_key_down, on_overlap, on_tick, player_velocity};
pub use upgrade::{PurchaseOutcome, PurchaseReceipt, UpgradeCatalog, UpgradeCosts, UpgradeKind};
