//! Configuration errors
//!
//! Gameplay itself never fails; only loading a `GameConfig` can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("play field must be non-empty, got {width}x{height}")]
    EmptyField { width: u32, height: u32 },
    #[error("spawn interval must be at least 1 ms")]
    ZeroSpawnInterval,
    #[error("enemy speed range must be non-negative, got {0}")]
    NegativeEnemySpeed(i32),
    #[error("player stat `{stat}` must be positive")]
    NonPositiveStat { stat: &'static str },
    #[error("starting health {health} outside 1..={max_health}")]
    HealthOutOfRange { health: u32, max_health: u32 },
    #[error("upgrade cost for `{kind}` must be positive")]
    ZeroCost { kind: &'static str },
}
