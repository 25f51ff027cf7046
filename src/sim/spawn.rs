//! Enemy spawn timer
//!
//! Spawns are independent of player state. Randomness comes from a seeded
//! PCG so a run replays identically from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_SPAWNS_PER_TICK;
use crate::settings::GameConfig;

/// Slack for float error when summing frame deltas
const TIMER_EPSILON_MS: f64 = 1e-6;

/// A new enemy for the host to create
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Fixed-interval spawner
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    interval_ms: f64,
    /// Fractional milliseconds carried between ticks
    accumulator_ms: f64,
    field_width: u32,
    field_height: u32,
    enemy_speed: i32,
    rng: Pcg32,
}

impl SpawnScheduler {
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            interval_ms: f64::from(config.spawn_interval_ms.max(1)),
            accumulator_ms: 0.0,
            field_width: config.field_width,
            field_height: config.field_height,
            enemy_speed: config.enemy_speed.max(0),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Advance the timer by `elapsed_ms`, returning how many spawns are due.
    ///
    /// Hosts report fractional frame times, so the remainder is carried.
    /// At most `MAX_SPAWNS_PER_TICK` are returned; time owed beyond that is
    /// dropped. Non-finite or negative elapsed time is ignored.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }
        self.accumulator_ms += elapsed_ms;

        // Summed frame deltas land a hair under the interval
        let due = ((self.accumulator_ms + TIMER_EPSILON_MS) / self.interval_ms).floor();
        self.accumulator_ms = (self.accumulator_ms - due * self.interval_ms).max(0.0);

        if due > f64::from(MAX_SPAWNS_PER_TICK) {
            log::debug!("Spawn backlog of {} trimmed to {}", due, MAX_SPAWNS_PER_TICK);
            return MAX_SPAWNS_PER_TICK;
        }
        due as u32
    }

    /// Roll placement and velocity for enemy `id`
    pub fn roll(&mut self, id: u32) -> EnemySpawn {
        let x = self.rng.random_range(0..=self.field_width);
        let y = self.rng.random_range(0..=self.field_height);
        let speed = self.enemy_speed;
        let vx = self.rng.random_range(-speed..=speed);
        let vy = self.rng.random_range(-speed..=speed);

        EnemySpawn {
            id,
            pos: Vec2::new(x as f32, y as f32),
            vel: Vec2::new(vx as f32, vy as f32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_spawn_per_interval() {
        let mut spawner = SpawnScheduler::new(&GameConfig::default(), 1);
        assert_eq!(spawner.advance(400.0), 0);
        assert_eq!(spawner.advance(599.0), 0);
        assert_eq!(spawner.advance(1.0), 1);
        assert_eq!(spawner.advance(2500.0), 2);
        // 500ms carried over
        assert_eq!(spawner.advance(500.0), 1);
    }

    #[test]
    fn test_fractional_frames_keep_interval() {
        for hz in [60.0, 144.0] {
            let mut spawner = SpawnScheduler::new(&GameConfig::default(), 1);
            let frame_ms = 1000.0 / hz;
            let frames = hz as u32;

            let spawns: u32 = (0..frames).map(|_| spawner.advance(frame_ms)).sum();
            assert_eq!(spawns, 1, "one spawn after one second at {} Hz", hz);

            // A minute of frames stays on schedule
            let spawns: u32 = (0..frames * 59).map(|_| spawner.advance(frame_ms)).sum();
            assert_eq!(spawns, 59, "no drift at {} Hz", hz);
        }
    }

    #[test]
    fn test_bad_elapsed_ignored() {
        let mut spawner = SpawnScheduler::new(&GameConfig::default(), 1);
        assert_eq!(spawner.advance(-5000.0), 0);
        assert_eq!(spawner.advance(f64::NAN), 0);
        assert_eq!(spawner.advance(f64::INFINITY), 0);
        assert_eq!(spawner.advance(999.0), 0);
        assert_eq!(spawner.advance(1.0), 1);
    }

    #[test]
    fn test_backlog_is_capped() {
        let mut spawner = SpawnScheduler::new(&GameConfig::default(), 1);
        assert_eq!(spawner.advance(60_000.0), MAX_SPAWNS_PER_TICK);
        assert_eq!(spawner.advance(0.0), 0);
    }

    #[test]
    fn test_spawns_within_bounds() {
        let config = GameConfig::default();
        let mut spawner = SpawnScheduler::new(&config, 777);
        for id in 0..500 {
            let spawn = spawner.roll(id);
            assert_eq!(spawn.id, id);
            assert!((0.0..=800.0).contains(&spawn.pos.x));
            assert!((0.0..=600.0).contains(&spawn.pos.y));
            assert!((-100.0..=100.0).contains(&spawn.vel.x));
            assert!((-100.0..=100.0).contains(&spawn.vel.y));
            assert_eq!(spawn.pos.x.fract(), 0.0);
        }
    }

    #[test]
    fn test_determinism() {
        let config = GameConfig::default();
        let mut a = SpawnScheduler::new(&config, 99999);
        let mut b = SpawnScheduler::new(&config, 99999);
        for id in 0..20 {
            assert_eq!(a.roll(id), b.roll(id));
        }
    }

    #[test]
    fn test_zero_enemy_speed() {
        let config = GameConfig {
            enemy_speed: 0,
            ..Default::default()
        };
        let mut spawner = SpawnScheduler::new(&config, 3);
        assert_eq!(spawner.roll(1).vel, Vec2::ZERO);
    }
}
