//! Dodge Upgrade entry point
//!
//! The playable game runs in the browser through `web::WebGame`. The native
//! binary plays a seeded headless session and prints what a host would draw.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use dodge_upgrade::hud;
    use dodge_upgrade::settings::GameConfig;
    use dodge_upgrade::sim::{
        GameState, PresentationSink, UpgradeKind, on_collision, on_key_down, on_overlap, on_tick,
    };

    /// Frame time of the simulated host (60 FPS)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after this much simulated time
    const MAX_RUN_MS: f64 = 120_000.0;

    /// Prints notifications the way a host would present them
    struct ConsoleSink;

    impl PresentationSink for ConsoleSink {
        fn on_score_changed(&mut self, score: u64) {
            println!("{}", hud::score_text(score));
        }

        fn on_health_changed(&mut self, fraction: f32) {
            let bar = hud::health_bar(fraction);
            println!("Health bar: {:.0}/{:.0}px", bar.width, hud::HEALTH_BAR_WIDTH);
        }

        fn on_player_death(&mut self) {
            println!("*** {} ***", hud::GAME_OVER_TEXT);
        }

        fn on_upgrade_applied(&mut self, kind: UpgradeKind, new_cost: u64) {
            println!("Upgraded {} (next costs {})", kind.label(), new_cost);
        }

        fn on_player_resized(&mut self, size: f32) {
            println!("Player scale {:.1}", size);
        }
    }

    fn load_config() -> Result<GameConfig> {
        match std::env::args_os().nth(1).map(PathBuf::from) {
            Some(path) => GameConfig::from_path(&path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => Ok(GameConfig::default()),
        }
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        log::info!("Dodge Upgrade (native) starting...");

        let config = load_config()?;
        let seed = config.seed.unwrap_or(0xD0D6E);
        let mut state = GameState::new(&config, seed).context("invalid config")?;
        let mut sink = ConsoleSink;

        println!("{}", hud::upgrade_prompt(&state.costs()));

        // Scripted host: every third enemy lands a hit, the rest are
        // absorbed. Upgrades are bought round-robin whenever affordable.
        let mut next_upgrade = 0;
        let mut elapsed = 0.0;
        while !state.is_over() && elapsed < MAX_RUN_MS {
            elapsed += FRAME_MS;
            for spawn in on_tick(&mut state, FRAME_MS) {
                if spawn.id % 3 == 0 {
                    on_collision(&mut state, spawn.id, &mut sink);
                } else {
                    on_overlap(&mut state, spawn.id, &mut sink);
                }
            }

            let kind = UpgradeKind::ALL[next_upgrade % UpgradeKind::ALL.len()];
            let bought = on_key_down(&mut state, kind.key(), &mut sink)
                .is_some_and(|o| o.is_purchased());
            if bought {
                next_upgrade += 1;
                println!("{}", hud::upgrade_prompt(&state.costs()));
            }
        }

        let snapshot = serde_json::to_string_pretty(&state.snapshot())
            .context("serializing final state")?;
        println!("Final state after {:.0}ms:\n{}", elapsed, snapshot);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
