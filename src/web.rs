//! Browser host adapter
//!
//! The JS engine owns sprites, physics and input polling. It forwards
//! timer ticks, key presses and contact callbacks here and drains the
//! resulting notifications as JSON.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::hud;
use crate::settings::GameConfig;
use crate::sim::{
    DirectionKeys, GameEvent, GameState, on_collision, on_key_down, on_overlap, on_tick,
    player_velocity,
};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Dodge Upgrade starting...");
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// One run, driven by the JS host
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    /// Notifications not yet drained by the host
    events: Vec<GameEvent>,
}

#[wasm_bindgen]
impl WebGame {
    /// Start a run. `config_json` overrides the stored/default config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebGame, JsValue> {
        let config = match config_json {
            Some(json) => {
                GameConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => GameConfig::load(),
        };
        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let state =
            GameState::new(&config, seed).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WebGame {
            state,
            events: Vec::new(),
        })
    }

    /// Advance the spawn timer by the engine's frame delta (fractional ms).
    /// Returns a JSON array of enemies to create.
    pub fn tick(&mut self, elapsed_ms: f64) -> Result<String, JsValue> {
        let spawns = on_tick(&mut self.state, elapsed_ms);
        to_json(&spawns)
    }

    /// Forward a `keydown` event's `key`. Returns true if an upgrade was bought.
    pub fn key_down(&mut self, key: &str) -> bool {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return false;
        };
        on_key_down(&mut self.state, c, &mut self.events).is_some_and(|o| o.is_purchased())
    }

    pub fn overlap(&mut self, enemy_id: u32) -> bool {
        on_overlap(&mut self.state, enemy_id, &mut self.events)
    }

    pub fn collision(&mut self, enemy_id: u32) -> bool {
        on_collision(&mut self.state, enemy_id, &mut self.events)
    }

    /// Player velocity as `[vx, vy]` for the held cursor keys
    pub fn velocity(&self, left: bool, right: bool, up: bool, down: bool) -> Vec<f32> {
        let keys = DirectionKeys {
            left,
            right,
            up,
            down,
        };
        player_velocity(&self.state, &keys).to_array().to_vec()
    }

    /// Take all pending notifications as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        let json = to_json(&self.events)?;
        self.events.clear();
        Ok(json)
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&self.state.snapshot())
    }

    pub fn health_bar(&self) -> Result<String, JsValue> {
        to_json(&hud::health_bar(self.state.snapshot().health_fraction))
    }

    pub fn score_text(&self) -> String {
        hud::score_text(self.state.score())
    }

    pub fn upgrade_prompt(&self) -> String {
        hud::upgrade_prompt(&self.state.costs())
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }
}
