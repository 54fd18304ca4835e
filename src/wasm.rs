//! Browser bindings. The page owns the DOM; it forwards clicks here and
//! redraws from the `GameState` handed to its callback.

use js_sys::Function;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::game::{GameEngine, Presenter};
use crate::types::{GameState, Position};

struct JsPresenter {
    on_change: Function,
}

impl Presenter for JsPresenter {
    fn render(&mut self, state: &GameState) {
        let value = match serde_wasm_bindgen::to_value(state) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "failed to serialize game state");
                return;
            }
        };
        if let Err(err) = self.on_change.call1(&JsValue::NULL, &value) {
            warn!(?err, "render callback threw");
        }
    }
}

#[wasm_bindgen]
pub struct OthelloGame {
    engine: GameEngine,
}

#[wasm_bindgen]
impl OthelloGame {
    /// `on_change` is called with the new state right away and after every
    /// accepted move or reset.
    #[wasm_bindgen(constructor)]
    pub fn new(on_change: Function) -> Self {
        console_error_panic_hook::set_once();
        Self {
            engine: GameEngine::new(Box::new(JsPresenter { on_change })),
        }
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Returns `false` for an illegal click. Throws on off-board coordinates.
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, row: u8, col: u8) -> Result<bool, JsError> {
        let pos = Position::new(row, col)?;
        Ok(self.engine.attempt_move(pos).accepted)
    }

    /// 0=empty, 1=black, 2=white.
    pub fn cell(&self, row: u8, col: u8) -> Result<u8, JsError> {
        let pos = Position::new(row, col)?;
        Ok(self.engine.cell(pos).to_u8())
    }

    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.engine.current_player().to_u8()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    pub fn status(&self) -> String {
        self.engine.status().to_string()
    }

    pub fn score(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.to_game_result())?)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.engine.to_game_state())?)
    }
}
