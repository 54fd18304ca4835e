#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Reflect};
use othello::wasm::OthelloGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn noop() -> Function {
    Function::new_no_args("")
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn constructor_pushes_initial_state() {
    let frames = Array::new();
    let record = Function::new_with_args("s", "this.push(s)").bind(&frames);

    let _game = OthelloGame::new(record);

    assert_eq!(frames.length(), 1);
    let state = frames.get(0);
    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
    assert_eq!(field(&state, "status").as_string().as_deref(), Some("Black to move"));
}

#[wasm_bindgen_test]
fn attempt_move_accepts_and_rejects() {
    let mut game = OthelloGame::new(noop());

    assert!(!game.attempt_move(3, 3).unwrap());
    assert!(game.attempt_move(2, 3).unwrap());
    assert_eq!(game.cell(3, 3).unwrap(), 1);
    assert_eq!(game.current_player(), 2);

    let score = game.score().unwrap();
    assert_eq!(field(&score, "black_count").as_f64(), Some(4.0));
    assert_eq!(field(&score, "white_count").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn off_board_click_is_an_error() {
    let mut game = OthelloGame::new(noop());

    assert!(game.attempt_move(8, 0).is_err());
    assert!(game.cell(0, 9).is_err());
}

#[wasm_bindgen_test]
fn reset_returns_to_start() {
    let mut game = OthelloGame::new(noop());
    game.attempt_move(2, 3).unwrap();

    game.reset();

    assert_eq!(game.current_player(), 1);
    assert!(!game.is_game_over());
    assert_eq!(game.status(), "Black to move");
}

#[wasm_bindgen_test]
fn second_game_reinstalls_panic_hook_harmlessly() {
    let first = OthelloGame::new(noop());
    let second = OthelloGame::new(noop());

    assert_eq!(first.status(), second.status());
}
